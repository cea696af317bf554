//! [`FixedHashState`] and [`NoOpHashState`].

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const SEED: FixedState = FixedState::with_seed(0x2C5A_91E3_7D04_B6F1);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Builds *foldhash* hashers from one fixed seed.
///
/// The same input always hashes to the same value, so maps keyed by names
/// iterate in a reproducible order between runs.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use csx_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("Name"), FixedHashState.hash_one("Name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that keeps the last `u64` written as its output.
///
/// Byte writes are folded in so that `write_u32(n)` and `write_u64(n)`
/// agree when called once.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s, for keys that are already well distributed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use csx_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn fixed_state_is_stable() {
        let a = FixedHashState.hash_one(("Point", 3_u32));
        let b = FixedHashState.hash_one(("Point", 3_u32));
        assert_eq!(a, b);
        assert_ne!(a, FixedHashState.hash_one(("Point", 4_u32)));
    }

    #[test]
    fn noop_state_passes_u64() {
        assert_eq!(NoOpHashState.hash_one(0xDEAD_u64), 0xDEAD);
        assert_eq!(NoOpHashState.hash_one(10_u32), 10);
    }
}
