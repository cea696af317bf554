//! Hash containers used across the workspace, built on *hashbrown* and *foldhash*.
//!
//! - [`FixedHashState`]: deterministic hashing with a fixed seed.
//! - [`NoOpHashState`]: passes pre-hashed `u64` keys (such as `TypeId`) through untouched.
//! - [`HashMap`] / [`HashSet`]: *hashbrown* containers defaulting to [`FixedHashState`].

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] unless told otherwise.
///
/// Iteration order depends only on the inserted keys, never on process state.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] unless told otherwise.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
