//! Reflection for standard and third-party types, plus the storage
//! helpers hand-written implementations need.
//!
//! - [`concat`]: joins string parts, used to build generic type paths.
//! - [`NonGenericTypeInfoCell`]: `TypeInfo` storage for non-generic types.
//! - [`GenericTypePathCell`] / [`GenericTypeInfoCell`]: per-instantiation
//!   storage for generic types.
//!
//! ## Implemented
//!
//! - `bool`, `char`, `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//! - `String`, `&'static str`
//! - `Option<T>`; `Box<T>` and `Arc<T>` (transparent)
//! - `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>`, `HashSet<T, S>`
//! - `BTreeMap<K, V>`, `HashMap<K, V, S>` (std and *hashbrown*)
//! - tuples with up to 12 fields
//! - `[T; N]`, [`MultiArray<T, R>`](crate::ops::MultiArray)
//! - `core::time::Duration`, [`TypeHandle`](crate::info::TypeHandle)
//! - `uuid::Uuid` (feature `uuid`)
//! - *chrono* `NaiveDateTime`, `DateTime<Utc>`, `DateTime<FixedOffset>`,
//!   `TimeDelta` (feature `chrono`)
//! - *bitflags* types through [`impl_reflect_flags!`](crate::impl_reflect_flags)

// -----------------------------------------------------------------------------
// Modules

mod array;
mod cell;
mod collection;
mod flags;
mod opaque;
mod option;
mod primitive;
mod tuple;
mod wrapper;

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "uuid")]
mod uuid;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

#[cfg(feature = "chrono")]
pub use self::chrono::SECONDS_BEFORE_UNIX_EPOCH;

/// Concatenates string parts into one allocation.
///
/// ```
/// use csx_reflect::impls;
///
/// let s = impls::concat(&["shop", "::", "Order", "<", "u8", ">"]);
/// assert_eq!(s, "shop::Order<u8>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> ::alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for part in parts {
        res.push_str(part);
    }
    res
}
