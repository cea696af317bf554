//! Items referenced by generated code. Not public API.

pub use ::alloc::vec::Vec;
pub use ::bitflags;

pub use crate::impls::concat as __concat;
