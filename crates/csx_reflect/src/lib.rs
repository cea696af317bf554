#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `csx_reflect`, which must also resolve
// inside the crate itself.
extern crate self as csx_reflect;

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use csx_reflect_derive as derive;
pub use reflection::Reflect;
