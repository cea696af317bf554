#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod api;
mod error;
mod options;
mod scope;

pub mod registry;
pub mod serializer;
pub mod syntax;
pub mod type_syntax;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    //! Items referenced by generated code. Not public API.

    pub use ::alloc::sync::Arc;
    #[cfg(feature = "auto_register")]
    pub use ::inventory;
}

pub use api::{EvaluateOptions, Evaluator, deserialize, serialize, serialize_script, serialize_with};
pub use error::{DeserializeError, SerializeError};
pub use options::SerializerOptions;
pub use scope::EncodeScope;
