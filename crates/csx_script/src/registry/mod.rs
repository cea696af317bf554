//! Mapping from runtime types to their serializers.
//!
//! - [`SerializerRegistry`]: caches one serializer per type and creates
//!   missing ones on first use.
//! - [`SerializerFactory`]: a pluggable rule consulted before the
//!   structural fallbacks.
//! - [`submit_factory!`](crate::submit_factory): registers a factory at
//!   link time, picked up by [`SerializerRegistry::auto_register`].
//!
//! ## Resolution order
//!
//! A type seen for the first time is matched against, in order:
//!
//! 1. primitives, `Option<T>` and enums;
//! 2. well-known value types: `Duration`, `TypeHandle`, and behind their
//!    features `Uuid` and the chrono date/time types;
//! 3. arrays, then tuples;
//! 4. registered factories, in order;
//! 5. maps, then lists;
//! 6. structs, through their properties.
//!
//! A struct that cannot be constructed without arguments fails with
//! [`SerializeError::Construction`](crate::SerializeError::Construction)
//! before step 5. Serializers installed with
//! [`SerializerRegistry::insert`] bypass the whole list.

// -----------------------------------------------------------------------------
// Modules

mod factory;
mod known;
mod serializer_registry;

// -----------------------------------------------------------------------------
// Exports

pub use factory::{FactoryRegistration, SerializerFactory};
pub use serializer_registry::SerializerRegistry;
