//! Read-only views over reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) returns a
//! [`ReflectRef`], one variant per [`ReflectKind`](crate::info::ReflectKind),
//! each holding the matching sub-trait object:
//!
//! - [`Primitive`]: scalar and text values, copied out.
//! - [`Nullable`]: `Option<T>`.
//! - [`Enum`]: field-less enums and bit flags.
//! - [`Array`]: `[T; N]` and [`MultiArray`].
//! - [`List`]: sequences and sets.
//! - [`Map`]: key-value containers.
//! - [`Tuple`]: tuples.
//! - [`Struct`]: objects with named properties.

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod enum_ops;
mod kind;
mod list_ops;
mod map_ops;
mod nullable_ops;
mod struct_ops;
mod tuple_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{Primitive, ReflectRef};

pub use array_ops::{Array, MultiArray, ShapeError};
pub use enum_ops::Enum;
pub use list_ops::List;
pub use map_ops::Map;
pub use nullable_ops::Nullable;
pub use struct_ops::Struct;
pub use tuple_ops::Tuple;
