//! Runtime type descriptions.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable names, including the
//!   identifier a type goes by in emitted script.
//! - [`Type`]: a `TypeId` plus its [`TypePathTable`].
//! - [`TypeInfo`]: one variant per [`ReflectKind`]:
//!     - [`PrimitiveInfo`]: scalars and text, tagged with a [`PrimitiveKind`].
//!     - [`NullableInfo`]: `Option<T>`.
//!     - [`EnumInfo`]: field-less enums and bit flags, as [`EnumMember`]s.
//!     - [`ArrayInfo`]: fixed-size arrays with a rank.
//!     - [`ListInfo`]: sequences and sets.
//!     - [`MapInfo`]: key-value containers.
//!     - [`TupleInfo`]: tuples.
//!     - [`StructInfo`]: objects with [`PropertyInfo`]s and an optional base type.
//!     - [`OpaqueInfo`]: types handled by fixed recipes.
//! - [`InfoRef`]: a lazily resolved link between descriptors.
//! - [`Generics`]: instantiated type arguments.
//! - [`Typed`] / [`DynamicTyped`]: access to a type's `TypeInfo`.
//! - [`TypeHandle`]: a reflected value naming a type.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod enum_info;
mod generics;
mod info_ref;
mod list_info;
mod map_info;
mod nullable_info;
mod opaque_info;
mod primitive_info;
mod property_info;
mod struct_info;
mod tuple_info;
mod type_handle;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use generics::impl_generic_fn;
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use enum_info::{EnumInfo, EnumMember};
pub use generics::{Generics, TypeParamInfo};
pub use info_ref::InfoRef;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use nullable_info::NullableInfo;
pub use opaque_info::OpaqueInfo;
pub use primitive_info::{PrimitiveInfo, PrimitiveKind};
pub use property_info::{PropertyFlags, PropertyInfo};
pub use struct_info::{Ancestors, StructInfo};
pub use tuple_info::TupleInfo;
pub use type_handle::TypeHandle;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
