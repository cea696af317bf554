//! The parsed shape of a `derive(Reflect)` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_enum;
mod reflect_meta;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use attributes::{FieldAttributes, TypeAttributes, VariantAttributes};
pub(crate) use reflect_enum::ReflectEnum;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
