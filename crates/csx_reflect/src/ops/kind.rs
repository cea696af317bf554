use core::fmt;

use crate::Reflect;
use crate::info::{PrimitiveKind, ReflectKind, ReflectKindError};
use crate::ops::{Array, Enum, List, Map, Nullable, Struct, Tuple};

// -----------------------------------------------------------------------------
// Primitive

/// The value of a scalar, borrowed from its owner where it is text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(&'a str),
}

impl Primitive<'_> {
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Char(_) => PrimitiveKind::Char,
            Self::I8(_) => PrimitiveKind::I8,
            Self::I16(_) => PrimitiveKind::I16,
            Self::I32(_) => PrimitiveKind::I32,
            Self::I64(_) => PrimitiveKind::I64,
            Self::U8(_) => PrimitiveKind::U8,
            Self::U16(_) => PrimitiveKind::U16,
            Self::U32(_) => PrimitiveKind::U32,
            Self::U64(_) => PrimitiveKind::U64,
            Self::F32(_) => PrimitiveKind::F32,
            Self::F64(_) => PrimitiveKind::F64,
            Self::Str(_) => PrimitiveKind::String,
        }
    }
}

impl fmt::Display for Primitive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// A borrowed, kind-specific view of a reflected value.
///
/// Obtained from [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Primitive(Primitive<'a>),
    Nullable(&'a dyn Nullable),
    Enum(&'a dyn Enum),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Tuple(&'a dyn Tuple),
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_view_method {
    ($name:ident : $kind:ident => $ty:ty) => {
        #[doc = concat!("Views the value as `", stringify!($kind), "`.")]
        #[inline]
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                other => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: other.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_view_method!(as_primitive: Primitive => Primitive<'a>);
    impl_view_method!(as_nullable: Nullable => &'a dyn Nullable);
    impl_view_method!(as_enum: Enum => &'a dyn Enum);
    impl_view_method!(as_array: Array => &'a dyn Array);
    impl_view_method!(as_list: List => &'a dyn List);
    impl_view_method!(as_map: Map => &'a dyn Map);
    impl_view_method!(as_tuple: Tuple => &'a dyn Tuple);
    impl_view_method!(as_struct: Struct => &'a dyn Struct);
    impl_view_method!(as_opaque: Opaque => &'a dyn Reflect);

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Nullable(_) => ReflectKind::Nullable,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Tuple(_) => ReflectKind::Tuple,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
