use core::fmt;

use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The scalar kinds that are written as literals.
///
/// `isize` and `usize` report `I64` and `U64`; `String` and `&'static str`
/// both report `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
}

impl PrimitiveKind {
    /// Whether the kind is a copyable scalar rather than text.
    #[inline]
    pub const fn is_value_type(self) -> bool {
        !matches!(self, Self::String)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Type info of a scalar type.
#[derive(Clone, Debug)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
}

impl PrimitiveInfo {
    crate::info::impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath>(kind: PrimitiveKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    #[inline]
    pub const fn primitive_kind(&self) -> PrimitiveKind {
        self.kind
    }
}
