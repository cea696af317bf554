use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use csx_reflect::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// PredefinedType

/// A type spelled with a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Char,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    String,
    Object,
}

impl PredefinedType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Char => "char",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Object => "object",
        }
    }
}

impl From<PrimitiveKind> for PredefinedType {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Bool => Self::Bool,
            PrimitiveKind::Char => Self::Char,
            PrimitiveKind::I8 => Self::SByte,
            PrimitiveKind::I16 => Self::Short,
            PrimitiveKind::I32 => Self::Int,
            PrimitiveKind::I64 => Self::Long,
            PrimitiveKind::U8 => Self::Byte,
            PrimitiveKind::U16 => Self::UShort,
            PrimitiveKind::U32 => Self::UInt,
            PrimitiveKind::U64 => Self::ULong,
            PrimitiveKind::F32 => Self::Float,
            PrimitiveKind::F64 => Self::Double,
            PrimitiveKind::String => Self::String,
        }
    }
}

// -----------------------------------------------------------------------------
// TypeName

/// The spelling of a type in emitted script.
///
/// ```
/// use csx_script::syntax::{PredefinedType, TypeName};
///
/// let name = TypeName::named("Dictionary")
///     .with_arguments([TypeName::Predefined(PredefinedType::String), TypeName::named("Order")]);
/// assert_eq!(name.to_string(), "Dictionary<string, Order>");
///
/// let jagged = TypeName::array(TypeName::Predefined(PredefinedType::Int), [2, 1]);
/// assert_eq!(jagged.to_string(), "int[,][]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeName {
    Predefined(PredefinedType),
    /// `T?`
    Nullable(Box<TypeName>),
    /// An innermost element type and its rank specifiers, outermost
    /// first: `int[,][]` has ranks `[2, 1]`.
    Array {
        element: Box<TypeName>,
        ranks: Vec<usize>,
    },
    /// `(T1, T2, ...)`
    Tuple(Vec<TypeName>),
    /// `Qualifier.Ident<Arguments>`
    Named {
        qualifier: Option<Box<TypeName>>,
        ident: Cow<'static, str>,
        arguments: Vec<TypeName>,
    },
}

impl TypeName {
    #[inline]
    pub fn named(ident: impl Into<Cow<'static, str>>) -> Self {
        Self::Named {
            qualifier: None,
            ident: ident.into(),
            arguments: Vec::new(),
        }
    }

    #[inline]
    pub fn array(element: TypeName, ranks: impl IntoIterator<Item = usize>) -> Self {
        Self::Array {
            element: Box::new(element),
            ranks: ranks.into_iter().collect(),
        }
    }

    /// Replaces the type arguments of a named type; other names are
    /// returned unchanged.
    pub fn with_arguments(mut self, new_arguments: impl IntoIterator<Item = TypeName>) -> Self {
        if let Self::Named { arguments, .. } = &mut self {
            *arguments = new_arguments.into_iter().collect();
        }
        self
    }

    /// Nests a named type inside `outer`; other names are returned
    /// unchanged.
    pub fn with_qualifier(mut self, outer: TypeName) -> Self {
        if let Self::Named { qualifier, .. } = &mut self {
            *qualifier = Some(Box::new(outer));
        }
        self
    }
}

impl From<PredefinedType> for TypeName {
    #[inline]
    fn from(ty: PredefinedType) -> Self {
        Self::Predefined(ty)
    }
}

pub(super) fn write_rank(f: &mut impl fmt::Write, rank: usize) -> fmt::Result {
    f.write_char('[')?;
    for _ in 1..rank {
        f.write_char(',')?;
    }
    f.write_char(']')
}

pub(super) fn write_comma_separated<T: fmt::Display>(
    f: &mut impl fmt::Write,
    items: &[T],
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predefined(ty) => f.write_str(ty.keyword()),
            Self::Nullable(inner) => write!(f, "{inner}?"),
            Self::Array { element, ranks } => {
                write!(f, "{element}")?;
                for &rank in ranks {
                    write_rank(f, rank)?;
                }
                Ok(())
            }
            Self::Tuple(elements) => {
                f.write_str("(")?;
                write_comma_separated(f, elements.as_slice())?;
                f.write_str(")")
            }
            Self::Named {
                qualifier,
                ident,
                arguments,
            } => {
                if let Some(qualifier) = qualifier {
                    write!(f, "{qualifier}.")?;
                }
                f.write_str(ident)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    write_comma_separated(f, arguments.as_slice())?;
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{PredefinedType, TypeName};

    #[test]
    fn nested_generic_names() {
        let outer = TypeName::named("Outer").with_arguments([PredefinedType::Int.into()]);
        let inner = TypeName::named("Inner")
            .with_arguments([PredefinedType::String.into()])
            .with_qualifier(outer);
        assert_eq!(inner.to_string(), "Outer<int>.Inner<string>");
    }

    #[test]
    fn nullable_and_tuple_names() {
        let nullable = TypeName::Nullable(alloc::boxed::Box::new(PredefinedType::Double.into()));
        assert_eq!(nullable.to_string(), "double?");

        let tuple = TypeName::Tuple(vec![PredefinedType::Int.into(), TypeName::named("Guid")]);
        assert_eq!(tuple.to_string(), "(int, Guid)");
    }
}
