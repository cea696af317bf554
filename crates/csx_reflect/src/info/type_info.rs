use core::{error, fmt};

use crate::info::{ArrayInfo, EnumInfo, Generics, InfoRef, ListInfo, MapInfo};
use crate::info::{NullableInfo, OpaqueInfo, PrimitiveInfo, StructInfo, TupleInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type.
///
/// Each kind has a matching [`TypeInfo`] variant and a matching
/// [`ReflectRef`](crate::ops::ReflectRef) view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Nullable,
    Enum,
    Array,
    List,
    Map,
    Tuple,
    Struct,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primitive => "Primitive",
            Self::Nullable => "Nullable",
            Self::Enum => "Enum",
            Self::Array => "Array",
            Self::List => "List",
            Self::Map => "Map",
            Self::Tuple => "Tuple",
            Self::Struct => "Struct",
            Self::Opaque => "Opaque",
        };
        f.pad(name)
    }
}

/// Error returned when a [`TypeInfo`] or a reflected value is not of the
/// expected [`ReflectKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Runtime description of a reflected type: the Type Descriptor the
/// script engine dispatches on.
///
/// Obtained through [`Typed::type_info`] when the type is known, or
/// [`DynamicTyped::reflect_type_info`] from a `&dyn Reflect`. Both return
/// `&'static TypeInfo`, so descriptors can be compared by address or by
/// [`ty_id`](Self::ty_id).
///
/// ```
/// use csx_reflect::info::{PrimitiveKind, ReflectKind, Typed};
///
/// let info = <Option<u16>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Nullable);
///
/// let inner = info.as_nullable().unwrap().inner().type_info();
/// assert_eq!(inner.as_primitive().unwrap().primitive_kind(), PrimitiveKind::U16);
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Nullable(NullableInfo),
    Enum(EnumInfo),
    Array(ArrayInfo),
    List(ListInfo),
    Map(MapInfo),
    Tuple(TupleInfo),
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Views this info as [`", stringify!($info), "`].")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

static NO_GENERICS: Generics = Generics::new();

impl TypeInfo {
    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_nullable: Nullable => NullableInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_tuple: Tuple => TupleInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Nullable(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Tuple(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

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

    /// All type arguments, declaring type's first. Primitives have none.
    pub fn generics(&self) -> &Generics {
        match self {
            Self::Primitive(_) => &NO_GENERICS,
            Self::Nullable(info) => info.generics(),
            Self::Enum(info) => info.generics(),
            Self::Array(info) => info.generics(),
            Self::List(info) => info.generics(),
            Self::Map(info) => info.generics(),
            Self::Tuple(info) => info.generics(),
            Self::Struct(info) => info.generics(),
            Self::Opaque(info) => info.generics(),
        }
    }

    /// The type this one is nested in, for structs and enums that record one.
    pub const fn declaring(&self) -> Option<&InfoRef> {
        match self {
            Self::Struct(info) => info.declaring(),
            Self::Enum(info) => info.declaring(),
            _ => None,
        }
    }

    /// Whether values of the type are copied rather than referenced, and
    /// therefore have a non-null default.
    pub fn is_value_type(&self) -> bool {
        match self {
            Self::Primitive(info) => info.primitive_kind().is_value_type(),
            Self::Enum(_) | Self::Tuple(_) => true,
            Self::Struct(info) => info.is_value_type(),
            Self::Opaque(info) => info.is_value_type(),
            Self::Nullable(_) | Self::Array(_) | Self::List(_) | Self::Map(_) => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::ReflectKind;
    use crate::info::{PrimitiveKind, Typed};

    #[test]
    fn kinds_of_builtin_types() {
        assert_eq!(i32::type_info().kind(), ReflectKind::Primitive);
        assert_eq!(String::type_info().kind(), ReflectKind::Primitive);
        assert_eq!(<Vec<i32>>::type_info().kind(), ReflectKind::List);
        assert_eq!(<[u8; 4]>::type_info().kind(), ReflectKind::Array);
        assert_eq!(<(u8, char)>::type_info().kind(), ReflectKind::Tuple);
    }

    #[test]
    fn casts_report_mismatch() {
        let info = <Vec<i32>>::type_info();
        let err = info.as_map().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Map);
        assert_eq!(err.received, ReflectKind::List);

        let element = info.as_list().unwrap().element().type_info();
        assert_eq!(
            element.as_primitive().unwrap().primitive_kind(),
            PrimitiveKind::I32
        );
    }

    #[test]
    fn value_type_classification() {
        assert!(u8::type_info().is_value_type());
        assert!(!String::type_info().is_value_type());
        assert!(!<Option<u8>>::type_info().is_value_type());
        assert!(!<Vec<u8>>::type_info().is_value_type());
    }
}
