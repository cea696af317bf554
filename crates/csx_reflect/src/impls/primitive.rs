//! Scalars and text.

use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, PrimitiveKind, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{Primitive, ReflectRef};

macro_rules! impl_reflect_primitive {
    ($ty:ty, $path:literal, $ident:literal, $script:literal, $kind:ident => |$v:ident| $view:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $ident
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn script_ident() -> &'static str {
                $script
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::$kind))
                })
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Primitive
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $v = self;
                ReflectRef::Primitive($view)
            }

            #[inline]
            fn is_default_value(&self) -> bool {
                *self == <$ty as Default>::default()
            }

            #[inline]
            fn reflect_target(&self) -> &dyn Reflect {
                self
            }
        }
    };
}

impl_reflect_primitive!(bool, "bool", "bool", "bool", Bool => |v| Primitive::Bool(*v));
impl_reflect_primitive!(char, "char", "char", "char", Char => |v| Primitive::Char(*v));
impl_reflect_primitive!(i8, "i8", "i8", "sbyte", I8 => |v| Primitive::I8(*v));
impl_reflect_primitive!(i16, "i16", "i16", "short", I16 => |v| Primitive::I16(*v));
impl_reflect_primitive!(i32, "i32", "i32", "int", I32 => |v| Primitive::I32(*v));
impl_reflect_primitive!(i64, "i64", "i64", "long", I64 => |v| Primitive::I64(*v));
impl_reflect_primitive!(u8, "u8", "u8", "byte", U8 => |v| Primitive::U8(*v));
impl_reflect_primitive!(u16, "u16", "u16", "ushort", U16 => |v| Primitive::U16(*v));
impl_reflect_primitive!(u32, "u32", "u32", "uint", U32 => |v| Primitive::U32(*v));
impl_reflect_primitive!(u64, "u64", "u64", "ulong", U64 => |v| Primitive::U64(*v));
impl_reflect_primitive!(f32, "f32", "f32", "float", F32 => |v| Primitive::F32(*v));
impl_reflect_primitive!(f64, "f64", "f64", "double", F64 => |v| Primitive::F64(*v));
impl_reflect_primitive!(isize, "isize", "isize", "long", I64 => |v| Primitive::I64(*v as i64));
impl_reflect_primitive!(usize, "usize", "usize", "ulong", U64 => |v| Primitive::U64(*v as u64));

// -----------------------------------------------------------------------------
// Text

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }

    #[inline]
    fn script_ident() -> &'static str {
        "string"
    }
}

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::String)))
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Primitive
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Primitive(Primitive::Str(self))
    }

    #[inline]
    fn is_default_value(&self) -> bool {
        false
    }

    #[inline]
    fn reflect_target(&self) -> &dyn Reflect {
        self
    }
}

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }

    #[inline]
    fn script_ident() -> &'static str {
        "string"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::String)))
    }
}

impl Reflect for &'static str {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Primitive
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Primitive(Primitive::Str(self))
    }

    #[inline]
    fn is_default_value(&self) -> bool {
        false
    }

    #[inline]
    fn reflect_target(&self) -> &dyn Reflect {
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::Primitive;

    #[test]
    fn widened_sizes() {
        let value: &dyn Reflect = &-3_isize;
        assert_eq!(value.reflect_ref().as_primitive(), Ok(Primitive::I64(-3)));
        let value: &dyn Reflect = &7_usize;
        assert_eq!(value.reflect_ref().as_primitive(), Ok(Primitive::U64(7)));
    }

    #[test]
    fn default_values() {
        assert!(0_u16.is_default_value());
        assert!(0.0_f64.is_default_value());
        assert!('\0'.is_default_value());
        assert!(!true.is_default_value());
        assert!(!String::new().is_default_value());
    }
}
