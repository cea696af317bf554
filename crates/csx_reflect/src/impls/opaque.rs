//! Types encoded through fixed recipes rather than by their content.

use core::time::Duration;

use crate::Reflect;
use crate::info::TypeHandle;

/// Implements `TypePath`, `Typed` and `Reflect` for an opaque type.
///
/// `|v| expr` decides whether a value is the type's zero value.
macro_rules! impl_reflect_opaque {
    (
        $ty:ty, $module:literal, $ident:literal => $script:literal,
        value_type = $value_type:literal,
        default = |$v:ident| $is_default:expr $(,)?
    ) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!($module, "::", $ident)
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
            fn module_path() -> Option<&'static str> {
                Some($module)
            }

            #[inline]
            fn script_ident() -> &'static str {
                $script
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque(
                        $crate::info::OpaqueInfo::new::<Self>().with_value_type($value_type),
                    )
                })
            }
        }

        impl $crate::Reflect for $ty {
            $crate::reflection::impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn is_default_value(&self) -> bool {
                let $v = self;
                $is_default
            }
        }
    };
}

pub(crate) use impl_reflect_opaque;

impl_reflect_opaque!(
    Duration, "core::time", "Duration" => "TimeSpan",
    value_type = true,
    default = |v| v.is_zero(),
);

impl_reflect_opaque!(
    TypeHandle, "csx_reflect::info", "TypeHandle" => "Type",
    value_type = false,
    default = |_v| false,
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::{TypeHandle, TypePath, Typed};

    #[test]
    fn opaque_value_types() {
        assert!(Duration::type_info().is_value_type());
        assert!(!<TypeHandle as Typed>::type_info().is_value_type());
        assert_eq!(Duration::script_ident(), "TimeSpan");
        assert!(Duration::ZERO.is_default_value());
        assert!(!TypeHandle::of::<u8>().is_default_value());
    }
}
