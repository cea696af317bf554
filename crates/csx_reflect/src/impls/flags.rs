/// Reflects a *bitflags* type as a flag enumeration.
///
/// Members come from `Flags::FLAGS` in declaration order; the
/// discriminant is the raw bit pattern. The type must be defined in the
/// calling crate.
///
/// ```
/// use csx_reflect::impl_reflect_flags;
/// use csx_reflect::ops::Enum;
/// use csx_reflect::info::Typed;
///
/// bitflags::bitflags! {
///     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
///     pub struct Access: u8 {
///         const READ = 1;
///         const WRITE = 2;
///         const ALL = 3;
///     }
/// }
///
/// impl_reflect_flags!(Access);
///
/// let info = Access::type_info().as_enum().unwrap();
/// assert!(info.is_flags());
/// assert_eq!(info.members().len(), 3);
/// assert_eq!((Access::READ | Access::WRITE).discriminant(), 3);
/// ```
#[macro_export]
macro_rules! impl_reflect_flags {
    ($ty:ident $(=> $script:literal)?) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty))
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }

            $(
                #[inline]
                fn script_ident() -> &'static str {
                    $script
                }
            )?
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let members: $crate::__macro_exports::Vec<$crate::info::EnumMember> =
                        <$ty as $crate::__macro_exports::bitflags::Flags>::FLAGS
                            .iter()
                            .map(|flag| {
                                $crate::info::EnumMember::new(flag.name(), flag.value().bits() as i128)
                            })
                            .collect();
                    $crate::info::TypeInfo::Enum(
                        $crate::info::EnumInfo::new::<Self>(&members).with_flags(true),
                    )
                })
            }
        }

        impl $crate::ops::Enum for $ty {
            #[inline]
            fn discriminant(&self) -> i128 {
                self.bits() as i128
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Enum
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Enum(self)
            }

            #[inline]
            fn is_default_value(&self) -> bool {
                self.bits() == 0
            }

            #[inline]
            fn reflect_target(&self) -> &dyn $crate::Reflect {
                self
            }
        }
    };
}
