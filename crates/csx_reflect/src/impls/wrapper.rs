//! `Box<T>` and `Arc<T>`: transparent wrappers.
//!
//! A wrapper reports the path and type info of the wrapped type, and
//! every view it hands out is the wrapped value's own. Only `ty_id`
//! still names the wrapper; callers that key on type go through
//! `reflect_target` first.

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::info::{ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;

macro_rules! impl_reflect_wrapper {
    ($wrapper:ident) => {
        impl<T: TypePath> TypePath for $wrapper<T> {
            #[inline]
            fn type_path() -> &'static str {
                T::type_path()
            }

            #[inline]
            fn type_name() -> &'static str {
                T::type_name()
            }

            #[inline]
            fn type_ident() -> &'static str {
                T::type_ident()
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                T::module_path()
            }

            #[inline]
            fn script_ident() -> &'static str {
                T::script_ident()
            }
        }

        impl<T: Typed> Typed for $wrapper<T> {
            #[inline]
            fn type_info() -> &'static TypeInfo {
                T::type_info()
            }
        }

        impl<T: Reflect + Typed> Reflect for $wrapper<T> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                (**self).reflect_kind()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                (**self).reflect_ref()
            }

            #[inline]
            fn is_default_value(&self) -> bool {
                (**self).is_default_value()
            }

            #[inline]
            fn reflect_target(&self) -> &dyn Reflect {
                (**self).reflect_target()
            }
        }
    };
}

impl_reflect_wrapper!(Box);
impl_reflect_wrapper!(Arc);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::Typed;

    #[test]
    fn wrappers_are_transparent() {
        let boxed = Box::new(5_i32);
        assert!(boxed.reflect_target().is::<i32>());
        assert!(core::ptr::eq(<Box<i32>>::type_info(), i32::type_info()));

        let shared = Arc::new(Box::new(0_u8));
        assert!(shared.reflect_target().is::<u8>());
        assert!(shared.is_default_value());
    }
}
