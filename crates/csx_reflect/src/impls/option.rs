use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{NullableInfo, TypeInfo, TypePath, Typed};
use crate::ops::Nullable;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }

    #[inline]
    fn script_ident() -> &'static str {
        "Nullable"
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Nullable(NullableInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Nullable for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Nullable);

    #[inline]
    fn is_default_value(&self) -> bool {
        self.is_none()
    }
}
