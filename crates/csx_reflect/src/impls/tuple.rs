//! Tuples with up to 12 fields, named `ValueTuple` in script.

use csx_utils::range_invoke;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
use crate::info::{Generics, InfoRef, TupleInfo, TypeInfo, TypeParamInfo, TypePath, Typed};
use crate::ops::Tuple;

macro_rules! impl_reflect_tuple {
    (0: []) => {
        impl TypePath for () {
            #[inline]
            fn type_path() -> &'static str {
                "()"
            }

            #[inline]
            fn type_name() -> &'static str {
                "()"
            }

            #[inline]
            fn type_ident() -> &'static str {
                "()"
            }

            #[inline]
            fn script_ident() -> &'static str {
                "ValueTuple"
            }
        }

        impl Typed for () {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Tuple(TupleInfo::new::<Self>(&[])))
            }
        }

        impl Tuple for () {
            #[inline]
            fn field(&self, _index: usize) -> Option<&dyn Reflect> {
                None
            }

            #[inline]
            fn field_len(&self) -> usize {
                0
            }
        }

        impl Reflect for () {
            crate::reflection::impl_reflect_cast_fn!(Tuple);

            #[inline]
            fn is_default_value(&self) -> bool {
                true
            }
        }
    };
    ($num:literal : [$($index:tt : $name:ident),*]) => {
        impl<$($name: TypePath),*> TypePath for ($($name,)*) {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let parts = [$($name::type_path()),*];
                    concat(&["(", &parts.join(", "), if $num == 1 { ",)" } else { ")" }])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let parts = [$($name::type_name()),*];
                    concat(&["(", &parts.join(", "), if $num == 1 { ",)" } else { ")" }])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                "(..)"
            }

            #[inline]
            fn script_ident() -> &'static str {
                "ValueTuple"
            }
        }

        impl<$($name: Reflect + Typed),*> Typed for ($($name,)*) {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let fields = [$(InfoRef::of::<$name>()),*];
                    let generics = Generics::from_params([
                        $(TypeParamInfo::new::<$name>(concat!("T", stringify!($index)))),*
                    ]);
                    TypeInfo::Tuple(TupleInfo::new::<Self>(&fields).with_generics(generics))
                })
            }
        }

        impl<$($name: Reflect + Typed),*> Tuple for ($($name,)*) {
            #[inline]
            fn field(&self, index: usize) -> Option<&dyn Reflect> {
                match index {
                    $($index => Some(&self.$index as &dyn Reflect),)*
                    _ => None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                $num
            }
        }

        impl<$($name: Reflect + Typed),*> Reflect for ($($name,)*) {
            crate::reflection::impl_reflect_cast_fn!(Tuple);

            #[inline]
            fn is_default_value(&self) -> bool {
                true $(&& self.$index.is_default_value())*
            }
        }
    };
}

range_invoke!(impl_reflect_tuple, 12);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn tuple_paths() {
        assert_eq!(<(u8,)>::type_path(), "(u8,)");
        assert_eq!(<(u8, bool)>::type_name(), "(u8, bool)");
        assert_eq!(<(u8, bool)>::script_ident(), "ValueTuple");
    }

    #[test]
    fn tuple_fields() {
        let value = (1_u8, String::from("a"), 'c');
        let view = value.reflect_ref().as_tuple().unwrap();
        assert_eq!(view.field_len(), 3);
        assert_eq!(view.field(2).and_then(|f| f.downcast_ref::<char>()), Some(&'c'));
        assert!(view.field(3).is_none());

        let info = <(u8, String, char)>::type_info();
        let names: alloc::vec::Vec<_> = info.generics().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["T0", "T1", "T2"]);
    }

    #[test]
    fn tuple_default_needs_all_fields() {
        assert!((0_u8, false).is_default_value());
        assert!(!(0_u8, true).is_default_value());
        assert!(().is_default_value());
    }
}
