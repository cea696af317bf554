//! Sequences, sets and maps.
//!
//! Hash-based containers carry their hasher in the type path, but only
//! the element (or key and value) types are recorded as generics: the
//! script types they map to take no hasher parameter.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};

use csx_utils::hash::hashbrown::{HashMap as HashbrownMap, HashSet as HashbrownSet};
use csx_utils::hash::{FixedHashState, NoOpHashState};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
use crate::info::{Generics, ListInfo, MapInfo, OpaqueInfo, TypeInfo, TypeParamInfo};
use crate::info::{TypePath, Typed};
use crate::ops::{List, Map};

// -----------------------------------------------------------------------------
// Hasher states

macro_rules! impl_type_path_hasher {
    ($ty:ty, $module:literal, $ident:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                concat!($module, "::", $ident)
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
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }
    };
}

impl_type_path_hasher!(std::hash::RandomState, "std::hash", "RandomState");
impl_type_path_hasher!(FixedHashState, "csx_utils::hash", "FixedHashState");
impl_type_path_hasher!(NoOpHashState, "csx_utils::hash", "NoOpHashState");

// -----------------------------------------------------------------------------
// Sequences and sets

macro_rules! impl_reflect_list {
    (
        $ty:ident<T $(, $state:ident)?> as $ident:literal,
        $module:literal,
        $script:literal
        $(, where T: $($bound:path),+)?
    ) => {
        impl<T: TypePath $(, $state: TypePath)?> TypePath for $ty<T $(, $state)?> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $module, "::", $ident, "<", T::type_path()
                        $(, ", ", $state::type_path())?, ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $ident, "<", T::type_name()
                        $(, ", ", $state::type_name())?, ">",
                    ])
                })
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

        impl<T $(, $state)?> Typed for $ty<T $(, $state)?>
        where
            T: Reflect + Typed $($(+ $bound)+)?,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::List(
                        ListInfo::new::<Self, T>()
                            .with_generics(Generics::from_params([TypeParamInfo::new::<T>("T")])),
                    )
                })
            }
        }

        impl<T $(, $state)?> List for $ty<T $(, $state)?>
        where
            T: Reflect + Typed $($(+ $bound)+)?,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty<T $(, $state)?>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new(IntoIterator::into_iter(self).map(|item| item as &dyn Reflect))
            }
        }

        impl<T $(, $state)?> Reflect for $ty<T $(, $state)?>
        where
            T: Reflect + Typed $($(+ $bound)+)?,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            crate::reflection::impl_reflect_cast_fn!(List);

            #[inline]
            fn is_default_value(&self) -> bool {
                false
            }
        }
    };
}

impl_reflect_list!(Vec<T> as "Vec", "alloc::vec", "List");
impl_reflect_list!(VecDeque<T> as "VecDeque", "alloc::collections", "List");
impl_reflect_list!(BTreeSet<T> as "BTreeSet", "alloc::collections", "SortedSet");
impl_reflect_list!(HashSet<T, S> as "HashSet", "std::collections", "HashSet", where T: Eq, Hash);
impl_reflect_list!(HashbrownSet<T, S> as "HashSet", "hashbrown", "HashSet", where T: Eq, Hash);

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_reflect_map {
    (
        $ty:ident<K, V $(, $state:ident)?> as $ident:literal,
        $module:literal,
        $script:literal
        $(, where K: $($bound:path),+)?
    ) => {
        impl<K: TypePath, V: TypePath $(, $state: TypePath)?> TypePath for $ty<K, V $(, $state)?> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $module, "::", $ident, "<", K::type_path(), ", ", V::type_path()
                        $(, ", ", $state::type_path())?, ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $ident, "<", K::type_name(), ", ", V::type_name()
                        $(, ", ", $state::type_name())?, ">",
                    ])
                })
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

        impl<K, V $(, $state)?> Typed for $ty<K, V $(, $state)?>
        where
            K: Reflect + Typed $($(+ $bound)+)?,
            V: Reflect + Typed,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Map(MapInfo::new::<Self, K, V>().with_generics(Generics::from_params([
                        TypeParamInfo::new::<K>("TKey"),
                        TypeParamInfo::new::<V>("TValue"),
                    ])))
                })
            }
        }

        impl<K, V $(, $state)?> Map for $ty<K, V $(, $state)?>
        where
            K: Reflect + Typed $($(+ $bound)+)?,
            V: Reflect + Typed,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty<K, V $(, $state)?>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    <$ty<K, V $(, $state)?>>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }
        }

        impl<K, V $(, $state)?> Reflect for $ty<K, V $(, $state)?>
        where
            K: Reflect + Typed $($(+ $bound)+)?,
            V: Reflect + Typed,
            $($state: TypePath + BuildHasher + Send + Sync,)?
        {
            crate::reflection::impl_reflect_cast_fn!(Map);

            #[inline]
            fn is_default_value(&self) -> bool {
                false
            }
        }
    };
}

impl_reflect_map!(BTreeMap<K, V> as "BTreeMap", "alloc::collections", "SortedDictionary");
impl_reflect_map!(HashMap<K, V, S> as "HashMap", "std::collections", "Dictionary", where K: Eq, Hash);
impl_reflect_map!(HashbrownMap<K, V, S> as "HashMap", "hashbrown", "Dictionary", where K: Eq, Hash);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use csx_utils::hash::HashMap;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn script_identifiers() {
        assert_eq!(<Vec<u8>>::script_ident(), "List");
        assert_eq!(<BTreeMap<u8, u8>>::script_ident(), "SortedDictionary");
        assert_eq!(<HashMap<u8, u8>>::script_ident(), "Dictionary");
        assert_eq!(
            <HashMap<u8, String>>::type_path(),
            "hashbrown::HashMap<u8, alloc::string::String, csx_utils::hash::FixedHashState>"
        );
    }

    #[test]
    fn map_generics_skip_hasher() {
        let info = <HashMap<u8, bool>>::type_info();
        assert_eq!(info.generics().len(), 2);
    }

    #[test]
    fn lists_iterate_in_order() {
        let list = vec![3_u8, 1, 2];
        let view = list.reflect_ref().as_list().unwrap();
        let items: Vec<u8> = view
            .iter()
            .filter_map(|item| item.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(items, [3, 1, 2]);
    }

    #[test]
    fn every_list_kind_iterates() {
        fn items(value: &dyn Reflect) -> Vec<i16> {
            let view = value.reflect_ref().as_list().unwrap();
            assert_eq!(view.len(), view.iter().count());
            view.iter()
                .filter_map(|item| item.downcast_ref::<i16>().copied())
                .collect()
        }

        let deque: VecDeque<i16> = VecDeque::from([4, -4]);
        let sorted: BTreeSet<i16> = BTreeSet::from([9, 2, 5]);
        assert_eq!(items(&vec![7_i16]), [7]);
        assert!(items(&Vec::<i16>::new()).is_empty());
        assert_eq!(items(&deque), [4, -4]);
        assert_eq!(items(&sorted), [2, 5, 9]);
    }
}
