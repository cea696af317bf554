//! `[T; N]` (rank one) and [`MultiArray`] (rank `R`).

use alloc::string::ToString;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ArrayInfo, Generics, TypeInfo, TypeParamInfo, TypePath, Typed};
use crate::ops::{Array, MultiArray};

// -----------------------------------------------------------------------------
// [T; N]

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_path(), "; ", &N.to_string(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_name(), "; ", &N.to_string(), "]"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "[T; N]"
    }

    #[inline]
    fn script_ident() -> &'static str {
        "Array"
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Array(
                ArrayInfo::new::<Self, T>(1)
                    .with_generics(Generics::from_params([TypeParamInfo::new::<T>("T")])),
            )
        })
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn rank(&self) -> usize {
        1
    }

    #[inline]
    fn length(&self, dim: usize) -> usize {
        if dim == 0 { N } else { 0 }
    }

    fn get(&self, indices: &[isize]) -> Option<&dyn Reflect> {
        match indices {
            [index] => {
                let index = usize::try_from(*index).ok()?;
                self.as_slice().get(index).map(|item| item as &dyn Reflect)
            }
            _ => None,
        }
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);

    #[inline]
    fn is_default_value(&self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// MultiArray

impl<T: TypePath, const R: usize> TypePath for MultiArray<T, R> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "csx_reflect::ops::MultiArray<",
                T::type_path(),
                ", ",
                &R.to_string(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["MultiArray<", T::type_name(), ", ", &R.to_string(), ">"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "MultiArray"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("csx_reflect::ops")
    }

    #[inline]
    fn script_ident() -> &'static str {
        "Array"
    }
}

impl<T: Reflect + Typed, const R: usize> Typed for MultiArray<T, R> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Array(
                ArrayInfo::new::<Self, T>(R)
                    .with_generics(Generics::from_params([TypeParamInfo::new::<T>("T")])),
            )
        })
    }
}

impl<T: Reflect + Typed, const R: usize> Reflect for MultiArray<T, R> {
    crate::reflection::impl_reflect_cast_fn!(Array);

    #[inline]
    fn is_default_value(&self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::MultiArray;

    #[test]
    fn fixed_arrays_have_rank_one() {
        let value = [[1_u8, 2], [3, 4], [5, 6]];
        let view = value.reflect_ref().as_array().unwrap();
        assert_eq!(view.rank(), 1);
        assert_eq!(view.length(0), 3);

        let inner = view.get(&[2]).unwrap().reflect_ref().as_array().unwrap();
        assert_eq!(inner.get(&[1]).and_then(|v| v.downcast_ref::<u8>()), Some(&6));
        assert!(view.get(&[3]).is_none());
        assert!(view.get(&[-1]).is_none());
        assert_eq!(<[u8; 2]>::type_path(), "[u8; 2]");
    }

    #[test]
    fn multi_array_rank_and_bounds() {
        let grid = MultiArray::new([2, 2], vec![1_i32, 2, 3, 4])
            .unwrap()
            .with_lower_bounds([1, 0]);
        let view = grid.reflect_ref().as_array().unwrap();
        assert_eq!(view.rank(), 2);
        assert_eq!(view.lower_bound(0), 1);
        assert_eq!(view.get(&[2, 1]).and_then(|v| v.downcast_ref::<i32>()), Some(&4));
        assert_eq!(
            <MultiArray<i32, 2>>::type_info().as_array().unwrap().rank(),
            2
        );
    }
}
