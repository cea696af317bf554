use crate::info::{Generics, InfoRef, Type, TypePath, Typed};

/// Type info of a fixed-size, possibly multi-dimensional array.
///
/// `rank` is the number of dimensions of *this* array. A jagged array is
/// an array whose element is itself an array, so `[[u8; 2]; 3]` has rank 1
/// with an element of rank 1.
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    generics: Generics,
    element: InfoRef,
    rank: usize,
}

impl ArrayInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    #[inline]
    pub const fn new<TArray: TypePath, TElement: Typed>(rank: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            generics: Generics::new(),
            element: InfoRef::of::<TElement>(),
            rank,
        }
    }

    #[inline]
    pub const fn element(&self) -> &InfoRef {
        &self.element
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        self.rank
    }
}
