use crate::info::{Generics, InfoRef, Type, TypePath, Typed};

/// Type info of a growable sequence (`Vec`, `VecDeque`, sets).
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    generics: Generics,
    element: InfoRef,
}

impl ListInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    #[inline]
    pub const fn new<TList: TypePath, TElement: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            generics: Generics::new(),
            element: InfoRef::of::<TElement>(),
        }
    }

    #[inline]
    pub const fn element(&self) -> &InfoRef {
        &self.element
    }
}
