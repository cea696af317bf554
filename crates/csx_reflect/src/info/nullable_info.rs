use crate::info::{Generics, InfoRef, Type, TypeParamInfo, TypePath, Typed};

/// Type info of an optional value (`Option<T>`).
#[derive(Clone, Debug)]
pub struct NullableInfo {
    ty: Type,
    generics: Generics,
    inner: InfoRef,
}

impl NullableInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    pub fn new<TSelf: TypePath, T: Typed>() -> Self {
        Self {
            ty: Type::of::<TSelf>(),
            generics: Generics::from_params([TypeParamInfo::new::<T>("T")]),
            inner: InfoRef::of::<T>(),
        }
    }

    /// The wrapped type.
    #[inline]
    pub const fn inner(&self) -> &InfoRef {
        &self.inner
    }
}
