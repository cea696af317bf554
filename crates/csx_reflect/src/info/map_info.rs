use crate::info::{Generics, InfoRef, Type, TypePath, Typed};

/// Type info of a key-value container (`HashMap`, `BTreeMap`).
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    generics: Generics,
    key: InfoRef,
    value: InfoRef,
}

impl MapInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    #[inline]
    pub const fn new<TMap: TypePath, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            generics: Generics::new(),
            key: InfoRef::of::<TKey>(),
            value: InfoRef::of::<TValue>(),
        }
    }

    #[inline]
    pub const fn key(&self) -> &InfoRef {
        &self.key
    }

    #[inline]
    pub const fn value(&self) -> &InfoRef {
        &self.value
    }
}
