use alloc::boxed::Box;

use crate::info::{Generics, InfoRef, Type, TypePath};

/// Type info of a tuple.
#[derive(Clone, Debug)]
pub struct TupleInfo {
    ty: Type,
    generics: Generics,
    fields: Box<[InfoRef]>,
}

impl TupleInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    pub fn new<T: TypePath>(fields: &[InfoRef]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            fields: fields.into(),
        }
    }

    #[inline]
    pub fn field(&self, index: usize) -> Option<&InfoRef> {
        self.fields.get(index)
    }

    #[inline]
    pub fn fields(&self) -> &[InfoRef] {
        &self.fields
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
