use crate::info::{Generics, Type, TypePath};

/// Type info of a type whose content is not exposed through reflection.
///
/// Such types are encoded through fixed recipes keyed by their type
/// (`Duration`, `Uuid`, date/time types, [`TypeHandle`]).
///
/// [`TypeHandle`]: crate::info::TypeHandle
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    generics: Generics,
    value_type: bool,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    #[inline]
    pub const fn new<T: TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            value_type: false,
        }
    }

    /// Marks the type as having copy semantics.
    #[inline]
    pub const fn with_value_type(mut self, value_type: bool) -> Self {
        self.value_type = value_type;
        self
    }

    #[inline]
    pub const fn is_value_type(&self) -> bool {
        self.value_type
    }
}
