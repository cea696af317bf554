use core::fmt;

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// InfoRef

/// A lazily resolved link to another type's [`TypeInfo`].
///
/// Info structs point at their element, key, property or base types
/// through `InfoRef` instead of `&'static TypeInfo`: resolution is
/// deferred to the first call of [`type_info`](InfoRef::type_info), which
/// lets a type mention itself (a node with a parent of the same type).
#[derive(Clone, Copy)]
pub struct InfoRef {
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
}

impl InfoRef {
    #[inline]
    pub const fn of<T: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    crate::info::impl_type_fn!(ty);

    /// Resolves the referenced [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

impl fmt::Debug for InfoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.ty, f)
    }
}
