use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// Implementations keep the info in a [`NonGenericTypeInfoCell`] or a
/// [`GenericTypeInfoCell`], so every call after the first is a lookup.
///
/// ```
/// use csx_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(<Vec<u8>>::type_info().kind(), ReflectKind::List);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe access to [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
