use core::fmt;

use crate::info::{TypeInfo, Typed};

/// A value that names a type, the reflected counterpart of a type token.
///
/// ```
/// use csx_reflect::info::TypeHandle;
///
/// let handle = TypeHandle::of::<Vec<u8>>();
/// assert!(handle.type_info().is::<Vec<u8>>());
/// assert_eq!(handle, TypeHandle::of::<Vec<u8>>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeHandle(&'static TypeInfo);

impl TypeHandle {
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self(T::type_info())
    }

    #[inline]
    pub const fn from_info(info: &'static TypeInfo) -> Self {
        Self(info)
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.0
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.ty_id() == other.0.ty_id()
    }
}

impl Eq for TypeHandle {}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeHandle").field(self.0.ty()).finish()
    }
}
