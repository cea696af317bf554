use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use csx_reflect::Reflect;
use csx_reflect::info::TypePath;

use crate::SerializeError;

// -----------------------------------------------------------------------------
// ValueRef

/// A value handed to the dispatcher by a getter.
///
/// Getters usually borrow from the value being serialized; recipes that
/// compute a component (a tick count, a formatted id) return it owned.
pub enum ValueRef<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
    /// Encoded as `null`.
    Null,
}

impl<'a> ValueRef<'a> {
    #[inline]
    pub fn owned<T: Reflect>(value: T) -> Self {
        Self::Owned(Box::new(value))
    }

    /// The referenced value; `None` for [`ValueRef::Null`].
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Borrowed(value) => Some(*value),
            Self::Owned(value) => Some(&**value),
            Self::Null => None,
        }
    }

    /// A borrowed view that lives as long as `self`.
    #[inline]
    pub fn reborrow(&self) -> ValueRef<'_> {
        match self.get() {
            Some(value) => ValueRef::Borrowed(value),
            None => ValueRef::Null,
        }
    }
}

impl<'a> From<&'a dyn Reflect> for ValueRef<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::Borrowed(value)
    }
}

impl<'a> From<Option<&'a dyn Reflect>> for ValueRef<'a> {
    #[inline]
    fn from(value: Option<&'a dyn Reflect>) -> Self {
        value.map_or(Self::Null, Self::Borrowed)
    }
}

impl fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed(value) => f.debug_tuple("Borrowed").field(value).finish(),
            Self::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Self::Null => f.write_str("Null"),
        }
    }
}

// -----------------------------------------------------------------------------
// Getter

/// Extracts one component of a value: a constructor argument or a
/// property value.
pub type Getter =
    Arc<dyn for<'a> Fn(&'a dyn Reflect) -> Result<ValueRef<'a>, SerializeError> + Send + Sync>;

/// Boxes a getter closure.
///
/// Going through this function lets the closure borrow its result from
/// its argument.
#[inline]
pub fn getter<F>(getter: F) -> Getter
where
    F: for<'a> Fn(&'a dyn Reflect) -> Result<ValueRef<'a>, SerializeError> + Send + Sync + 'static,
{
    Arc::new(getter)
}

/// Wraps a getter written against a concrete type.
///
/// The returned getter fails with [`SerializeError::MismatchedType`] when
/// handed a value of another type.
///
/// ```
/// use core::time::Duration;
/// use csx_script::serializer::{ValueRef, typed_getter};
///
/// let seconds = typed_getter::<Duration, _>(|d| ValueRef::owned(d.as_secs()));
/// let duration = Duration::from_secs(3);
/// let value = seconds(&duration).unwrap();
/// assert_eq!(value.get().and_then(|v| v.downcast_ref::<u64>()), Some(&3));
/// ```
pub fn typed_getter<T, F>(f: F) -> Getter
where
    T: Reflect + TypePath,
    F: for<'a> Fn(&'a T) -> ValueRef<'a> + Send + Sync + 'static,
{
    getter(move |value| downcast::<T>(value).map(&f))
}

/// Views `value` as `T`, or reports the mismatch.
pub fn downcast<T: Reflect + TypePath>(value: &dyn Reflect) -> Result<&T, SerializeError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| SerializeError::MismatchedType {
            expected: T::type_path(),
            found: value.reflect_type_path(),
        })
}
