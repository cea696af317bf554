use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// A value the script engine can inspect at runtime.
///
/// `Reflect` ties a value to its [`TypeInfo`](crate::info::TypeInfo)
/// (through [`DynamicTyped`]) and exposes its content through the
/// kind-specific view returned by [`reflect_ref`](Reflect::reflect_ref).
///
/// Implementations are provided for primitives, strings, `Option`,
/// standard collections, tuples, arrays and a few opaque types. User
/// types normally get theirs from `#[derive(Reflect)]`.
///
/// # Type identity
///
/// `Box<dyn Reflect>::type_id` reports the box, not the value inside.
/// Use [`ty_id`](Reflect::ty_id):
///
/// ```
/// use core::any::{Any, TypeId};
/// use csx_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Transparent wrappers
///
/// `Box<T>` and `Arc<T>` describe themselves with `T`'s type info and
/// return the inner value from [`reflect_target`](Reflect::reflect_target),
/// so a boxed field encodes exactly like an unboxed one.
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Whether this value equals the zero value of its type.
    ///
    /// Numeric zero, `'\0'`, `false`, `None`, an enum whose discriminant
    /// is zero and value-type structs whose properties are all default
    /// qualify. Text, collections and reference-like structs never do,
    /// since their zero value is null.
    fn is_default_value(&self) -> bool;

    /// The value to encode in place of this one.
    ///
    /// Returns `self` for everything except transparent wrappers.
    fn reflect_target(&self) -> &dyn Reflect;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// use csx_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<i8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type checked above"),
        }
    }

    /// Downcasts and unboxes the value.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Primitive(value) => fmt::Debug::fmt(&value, f),
            _ => write!(f, "{}({})", self.reflect_kind(), self.reflect_type_path()),
        }
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_kind`, `reflect_ref` and `reflect_target` for a
/// value whose view is `ReflectRef::$kind(self)`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_target(&self) -> &dyn $crate::Reflect {
            self
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
