//! Static storage for type descriptors.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so generic types key their entries by `TypeId`.

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use csx_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use alloc::string::String;

    use crate::info::TypeInfo;

    pub trait CellContent: Send + Sync + 'static {}

    impl CellContent for String {}
    impl CellContent for TypeInfo {}
}

use sealed::CellContent;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Storage for one value, initialized on first use.
pub struct NonGenericTypeCell<T: CellContent>(OnceLock<T>);

/// Holds the [`TypeInfo`] of a non-generic type.
///
/// ```
/// use csx_reflect::impls::NonGenericTypeInfoCell;
/// use csx_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "auth::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: CellContent> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Storage for one value per instantiation of a generic type.
///
/// Values are leaked on insertion and live for the rest of the process.
pub struct GenericTypeCell<T: CellContent>(RwLock<TypeIdMap<&'static T>>);

/// Holds the [`TypeInfo`] of each instantiation of a generic type.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Holds a composed type path of each instantiation of a generic type.
///
/// ```
/// use csx_reflect::impls::{self, GenericTypePathCell};
/// use csx_reflect::info::TypePath;
///
/// struct Page<T>(T);
///
/// impl<T: TypePath> TypePath for Page<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["web::Page<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Page<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Page" }
/// }
///
/// assert_eq!(<Page<u8>>::type_path(), "web::Page<u8>");
/// assert_eq!(<Page<bool>>::type_name(), "Page<bool>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: CellContent> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, creating it with `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // The creator runs outside the lock; if another thread inserted the
    // same key meanwhile, its value is kept and this one is dropped.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
