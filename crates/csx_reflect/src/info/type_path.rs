use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static names of a type.
///
/// - [`type_path`]: fully qualified, unique path, e.g. `alloc::vec::Vec<i32>`.
/// - [`type_name`]: path without modules, e.g. `Vec<i32>`.
/// - [`type_ident`]: bare identifier, e.g. `Vec`.
/// - [`module_path`]: defining module, `None` for built-in types.
/// - [`script_ident`]: identifier used when the type is named in emitted
///   script, e.g. `List` for `Vec`. Defaults to [`type_ident`].
///
/// None of these strings starts with `::`.
///
/// # Examples
///
/// ```
/// use csx_reflect::info::TypePath;
///
/// struct Order;
///
/// impl TypePath for Order {
///     fn type_path() -> &'static str { "shop::Order" }
///     fn type_name() -> &'static str { "Order" }
///     fn type_ident() -> &'static str { "Order" }
///     fn module_path() -> Option<&'static str> { Some("shop") }
/// }
///
/// assert_eq!(Order::script_ident(), "Order");
/// ```
///
/// Generic implementations cache their composed strings in a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
/// [`script_ident`]: TypePath::script_ident
pub trait TypePath: 'static {
    /// The fully qualified path with generics; unique per type.
    fn type_path() -> &'static str;

    /// The path without module prefix; may collide between types.
    fn type_name() -> &'static str;

    /// The identifier without generics or module prefix.
    fn type_ident() -> &'static str;

    /// The module the type is defined in.
    fn module_path() -> Option<&'static str> {
        None
    }

    /// The identifier the type goes by in emitted script.
    fn script_ident() -> &'static str {
        Self::type_ident()
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe access to [`TypePath`], implemented for every `TypePath` type.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Function pointers to one type's [`TypePath`] implementation.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
    script_ident: fn() -> &'static str,
}

impl TypePathTable {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
            script_ident: T::script_ident,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }

    #[inline(always)]
    pub fn script_ident(&self) -> &'static str {
        (self.script_ident)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("script_ident", &self.script_ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's [`TypePathTable`].
///
/// Equality and hashing only look at the `TypeId`.
///
/// # Examples
///
/// ```
/// use csx_reflect::info::Type;
///
/// let ty = Type::of::<Vec<i32>>();
/// assert!(ty.is::<Vec<i32>>());
/// assert_eq!(ty.ident(), "Vec");
/// assert_eq!(ty.script_ident(), "List");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Checks whether this is `T`, comparing only `TypeId`s.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.path_table.module_path()
    }

    /// See [`TypePath::script_ident`].
    #[inline]
    pub fn script_ident(&self) -> &'static str {
        self.path_table.script_ident()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the [`Type`] accessors of an info struct.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// See [`TypePath::type_ident`](crate::info::TypePath::type_ident).
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }

        /// See [`TypePath::script_ident`](crate::info::TypePath::script_ident).
        #[inline]
        pub fn script_ident(&self) -> &'static str {
            self.ty().script_ident()
        }

        /// Checks whether this describes `T`.
        #[inline]
        pub fn is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{Type, TypePath};

    #[test]
    fn primitive_paths() {
        assert_eq!(<i32 as TypePath>::type_path(), "i32");
        assert_eq!(<i32 as TypePath>::module_path(), None);
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
    }

    #[test]
    fn type_equality_uses_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert_eq!(Type::of::<String>().script_ident(), "string");
    }
}
