use alloc::boxed::Box;

use crate::info::{Generics, InfoRef, Type, TypePath, Typed};

// -----------------------------------------------------------------------------
// EnumMember

/// A named constant of an enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumMember {
    name: &'static str,
    value: i128,
}

impl EnumMember {
    #[inline]
    pub const fn new(name: &'static str, value: i128) -> Self {
        Self { name, value }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> i128 {
        self.value
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Type info of a field-less enumeration or a set of bit flags.
///
/// Members keep declaration order. Several members may share a value;
/// lookups by value return the first declared one.
///
/// ```
/// use csx_reflect::info::{EnumInfo, EnumMember};
///
/// # struct Access;
/// # impl csx_reflect::info::TypePath for Access {
/// #     fn type_path() -> &'static str { "Access" }
/// #     fn type_name() -> &'static str { "Access" }
/// #     fn type_ident() -> &'static str { "Access" }
/// # }
/// let info = EnumInfo::new::<Access>(&[
///     EnumMember::new("Read", 1),
///     EnumMember::new("Write", 2),
///     EnumMember::new("ReadWrite", 3),
/// ])
/// .with_flags(true);
///
/// assert_eq!(info.member_by_value(3).map(|m| m.name()), Some("ReadWrite"));
/// assert!(info.is_flags());
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    generics: Generics,
    members: Box<[EnumMember]>,
    flags: bool,
    declaring: Option<InfoRef>,
}

impl EnumInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    pub fn new<T: TypePath>(members: &[EnumMember]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            members: members.into(),
            flags: false,
            declaring: None,
        }
    }

    /// Marks the enumeration as a set of combinable bit flags.
    #[inline]
    pub fn with_flags(mut self, flags: bool) -> Self {
        self.flags = flags;
        self
    }

    /// Records the type this enumeration is nested in.
    #[inline]
    pub fn with_declaring<D: Typed>(mut self) -> Self {
        self.declaring = Some(InfoRef::of::<D>());
        self
    }

    #[inline]
    pub const fn is_flags(&self) -> bool {
        self.flags
    }

    #[inline]
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    #[inline]
    pub const fn declaring(&self) -> Option<&InfoRef> {
        self.declaring.as_ref()
    }

    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn member_by_value(&self, value: i128) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.value == value)
    }
}
