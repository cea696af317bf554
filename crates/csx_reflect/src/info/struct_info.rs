use alloc::boxed::Box;

use crate::info::{Generics, InfoRef, PropertyInfo, Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// StructInfo

/// Type info of an object with named properties.
///
/// A struct may embed a base type (see [`base`](Self::base)); the
/// properties listed here are only the ones declared on this level.
/// Walk [`ancestors`](Self::ancestors) to see the whole hierarchy.
///
/// Construction metadata follows object semantics:
/// - a value type can always be created, with or without a constructor;
/// - an abstract type can never be created;
/// - otherwise a public parameterless constructor is required.
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    generics: Generics,
    properties: Box<[PropertyInfo]>,
    base: Option<InfoRef>,
    declaring: Option<InfoRef>,
    value_type: bool,
    is_abstract: bool,
    default_constructor: bool,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);
    crate::info::impl_generic_fn!(generics);

    pub fn new<T: TypePath>(properties: &[PropertyInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            properties: properties.into(),
            base: None,
            declaring: None,
            value_type: false,
            is_abstract: false,
            default_constructor: true,
        }
    }

    /// Records the type this one inherits from.
    #[inline]
    pub fn with_base<B: Typed>(mut self) -> Self {
        self.base = Some(InfoRef::of::<B>());
        self
    }

    /// Records the type this one is nested in.
    #[inline]
    pub fn with_declaring<D: Typed>(mut self) -> Self {
        self.declaring = Some(InfoRef::of::<D>());
        self
    }

    #[inline]
    pub fn with_value_type(mut self, value_type: bool) -> Self {
        self.value_type = value_type;
        self
    }

    #[inline]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    #[inline]
    pub fn with_default_constructor(mut self, available: bool) -> Self {
        self.default_constructor = available;
        self
    }

    /// Properties declared directly on this type, in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// A property declared directly on this type.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub const fn base(&self) -> Option<&InfoRef> {
        self.base.as_ref()
    }

    #[inline]
    pub const fn declaring(&self) -> Option<&InfoRef> {
        self.declaring.as_ref()
    }

    #[inline]
    pub const fn is_value_type(&self) -> bool {
        self.value_type
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    #[inline]
    pub const fn has_default_constructor(&self) -> bool {
        self.default_constructor
    }

    /// Whether an instance can be created without constructor arguments.
    #[inline]
    pub const fn is_constructible(&self) -> bool {
        !self.is_abstract && (self.value_type || self.default_constructor)
    }

    /// This type followed by its base types, most derived first.
    ///
    /// A base whose info is not a struct ends the walk.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }
}

// -----------------------------------------------------------------------------
// Ancestors

/// Iterator returned by [`StructInfo::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a StructInfo>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a StructInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .base
            .as_ref()
            .map(InfoRef::type_info)
            .and_then(|info: &'static TypeInfo| info.as_struct().ok());
        Some(current)
    }
}
