use alloc::boxed::Box;
use core::slice;

use crate::info::{InfoRef, Typed};

// -----------------------------------------------------------------------------
// TypeParamInfo

/// One instantiated type parameter: its declared name and its argument.
#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    name: &'static str,
    arg: InfoRef,
}

impl TypeParamInfo {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            arg: InfoRef::of::<T>(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The type argument bound to this parameter.
    #[inline]
    pub const fn arg(&self) -> &InfoRef {
        &self.arg
    }
}

// -----------------------------------------------------------------------------
// Generics

/// The type arguments of a type, in declaration order.
///
/// For a type nested in a generic declaring type, the declaring type's
/// arguments come first; the nested type's own arguments are the
/// remainder (see [`Generics::skip`]).
///
/// ```
/// use csx_reflect::info::Typed;
///
/// let info = <std::collections::BTreeMap<u8, String>>::type_info();
/// let names: Vec<_> = info.generics().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["K", "V"]);
/// ```
#[derive(Clone, Default, Debug)]
pub struct Generics(Option<Box<[TypeParamInfo]>>);

impl Generics {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(None)
    }

    pub fn from_params(params: impl IntoIterator<Item = TypeParamInfo>) -> Self {
        let params: Box<[TypeParamInfo]> = params.into_iter().collect();
        if params.is_empty() {
            Self(None)
        } else {
            Self(Some(params))
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[TypeParamInfo] {
        match &self.0 {
            Some(params) => params,
            None => &[],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&TypeParamInfo> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TypeParamInfo> {
        self.as_slice().iter()
    }

    /// The parameters after the first `count`.
    #[inline]
    pub fn skip(&self, count: usize) -> &[TypeParamInfo] {
        self.as_slice().get(count..).unwrap_or(&[])
    }
}

impl<'a> IntoIterator for &'a Generics {
    type Item = &'a TypeParamInfo;
    type IntoIter = slice::Iter<'a, TypeParamInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_generic_fn {
    ($field:ident) => {
        /// Replaces the recorded type arguments.
        #[inline]
        pub fn with_generics(mut self, generics: $crate::info::Generics) -> Self {
            self.$field = generics;
            self
        }

        /// The type arguments of this type.
        #[inline]
        pub const fn generics(&self) -> &$crate::info::Generics {
            &self.$field
        }
    };
}

pub(crate) use impl_generic_fn;
