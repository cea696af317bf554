use crate::info::{InfoRef, Type, TypePath, Typed};

// -----------------------------------------------------------------------------
// PropertyFlags

bitflags::bitflags! {
    /// Accessibility and shape of a reflected property.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        const READABLE = 1 << 0;
        const WRITABLE = 1 << 1;
        const PUBLIC_GETTER = 1 << 2;
        const PUBLIC_SETTER = 1 << 3;
        const STATIC = 1 << 4;
        /// Overrides the same-named property of a base type instead of
        /// shadowing it.
        const OVERRIDE = 1 << 5;

        /// A plain public read-write instance property.
        const PUBLIC = Self::READABLE.bits()
            | Self::WRITABLE.bits()
            | Self::PUBLIC_GETTER.bits()
            | Self::PUBLIC_SETTER.bits();
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A property declared directly on one level of a struct hierarchy.
///
/// A property is identified by its declaring type and name together;
/// a derived type may declare a property with the same name as one on
/// its base, and both stay addressable.
#[derive(Clone, Debug)]
pub struct PropertyInfo {
    name: &'static str,
    declaring: Type,
    value: InfoRef,
    flags: PropertyFlags,
    index_parameters: u8,
}

impl PropertyInfo {
    /// A public read-write property `name` of type `T` declared on `D`.
    #[inline]
    pub const fn new<D: TypePath, T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            declaring: Type::of::<D>(),
            value: InfoRef::of::<T>(),
            flags: PropertyFlags::PUBLIC,
            index_parameters: 0,
        }
    }

    #[inline]
    pub const fn with_flags(mut self, flags: PropertyFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub const fn with_index_parameters(mut self, count: u8) -> Self {
        self.index_parameters = count;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The type that declares this property.
    #[inline]
    pub const fn declaring(&self) -> &Type {
        &self.declaring
    }

    /// The declared value type.
    #[inline]
    pub const fn value(&self) -> &InfoRef {
        &self.value
    }

    #[inline]
    pub const fn flags(&self) -> PropertyFlags {
        self.flags
    }

    #[inline]
    pub const fn index_parameters(&self) -> u8 {
        self.index_parameters
    }

    #[inline]
    pub const fn is_override(&self) -> bool {
        self.flags.contains(PropertyFlags::OVERRIDE)
    }

    /// Whether the property can be both read and assigned from outside:
    /// public getter and setter, non-static, not indexed.
    #[inline]
    pub const fn is_candidate(&self) -> bool {
        self.flags.contains(PropertyFlags::PUBLIC)
            && !self.flags.contains(PropertyFlags::STATIC)
            && self.index_parameters == 0
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{PropertyFlags, PropertyInfo};

    struct Owner;

    impl crate::info::TypePath for Owner {
        fn type_path() -> &'static str {
            "tests::Owner"
        }
        fn type_name() -> &'static str {
            "Owner"
        }
        fn type_ident() -> &'static str {
            "Owner"
        }
    }

    #[test]
    fn candidate_rules() {
        let plain = PropertyInfo::new::<Owner, i32>("Count");
        assert!(plain.is_candidate());

        let read_only = plain
            .clone()
            .with_flags(PropertyFlags::PUBLIC.difference(PropertyFlags::WRITABLE));
        assert!(!read_only.is_candidate());

        let private_set = plain
            .clone()
            .with_flags(PropertyFlags::PUBLIC.difference(PropertyFlags::PUBLIC_SETTER));
        assert!(!private_set.is_candidate());

        let statik = plain
            .clone()
            .with_flags(PropertyFlags::PUBLIC.union(PropertyFlags::STATIC));
        assert!(!statik.is_candidate());

        assert!(!plain.clone().with_index_parameters(1).is_candidate());
        assert!(plain.declaring().is::<Owner>());
    }
}
