use core::any::TypeId;

use crate::Reflect;

/// An object whose properties can be read by name.
///
/// Properties are addressed by declaring type *and* name, so a derived
/// type and its base can each expose a property called `Value`.
pub trait Struct: Reflect {
    /// Reads the property `name` declared on the type `declaring`,
    /// searching base types when `declaring` is not this type.
    fn property(&self, declaring: TypeId, name: &str) -> Option<&dyn Reflect>;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use super::Struct;
    use crate::derive::Reflect;
    use crate::info::{PropertyFlags, Typed};

    #[derive(Reflect, Default)]
    struct Entity {
        id: u32,
        value: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(script_name = "Item")]
    struct ShopItem {
        #[reflect(base)]
        entity: Entity,
        value: i64,
        #[reflect(readonly)]
        code: u8,
        #[reflect(skip)]
        _cache: Option<String>,
    }

    #[derive(Reflect, Default)]
    #[reflect(value_type)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn derived_struct_info() {
        let info = ShopItem::type_info().as_struct().unwrap();
        let names: alloc::vec::Vec<_> = info.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Value", "Code"]);
        assert_eq!(info.script_ident(), "Item");
        assert!(info.base().unwrap().type_info().is::<Entity>());

        let code = info.property("Code").unwrap();
        assert!(!code.flags().contains(PropertyFlags::WRITABLE));
        assert!(!code.is_candidate());
        assert_eq!(info.ancestors().count(), 2);
    }

    #[test]
    fn shadowed_properties_stay_addressable() {
        let item = ShopItem {
            entity: Entity {
                id: 7,
                value: String::from("base"),
            },
            value: -3,
            ..Default::default()
        };

        let derived = item.property(TypeId::of::<ShopItem>(), "Value").unwrap();
        assert_eq!(derived.downcast_ref::<i64>(), Some(&-3));

        let base = item.property(TypeId::of::<Entity>(), "Value").unwrap();
        assert_eq!(base.downcast_ref::<String>().map(String::as_str), Some("base"));

        assert!(item.property(TypeId::of::<ShopItem>(), "Id").is_none());
        assert!(item.property(TypeId::of::<Entity>(), "Id").is_some());
    }

    #[test]
    fn value_type_defaults() {
        assert!(crate::Reflect::is_default_value(&Point::default()));
        assert!(!crate::Reflect::is_default_value(&Point { x: 1, y: 0 }));
        // Reference types are never default.
        assert!(!crate::Reflect::is_default_value(&Entity::default()));
    }
}
