use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::marker::PhantomData;

use csx_reflect::Reflect;
use csx_reflect::info::{PropertyInfo, StructInfo, TypeInfo, Typed};
use csx_reflect::ops::ReflectRef;

use crate::serializer::{ConstructorSerializer, Getter, ValueRef, getter, typed_getter};
use crate::syntax::{Expr, InitializerKind, Statement, TypeName};
use crate::type_syntax::struct_name;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// Condition

/// Decides whether a property is assigned, given the owner and the value
/// its getter produced.
///
/// The value is `None` only when the getter returned [`ValueRef::Null`].
/// An `Option` property is passed as the `Option` itself, so an empty one
/// arrives as `Some(&None::<T>)`. The default condition relies on this:
/// `Some(0)` differs from the default of `Option<i32>` and is assigned.
pub type Condition = Arc<dyn Fn(&dyn Reflect, Option<&dyn Reflect>) -> bool + Send + Sync>;

fn not_default() -> Condition {
    Arc::new(|_: &dyn Reflect, value: Option<&dyn Reflect>| {
        value.is_some_and(|value| !value.is_default_value())
    })
}

fn reflected(type_path: &'static str, declaring: TypeId, name: &'static str) -> Getter {
    getter(move |value| match value.reflect_ref() {
        ReflectRef::Struct(object) => object
            .property(declaring, name)
            .map(ValueRef::Borrowed)
            .ok_or(SerializeError::MissingProperty {
                type_name: type_path,
                property: name,
            }),
        _ => Err(SerializeError::MismatchedType {
            expected: type_path,
            found: value.reflect_type_path(),
        }),
    })
}

// -----------------------------------------------------------------------------
// PropertyData

#[derive(Clone)]
struct PropertyData {
    name: &'static str,
    /// `Declaring.Name` for hidden properties, the plain name otherwise.
    key: Cow<'static, str>,
    /// Cast target of a hidden property's assignment.
    declaring: TypeName,
    getter: Getter,
    condition: Condition,
}

impl PropertyData {
    fn new(type_path: &'static str, level: &StructInfo, property: &PropertyInfo, hidden: bool) -> Self {
        let name = property.name();
        let key = if hidden {
            Cow::Owned(format!("{}.{name}", level.script_ident()))
        } else {
            Cow::Borrowed(name)
        };

        Self {
            name,
            key,
            declaring: struct_name(level),
            getter: reflected(type_path, property.declaring().id(), name),
            condition: not_default(),
        }
    }
}

/// Splits the assignable properties of a struct chain into those reachable
/// by name and those a more derived level hides.
fn collect_properties(info: &StructInfo) -> (Vec<PropertyData>, Vec<PropertyData>) {
    let type_path = info.type_path();
    let mut visible = Vec::new();
    let mut hidden = Vec::new();
    let mut seen: Vec<&PropertyInfo> = Vec::new();

    for level in info.ancestors() {
        for property in level.properties() {
            let nearest = seen.iter().rev().find(|other| other.name() == property.name());
            match nearest {
                // An override and its base declaration share one slot.
                Some(derived) if derived.is_override() => {}
                Some(_) if property.is_candidate() => {
                    hidden.push(PropertyData::new(type_path, level, property, true));
                }
                None if property.is_candidate() => {
                    visible.push(PropertyData::new(type_path, level, property, false));
                }
                _ => {}
            }
        }
        seen.extend(level.properties());
    }

    (visible, hidden)
}

// -----------------------------------------------------------------------------
// PropertySerializer

/// Encodes a struct as a creation expression followed by an object
/// initializer of its assignable properties.
///
/// Properties are collected over the whole base chain. A property is
/// assigned when its condition holds, by default when its value is not
/// the default of its type. A base property that a derived level
/// redeclares without overriding cannot be named in the initializer; it
/// is assigned through a cast after construction:
///
/// ```text
/// var v0 = new Item { Value = 3L, Id = 7U };
/// ((Entity)v0).Value = "base";
/// v0
/// ```
///
/// Use [`PropertySerializerBuilder`] for constructor arguments and
/// per-property overrides.
#[derive(Clone)]
pub struct PropertySerializer {
    constructor: ConstructorSerializer,
    visible: Vec<PropertyData>,
    hidden: Vec<PropertyData>,
}

impl PropertySerializer {
    /// A serializer with default getters and conditions.
    pub fn new(info: &StructInfo) -> Result<Self, SerializeError> {
        Self::with_overrides(info, Vec::new(), Vec::new(), Vec::new())
    }

    fn with_overrides(
        info: &StructInfo,
        arguments: Vec<Getter>,
        values: Vec<(Cow<'static, str>, Getter)>,
        conditions: Vec<(Cow<'static, str>, Condition)>,
    ) -> Result<Self, SerializeError> {
        let type_path = info.type_path();
        let (mut visible, mut hidden) = collect_properties(info);

        for (name, value) in values {
            resolve(&mut visible, &mut hidden, type_path, &name)?.getter = value;
        }
        for (name, condition) in conditions {
            resolve(&mut visible, &mut hidden, type_path, &name)?.condition = condition;
        }

        if visible.is_empty() && hidden.is_empty() && arguments.is_empty() {
            return Err(SerializeError::Initialization {
                type_name: type_path,
            });
        }

        Ok(Self {
            constructor: ConstructorSerializer::named(struct_name(info))
                .with_getters(arguments)
                .with_empty_argument_list(false),
            visible,
            hidden,
        })
    }
}

fn resolve<'p>(
    visible: &'p mut [PropertyData],
    hidden: &'p mut [PropertyData],
    type_path: &'static str,
    name: &str,
) -> Result<&'p mut PropertyData, SerializeError> {
    visible
        .iter_mut()
        .chain(hidden.iter_mut())
        .find(|property| property.key == name)
        .ok_or_else(|| SerializeError::Configuration {
            type_name: type_path,
            property: String::from(name),
        })
}

impl super::ScriptSerializer for PropertySerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        let arguments = self.constructor.arguments(value, scope)?;

        let mut assignments = Vec::with_capacity(self.visible.len());
        for property in &self.visible {
            let component = (property.getter)(value)?;
            if (property.condition)(value, component.get()) {
                let encoded = scope.encode(component)?;
                assignments.push(Expr::assign(Expr::identifier(property.name), encoded));
            }
        }

        // `new T(args)` is complete on its own, `new T` needs braces.
        let initializer = if assignments.is_empty() && arguments.is_some() {
            None
        } else {
            Some(scope.initializer(InitializerKind::Object, assignments))
        };
        let creation = Expr::ObjectCreation {
            ty: self.constructor.type_name().clone(),
            arguments,
            initializer,
        };

        let mut pending = Vec::new();
        for property in &self.hidden {
            let component = (property.getter)(value)?;
            if (property.condition)(value, component.get()) {
                pending.push((property, component));
            }
        }
        if pending.is_empty() {
            return Ok(creation);
        }

        let local = scope.fresh_local();
        scope.push_statement(Statement::Local {
            name: local.clone(),
            init: creation,
        });
        for (property, component) in pending {
            let encoded = scope.encode(component)?;
            let target = Expr::cast(property.declaring.clone(), Expr::Identifier(local.clone()))
                .member(property.name);
            scope.push_statement(Statement::Assign {
                target,
                value: encoded,
            });
        }
        Ok(Expr::Identifier(local))
    }
}

// -----------------------------------------------------------------------------
// PropertySerializerBuilder

/// Configures a [`PropertySerializer`] for `T`.
///
/// Overrides are addressed by property name; a property hidden by a
/// derived level is addressed as `Declaring.Name`. Naming a property that
/// is not assignable fails [`build`](Self::build) with
/// [`SerializeError::Configuration`].
///
/// ```
/// use csx_reflect::derive::Reflect;
/// use csx_script::registry::SerializerRegistry;
/// use csx_script::serializer::{PropertySerializerBuilder, ValueRef};
///
/// #[derive(Reflect)]
/// #[reflect(no_default_constructor)]
/// struct User {
///     login: String,
///     age: u8,
/// }
///
/// let serializer = PropertySerializerBuilder::<User>::new()
///     .constructor_arg(|user| ValueRef::Borrowed(&user.login))
///     .condition("Login", |_, _| false)
///     .build()
///     .unwrap();
///
/// let registry = SerializerRegistry::new();
/// registry.insert_type::<User>(serializer);
///
/// let user = User { login: "ann".into(), age: 30 };
/// let text = csx_script::serialize_with(&registry, &user).unwrap();
/// assert_eq!(text, "new User(\"ann\") { Age = 30 }");
/// ```
pub struct PropertySerializerBuilder<T> {
    arguments: Vec<Getter>,
    values: Vec<(Cow<'static, str>, Getter)>,
    conditions: Vec<(Cow<'static, str>, Condition)>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Reflect + Typed> PropertySerializerBuilder<T> {
    pub fn new() -> Self {
        Self {
            arguments: Vec::new(),
            values: Vec::new(),
            conditions: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends a constructor argument.
    pub fn constructor_arg<F>(mut self, argument: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> ValueRef<'a> + Send + Sync + 'static,
    {
        self.arguments.push(typed_getter::<T, _>(argument));
        self
    }

    /// Replaces how the value of property `name` is read.
    pub fn value<F>(mut self, name: impl Into<Cow<'static, str>>, value: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> ValueRef<'a> + Send + Sync + 'static,
    {
        self.values.push((name.into(), typed_getter::<T, _>(value)));
        self
    }

    /// Replaces when property `name` is assigned.
    pub fn condition<F>(mut self, name: impl Into<Cow<'static, str>>, condition: F) -> Self
    where
        F: Fn(&T, Option<&dyn Reflect>) -> bool + Send + Sync + 'static,
    {
        let condition: Condition = Arc::new(move |owner: &dyn Reflect, value: Option<&dyn Reflect>| {
            owner.downcast_ref::<T>().is_some_and(|owner| condition(owner, value))
        });
        self.conditions.push((name.into(), condition));
        self
    }

    pub fn build(self) -> Result<PropertySerializer, SerializeError> {
        let TypeInfo::Struct(info) = T::type_info() else {
            return Err(SerializeError::Initialization {
                type_name: T::type_path(),
            });
        };
        PropertySerializer::with_overrides(info, self.arguments, self.values, self.conditions)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use csx_reflect::Reflect;
    use csx_reflect::derive::Reflect;
    use csx_reflect::info::Typed;

    use super::{PropertySerializer, PropertySerializerBuilder};
    use crate::registry::SerializerRegistry;
    use crate::serializer::{ScriptSerializer, ValueRef};
    use crate::{EncodeScope, SerializeError};

    #[derive(Reflect, Default)]
    struct Order {
        id: i32,
        name: String,
        note: Option<String>,
        #[reflect(readonly)]
        code: u8,
        #[reflect(private_set)]
        revision: u32,
    }

    #[derive(Reflect, Default)]
    struct Entity {
        id: u32,
        value: String,
    }

    #[derive(Reflect, Default)]
    struct ShopItem {
        #[reflect(base)]
        entity: Entity,
        value: i64,
    }

    #[derive(Reflect, Default)]
    struct Shape {
        #[reflect(override)]
        sides: u8,
        #[reflect(base)]
        base: Polygon,
    }

    #[derive(Reflect, Default)]
    struct Polygon {
        sides: u8,
    }

    #[derive(Reflect)]
    #[reflect(no_default_constructor)]
    struct Account {
        owner: String,
        balance: i64,
        tag: Option<String>,
    }

    #[derive(Reflect, Default)]
    struct Frozen {
        #[reflect(readonly)]
        id: u32,
    }

    fn serialize<T: Reflect + Typed>(serializer: PropertySerializer, value: &T) -> String {
        let registry = SerializerRegistry::new();
        registry.insert_type::<T>(serializer);
        crate::serialize_with(&registry, value).unwrap()
    }

    #[test]
    fn defaults_are_suppressed() {
        let info = Order::type_info().as_struct().unwrap();
        let order = Order {
            id: 3,
            name: "a".into(),
            code: 9,
            revision: 2,
            ..Default::default()
        };
        let text = serialize(PropertySerializer::new(info).unwrap(), &order);
        assert_eq!(text, "new Order { Id = 3, Name = \"a\" }");

        let info = Entity::type_info().as_struct().unwrap();
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        let entity = Entity {
            id: 0,
            value: String::new(),
        };
        let expr = PropertySerializer::new(info)
            .unwrap()
            .get_creation(&entity, &mut scope)
            .unwrap();
        // Text is never a default value, empty or not.
        assert_eq!(expr.to_string(), "new Entity { Value = \"\" }");
    }

    #[test]
    fn hidden_members_are_assigned_after_construction() {
        let item = ShopItem {
            entity: Entity {
                id: 7,
                value: "base".into(),
            },
            value: -3,
        };
        let info = ShopItem::type_info().as_struct().unwrap();
        let text = serialize(PropertySerializer::new(info).unwrap(), &item);
        assert_eq!(
            text,
            "var v0 = new ShopItem { Value = -3L, Id = 7U };\n((Entity)v0).Value = \"base\";\nv0"
        );
    }

    #[test]
    fn hidden_members_are_addressed_by_declaring_type() {
        let item = ShopItem {
            entity: Entity {
                id: 7,
                value: "base".into(),
            },
            value: -3,
        };
        let serializer = PropertySerializerBuilder::<ShopItem>::new()
            .condition("Entity.Value", |_, _| false)
            .build()
            .unwrap();
        assert_eq!(serialize(serializer, &item), "new ShopItem { Value = -3L, Id = 7U }");
    }

    #[test]
    fn overrides_share_the_base_slot() {
        let shape = Shape {
            sides: 4,
            base: Polygon { sides: 4 },
        };
        let info = Shape::type_info().as_struct().unwrap();
        assert_eq!(serialize(PropertySerializer::new(info).unwrap(), &shape), "new Shape { Sides = 4 }");
    }

    #[test]
    fn constructor_arguments_and_overrides() {
        let account = Account {
            owner: "ann".into(),
            balance: 5,
            tag: None,
        };
        let serializer = PropertySerializerBuilder::<Account>::new()
            .constructor_arg(|account| ValueRef::Borrowed(&account.owner))
            .condition("Owner", |_, _| false)
            .value("Balance", |account| ValueRef::owned(account.balance * 100))
            .condition("Tag", |account, _| account.balance > 0)
            .build()
            .unwrap();
        assert_eq!(
            serialize(serializer, &account),
            "new Account(\"ann\") { Balance = 500L, Tag = null }"
        );
    }

    #[test]
    fn conditions_receive_options_whole() {
        let account = Account {
            owner: String::new(),
            balance: 0,
            tag: None,
        };
        let serializer = PropertySerializerBuilder::<Account>::new()
            .condition("Tag", |_, value| {
                value
                    .and_then(|tag| tag.downcast_ref::<Option<String>>())
                    .is_some_and(Option::is_none)
            })
            .condition("Owner", |_, value| value.is_none())
            .value("Owner", |_| ValueRef::Null)
            .build()
            .unwrap();
        assert_eq!(
            serialize(serializer, &account),
            "new Account { Owner = null, Tag = null }"
        );
    }

    #[test]
    fn unknown_or_readonly_names_are_rejected() {
        let missing = PropertySerializerBuilder::<Account>::new()
            .condition("Missing", |_, _| true)
            .build();
        assert!(matches!(
            missing,
            Err(SerializeError::Configuration { ref property, .. }) if property == "Missing"
        ));

        let readonly = PropertySerializerBuilder::<Order>::new()
            .value("Code", |order| ValueRef::Borrowed(&order.code))
            .build();
        assert!(matches!(readonly, Err(SerializeError::Configuration { .. })));
    }

    #[test]
    fn nothing_to_assign() {
        let info = Frozen::type_info().as_struct().unwrap();
        assert!(matches!(
            PropertySerializer::new(info),
            Err(SerializeError::Initialization { .. })
        ));

        let with_argument = PropertySerializerBuilder::<Frozen>::new()
            .constructor_arg(|frozen| ValueRef::Borrowed(&frozen.id))
            .build()
            .unwrap();
        assert_eq!(serialize(with_argument, &Frozen { id: 4 }), "new Frozen(4U)");
    }
}
