use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use csx_reflect::Reflect;
use csx_reflect::info::TypeInfo;
use csx_reflect::ops::ReflectRef;

use crate::serializer::{ConstructorSerializer, Getter, ValueRef};
use crate::syntax::{Expr, Initializer, InitializerKind};
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// Entry

/// One element produced by an [`Enumerator`].
pub enum Entry<'a> {
    Item(ValueRef<'a>),
    /// A key and its value.
    Pair(ValueRef<'a>, ValueRef<'a>),
}

impl Entry<'_> {
    /// The key of a pair, or the item itself.
    #[inline]
    pub fn key(&self) -> ValueRef<'_> {
        match self {
            Self::Item(item) | Self::Pair(item, _) => item.reborrow(),
        }
    }

    /// The value of a pair, or the item itself.
    #[inline]
    pub fn value(&self) -> ValueRef<'_> {
        match self {
            Self::Item(item) | Self::Pair(_, item) => item.reborrow(),
        }
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => f.debug_tuple("Item").field(item).finish(),
            Self::Pair(key, value) => f.debug_tuple("Pair").field(key).field(value).finish(),
        }
    }
}

/// Lists the elements of a collection value.
pub type Enumerator = Arc<
    dyn for<'a> Fn(&'a dyn Reflect) -> Result<Box<dyn Iterator<Item = Entry<'a>> + 'a>, SerializeError>
        + Send
        + Sync,
>;

/// Extracts one argument of an element's `Add` call.
pub type Decomposer = Arc<dyn for<'e, 'a> Fn(&'e Entry<'a>) -> ValueRef<'e> + Send + Sync>;

/// Boxes an enumerator closure.
#[inline]
pub fn enumerator<F>(enumerator: F) -> Enumerator
where
    F: for<'a> Fn(&'a dyn Reflect) -> Result<Box<dyn Iterator<Item = Entry<'a>> + 'a>, SerializeError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(enumerator)
}

/// Boxes a decomposer closure.
#[inline]
pub fn decomposer<F>(decomposer: F) -> Decomposer
where
    F: for<'e, 'a> Fn(&'e Entry<'a>) -> ValueRef<'e> + Send + Sync + 'static,
{
    Arc::new(decomposer)
}

fn reflected_entries(value: &dyn Reflect) -> Result<Box<dyn Iterator<Item = Entry<'_>> + '_>, SerializeError> {
    match value.reflect_ref() {
        ReflectRef::List(list) => Ok(Box::new(list.iter().map(|item| Entry::Item(item.into())))),
        ReflectRef::Map(map) => Ok(Box::new(
            map.iter().map(|(key, value)| Entry::Pair(key.into(), value.into())),
        )),
        _ => Err(SerializeError::MismatchedType {
            expected: "a list or map",
            found: value.reflect_type_path(),
        }),
    }
}

// -----------------------------------------------------------------------------
// CollectionSerializer

/// Encodes a collection as a constructor call with a collection
/// initializer.
///
/// Each element is rendered according to the number of decomposers:
///
/// - none: the element itself, `new List<int> { 1, 2 }`;
/// - one: the single extracted component;
/// - several: a complex element with one argument per decomposer,
///   `new Dictionary<string, int> { { "a", 1 } }`.
///
/// Maps start out with a key and a value decomposer. Constructor arguments
/// are optional; without them the call has no parentheses.
#[derive(Clone)]
pub struct CollectionSerializer {
    constructor: ConstructorSerializer,
    enumerator: Option<Enumerator>,
    decomposers: Vec<Decomposer>,
}

impl CollectionSerializer {
    pub fn new(info: &TypeInfo) -> Self {
        let decomposers = if matches!(info, TypeInfo::Map(_)) {
            Vec::from([
                decomposer(|entry| entry.key()),
                decomposer(|entry| entry.value()),
            ])
        } else {
            Vec::new()
        };

        Self {
            constructor: ConstructorSerializer::new(info).with_empty_argument_list(false),
            enumerator: None,
            decomposers,
        }
    }

    /// Replaces how elements are listed; lists and maps are walked through
    /// reflection otherwise.
    #[inline]
    pub fn with_enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerator = Some(enumerator);
        self
    }

    /// Replaces the element decomposers.
    #[inline]
    pub fn with_decomposers(mut self, decomposers: impl IntoIterator<Item = Decomposer>) -> Self {
        self.decomposers = decomposers.into_iter().collect();
        self
    }

    /// Adds constructor arguments, e.g. a capacity or comparer.
    #[inline]
    pub fn with_arguments(mut self, getters: impl IntoIterator<Item = Getter>) -> Self {
        self.constructor = self.constructor.with_getters(getters);
        self
    }

    fn element(&self, entry: &Entry<'_>, scope: &mut EncodeScope<'_>) -> Result<Expr, SerializeError> {
        match self.decomposers.as_slice() {
            [] => match entry {
                Entry::Item(item) => scope.encode(item.reborrow()),
                Entry::Pair(key, value) => {
                    let key = scope.encode(key.reborrow())?;
                    let value = scope.encode(value.reborrow())?;
                    Ok(complex_element(Vec::from([key, value])))
                }
            },
            [single] => scope.encode(single(entry)),
            several => {
                let mut parts = Vec::with_capacity(several.len());
                for decompose in several {
                    parts.push(scope.encode(decompose(entry))?);
                }
                Ok(complex_element(parts))
            }
        }
    }
}

#[inline]
fn complex_element(parts: Vec<Expr>) -> Expr {
    Expr::Initializer(Initializer::new(InitializerKind::ComplexElement, parts))
}

impl super::ScriptSerializer for CollectionSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        let entries = match &self.enumerator {
            Some(enumerate) => enumerate(value)?,
            None => reflected_entries(value)?,
        };

        let mut elements = Vec::new();
        for entry in entries {
            elements.push(self.element(&entry, scope)?);
        }

        Ok(Expr::ObjectCreation {
            ty: self.constructor.type_name().clone(),
            arguments: self.constructor.arguments(value, scope)?,
            initializer: Some(scope.initializer(InitializerKind::Collection, elements)),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use csx_reflect::Reflect;
    use csx_reflect::info::Typed;

    use super::{CollectionSerializer, Entry, decomposer, enumerator};
    use crate::EncodeScope;
    use crate::registry::SerializerRegistry;
    use crate::serializer::{ScriptSerializer, ValueRef, downcast, typed_getter};

    fn encode<T: Reflect + Typed>(serializer: &CollectionSerializer, value: &T) -> String {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        serializer.get_creation(value, &mut scope).unwrap().to_string()
    }

    #[test]
    fn lists_and_maps() {
        let list = vec![1_i16, 2, 3];
        let serializer = CollectionSerializer::new(<Vec<i16>>::type_info());
        assert_eq!(encode(&serializer, &list), "new List<short> { 1, 2, 3 }");

        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_u8);
        map.insert(String::from("b"), 2_u8);
        let serializer = CollectionSerializer::new(<BTreeMap<String, u8>>::type_info());
        assert_eq!(
            encode(&serializer, &map),
            "new SortedDictionary<string, byte> { { \"a\", 1 }, { \"b\", 2 } }"
        );
    }

    #[test]
    fn empty_collection_keeps_its_initializer() {
        let serializer = CollectionSerializer::new(<Vec<bool>>::type_info());
        assert_eq!(encode(&serializer, &Vec::<bool>::new()), "new List<bool> { }");
    }

    #[test]
    fn single_decomposer_picks_a_component() {
        let map = BTreeMap::from([(1_i32, String::from("one"))]);
        let values = CollectionSerializer::new(<BTreeMap<i32, String>>::type_info())
            .with_decomposers([decomposer(|entry| entry.value())]);
        assert_eq!(
            encode(&values, &map),
            "new SortedDictionary<int, string> { \"one\" }"
        );
    }

    #[test]
    fn custom_enumerator_and_arguments() {
        let set = BTreeSet::from([3_u32, 1]);
        let serializer = CollectionSerializer::new(<BTreeSet<u32>>::type_info())
            .with_arguments([typed_getter::<BTreeSet<u32>, _>(|set| {
                ValueRef::owned(set.len() as i32)
            })])
            .with_enumerator(enumerator(|value| {
                let set = downcast::<BTreeSet<u32>>(value)?;
                let items: Box<dyn Iterator<Item = Entry<'_>> + '_> =
                    Box::new(set.iter().rev().map(|item| Entry::Item(ValueRef::Borrowed(item))));
                Ok(items)
            }));
        assert_eq!(encode(&serializer, &set), "new SortedSet<uint>(2) { 3U, 1U }");
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        let serializer = CollectionSerializer::new(<Vec<u8>>::type_info());
        assert!(serializer.get_creation(&5_u8, &mut scope).is_err());
    }
}
