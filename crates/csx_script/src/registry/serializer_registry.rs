use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
#[cfg(feature = "auto_register")]
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};

use csx_reflect::info::{TypeInfo, Typed};
use csx_utils::TypeIdMap;

use crate::registry::{SerializerFactory, known};
use crate::serializer::{
    ArraySerializer, CollectionSerializer, EnumSerializer, LiteralSerializer, NullableSerializer,
    PropertySerializer, ScriptSerializable, ScriptSerializer, SerializableAdapter, TupleSerializer,
};
use crate::{SerializeError, SerializerOptions};

// -----------------------------------------------------------------------------
// SerializerRegistry

/// Holds the serializer of every type encountered so far.
///
/// Lookups take a read lock. A missing serializer is built without holding
/// any lock and then inserted unless another thread got there first, in
/// which case the earlier instance is kept and returned to both callers.
///
/// # Examples
///
/// ```
/// use csx_script::registry::SerializerRegistry;
/// use csx_script::serializer::ConstructorSerializer;
///
/// #[derive(csx_reflect::derive::Reflect, Default)]
/// struct Token {
///     id: u32,
/// }
///
/// let registry = SerializerRegistry::new();
/// assert_eq!(csx_script::serialize_with(&registry, &Token { id: 2 }).unwrap(), "new Token { Id = 2U }");
///
/// registry.insert_type::<Token>(ConstructorSerializer::of::<Token>());
/// assert_eq!(csx_script::serialize_with(&registry, &Token { id: 2 }).unwrap(), "new Token()");
///
/// registry.remove_type::<Token>();
/// assert_eq!(csx_script::serialize_with(&registry, &Token { id: 2 }).unwrap(), "new Token { Id = 2U }");
/// ```
pub struct SerializerRegistry {
    serializers: RwLock<TypeIdMap<Arc<dyn ScriptSerializer>>>,
    factories: RwLock<Vec<Arc<dyn SerializerFactory>>>,
    options: SerializerOptions,
    #[cfg(feature = "auto_register")]
    auto_registered: AtomicBool,
}

impl SerializerRegistry {
    /// An empty registry with default options.
    #[inline]
    pub const fn new() -> Self {
        Self::with_options(SerializerOptions::new())
    }

    #[inline]
    pub const fn with_options(options: SerializerOptions) -> Self {
        Self {
            serializers: RwLock::new(TypeIdMap::new()),
            factories: RwLock::new(Vec::new()),
            options,
            #[cfg(feature = "auto_register")]
            auto_registered: AtomicBool::new(false),
        }
    }

    /// The process-wide registry used by [`serialize`](crate::serialize).
    ///
    /// With the `auto_register` feature, factories submitted through
    /// [`submit_factory!`](crate::submit_factory) are added on first use.
    pub fn global() -> &'static SerializerRegistry {
        static GLOBAL: OnceLock<SerializerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let registry = SerializerRegistry::new();
            #[cfg(feature = "auto_register")]
            registry.auto_register();
            registry
        })
    }

    #[inline]
    pub const fn options(&self) -> &SerializerOptions {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Serializers

    /// The cached serializer for `type_id`, if any.
    pub fn get(&self, type_id: TypeId) -> Option<Arc<dyn ScriptSerializer>> {
        self.serializers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    /// The serializer for the type `info` describes, created and cached on
    /// first request.
    pub fn get_or_create(
        &self,
        info: &'static TypeInfo,
    ) -> Result<Arc<dyn ScriptSerializer>, SerializeError> {
        let type_id = info.ty_id();
        if let Some(serializer) = self.get(type_id) {
            return Ok(serializer);
        }

        let created = self.create(info)?;
        let mut serializers = self.serializers.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(serializers.get_or_insert(type_id, || created)))
    }

    /// Installs `serializer` for `type_id`, replacing whatever was cached.
    pub fn insert(
        &self,
        type_id: TypeId,
        serializer: Arc<dyn ScriptSerializer>,
    ) -> Option<Arc<dyn ScriptSerializer>> {
        let previous = self
            .serializers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, serializer);
        if previous.is_some() {
            log::warn!("replaced the serializer registered for {type_id:?}");
        }
        previous
    }

    /// Installs `serializer` for `T`, replacing whatever was cached.
    pub fn insert_type<T: Typed>(
        &self,
        serializer: impl ScriptSerializer,
    ) -> Option<Arc<dyn ScriptSerializer>> {
        let previous = self
            .serializers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert_type::<T>(Arc::new(serializer));
        if previous.is_some() {
            log::warn!("replaced the serializer registered for `{}`", T::type_path());
        }
        previous
    }

    /// Evicts the serializer of `type_id`; the next request resolves the
    /// type again.
    pub fn remove(&self, type_id: TypeId) -> Option<Arc<dyn ScriptSerializer>> {
        self.serializers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id)
    }

    #[inline]
    pub fn remove_type<T: Typed>(&self) -> Option<Arc<dyn ScriptSerializer>> {
        self.remove(TypeId::of::<T>())
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.serializers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&type_id)
    }

    /// Lets `T` write its own creation expression.
    #[inline]
    pub fn register_serializable<T: ScriptSerializable>(&self) -> Option<Arc<dyn ScriptSerializer>> {
        self.insert_type::<T>(SerializableAdapter::<T>::new())
    }

    // -------------------------------------------------------------------------
    // Factories

    /// Appends a factory, consulted after the ones already registered.
    ///
    /// Factories only see types that have no cached serializer yet.
    pub fn push_factory(&self, factory: impl SerializerFactory) {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(factory));
    }

    /// Inserts a factory at `index`; panics if `index > len`.
    pub fn insert_factory(&self, index: usize, factory: impl SerializerFactory) {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(index, Arc::new(factory));
    }

    /// Removes the factory at `index`, if there is one.
    pub fn remove_factory(&self, index: usize) -> Option<Arc<dyn SerializerFactory>> {
        let mut factories = self.factories.write().unwrap_or_else(PoisonError::into_inner);
        (index < factories.len()).then(|| factories.remove(index))
    }

    pub fn clear_factories(&self) {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[inline]
    pub fn factory_len(&self) -> usize {
        self.factories.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Appends every factory submitted with
    /// [`submit_factory!`](crate::submit_factory).
    ///
    /// Only the first call on a registry has an effect. Returns `false`
    /// when the `auto_register` feature is disabled.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if self.auto_registered.swap(true, Ordering::AcqRel) {
                return true;
            }
            let mut factories = self.factories.write().unwrap_or_else(PoisonError::into_inner);
            for registration in inventory::iter::<crate::registry::FactoryRegistration> {
                factories.push(registration.create());
            }
            log::debug!("collected {} submitted serializer factories", factories.len());
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            log::warn!("`auto_register` is disabled, no submitted factories were collected");
            false
        }
    }

    // -------------------------------------------------------------------------
    // Resolution

    fn create(&self, info: &'static TypeInfo) -> Result<Arc<dyn ScriptSerializer>, SerializeError> {
        let (rule, serializer) = self.resolve(info)?;
        log::debug!("created a {rule} serializer for `{}`", info.type_path());
        Ok(serializer)
    }

    fn resolve(
        &self,
        info: &'static TypeInfo,
    ) -> Result<(&'static str, Arc<dyn ScriptSerializer>), SerializeError> {
        match info {
            TypeInfo::Primitive(primitive) => {
                return Ok(("literal", Arc::new(LiteralSerializer::new(primitive))));
            }
            TypeInfo::Nullable(_) => return Ok(("nullable", Arc::new(NullableSerializer))),
            TypeInfo::Enum(enumeration) => {
                return Ok(("enum", Arc::new(EnumSerializer::new(enumeration))));
            }
            _ => {}
        }

        if let Some(serializer) = known::recipe(info) {
            return Ok(("well-known type", serializer));
        }

        match info {
            TypeInfo::Array(_) => return Ok(("array", Arc::new(ArraySerializer::new(info)))),
            TypeInfo::Tuple(_) => return Ok(("tuple", Arc::new(TupleSerializer::new(info)))),
            _ => {}
        }

        if let Some(serializer) = self.consult_factories(info) {
            return Ok(("factory", serializer));
        }

        let type_name = info.type_path();
        match info {
            TypeInfo::Struct(object) if !object.is_constructible() => {
                Err(SerializeError::Construction { type_name })
            }
            TypeInfo::Map(_) => Ok(("dictionary", Arc::new(CollectionSerializer::new(info)))),
            TypeInfo::List(_) => Ok(("collection", Arc::new(CollectionSerializer::new(info)))),
            TypeInfo::Struct(object) => Ok(("property", Arc::new(PropertySerializer::new(object)?))),
            _ => Err(SerializeError::Initialization { type_name }),
        }
    }

    fn consult_factories(&self, info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> {
        // Factories may use the registry themselves; don't hold the lock.
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner).clone();
        factories.iter().enumerate().find_map(|(index, factory)| {
            log::trace!("probing factory #{index} for `{}`", info.type_path());
            factory.try_create(info)
        })
    }
}

impl Default for SerializerRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use core::any::TypeId;

    use csx_reflect::derive::Reflect;
    use csx_reflect::info::{TypeInfo, Typed};

    use super::SerializerRegistry;
    use crate::serializer::{ConstructorSerializer, ScriptSerializer};
    use crate::syntax::{Expr, Literal};
    use crate::{EncodeScope, SerializeError, serialize_with};

    #[derive(Reflect, Default)]
    struct Config {
        name: String,
        retries: u8,
    }

    #[derive(Reflect, Default)]
    #[reflect(abstract)]
    struct Shape {
        sides: u8,
    }

    #[derive(Reflect)]
    #[reflect(no_default_constructor)]
    struct Handle {
        raw: u64,
    }

    #[derive(Reflect, Default)]
    struct Sealed {
        #[reflect(private_set)]
        id: u32,
    }

    fn quoted(_: &dyn csx_reflect::Reflect, _: &mut EncodeScope<'_>) -> Result<Expr, SerializeError> {
        Ok(Literal::string("custom").into())
    }

    fn factory_for_config(info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> {
        info.is::<Config>()
            .then(|| Arc::new(ConstructorSerializer::new(info)) as Arc<dyn ScriptSerializer>)
    }

    #[test]
    fn serializers_are_cached() {
        let registry = SerializerRegistry::new();
        let info = Config::type_info();
        let first = registry.get_or_create(info).unwrap();
        let second = registry.get_or_create(info).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.contains(TypeId::of::<Config>()));
    }

    #[test]
    fn concurrent_requests_share_one_serializer() {
        let registry = SerializerRegistry::new();
        let created: vec::Vec<_> = std::thread::scope(|scope| {
            let handles: vec::Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get_or_create(Config::type_info()).unwrap()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        let cached = registry.get(TypeId::of::<Config>()).unwrap();
        assert!(created.iter().all(|serializer| Arc::ptr_eq(serializer, &cached)));
    }

    #[test]
    fn overrides_win_over_factories() {
        let registry = SerializerRegistry::new();
        let config = Config {
            name: "a".into(),
            retries: 2,
        };
        assert_eq!(
            serialize_with(&registry, &config).unwrap(),
            "new Config { Name = \"a\", Retries = 2 }"
        );

        // The cached serializer shadows factories added later.
        registry.push_factory(factory_for_config);
        assert_eq!(
            serialize_with(&registry, &config).unwrap(),
            "new Config { Name = \"a\", Retries = 2 }"
        );
        registry.remove_type::<Config>();
        assert_eq!(serialize_with(&registry, &config).unwrap(), "new Config()");

        assert!(registry.insert_type::<Config>(quoted).is_some());
        assert_eq!(serialize_with(&registry, &config).unwrap(), "\"custom\"");

        registry.remove_type::<Config>();
        assert!(registry.remove_factory(0).is_some());
        assert!(registry.remove_factory(0).is_none());
        assert_eq!(
            serialize_with(&registry, &config).unwrap(),
            "new Config { Name = \"a\", Retries = 2 }"
        );
    }

    #[test]
    fn factories_are_consulted_in_order() {
        let registry = SerializerRegistry::new();
        registry.push_factory(|_: &'static TypeInfo| -> Option<Arc<dyn ScriptSerializer>> { None });
        registry.push_factory(factory_for_config);
        registry.insert_factory(0, |info: &'static TypeInfo| -> Option<Arc<dyn ScriptSerializer>> {
            info.is::<Config>().then(|| Arc::new(quoted) as Arc<dyn ScriptSerializer>)
        });
        assert_eq!(registry.factory_len(), 3);
        assert_eq!(serialize_with(&registry, &Config::default()).unwrap(), "\"custom\"");

        registry.clear_factories();
        assert_eq!(registry.factory_len(), 0);
    }

    #[test]
    fn factories_do_not_see_builtin_shapes() {
        let registry = SerializerRegistry::new();
        registry.push_factory(|_: &'static TypeInfo| -> Option<Arc<dyn ScriptSerializer>> {
            Some(Arc::new(quoted))
        });
        assert_eq!(serialize_with(&registry, &(1_u8, 2_u8)).unwrap(), "(1, 2)");
        assert_eq!(serialize_with(&registry, &[3_i16]).unwrap(), "new short[] { 3 }");
        assert_eq!(serialize_with(&registry, &Some(7_u32)).unwrap(), "7U");

        // Collections and structs are open to factories.
        assert_eq!(serialize_with(&registry, &vec![1_u8]).unwrap(), "\"custom\"");
        assert_eq!(serialize_with(&registry, &Config::default()).unwrap(), "\"custom\"");
    }

    #[test]
    fn unsupported_types_fail() {
        let registry = SerializerRegistry::new();
        assert!(matches!(
            serialize_with(&registry, &Shape::default()),
            Err(SerializeError::Construction { .. })
        ));
        assert!(matches!(
            serialize_with(&registry, &Handle { raw: 1 }),
            Err(SerializeError::Construction { .. })
        ));
        let error = serialize_with(&registry, &Sealed::default()).unwrap_err();
        assert!(matches!(error, SerializeError::Initialization { .. }));
        assert!(alloc::string::ToString::to_string(&error).ends_with("does not have public writable properties"));
    }

    #[cfg(not(feature = "auto_register"))]
    #[test]
    fn auto_register_needs_the_feature() {
        assert!(!SerializerRegistry::new().auto_register());
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_runs_once() {
        let registry = SerializerRegistry::new();
        assert!(registry.auto_register());
        let collected = registry.factory_len();
        assert!(registry.auto_register());
        assert_eq!(registry.factory_len(), collected);
    }
}
