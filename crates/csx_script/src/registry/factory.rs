use alloc::sync::Arc;

use csx_reflect::info::TypeInfo;

use crate::serializer::ScriptSerializer;

// -----------------------------------------------------------------------------
// SerializerFactory

/// A rule that may provide the serializer for a type.
///
/// Factories are consulted in registration order for types the built-in
/// rules do not claim; the first `Some` wins and is cached.
///
/// ```
/// use std::sync::Arc;
///
/// use csx_reflect::info::TypeInfo;
/// use csx_script::registry::SerializerRegistry;
/// use csx_script::serializer::{ConstructorSerializer, ScriptSerializer};
///
/// #[derive(csx_reflect::derive::Reflect, Default)]
/// struct Marker {
///     id: u8,
/// }
///
/// let registry = SerializerRegistry::new();
/// registry.push_factory(|info: &'static TypeInfo| -> Option<Arc<dyn ScriptSerializer>> {
///     info.is::<Marker>()
///         .then(|| Arc::new(ConstructorSerializer::new(info)) as Arc<dyn ScriptSerializer>)
/// });
///
/// let text = csx_script::serialize_with(&registry, &Marker { id: 1 }).unwrap();
/// assert_eq!(text, "new Marker()");
/// ```
pub trait SerializerFactory: Send + Sync + 'static {
    fn try_create(&self, info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>>;
}

impl<F> SerializerFactory for F
where
    F: Fn(&'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> + Send + Sync + 'static,
{
    #[inline]
    fn try_create(&self, info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> {
        self(info)
    }
}

// -----------------------------------------------------------------------------
// FactoryRegistration

/// A factory submitted at link time with
/// [`submit_factory!`](crate::submit_factory).
pub struct FactoryRegistration {
    create: fn() -> Arc<dyn SerializerFactory>,
}

impl FactoryRegistration {
    #[doc(hidden)]
    #[inline]
    pub const fn new(create: fn() -> Arc<dyn SerializerFactory>) -> Self {
        Self { create }
    }

    #[inline]
    pub fn create(&self) -> Arc<dyn SerializerFactory> {
        (self.create)()
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(FactoryRegistration);

/// Registers a [`SerializerFactory`] for
/// [`SerializerRegistry::auto_register`](crate::registry::SerializerRegistry::auto_register).
///
/// The expression is evaluated each time a registry collects the
/// submitted factories. Requires the `auto_register` feature.
///
/// ```ignore
/// csx_script::submit_factory!(|info: &'static TypeInfo| -> Option<Arc<dyn ScriptSerializer>> {
///     info.is::<Secret>().then(|| Arc::new(redacted) as Arc<dyn ScriptSerializer>)
/// });
/// ```
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_factory {
    ($factory:expr) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::registry::FactoryRegistration::new(
                || -> $crate::__macro_exports::Arc<dyn $crate::registry::SerializerFactory> {
                    $crate::__macro_exports::Arc::new($factory)
                }
            )
        }
    };
}
