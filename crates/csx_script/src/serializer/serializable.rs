use core::marker::PhantomData;

use csx_reflect::Reflect;
use csx_reflect::info::Typed;

use crate::serializer::downcast;
use crate::syntax::Expr;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// ScriptSerializable

/// A type that knows how to write its own creation expression.
///
/// Register it with
/// [`SerializerRegistry::register_serializable`](crate::registry::SerializerRegistry::register_serializable).
///
/// ```
/// use csx_reflect::derive::Reflect;
/// use csx_script::registry::SerializerRegistry;
/// use csx_script::serializer::ScriptSerializable;
/// use csx_script::syntax::{Expr, TypeName};
/// use csx_script::{EncodeScope, SerializeError};
///
/// #[derive(Reflect)]
/// struct Origin {
///     x: i32,
/// }
///
/// impl ScriptSerializable for Origin {
///     fn get_creation(&self, _: &mut EncodeScope<'_>) -> Result<Expr, SerializeError> {
///         Ok(Expr::TypeRef(TypeName::named("Origin")).member("Zero"))
///     }
/// }
///
/// let registry = SerializerRegistry::new();
/// registry.register_serializable::<Origin>();
/// let text = csx_script::serialize_with(&registry, &Origin { x: 0 }).unwrap();
/// assert_eq!(text, "Origin.Zero");
/// ```
pub trait ScriptSerializable: Reflect + Typed {
    fn get_creation(&self, scope: &mut EncodeScope<'_>) -> Result<Expr, SerializeError>;
}

/// Serializer that forwards to [`ScriptSerializable::get_creation`].
pub(crate) struct SerializableAdapter<T>(PhantomData<fn() -> T>);

impl<T> SerializableAdapter<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ScriptSerializable> super::ScriptSerializer for SerializableAdapter<T> {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        downcast::<T>(value)?.get_creation(scope)
    }
}
