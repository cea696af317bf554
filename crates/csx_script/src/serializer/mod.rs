//! Encoders, one per shape of value.
//!
//! A [`ScriptSerializer`] is bound to one type and turns values of that
//! type into an [`Expr`]. Nested values go back through the dispatcher
//! ([`EncodeScope::get_creation_expression`]), so every encoder only
//! deals with its own level.
//!
//! - [`LiteralSerializer`]: scalars and text.
//! - [`EnumSerializer`]: enum members and flag combinations.
//! - [`ArraySerializer`]: rectangular and jagged arrays.
//! - [`ConstructorSerializer`]: `new T(a, b)` from positional getters.
//! - [`CollectionSerializer`]: `new T { a, b }` and `new T { { k, v } }`.
//! - [`TupleSerializer`]: `(a, b)`.
//! - [`PropertySerializer`]: `new T(args) { Name = value }` from reflected
//!   properties, including shadowed ones.
//! - [`TypeHandleSerializer`]: `typeof(T)`.
//! - [`NullableSerializer`]: forwards `Some(v)` to `v`'s encoder.
//!
//! Closures with the signature of
//! [`get_creation`](ScriptSerializer::get_creation) are serializers too.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod collection;
mod constructor;
mod enums;
mod literal;
mod nullable;
mod property;
mod serializable;
mod tuple;
mod type_handle;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use array::ArraySerializer;
pub use collection::{CollectionSerializer, Decomposer, Entry, Enumerator, decomposer, enumerator};
pub use constructor::ConstructorSerializer;
pub use enums::EnumSerializer;
pub use literal::LiteralSerializer;
pub use nullable::NullableSerializer;
pub use property::{Condition, PropertySerializer, PropertySerializerBuilder};
pub use serializable::ScriptSerializable;
pub use tuple::TupleSerializer;
pub use type_handle::TypeHandleSerializer;
pub use value::{Getter, ValueRef, downcast, getter, typed_getter};

pub(crate) use serializable::SerializableAdapter;

use csx_reflect::Reflect;

use crate::syntax::Expr;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// ScriptSerializer

/// Turns values of one type into creation expressions.
///
/// Serializers are created once per type by the
/// [`SerializerRegistry`](crate::registry::SerializerRegistry) and shared
/// between threads afterwards, so they hold only precomputed metadata.
///
/// # Examples
///
/// ```
/// use csx_reflect::Reflect;
/// use csx_script::syntax::{Expr, Literal};
/// use csx_script::{EncodeScope, SerializeError};
/// use csx_script::serializer::ScriptSerializer;
///
/// fn redacted(_: &dyn Reflect, _: &mut EncodeScope<'_>) -> Result<Expr, SerializeError> {
///     Ok(Literal::string("***").into())
/// }
///
/// let serializer: &dyn ScriptSerializer = &redacted;
/// # let _ = serializer;
/// ```
pub trait ScriptSerializer: Send + Sync + 'static {
    /// Builds the expression that recreates `value`.
    ///
    /// `value` is always of the type the serializer was created for; an
    /// implementation may report [`SerializeError::MismatchedType`]
    /// otherwise.
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError>;
}

impl<F> ScriptSerializer for F
where
    F: Fn(&dyn Reflect, &mut EncodeScope<'_>) -> Result<Expr, SerializeError>
        + Send
        + Sync
        + 'static,
{
    #[inline]
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        self(value, scope)
    }
}
