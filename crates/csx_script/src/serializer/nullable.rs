use csx_reflect::Reflect;
use csx_reflect::ops::ReflectRef;

use crate::syntax::Expr;
use crate::{EncodeScope, SerializeError};

/// Encodes `Option<T>`: `None` is `null`, `Some(v)` is whatever `v`
/// encodes to.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullableSerializer;

impl super::ScriptSerializer for NullableSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        match value.reflect_ref() {
            ReflectRef::Nullable(nullable) => scope.encode(nullable.value().into()),
            _ => scope.get_creation_expression(value),
        }
    }
}
