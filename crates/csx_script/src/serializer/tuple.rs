use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::info::{TupleInfo, TypeInfo};
use csx_reflect::ops::{ReflectRef, Tuple};

use crate::serializer::{ConstructorSerializer, getter};
use crate::syntax::{ArgumentList, Expr};
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// TupleSerializer

/// Encodes tuples.
///
/// Tuples of two or more fields use the literal syntax, `(1, "a")`.
/// Shorter ones have no literal form and are constructed instead:
/// `new ValueTuple()` and `new ValueTuple<int>(1)`.
#[derive(Clone)]
pub struct TupleSerializer {
    type_path: &'static str,
    field_len: usize,
    constructor: Option<ConstructorSerializer>,
}

impl TupleSerializer {
    pub fn new(info: &TypeInfo) -> Self {
        let type_path = info.type_path();
        let field_len = info.as_tuple().map_or(0, TupleInfo::field_len);
        let constructor = (field_len < 2).then(|| {
            ConstructorSerializer::new(info).with_getters((0..field_len).map(move |index| {
                getter(move |value| Ok(as_tuple(value, type_path)?.field(index).into()))
            }))
        });

        Self {
            type_path,
            field_len,
            constructor,
        }
    }
}

fn as_tuple<'a>(value: &'a dyn Reflect, expected: &'static str) -> Result<&'a dyn Tuple, SerializeError> {
    match value.reflect_ref() {
        ReflectRef::Tuple(tuple) => Ok(tuple),
        _ => Err(SerializeError::MismatchedType {
            expected,
            found: value.reflect_type_path(),
        }),
    }
}

impl super::ScriptSerializer for TupleSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        if let Some(constructor) = &self.constructor {
            return constructor.get_creation(value, scope);
        }

        let tuple = as_tuple(value, self.type_path)?;
        let mut fields = Vec::with_capacity(self.field_len);
        for index in 0..self.field_len {
            fields.push(scope.encode(tuple.field(index).into())?);
        }
        Ok(Expr::Tuple(ArgumentList::new(fields)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use csx_reflect::Reflect;
    use csx_reflect::info::Typed;

    use super::TupleSerializer;
    use crate::EncodeScope;
    use crate::registry::SerializerRegistry;
    use crate::serializer::ScriptSerializer;

    fn encode<T: Reflect + Typed>(value: &T) -> String {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        TupleSerializer::new(T::type_info())
            .get_creation(value, &mut scope)
            .unwrap()
            .to_string()
    }

    #[test]
    fn literal_syntax_from_two_fields() {
        assert_eq!(encode(&(1_i32, String::from("a"))), "(1, \"a\")");
        assert_eq!(encode(&(true, 2_u64, None::<i32>)), "(true, 2UL, null)");
    }

    #[test]
    fn short_tuples_are_constructed() {
        assert_eq!(encode(&()), "new ValueTuple()");
        assert_eq!(encode(&(7_i8,)), "new ValueTuple<sbyte>(7)");
    }
}
