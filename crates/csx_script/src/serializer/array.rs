use alloc::vec;
use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::info::TypeInfo;
use csx_reflect::ops::{Array, ReflectRef};

use crate::syntax::{Expr, Initializer, InitializerKind, IntegerSuffix, Literal, TypeName};
use crate::type_syntax::type_name;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// ArraySerializer

/// Encodes arrays of any rank, jagged or not.
///
/// A non-empty array lists its elements in nested initializers, one level
/// per dimension, walking each dimension from its lower bound:
/// `new int[,] { { 1, 2 }, { 3, 4 } }`. An empty array only states its
/// sizes, `new int[0, 0][]`.
///
/// Whether `T[][]` or `T[,]` is emitted follows from the type, never from
/// the data.
#[derive(Clone, Debug)]
pub struct ArraySerializer {
    ty: TypeName,
    type_path: &'static str,
}

impl ArraySerializer {
    pub fn new(info: &TypeInfo) -> Self {
        Self {
            ty: type_name(info),
            type_path: info.type_path(),
        }
    }

    fn dimension(
        &self,
        array: &dyn Array,
        dim: usize,
        indices: &mut Vec<isize>,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Vec<Expr>, SerializeError> {
        let lower = array.lower_bound(dim);
        let length = array.length(dim);
        let mut elements = Vec::with_capacity(length);

        for offset in 0..length {
            indices.push(lower + offset as isize);
            let element = if dim + 1 < array.rank() {
                self.dimension(array, dim + 1, indices, scope)
                    .map(|inner| Expr::Initializer(Initializer::new(InitializerKind::Array, inner)))
            } else {
                scope.encode(array.get(indices).into())
            };
            indices.pop();
            elements.push(element?);
        }

        Ok(elements)
    }
}

impl super::ScriptSerializer for ArraySerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        let ReflectRef::Array(array) = value.reflect_ref() else {
            return Err(SerializeError::MismatchedType {
                expected: self.type_path,
                found: value.reflect_type_path(),
            });
        };

        if array.is_empty() {
            let zero = Expr::from(Literal::integer(0, IntegerSuffix::None));
            return Ok(Expr::ArrayCreation {
                ty: self.ty.clone(),
                sizes: vec![zero; array.rank()],
                initializer: None,
            });
        }

        let mut indices = Vec::with_capacity(array.rank());
        let elements = self.dimension(array, 0, &mut indices, scope)?;
        Ok(Expr::ArrayCreation {
            ty: self.ty.clone(),
            sizes: Vec::new(),
            initializer: Some(scope.initializer(InitializerKind::Array, elements)),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use csx_reflect::Reflect;
    use csx_reflect::info::Typed;
    use csx_reflect::ops::MultiArray;

    use super::ArraySerializer;
    use crate::EncodeScope;
    use crate::registry::SerializerRegistry;
    use crate::serializer::ScriptSerializer;

    fn encode<T: Reflect + Typed>(value: &T) -> String {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        ArraySerializer::new(T::type_info())
            .get_creation(value, &mut scope)
            .unwrap()
            .to_string()
    }

    #[test]
    fn rectangular_and_jagged() {
        let grid = MultiArray::new([2, 2], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(encode(&grid), "new int[,] { { 1, 2 }, { 3, 4 } }");

        let jagged: [[Option<i32>; 2]; 2] = [[Some(1), None], [None, Some(3)]];
        assert_eq!(encode(&jagged), "new int?[][] { new int?[] { 1, null }, new int?[] { null, 3 } }");
    }

    #[test]
    fn arrays_of_rectangular_arrays() {
        let inner = |a: u64, b: u64| MultiArray::new([2, 1], vec![a, b]).unwrap();
        let outer = [inner(1, 2), inner(3, 4)];
        assert_eq!(
            encode(&outer),
            "new ulong[][,] { new ulong[,] { { 1UL }, { 2UL } }, new ulong[,] { { 3UL }, { 4UL } } }"
        );
    }

    #[test]
    fn empty_arrays_state_sizes() {
        let empty: [[i32; 3]; 0] = [];
        assert_eq!(encode(&empty), "new int[0][]");

        let flat = MultiArray::<String, 2>::new([0, 4], Vec::new()).unwrap();
        assert_eq!(encode(&flat), "new string[0, 0]");
    }

    #[test]
    fn lower_bounds_are_walked() {
        let shifted = MultiArray::new([2], vec![7i16, 8]).unwrap().with_lower_bounds([5]);
        assert_eq!(encode(&shifted), "new short[] { 7, 8 }");
    }
}
