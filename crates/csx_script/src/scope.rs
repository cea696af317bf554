use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::ops::{Primitive, ReflectRef};

use crate::registry::SerializerRegistry;
use crate::serializer::ValueRef;
use crate::syntax::{ArgumentList, Expr, Initializer, InitializerKind, Script, Statement};
use crate::{SerializeError, SerializerOptions};

// -----------------------------------------------------------------------------
// EncodeScope

/// State of one serialization: the dispatcher entry point plus everything
/// produced besides the result expression.
///
/// Serializers receive the scope and call
/// [`get_creation_expression`](Self::get_creation_expression) (or
/// [`encode`](Self::encode)) for every nested value, so all recursion
/// goes through one place that resolves serializers, tracks depth and
/// collects statements.
///
/// ```
/// use csx_script::EncodeScope;
/// use csx_script::registry::SerializerRegistry;
///
/// let registry = SerializerRegistry::new();
/// let mut scope = EncodeScope::new(&registry);
/// let list = scope.get_creation_expression(&vec![Some(1_u8), None]).unwrap();
/// assert_eq!(list.to_string(), "new List<byte?> { 1, null }");
/// ```
pub struct EncodeScope<'r> {
    registry: &'r SerializerRegistry,
    statements: Vec<Statement>,
    next_local: usize,
    depth: usize,
}

impl<'r> EncodeScope<'r> {
    #[inline]
    pub fn new(registry: &'r SerializerRegistry) -> Self {
        Self {
            registry,
            statements: Vec::new(),
            next_local: 0,
            depth: 0,
        }
    }

    #[inline]
    pub fn registry(&self) -> &'r SerializerRegistry {
        self.registry
    }

    #[inline]
    pub fn options(&self) -> &'r SerializerOptions {
        self.registry.options()
    }

    /// Encodes any value.
    ///
    /// `None` and booleans are answered directly; every other value is
    /// handed to the serializer the registry holds for its runtime type.
    pub fn get_creation_expression(&mut self, value: &dyn Reflect) -> Result<Expr, SerializeError> {
        let value = value.reflect_target();
        match value.reflect_ref() {
            ReflectRef::Nullable(nullable) => {
                return match nullable.value() {
                    Some(inner) => self.get_creation_expression(inner),
                    None => Ok(Expr::NULL),
                };
            }
            ReflectRef::Primitive(Primitive::Bool(flag)) => {
                return Ok(if flag { Expr::TRUE } else { Expr::FALSE });
            }
            _ => {}
        }

        let limit = self.options().max_depth();
        if self.depth >= limit {
            return Err(SerializeError::DepthLimit {
                limit,
                type_name: value.reflect_type_path(),
            });
        }

        let serializer = self.registry.get_or_create(value.reflect_type_info())?;
        self.depth += 1;
        let result = serializer.get_creation(value, self);
        self.depth -= 1;
        result
    }

    /// Encodes a getter result; [`ValueRef::Null`] is `null`.
    #[inline]
    pub fn encode(&mut self, value: ValueRef<'_>) -> Result<Expr, SerializeError> {
        match value.get() {
            Some(value) => self.get_creation_expression(value),
            None => Ok(Expr::NULL),
        }
    }

    /// A local variable name not used before in this scope: `v0`, `v1`, ...
    pub fn fresh_local(&mut self) -> Cow<'static, str> {
        let name = format!("v{}", self.next_local);
        self.next_local += 1;
        Cow::Owned(name)
    }

    /// Appends a statement that runs before the result expression.
    #[inline]
    pub fn push_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// An initializer broken over lines when it is too long for one.
    #[inline]
    pub fn initializer(&self, kind: InitializerKind, elements: Vec<Expr>) -> Initializer {
        Initializer::new(kind, elements).with_line_break_over(self.options().line_break_threshold())
    }

    /// An argument list broken over lines when it is too long for one.
    #[inline]
    pub fn argument_list(&self, arguments: Vec<Expr>) -> ArgumentList {
        ArgumentList::new(arguments).with_line_break_over(self.options().line_break_threshold())
    }

    /// Finishes the scope with `result` as the value of the script.
    #[inline]
    pub fn into_script(self, result: Expr) -> Script {
        Script::new(self.statements, result)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::EncodeScope;
    use crate::registry::SerializerRegistry;
    use crate::serializer::ValueRef;
    use crate::{SerializeError, SerializerOptions};

    #[test]
    fn null_and_booleans_skip_the_registry() {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        assert_eq!(scope.get_creation_expression(&None::<u8>).unwrap().to_string(), "null");
        assert_eq!(scope.get_creation_expression(&Some(true)).unwrap().to_string(), "true");
        assert_eq!(scope.encode(ValueRef::Null).unwrap().to_string(), "null");
        assert!(registry.get(core::any::TypeId::of::<bool>()).is_none());
    }

    #[test]
    fn wrappers_are_transparent() {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        let boxed: Box<i32> = Box::new(5);
        assert_eq!(scope.get_creation_expression(&boxed).unwrap().to_string(), "5");
    }

    #[test]
    fn locals_are_numbered() {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        assert_eq!(scope.fresh_local(), "v0");
        assert_eq!(scope.fresh_local(), "v1");
    }

    #[test]
    fn depth_is_limited() {
        let registry = SerializerRegistry::with_options(SerializerOptions::new().with_max_depth(2));
        let mut scope = EncodeScope::new(&registry);
        let nested: Vec<Vec<i32>> = vec![vec![1]];
        assert!(matches!(
            scope.get_creation_expression(&nested),
            Err(SerializeError::DepthLimit { limit: 2, .. })
        ));

        let shallow: Vec<i32> = vec![1];
        assert!(scope.get_creation_expression(&shallow).is_ok());
    }
}
