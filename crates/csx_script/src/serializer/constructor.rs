use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::info::{TypeInfo, Typed};

use crate::serializer::Getter;
use crate::syntax::{ArgumentList, Expr, TypeName};
use crate::type_syntax::type_name;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// ConstructorSerializer

/// Encodes a value as a constructor call on components read by getters.
///
/// Each getter's result is encoded on its own and passed positionally:
/// a duration becomes `new TimeSpan(1234L)`. Without getters the call is
/// written with an empty argument list, `new ValueTuple()`, unless
/// [`with_empty_argument_list(false)`](Self::with_empty_argument_list)
/// drops the parentheses for a creation that carries an initializer.
///
/// ```
/// use core::time::Duration;
/// use csx_script::registry::SerializerRegistry;
/// use csx_script::serializer::{ConstructorSerializer, ValueRef, typed_getter};
///
/// let millis = ConstructorSerializer::of::<Duration>()
///     .with_getter(typed_getter::<Duration, _>(|d| ValueRef::owned(d.as_millis() as u32)));
///
/// let registry = SerializerRegistry::new();
/// registry.insert_type::<Duration>(millis);
///
/// let text = csx_script::serialize_with(&registry, &Duration::from_secs(2)).unwrap();
/// assert_eq!(text, "new TimeSpan(2000U)");
/// ```
#[derive(Clone)]
pub struct ConstructorSerializer {
    ty: TypeName,
    getters: Vec<Getter>,
    empty_argument_list: bool,
}

impl ConstructorSerializer {
    /// A parameterless constructor call on the script spelling of `info`.
    #[inline]
    pub fn new(info: &TypeInfo) -> Self {
        Self::named(type_name(info))
    }

    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self::new(T::type_info())
    }

    /// A parameterless constructor call on an explicitly spelled type.
    pub fn named(ty: TypeName) -> Self {
        Self {
            ty,
            getters: Vec::new(),
            empty_argument_list: true,
        }
    }

    /// Appends a constructor argument.
    #[inline]
    pub fn with_getter(mut self, getter: Getter) -> Self {
        self.getters.push(getter);
        self
    }

    #[inline]
    pub fn with_getters(mut self, getters: impl IntoIterator<Item = Getter>) -> Self {
        self.getters.extend(getters);
        self
    }

    /// Whether a call without arguments is written as `new T()` (the
    /// default) or as `new T`.
    #[inline]
    pub fn with_empty_argument_list(mut self, empty_argument_list: bool) -> Self {
        self.empty_argument_list = empty_argument_list;
        self
    }

    #[inline]
    pub fn type_name(&self) -> &TypeName {
        &self.ty
    }

    #[inline]
    pub fn has_arguments(&self) -> bool {
        !self.getters.is_empty()
    }

    /// The encoded argument list for `value`, or `None` when the creation
    /// is written without parentheses.
    pub fn arguments(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Option<ArgumentList>, SerializeError> {
        if self.getters.is_empty() {
            return Ok(self.empty_argument_list.then(ArgumentList::empty));
        }

        let mut arguments = Vec::with_capacity(self.getters.len());
        for getter in &self.getters {
            let component = getter(value)?;
            arguments.push(scope.encode(component)?);
        }
        Ok(Some(scope.argument_list(arguments)))
    }
}

impl super::ScriptSerializer for ConstructorSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        Ok(Expr::ObjectCreation {
            ty: self.ty.clone(),
            arguments: self.arguments(value, scope)?,
            initializer: None,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use csx_reflect::derive::Reflect;

    use super::ConstructorSerializer;
    use crate::EncodeScope;
    use crate::registry::SerializerRegistry;
    use crate::serializer::{ScriptSerializer, ValueRef, typed_getter};

    #[derive(Reflect)]
    #[reflect(no_default_constructor)]
    struct Money {
        amount: i64,
        currency: String,
    }

    fn encode(serializer: &ConstructorSerializer, value: &Money) -> String {
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        serializer.get_creation(value, &mut scope).unwrap().to_string()
    }

    #[test]
    fn positional_arguments() {
        let serializer = ConstructorSerializer::of::<Money>()
            .with_getter(typed_getter::<Money, _>(|m| ValueRef::Borrowed(&m.amount)))
            .with_getter(typed_getter::<Money, _>(|m| ValueRef::Borrowed(&m.currency)));
        let money = Money {
            amount: -5,
            currency: "EUR".into(),
        };
        assert_eq!(encode(&serializer, &money), "new Money(-5L, \"EUR\")");
    }

    #[test]
    fn empty_argument_list_is_optional() {
        let money = Money {
            amount: 0,
            currency: String::new(),
        };
        let with_parens = ConstructorSerializer::of::<Money>();
        assert_eq!(encode(&with_parens, &money), "new Money()");

        let bare = ConstructorSerializer::of::<Money>().with_empty_argument_list(false);
        assert_eq!(encode(&bare, &money), "new Money");
    }
}
