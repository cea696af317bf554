use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::info::{TypeInfo, Typed};

use crate::registry::SerializerRegistry;
use crate::syntax::{Script, render};
use crate::{DeserializeError, EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// Serialize

/// Writes the construction script of `value` using the global registry.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let scores = BTreeMap::from([("ann", 3_u8), ("bob", 5)]);
/// assert_eq!(
///     csx_script::serialize(&scores).unwrap(),
///     "new SortedDictionary<string, byte> { { \"ann\", 3 }, { \"bob\", 5 } }",
/// );
/// ```
#[inline]
pub fn serialize(value: &dyn Reflect) -> Result<String, SerializeError> {
    serialize_with(SerializerRegistry::global(), value)
}

/// Writes the construction script of `value` using `registry`.
///
/// Statements hoisted by the encoders come first, one per line, followed
/// by the result expression.
pub fn serialize_with(
    registry: &SerializerRegistry,
    value: &dyn Reflect,
) -> Result<String, SerializeError> {
    let script = serialize_script(registry, value)?;
    Ok(render(&script, registry.options().indent()))
}

/// Builds the expression tree of `value` without rendering it.
pub fn serialize_script(
    registry: &SerializerRegistry,
    value: &dyn Reflect,
) -> Result<Script, SerializeError> {
    let mut scope = EncodeScope::new(registry);
    let result = scope.get_creation_expression(value)?;
    Ok(scope.into_script(result))
}

// -----------------------------------------------------------------------------
// Deserialize

/// Runs construction scripts.
///
/// The engine only writes scripts; turning text back into a value is left
/// to an external interpreter plugged in through this trait.
pub trait Evaluator {
    type Error;

    /// Evaluates `script` and returns the value it produces, which should
    /// be of the type `target` describes.
    fn evaluate(
        &self,
        script: &str,
        target: &'static TypeInfo,
        options: &EvaluateOptions,
    ) -> Result<Box<dyn Reflect>, Self::Error>;
}

/// Modules and namespaces made available to an [`Evaluator`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluateOptions {
    pub references: Vec<String>,
    pub imports: Vec<String>,
}

impl EvaluateOptions {
    /// Namespaces imported for every evaluation.
    pub const DEFAULT_IMPORTS: [&'static str; 2] = ["System", "System.Collections.Generic"];

    #[inline]
    pub const fn new() -> Self {
        Self {
            references: Vec::new(),
            imports: Vec::new(),
        }
    }

    #[inline]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.references.push(reference.into());
        self
    }

    #[inline]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// These options with the default imports for `target` added: its own
    /// module (dotted) and [`DEFAULT_IMPORTS`](Self::DEFAULT_IMPORTS).
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn resolved_for(&self, target: &TypeInfo) -> Self {
        let module = target
            .ty()
            .module_path()
            .map(|path| path.replace("::", "."));

        let mut imports: Vec<String> = Vec::with_capacity(self.imports.len() + 3);
        let defaults = module
            .into_iter()
            .chain(Self::DEFAULT_IMPORTS.iter().map(ToString::to_string));
        for import in defaults.chain(self.imports.iter().cloned()) {
            if !imports.contains(&import) {
                imports.push(import);
            }
        }

        Self {
            references: self.references.clone(),
            imports,
        }
    }
}

/// Evaluates `text` with `evaluator` and returns the produced `T`.
///
/// The evaluator sees `options` with the default imports of `T` added
/// (see [`EvaluateOptions::resolved_for`]). Its errors are passed through
/// unchanged.
pub fn deserialize<T, E>(
    evaluator: &E,
    text: &str,
    options: &EvaluateOptions,
) -> Result<T, DeserializeError<E::Error>>
where
    T: Reflect + Typed,
    E: Evaluator + ?Sized,
{
    let target = T::type_info();
    let options = options.resolved_for(target);
    let value = evaluator
        .evaluate(text, target, &options)
        .map_err(DeserializeError::Evaluation)?;

    let found = value.reflect_type_path();
    value.take::<T>().map_err(|_| DeserializeError::MismatchedType {
        expected: T::type_path(),
        found,
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use csx_reflect::Reflect;
    use csx_reflect::derive::Reflect;
    use csx_reflect::info::TypeInfo;

    use super::{EvaluateOptions, Evaluator, deserialize, serialize, serialize_script};
    use crate::DeserializeError;
    use crate::registry::SerializerRegistry;

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    /// Answers a fixed set of scripts and records the options it saw.
    #[derive(Default)]
    struct TableEvaluator {
        seen: RefCell<Vec<EvaluateOptions>>,
    }

    impl Evaluator for TableEvaluator {
        type Error = String;

        fn evaluate(
            &self,
            script: &str,
            _: &'static TypeInfo,
            options: &EvaluateOptions,
        ) -> Result<Box<dyn Reflect>, String> {
            self.seen.borrow_mut().push(options.clone());
            match script {
                "new Point { X = 1, Y = 2 }" => Ok(Box::new(Point { x: 1, y: 2 })),
                "\"text\"" => Ok(Box::new(String::from("text"))),
                _ => Err(String::from("unexpected token")),
            }
        }
    }

    #[test]
    fn scripts_evaluate_back() {
        let point = Point { x: 1, y: 2 };
        let text = serialize(&point).unwrap();
        assert_eq!(text, "new Point { X = 1, Y = 2 }");

        let evaluator = TableEvaluator::default();
        let options = EvaluateOptions::new().with_reference("geometry.dll");
        let back: Point = deserialize(&evaluator, &text, &options).unwrap();
        assert_eq!(back, point);

        let seen = evaluator.seen.borrow();
        assert_eq!(seen[0].references, vec![String::from("geometry.dll")]);
        assert_eq!(&seen[0].imports[1..], ["System", "System.Collections.Generic"]);
        assert!(!seen[0].imports[0].contains("::"));
    }

    #[test]
    fn imports_are_merged_without_duplicates() {
        let options = EvaluateOptions::new().with_import("System").with_import("System.Linq");
        let resolved = options.resolved_for(<u8 as csx_reflect::info::Typed>::type_info());
        assert_eq!(resolved.imports, ["System", "System.Collections.Generic", "System.Linq"]);

        let resolved = options.resolved_for(<String as csx_reflect::info::Typed>::type_info());
        assert_eq!(resolved.imports[0], "alloc.string");
    }

    #[test]
    fn evaluation_errors_pass_through() {
        let evaluator = TableEvaluator::default();
        let result = deserialize::<Point, _>(&evaluator, "new Point {", &EvaluateOptions::new());
        assert!(matches!(result, Err(DeserializeError::Evaluation(ref e)) if e == "unexpected token"));

        let result = deserialize::<Point, _>(&evaluator, "\"text\"", &EvaluateOptions::new());
        assert!(matches!(
            result,
            Err(DeserializeError::MismatchedType { found: "alloc::string::String", .. })
        ));
    }

    #[derive(Reflect, Default)]
    struct Polygon {
        corners: Vec<Point>,
    }

    #[test]
    fn vectors_serialize() {
        let registry = SerializerRegistry::new();
        assert_eq!(
            super::serialize_with(&registry, &vec![1_i32, 2]).unwrap(),
            "new List<int> { 1, 2 }"
        );

        let polygon = Polygon {
            corners: vec![Point { x: 1, y: 0 }, Point::default()],
        };
        assert_eq!(
            super::serialize_with(&registry, &polygon).unwrap(),
            "new Polygon { Corners = new List<Point> { new Point { X = 1 }, new Point { } } }"
        );
    }

    #[test]
    fn scripts_keep_statements_apart() {
        let script = serialize_script(&SerializerRegistry::new(), &Point { x: 0, y: 5 }).unwrap();
        assert!(script.statements.is_empty());
        assert_eq!(script.result.to_string(), "new Point { Y = 5 }");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn trees_survive_json() {
        use crate::syntax::{Script, render};

        let registry = SerializerRegistry::new();
        let script = serialize_script(&registry, &vec![Some(1.5_f32), None]).unwrap();
        let json = serde_json::to_string(&script).unwrap();
        assert!(json.contains("ObjectCreation"));

        let back: Script = serde_json::from_str(&json).unwrap();
        assert_eq!(render(&back, "  "), "new List<float?> { 1.5F, null }");
    }
}
