use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// SerializeError

/// Why a value could not be turned into a creation expression.
///
/// Every variant names the offending type by its full path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerializeError {
    /// The type cannot be instantiated without arguments.
    #[error("The type {type_name} does not have a public parameterless constructor")]
    Construction { type_name: &'static str },

    /// The type has nothing that could be assigned after construction.
    #[error("The type {type_name} does not have public writable properties")]
    Initialization { type_name: &'static str },

    /// An override names a property that cannot be assigned.
    #[error("The type {type_name} does not have a public nonstatic writable property {property}")]
    Configuration {
        type_name: &'static str,
        property: String,
    },

    /// A serializer was handed a value of another type.
    #[error("expected a value of type {expected}, found {found}")]
    MismatchedType {
        expected: &'static str,
        found: &'static str,
    },

    /// A reflected value does not expose a property its type info declares.
    #[error("the value of type {type_name} does not expose the property {property}")]
    MissingProperty {
        type_name: &'static str,
        property: &'static str,
    },

    /// A `char` outside the Basic Multilingual Plane has no single UTF-16
    /// code unit to stand for it.
    #[error("the character {value:?} of type {type_name} does not fit in one UTF-16 code unit")]
    UnrepresentableChar { type_name: &'static str, value: char },

    /// The value graph nests deeper than the configured limit.
    #[error("nesting exceeds {limit} levels at a value of type {type_name}")]
    DepthLimit { limit: usize, type_name: &'static str },
}

// -----------------------------------------------------------------------------
// DeserializeError

/// Why [`deserialize`](crate::deserialize) failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeserializeError<E> {
    /// The evaluator rejected the text; its error is passed through as is.
    #[error("the script could not be evaluated")]
    Evaluation(#[source] E),

    /// The evaluator produced a value of another type.
    #[error("expected the script to produce {expected}, found {found}")]
    MismatchedType {
        expected: &'static str,
        found: &'static str,
    },
}
