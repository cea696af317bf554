//! The expression tree produced by serializers, and its text rendering.
//!
//! - [`Expr`]: one node; leaves are literals, identifiers and type
//!   references.
//! - [`TypeName`]: how a type is spelled.
//! - [`Literal`]: a literal and the form it is written in.
//! - [`Initializer`] / [`ArgumentList`]: element lists carrying a
//!   line-break hint.
//! - [`Script`]: statements plus the result expression.
//! - [`Printer`]: compact or line-broken text output.

// -----------------------------------------------------------------------------
// Modules

mod expr;
mod literal;
mod printer;
mod type_name;

// -----------------------------------------------------------------------------
// Exports

pub use expr::{ArgumentList, Expr, Initializer, InitializerKind, Script, Statement};
pub use literal::{IntegerSuffix, Literal, StringForm};
pub use printer::{Printer, render};
pub use type_name::{PredefinedType, TypeName};
