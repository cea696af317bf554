use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::syntax::{Literal, TypeName};

// -----------------------------------------------------------------------------
// Expr

/// A node of the expression tree.
///
/// The tree is plain data; building it never evaluates anything, and
/// printing it is left to [`Printer`](crate::syntax::Printer) or any other
/// formatter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Literal(Literal),
    /// A type in expression position, e.g. the target of `double.NaN`.
    TypeRef(TypeName),
    /// `typeof(T)`
    TypeOf(TypeName),
    /// A local variable.
    Identifier(Cow<'static, str>),
    /// `target.Name`
    MemberAccess {
        target: Box<Expr>,
        name: Cow<'static, str>,
    },
    /// `left | right`
    BitwiseOr(Box<Expr>, Box<Expr>),
    /// `(T)expr`
    Cast { ty: TypeName, expr: Box<Expr> },
    /// `new T(args) { initializer }`; either part may be absent.
    ObjectCreation {
        ty: TypeName,
        arguments: Option<ArgumentList>,
        initializer: Option<Initializer>,
    },
    /// `new T[sizes]...` for empty arrays, `new T[]... { ... }` otherwise.
    ///
    /// `ty` is a [`TypeName::Array`]; `sizes`, when not empty, fills the
    /// first rank specifier.
    ArrayCreation {
        ty: TypeName,
        sizes: Vec<Expr>,
        initializer: Option<Initializer>,
    },
    /// `(a, b, ...)`
    Tuple(ArgumentList),
    /// A nested `{ ... }`: a row of an array or a complex collection element.
    Initializer(Initializer),
    /// `Name = value` inside an object initializer.
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
}

impl Expr {
    pub const NULL: Expr = Expr::Literal(Literal::Null);
    pub const TRUE: Expr = Expr::Literal(Literal::Bool(true));
    pub const FALSE: Expr = Expr::Literal(Literal::Bool(false));

    #[inline]
    pub fn identifier(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Identifier(name.into())
    }

    #[inline]
    pub fn member(self, name: impl Into<Cow<'static, str>>) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            name: name.into(),
        }
    }

    #[inline]
    pub fn bitwise_or(self, right: Expr) -> Self {
        Self::BitwiseOr(Box::new(self), Box::new(right))
    }

    #[inline]
    pub fn cast(ty: TypeName, expr: Expr) -> Self {
        Self::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    #[inline]
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Whether the expression binds tighter than any operator, so it can
    /// be used as a member-access target or cast operand as is.
    pub fn is_primary(&self) -> bool {
        match self {
            Self::Literal(literal) => !literal.is_negative(),
            Self::TypeRef(_)
            | Self::TypeOf(_)
            | Self::Identifier(_)
            | Self::MemberAccess { .. }
            | Self::Tuple(_) => true,
            Self::BitwiseOr(..)
            | Self::Cast { .. }
            | Self::ObjectCreation { .. }
            | Self::ArrayCreation { .. }
            | Self::Initializer(_)
            | Self::Assignment { .. } => false,
        }
    }
}

impl From<Literal> for Expr {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

// -----------------------------------------------------------------------------
// Initializer

/// What a `{ ... }` block initializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializerKind {
    /// Property assignments.
    Object,
    /// Elements added one by one.
    Collection,
    /// Array elements or rows.
    Array,
    /// Arguments of one `Add` call, such as a key and a value.
    ComplexElement,
}

/// A brace-delimited, comma-separated list of expressions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Initializer {
    pub kind: InitializerKind,
    pub elements: Vec<Expr>,
    /// Print one element per line.
    pub line_break: bool,
}

impl Initializer {
    #[inline]
    pub fn new(kind: InitializerKind, elements: Vec<Expr>) -> Self {
        Self {
            kind,
            elements,
            line_break: false,
        }
    }

    /// Sets [`line_break`](Self::line_break) when the compact rendering is
    /// longer than `threshold`.
    pub fn with_line_break_over(mut self, threshold: usize) -> Self {
        self.line_break = crate::syntax::printer::compact_len_exceeds(&self, threshold);
        self
    }
}

// -----------------------------------------------------------------------------
// ArgumentList

/// A parenthesized, comma-separated list of expressions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgumentList {
    pub arguments: Vec<Expr>,
    /// Print one argument per line.
    pub line_break: bool,
}

impl ArgumentList {
    #[inline]
    pub fn new(arguments: Vec<Expr>) -> Self {
        Self {
            arguments,
            line_break: false,
        }
    }

    /// `()`
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets [`line_break`](Self::line_break) when the compact rendering is
    /// longer than `threshold`.
    pub fn with_line_break_over(mut self, threshold: usize) -> Self {
        self.line_break = crate::syntax::printer::compact_len_exceeds(&self, threshold);
        self
    }
}

// -----------------------------------------------------------------------------
// Statement

/// A statement that runs before the result expression of a [`Script`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// `var name = init;`
    Local {
        name: Cow<'static, str>,
        init: Expr,
    },
    /// `target = value;`
    Assign { target: Expr, value: Expr },
}

// -----------------------------------------------------------------------------
// Script

/// Statements followed by the expression whose value is the result.
///
/// Most values need no statements. They are used to assign members that
/// a derived type hides, which an object initializer cannot reach:
///
/// ```text
/// var v0 = new Derived { Value = 1 };
/// ((Base)v0).Value = "base";
/// v0
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    pub statements: Vec<Statement>,
    pub result: Expr,
}

impl Script {
    #[inline]
    pub fn new(statements: Vec<Statement>, result: Expr) -> Self {
        Self { statements, result }
    }
}

impl From<Expr> for Script {
    #[inline]
    fn from(result: Expr) -> Self {
        Self::new(Vec::new(), result)
    }
}
