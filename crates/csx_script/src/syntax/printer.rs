//! Text rendering of the expression tree.
//!
//! `Display` on every node gives the compact single-line form. A pretty
//! [`Printer`] additionally honours `line_break` hints by putting each
//! element of a marked initializer or argument list on its own indented
//! line.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::syntax::type_name::write_rank;
use crate::syntax::{ArgumentList, Expr, Initializer, Script, Statement, TypeName};

// -----------------------------------------------------------------------------
// Printer

/// Writes tree nodes as text into any [`fmt::Write`].
///
/// ```
/// use csx_script::syntax::{Expr, Initializer, InitializerKind, Literal, Printer, TypeName};
///
/// let list = Expr::ObjectCreation {
///     ty: TypeName::named("List").with_arguments([TypeName::named("Order")]),
///     arguments: None,
///     initializer: Some(Initializer {
///         line_break: true,
///         ..Initializer::new(InitializerKind::Collection, vec![Expr::NULL, Expr::NULL])
///     }),
/// };
///
/// let mut text = String::new();
/// Printer::pretty(&mut text, "  ").expr(&list).unwrap();
/// assert_eq!(text, "new List<Order>\n{\n  null,\n  null\n}");
/// assert_eq!(list.to_string(), "new List<Order> { null, null }");
/// ```
pub struct Printer<'w, W: Write> {
    out: &'w mut W,
    indent: &'w str,
    level: usize,
    pretty: bool,
}

impl<'w, W: Write> Printer<'w, W> {
    /// A printer that ignores line-break hints.
    #[inline]
    pub fn compact(out: &'w mut W) -> Self {
        Self {
            out,
            indent: "",
            level: 0,
            pretty: false,
        }
    }

    /// A printer that breaks marked nodes over lines, indenting by `indent`
    /// per level.
    #[inline]
    pub fn pretty(out: &'w mut W, indent: &'w str) -> Self {
        Self {
            out,
            indent,
            level: 0,
            pretty: true,
        }
    }

    fn newline(&mut self, level: usize) -> fmt::Result {
        self.out.write_char('\n')?;
        for _ in 0..level {
            self.out.write_str(self.indent)?;
        }
        Ok(())
    }

    pub fn script(&mut self, script: &Script) -> fmt::Result {
        for statement in &script.statements {
            self.statement(statement)?;
            self.newline(self.level)?;
        }
        self.expr(&script.result)
    }

    pub fn statement(&mut self, statement: &Statement) -> fmt::Result {
        match statement {
            Statement::Local { name, init } => {
                write!(self.out, "var {name} = ")?;
                self.expr(init)?;
            }
            Statement::Assign { target, value } => {
                self.expr(target)?;
                self.out.write_str(" = ")?;
                self.expr(value)?;
            }
        }
        self.out.write_char(';')
    }

    fn operand(&mut self, expr: &Expr) -> fmt::Result {
        if expr.is_primary() {
            self.expr(expr)
        } else {
            self.out.write_char('(')?;
            self.expr(expr)?;
            self.out.write_char(')')
        }
    }

    pub fn expr(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::Literal(literal) => write!(self.out, "{literal}"),
            Expr::TypeRef(ty) => write!(self.out, "{ty}"),
            Expr::TypeOf(ty) => write!(self.out, "typeof({ty})"),
            Expr::Identifier(name) => self.out.write_str(name),
            Expr::MemberAccess { target, name } => {
                self.operand(target)?;
                write!(self.out, ".{name}")
            }
            Expr::BitwiseOr(left, right) => {
                self.expr(left)?;
                self.out.write_str(" | ")?;
                match **right {
                    Expr::BitwiseOr(..) => self.operand(right),
                    _ => self.expr(right),
                }
            }
            Expr::Cast { ty, expr } => {
                write!(self.out, "({ty})")?;
                self.operand(expr)
            }
            Expr::ObjectCreation {
                ty,
                arguments,
                initializer,
            } => {
                write!(self.out, "new {ty}")?;
                if let Some(arguments) = arguments {
                    self.arguments(arguments)?;
                }
                if let Some(initializer) = initializer {
                    self.trailing_initializer(initializer)?;
                }
                Ok(())
            }
            Expr::ArrayCreation {
                ty,
                sizes,
                initializer,
            } => {
                self.array_type(ty, sizes)?;
                if let Some(initializer) = initializer {
                    self.trailing_initializer(initializer)?;
                }
                Ok(())
            }
            Expr::Tuple(arguments) => self.arguments(arguments),
            Expr::Initializer(initializer) => self.initializer(initializer),
            Expr::Assignment { target, value } => {
                self.expr(target)?;
                self.out.write_str(" = ")?;
                self.expr(value)
            }
        }
    }

    fn array_type(&mut self, ty: &TypeName, sizes: &[Expr]) -> fmt::Result {
        self.out.write_str("new ")?;
        let TypeName::Array { element, ranks } = ty else {
            return write!(self.out, "{ty}");
        };
        write!(self.out, "{element}")?;
        let mut ranks = ranks.iter();
        if !sizes.is_empty() {
            ranks.next();
            self.out.write_char('[')?;
            for (index, size) in sizes.iter().enumerate() {
                if index > 0 {
                    self.out.write_str(", ")?;
                }
                self.expr(size)?;
            }
            self.out.write_char(']')?;
        }
        for &rank in ranks {
            write_rank(&mut *self.out, rank)?;
        }
        Ok(())
    }

    /// An initializer that follows a creation expression.
    fn trailing_initializer(&mut self, initializer: &Initializer) -> fmt::Result {
        if self.pretty && initializer.line_break {
            self.newline(self.level)?;
        } else {
            self.out.write_char(' ')?;
        }
        self.initializer(initializer)
    }

    fn initializer(&mut self, initializer: &Initializer) -> fmt::Result {
        if initializer.elements.is_empty() {
            return self.out.write_str("{ }");
        }
        if self.pretty && initializer.line_break {
            self.out.write_char('{')?;
            self.level += 1;
            for (index, element) in initializer.elements.iter().enumerate() {
                if index > 0 {
                    self.out.write_char(',')?;
                }
                self.newline(self.level)?;
                self.expr(element)?;
            }
            self.level -= 1;
            self.newline(self.level)?;
            self.out.write_char('}')
        } else {
            self.out.write_str("{ ")?;
            for (index, element) in initializer.elements.iter().enumerate() {
                if index > 0 {
                    self.out.write_str(", ")?;
                }
                self.expr(element)?;
            }
            self.out.write_str(" }")
        }
    }

    fn arguments(&mut self, arguments: &ArgumentList) -> fmt::Result {
        self.out.write_char('(')?;
        let broken = self.pretty && arguments.line_break;
        if broken {
            self.level += 1;
        }
        for (index, argument) in arguments.arguments.iter().enumerate() {
            if index > 0 {
                self.out.write_char(',')?;
                if !broken {
                    self.out.write_char(' ')?;
                }
            }
            if broken {
                self.newline(self.level)?;
            }
            self.expr(argument)?;
        }
        if broken {
            self.level -= 1;
        }
        self.out.write_char(')')
    }
}

// -----------------------------------------------------------------------------
// Measurement

/// Counts characters instead of storing them, and stops the printer once
/// the count passes `limit`.
struct WidthCounter {
    width: usize,
    limit: usize,
}

impl Write for WidthCounter {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.width += s.chars().count();
        if self.width > self.limit {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

/// Whether the compact rendering of `node` is longer than `limit`.
///
/// Printing stops at the first character past `limit`, so the cost is
/// bounded by `limit` rather than by the size of the subtree.
pub(crate) fn compact_len_exceeds(node: &impl fmt::Display, limit: usize) -> bool {
    let mut counter = WidthCounter { width: 0, limit };
    write!(counter, "{node}").is_err()
}

/// Renders a script with the pretty printer.
pub fn render(script: &Script, indent: &str) -> String {
    let mut text = String::new();
    // Writing into a `String` never fails.
    let _ = Printer::pretty(&mut text, indent).script(script);
    text
}

// -----------------------------------------------------------------------------
// Display

macro_rules! impl_compact_display {
    ($($ty:ty => $method:ident),* $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Printer::compact(f).$method(self)
            }
        }
    )*};
}

impl_compact_display! {
    Expr => expr,
    Initializer => initializer,
    ArgumentList => arguments,
    Statement => statement,
    Script => script,
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Printer, render};
    use crate::syntax::{
        ArgumentList, Expr, Initializer, InitializerKind, IntegerSuffix, Literal, PredefinedType,
        Script, Statement, TypeName,
    };

    fn int(value: i32) -> Expr {
        Literal::integer(value, IntegerSuffix::None).into()
    }

    #[test]
    fn operators_get_parentheses() {
        let access = TypeName::named("Access");
        let flags = Expr::TypeRef(access.clone())
            .member("Read")
            .bitwise_or(Expr::TypeRef(access.clone()).member("Write"));
        assert_eq!(flags.to_string(), "Access.Read | Access.Write");

        let cast = Expr::cast(access, int(-1));
        assert_eq!(cast.to_string(), "(Access)(-1)");

        let hidden = Expr::cast(TypeName::named("Base"), Expr::identifier("v0")).member("Value");
        assert_eq!(hidden.to_string(), "((Base)v0).Value");
    }

    #[test]
    fn array_creation_forms() {
        let empty = Expr::ArrayCreation {
            ty: TypeName::array(PredefinedType::Int.into(), [2, 1]),
            sizes: vec![int(0), int(0)],
            initializer: None,
        };
        assert_eq!(empty.to_string(), "new int[0, 0][]");

        let filled = Expr::ArrayCreation {
            ty: TypeName::array(PredefinedType::Int.into(), [2]),
            sizes: vec![],
            initializer: Some(Initializer::new(
                InitializerKind::Array,
                vec![
                    Expr::Initializer(Initializer::new(InitializerKind::Array, vec![int(1), int(2)])),
                    Expr::Initializer(Initializer::new(InitializerKind::Array, vec![int(3), int(4)])),
                ],
            )),
        };
        assert_eq!(filled.to_string(), "new int[,] { { 1, 2 }, { 3, 4 } }");
    }

    #[test]
    fn creation_forms() {
        let empty_args = Expr::ObjectCreation {
            ty: TypeName::named("ValueTuple"),
            arguments: Some(ArgumentList::empty()),
            initializer: None,
        };
        assert_eq!(empty_args.to_string(), "new ValueTuple()");

        let object = Expr::ObjectCreation {
            ty: TypeName::named("Order"),
            arguments: None,
            initializer: Some(Initializer::new(
                InitializerKind::Object,
                vec![Expr::assign(Expr::identifier("Id"), int(3))],
            )),
        };
        assert_eq!(object.to_string(), "new Order { Id = 3 }");

        let tuple = Expr::Tuple(ArgumentList::new(vec![int(1), Literal::string("a").into()]));
        assert_eq!(tuple.to_string(), "(1, \"a\")");
    }

    #[test]
    fn pretty_breaks_marked_nodes() {
        let inner = Initializer {
            line_break: true,
            ..Initializer::new(InitializerKind::Object, vec![Expr::assign(Expr::identifier("A"), int(1))])
        };
        let outer = Expr::ObjectCreation {
            ty: TypeName::named("Outer"),
            arguments: Some(ArgumentList {
                line_break: true,
                ..ArgumentList::new(vec![int(1), int(2)])
            }),
            initializer: Some(Initializer {
                line_break: true,
                ..Initializer::new(
                    InitializerKind::Object,
                    vec![Expr::assign(
                        Expr::identifier("Inner"),
                        Expr::ObjectCreation {
                            ty: TypeName::named("Inner"),
                            arguments: None,
                            initializer: Some(inner),
                        },
                    )],
                )
            }),
        };

        let mut text = String::new();
        Printer::pretty(&mut text, "    ").expr(&outer).unwrap();
        assert_eq!(
            text,
            "new Outer(\n    1,\n    2)\n{\n    Inner = new Inner\n    {\n        A = 1\n    }\n}"
        );
    }

    #[test]
    fn scripts_end_with_the_result() {
        let script = Script::new(
            vec![
                Statement::Local {
                    name: "v0".into(),
                    init: Expr::ObjectCreation {
                        ty: TypeName::named("Derived"),
                        arguments: None,
                        initializer: Some(Initializer::new(InitializerKind::Object, vec![])),
                    },
                },
                Statement::Assign {
                    target: Expr::cast(TypeName::named("Base"), Expr::identifier("v0")).member("Value"),
                    value: int(5),
                },
            ],
            Expr::identifier("v0"),
        );
        assert_eq!(
            render(&script, "    "),
            "var v0 = new Derived { };\n((Base)v0).Value = 5;\nv0"
        );
    }

    #[test]
    fn measures_compact_width() {
        let init = Initializer::new(InitializerKind::Collection, vec![int(1), int(22)]);
        assert!(super::compact_len_exceeds(&init, "{ 1, 22 }".len() - 1));
        assert!(!super::compact_len_exceeds(&init, "{ 1, 22 }".len()));
        assert!(init.clone().with_line_break_over(5).line_break);
        assert!(!init.with_line_break_over(120).line_break);
    }

    #[test]
    fn deep_nesting_breaks_only_wide_levels() {
        let mut levels = Vec::new();
        let mut inner = Expr::Initializer(Initializer::new(InitializerKind::Collection, vec![int(0)]));
        for depth in 1..400 {
            let init = Initializer::new(InitializerKind::Collection, vec![int(depth), inner])
                .with_line_break_over(40);
            levels.push(init.line_break);
            inner = Expr::Initializer(init);
        }
        // Each level adds `{ n, ` and ` }` around the one below.
        let first_broken = levels.iter().position(|broken| *broken).unwrap();
        assert!(first_broken > 0 && first_broken < 10);
        assert!(levels[first_broken..].iter().all(|broken| *broken));
    }
}
