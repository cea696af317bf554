use alloc::string::String;
use core::fmt::{self, Write};

// -----------------------------------------------------------------------------
// StringForm

/// How a string literal is delimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringForm {
    /// `"..."` with backslash escapes.
    Escaped,
    /// `@"..."`, content taken verbatim.
    Verbatim,
}

impl StringForm {
    /// The verbatim form is used only for text with line breaks that it
    /// can hold literally: no quote, no other control character, and no
    /// leading `@`.
    ///
    /// ```
    /// use csx_script::syntax::StringForm;
    ///
    /// assert_eq!(StringForm::choose("a\r\nb"), StringForm::Verbatim);
    /// assert_eq!(StringForm::choose("plain"), StringForm::Escaped);
    /// assert_eq!(StringForm::choose("say \"hi\"\n"), StringForm::Escaped);
    /// assert_eq!(StringForm::choose("@\n"), StringForm::Escaped);
    /// ```
    pub fn choose(text: &str) -> Self {
        let has_line_break = text.contains(['\r', '\n']);
        let blocked = text.starts_with('@')
            || text
                .chars()
                .any(|c| c == '"' || (c.is_control() && c != '\r' && c != '\n'));
        if has_line_break && !blocked {
            Self::Verbatim
        } else {
            Self::Escaped
        }
    }
}

// -----------------------------------------------------------------------------
// IntegerSuffix

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegerSuffix {
    None,
    U,
    L,
    UL,
}

impl IntegerSuffix {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::U => "U",
            Self::L => "L",
            Self::UL => "UL",
        }
    }
}

// -----------------------------------------------------------------------------
// Literal

/// A literal value together with the form it is written in.
///
/// Non-finite floats have no literal spelling; their `Display` falls back
/// to the `float.NaN` style member names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Null,
    Bool(bool),
    Char(char),
    String { value: String, form: StringForm },
    Integer { value: i128, suffix: IntegerSuffix },
    Float(f32),
    Double(f64),
}

impl Literal {
    /// A string literal in the form [`StringForm::choose`] picks.
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        let form = StringForm::choose(&value);
        Self::String { value, form }
    }

    #[inline]
    pub fn integer(value: impl Into<i128>, suffix: IntegerSuffix) -> Self {
        Self::Integer {
            value: value.into(),
            suffix,
        }
    }

    /// Whether the literal starts with a minus sign.
    pub fn is_negative(&self) -> bool {
        match *self {
            Self::Integer { value, .. } => value < 0,
            Self::Float(value) => value.is_sign_negative(),
            Self::Double(value) => value.is_sign_negative(),
            _ => false,
        }
    }
}

fn write_escaped_char(f: &mut impl Write, c: char, quote: char) -> fmt::Result {
    match c {
        '\\' => f.write_str("\\\\"),
        '\0' => f.write_str("\\0"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        c if c == quote => {
            f.write_char('\\')?;
            f.write_char(c)
        }
        c if c.is_control() => write!(f, "\\u{:04x}", c as u32),
        c => f.write_char(c),
    }
}

fn write_float(f: &mut impl Write, text: fmt::Arguments<'_>, suffix: char) -> fmt::Result {
    f.write_fmt(text)?;
    f.write_char(suffix)
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Char(c) => {
                f.write_char('\'')?;
                write_escaped_char(f, *c, '\'')?;
                f.write_char('\'')
            }
            Self::String {
                value,
                form: StringForm::Verbatim,
            } => write!(f, "@\"{value}\""),
            Self::String {
                value,
                form: StringForm::Escaped,
            } => {
                f.write_char('"')?;
                for c in value.chars() {
                    write_escaped_char(f, c, '"')?;
                }
                f.write_char('"')
            }
            Self::Integer { value, suffix } => write!(f, "{value}{}", suffix.as_str()),
            Self::Float(value) if value.is_nan() => f.write_str("float.NaN"),
            Self::Float(value) if value.is_infinite() => match value.is_sign_positive() {
                true => f.write_str("float.PositiveInfinity"),
                false => f.write_str("float.NegativeInfinity"),
            },
            Self::Float(value) => write_float(f, format_args!("{value:?}"), 'F'),
            Self::Double(value) if value.is_nan() => f.write_str("double.NaN"),
            Self::Double(value) if value.is_infinite() => match value.is_sign_positive() {
                true => f.write_str("double.PositiveInfinity"),
                false => f.write_str("double.NegativeInfinity"),
            },
            Self::Double(value) => write_float(f, format_args!("{value:?}"), 'D'),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{IntegerSuffix, Literal, StringForm};

    #[test]
    fn string_forms() {
        assert_eq!(Literal::string("\r").to_string(), "@\"\r\"");
        assert_eq!(Literal::string("\"").to_string(), "\"\\\"\"");
        assert_eq!(Literal::string("@\n").to_string(), "\"@\\n\"");
        assert_eq!(Literal::string("tab\there").to_string(), "\"tab\\there\"");
        assert_eq!(Literal::string("a\nb\u{1}").to_string(), "\"a\\nb\\u0001\"");
        assert_eq!(StringForm::choose(""), StringForm::Escaped);
    }

    #[test]
    fn numeric_suffixes() {
        assert_eq!(Literal::integer(7u32, IntegerSuffix::U).to_string(), "7U");
        assert_eq!(Literal::integer(-7i64, IntegerSuffix::L).to_string(), "-7L");
        assert_eq!(Literal::integer(u64::MAX, IntegerSuffix::UL).to_string(), "18446744073709551615UL");
        assert_eq!(Literal::Float(0.1).to_string(), "0.1F");
        assert_eq!(Literal::Double(1.0).to_string(), "1.0D");
        assert_eq!(Literal::Double(1e300).to_string(), "1e300D");
        assert_eq!(Literal::Double(f64::NAN).to_string(), "double.NaN");
    }

    #[test]
    fn char_escapes() {
        assert_eq!(Literal::Char('\'').to_string(), "'\\''");
        assert_eq!(Literal::Char('"').to_string(), "'\"'");
        assert_eq!(Literal::Char('\0').to_string(), "'\\0'");
        assert!(Literal::integer(-1i32, IntegerSuffix::None).is_negative());
    }
}
