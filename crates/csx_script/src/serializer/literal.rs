use csx_reflect::Reflect;
use csx_reflect::info::{PrimitiveInfo, PrimitiveKind};
use csx_reflect::ops::{Primitive, ReflectRef};

use crate::syntax::{Expr, IntegerSuffix, Literal, PredefinedType, TypeName};
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// LiteralSerializer

/// Encodes scalars and text as literals.
///
/// | value | literal |
/// |---|---|
/// | `u32` | `7U` |
/// | `i64` / `u64` | `7L` / `7UL` |
/// | other integers | `7` |
/// | `f32` / `f64` | `0.5F` / `0.5D` |
/// | NaN, infinities | `double.NaN`, `float.PositiveInfinity`, ... |
/// | `char` | `'a'`, above `U+FFFF` an error |
/// | text | `"a\tb"` or `@"a` + line break + `b"` |
///
/// Text takes the verbatim form only when it can hold the content
/// literally; see [`StringForm::choose`](crate::syntax::StringForm::choose).
#[derive(Clone, Copy, Debug)]
pub struct LiteralSerializer {
    kind: PrimitiveKind,
    type_path: &'static str,
}

impl LiteralSerializer {
    #[inline]
    pub fn new(info: &PrimitiveInfo) -> Self {
        Self {
            kind: info.primitive_kind(),
            type_path: info.type_path(),
        }
    }

    /// The literal spelling of a primitive value.
    ///
    /// ```
    /// use csx_reflect::ops::Primitive;
    /// use csx_script::serializer::LiteralSerializer;
    ///
    /// assert_eq!(LiteralSerializer::literal(Primitive::U64(9)).to_string(), "9UL");
    /// assert_eq!(LiteralSerializer::literal(Primitive::F64(f64::NAN)).to_string(), "double.NaN");
    /// assert_eq!(LiteralSerializer::literal(Primitive::Str("\r")).to_string(), "@\"\r\"");
    /// ```
    pub fn literal(value: Primitive<'_>) -> Expr {
        match value {
            Primitive::Bool(true) => Expr::TRUE,
            Primitive::Bool(false) => Expr::FALSE,
            Primitive::Char(c) => Literal::Char(c).into(),
            Primitive::I8(v) => Literal::integer(v, IntegerSuffix::None).into(),
            Primitive::I16(v) => Literal::integer(v, IntegerSuffix::None).into(),
            Primitive::I32(v) => Literal::integer(v, IntegerSuffix::None).into(),
            Primitive::I64(v) => Literal::integer(v, IntegerSuffix::L).into(),
            Primitive::U8(v) => Literal::integer(v, IntegerSuffix::None).into(),
            Primitive::U16(v) => Literal::integer(v, IntegerSuffix::None).into(),
            Primitive::U32(v) => Literal::integer(v, IntegerSuffix::U).into(),
            Primitive::U64(v) => Literal::integer(v, IntegerSuffix::UL).into(),
            Primitive::F32(v) if v.is_finite() => Literal::Float(v).into(),
            Primitive::F32(v) => non_finite(PredefinedType::Float, v.is_nan(), v.is_sign_positive()),
            Primitive::F64(v) if v.is_finite() => Literal::Double(v).into(),
            Primitive::F64(v) => non_finite(PredefinedType::Double, v.is_nan(), v.is_sign_positive()),
            Primitive::Str(text) => Literal::string(text).into(),
        }
    }
}

/// `double.NaN` and friends, as member accesses rather than literals.
fn non_finite(ty: PredefinedType, nan: bool, positive: bool) -> Expr {
    let member = match (nan, positive) {
        (true, _) => "NaN",
        (false, true) => "PositiveInfinity",
        (false, false) => "NegativeInfinity",
    };
    Expr::TypeRef(TypeName::Predefined(ty)).member(member)
}

impl super::ScriptSerializer for LiteralSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        _scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        match value.reflect_ref() {
            ReflectRef::Primitive(Primitive::Char(c)) if u32::from(c) > 0xFFFF => {
                Err(SerializeError::UnrepresentableChar {
                    type_name: self.type_path,
                    value: c,
                })
            }
            ReflectRef::Primitive(primitive) if primitive.kind() == self.kind => {
                Ok(Self::literal(primitive))
            }
            _ => Err(SerializeError::MismatchedType {
                expected: self.type_path,
                found: value.reflect_type_path(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use csx_reflect::ops::Primitive;

    use super::LiteralSerializer;
    use crate::registry::SerializerRegistry;
    use crate::{SerializeError, serialize_with};

    fn text(value: Primitive<'_>) -> alloc::string::String {
        LiteralSerializer::literal(value).to_string()
    }

    #[test]
    fn integer_suffixes_follow_width() {
        assert_eq!(text(Primitive::I8(-128)), "-128");
        assert_eq!(text(Primitive::U8(255)), "255");
        assert_eq!(text(Primitive::I16(-1234)), "-1234");
        assert_eq!(text(Primitive::U16(1234)), "1234");
        assert_eq!(text(Primitive::I32(-123456789)), "-123456789");
        assert_eq!(text(Primitive::U32(1234565789)), "1234565789U");
        assert_eq!(text(Primitive::I64(-1234567890123456789)), "-1234567890123456789L");
        assert_eq!(text(Primitive::U64(1234567890123456789)), "1234567890123456789UL");
    }

    #[test]
    fn floats_and_specials() {
        assert_eq!(text(Primitive::F32(-1.234)), "-1.234F");
        assert_eq!(text(Primitive::F64(-1.23456789)), "-1.23456789D");
        assert_eq!(text(Primitive::F64(1.0)), "1.0D");
        assert_eq!(text(Primitive::F32(f32::INFINITY)), "float.PositiveInfinity");
        assert_eq!(text(Primitive::F64(f64::NEG_INFINITY)), "double.NegativeInfinity");
        assert_eq!(text(Primitive::F32(f32::NAN)), "float.NaN");
    }

    #[test]
    fn text_and_chars() {
        assert_eq!(text(Primitive::Bool(true)), "true");
        assert_eq!(text(Primitive::Char('a')), "'a'");
        assert_eq!(text(Primitive::Char('\'')), "'\\''");
        assert_eq!(text(Primitive::Str("value")), "\"value\"");
        assert!(text(Primitive::Str("\r")).starts_with("@\""));
        assert!(text(Primitive::Str("\"")).starts_with("\"\\\""));
        assert!(text(Primitive::Str("@\n")).starts_with("\"@"));
    }

    #[test]
    fn chars_must_fit_one_utf16_unit() {
        let registry = SerializerRegistry::new();
        assert_eq!(serialize_with(&registry, &'\u{FFFF}').unwrap(), "'\u{FFFF}'");
        assert_eq!(
            serialize_with(&registry, &'\u{1F600}'),
            Err(SerializeError::UnrepresentableChar {
                type_name: "char",
                value: '\u{1F600}',
            })
        );
        assert_eq!(
            serialize_with(&registry, &alloc::vec!['a', '\u{10000}']),
            Err(SerializeError::UnrepresentableChar {
                type_name: "char",
                value: '\u{10000}',
            })
        );
    }
}
