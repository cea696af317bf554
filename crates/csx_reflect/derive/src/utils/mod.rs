mod string_expr;

pub(crate) use string_expr::{JoinedString, StringExpr};

/// Converts a snake_case field name to a PascalCase property name.
///
/// A raw identifier prefix is dropped; consecutive or edge underscores
/// produce no empty segments.
pub(crate) fn pascal_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    for segment in ident.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::pascal_case;

    #[test]
    fn converts_field_names() {
        assert_eq!(pascal_case("unit_price"), "UnitPrice");
        assert_eq!(pascal_case("id"), "Id");
        assert_eq!(pascal_case("r#type"), "Type");
        assert_eq!(pascal_case("_hidden__value_"), "HiddenValue");
        assert_eq!(pascal_case("already_Pascal"), "AlreadyPascal");
    }
}
