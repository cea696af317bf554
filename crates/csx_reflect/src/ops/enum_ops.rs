use crate::Reflect;
use crate::info::EnumMember;

/// An enumeration value.
///
/// For bit flags the discriminant is the raw bit pattern, which need
/// not match any single declared member.
pub trait Enum: Reflect {
    /// The numeric value, widened to `i128`.
    fn discriminant(&self) -> i128;

    /// The first declared member carrying this value, if any.
    fn member(&self) -> Option<EnumMember> {
        let info = self.reflect_type_info().as_enum().ok()?;
        info.member_by_value(self.discriminant()).copied()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Enum;
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::Typed;

    #[derive(Reflect, Clone, Copy)]
    enum Level {
        Low = 1,
        #[reflect(rename = "Mid")]
        Medium = 5,
        High = 10,
    }

    #[derive(Reflect, Clone, Copy)]
    #[reflect(flags, script_name = "FileAccess")]
    enum Access {
        None = 0,
        Read = 1,
        Write = 2,
    }

    #[test]
    fn derived_enum_members() {
        let info = Level::type_info().as_enum().unwrap();
        assert!(!info.is_flags());
        assert_eq!(info.member_by_value(5).map(|m| m.name()), Some("Mid"));
        assert_eq!(Level::High.discriminant(), 10);
        assert_eq!(Level::Low.member().map(|m| m.name()), Some("Low"));
    }

    #[test]
    fn flags_and_defaults() {
        let info = Access::type_info().as_enum().unwrap();
        assert!(info.is_flags());
        assert_eq!(info.script_ident(), "FileAccess");
        assert!(Access::None.is_default_value());
        assert!(!Access::Write.is_default_value());
        assert!(!Access::Read.is_default_value());
    }
}
