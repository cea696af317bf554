use alloc::vec::Vec;

use csx_reflect::Reflect;
use csx_reflect::info::{EnumInfo, EnumMember};
use csx_reflect::ops::ReflectRef;

use crate::syntax::{Expr, IntegerSuffix, Literal, TypeName};
use crate::type_syntax::enum_name;
use crate::{EncodeScope, SerializeError};

// -----------------------------------------------------------------------------
// EnumSerializer

/// Encodes enum values as member accesses.
///
/// - A value equal to a member is `Type.Member`; with several members
///   sharing a value, the first declared one is used.
/// - A flag value is the OR-chain of the largest named combinations that
///   make it up: with `Read = 1, Write = 2, ReadWrite = 3, Exec = 4`,
///   `7` becomes `Access.ReadWrite | Access.Exec`.
/// - A value no member combination produces exactly is written as one cast
///   of the whole value, `(Type)9`. Bits that members do cover are not
///   split out: `Read | (Type)8` is never produced, and the same holds for
///   enums without flags.
#[derive(Clone, Debug)]
pub struct EnumSerializer {
    ty: TypeName,
    type_path: &'static str,
    members: Vec<EnumMember>,
    flags: bool,
}

#[inline]
const fn is_part_of(part: i128, whole: i128) -> bool {
    part != 0 && part & whole == part
}

impl EnumSerializer {
    pub fn new(info: &EnumInfo) -> Self {
        let mut members: Vec<EnumMember> = Vec::with_capacity(info.members().len());
        for member in info.members() {
            if members.iter().all(|known| known.value() != member.value()) {
                members.push(*member);
            }
        }

        Self {
            ty: enum_name(info),
            type_path: info.type_path(),
            members,
            flags: info.is_flags(),
        }
    }

    fn member_access(&self, member: &EnumMember) -> Expr {
        Expr::TypeRef(self.ty.clone()).member(member.name())
    }

    /// The members whose union is `value`, preferring named combinations
    /// over their parts.
    fn decompose(&self, value: i128) -> Option<Vec<&EnumMember>> {
        let mut parts: Vec<&EnumMember> = self
            .members
            .iter()
            .filter(|member| is_part_of(member.value(), value))
            .collect();

        // Every member of the initial set is visited, including those an
        // earlier combination already absorbed.
        let snapshot: Vec<i128> = parts.iter().map(|member| member.value()).collect();
        for current in snapshot {
            let covered = self
                .members
                .iter()
                .filter(|member| is_part_of(member.value(), current))
                .count();
            if covered > 1 {
                parts.retain(|member| {
                    member.value() == current || !is_part_of(member.value(), current)
                });
            }
        }

        let union = parts.iter().fold(0, |acc, member| acc | member.value());
        (!parts.is_empty() && union == value).then_some(parts)
    }
}

impl super::ScriptSerializer for EnumSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        _scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        let ReflectRef::Enum(value) = value.reflect_ref() else {
            return Err(SerializeError::MismatchedType {
                expected: self.type_path,
                found: value.reflect_type_path(),
            });
        };
        let discriminant = value.discriminant();

        if let Some(member) = self.members.iter().find(|m| m.value() == discriminant) {
            return Ok(self.member_access(member));
        }

        if self.flags
            && let Some(parts) = self.decompose(discriminant)
        {
            let mut parts = parts.into_iter().map(|member| self.member_access(member));
            if let Some(first) = parts.next() {
                return Ok(parts.fold(first, Expr::bitwise_or));
            }
        }

        log::trace!(
            "no member combination of `{}` equals {discriminant}, emitting a cast",
            self.type_path
        );
        Ok(Expr::cast(
            self.ty.clone(),
            Literal::integer(discriminant, IntegerSuffix::None).into(),
        ))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use csx_reflect::Reflect;
    use csx_reflect::derive::Reflect;
    use csx_reflect::impl_reflect_flags;
    use csx_reflect::info::Typed;

    use super::EnumSerializer;
    use crate::registry::SerializerRegistry;
    use crate::serializer::ScriptSerializer;
    use crate::EncodeScope;

    bitflags::bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct Access: u8 {
            const NONE = 0;
            const READ = 1;
            const WRITE = 2;
            const READ_WRITE = 3;
            const EXEC = 4;
            const EXEC_ONLY = 4;
            const WRITE_EXEC = 6;
        }
    }

    impl_reflect_flags!(Access => "FileAccess");

    #[derive(Reflect, Clone, Copy)]
    enum Level {
        Low = 1,
        High = 3,
    }

    fn encode<T: Reflect + Typed>(value: &T) -> String {
        let info = T::type_info().as_enum().unwrap();
        let registry = SerializerRegistry::new();
        let mut scope = EncodeScope::new(&registry);
        EnumSerializer::new(info)
            .get_creation(value, &mut scope)
            .unwrap()
            .to_string()
    }

    #[test]
    fn exact_members() {
        assert_eq!(encode(&Level::High), "Level.High");
        assert_eq!(encode(&Access::NONE), "FileAccess.NONE");
        assert_eq!(encode(&Access::EXEC), "FileAccess.EXEC");
        assert_eq!(encode(&Access::READ_WRITE), "FileAccess.READ_WRITE");
    }

    #[test]
    fn composite_members_win_over_parts() {
        let all = Access::READ | Access::WRITE | Access::EXEC;
        assert_eq!(encode(&all), "FileAccess.READ_WRITE | FileAccess.WRITE_EXEC");
    }

    #[test]
    fn inexpressible_values_are_cast() {
        assert_eq!(encode(&Access::from_bits_retain(9)), "(FileAccess)9");
        assert_eq!(encode(&Access::from_bits_retain(0x83)), "(FileAccess)131");
    }
}
