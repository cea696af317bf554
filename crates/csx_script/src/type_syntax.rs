//! Spelling of reflected types in emitted script.

use alloc::boxed::Box;
use alloc::vec::Vec;

use csx_reflect::info::{EnumInfo, Generics, InfoRef, StructInfo, Type, TypeInfo};

use crate::syntax::TypeName;

/// The script spelling of `info`.
///
/// - primitives use keywords (`int`, `string`, ...);
/// - `Option<T>` is `T?` for value types and plain `T` otherwise;
/// - arrays name their innermost element followed by every rank;
/// - tuples of two or more are `(T1, T2)`, smaller ones `ValueTuple<..>`;
/// - everything else is `Declaring.Ident<Args>`, where the declaring
///   type's arguments are left to the qualifier.
///
/// ```
/// use csx_reflect::info::Typed;
/// use csx_script::type_syntax::type_name;
///
/// let name = type_name(<Vec<Option<i32>>>::type_info());
/// assert_eq!(name.to_string(), "List<int?>");
/// ```
pub fn type_name(info: &TypeInfo) -> TypeName {
    match info {
        TypeInfo::Primitive(primitive) => TypeName::Predefined(primitive.primitive_kind().into()),
        TypeInfo::Nullable(nullable) => {
            let inner = nullable.inner().type_info();
            let name = type_name(inner);
            if inner.is_value_type() {
                TypeName::Nullable(Box::new(name))
            } else {
                name
            }
        }
        TypeInfo::Array(_) => {
            let mut ranks = Vec::new();
            let mut current = info;
            while let TypeInfo::Array(array) = current {
                ranks.push(array.rank());
                current = array.element().type_info();
            }
            TypeName::Array {
                element: Box::new(type_name(current)),
                ranks,
            }
        }
        TypeInfo::Tuple(tuple) if tuple.field_len() >= 2 => {
            TypeName::Tuple(tuple.fields().iter().map(info_name).collect())
        }
        _ => named(info.ty(), info.generics(), info.declaring()),
    }
}

/// The script spelling of a struct level, e.g. as the target of a cast.
pub fn struct_name(info: &StructInfo) -> TypeName {
    named(info.ty(), info.generics(), info.declaring())
}

/// The script spelling of an enum, as the target of member accesses.
pub fn enum_name(info: &EnumInfo) -> TypeName {
    named(info.ty(), info.generics(), info.declaring())
}

#[inline]
fn info_name(info: &InfoRef) -> TypeName {
    type_name(info.type_info())
}

fn named(ty: &Type, generics: &Generics, declaring: Option<&InfoRef>) -> TypeName {
    let Some(declaring) = declaring else {
        return TypeName::named(ty.script_ident())
            .with_arguments(generics.iter().map(|param| info_name(param.arg())));
    };

    let declaring = declaring.type_info();
    let outer_len = declaring.generics().len();
    let qualifier = type_name(declaring);

    TypeName::named(ty.script_ident())
        .with_arguments(generics.skip(outer_len).iter().map(|param| info_name(param.arg())))
        .with_qualifier(qualifier)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use csx_reflect::derive::Reflect;
    use csx_reflect::info::Typed;
    use csx_reflect::ops::MultiArray;

    use super::type_name;

    #[derive(Reflect, Default)]
    struct Outer<T> {
        value: T,
    }

    #[derive(Reflect, Default)]
    #[reflect(declaring = Outer<T>)]
    struct Inner<T, U> {
        first: T,
        second: U,
    }

    fn name_of<T: Typed>() -> String {
        type_name(T::type_info()).to_string()
    }

    #[test]
    fn primitive_and_nullable_names() {
        assert_eq!(name_of::<u64>(), "ulong");
        assert_eq!(name_of::<Option<u8>>(), "byte?");
        assert_eq!(name_of::<Option<String>>(), "string");
    }

    #[test]
    fn collection_names() {
        assert_eq!(name_of::<BTreeMap<String, Vec<i16>>>(), "SortedDictionary<string, List<short>>");
        assert_eq!(name_of::<(i32, String)>(), "(int, string)");
        assert_eq!(name_of::<(i32,)>(), "ValueTuple<int>");
        assert_eq!(name_of::<()>(), "ValueTuple");
    }

    #[test]
    fn array_rank_chain() {
        assert_eq!(name_of::<[[i32; 2]; 3]>(), "int[][]");
        assert_eq!(name_of::<MultiArray<[u8; 4], 2>>(), "byte[,][]");
    }

    #[test]
    fn nested_generic_types() {
        assert_eq!(name_of::<Outer<u8>>(), "Outer<byte>");
        assert_eq!(name_of::<Inner<i32, String>>(), "Outer<int>.Inner<string>");
    }
}
