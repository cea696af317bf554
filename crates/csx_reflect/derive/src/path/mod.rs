//! Paths into `csx_reflect` used by generated code.
//!
//! Kept in one place so generated code follows the crate layout from a
//! single spot.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path under which the calling crate reaches `csx_reflect`.
///
/// Reads the caller's `Cargo.toml`, so it is resolved once per derive and
/// passed around afterwards.
pub(crate) fn csx_reflect() -> syn::Path {
    csx_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("csx_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! define_paths {
    ($($name:ident => $($seg:ident)::+;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(csx_reflect_path: &syn::Path) -> TokenStream {
                quote! { #csx_reflect_path::$($seg)::+ }
            }
        )*
    };
}

define_paths! {
    reflect_ => Reflect;
    macro_exports_ => __macro_exports;
    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    enum_info_ => info::EnumInfo;
    enum_member_ => info::EnumMember;
    property_info_ => info::PropertyInfo;
    property_flags_ => info::PropertyFlags;
    generics_ => info::Generics;
    type_param_info_ => info::TypeParamInfo;
    reflect_kind_ => info::ReflectKind;
    reflect_ref_ => ops::ReflectRef;
    struct_ops_ => ops::Struct;
    enum_ops_ => ops::Enum;
    generic_type_path_cell_ => impls::GenericTypePathCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
}

/// `::core::option::Option`, spelled out for hygiene.
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}
