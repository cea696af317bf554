//! Code generation for `derive(Reflect)`.

// -----------------------------------------------------------------------------
// Modules

mod enums;
mod structs;
mod type_path;

// -----------------------------------------------------------------------------
// Entry

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::derive_data::{ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};

pub(crate) fn match_reflect_impls(ast: DeriveInput) -> syn::Result<TokenStream> {
    let attrs = TypeAttributes::parse(&ast.attrs)?;
    let meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics)?;

    match &ast.data {
        Data::Struct(data) => {
            if meta.attrs().flags {
                return Err(syn::Error::new(
                    ast.ident.span(),
                    "`#[reflect(flags)]` applies to enums only",
                ));
            }
            let reflect_struct = ReflectStruct::new(meta, &data.fields)?;
            let type_path = type_path::impl_type_path(reflect_struct.meta());
            let rest = structs::impl_struct(&reflect_struct);
            Ok(quote! { #type_path #rest })
        }
        Data::Enum(data) => {
            let attrs = meta.attrs();
            if attrs.value_type || attrs.is_abstract || attrs.no_default_constructor {
                return Err(syn::Error::new(
                    ast.ident.span(),
                    "`value_type`, `abstract` and `no_default_constructor` apply to structs only",
                ));
            }
            let reflect_enum = ReflectEnum::new(meta, &data.variants)?;
            let type_path = type_path::impl_type_path(reflect_enum.meta());
            let rest = enums::impl_enum(&reflect_enum);
            Ok(quote! { #type_path #rest })
        }
        Data::Union(_) => Err(syn::Error::new(
            ast.ident.span(),
            "`derive(Reflect)` does not support unions",
        )),
    }
}

/// The shared body of `Reflect::reflect_kind`, `reflect_ref` and
/// `reflect_target`.
fn reflect_cast_fns(meta: &ReflectMeta, kind: &str) -> TokenStream {
    let path = meta.csx_reflect_path();
    let reflect_ = crate::path::reflect_(path);
    let reflect_kind_ = crate::path::reflect_kind_(path);
    let reflect_ref_ = crate::path::reflect_ref_(path);
    let kind = syn::Ident::new(kind, proc_macro2::Span::call_site());

    quote! {
        #[inline]
        fn reflect_kind(&self) -> #reflect_kind_ {
            #reflect_kind_::#kind
        }

        #[inline]
        fn reflect_ref(&self) -> #reflect_ref_<'_> {
            #reflect_ref_::#kind(self)
        }

        #[inline]
        fn reflect_target(&self) -> &dyn #reflect_ {
            self
        }
    }
}
