use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::utils::JoinedString;

/// Tokens returning `&'static str`; owned strings go through a path cell.
fn static_str(meta: &ReflectMeta, joined: JoinedString) -> TokenStream {
    match joined {
        JoinedString::Const(tokens) => tokens,
        JoinedString::Owned(tokens) => {
            let cell_ = crate::path::generic_type_path_cell_(meta.csx_reflect_path());
            quote! {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_insert::<Self>(|| { #tokens }).as_str()
            }
        }
    }
}

pub(crate) fn impl_type_path(meta: &ReflectMeta) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.csx_reflect_path());
    let option_ = crate::path::option_();
    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(quote! { #type_path_ }, &[]);

    let type_path = static_str(meta, meta.type_path());
    let type_name = static_str(meta, meta.type_name());
    let type_ident = meta.type_ident();
    let module_path = meta.module_path();
    let script_ident = meta.script_ident();

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #option_<&'static str> {
                #module_path
            }

            #[inline]
            fn script_ident() -> &'static str {
                #script_ident
            }
        }
    }
}
