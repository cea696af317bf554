use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident};

use crate::derive_data::TypeAttributes;
use crate::utils::{JoinedString, StringExpr};

/// What every reflected type shares: name, generics, attributes and the
/// path to `csx_reflect`.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    csx_reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "reflected types must be 'static and cannot have lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "const parameters are not supported by `derive(Reflect)`",
                    ));
                }
            }
        }
        Ok(Self {
            attrs,
            ident,
            generics,
            csx_reflect_path: crate::path::csx_reflect(),
        })
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn csx_reflect_path(&self) -> &syn::Path {
        &self.csx_reflect_path
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    pub fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// Splits generics for an impl block, bounding every type parameter
    /// by `bounds` and appending `extra` predicates.
    pub fn split_generics(
        &self,
        bounds: TokenStream,
        extra: &[TokenStream],
    ) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let params: Vec<&Ident> = self.type_params().collect();
        let existing = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote! { #(#predicates,)* }
        });
        let where_tokens = if params.is_empty() && existing.is_none() && extra.is_empty() {
            TokenStream::new()
        } else {
            quote! { where #existing #(#params: #bounds,)* #(#extra,)* }
        };
        (quote! { #impl_generics }, quote! { #ty_generics }, where_tokens)
    }

    fn joined_path(&self, prefix: StringExpr, getter: &str) -> JoinedString {
        let type_path_ = crate::path::type_path_(&self.csx_reflect_path);
        let concat_ = {
            let exports = crate::path::macro_exports_(&self.csx_reflect_path);
            quote! { #exports::__concat }
        };
        let getter = Ident::new(getter, proc_macro2::Span::call_site());

        let mut parts = vec![prefix];
        let params: Vec<&Ident> = self.type_params().collect();
        if !params.is_empty() {
            parts.push(StringExpr::from_str("<"));
            for (index, param) in params.iter().enumerate() {
                if index > 0 {
                    parts.push(StringExpr::from_str(", "));
                }
                parts.push(StringExpr::Borrowed(quote! {
                    <#param as #type_path_>::#getter()
                }));
            }
            parts.push(StringExpr::from_str(">"));
        }
        StringExpr::join(parts, &concat_)
    }

    /// `type_path` with generics, before caching.
    pub fn type_path(&self) -> JoinedString {
        let ident = self.ident.to_string();
        let prefix = match &self.attrs.type_path {
            Some(custom) => StringExpr::Const(quote! { #custom }),
            None => StringExpr::Const(quote! {
                ::core::concat!(::core::module_path!(), "::", #ident)
            }),
        };
        self.joined_path(prefix, "type_path")
    }

    /// `type_name` with generics, before caching.
    pub fn type_name(&self) -> JoinedString {
        self.joined_path(StringExpr::from_str(&self.ident.to_string()), "type_name")
    }

    pub fn module_path(&self) -> TokenStream {
        let option_ = crate::path::option_();
        match &self.attrs.type_path {
            Some(custom) => {
                let value = custom.value();
                match value.rsplit_once("::") {
                    Some((module, _)) => quote! { #option_::Some(#module) },
                    None => quote! { #option_::None },
                }
            }
            None => quote! { #option_::Some(::core::module_path!()) },
        }
    }

    pub fn type_ident(&self) -> String {
        match &self.attrs.type_path {
            Some(custom) => {
                let value = custom.value();
                match value.rsplit_once("::") {
                    Some((_, ident)) => ident.to_owned(),
                    None => value,
                }
            }
            None => self.ident.to_string(),
        }
    }

    pub fn script_ident(&self) -> String {
        match &self.attrs.script_name {
            Some(name) => name.value(),
            None => self.type_ident(),
        }
    }

    /// Tokens returning the `&'static TypeInfo` built by `init`, cached
    /// in the cell kind that fits the type.
    pub fn cached_type_info(&self, init: TokenStream) -> TokenStream {
        let path = &self.csx_reflect_path;
        if self.is_generic() {
            let cell_ = crate::path::generic_type_info_cell_(path);
            quote! {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_insert::<Self>(|| { #init })
            }
        } else {
            let cell_ = crate::path::non_generic_type_info_cell_(path);
            quote! {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_init(|| { #init })
            }
        }
    }

    /// `.with_generics(..)` recording each type parameter by name.
    pub fn with_generics(&self) -> TokenStream {
        if !self.is_generic() {
            return TokenStream::new();
        }
        let path = &self.csx_reflect_path;
        let generics_ = crate::path::generics_(path);
        let param_ = crate::path::type_param_info_(path);
        let params = self.type_params().map(|ident| {
            let name = ident.to_string();
            quote! { #param_::new::<#ident>(#name) }
        });
        quote! {
            .with_generics(#generics_::from_params([ #(#params),* ]))
        }
    }

    /// `.with_declaring::<D>()` when a declaring type was given.
    pub fn with_declaring(&self) -> TokenStream {
        match &self.attrs.declaring {
            Some(declaring) => quote! { .with_declaring::<#declaring>() },
            None => TokenStream::new(),
        }
    }
}
