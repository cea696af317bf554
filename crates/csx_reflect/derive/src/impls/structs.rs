use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField};

/// `PropertyFlags` expression for a field, or nothing for plain public.
fn property_flags(field: &StructField, flags_: &TokenStream) -> Option<TokenStream> {
    let attrs = &field.attrs;
    let mut removed = Vec::new();
    let mut added = Vec::new();

    if attrs.private {
        removed.push(quote! { PUBLIC_GETTER });
        removed.push(quote! { PUBLIC_SETTER });
    } else if attrs.private_set {
        removed.push(quote! { PUBLIC_SETTER });
    }
    if attrs.readonly {
        removed.push(quote! { WRITABLE });
        if !attrs.private && !attrs.private_set {
            removed.push(quote! { PUBLIC_SETTER });
        }
    }
    if attrs.is_static {
        added.push(quote! { STATIC });
    }
    if attrs.is_override {
        added.push(quote! { OVERRIDE });
    }

    if removed.is_empty() && added.is_empty() {
        return None;
    }

    let mut flags = quote! { #flags_::PUBLIC };
    for name in removed {
        flags = quote! { #flags.difference(#flags_::#name) };
    }
    for name in added {
        flags = quote! { #flags.union(#flags_::#name) };
    }
    Some(flags)
}

pub(crate) fn impl_struct(reflect_struct: &ReflectStruct) -> TokenStream {
    let meta = reflect_struct.meta();
    let path = meta.csx_reflect_path();
    let ident = meta.ident();

    let reflect_ = crate::path::reflect_(path);
    let typed_ = crate::path::typed_(path);
    let type_info_ = crate::path::type_info_(path);
    let struct_info_ = crate::path::struct_info_(path);
    let property_info_ = crate::path::property_info_(path);
    let property_flags_ = crate::path::property_flags_(path);
    let struct_ops_ = crate::path::struct_ops_(path);
    let option_ = crate::path::option_();

    let properties = reflect_struct.properties();
    let base = reflect_struct.base();

    // Field types only need bounds when they can mention a parameter.
    let (typed_extra, reflect_extra, struct_extra) = if meta.is_generic() {
        let tys = properties.iter().map(|field| field.ty);
        let typed: Vec<TokenStream> = tys
            .clone()
            .chain(base.map(|field| field.ty))
            .map(|ty| quote! { #ty: #typed_ })
            .collect();
        let reflect: Vec<TokenStream> = tys
            .chain(base.map(|field| field.ty))
            .map(|ty| quote! { #ty: #reflect_ })
            .collect();
        let structs: Vec<TokenStream> = base
            .map(|field| {
                let ty = field.ty;
                quote! { #ty: #struct_ops_ }
            })
            .into_iter()
            .collect();
        (typed, reflect, structs)
    } else {
        (Vec::new(), Vec::new(), Vec::new())
    };
    let mut reflect_and_struct = reflect_extra.clone();
    reflect_and_struct.extend(struct_extra.iter().cloned());

    let bounds = quote! { #reflect_ + #typed_ };

    // Typed
    let property_infos = properties.iter().map(|field| {
        let name = field.property_name();
        let ty = field.ty;
        let flags = property_flags(field, &property_flags_).map(|flags| quote! { .with_flags(#flags) });
        quote! { #property_info_::new::<Self, #ty>(#name) #flags }
    });
    let with_base = base.map(|field| {
        let ty = field.ty;
        quote! { .with_base::<#ty>() }
    });
    let attrs = meta.attrs();
    let with_value_type = attrs.value_type.then(|| quote! { .with_value_type(true) });
    let with_abstract = attrs.is_abstract.then(|| quote! { .with_abstract(true) });
    let with_default_constructor = attrs
        .no_default_constructor
        .then(|| quote! { .with_default_constructor(false) });
    let with_generics = meta.with_generics();
    let with_declaring = meta.with_declaring();

    let type_info = meta.cached_type_info(quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#property_infos),* ])
                #with_base
                #with_value_type
                #with_abstract
                #with_default_constructor
                #with_generics
                #with_declaring
        )
    });

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds.clone(), &typed_extra);
    let typed_impl = quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #type_info
            }
        }
    };

    // Struct
    let arms = properties.iter().map(|field| {
        let name = field.property_name();
        let member = field.ident;
        quote! { #name => #option_::Some(&self.#member as &dyn #reflect_), }
    });
    let fallback = match base {
        Some(field) => {
            let member = field.ident;
            quote! { #struct_ops_::property(&self.#member, declaring, name) }
        }
        None => quote! { #option_::None },
    };

    let mut struct_bounds = typed_extra.clone();
    struct_bounds.extend(reflect_and_struct.iter().cloned());
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds.clone(), &struct_bounds);
    let struct_impl = quote! {
        impl #impl_generics #struct_ops_ for #ident #ty_generics #where_clause {
            fn property(
                &self,
                declaring: ::core::any::TypeId,
                name: &str,
            ) -> #option_<&dyn #reflect_> {
                if declaring == ::core::any::TypeId::of::<Self>() {
                    match name {
                        #(#arms)*
                        _ => #option_::None,
                    }
                } else {
                    #fallback
                }
            }
        }
    };

    // Reflect
    let is_default = if attrs.value_type {
        let members = base.into_iter().chain(properties).map(|field| field.ident);
        quote! { true #(&& #reflect_::is_default_value(&self.#members))* }
    } else {
        quote! { false }
    };
    let cast_fns = super::reflect_cast_fns(meta, "Struct");

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds, &struct_bounds);
    let reflect_impl = quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #cast_fns

            #[inline]
            fn is_default_value(&self) -> bool {
                #is_default
            }
        }
    };

    quote! {
        #typed_impl
        #struct_impl
        #reflect_impl
    }
}
