use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectEnum;

pub(crate) fn impl_enum(reflect_enum: &ReflectEnum) -> TokenStream {
    let meta = reflect_enum.meta();
    let path = meta.csx_reflect_path();
    let ident = meta.ident();

    let reflect_ = crate::path::reflect_(path);
    let typed_ = crate::path::typed_(path);
    let type_info_ = crate::path::type_info_(path);
    let enum_info_ = crate::path::enum_info_(path);
    let enum_member_ = crate::path::enum_member_(path);
    let enum_ops_ = crate::path::enum_ops_(path);

    let variants = reflect_enum.variants();
    let members = variants.iter().map(|variant| {
        let name = variant.member_name();
        let variant = variant.ident;
        quote! { #enum_member_::new(#name, Self::#variant as i128) }
    });
    let flags = meta.attrs().flags;
    let with_declaring = meta.with_declaring();

    let type_info = meta.cached_type_info(quote! {
        #type_info_::Enum(
            #enum_info_::new::<Self>(&[ #(#members),* ])
                .with_flags(#flags)
                #with_declaring
        )
    });

    let arms = variants.iter().map(|variant| {
        let variant = variant.ident;
        quote! { Self::#variant => Self::#variant as i128, }
    });
    let cast_fns = super::reflect_cast_fns(meta, "Enum");

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                #type_info
            }
        }

        impl #enum_ops_ for #ident {
            fn discriminant(&self) -> i128 {
                match *self {
                    #(#arms)*
                }
            }
        }

        impl #reflect_ for #ident {
            #cast_fns

            #[inline]
            fn is_default_value(&self) -> bool {
                #enum_ops_::discriminant(self) == 0
            }
        }
    }
}
