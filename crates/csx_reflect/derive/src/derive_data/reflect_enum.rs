use syn::{Fields, Ident, Variant, punctuated::Punctuated, token::Comma};

use crate::derive_data::{ReflectMeta, VariantAttributes};

/// A variant of a reflected enum.
pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub attrs: VariantAttributes,
}

impl EnumVariant<'_> {
    /// The member name in emitted script.
    pub fn member_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => self.ident.to_string(),
        }
    }
}

/// A field-less enum.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<EnumVariant<'a>>,
}

impl<'a> ReflectEnum<'a> {
    pub fn new(meta: ReflectMeta<'a>, variants: &'a Punctuated<Variant, Comma>) -> syn::Result<Self> {
        if meta.is_generic() {
            return Err(syn::Error::new(
                meta.ident().span(),
                "`derive(Reflect)` does not support generic enums",
            ));
        }

        let variants = variants
            .iter()
            .map(|variant| {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "`derive(Reflect)` supports field-less enums only",
                    ));
                }
                Ok(EnumVariant {
                    ident: &variant.ident,
                    attrs: VariantAttributes::parse(&variant.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, variants })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[EnumVariant<'a>] {
        &self.variants
    }
}
