use syn::{Fields, Ident, Type};

use crate::derive_data::{FieldAttributes, ReflectMeta};
use crate::utils::pascal_case;

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The property name in emitted script.
    pub fn property_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => pascal_case(&self.ident.to_string()),
        }
    }
}

/// A struct with named fields, split into its base field and properties.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    base: Option<StructField<'a>>,
    properties: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(syn::Error::new(
                meta.ident().span(),
                "`derive(Reflect)` supports structs with named fields only",
            ));
        };

        let mut base: Option<StructField<'a>> = None;
        let mut properties = Vec::with_capacity(named.named.len());

        for field in &named.named {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }
            // Named fields always carry an identifier.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let field = StructField {
                ident,
                ty: &field.ty,
                attrs,
            };
            if field.attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "at most one field can be marked `#[reflect(base)]`",
                    ));
                }
                base = Some(field);
            } else {
                properties.push(field);
            }
        }

        let mut seen: Vec<String> = Vec::with_capacity(properties.len());
        for field in &properties {
            let name = field.property_name();
            if seen.contains(&name) {
                return Err(syn::Error::new_spanned(
                    field.ident,
                    format!("duplicate property name `{name}`"),
                ));
            }
            seen.push(name);
        }

        Ok(Self {
            meta,
            base,
            properties,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn base(&self) -> Option<&StructField<'a>> {
        self.base.as_ref()
    }

    #[inline]
    pub fn properties(&self) -> &[StructField<'a>] {
        &self.properties
    }
}
