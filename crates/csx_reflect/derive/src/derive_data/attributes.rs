//! Parsing of `#[reflect(...)]` attributes.

use syn::{Attribute, LitStr, Type, meta::ParseNestedMeta};

use crate::REFLECT_ATTRIBUTE_NAME;

fn for_each_reflect_attr(
    attrs: &[Attribute],
    mut f: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut f)?;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Container-level attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub script_name: Option<LitStr>,
    pub type_path: Option<LitStr>,
    pub declaring: Option<Type>,
    pub value_type: bool,
    pub is_abstract: bool,
    pub no_default_constructor: bool,
    pub flags: bool,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_reflect_attr(attrs, |meta| {
            if meta.path.is_ident("script_name") {
                this.script_name = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("type_path") {
                this.type_path = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("declaring") {
                this.declaring = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("value_type") {
                this.value_type = true;
            } else if meta.path.is_ident("abstract") {
                this.is_abstract = true;
            } else if meta.path.is_ident("no_default_constructor") {
                this.no_default_constructor = true;
            } else if meta.path.is_ident("flags") {
                this.flags = true;
            } else {
                return Err(meta.error("unknown container attribute"));
            }
            Ok(())
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field-level attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub base: bool,
    pub skip: bool,
    pub private: bool,
    pub private_set: bool,
    pub readonly: bool,
    pub is_static: bool,
    pub is_override: bool,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_reflect_attr(attrs, |meta| {
            if meta.path.is_ident("rename") {
                this.rename = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("base") {
                this.base = true;
            } else if meta.path.is_ident("skip") {
                this.skip = true;
            } else if meta.path.is_ident("private") {
                this.private = true;
            } else if meta.path.is_ident("private_set") {
                this.private_set = true;
            } else if meta.path.is_ident("readonly") {
                this.readonly = true;
            } else if meta.path.is_ident("static") {
                this.is_static = true;
            } else if meta.path.is_ident("override") {
                this.is_override = true;
            } else {
                return Err(meta.error("unknown field attribute"));
            }
            Ok(())
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Variant-level attributes.
#[derive(Default)]
pub(crate) struct VariantAttributes {
    pub rename: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_reflect_attr(attrs, |meta| {
            if meta.path.is_ident("rename") {
                this.rename = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unknown variant attribute"));
            }
            Ok(())
        })?;
        Ok(this)
    }
}
