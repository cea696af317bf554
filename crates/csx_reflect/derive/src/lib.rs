//! `#[derive(Reflect)]` for the `csx_reflect` crate.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// Implements `TypePath`, `Typed`, `Reflect` and the matching view trait.
///
/// # Structs
///
/// A struct with named fields becomes a `Struct`. Each field is a
/// property named after the field in PascalCase (`unit_price` becomes
/// `UnitPrice`).
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(script_name = "Order")]
/// struct ShopOrder {
///     #[reflect(base)]
///     entity: Entity,
///     #[reflect(rename = "ID")]
///     id: u32,
///     #[reflect(readonly)]
///     created: Duration,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Container attributes:
///
/// - `script_name = "..."`: the identifier used in emitted script.
/// - `type_path = "..."`: replaces the module path (generics are appended).
/// - `value_type`: copy semantics; the value is default when every field is.
/// - `abstract`: instances can never be created.
/// - `no_default_constructor`: no public parameterless constructor.
/// - `declaring = Outer<T>`: the type this one is nested in. The nested
///   type must list the declaring type's parameters first.
///
/// Field attributes:
///
/// - `base`: the field holds the inherited base type, which must itself
///   implement `Struct`. At most one field may carry it.
/// - `skip`: not reflected.
/// - `rename = "..."`: the property name.
/// - `private`: no public getter or setter.
/// - `private_set`: no public setter.
/// - `readonly`: no setter at all.
/// - `static`: a static property.
/// - `override`: overrides the base property of the same name instead of
///   shadowing it.
///
/// # Enums
///
/// An enum without fields becomes an `Enum`. The container attribute
/// `flags` marks it as a set of bit flags; `script_name`, `type_path` and
/// `declaring` work as for structs. Variants accept `rename = "..."`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(flags)]
/// enum Access {
///     None = 0,
///     Read = 1,
///     Write = 2,
///     ReadWrite = 3,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::match_reflect_impls(ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
