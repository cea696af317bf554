use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// A string known at compile time, or computed when generated code runs.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Usable inside `concat!`: a literal or a macro such as `module_path!()`.
    Const(TokenStream),
    /// An expression of type `&'static str`.
    Borrowed(TokenStream),
}

impl StringExpr {
    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Tokens evaluating to `&'static str`.
    ///
    /// Only valid for constant expressions or inside a path cell closure
    /// that leaks the owned result.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
        }
    }

    /// Joins parts.
    ///
    /// All-constant parts fold into one `concat!`; otherwise the tokens
    /// build a `String` at runtime through `concat_fn`.
    pub fn join(parts: Vec<StringExpr>, concat_fn: &TokenStream) -> JoinedString {
        if parts.iter().all(|part| matches!(part, Self::Const(_))) {
            let inner = parts.into_iter().map(Self::into_borrowed);
            JoinedString::Const(quote! { ::core::concat!( #(#inner),* ) })
        } else {
            let inner = parts.into_iter().map(Self::into_borrowed);
            JoinedString::Owned(quote! { #concat_fn(&[ #(#inner),* ]) })
        }
    }
}

/// The result of [`StringExpr::join`].
pub(crate) enum JoinedString {
    /// A `&'static str` expression.
    Const(TokenStream),
    /// A `String` expression.
    Owned(TokenStream),
}
