//! Attribute helpers for conditionally compiled binding signatures.
//!
//! Both macros exist because the qualifiers they add cannot be written behind a plain
//! `cfg_attr`: `extern "C"` is part of the function signature and PyO3 does not see nested
//! attributes of a conditional `pymethods` block.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Abi, Attribute, ImplItem, ImplItemFn, ItemFn, ItemImpl, Meta, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Qualifiers accepted by [`fn_attr()`], in the order they appear in a signature.
struct Qualifiers {
    constness: Option<Token![const]>,
    unsafety: Option<Token![unsafe]>,
    abi: Option<Abi>,
}

impl Parse for Qualifiers {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let qualifiers = Self {
            constness: input.parse()?,
            unsafety: input.parse()?,
            abi: input.parse()?,
        };
        if !input.is_empty() {
            return Err(input.error("expected `const`, `unsafe` or `extern \"ABI\"`"));
        }
        Ok(qualifiers)
    }
}

/// Add signature qualifiers to a free function.
///
/// Meant to be used under a `cfg_attr` so a function is only exported with a foreign ABI when
/// the respective binding is enabled:
///
/// ```rust,ignore
/// #[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
/// pub fn g2d(gy: i32, gm: i32, gd: i32) -> i64 { todo!() }
/// ```
///
/// Qualifiers that are not given are left as written on the function.
#[proc_macro_attribute]
pub fn fn_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let qualifiers = parse_macro_input!(args as Qualifiers);
    let mut item = parse_macro_input!(tokens as ItemFn);

    if qualifiers.constness.is_some() {
        item.sig.constness = qualifiers.constness;
    }
    if qualifiers.unsafety.is_some() {
        item.sig.unsafety = qualifiers.unsafety;
    }
    if qualifiers.abi.is_some() {
        item.sig.abi = qualifiers.abi;
    }

    quote!(#item).into()
}

/// Create bindgens for conditional pyo3.
///
/// PyO3 generally does not support attributes under conditional clauses
/// (<https://github.com/PyO3/pyo3/issues/780>). Simply, when the header macro of a block like
/// `pymethods` is conditional (via `cfg_attr`), the nested macros (like `staticmethod`) will
/// misbehave.
///
/// This only supports `impl` blocks with a `pymethods` parent:
///
/// ```rust,ignore
/// #[cfg_attr(feature = "py", py_attr(pymethods, staticmethod))]
/// impl JalaaliDate {
///     pub fn from_components(gy: i32, gm: i32, gd: i32) -> Result<Self, Error> { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let arg_parser = |input: ParseStream| {
        let parent = input.parse::<Meta>()?;
        input.parse::<Token![,]>()?;
        let meta = input.parse::<Meta>()?;
        Ok((parent, meta))
    };

    let (parent, meta) = parse_macro_input!(args with arg_parser);

    if !parent.path().is_ident("pymethods") {
        return syn::Error::new_spanned(parent, "only `pymethods` is supported as a parent")
            .to_compile_error()
            .into();
    }

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    for item in item_impl.items.iter_mut() {
        if let ImplItem::Fn(ImplItemFn { attrs, .. }) = item {
            attrs.push(Attribute {
                pound_token: Default::default(),
                style: syn::AttrStyle::Outer,
                bracket_token: Default::default(),
                meta: meta.clone(),
            });
        }
    }

    quote! {
        #[#parent]
        #item_impl
    }
    .into()
}
