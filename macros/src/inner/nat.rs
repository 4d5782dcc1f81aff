//! Literal to Peano type expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

/// Largest literal accepted. Deeper nesting gets unwieldy for the trait
/// solver long before it becomes useful.
pub const MAX_LITERAL: usize = 1024;

pub struct NatInput {
    pub value: usize,
}

impl Parse for NatInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        if !lit.suffix().is_empty() {
            return Err(syn::Error::new_spanned(
                &lit,
                "nat! takes an unsuffixed integer literal",
            ));
        }
        let value = lit.base10_parse::<usize>()?;
        if value > MAX_LITERAL {
            return Err(syn::Error::new_spanned(
                &lit,
                format!("nat! literal {value} exceeds the limit of {MAX_LITERAL}"),
            ));
        }
        if !input.is_empty() {
            return Err(input.error("nat! takes a single integer literal"));
        }
        Ok(NatInput { value })
    }
}

/// `3` -> `S<S<S<Z>>>`
pub fn expand_nat(input: NatInput) -> TokenStream {
    let mut ty = quote! { ::godel::peano::Z };
    for _ in 0..input.value {
        ty = quote! { ::godel::peano::S<#ty> };
    }
    ty
}
