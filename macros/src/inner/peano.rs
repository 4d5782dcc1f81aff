//! Peano number alias generation macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

use super::nat::MAX_LITERAL;

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > MAX_LITERAL {
            return Err(syn::Error::new_spanned(
                &lit,
                format!("peano! can generate at most N{MAX_LITERAL}, got {max}"),
            ));
        }
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let max = input.max;

    // N0 = Z
    let mut types = vec![quote! {
        #[doc = "0"]
        pub type N0 = Z;
    }];

    // N1..Nmax = S<N(n-1)>
    for n in 1..=max {
        let curr = syn::Ident::new(&format!("N{}", n), proc_macro2::Span::call_site());
        let prev = syn::Ident::new(&format!("N{}", n - 1), proc_macro2::Span::call_site());
        let doc = n.to_string();
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#types)* }
}
