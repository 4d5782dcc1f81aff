//! Procedural macros for the godel type-level Peano layer
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `peano!(n)` | - | Generate aliases `N0 = Z` .. `Nn = S<N(n-1)>` |
//! | `nat!(n)` | type position | Expand a literal to `S<S<..Z>>` |
//!
//! ## Example
//!
//! ```ignore
//! use godel::peano::*;
//!
//! type Three = godel::nat!(3);
//! assert_eq!(<Three as Peano>::VALUE, 3);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

/// Generate Peano number type aliases N0..Nn.
///
/// Expects `Z` and `S` to be in scope at the call site.
///
/// # Usage
/// ```ignore
/// peano!(64);  // Generates N0 = Z, N1 = S<N0>, ..., N64 = S<N63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Expand an integer literal to its Peano type.
///
/// # Usage
/// ```ignore
/// type Twelve = nat!(12);  // S<S<...S<Z>...>>
/// ```
///
/// Literals above 1024, suffixed literals, and anything that is not a
/// single non-negative integer are rejected at compile time.
#[proc_macro]
pub fn nat(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::nat::NatInput);
    inner::nat::expand_nat(input).into()
}
