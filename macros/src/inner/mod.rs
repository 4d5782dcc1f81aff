//! Expansion logic for the crate-internal and public macros.

pub mod nat;
pub mod peano;
