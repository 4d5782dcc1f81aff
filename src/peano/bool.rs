//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

use super::nat::Peano;
use crate::operand::{FALSE, Nat, TRUE};

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Runtime counterpart under the `TRUE`/`FALSE` convention.
    const NAT: Nat;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Conditional over naturals. The result is guaranteed to be `Peano`.
    type Select<Then: Peano, Else: Peano>: Peano;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct True;

/// Type-level False.
#[derive(Debug)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    const NAT: Nat = TRUE;
    type If<Then, Else> = Then;
    type Select<Then: Peano, Else: Peano> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    const NAT: Nat = FALSE;
    type If<Then, Else> = Else;
    type Select<Then: Peano, Else: Peano> = Else;

    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;
