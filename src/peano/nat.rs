//! Peano naturals and the type-level primitives.
//!
//! `Incr`, `Decr` and `NatEq` mirror `increment`, `decrement` and `equals`;
//! the conditional is [`Bool::Select`](super::bool::Bool::Select).

use core::marker::PhantomData;

use super::bool::{Bool, False, True};
use crate::operand::Nat;

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano: 'static {
    /// Runtime value of this number.
    const VALUE: Nat;
}

/// Zero (base case)
#[derive(Debug)]
pub struct Z;
impl Peano for Z {
    const VALUE: Nat = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: Nat = N::VALUE + 1;
}

// Generate N0..N64 using proc-macro
macros::peano!(64);

// =============================================================================
// Primitives
// =============================================================================

/// Successor.
pub trait Incr: Peano {
    type Out: Peano;
}

impl<N: Peano> Incr for N {
    type Out = S<N>;
}

/// Predecessor, floored at zero.
pub trait Decr: Peano {
    type Out: Peano;
}

impl Decr for Z {
    type Out = Z;
}

impl<N: Peano> Decr for S<N> {
    type Out = N;
}

/// Structural equality.
pub trait NatEq<Other: Peano>: Peano {
    type Out: Bool;
}

impl NatEq<Z> for Z {
    type Out = True;
}

impl<B: Peano> NatEq<S<B>> for Z {
    type Out = False;
}

impl<A: Peano> NatEq<Z> for S<A> {
    type Out = False;
}

impl<A: NatEq<B>, B: Peano> NatEq<S<B>> for S<A> {
    type Out = <A as NatEq<B>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(<N0 as Peano>::VALUE, 0);
        assert_eq!(<N7 as Peano>::VALUE, 7);
        assert_eq!(<N64 as Peano>::VALUE, 64);
    }

    #[test]
    fn test_decr_floors() {
        assert_eq!(<<Z as Decr>::Out as Peano>::VALUE, 0);
        assert_eq!(<<N3 as Decr>::Out as Peano>::VALUE, 2);
        assert_eq!(<<<N3 as Incr>::Out as Decr>::Out as Peano>::VALUE, 3);
    }

    #[test]
    fn test_eq() {
        assert!(<<N4 as NatEq<N4>>::Out as Bool>::VALUE);
        assert!(!<<N4 as NatEq<N2>>::Out as Bool>::VALUE);
        assert!(!<<Z as NatEq<N1>>::Out as Bool>::VALUE);
    }
}
