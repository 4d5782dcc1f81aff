//! The four axiomatic operations.
//!
//! Nothing here is defined in terms of anything else in the crate except
//! the resolver. Every derived operation bottoms out in these.

use crate::operand::{FALSE, Nat, Operand, TRUE, resolve};

/// Successor: `n + 1`.
///
/// Saturates at [`Nat::MAX`]; arbitrary precision is out of reach of a
/// fixed-width natural.
#[inline]
pub fn increment<'a>(n: impl Into<Operand<'a>>) -> Nat {
    resolve(n).saturating_add(1)
}

/// Predecessor: `max(n - 1, 0)`. Never goes below zero.
#[inline]
pub fn decrement<'a>(n: impl Into<Operand<'a>>) -> Nat {
    resolve(n).saturating_sub(1)
}

/// [`TRUE`] if both operands resolve to the same value, else [`FALSE`].
///
/// `a` is resolved before `b`.
#[inline]
pub fn equals<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let a = resolve(a);
    let b = resolve(b);
    if a == b { TRUE } else { FALSE }
}

/// Host-level truth of a boolean-like operand: anything but [`FALSE`].
#[inline]
pub fn holds<'a>(x: impl Into<Operand<'a>>) -> bool {
    resolve(x) != FALSE
}

/// Ternary selector.
///
/// Resolves `test`, then resolves exactly one of `then` / `otherwise`.
/// The other branch is dropped without its producer ever being invoked,
/// which is what lets recursive definitions stop at their base case.
#[inline]
pub fn conditional<'t, 'y, 'n>(
    test: impl Into<Operand<'t>>,
    then: impl Into<Operand<'y>>,
    otherwise: impl Into<Operand<'n>>,
) -> Nat {
    if holds(test) {
        resolve(then)
    } else {
        resolve(otherwise)
    }
}

/// Two-armed [`conditional`]: yields [`FALSE`] when `test` does not hold.
#[inline]
pub fn when<'t, 'y>(test: impl Into<Operand<'t>>, then: impl Into<Operand<'y>>) -> Nat {
    conditional(test, then, Operand::ABSENT)
}
