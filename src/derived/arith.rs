//! Comparisons and the four arithmetic operations.
//!
//! Each operation is structural recursion on its right operand, bottoming
//! out at zero. The recursive definitions are evaluated through
//! [`recurse`], which keeps stack depth constant; running time is still
//! proportional to the number of primitive steps and is noted per function.

use super::boolean::not;
use super::recurse::recurse;
use crate::operand::{FALSE, Nat, Operand, TRUE, resolve};
use crate::primitives::{decrement, equals, holds, increment};

// =============================================================================
// Comparisons
// =============================================================================

/// `equals(n, 0)`
#[inline]
pub fn is_zero<'a>(n: impl Into<Operand<'a>>) -> Nat {
    equals(n, 0)
}

/// Strict less-than.
///
/// `FALSE` if `b` is zero, else `TRUE` if `a` is zero, else
/// `less_than(decrement(a), decrement(b))`. Takes `min(a, b) + 1` rounds.
pub fn less_than<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let mut a = resolve(a);
    let mut b = resolve(b);
    loop {
        if holds(is_zero(b)) {
            return FALSE;
        }
        if holds(is_zero(a)) {
            return TRUE;
        }
        a = decrement(a);
        b = decrement(b);
    }
}

/// `less_than(b, a)`
#[inline]
pub fn greater_than<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let a = resolve(a);
    less_than(b, a)
}

/// `not(greater_than(a, b))`
#[inline]
pub fn less_or_equal<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    not(greater_than(a, b))
}

/// `not(less_than(a, b))`
#[inline]
pub fn greater_or_equal<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    not(less_than(a, b))
}

// =============================================================================
// Arithmetic
// =============================================================================

/// `add(a, 0) = a`, `add(a, b) = increment(add(a, decrement(b)))`.
///
/// Takes `b` increments.
pub fn add<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    recurse(a, b, |_, acc| increment(acc))
}

/// `subtract(a, 0) = a`, `subtract(a, b) = decrement(subtract(a, decrement(b)))`.
///
/// Saturating: never goes below zero. Takes `b` decrements.
pub fn subtract<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    recurse(a, b, |_, acc| decrement(acc))
}

/// `multiply(a, 0) = 0`, `multiply(a, b) = add(a, multiply(a, decrement(b)))`.
///
/// Takes `a · b` increments in total.
pub fn multiply<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let a = resolve(a);
    // add recurses on its right operand; keep the fixed factor there.
    recurse(0, b, |_, acc| add(acc, a))
}

/// `exponentiate(a, 0) = 1`, `exponentiate(a, b) = multiply(a, exponentiate(a, decrement(b)))`.
///
/// `0^0 = 1`. The step count grows like `a^b`, so only small exponents
/// finish in reasonable time.
pub fn exponentiate<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let a = resolve(a);
    recurse(1, b, |_, acc| multiply(a, acc))
}
