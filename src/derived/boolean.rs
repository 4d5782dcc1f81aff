//! Boolean algebra over the `TRUE`/`FALSE` convention.
//!
//! Built from [`equals`] and [`conditional`] only. The right operand of
//! [`and`] and [`or`] sits behind a deferred branch, so it is never
//! resolved when the left operand already decides the result.

use crate::operand::{FALSE, Nat, Operand, TRUE};
use crate::primitives::{conditional, equals};

/// `conditional(x, FALSE, TRUE)`
#[inline]
pub fn not<'a>(x: impl Into<Operand<'a>>) -> Nat {
    conditional(x, FALSE, TRUE)
}

/// `conditional(a, conditional(b, TRUE, FALSE), FALSE)`
pub fn and<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let b = b.into();
    let rest = || conditional(b.resolve(), TRUE, FALSE);
    conditional(a, Operand::borrowed(&rest), FALSE)
}

/// `conditional(a, TRUE, conditional(b, TRUE, FALSE))`
pub fn or<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    let b = b.into();
    let rest = || conditional(b.resolve(), TRUE, FALSE);
    conditional(a, TRUE, Operand::borrowed(&rest))
}

/// `not(equals(a, b))`
#[inline]
pub fn not_equals<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Nat {
    not(equals(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_not() {
        assert_eq!(not(equals(1, 1)), FALSE);
        assert_eq!(not(1), FALSE);
        assert_eq!(not(equals(0, 1)), TRUE);
        assert_eq!(not(0), TRUE);
    }

    #[test]
    fn test_and_truth_table() {
        assert_eq!(and(TRUE, TRUE), TRUE);
        assert_eq!(and(TRUE, FALSE), FALSE);
        assert_eq!(and(FALSE, TRUE), FALSE);
        assert_eq!(and(FALSE, FALSE), FALSE);
        // Truthy values are normalised.
        assert_eq!(and(5, 7), TRUE);
    }

    #[test]
    fn test_or_truth_table() {
        assert_eq!(or(TRUE, TRUE), TRUE);
        assert_eq!(or(TRUE, FALSE), TRUE);
        assert_eq!(or(FALSE, TRUE), TRUE);
        assert_eq!(or(FALSE, FALSE), FALSE);
        assert_eq!(or(0, 3), TRUE);
    }

    #[test]
    fn test_absent_right_operand() {
        assert_eq!(and(equals(2, 0), None::<Nat>), FALSE);
        assert_eq!(or(equals(2, 0), None::<Nat>), FALSE);
        assert_eq!(or(equals(2, 2), None::<Nat>), TRUE);
    }

    #[test]
    fn test_short_circuit() {
        let calls = Cell::new(0);
        let probe = || {
            calls.set(calls.get() + 1);
            TRUE
        };
        assert_eq!(and(FALSE, Operand::borrowed(&probe)), FALSE);
        assert_eq!(or(TRUE, Operand::borrowed(&probe)), TRUE);
        assert_eq!(calls.get(), 0);

        assert_eq!(and(TRUE, Operand::borrowed(&probe)), TRUE);
        assert_eq!(or(FALSE, Operand::borrowed(&probe)), TRUE);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_not_equals() {
        assert_eq!(not_equals(2, 0), TRUE);
        assert_eq!(not_equals(2, 2), FALSE);
    }
}
