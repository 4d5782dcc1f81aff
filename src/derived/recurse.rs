//! The primitive recursion scheme.
//!
//! `f(0) = base`, `f(k + 1) = step(k, f(k))`.
//!
//! Evaluated bottom-up with an accumulator, so a definition like
//! `add(a, b) = increment(add(a, decrement(b)))` runs in constant stack
//! space instead of nesting `b` frames deep. The counter advances by
//! [`increment`] and the loop stops on [`not_equals`], so no host
//! arithmetic is involved beyond what the primitives provide.

use log::trace;

use super::boolean::not_equals;
use crate::operand::{Nat, Operand, resolve};
use crate::primitives::{holds, increment};

/// Evaluate `f(n)` for `f(0) = base`, `f(k + 1) = step(k, f(k))`.
///
/// `step` runs exactly `n` times. `base` is resolved once, up front.
pub fn recurse<'a, 'b, F>(base: impl Into<Operand<'a>>, n: impl Into<Operand<'b>>, mut step: F) -> Nat
where
    F: FnMut(Nat, Nat) -> Nat,
{
    let n = resolve(n);
    let mut acc = resolve(base);
    trace!(target: "godel::recurse", "recursing {n} step(s) from {acc}");
    let mut k: Nat = 0;
    while holds(not_equals(k, n)) {
        acc = step(k, acc);
        k = increment(k);
    }
    acc
}
