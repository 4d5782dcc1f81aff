#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: owning deferred operands (`Operand::Boxed`, `defer`)
// - peano: type-level layer

//! # godel
//!
//! Natural-number arithmetic and logic derived from four axioms.
//!
//! **Successor, floored predecessor, equality, and a lazy conditional.**
//!
//! Everything else (boolean algebra, comparisons, `add`, `subtract`,
//! `multiply`, `exponentiate`) is built by composing those four, in the
//! style of primitive recursive function theory.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Operands                                                |
//! |  - Nat, Operand (value | deferred producer), resolve              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Base Primitives                                         |
//! |  - increment, decrement (floored), equals, conditional            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Derived                                                 |
//! |  - not, and, or, not_equals                                       |
//! |  - recurse (primitive recursion, iterative)                       |
//! |  - is_zero, comparisons, add, subtract, multiply, exponentiate    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Type-level Peano (feature `peano`)                      |
//! |  - Z, S<N>, True/False, Add/Sub/Mul/Pow in the trait solver       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Booleans
//!
//! There is no boolean type. [`TRUE`] is `1`, [`FALSE`] is `0`, and any
//! non-zero value counts as true. [`when`] with a failing test yields
//! [`FALSE`].
//!
//! ## Deferred operands
//!
//! Any argument may be a producer instead of a value. Producers are only
//! invoked when their value is needed, so the untaken branch of a
//! [`conditional`] and the right side of a decided [`and`]/[`or`] never run.
//!
//! ```
//! use godel::*;
//!
//! assert_eq!(add(15, 15), 30);
//! assert_eq!(subtract(0, 5), 0);
//!
//! let four = || 4;
//! assert_eq!(multiply(Operand::borrowed(&four), 10), 40);
//!
//! let boom = || -> Nat { panic!("never resolved") };
//! assert_eq!(and(FALSE, Operand::borrowed(&boom)), FALSE);
//! ```
//!
//! ## Resource use
//!
//! Recursive definitions are evaluated bottom-up by [`recurse`], so stack
//! depth does not depend on operand size. Running time does: `add(a, b)`
//! takes `b` increments, `multiply(a, b)` about `a · b`, and
//! `exponentiate(a, b)` about `a^b`.

// Allow `::godel` to work inside the crate itself
extern crate self as godel;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Operands
// =============================================================================
pub mod operand;

// =============================================================================
// Layer 1: Base Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 2: Derived Operations
// =============================================================================
pub mod derived;

// =============================================================================
// Layer 3: Type-level Peano
// =============================================================================
#[cfg(feature = "peano")]
pub mod peano;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use operand::{FALSE, Nat, Operand, Produce, TRUE, resolve};
#[cfg(feature = "alloc")]
pub use operand::defer;
pub use primitives::{conditional, decrement, equals, holds, increment, when};
pub use derived::{
    add, and, exponentiate, greater_or_equal, greater_than, is_zero, less_or_equal, less_than,
    multiply, not, not_equals, or, recurse, subtract,
};

// Re-export proc-macros
#[cfg(feature = "peano")]
pub use macros::nat;

/// Common items.
pub mod prelude {
    pub use crate::operand::{FALSE, Nat, Operand, TRUE};
    #[cfg(feature = "alloc")]
    pub use crate::operand::defer;
    pub use crate::primitives::*;
    pub use crate::derived::*;
}
