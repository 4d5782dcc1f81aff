//! # Layer 2: Derived operations
//!
//! - `boolean.rs`: `not`, `and`, `or`, `not_equals` over `equals`/`conditional`.
//! - `recurse.rs`: the primitive recursion scheme, evaluated iteratively.
//! - `arith.rs`: comparisons, `add`, `subtract`, `multiply`, `exponentiate`.
//!
//! Each file only uses the ones listed before it.

pub mod boolean;
pub mod recurse;
pub mod arith;

pub use boolean::{and, not, not_equals, or};
pub use recurse::recurse;
pub use arith::{
    add, exponentiate, greater_or_equal, greater_than, is_zero, less_or_equal, less_than,
    multiply, subtract,
};
