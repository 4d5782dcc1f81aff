//! # Layer 3: Type-level Peano arithmetic
//!
//! The same primitives and derivations, evaluated by the trait solver:
//! - `bool.rs`: Type-level boolean logic (True/False) and the lazy selector.
//! - `nat.rs`: `Z`/`S<N>`, `Incr`, floored `Decr`, `NatEq`, aliases `N0..N64`.
//! - `ops.rs`: comparisons and `Add`/`Sub`/`Mul`/`Pow` with `*Of` aliases.
//!
//! Every type carries its runtime value (`Peano::VALUE`, `Bool::NAT`), so
//! results can be checked against the runtime layer.
//!
//! ```
//! use godel::peano::*;
//!
//! type Seven = AddOf<N3, N4>;
//! assert_eq!(<Seven as Peano>::VALUE, godel::add(3, 4));
//! assert_eq!(<godel::nat!(5) as Peano>::VALUE, 5);
//! ```

pub mod bool;
pub mod nat;
pub mod ops;

pub use bool::{Bool, False, If, SelectBool, True};
pub use nat::*;
pub use ops::*;
