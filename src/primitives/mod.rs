//! # Layer 1: Base primitives
//!
//! - `base.rs`: successor, floored predecessor, equality, lazy conditional.

pub mod base;

pub use base::{conditional, decrement, equals, holds, increment, when};
