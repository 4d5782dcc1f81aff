//! Type-level derived operations.
//!
//! Same definitions as the runtime layer, by structural recursion on the
//! right operand. The trait solver does the evaluation, so deep operands
//! are bounded by `#![recursion_limit]` rather than the call stack.

use super::bool::{Bool, False, True};
use super::nat::{Decr, Incr, NatEq, Peano, S, Z};

// =============================================================================
// Comparisons
// =============================================================================

/// `NatEq<Z>`
pub trait IsZero: Peano {
    type Out: Bool;
}

impl<N: NatEq<Z>> IsZero for N {
    type Out = <N as NatEq<Z>>::Out;
}

/// Strict less-than.
pub trait Lt<Other: Peano>: Peano {
    type Out: Bool;
}

// a < 0 is always false
impl<A: Peano> Lt<Z> for A {
    type Out = False;
}

impl<B: Peano> Lt<S<B>> for Z {
    type Out = True;
}

impl<A: Lt<B>, B: Peano> Lt<S<B>> for S<A> {
    type Out = <A as Lt<B>>::Out;
}

/// `Lt` with operands swapped.
pub trait Gt<Other: Peano>: Peano {
    type Out: Bool;
}

impl<A: Peano, B: Lt<A>> Gt<B> for A {
    type Out = <B as Lt<A>>::Out;
}

/// `Not<Gt>`
pub trait Le<Other: Peano>: Peano {
    type Out: Bool;
}

impl<A: Gt<B>, B: Peano> Le<B> for A {
    type Out = <<A as Gt<B>>::Out as Bool>::Not;
}

/// `Not<Lt>`
pub trait Ge<Other: Peano>: Peano {
    type Out: Bool;
}

impl<A: Lt<B>, B: Peano> Ge<B> for A {
    type Out = <<A as Lt<B>>::Out as Bool>::Not;
}

// =============================================================================
// Arithmetic
// =============================================================================

/// `A + Z = A`, `A + S<B> = S<A + B>`
pub trait Add<Other: Peano>: Peano {
    type Out: Peano;
}

impl<A: Peano> Add<Z> for A {
    type Out = A;
}

impl<A: Add<B>, B: Peano> Add<S<B>> for A {
    type Out = S<<A as Add<B>>::Out>;
}

/// `A - Z = A`, `A - S<B> = Decr<A - B>`. Saturating.
pub trait Sub<Other: Peano>: Peano {
    type Out: Peano;
}

impl<A: Peano> Sub<Z> for A {
    type Out = A;
}

impl<A: Sub<B>, B: Peano> Sub<S<B>> for A
where
    <A as Sub<B>>::Out: Decr,
{
    type Out = <<A as Sub<B>>::Out as Decr>::Out;
}

/// `A * Z = Z`, `A * S<B> = A + A * B`
pub trait Mul<Other: Peano>: Peano {
    type Out: Peano;
}

impl<A: Peano> Mul<Z> for A {
    type Out = Z;
}

impl<A, B: Peano> Mul<S<B>> for A
where
    A: Mul<B> + Add<<A as Mul<B>>::Out>,
{
    type Out = <A as Add<<A as Mul<B>>::Out>>::Out;
}

/// `A ^ Z = S<Z>`, `A ^ S<B> = A * A ^ B`
pub trait Pow<Other: Peano>: Peano {
    type Out: Peano;
}

impl<A: Peano> Pow<Z> for A {
    type Out = S<Z>;
}

impl<A, B: Peano> Pow<S<B>> for A
where
    A: Pow<B> + Mul<<A as Pow<B>>::Out>,
{
    type Out = <A as Mul<<A as Pow<B>>::Out>>::Out;
}

// =============================================================================
// Result aliases
// =============================================================================

macro_rules! unary_alias {
    ($($Op:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = concat!("Result of `", stringify!($Op), "` on `N`.")]
                pub type [<$Op Of>]<N> = <N as $Op>::Out;
            }
        )*
    };
}

macro_rules! binary_alias {
    ($($Op:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = concat!("Result of `", stringify!($Op), "` on `A` and `B`.")]
                pub type [<$Op Of>]<A, B> = <A as $Op<B>>::Out;
            }
        )*
    };
}

unary_alias!(Incr, Decr, IsZero);
binary_alias!(NatEq, Lt, Gt, Le, Ge, Add, Sub, Mul, Pow);
