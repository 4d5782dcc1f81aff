//! Operands and the value resolver.
//!
//! Every operation accepts its arguments as [`Operand`]s: either a concrete
//! [`Nat`] or a deferred producer that yields another operand when invoked.
//! [`resolve`] is the single place where deferred operands are forced.

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use log::trace;

// =============================================================================
// Natural numbers and the boolean convention
// =============================================================================

/// A natural number. The only first-class value in the system.
pub type Nat = u64;

/// Canonical truthy value.
pub const TRUE: Nat = 1;

/// Canonical falsy value. Also what an absent operand resolves to.
pub const FALSE: Nat = 0;

// =============================================================================
// Producers
// =============================================================================

/// A zero-argument producer of an operand.
///
/// Implemented for every `Fn() -> R` where `R` converts into an [`Operand`],
/// so plain closures can be deferred directly. Producers are assumed pure:
/// they may be invoked more than once, or not at all.
pub trait Produce<'a> {
    fn produce(&self) -> Operand<'a>;
}

impl<'a, F, R> Produce<'a> for F
where
    F: Fn() -> R,
    R: Into<Operand<'a>>,
{
    #[inline]
    fn produce(&self) -> Operand<'a> {
        self().into()
    }
}

// =============================================================================
// Operand
// =============================================================================

/// A concrete value or a deferred computation of one.
pub enum Operand<'a> {
    /// Already resolved.
    Value(Nat),
    /// Borrowed producer, invoked on demand.
    Deferred(&'a dyn Produce<'a>),
    /// Owned producer, invoked on demand.
    #[cfg(feature = "alloc")]
    Boxed(Box<dyn Produce<'a> + 'a>),
}

impl<'a> Operand<'a> {
    /// The "no value" operand. Resolves to [`FALSE`].
    pub const ABSENT: Self = Operand::Value(FALSE);

    /// Defer a borrowed producer.
    #[inline]
    pub fn borrowed<F: Produce<'a>>(producer: &'a F) -> Self {
        Operand::Deferred(producer)
    }

    /// True if this operand still needs a producer call to yield a value.
    pub fn is_deferred(&self) -> bool {
        !matches!(self, Operand::Value(_))
    }

    /// Force this operand to a concrete value.
    ///
    /// Producers are invoked in a loop until one yields a value, so a
    /// long chain of deferrals does not grow the stack. A producer that
    /// keeps returning deferred operands forever never terminates.
    pub fn resolve(&self) -> Nat {
        let mut next = match self {
            Operand::Value(n) => return *n,
            Operand::Deferred(p) => p.produce(),
            #[cfg(feature = "alloc")]
            Operand::Boxed(p) => p.produce(),
        };
        let mut calls: usize = 1;
        loop {
            match next {
                Operand::Value(n) => {
                    trace!(target: "godel::operand", "deferred operand resolved to {n} after {calls} producer call(s)");
                    return n;
                }
                Operand::Deferred(p) => next = p.produce(),
                #[cfg(feature = "alloc")]
                Operand::Boxed(p) => next = p.produce(),
            }
            calls += 1;
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(n) => f.debug_tuple("Value").field(n).finish(),
            Operand::Deferred(_) => f.write_str("Deferred(..)"),
            #[cfg(feature = "alloc")]
            Operand::Boxed(_) => f.write_str("Boxed(..)"),
        }
    }
}

/// Resolve any operand-like argument to a concrete value.
#[inline]
pub fn resolve<'a>(operand: impl Into<Operand<'a>>) -> Nat {
    operand.into().resolve()
}

/// Defer an owned producer.
#[cfg(feature = "alloc")]
pub fn defer<'a, F>(producer: F) -> Operand<'a>
where
    F: Produce<'a> + 'a,
{
    Operand::Boxed(Box::new(producer))
}

// =============================================================================
// Host conversions
// =============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    Operand::Value(n as Nat)
                }
            }
        )*
    };
}

// Negative inputs floor at zero.
macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    Operand::Value(if n < 0 { FALSE } else { n as Nat })
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i32, i64);

impl From<bool> for Operand<'_> {
    #[inline]
    fn from(b: bool) -> Self {
        Operand::Value(if b { TRUE } else { FALSE })
    }
}

impl<'a, T: Into<Operand<'a>>> From<Option<T>> for Operand<'a> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Operand::ABSENT,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_value_resolves_to_itself() {
        assert_eq!(resolve(4u64), 4);
        assert_eq!(resolve(0), 0);
        assert!(!Operand::from(7).is_deferred());
    }

    #[test]
    fn test_borrowed_producer() {
        let four = || 4;
        let op = Operand::borrowed(&four);
        assert!(op.is_deferred());
        assert_eq!(op.resolve(), 4);
        // Producers may be invoked repeatedly.
        assert_eq!(op.resolve(), 4);
    }

    #[test]
    fn test_nested_deferral() {
        let inner = || 9;
        let outer = || Operand::borrowed(&inner);
        assert_eq!(resolve(Operand::borrowed(&outer)), 9);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_boxed_chain() {
        let op = defer(|| defer(|| defer(|| 3)));
        assert_eq!(op.resolve(), 3);
    }

    #[test]
    fn test_producer_not_called_until_resolved() {
        let calls = Cell::new(0);
        let probe = || {
            calls.set(calls.get() + 1);
            1
        };
        let op = Operand::borrowed(&probe);
        assert_eq!(calls.get(), 0);
        op.resolve();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_host_conversions() {
        assert_eq!(resolve(true), TRUE);
        assert_eq!(resolve(false), FALSE);
        assert_eq!(resolve(-3i32), 0);
        assert_eq!(resolve(12usize), 12);
        assert_eq!(resolve(None::<Nat>), FALSE);
        assert_eq!(resolve(Some(5u8)), 5);
        assert_eq!(resolve(Operand::ABSENT), FALSE);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_debug_format() {
        let f = || 1;
        assert_eq!(format!("{:?}", Operand::from(2)), "Value(2)");
        assert_eq!(format!("{:?}", Operand::borrowed(&f)), "Deferred(..)");
    }
}
