//! Base primitives through the public API, with plain and deferred operands.

use godel::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// increment / decrement
// =============================================================================

#[test]
fn test_increment_by_one() {
    assert_eq!(increment(4), 5);
}

#[test]
fn test_increment_deferred() {
    init_logging();
    let four = || 4;
    assert_eq!(increment(Operand::borrowed(&four)), 5);
    assert_eq!(increment(defer(|| 4)), 5);
}

#[test]
fn test_decrement_by_one() {
    assert_eq!(decrement(4), 3);
    assert_eq!(decrement(defer(|| 4)), 3);
}

#[test]
fn test_decrement_stops_at_zero() {
    assert_eq!(decrement(0), 0);
    assert_eq!(decrement(decrement(1)), 0);
}

#[test]
fn test_negative_host_input_floors() {
    // Host integers below zero enter the system as zero.
    assert_eq!(increment(-1), 1);
    assert_eq!(decrement(-5i64), 0);
}

// =============================================================================
// equals
// =============================================================================

#[test]
fn test_equals() {
    assert!(holds(equals(2, 2)));
    assert!(!holds(equals(2, 0)));
    assert_eq!(equals(defer(|| 2), defer(|| 2)), TRUE);
}

// =============================================================================
// conditional
// =============================================================================

#[test]
fn test_conditional_true_branch() {
    assert_eq!(conditional(equals(1, 1), 1, 2), 1);
    assert_eq!(conditional(equals(1, 1), defer(|| 1), defer(|| 2)), 1);
}

#[test]
fn test_conditional_false_branch() {
    assert_eq!(conditional(equals(1, 0), 1, 2), 2);
    assert_eq!(conditional(equals(1, 0), defer(|| 1), defer(|| 2)), 2);
}

#[test]
fn test_conditional_missing_else_is_falsy() {
    assert_eq!(when(equals(1, 0), defer(|| 1)), FALSE);
    assert!(!holds(when(equals(1, 0), defer(|| 1))));
}

#[test]
fn test_conditional_deferred_test() {
    assert_eq!(conditional(defer(|| equals(1, 0)), 1, 2), 2);
}

#[test]
fn test_conditional_never_runs_untaken_branch() {
    let taken = conditional(
        TRUE,
        defer(|| 10),
        defer(|| -> Nat { panic!("else branch resolved") }),
    );
    assert_eq!(taken, 10);
}

#[test]
fn test_deeply_deferred_operand() {
    init_logging();
    let op = defer(|| defer(|| defer(|| defer(|| 6))));
    assert_eq!(increment(op), 7);
}
