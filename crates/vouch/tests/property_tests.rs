//! # Property-Based Tests
//!
//! Invariants of the nilness rule, the equality evaluator and error
//! comparison, checked with proptest.

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io;
use vouch::{Absence, Comparison, Equaler, Recorder, assert_equal, equivalent};

// =============================================================================
// EQUALER FIXTURES
// =============================================================================

/// Equal to any `P` or `Q` with the same `val`.
#[derive(Debug)]
struct P {
    val: i64,
}

/// Equal to any `P` or `Q` with the same `val`.
#[derive(Debug)]
struct Q {
    val: i64,
}

fn val_of(other: &dyn Equaler) -> Option<i64> {
    other
        .downcast_ref::<P>()
        .map(|p| p.val)
        .or_else(|| other.downcast_ref::<Q>().map(|q| q.val))
}

impl Equaler for P {
    fn equal(&self, other: &dyn Equaler) -> bool {
        val_of(other) == Some(self.val)
    }
}

impl Equaler for Q {
    fn equal(&self, other: &dyn Equaler) -> bool {
        val_of(other) == Some(self.val)
    }
}

/// Deliberately asymmetric: equal to everything when `lenient`.
#[derive(Debug)]
struct Gate {
    lenient: bool,
}

impl Equaler for Gate {
    fn equal(&self, _other: &dyn Equaler) -> bool {
        self.lenient
    }
}

/// `PartialEq` says "always equal", `Equaler` says "never".
#[derive(Debug)]
struct Contrary;

impl PartialEq for Contrary {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Equaler for Contrary {
    fn equal(&self, _other: &dyn Equaler) -> bool {
        false
    }
}

/// A custom assertion generic over its operands.
fn assert_equivalent<A, E>(t: &Recorder, actual: &A, expected: &E)
where
    A: Equaler + Debug,
    E: Equaler + Debug,
{
    vouch::equal(t, &Comparison::equalers(actual, expected), "generic");
}

fn equal_count<F: FnOnce(&Recorder)>(check: F) -> usize {
    let t = Recorder::new();
    check(&t);
    t.len()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Present values fail `nil` and pass `not_nil`.
    #[test]
    fn present_values(value in any::<i64>(), text in ".{0,24}") {
        let t = Recorder::new();
        vouch::nil(&t, &Some(value), "number");
        vouch::not_nil(&t, &Some(value), "number");
        vouch::not_nil(&t, &text, "text");
        vouch::not_nil(&t, &value, "number");
        prop_assert_eq!(t.len(), 1);
    }

    /// Every value is equivalent to a copy of itself.
    #[test]
    fn equality_is_reflexive(
        numbers in vec(any::<i32>(), 0..20),
        map in btree_map(".{0,8}", any::<u64>(), 0..10),
        record in (".{0,16}", any::<i64>(), any::<bool>()),
    ) {
        let failures = equal_count(|t| {
            assert_equal!(t, numbers.clone(), numbers.clone(), "numbers");
            assert_equal!(t, map.clone(), map.clone(), "map");
            assert_equal!(t, record.clone(), record.clone(), "record");
        });
        prop_assert_eq!(failures, 0);
    }

    /// Structural comparison of distinct collections fails.
    #[test]
    fn structural_difference_is_reported(
        numbers in vec(any::<i32>(), 0..20),
        extra in any::<i32>(),
    ) {
        let mut longer = numbers.clone();
        longer.push(extra);
        let failures = equal_count(|t| assert_equal!(t, numbers.clone(), longer.clone(), "numbers"));
        prop_assert_eq!(failures, 1);
    }

    /// Cross-type equalers decide by `val` alone.
    #[test]
    fn cross_type_equalers(a in any::<i64>(), b in any::<i64>()) {
        let failures = equal_count(|t| {
            assert_equal!(t, P { val: a }, Q { val: b }, "p/q");
        });
        prop_assert_eq!(failures, usize::from(a != b));

        let failures = equal_count(|t| {
            assert_equal!(t, Q { val: a }, P { val: a }, "q/p");
        });
        prop_assert_eq!(failures, 0);
    }

    /// Generic helpers see the same verdict as a direct call.
    #[test]
    fn generic_helpers_keep_cross_type_equalers(a in any::<i64>(), b in any::<i64>()) {
        let direct = equal_count(|t| assert_equal!(t, P { val: a }, Q { val: b }, "p/q"));
        let generic = equal_count(|t| assert_equivalent(t, &P { val: a }, &Q { val: b }));
        prop_assert_eq!(generic, direct);
        prop_assert_eq!(generic, usize::from(a != b));
    }

    /// The verdict is exactly `actual.equal(expected)`, never the reverse.
    #[test]
    fn equaler_verdict_is_not_symmetrised(actual_lenient in any::<bool>(), expected_lenient in any::<bool>()) {
        let actual = Gate { lenient: actual_lenient };
        let expected = Gate { lenient: expected_lenient };
        let never = || false;
        let comparison = Comparison::new(&actual, &expected, Some(&actual), Some(&expected), &never);

        prop_assert_eq!(equivalent(&comparison), actual.equal(&expected));
    }

    /// Errors with the same message compare equal; different ones do not.
    #[test]
    fn errors_compare_by_content(a in "[a-z ]{1,24}", b in "[a-z ]{1,24}") {
        let t = Recorder::new();
        vouch::err(&t, Some(&io::Error::other(a.clone())), Some(&io::Error::other(a.clone())));
        prop_assert!(t.is_empty());

        vouch::err(&t, Some(&io::Error::other(a.clone())), Some(&io::Error::other(b.clone())));
        prop_assert_eq!(t.len(), usize::from(a != b));
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn absent_values() {
    let typed: Option<String> = None;
    let boxed: Box<dyn Absence> = Box::new(None::<Vec<u8>>);
    let pointer: *const u8 = std::ptr::null();

    let t = Recorder::new();
    vouch::nil(&t, &typed, "typed none");
    vouch::nil(&t, &boxed, "boxed none");
    vouch::nil(&t, &pointer, "null pointer");
    assert!(t.is_empty(), "{:?}", t.messages());

    vouch::not_nil(&t, &typed, "typed none");
    vouch::not_nil(&t, &boxed, "boxed none");
    vouch::not_nil(&t, &pointer, "null pointer");
    assert_eq!(t.len(), 3);
}

#[test]
fn anonymous_record_scenario() {
    #[derive(Debug, PartialEq)]
    struct Anon {
        a: &'static str,
        b: i32,
    }

    let failures = equal_count(|t| {
        assert_equal!(t, Anon { a: "x", b: 1 }, Anon { a: "x", b: 1 }, "record");
    });
    assert_eq!(failures, 0);
}

#[test]
fn p_and_q_scenario() {
    assert_eq!(
        equal_count(|t| assert_equal!(t, P { val: 1 }, Q { val: 1 }, "p/q")),
        0
    );
    assert_eq!(
        equal_count(|t| assert_equal!(t, P { val: 1 }, Q { val: 2 }, "p/q")),
        1
    );
}

#[test]
fn equaler_overrides_structural() {
    let failures = equal_count(|t| assert_equal!(t, Contrary, Contrary, "contrary"));
    assert_eq!(failures, 1);

    let (left, right) = (Contrary, Contrary);
    assert!(left == right);
}

#[test]
fn one_sided_equaler_falls_back_to_structural() {
    // `P` has no `PartialEq<i64>`, so the structural fallback says "different".
    let failures = equal_count(|t| assert_equal!(t, P { val: 1 }, 1_i64, "p/int"));
    assert_eq!(failures, 1);
}

#[test]
fn exists_err_on_absent_error_names_the_noun() {
    let t = Recorder::new();
    vouch::exists_err(&t, None::<&io::Error>, "database handle");
    let message = t.last().expect("one failure");
    assert!(message.contains("database handle"), "{message}");
}

#[test]
fn maps_compare_by_value() {
    let a: BTreeMap<&str, Vec<u8>> = [("k", vec![1, 2])].into_iter().collect();
    let b: BTreeMap<&str, Vec<u8>> = [("k", vec![1, 2])].into_iter().collect();
    assert_eq!(equal_count(|t| assert_equal!(t, a, b, "map")), 0);
}
