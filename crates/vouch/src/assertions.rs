//! # Assertion Primitives
//!
//! The checks test authors call. Each one:
//! - does nothing when the check holds
//! - otherwise locates the call site (honouring the reporter's frame skip),
//!   renders `"<location>: <description>"` and reports it once
//!
//! None of them abort on their own; that is up to the reporter.
//!
//! Errors are passed as `Option<&E>`, so a `Result` is checked with
//! `result.as_ref().err()`.

use crate::absence::Absence;
use crate::equality::Comparison;
use crate::failure::{Failure, Mismatch, display_error, encode_error, render_value};
use crate::locator;
use crate::reporter::Reporter;
use std::error::Error as StdError;
use std::fmt::Display;

/// Locate the failing call and hand the message to the reporter.
#[track_caller]
fn fail<R: Reporter + ?Sized>(reporter: &R, mismatch: Mismatch) {
    let skip = reporter.frame_skip();
    let failure = Failure::new(locator::locate(skip), mismatch);
    tracing::debug!(location = %failure.location, skip, "assertion failed");
    reporter.report(&failure.to_string());
}

// =============================================================================
// BOOLEANS
// =============================================================================

/// Fail with `description` unless `condition` holds.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(reporter: &R, condition: bool, description: impl Display) {
    if !condition {
        fail(reporter, Mismatch::Condition(description.to_string()));
    }
}

/// Fail with `description` if `condition` holds.
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(reporter: &R, condition: bool, description: impl Display) {
    if condition {
        fail(reporter, Mismatch::Condition(description.to_string()));
    }
}

// =============================================================================
// NILNESS
// =============================================================================

/// Fail unless `value` is absent.
#[track_caller]
pub fn nil<R, T>(reporter: &R, value: &T, noun: &str)
where
    R: Reporter + ?Sized,
    T: Absence + ?Sized,
{
    if !value.is_absent() {
        fail(
            reporter,
            Mismatch::Present {
                noun: noun.to_string(),
                value: render_value(value),
            },
        );
    }
}

/// Fail if `value` is absent.
#[track_caller]
pub fn not_nil<R, T>(reporter: &R, value: &T, noun: &str)
where
    R: Reporter + ?Sized,
    T: Absence + ?Sized,
{
    if value.is_absent() {
        fail(
            reporter,
            Mismatch::Absent {
                noun: noun.to_string(),
            },
        );
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Fail unless `expected` and `actual` are the same error.
///
/// Errors are compared by their full encoding, never by identity. Two absent
/// errors are equal.
#[track_caller]
pub fn err<R, E, A>(reporter: &R, expected: Option<&E>, actual: Option<&A>)
where
    R: Reporter + ?Sized,
    E: StdError + ?Sized,
    A: StdError + ?Sized,
{
    let same = match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => encode_error(e) == encode_error(a),
        _ => false,
    };
    if !same {
        fail(
            reporter,
            Mismatch::ErrorMismatch {
                expected: display_error(expected),
                actual: display_error(actual),
            },
        );
    }
}

/// Fail if `error` is absent.
#[track_caller]
pub fn exists_err<R, E>(reporter: &R, error: Option<&E>, noun: &str)
where
    R: Reporter + ?Sized,
    E: StdError + ?Sized,
{
    if error.is_none() {
        fail(
            reporter,
            Mismatch::MissingError {
                noun: noun.to_string(),
            },
        );
    }
}

/// Fail if `error` is present.
#[track_caller]
pub fn no_err<R, E>(reporter: &R, error: Option<&E>)
where
    R: Reporter + ?Sized,
    E: StdError + ?Sized,
{
    if let Some(e) = error {
        fail(reporter, Mismatch::UnexpectedError(e.to_string()));
    }
}

// =============================================================================
// EQUALITY
// =============================================================================

/// Fail unless the operands of `comparison` are equivalent.
///
/// Usually reached through [`assert_equal!`](crate::assert_equal), which
/// probes both operands for the [`Equaler`](crate::Equaler) capability.
#[track_caller]
pub fn equal<R: Reporter + ?Sized>(reporter: &R, comparison: &Comparison<'_>, noun: &str) {
    if !comparison.is_equivalent() {
        fail(
            reporter,
            Mismatch::NotEqual {
                noun: noun.to_string(),
                actual: render_value(comparison.actual()),
                expected: render_value(comparison.expected()),
            },
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
