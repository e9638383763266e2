//! # Failure Types
//!
//! The only kind of error this crate knows: an assertion that did not hold.
//!
//! - `Mismatch` describes what went wrong (one variant per primitive)
//! - `Failure` pairs it with the source location and renders the message
//!   handed to the reporter: `"<location>: <description>"`

use std::error::Error as StdError;
use std::fmt::{self, Write as _};
use thiserror::Error;

// =============================================================================
// MISMATCH
// =============================================================================

/// What an assertion found wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// A boolean check did not hold; the text is the caller's description.
    #[error("{0}")]
    Condition(String),

    /// A value was present when it should have been absent.
    #[error("the given {noun} [{value}] was present when it should have been absent")]
    Present { noun: String, value: String },

    /// A value was absent when it should have been present.
    #[error("the given {noun} was absent when it should have been present")]
    Absent { noun: String },

    /// Two errors had different encodings.
    #[error("expected error {expected} but got {actual}")]
    ErrorMismatch { expected: String, actual: String },

    /// An error was required but absent.
    #[error("given error for {noun} was absent when it should have been present")]
    MissingError { noun: String },

    /// An error was present when none was expected.
    #[error("expected no error but got {0}")]
    UnexpectedError(String),

    /// Two values were not equivalent.
    #[error("actual {noun} [{actual}] != expected {noun} [{expected}]")]
    NotEqual {
        noun: String,
        actual: String,
        expected: String,
    },
}

// =============================================================================
// FAILURE
// =============================================================================

/// A located mismatch, ready to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {mismatch}")]
pub struct Failure {
    /// Rendered `path:line` of the failing call site.
    pub location: String,
    /// What went wrong.
    pub mismatch: Mismatch,
}

impl Failure {
    /// Create a new failure.
    #[must_use]
    pub fn new(location: impl Into<String>, mismatch: Mismatch) -> Self {
        Self {
            location: location.into(),
            mismatch,
        }
    }
}

// =============================================================================
// ERROR ENCODING
// =============================================================================

/// Placeholder rendered for an absent error.
pub const NO_ERROR: &str = "<none>";

/// The full encoded representation of an error.
///
/// The `Debug` rendering (type and contents), followed by the `Display` of
/// every error in the `source()` chain. Two errors built independently from
/// the same parts encode identically; identity plays no part.
#[must_use]
pub fn encode_error<E: StdError + ?Sized>(error: &E) -> String {
    let mut encoded = format!("{error:?}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(encoded, "\ncaused by: {cause}");
        source = cause.source();
    }
    encoded
}

/// `Display` of an optional error, with [`NO_ERROR`] for `None`.
pub(crate) fn display_error<E: StdError + ?Sized>(error: Option<&E>) -> String {
    error
        .map(|e| e.to_string())
        .unwrap_or_else(|| NO_ERROR.to_string())
}

/// Render any `Debug` value the way mismatch messages show operands.
pub(crate) fn render_value<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

// =============================================================================
// TESTS
// =============================================================================
