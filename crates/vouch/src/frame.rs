//! # Frame Wrapper
//!
//! Lets a custom assertion helper attribute failures to its caller.
//!
//! Wrapping a reporter adds one frame to skip when the failure is located.
//! A helper wraps the reporter it was given once, and passes the wrapper to
//! the assertions it makes:
//!
//! ```
//! use vouch::{Reporter, with_frame_wrapper};
//!
//! fn assert_trimmed(t: &impl Reporter, actual: &str, expected: &str) {
//!     let wt = with_frame_wrapper(t);
//!     vouch::assert_equal!(&wt, actual.trim(), expected, "trimmed text");
//! }
//!
//! # let t = vouch::Recorder::new();
//! assert_trimmed(&t, " ok ", "ok");
//! # assert!(t.is_empty());
//! ```
//!
//! Helpers that wrap must not also be `#[track_caller]`.

use crate::reporter::Reporter;

/// A reporter that skips one more frame than the reporter it wraps.
///
/// Borrowed from the wrapped reporter and meant to live for one helper call.
#[derive(Debug)]
pub struct Framed<'r, R: ?Sized> {
    inner: &'r R,
    skip: usize,
}

impl<'r, R: Reporter + ?Sized> Framed<'r, R> {
    /// Wrap `inner`, adding one frame to its skip count.
    #[must_use]
    pub fn new(inner: &'r R) -> Self {
        Self {
            skip: inner.frame_skip().saturating_add(1),
            inner,
        }
    }

    /// Total frames skipped by this wrapper, including every inner layer.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.skip
    }

    /// The wrapped reporter.
    #[must_use]
    pub fn inner(&self) -> &'r R {
        self.inner
    }
}

impl<R: Reporter + ?Sized> Reporter for Framed<'_, R> {
    fn report(&self, message: &str) {
        self.inner.report(message);
    }

    fn frame_skip(&self) -> usize {
        self.skip
    }
}

/// Wrap `reporter` so failures resolve one frame further up the stack.
///
/// Each nested wrap adds one more frame.
#[must_use]
pub fn with_frame_wrapper<R: Reporter + ?Sized>(reporter: &R) -> Framed<'_, R> {
    Framed::new(reporter)
}

// =============================================================================
// TESTS
// =============================================================================
