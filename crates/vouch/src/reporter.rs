//! # Reporter
//!
//! The host test framework's "mark this test failed" capability.
//!
//! Every assertion borrows a [`Reporter`] for the length of one call and hands
//! it the rendered failure message. Two implementations ship with the crate:
//! - [`Fatal`]: panics, which fails and stops a standard `#[test]`
//! - [`Recorder`]: keeps the messages, for testing custom assertions

use std::cell::RefCell;

// =============================================================================
// REPORTER TRAIT
// =============================================================================

/// Records a test failure.
///
/// `report` may return (the test keeps running) or diverge (the test stops);
/// assertions work with either.
pub trait Reporter {
    /// Mark the current test failed with a human-readable message.
    fn report(&self, message: &str);

    /// Extra frames to skip when locating a failure.
    ///
    /// Zero for a plain reporter; each [`Framed`](crate::Framed) layer adds one.
    fn frame_skip(&self) -> usize {
        0
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn frame_skip(&self) -> usize {
        (**self).frame_skip()
    }
}

// =============================================================================
// FATAL
// =============================================================================

/// Reporter that panics with the failure message.
///
/// Under the standard test harness a panic fails the current test and stops
/// it, so this is the usual reporter inside `#[test]` functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fatal;

impl Reporter for Fatal {
    #[allow(clippy::panic)]
    fn report(&self, message: &str) {
        panic!("{message}");
    }
}

// =============================================================================
// RECORDER
// =============================================================================

/// Reporter that stores every message and never aborts.
///
/// Single-threaded by construction; give each test its own recorder.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: RefCell<Vec<String>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failures reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Copy of every message, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// The most recent message.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Take every message, leaving the recorder empty.
    pub fn drain(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl Reporter for Recorder {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

// =============================================================================
// TESTS
// =============================================================================
