//! # vouch
//!
//! Assertions for Rust tests that report failures at the right call site and
//! let domain types decide what "equal" means.
//!
//! ## Pieces
//!
//! - `reporter`: the host's "mark this test failed" capability (`Reporter`),
//!   plus `Fatal` (panics) and `Recorder` (collects)
//! - `locator`: `path:line` of a caller at an explicit frame depth
//! - `frame`: `with_frame_wrapper`, so custom assertion helpers attribute
//!   failures to their caller
//! - `equality`: the `Equaler` capability and its structural fallback
//! - `absence`: the nilness rule
//! - `assertions`: the primitives
//!
//! ## Usage
//!
//! ```
//! use vouch::{Fatal, assert_equal};
//!
//! let t = Fatal;
//! let parsed: Result<u32, std::num::ParseIntError> = "42".parse();
//!
//! vouch::no_err(&t, parsed.as_ref().err());
//! vouch::not_nil(&t, &parsed.as_ref().ok(), "parsed value");
//! assert_equal!(&t, parsed.ok(), Some(42_u32), "parsed value");
//! vouch::is_true(&t, 42 % 2 == 0, "42 is even");
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod absence;
pub mod assertions;
pub mod equality;
pub mod failure;
pub mod frame;
pub mod locator;
pub mod reporter;
pub mod settings;

#[doc(hidden)]
pub use equality::probe;

// =============================================================================
// RE-EXPORTS: Capabilities
// =============================================================================

pub use absence::Absence;
pub use equality::{AsAny, Comparison, Equaler, equivalent};
pub use frame::{Framed, with_frame_wrapper};
pub use reporter::{Fatal, Recorder, Reporter};

// =============================================================================
// RE-EXPORTS: Assertions
// =============================================================================

pub use assertions::{equal, err, exists_err, is_false, is_true, nil, no_err, not_nil};

// =============================================================================
// RE-EXPORTS: Support
// =============================================================================

pub use failure::{Failure, Mismatch, NO_ERROR, encode_error};
pub use locator::{LocateError, SourceLocation, locate, locate_with};
pub use settings::{PathStyle, Settings, SettingsError};

// =============================================================================
// MACROS
// =============================================================================

/// Fail unless `actual` is equivalent to `expected`.
///
/// Each operand is checked for the [`Equaler`] capability on its own. When
/// both have it, `actual.equal(expected)` decides; otherwise `PartialEq`
/// does, and operands with no `PartialEq` between them are not equivalent.
///
/// The capability is read from each operand's static type where the macro
/// expands. Inside a generic helper a type parameter only has the traits its
/// bounds name, so an `Equaler` behind `T: Debug` probes as absent. Such
/// helpers build the [`Comparison`] themselves and call [`equal`]:
///
/// ```
/// use std::fmt::Debug;
/// use vouch::{Comparison, Equaler, Recorder, Reporter, with_frame_wrapper};
///
/// fn assert_same<A, E>(t: &impl Reporter, actual: A, expected: E)
/// where
///     A: Equaler + Debug,
///     E: Equaler + Debug,
/// {
///     let wt = with_frame_wrapper(t);
///     vouch::equal(&wt, &Comparison::equalers(&actual, &expected), "value");
/// }
///
/// #[derive(Debug)]
/// struct Loose;
/// impl Equaler for Loose {
///     fn equal(&self, _other: &dyn Equaler) -> bool {
///         true
///     }
/// }
///
/// let t = Recorder::new();
/// assert_same(&t, Loose, Loose);
/// assert!(t.is_empty());
/// ```
///
/// ```
/// use vouch::{Equaler, Recorder, assert_equal};
///
/// struct Meters(u32);
/// struct Feet(u32);
///
/// impl Equaler for Meters {
///     fn equal(&self, other: &dyn Equaler) -> bool {
///         other.downcast_ref::<Feet>().is_some_and(|f| f.0 * 3048 == self.0 * 10_000)
///     }
/// }
/// impl Equaler for Feet {
///     fn equal(&self, other: &dyn Equaler) -> bool {
///         other.downcast_ref::<Meters>().is_some_and(|m| m.equal(self))
///     }
/// }
/// # impl std::fmt::Debug for Meters {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}m", self.0) }
/// # }
/// # impl std::fmt::Debug for Feet {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}ft", self.0) }
/// # }
///
/// let t = Recorder::new();
/// assert_equal!(&t, Meters(3048), Feet(10_000), "length");
/// assert_equal!(&t, vec![1_u8, 2], vec![1_u8, 2], "list");
/// assert!(t.is_empty());
///
/// assert_equal!(&t, Meters(1), Feet(1), "length");
/// assert_eq!(t.len(), 1);
/// ```
#[macro_export]
macro_rules! assert_equal {
    ($reporter:expr, $actual:expr, $expected:expr, $noun:expr $(,)?) => {
        match (&$actual, &$expected) {
            (actual, expected) => {
                #[allow(unused_imports)]
                use $crate::probe::{
                    ViaEqualer as _, ViaPartialEq as _, WithoutEqualer as _,
                    WithoutPartialEq as _,
                };
                let structural = || (&$crate::probe::Pair(actual, expected)).structural_eq();
                let comparison = $crate::Comparison::new(
                    actual,
                    expected,
                    (&$crate::probe::Probe(actual)).equaler(),
                    (&$crate::probe::Probe(expected)).equaler(),
                    &structural,
                );
                $crate::equal($reporter, &comparison, $noun)
            }
        }
    };
}
