//! # Equality Evaluator
//!
//! Decides whether an actual value is equivalent to an expected one.
//!
//! 1. If BOTH operands carry the [`Equaler`] capability, the answer is
//!    `actual.equal(expected)`. Nothing else is consulted, and the reverse
//!    direction is never called.
//! 2. Otherwise the operands are compared structurally through `PartialEq`.
//!    Operands with no `PartialEq` between them are not equivalent.
//!
//! Capabilities are probed per operand at the [`assert_equal!`](crate::assert_equal)
//! call site; an operand without the capability is not an error, it only
//! selects the structural path.

use std::any::Any;
use std::fmt::{self, Debug};

// =============================================================================
// EQUALER CAPABILITY
// =============================================================================

/// Upcast helper so `dyn Equaler` can be downcast to a concrete type.
///
/// Implemented for every `'static` type; there is no need to implement it by
/// hand.
pub trait AsAny: Any {
    /// View `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type-supplied equivalence.
///
/// Implement this to replace structural comparison for a domain type,
/// including equivalence with other types:
///
/// ```
/// use vouch::Equaler;
///
/// struct Celsius(i64);
/// struct Kelvin(i64);
///
/// impl Equaler for Celsius {
///     fn equal(&self, other: &dyn Equaler) -> bool {
///         if let Some(c) = other.downcast_ref::<Celsius>() {
///             return c.0 == self.0;
///         }
///         other
///             .downcast_ref::<Kelvin>()
///             .is_some_and(|k| k.0 == self.0 + 273)
///     }
/// }
/// ```
///
/// Symmetry is the implementor's responsibility.
pub trait Equaler: AsAny {
    /// Whether `self` is equivalent to `other`.
    fn equal(&self, other: &dyn Equaler) -> bool;
}

impl dyn Equaler {
    /// The concrete value behind `other`, if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Equaler>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the value behind `self` is a `T`.
    #[must_use]
    pub fn is<T: Equaler>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Two operands captured for evaluation.
///
/// Holds both values for rendering, each operand's optional [`Equaler`]
/// view, and a structural check that only runs when needed.
///
/// Built by [`assert_equal!`](crate::assert_equal) at a call site where the
/// operand types are concrete. Generic code, where the macro can only see
/// the bounds, picks its semantics explicitly with [`Comparison::structural`]
/// or [`Comparison::equalers`].
pub struct Comparison<'a> {
    actual: &'a dyn Debug,
    expected: &'a dyn Debug,
    actual_equaler: Option<&'a dyn Equaler>,
    expected_equaler: Option<&'a dyn Equaler>,
    structural: Box<dyn Fn() -> bool + 'a>,
}

impl<'a> Comparison<'a> {
    /// Capture a comparison with explicit capability views.
    ///
    /// This is what [`assert_equal!`](crate::assert_equal) expands to.
    #[must_use]
    pub fn new(
        actual: &'a dyn Debug,
        expected: &'a dyn Debug,
        actual_equaler: Option<&'a dyn Equaler>,
        expected_equaler: Option<&'a dyn Equaler>,
        structural: &'a dyn Fn() -> bool,
    ) -> Self {
        Self {
            actual,
            expected,
            actual_equaler,
            expected_equaler,
            structural: Box::new(structural),
        }
    }

    /// Compare through `PartialEq` only, with no capability probing.
    #[must_use]
    pub fn structural<A, E>(actual: &'a A, expected: &'a E) -> Self
    where
        A: PartialEq<E> + Debug,
        E: Debug,
    {
        Self {
            actual,
            expected,
            actual_equaler: None,
            expected_equaler: None,
            structural: Box::new(move || actual == expected),
        }
    }

    /// Compare two [`Equaler`] operands: the verdict is `actual.equal(expected)`.
    ///
    /// For generic helpers bounded on `Equaler`, where
    /// [`assert_equal!`](crate::assert_equal) cannot see the capability.
    #[must_use]
    pub fn equalers<A, E>(actual: &'a A, expected: &'a E) -> Self
    where
        A: Equaler + Debug,
        E: Equaler + Debug,
    {
        Self {
            actual,
            expected,
            actual_equaler: Some(actual),
            expected_equaler: Some(expected),
            structural: Box::new(|| false),
        }
    }

    /// The actual operand, for rendering.
    #[must_use]
    pub fn actual(&self) -> &'a dyn Debug {
        self.actual
    }

    /// The expected operand, for rendering.
    #[must_use]
    pub fn expected(&self) -> &'a dyn Debug {
        self.expected
    }

    /// Evaluate the comparison.
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        equivalent(self)
    }
}

impl Debug for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparison")
            .field("actual", &self.actual)
            .field("expected", &self.expected)
            .field("actual_is_equaler", &self.actual_equaler.is_some())
            .field("expected_is_equaler", &self.expected_equaler.is_some())
            .finish_non_exhaustive()
    }
}

/// Equivalence of the two operands of `comparison`.
#[must_use]
pub fn equivalent(comparison: &Comparison<'_>) -> bool {
    match (comparison.actual_equaler, comparison.expected_equaler) {
        (Some(actual), Some(expected)) => actual.equal(expected),
        _ => (comparison.structural)(),
    }
}

// =============================================================================
// CAPABILITY PROBES
// =============================================================================

/// Call-site capability probes used by [`assert_equal!`](crate::assert_equal).
///
/// Each probe has a capable impl on `Probe<T>` and a fallback on `&Probe<T>`.
/// Method lookup on `(&Probe(x)).method()` tries the capable impl first and
/// only autorefs to the fallback when the bound does not hold.
#[doc(hidden)]
pub mod probe {
    use super::Equaler;

    /// One operand under inspection.
    pub struct Probe<'a, T: ?Sized>(pub &'a T);

    /// Both operands, for the structural check.
    pub struct Pair<'a, A: ?Sized, E: ?Sized>(pub &'a A, pub &'a E);

    pub trait ViaEqualer<'a> {
        fn equaler(&self) -> Option<&'a dyn Equaler>;
    }

    impl<'a, T: Equaler> ViaEqualer<'a> for Probe<'a, T> {
        fn equaler(&self) -> Option<&'a dyn Equaler> {
            Some(self.0)
        }
    }

    pub trait WithoutEqualer<'a> {
        fn equaler(&self) -> Option<&'a dyn Equaler> {
            None
        }
    }

    impl<'a, T: ?Sized> WithoutEqualer<'a> for &Probe<'a, T> {}

    pub trait ViaPartialEq {
        fn structural_eq(&self) -> bool;
    }

    impl<A, E> ViaPartialEq for Pair<'_, A, E>
    where
        A: PartialEq<E> + ?Sized,
        E: ?Sized,
    {
        fn structural_eq(&self) -> bool {
            self.0 == self.1
        }
    }

    pub trait WithoutPartialEq {
        fn structural_eq(&self) -> bool {
            false
        }
    }

    impl<A: ?Sized, E: ?Sized> WithoutPartialEq for &Pair<'_, A, E> {}
}

// =============================================================================
// TESTS
// =============================================================================
