//! # Absence
//!
//! The nilness rule used by [`nil`](crate::nil) and [`not_nil`](crate::not_nil).
//!
//! A value is absent when it is:
//! - `None`, whatever the payload type
//! - a null raw pointer
//! - a `Weak` with no strong owner left (including `Weak::new()`)
//! - any holder (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Box<dyn Absence>`) whose
//!   content is absent
//!
//! Scalars, strings, tuples up to twelve elements and the std collections
//! are always present, even when empty. A tuple is present even if every
//! element is `None`.
//!
//! This rule is stricter than general equality and is never applied by
//! [`equivalent`](crate::equivalent): `Box::new(None::<u8>)` is absent here
//! but still compares structurally like any other box.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// Whether a value counts as absent.
///
/// Types with no notion of absence implement it with the default method:
///
/// ```
/// #[derive(Debug)]
/// struct Port(u16);
///
/// impl vouch::Absence for Port {}
/// ```
pub trait Absence: Debug {
    /// `true` when the value is absent.
    fn is_absent(&self) -> bool {
        false
    }
}

// =============================================================================
// NULLABLE VALUES
// =============================================================================

impl<T: Debug> Absence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Absence for *const T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absence for *mut T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absence for rc::Weak<T> {
    fn is_absent(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Absence for sync::Weak<T> {
    fn is_absent(&self) -> bool {
        self.strong_count() == 0
    }
}

// =============================================================================
// HOLDERS (delegate to their content)
// =============================================================================

impl<T: Absence + ?Sized> Absence for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for &mut T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Rc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Arc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

// =============================================================================
// ALWAYS PRESENT
// =============================================================================

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Absence for $ty {})*
    };
}

always_present!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

macro_rules! present_tuples {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name: Debug),+> Absence for ($($name,)+) {})*
    };
}

present_tuples!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

impl<T: Debug> Absence for [T] {}
impl<T: Debug, const N: usize> Absence for [T; N] {}
impl<T: Debug> Absence for Vec<T> {}
impl<T: Debug> Absence for VecDeque<T> {}
impl<T: Debug> Absence for BTreeSet<T> {}
impl<T: Debug, S> Absence for HashSet<T, S> {}
impl<K: Debug, V: Debug> Absence for BTreeMap<K, V> {}
impl<K: Debug, V: Debug, S> Absence for HashMap<K, V, S> {}

// =============================================================================
// TESTS
// =============================================================================
