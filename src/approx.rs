//! Approximate equality for scalars and the geometric types of this crate.
//!
//! Floating-point results of rotations, inversions and normalizations rarely compare equal
//! bit-for-bit to a hand-written expectation. [`ApproxEq`] provides three ways of comparing them,
//! and [`assert_approx_eq!`][crate::assert_approx_eq] turns those into test assertions.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types are equal when all of their components are.
pub trait ApproxEq {
    /// Scalar type in which tolerances are expressed ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other`.
    ///
    /// `NaN` is never equal to anything, and values of opposite sign only compare equal if they
    /// are both zero.
    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool;
}

/// Tolerances used when an assertion does not specify its own.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the value is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparisons to perform; the values are
/// considered equal if *any* selected comparison says so. With none selected, an absolute and a
/// relative comparison with the [`DefaultTolerances`] of the tolerance type are performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference against `abs`.
    ///
    /// Works best for values close to zero, where relative comparisons break down.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference against `rel` times the larger magnitude.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compares the distance in units in the last place against `ulps`.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let abs = self.abs.map_or(false, |tol| self.left.abs_diff_eq(self.right, tol));
        let rel = self.rel.map_or(false, |tol| self.left.rel_diff_eq(self.right, tol));
        let ulps = self.ulps.map_or(false, |tol| self.left.ulps_diff_eq(self.right, tol));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assertion_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assertion_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // `#[track_caller]` has no effect on `drop`, so the location captured at construction is
    // printed explicitly.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Returns an [`Asserter`] that can be used to pick the comparison and its tolerance.
///
/// # Examples
///
/// ```
/// # use frustum_linalg::*;
/// let v = vec2(3.0, 4.0).normalized();
/// assert_approx_eq!(v, vec2(0.6, 0.8));
/// assert_approx_eq!(v.norm(), 1.0).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use frustum_linalg::*;
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "singular check")]
    fn message() {
        assert_approx_eq!(0.0, 1.0, "singular check");
    }

    #[test]
    #[deny(unused_must_use)]
    fn bare_assertion() {
        assert_approx_eq!(0.1 + 0.2, 0.3);
        assert_approx_ne!(1.0, 2.0);
    }

    #[test]
    fn tolerances() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(10.0, 10.5).abs(0.5);
        assert_approx_eq!(100.0, 99.0).rel(0.01);
        assert_approx_eq!(-1.0, 1.0).abs(2.0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).rel(1000.0);
        assert_approx_eq!(f64::NEG_INFINITY, f64::NEG_INFINITY).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }
}
