//! Axis-aligned bounding boxes.

use std::fmt;

use crate::{approx::ApproxEq, traits::Float, vec2, Vector2};

/// A [`BoundingBox`] with [`f32`] coordinates.
pub type BoundingBoxf = BoundingBox<f32>;

/// An axis-aligned box spanned by a minimum and a maximum corner.
///
/// The [`Default`] box is *empty*: its minimum corner is at `(+inf, +inf)` and its maximum corner
/// at `(-inf, -inf)`, so it contains no point and its [`extent`](Self::extent) is negative.
///
/// [`BoundingBox::new`] does not check that `min <= max` on both axes. Boxes where this does not
/// hold behave like the empty box for containment tests.
#[derive(Clone, Copy, PartialEq)]
pub struct BoundingBox<T = f32> {
    min: Vector2<T>,
    max: Vector2<T>,
}

impl<T> BoundingBox<T> {
    /// Creates a box from its minimum and maximum corner.
    #[inline]
    pub const fn new(min: Vector2<T>, max: Vector2<T>) -> Self {
        Self { min, max }
    }
}

impl<T: Float> BoundingBox<T> {
    /// Returns the empty box.
    pub fn empty() -> Self {
        Self::new(
            vec2(T::INFINITY, T::INFINITY),
            vec2(T::NEG_INFINITY, T::NEG_INFINITY),
        )
    }

    #[inline]
    pub fn min(&self) -> Vector2<T> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vector2<T> {
        self.max
    }

    /// Returns the size of the box along each axis (`max - min`).
    ///
    /// Negative for the empty box.
    pub fn extent(&self) -> Vector2<T> {
        self.max - self.min
    }

    /// Returns the point halfway between both corners.
    pub fn center(&self) -> Vector2<T> {
        let half = T::ONE / (T::ONE + T::ONE);
        (self.min + self.max) * half
    }

    /// Returns whether `point` lies strictly inside the box.
    ///
    /// Points on the boundary are *not* contained.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// let bbox = BoundingBox::new(vec2(0.0, 0.0), vec2(10.0, 10.0));
    /// assert!(bbox.contains_strict(vec2(5.0, 5.0)));
    /// assert!(!bbox.contains_strict(vec2(0.0, 5.0)));
    /// assert!(!BoundingBox::empty().contains_strict(vec2(5.0, 5.0)));
    /// ```
    pub fn contains_strict(&self, point: impl Into<Vector2<T>>) -> bool {
        let p = point.into();
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }
}

impl<T: Float> Default for BoundingBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundingBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox {:?}..{:?}", self.min, self.max)
    }
}

impl<T: ApproxEq> ApproxEq for BoundingBox<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.min.abs_diff_eq(&other.min, abs_tolerance)
            && self.max.abs_diff_eq(&other.max, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.min.rel_diff_eq(&other.min, rel_tolerance)
            && self.max.rel_diff_eq(&other.max, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.min.ulps_diff_eq(&other.min, ulps_tolerance)
            && self.max.ulps_diff_eq(&other.max, ulps_tolerance)
    }
}
