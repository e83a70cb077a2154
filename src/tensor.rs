use std::ops::{Add, Sub};

use crate::{approx::ApproxEq, Matrix2};

/// A [`Tensor2`] with [`f32`] elements.
pub type Tensor2f = Tensor2<f32>;

/// An ordered pair of [`Matrix2`]s.
///
/// Addition and subtraction work on both matrices independently. There are no other operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tensor2<T = f32> {
    pub first_matrix: Matrix2<T>,
    pub second_matrix: Matrix2<T>,
}

impl<T> Tensor2<T> {
    #[inline]
    pub const fn new(first_matrix: Matrix2<T>, second_matrix: Matrix2<T>) -> Self {
        Self {
            first_matrix,
            second_matrix,
        }
    }
}

impl<T: Add<Output = T>> Add for Tensor2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.first_matrix + rhs.first_matrix,
            self.second_matrix + rhs.second_matrix,
        )
    }
}

impl<T: Sub<Output = T>> Sub for Tensor2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.first_matrix - rhs.first_matrix,
            self.second_matrix - rhs.second_matrix,
        )
    }
}

impl<T: ApproxEq> ApproxEq for Tensor2<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.first_matrix
            .abs_diff_eq(&other.first_matrix, abs_tolerance)
            && self
                .second_matrix
                .abs_diff_eq(&other.second_matrix, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.first_matrix
            .rel_diff_eq(&other.first_matrix, rel_tolerance)
            && self
                .second_matrix
                .rel_diff_eq(&other.second_matrix, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.first_matrix
            .ulps_diff_eq(&other.first_matrix, ulps_tolerance)
            && self
                .second_matrix
                .ulps_diff_eq(&other.second_matrix, ulps_tolerance)
    }
}
