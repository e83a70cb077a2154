//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Number, Matrix2};

use super::Vector2;

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {index} out of range for `Vector2`"),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {index} out of range for `Vector2`"),
        }
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U; 2]> for Vector2<T> {
    fn eq(&self, other: &[U; 2]) -> bool {
        self.x == other[0] && self.y == other[1]
    }
}

impl<T: ApproxEq> ApproxEq for Vector2<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.x.abs_diff_eq(&other.x, abs_tolerance) && self.y.abs_diff_eq(&other.y, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.x.rel_diff_eq(&other.x, rel_tolerance) && self.y.rel_diff_eq(&other.y, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.x.ulps_diff_eq(&other.x, ulps_tolerance)
            && self.y.ulps_diff_eq(&other.y, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Element-wise subtraction.
impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Element-wise multiplication.
impl<T: Number> Mul<Vector2<T>> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        self.mul_elementwise(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Row Vector * Matrix (GLSL `vec2 * mat2`).
///
/// This is *not* the same as `mat * vec` with the matrix transposed. See
/// [`Matrix2::right_multiply`].
impl<T: Number> Mul<Matrix2<T>> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Matrix2<T>) -> Self::Output {
        self.mul_matrix(rhs)
    }
}

/// Element-wise division.
impl<T: Div<Output = T>> Div<Vector2<T>> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: Vector2<T>) -> Self::Output {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Vector-Scalar division.
impl<T: Div<Output = T> + Copy> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign + Copy> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

// Scalar * Vector can't be written generically over `T` (orphan rules), so it's spelled out for
// the float types.
macro_rules! scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            impl Mul<Vector2<$ty>> for $ty {
                type Output = Vector2<$ty>;

                fn mul(self, rhs: Vector2<$ty>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);
