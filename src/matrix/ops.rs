use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::{approx::ApproxEq, traits::Number, Matrix2, Vector2};

/// Column access (`m[col]`).
impl<T> Index<usize> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        match self.0.get(col) {
            Some(column) => column,
            None => panic!("column index {col} out of range for `Matrix2`"),
        }
    }
}

impl<T> IndexMut<usize> for Matrix2<T> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        match self.0.get_mut(col) {
            Some(column) => column,
            None => panic!("column index {col} out of range for `Matrix2`"),
        }
    }
}

/// Element access (`m[(col, row)]`, GLSL order).
impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self[col][row]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        &mut self[col][row]
    }
}

impl<T: ApproxEq> ApproxEq for Matrix2<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

impl<T: Neg<Output = T>> Neg for Matrix2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Column-wise addition.
impl<T: Add<Output = T>> Add for Matrix2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let ([a0, a1], [b0, b1]) = (self.0, rhs.0);
        Matrix2::from_columns(a0 + b0, a1 + b1)
    }
}

/// Column-wise subtraction.
impl<T: Sub<Output = T>> Sub for Matrix2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let ([a0, a1], [b0, b1]) = (self.0, rhs.0);
        Matrix2::from_columns(a0 - b0, a1 - b1)
    }
}

/// Matrix * Column Vector.
impl<T: Number> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul<Matrix2<T>> for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: Matrix2<T>) -> Self::Output {
        self.mul_matrix(&rhs)
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Matrix / Scalar.
impl<T: Div<Output = T> + Copy> Div<T> for Matrix2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Divides each column element-wise by `rhs`.
impl<T: Div<Output = T> + Copy> Div<Vector2<T>> for Matrix2<T> {
    type Output = Self;

    fn div(self, rhs: Vector2<T>) -> Self::Output {
        let [first, second] = self.0;
        Matrix2::from_columns(first / rhs, second / rhs)
    }
}

macro_rules! scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            impl Mul<Matrix2<$ty>> for $ty {
                type Output = Matrix2<$ty>;

                fn mul(self, rhs: Matrix2<$ty>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);
