use std::fmt;

use itertools::Itertools;

use crate::{
    error::{check_index, LinalgError, Result},
    traits::{Float, Number},
    vec2, One, Vector2, Zero,
};

mod ops;

/// A 2x2 matrix with [`f32`] elements.
pub type Matrix2f = Matrix2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Matrix2d = Matrix2<f64>;

/// A column-major 2x2 matrix, laid out like GLSL's `mat2`.
///
/// # Construction
///
/// - [`Matrix2::from_columns`] takes the two column vectors.
/// - [`Matrix2::new`] (and the [`mat2`] shorthand) takes the four elements in column order, so
///   that `Matrix2::new(a, b, c, d)` is the matrix
///
///   ```text
///   [a  c]
///   [b  d]
///   ```
/// - [`Matrix2::IDENTITY`], [`Matrix2::ZERO`] and [`Matrix2::rotation`] create commonly used
///   matrices.
///
/// Columns are stored by value, so a matrix never shares storage with the vectors it was built
/// from.
///
/// # Element Access
///
/// Indexing follows GLSL: `m[col]` is a column vector, and `m[(col, row)]` is a single element.
/// Note that this is the opposite order of the usual mathematical `(row, col)` notation.
///
/// ```
/// # use frustum_linalg::*;
/// let mut m = mat2(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(m[1], vec2(3.0, 4.0));
/// assert_eq!(m[(0, 1)], 2.0);
///
/// m[(1, 0)] = 9.0;
/// assert_eq!(m.second_column(), vec2(9.0, 4.0));
/// ```
///
/// Indexing out of bounds panics. The checked accessors [`Matrix2::column`], [`Matrix2::get`],
/// [`Matrix2::set_column`] and [`Matrix2::set`] return an
/// [`IndexOutOfRange`][LinalgError::IndexOutOfRange] error instead.
///
/// # Multiplication
///
/// Multiplying a matrix with a vector has two distinct meanings:
///
/// - `m * v` ([`Matrix2::mul_vector`]) transforms the *column* vector `v` by `m`.
/// - `v * m` ([`Matrix2::right_multiply`]) dots the *row* vector `v` with each column of `m`.
///
/// Both agree only if `m` is symmetric.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(transparent)]
pub struct Matrix2<T = f32>([Vector2<T>; 2]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix2<T> {}

impl<T> Matrix2<T> {
    /// Creates a matrix from its first and second column.
    #[inline]
    pub const fn from_columns(first: Vector2<T>, second: Vector2<T>) -> Self {
        Self([first, second])
    }

    /// Creates a matrix from its elements, in column-major order.
    #[inline]
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self::from_columns(vec2(a, b), vec2(c, d))
    }

    /// Returns the dimensions of the matrix as `(columns, rows)`, which is always `(2, 2)`.
    #[inline]
    pub const fn size(&self) -> (usize, usize) {
        (2, 2)
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix2<U>
    where
        F: FnMut(T) -> U,
    {
        let [first, second] = self.0;
        Matrix2([first.map(&mut f), second.map(&mut f)])
    }

    #[inline]
    pub fn into_columns(self) -> [Vector2<T>; 2] {
        self.0
    }

    /// Returns the column at index `col`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`][LinalgError::IndexOutOfRange] if `col` is neither 0 nor 1.
    pub fn column(&self, col: usize) -> Result<Vector2<T>>
    where
        T: Copy,
    {
        Ok(self.0[check_index(col)?])
    }

    /// Returns the element in column `col` and row `row`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`][LinalgError::IndexOutOfRange] if either index is neither 0
    /// nor 1.
    pub fn get(&self, col: usize, row: usize) -> Result<T>
    where
        T: Copy,
    {
        self.column(col)?.get(row)
    }

    /// Replaces column `col` with `column`.
    pub fn set_column(&mut self, col: usize, column: Vector2<T>) -> Result<()> {
        self.0[check_index(col)?] = column;
        Ok(())
    }

    /// Replaces the element in column `col` and row `row` with `value`.
    ///
    /// Only `self` is modified: vectors previously read out of the matrix are copies and keep
    /// their old value.
    pub fn set(&mut self, col: usize, row: usize, value: T) -> Result<()> {
        self.0[check_index(col)?].set(row, value)
    }
}

impl<T: Copy> Matrix2<T> {
    #[inline]
    pub fn first_column(&self) -> Vector2<T> {
        self.0[0]
    }

    #[inline]
    pub fn second_column(&self) -> Vector2<T> {
        self.0[1]
    }

    /// Returns the row at index `row` as a vector.
    fn row(&self, row: usize) -> Vector2<T> {
        vec2(self.0[0][row], self.0[1][row])
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// let m = mat2(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(m.transpose(), mat2(1.0, 3.0, 2.0, 4.0));
    /// ```
    pub fn transpose(self) -> Self {
        Self::from_columns(self.row(0), self.row(1))
    }
}

impl<T: Zero> Matrix2<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self::from_columns(Vector2::ZERO, Vector2::ZERO);
}

impl<T: Zero + One> Matrix2<T> {
    /// The identity matrix.
    ///
    /// Multiplying any vector or matrix with it returns that vector or matrix unchanged.
    pub const IDENTITY: Self = Self::from_columns(Vector2::X, Vector2::Y);

    /// Returns [`Matrix2::IDENTITY`].
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T: Number> Matrix2<T> {
    /// Transforms the column vector `vec` by `self` (`self * vec`).
    ///
    /// The result is the linear combination `col0 * vec.x + col1 * vec.y`.
    pub fn mul_vector(&self, vec: Vector2<T>) -> Vector2<T> {
        let [first, second] = self.0;
        first.scale(vec.x) + second.scale(vec.y)
    }

    /// Multiplies the row vector `vec` with `self` (GLSL's `vec * mat`).
    ///
    /// The result is `(vec·col0, vec·col1)`, which equals `self.transpose() * vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// let m = mat2(1.0, 2.0, 3.0, 4.0);
    /// let v = vec2(1.0, 1.0);
    /// assert_eq!(m.right_multiply(v), vec2(3.0, 7.0));
    /// assert_eq!(m.mul_vector(v), vec2(4.0, 6.0));
    /// ```
    pub fn right_multiply(&self, vec: Vector2<T>) -> Vector2<T> {
        let [first, second] = self.0;
        vec2(vec.dot(first), vec.dot(second))
    }

    /// Computes the matrix product `self * other`.
    pub fn mul_matrix(&self, other: &Self) -> Self {
        let [first, second] = other.0;
        Self::from_columns(self.mul_vector(first), self.mul_vector(second))
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(self, scalar: T) -> Self {
        self.map(|elem| elem * scalar)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [first, second] = self.0;
        first.cross(second)
    }
}

impl<T: Float> Matrix2<T> {
    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrix`][LinalgError::SingularMatrix] if the [determinant] is zero.
    ///
    /// [determinant]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// let m = Matrix2f::IDENTITY.scale(2.0);
    /// assert_eq!(m.inverse()?, Matrix2f::IDENTITY.scale(0.5));
    ///
    /// assert!(mat2(1.0, 1.0, 1.0, 1.0).inverse().is_err());
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("attempt to invert singular matrix {:?}", self);
            return Err(LinalgError::SingularMatrix {
                determinant: det.to_f64(),
            });
        }

        let [first, second] = self.0;
        let adjugate = Self::new(second.y, -first.y, -second.x, first.x);
        Ok(adjugate / det)
    }

    /// Creates a matrix rotating vectors counterclockwise by `radians`.
    ///
    /// With the X axis pointing right and the Y axis pointing up, `rotation(TAU / 4.0)` has the
    /// same effect as [`Vector2::rotated90`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let v = vec2(2.0, 1.0);
    /// assert_approx_eq!(Matrix2::rotation(TAU / 4.0) * v, v.rotated90()).abs(1e-6);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos)
    }

    /// Creates a matrix rotating vectors clockwise by `radians`.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation(-radians)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a T, &'a T);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                self.0.fmt(f)?;
                write!(f, ", ")?;
                self.1.fmt(f)?;
                write!(f, "]")
            }
        }

        // Natural writing order (row-wise), even though storage is column-major.
        let [first, second] = &self.0;
        f.debug_list()
            .entry(&FormatRow(&first.x, &second.x))
            .entry(&FormatRow(&first.y, &second.y))
            .finish()
    }
}

/// Renders the matrix row by row, one row per line.
impl<T: fmt::Display + Copy> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Element formatting is forwarded so that precision flags apply to each element.
        let [top, bottom] = [self.row(0), self.row(1)].map(Vector2::into_array);
        f.write_str("[")?;
        fmt::Display::fmt(&top.iter().format(", "), f)?;
        f.write_str("]\n[")?;
        fmt::Display::fmt(&bottom.iter().format(", "), f)?;
        f.write_str("]")
    }
}

/// Constructs a [`Matrix2`] from its elements in column-major order.
#[inline]
pub const fn mat2<T>(a: T, b: T, c: T, d: T) -> Matrix2<T> {
    Matrix2::new(a, b, c, d)
}

/// Creates a matrix rotating vectors counterclockwise by `radians`.
pub fn rotation<T: Float>(radians: T) -> Matrix2<T> {
    Matrix2::rotation(radians)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use crate::{assert_approx_eq, test::init_logger, Matrix2d, Vector2f};

    use super::*;

    #[test]
    fn construction() {
        let m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m, Matrix2::from_columns(vec2(1.0, 2.0), vec2(3.0, 4.0)));
        assert_eq!(m.first_column(), vec2(1.0, 2.0));
        assert_eq!(m.second_column(), vec2(3.0, 4.0));
        assert_eq!(m.size(), (2, 2));
        assert_eq!(Matrix2::<f32>::default(), Matrix2f::ZERO);
        assert_eq!(Matrix2f::identity(), mat2(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn no_aliasing() {
        let mut col = vec2(1.0, 2.0);
        let mut m = Matrix2::from_columns(col, vec2(3.0, 4.0));
        col.x = 100.0;
        assert_eq!(col, vec2(100.0, 2.0));
        assert_eq!(m[(0, 0)], 1.0);

        let read = m[0];
        m.set(0, 1, -5.0).unwrap();
        assert_eq!(read, vec2(1.0, 2.0));
        assert_eq!(m[0], vec2(1.0, -5.0));
    }

    #[test]
    fn checked_access() {
        let mut m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.column(1), Ok(vec2(3.0, 4.0)));
        assert_eq!(m.get(1, 0), Ok(3.0));
        assert_eq!(m.get(0, 1), Ok(2.0));
        assert_eq!(
            m.column(2),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            m.get(0, 3),
            Err(LinalgError::IndexOutOfRange { index: 3, len: 2 })
        );

        m.set_column(0, vec2(-1.0, -2.0)).unwrap();
        m.set(1, 1, 8.0).unwrap();
        assert_eq!(m, mat2(-1.0, -2.0, 3.0, 8.0));

        assert!(m.set_column(2, Vector2::ZERO).is_err());
        assert!(m.set(0, 2, 0.0).is_err());
        assert_eq!(m, mat2(-1.0, -2.0, 3.0, 8.0));
    }

    #[test]
    fn fmt() {
        let m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{}", m), "[1, 3]\n[2, 4]");
        assert_eq!(format!("{:.1}", m), "[1.0, 3.0]\n[2.0, 4.0]");
        assert_eq!(format!("{:?}", m), "[[1.0, 3.0], [2.0, 4.0]]");
        assert_eq!(
            format!("{:#?}", m),
            "
[
    [1.0, 3.0],
    [2.0, 4.0],
]
"
            .trim()
        );
    }

    #[test]
    fn transpose() {
        let m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.transpose().first_column(), vec2(1.0, 3.0));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix2f::ZERO.determinant(), 0.0);
        assert_eq!(Matrix2f::IDENTITY.determinant(), 1.0);
        assert_eq!(mat2(2.0, 0.0, 0.0, 2.0).determinant(), 4.0);
        assert_eq!(mat2(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
    }

    #[test]
    fn inverse() {
        let m = Matrix2d::IDENTITY.scale(2.0);
        assert_eq!(m.inverse(), Ok(Matrix2d::IDENTITY.scale(0.5)));

        let m = mat2(4.0, 2.0, 7.0, 6.0);
        let inv = m.inverse().unwrap();
        assert_approx_eq!(inv, mat2(0.6, -0.2, -0.7, 0.4)).abs(1e-12);
        assert_approx_eq!(m * inv, Matrix2::IDENTITY).abs(1e-12);
        assert_approx_eq!(inv * m, Matrix2::IDENTITY).abs(1e-12);
    }

    #[test]
    fn inverse_tiny_determinant() {
        let m = mat2(3e-20f32, 0.0, 0.0, 3e-20);
        assert_ne!(m.determinant(), 0.0);

        let inv = m.inverse().unwrap();
        assert!(inv.into_columns().iter().all(|col| col.x.is_finite() && col.y.is_finite()));
        assert_approx_eq!(inv, Matrix2f::IDENTITY.scale(1.0 / 3e-20)).rel(1e-5);
        assert_approx_eq!(m * inv, Matrix2f::IDENTITY).abs(1e-5);
    }

    #[test]
    fn singular() {
        init_logger();

        let m = mat2(1.0, 1.0, 1.0, 1.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(
            m.inverse(),
            Err(LinalgError::SingularMatrix { determinant: 0.0 })
        );
        assert!(Matrix2f::ZERO.inverse().is_err());
    }

    #[test]
    fn rotation() {
        let ccw = Matrix2f::rotation(0.0);
        assert_eq!(ccw, Matrix2f::IDENTITY);
        assert_eq!(Matrix2f::rotation_clockwise(0.0), ccw);

        let quarter = Matrix2f::rotation(TAU / 4.0);
        assert_approx_eq!(quarter * Vector2f::X, Vector2f::Y).abs(1e-6);
        assert_approx_eq!(quarter * vec2(3.0, -1.0), vec2(3.0, -1.0).rotated90()).abs(1e-6);

        let cw = Matrix2f::rotation_clockwise(TAU / 4.0);
        assert_approx_eq!(cw * Vector2f::Y, Vector2f::X).abs(1e-6);
        assert_approx_eq!(cw, quarter.transpose()).abs(1e-6);

        let half = super::rotation(PI);
        assert_approx_eq!(half, half.inverse().unwrap()).abs(1e-6);
        assert_approx_eq!(half.determinant(), 1.0).abs(1e-6);
    }
}
