use std::fmt;

use crate::{
    error::{check_index, Result},
    traits::{Float, Number},
    Matrix2, One, Zero,
};

mod ops;

/// A 2-dimensional vector with [`f32`] elements.
pub type Vector2f = Vector2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2d = Vector2<f64>;

/// A 2-element column vector.
///
/// [`Vector2`] is a plain value type: every arithmetic operation returns a new vector, and the
/// only way to modify one in place is through its fields or indexed assignment.
///
/// # Arithmetic
///
/// The [`std::ops`] operators follow GLSL semantics:
///
/// - `v + w`, `v - w` and `-v` work element-wise.
/// - `v * s` and `s * v` scale by a scalar, `v * w` multiplies element-wise (*not* the dot
///   product, use [`Vector2::dot`] for that).
/// - `v / s` and `v / w` divide by a scalar or element-wise.
/// - `v * m` with a [`Matrix2`] treats `v` as a *row* vector, see [`Matrix2::right_multiply`].
///
/// Each of these also exists as a named method ([`Vector2::scale`],
/// [`Vector2::mul_elementwise`], [`Vector2::mul_matrix`]).
///
/// # Element Access
///
/// Elements are available as the `x` and `y` fields, or by index (`v[0]` is `x`, `v[1]` is `y`).
/// Indexing out of bounds panics like it does for slices; [`Vector2::get`] and [`Vector2::set`]
/// report an [`IndexOutOfRange`] error instead.
///
/// [`IndexOutOfRange`]: crate::LinalgError::IndexOutOfRange
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector2<T = f32> {
    pub x: T,
    pub y: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector2<T> {}

impl<T: Zero> Vector2<T> {
    /// A vector with both elements set to 0.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
}

impl<T: Zero + One> Vector2<T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::new(T::ONE, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::new(T::ZERO, T::ONE);
}

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the number of elements, which is always 2.
    #[inline]
    pub const fn size(&self) -> usize {
        2
    }

    /// Applies a closure to both elements, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(vec2(1.0, -2.0).map(|e| e * 10.0), vec2(10.0, -20.0));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Vector2<U>
    where
        F: FnMut(T) -> U,
    {
        Vector2::new(f(self.x), f(self.y))
    }

    /// Merges two vectors into one holding pairs of their elements.
    pub fn zip<U>(self, other: Vector2<U>) -> Vector2<(T, U)> {
        Vector2::new((self.x, other.x), (self.y, other.y))
    }

    #[inline]
    pub fn into_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`][crate::LinalgError::IndexOutOfRange] if `index` is neither 0
    /// nor 1.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        Ok(self[check_index(index)?])
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`][crate::LinalgError::IndexOutOfRange] if `index` is neither 0
    /// nor 1. `self` is left unchanged in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self[check_index(index)?] = value;
        Ok(())
    }
}

impl<T: Number> Vector2<T> {
    /// Multiplies both elements by `scalar`.
    pub fn scale(self, scalar: T) -> Self {
        self.map(|e| e * scalar)
    }

    /// Multiplies `self` and `other` element by element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(vec2(2.0, 3.0).mul_elementwise(vec2(4.0, -1.0)), vec2(8.0, -3.0));
    /// ```
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Multiplies `self`, as a row vector, with `mat`.
    ///
    /// This is GLSL's `vec2 * mat2` and is the same as [`Matrix2::right_multiply`].
    pub fn mul_matrix(self, mat: Matrix2<T>) -> Self {
        mat.right_multiply(self)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(vec2(1.0, 3.0).dot(vec2(4.0, -2.0)), -2.0);
    /// assert_eq!(Vector2f::X.dot(Vector2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product) of `self` and `other`.
    ///
    /// The result is the signed area of the parallelogram spanned by both vectors. It is positive
    /// if `other` lies counterclockwise of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(Vector2f::X.cross(Vector2f::Y), 1.0);
    /// assert_eq!(Vector2f::Y.cross(Vector2f::X), -1.0);
    /// ```
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Computes the outer product `self * otherᵗ`.
    ///
    /// The result has rank 1 (its determinant is zero).
    pub fn outer_product(self, other: Self) -> Matrix2<T> {
        Matrix2::from_columns(self.scale(other.x), self.scale(other.y))
    }

    /// Returns the squared length of this vector.
    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    /// Rotates `self` counterclockwise by a quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(Vector2f::X.rotated90(), Vector2f::Y);
    /// assert_eq!(Vector2f::Y.rotated90(), -Vector2f::X);
    /// ```
    pub fn rotated90(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Float> Vector2<T> {
    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use frustum_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
    /// ```
    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it yields non-finite elements.
    pub fn normalized(self) -> Self {
        self / self.norm()
    }

    /// Takes the absolute value of each element.
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(value: Vector2<T>) -> Self {
        value.into_array()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("").field(&self.x).field(&self.y).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<'a, D>(&'a D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<'_, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.0, f)
            }
        }

        f.debug_tuple("")
            .field(&DebugViaDisplay(&self.x))
            .field(&DebugViaDisplay(&self.y))
            .finish()
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Vector2::new(x, y)
}

/// Computes the dot product of `u` and `v`.
pub fn dot<T: Number>(u: Vector2<T>, v: Vector2<T>) -> T {
    u.dot(v)
}

/// Alias of [`dot`].
pub fn inner<T: Number>(u: Vector2<T>, v: Vector2<T>) -> T {
    u.dot(v)
}

/// Computes the 2D cross product of `u` and `v`.
pub fn cross<T: Number>(u: Vector2<T>, v: Vector2<T>) -> T {
    u.cross(v)
}

/// Returns `vec` scaled to unit length.
pub fn normalize<T: Float>(vec: Vector2<T>) -> Vector2<T> {
    vec.normalized()
}

/// Rotates `vec` counterclockwise by a quarter turn.
pub fn rotate90<T: Number>(vec: Vector2<T>) -> Vector2<T> {
    vec.rotated90()
}

/// Computes the outer product `u * vᵗ`.
///
/// # Examples
///
/// ```
/// # use frustum_linalg::*;
/// let m = outer_product(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert_eq!(m, Matrix2::from_columns(vec2(0.0, 0.0), vec2(1.0, 0.0)));
/// assert_eq!(m.determinant(), 0.0);
/// ```
pub fn outer_product<T: Number>(u: Vector2<T>, v: Vector2<T>) -> Matrix2<T> {
    u.outer_product(v)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, LinalgError};

    use super::*;

    #[test]
    fn access() {
        let mut v = vec2(0.0, 1.0);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 1.0);
        assert_eq!(v.get(1), Ok(1.0));
        assert_eq!(v.size(), 2);

        v[0] = 7.0;
        assert_eq!(v.x, 7.0);
        v.set(1, 9.0).unwrap();
        assert_eq!(v, vec2(7.0, 9.0));
        assert_eq!(v, [7.0, 9.0]);

        assert_eq!(
            v.get(2),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            v.set(5, 0.0),
            Err(LinalgError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(v, vec2(7.0, 9.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics() {
        let v = Vector2f::X;
        let _elem = v[2];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec2(1.0, -2.5)), "(1, -2.5)");
        assert_eq!(format!("{:?}", vec2(1.0, -2.5)), "(1.0, -2.5)");
        assert_eq!(format!("{:.2}", vec2(1.0, 0.5)), "(1.00, 0.50)");
    }

    #[test]
    fn conversions() {
        assert_eq!(Vector2::from([1.0, 2.0]), vec2(1.0, 2.0));
        assert_eq!(Vector2::from((1.0, 2.0)), vec2(1.0, 2.0));
        assert_eq!(<[f32; 2]>::from(vec2(3.0, 4.0)), [3.0, 4.0]);
        assert_eq!(bytemuck::cast::<_, [f32; 2]>(vec2(5.0f32, 6.0)), [5.0, 6.0]);
    }

    #[test]
    fn norm() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.norm_squared(), 25.0);
        assert_eq!(v.norm(), 5.0);
        assert_approx_eq!(v.normalized(), vec2(0.6, 0.8));
        assert_approx_eq!(normalize(vec2(0.0, -2.0)), -Vector2d::Y);
    }

    #[test]
    fn normalize_zero() {
        let n = Vector2f::ZERO.normalized();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn rotate() {
        let v = vec2(2.0, -3.0);
        assert_eq!(v.rotated90(), vec2(3.0, 2.0));
        assert_eq!(rotate90(rotate90(v)), -v);
        assert_eq!(v.rotated90().dot(v), 0.0);
    }

    #[test]
    fn products() {
        let u = vec2(1.0, 2.0);
        let v = vec2(-3.0, 0.5);
        assert_eq!(dot(u, v), -2.0);
        assert_eq!(inner(u, v), dot(v, u));
        assert_eq!(cross(u, v), 6.5);
        assert_eq!(cross(v, u), -6.5);
        assert_eq!(cross(u, u), 0.0);

        let m = outer_product(u, v);
        assert_eq!(m.first_column(), vec2(-3.0, -6.0));
        assert_eq!(m.second_column(), vec2(0.5, 1.0));
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn abs() {
        assert_eq!(vec2(-1.5, 2.0).abs(), vec2(1.5, 2.0));
    }
}
