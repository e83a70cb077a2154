//! Arithmetic on operands whose kind is only known at runtime.
//!
//! The statically typed operators on [`Vector2`] and [`Matrix2`] cover every valid combination at
//! compile time. [`Operand`] serves code that carries values of mixed kinds (eg. parsed
//! expressions or scripted transforms) and needs to dispatch `*` and `/` on the operand pair,
//! reporting [`LinalgError::InvalidOperation`] for pairs that have no meaning.

use std::fmt;

use crate::{
    error::{LinalgError, Result},
    traits::Number,
    Matrix2, Vector2,
};

/// The kind of an [`Operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Scalar,
    Vector,
    Matrix,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
        })
    }
}

/// A scalar, vector or matrix value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T = f32> {
    Scalar(T),
    Vector(Vector2<T>),
    Matrix(Matrix2<T>),
}

impl<T> Operand<T> {
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Scalar(_) => OperandKind::Scalar,
            Self::Vector(_) => OperandKind::Vector,
            Self::Matrix(_) => OperandKind::Matrix,
        }
    }
}

impl<T: Number + fmt::Debug> Operand<T> {
    /// Multiplies `self` with `rhs`, following GLSL semantics.
    ///
    /// Every pair of operand kinds has a defined product:
    ///
    /// | `self`   | `rhs`    | result                                       |
    /// |----------|----------|----------------------------------------------|
    /// | scalar   | any      | `rhs` scaled by `self`                       |
    /// | vector   | scalar   | scaled vector                                |
    /// | vector   | vector   | element-wise product                         |
    /// | vector   | matrix   | row vector times matrix ([`Matrix2::right_multiply`]) |
    /// | matrix   | scalar   | scaled matrix                                |
    /// | matrix   | vector   | matrix times column vector                   |
    /// | matrix   | matrix   | matrix product                               |
    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        use Operand::*;

        Ok(match (self, rhs) {
            (Scalar(a), Scalar(b)) => Scalar(a * b),
            (Scalar(s), Vector(v)) | (Vector(v), Scalar(s)) => Vector(v.scale(s)),
            (Scalar(s), Matrix(m)) | (Matrix(m), Scalar(s)) => Matrix(m.scale(s)),
            (Vector(a), Vector(b)) => Vector(a.mul_elementwise(b)),
            (Vector(v), Matrix(m)) => Vector(m.right_multiply(v)),
            (Matrix(m), Vector(v)) => Vector(m.mul_vector(v)),
            (Matrix(a), Matrix(b)) => Matrix(a.mul_matrix(&b)),
        })
    }

    /// Divides `self` by `rhs`.
    ///
    /// Division is defined for a scalar, vector or matrix dividend with a scalar divisor, and for
    /// a vector or matrix dividend with a vector divisor (dividing element-wise, or each column
    /// element-wise).
    ///
    /// # Errors
    ///
    /// Dividing by a matrix, or dividing a scalar by a vector, returns
    /// [`LinalgError::InvalidOperation`].
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        use Operand::*;

        match (self, rhs) {
            (Scalar(a), Scalar(b)) => Ok(Scalar(a / b)),
            (Vector(v), Scalar(s)) => Ok(Vector(v / s)),
            (Vector(a), Vector(b)) => Ok(Vector(a / b)),
            (Matrix(m), Scalar(s)) => Ok(Matrix(m / s)),
            (Matrix(m), Vector(v)) => Ok(Matrix(m / v)),
            (lhs, rhs) => {
                log::debug!("rejecting division {:?} / {:?}", lhs, rhs);
                Err(LinalgError::InvalidOperation {
                    op: "/",
                    lhs: lhs.kind(),
                    rhs: rhs.kind(),
                })
            }
        }
    }
}

impl<T> From<Vector2<T>> for Operand<T> {
    fn from(value: Vector2<T>) -> Self {
        Self::Vector(value)
    }
}

impl<T> From<Matrix2<T>> for Operand<T> {
    fn from(value: Matrix2<T>) -> Self {
        Self::Matrix(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{mat2, test::init_logger, vec2, Matrix2};

    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Operand::Scalar(1.0).kind(), OperandKind::Scalar);
        assert_eq!(Operand::from(vec2(1.0, 2.0)).kind(), OperandKind::Vector);
        assert_eq!(Operand::from(Matrix2::<f32>::IDENTITY).kind(), OperandKind::Matrix);
        assert_eq!(OperandKind::Matrix.to_string(), "matrix");
    }

    #[test]
    fn mul_dispatch() {
        let v = vec2(1.0, -2.0);
        let m = mat2(1.0, 2.0, 3.0, 4.0);

        assert_eq!(
            Operand::Scalar(2.0).try_mul(Operand::Scalar(3.0)),
            Ok(Operand::Scalar(6.0))
        );
        assert_eq!(
            Operand::Scalar(2.0).try_mul(v.into()),
            Ok(Operand::Vector(v * 2.0))
        );
        assert_eq!(
            Operand::from(v).try_mul(Operand::Scalar(2.0)),
            Ok(Operand::Vector(v * 2.0))
        );
        assert_eq!(Operand::from(v).try_mul(v.into()), Ok(Operand::Vector(v * v)));
        assert_eq!(Operand::from(v).try_mul(m.into()), Ok(Operand::Vector(v * m)));
        assert_eq!(Operand::from(m).try_mul(v.into()), Ok(Operand::Vector(m * v)));
        assert_eq!(Operand::from(m).try_mul(m.into()), Ok(Operand::Matrix(m * m)));
        assert_eq!(
            Operand::Scalar(0.5).try_mul(m.into()),
            Ok(Operand::Matrix(m * 0.5))
        );
    }

    #[test]
    fn div_dispatch() {
        let v = vec2(4.0, -2.0);
        let m = mat2(2.0, 4.0, 6.0, 8.0);

        assert_eq!(
            Operand::from(v).try_div(Operand::Scalar(2.0)),
            Ok(Operand::Vector(vec2(2.0, -1.0)))
        );
        assert_eq!(
            Operand::from(v).try_div(vec2(2.0, 2.0).into()),
            Ok(Operand::Vector(vec2(2.0, -1.0)))
        );
        assert_eq!(
            Operand::from(m).try_div(Operand::Scalar(2.0)),
            Ok(Operand::Matrix(mat2(1.0, 2.0, 3.0, 4.0)))
        );
        assert_eq!(
            Operand::from(m).try_div(vec2(1.0, 2.0).into()),
            Ok(Operand::Matrix(mat2(2.0, 2.0, 6.0, 4.0)))
        );
    }

    #[test]
    fn invalid_division() {
        init_logger();

        let v = vec2(1.0, 1.0);
        let m = Matrix2::<f64>::IDENTITY;
        assert_eq!(
            Operand::from(v).try_div(m.into()),
            Err(LinalgError::InvalidOperation {
                op: "/",
                lhs: OperandKind::Vector,
                rhs: OperandKind::Matrix,
            })
        );
        assert_eq!(
            Operand::from(m).try_div(m.into()),
            Err(LinalgError::InvalidOperation {
                op: "/",
                lhs: OperandKind::Matrix,
                rhs: OperandKind::Matrix,
            })
        );
        assert_eq!(
            Operand::Scalar(1.0).try_div(v.into()),
            Err(LinalgError::InvalidOperation {
                op: "/",
                lhs: OperandKind::Scalar,
                rhs: OperandKind::Vector,
            })
        );
    }
}
