use std::fmt;

use crate::OperandKind;

/// Errors reported by fallible operations of this crate.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LinalgError {
    /// An arithmetic operator was applied to a pair of operands it is not defined for.
    InvalidOperation {
        op: &'static str,
        lhs: OperandKind,
        rhs: OperandKind,
    },

    /// A matrix with a determinant of zero was asked for its inverse.
    SingularMatrix { determinant: f64 },

    /// A vector element, matrix column or matrix row index was not in `0..len`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation { op, lhs, rhs } => {
                write!(f, "invalid operation: {lhs} {op} {rhs} is not defined")
            }
            Self::SingularMatrix { determinant } => {
                write!(f, "matrix is singular (determinant {determinant}) and has no inverse")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for LinalgError {}

/// Result alias used by the fallible operations of this crate.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

/// Checks that `index` is a valid index into a dimension of size 2.
pub(crate) fn check_index(index: usize) -> Result<usize> {
    if index < 2 {
        Ok(index)
    } else {
        Err(LinalgError::IndexOutOfRange { index, len: 2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = LinalgError::InvalidOperation {
            op: "/",
            lhs: OperandKind::Vector,
            rhs: OperandKind::Matrix,
        };
        assert_eq!(
            err.to_string(),
            "invalid operation: vector / matrix is not defined"
        );

        let err = LinalgError::SingularMatrix { determinant: 0.0 };
        assert_eq!(
            err.to_string(),
            "matrix is singular (determinant 0) and has no inverse"
        );

        let err = LinalgError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(err.to_string(), "index 2 out of range for length 2");
    }

    #[test]
    fn index_check() {
        assert_eq!(check_index(0), Ok(0));
        assert_eq!(check_index(1), Ok(1));
        assert_eq!(
            check_index(7),
            Err(LinalgError::IndexOutOfRange { index: 7, len: 2 })
        );
    }
}
