//! Small 2D linear algebra primitives for frustum and clipping computations.
//!
//! # Overview
//!
//! - [`Vector2`]: a 2-element column vector.
//! - [`Matrix2`]: a column-major 2x2 matrix.
//! - [`Tensor2`]: an ordered pair of matrices, added and subtracted component-wise.
//! - [`BoundingBox`]: an axis-aligned box with a strict containment test.
//! - [`Operand`]: a scalar, vector or matrix whose kind is only known at runtime.
//!
//! All types are generic over their element type, which defaults to [`f32`]. Arithmetic follows
//! GLSL conventions: matrices are stored and indexed column by column, and `mat * vec` and
//! `vec * mat` are both defined but mean different things (see [`Matrix2`]).
//!
//! # Goals & Non-Goals
//!
//! - Only 2-dimensional types. Higher dimensions and dynamically-sized objects are out of scope.
//! - Every type is a plain [`Copy`] value. Nothing shares storage, and operations that modify a
//!   value modify only that value.
//! - Operations that can fail on valid input (inverting a singular matrix, checked element access)
//!   return a [`LinalgError`] instead of panicking. Indexing with `[]` panics on out-of-range
//!   indices, like it does for slices.

pub mod approx;
mod bbox;
mod error;
mod matrix;
mod operand;
mod tensor;
mod traits;
mod vector;


pub use bbox::*;
pub use error::*;
pub use matrix::*;
pub use operand::*;
pub use tensor::*;
pub use traits::*;
pub use vector::*;
