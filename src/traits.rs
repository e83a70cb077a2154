//! Scalar traits.
//!
//! Vectors, matrices and boxes are generic over their element type, but only the floating-point
//! primitives [`f32`] and [`f64`] implement [`Float`].

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed to build rotations.
pub trait Trig: Sized + Copy {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
pub trait Float: Number + Sqrt + Trig + PartialOrd + fmt::Debug + fmt::Display {
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn abs(self) -> Self;

    /// Widens `self` to [`f64`], for diagnostics.
    fn to_f64(self) -> f64;
}

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    $ty::sqrt(self)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    $ty::sin(self)
                }

                fn cos(self) -> Self {
                    $ty::cos(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    $ty::sin_cos(self)
                }
            }

            impl Float for $ty {
                const INFINITY: Self = $ty::INFINITY;
                const NEG_INFINITY: Self = $ty::NEG_INFINITY;

                fn abs(self) -> Self {
                    $ty::abs(self)
                }

                #[allow(clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn half<T: Float>() -> T {
        T::ONE / (T::ONE + T::ONE)
    }

    #[test]
    fn constants() {
        assert_eq!(half::<f32>(), 0.5);
        assert_eq!(half::<f64>(), 0.5);
        assert!(<f32 as Float>::INFINITY > f32::MAX);
        assert!(<f64 as Float>::NEG_INFINITY < f64::MIN);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Turns(f64);

    impl Trig for Turns {
        fn sin(self) -> Self {
            Turns((self.0 * std::f64::consts::TAU).sin())
        }

        fn cos(self) -> Self {
            Turns((self.0 * std::f64::consts::TAU).cos())
        }
    }

    #[test]
    fn provided_sin_cos() {
        let (sin, cos) = Turns(0.0).sin_cos();
        assert_eq!(sin, Turns(0.0));
        assert_eq!(cos, Turns(1.0));
        assert_eq!(0.5f32.sin_cos(), (0.5f32.sin(), 0.5f32.cos()));
    }

    #[test]
    fn widening() {
        assert_eq!(Float::to_f64(0.25f32), 0.25);
        assert_eq!(Float::abs(-2.0f64), 2.0);
    }
}
