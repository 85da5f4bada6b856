//! Numeric capability contract.
//!
//! Every representation compared by the harness implements [`Numeric`]. Workloads
//! are written once against this trait and monomorphized per representation, so
//! the timed code never goes through dynamic dispatch.
//!
//! Comparisons come from `PartialEq`/`PartialOrd`: they form a total order
//! except that NaN compares unequal to everything, itself included.

pub mod equivalence;
mod log;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use log::{Log16, Log23, LogNumber};

/// Operation surface a numeric representation must provide.
pub trait Numeric:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Human-readable representation name used in reports.
    fn name() -> String;

    /// Nearest representable value to `value`.
    fn from_f64(value: f64) -> Self;

    /// Value as a double-precision real.
    fn to_f64(self) -> f64;

    /// Truncates toward zero. NaN maps to 0 and infinities saturate.
    fn to_i64(self) -> i64 {
        self.to_f64() as i64
    }

    /// `self * self`.
    fn square(self) -> Self {
        self * self
    }

    /// Square root; NaN for negative values.
    fn sqrt(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Arcsine with the argument clamped to [-1, 1]. NaN stays NaN.
    fn asin(self) -> Self;

    /// Arccosine with the argument clamped to [-1, 1]. NaN stays NaN.
    fn acos(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Base-2 logarithm.
    fn log2(self) -> Self;

    /// Multiplicative inverse (`1 / self`).
    fn inverse(self) -> Self;

    /// Exactly zero.
    fn is_zero(self) -> bool;

    /// Strictly greater than zero (true for +inf, false for NaN).
    fn is_positive(self) -> bool;

    /// Strictly less than zero (true for -inf, false for NaN).
    fn is_negative(self) -> bool;

    /// Either infinity.
    fn is_infinite(self) -> bool {
        self.is_positive_infinite() || self.is_negative_infinite()
    }

    /// Positive infinity.
    fn is_positive_infinite(self) -> bool;

    /// Negative infinity.
    fn is_negative_infinite(self) -> bool;

    /// Not a number.
    fn is_nan(self) -> bool;
}

/// Clamp into the domain of `asin`/`acos` without swallowing NaN.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.clamp(-1.0, 1.0)
    }
}

macro_rules! impl_native_float {
    ($t:ty, $name:expr) => {
        impl Numeric for $t {
            fn name() -> String {
                $name.to_string()
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn ln(self) -> Self {
                <$t>::ln(self)
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn asin(self) -> Self {
                <$t>::asin(clamp_unit(self as f64) as $t)
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(clamp_unit(self as f64) as $t)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn log2(self) -> Self {
                <$t>::log2(self)
            }

            #[inline]
            fn inverse(self) -> Self {
                1.0 / self
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0.0
            }

            #[inline]
            fn is_positive(self) -> bool {
                self > 0.0
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            #[inline]
            fn is_positive_infinite(self) -> bool {
                self == <$t>::INFINITY
            }

            #[inline]
            fn is_negative_infinite(self) -> bool {
                self == <$t>::NEG_INFINITY
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    };
}

impl_native_float!(f64, "f64");
impl_native_float!(f32, "f32");

#[cfg(test)]
mod tests {
    use super::*;

    fn predicates<R: Numeric>(value: f64) -> [bool; 7] {
        let v = R::from_f64(value);
        [
            v.is_zero(),
            v.is_positive(),
            v.is_negative(),
            v.is_infinite(),
            v.is_positive_infinite(),
            v.is_negative_infinite(),
            v.is_nan(),
        ]
    }

    #[test]
    fn test_native_predicates() {
        assert_eq!(predicates::<f64>(0.0), [true, false, false, false, false, false, false]);
        assert_eq!(predicates::<f64>(-2.0), [false, false, true, false, false, false, false]);
        assert_eq!(
            predicates::<f32>(f64::INFINITY),
            [false, true, false, true, true, false, false]
        );
        assert_eq!(
            predicates::<f32>(f64::NEG_INFINITY),
            [false, false, true, true, false, true, false]
        );
        assert_eq!(predicates::<f64>(f64::NAN), [false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_asin_acos_clamp() {
        assert!((Numeric::asin(1.000_000_1_f64) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((Numeric::acos(-1.5_f32) - std::f32::consts::PI).abs() < 1e-6);
        assert!(Numeric::asin(f64::NAN).is_nan());
    }

    #[test]
    fn test_truncation() {
        assert_eq!(Numeric::to_i64(-3.9_f64), -3);
        assert_eq!(Numeric::to_i64(2.99_f32), 2);
        assert_eq!(Numeric::to_i64(f64::NAN), 0);
        assert_eq!(Numeric::to_i64(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_names() {
        assert_eq!(<f64 as Numeric>::name(), "f64");
        assert_eq!(<f32 as Numeric>::name(), "f32");
    }
}
