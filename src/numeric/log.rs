//! Fixed-point logarithmic number system.
//!
//! A [`LogNumber`] stores a sign and `log2(|x|)` as a fixed-point integer with
//! `FRAC_BITS` fractional bits. Multiplication, division, squaring, square
//! root and inversion are exact integer operations on the logarithm; addition
//! and subtraction go through the Gaussian logarithm functions
//! `sb(d) = log2(1 + 2^-d)` and `db(d) = log2(1 - 2^-d)`, evaluated in double
//! precision. Transcendental functions round-trip through `f64`.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{clamp_unit, Numeric};

/// Logarithmic representation with 16 fractional bits.
pub type Log16 = LogNumber<16>;

/// Logarithmic representation with 23 fractional bits (single-precision-like).
pub type Log23 = LogNumber<23>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Zero,
    Finite,
    Infinite,
    NaN,
}

/// Sign/logarithm number with `FRAC_BITS` fractional bits of `log2(|x|)`.
#[derive(Debug, Clone, Copy)]
pub struct LogNumber<const FRAC_BITS: u32> {
    kind: Kind,
    negative: bool,
    log: i64,
}

impl<const FRAC_BITS: u32> LogNumber<FRAC_BITS> {
    const SCALE: f64 = (1u64 << FRAC_BITS) as f64;

    /// Zero.
    pub const ZERO: Self = Self::special(Kind::Zero, false);
    /// One.
    pub const ONE: Self = Self::finite(false, 0);
    /// Positive infinity.
    pub const INFINITY: Self = Self::special(Kind::Infinite, false);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self::special(Kind::Infinite, true);
    /// Not a number.
    pub const NAN: Self = Self::special(Kind::NaN, false);

    const fn special(kind: Kind, negative: bool) -> Self {
        Self { kind, negative, log: 0 }
    }

    /// Smallest log whose value overflows `f64`.
    const MAX_LOG: i64 = 1024 << FRAC_BITS;

    /// Logs below this round to zero in `f64`.
    const MIN_LOG: i64 = -1075 << FRAC_BITS;

    /// Finite value, or infinity/zero once `log` leaves the `f64` range.
    const fn finite(negative: bool, log: i64) -> Self {
        if log >= Self::MAX_LOG {
            Self::special(Kind::Infinite, negative)
        } else if log < Self::MIN_LOG {
            Self::ZERO
        } else {
            Self { kind: Kind::Finite, negative, log }
        }
    }

    /// Raw fixed-point `log2(|x|)`; meaningful only for finite non-zero values.
    pub fn raw_log(self) -> i64 {
        self.log
    }

    fn is_finite_nonzero(self) -> bool {
        self.kind == Kind::Finite
    }

    fn log_f64(self) -> f64 {
        self.log as f64 / Self::SCALE
    }

    fn through_f64(self, rhs: Self, op: impl FnOnce(f64, f64) -> f64) -> Self {
        Self::from_f64(op(self.to_f64(), rhs.to_f64()))
    }

    fn map_f64(self, op: impl FnOnce(f64) -> f64) -> Self {
        Self::from_f64(op(self.to_f64()))
    }

    /// Ordering key: category, then signed magnitude of the logarithm.
    fn ordinal(self) -> (i8, i64) {
        match (self.kind, self.negative) {
            (Kind::Infinite, true) => (-3, 0),
            (Kind::Finite, true) => (-2, self.log.saturating_neg()),
            (Kind::Zero, _) => (0, 0),
            (Kind::Finite, false) => (2, self.log),
            (Kind::Infinite, false) => (3, 0),
            (Kind::NaN, _) => (i8::MIN, 0),
        }
    }

    /// Sum of two finite non-zero values. The result takes the sign of the
    /// operand with the larger magnitude.
    fn gaussian_add(self, rhs: Self) -> Self {
        let (big, small) = if self.log >= rhs.log { (self, rhs) } else { (rhs, self) };
        let d = (i128::from(big.log) - i128::from(small.log)) as f64 / Self::SCALE;

        if big.negative == small.negative {
            let sb = (1.0 + (-d).exp2()).log2();
            let log = big.log.saturating_add((sb * Self::SCALE).round() as i64);
            return Self::finite(big.negative, log);
        }

        if big.log == small.log {
            return Self::ZERO;
        }
        let db = (1.0 - (-d).exp2()).log2();
        let log = big.log.saturating_add((db * Self::SCALE).round() as i64);
        Self::finite(big.negative, log)
    }
}

impl<const FRAC_BITS: u32> Numeric for LogNumber<FRAC_BITS> {
    fn name() -> String {
        format!("log<{}>", FRAC_BITS)
    }

    fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Self::NAN
        } else if value == 0.0 {
            Self::ZERO
        } else if value.is_infinite() {
            Self::special(Kind::Infinite, value < 0.0)
        } else {
            let log = (value.abs().log2() * Self::SCALE).round() as i64;
            Self::finite(value < 0.0, log)
        }
    }

    fn to_f64(self) -> f64 {
        let magnitude = match self.kind {
            Kind::Zero => 0.0,
            Kind::Finite => self.log_f64().exp2(),
            Kind::Infinite => f64::INFINITY,
            Kind::NaN => return f64::NAN,
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    fn square(self) -> Self {
        if !self.is_finite_nonzero() {
            return self.map_f64(|v| v * v);
        }
        Self::finite(false, self.log.saturating_mul(2))
    }

    fn sqrt(self) -> Self {
        if !self.is_finite_nonzero() {
            return self.map_f64(f64::sqrt);
        }
        if self.negative {
            return Self::NAN;
        }
        Self::finite(false, self.log >> 1)
    }

    fn ln(self) -> Self {
        if !self.is_finite_nonzero() || self.negative {
            return self.map_f64(f64::ln);
        }
        Self::from_f64(self.log_f64() * std::f64::consts::LN_2)
    }

    fn exp(self) -> Self {
        self.map_f64(f64::exp)
    }

    fn sin(self) -> Self {
        self.map_f64(f64::sin)
    }

    fn cos(self) -> Self {
        self.map_f64(f64::cos)
    }

    fn asin(self) -> Self {
        self.map_f64(|v| clamp_unit(v).asin())
    }

    fn acos(self) -> Self {
        self.map_f64(|v| clamp_unit(v).acos())
    }

    fn abs(self) -> Self {
        Self { negative: false, ..self }
    }

    fn log2(self) -> Self {
        if !self.is_finite_nonzero() || self.negative {
            return self.map_f64(f64::log2);
        }
        Self::from_f64(self.log_f64())
    }

    fn inverse(self) -> Self {
        if !self.is_finite_nonzero() {
            return self.map_f64(|v| 1.0 / v);
        }
        Self::finite(self.negative, self.log.saturating_neg())
    }

    fn is_zero(self) -> bool {
        self.kind == Kind::Zero
    }

    fn is_positive(self) -> bool {
        !self.negative && matches!(self.kind, Kind::Finite | Kind::Infinite)
    }

    fn is_negative(self) -> bool {
        self.negative && matches!(self.kind, Kind::Finite | Kind::Infinite)
    }

    fn is_positive_infinite(self) -> bool {
        self.kind == Kind::Infinite && !self.negative
    }

    fn is_negative_infinite(self) -> bool {
        self.kind == Kind::Infinite && self.negative
    }

    fn is_nan(self) -> bool {
        self.kind == Kind::NaN
    }
}

impl<const FRAC_BITS: u32> PartialEq for LogNumber<FRAC_BITS> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.ordinal() == other.ordinal()
    }
}

impl<const FRAC_BITS: u32> PartialOrd for LogNumber<FRAC_BITS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.ordinal().cmp(&other.ordinal()))
    }
}

impl<const FRAC_BITS: u32> Neg for LogNumber<FRAC_BITS> {
    type Output = Self;

    fn neg(self) -> Self {
        match self.kind {
            Kind::Finite | Kind::Infinite => Self { negative: !self.negative, ..self },
            Kind::Zero | Kind::NaN => self,
        }
    }
}

impl<const FRAC_BITS: u32> Add for LogNumber<FRAC_BITS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if rhs.is_zero() && !self.is_nan() {
            return self;
        }
        if self.is_zero() && !rhs.is_nan() {
            return rhs;
        }
        if !self.is_finite_nonzero() || !rhs.is_finite_nonzero() {
            return self.through_f64(rhs, |a, b| a + b);
        }
        self.gaussian_add(rhs)
    }
}

impl<const FRAC_BITS: u32> Sub for LogNumber<FRAC_BITS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const FRAC_BITS: u32> Mul for LogNumber<FRAC_BITS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if !self.is_finite_nonzero() || !rhs.is_finite_nonzero() {
            return self.through_f64(rhs, |a, b| a * b);
        }
        Self::finite(self.negative != rhs.negative, self.log.saturating_add(rhs.log))
    }
}

impl<const FRAC_BITS: u32> Div for LogNumber<FRAC_BITS> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if !self.is_finite_nonzero() || !rhs.is_finite_nonzero() {
            return self.through_f64(rhs, |a, b| a / b);
        }
        Self::finite(self.negative != rhs.negative, self.log.saturating_sub(rhs.log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-5 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_round_trip_finite() {
        for &v in &[1.0, -1.0, 1.5, 0.0003, -3.15, -1286.12, 1e30, -7.25e-20] {
            let back = Log23::from_f64(v).to_f64();
            assert!(close(back, v), "{} round-tripped to {}", v, back);
        }
    }

    #[test]
    fn test_overflow_becomes_infinite() {
        let mut x = Log23::from_f64(2.0);
        for _ in 0..70 {
            x = x.square();
        }
        assert!(x.is_positive_infinite());
        assert_eq!(x.to_f64(), f64::INFINITY);

        let sum = x + Log23::from_f64(0.5);
        assert!(sum.is_positive_infinite());

        let big = Log23::from_f64(1e300);
        assert!((big * big).is_infinite());
        assert!((-big * big).is_negative_infinite());
        assert!((big / Log23::from_f64(1e-300)).is_infinite());
    }

    #[test]
    fn test_underflow_becomes_zero() {
        let tiny = Log23::from_f64(1e-300);
        assert!(tiny.square().is_zero());
        assert_eq!(tiny.square().to_f64(), 0.0);
        assert!((-tiny * tiny).is_zero());
        assert!(tiny.inverse().inverse().is_finite_nonzero());
    }

    #[test]
    fn test_add_across_full_range() {
        let big = Log23::from_f64(1e300);
        let tiny = Log23::from_f64(1e-300);
        assert!(close((big + tiny).to_f64(), 1e300));
        assert!(close((tiny - big).to_f64(), -1e300));
        assert!((big - big).is_zero());
    }

    #[test]
    fn test_specials_round_trip() {
        assert_eq!(Log23::from_f64(0.0).to_f64(), 0.0);
        assert_eq!(Log23::from_f64(f64::INFINITY).to_f64(), f64::INFINITY);
        assert_eq!(Log23::from_f64(f64::NEG_INFINITY).to_f64(), f64::NEG_INFINITY);
        assert!(Log23::from_f64(f64::NAN).to_f64().is_nan());
    }

    #[test]
    fn test_multiplication_is_exact_in_log_domain() {
        let two = Log23::from_f64(2.0);
        let eight = Log23::from_f64(8.0);
        assert_eq!((two * two * two).raw_log(), eight.raw_log());
        assert_eq!((eight / two).to_f64(), 4.0);
        assert_eq!(two.inverse().to_f64(), 0.5);
        assert_eq!(eight.square().to_f64(), 64.0);
    }

    #[test]
    fn test_addition_and_cancellation() {
        let a = Log23::from_f64(1.5);
        let b = Log23::from_f64(-3.15);
        assert!(close((a + b).to_f64(), -1.65));
        assert!(close((a - b).to_f64(), 4.65));
        assert!((a - a).is_zero());
        assert!(close((a + a).to_f64(), 3.0));
    }

    #[test]
    fn test_ordering_and_nan() {
        let values: Vec<Log23> = [-f64::INFINITY, -5.0, -0.5, 0.0, 0.25, 3.0, f64::INFINITY]
            .iter()
            .map(|&v| Log23::from_f64(v))
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let nan = Log23::NAN;
        assert!(nan != nan);
        assert!(!(nan < Log23::ONE) && !(nan >= Log23::ONE));
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        assert!(Log23::from_f64(-4.0).sqrt().is_nan());
        assert_eq!(Log23::from_f64(16.0).sqrt().to_f64(), 4.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(Log16::name(), "log<16>");
    }
}
