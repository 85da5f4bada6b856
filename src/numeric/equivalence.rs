//! Equivalence suite for new representations.
//!
//! Before a representation is trusted as a comparison candidate it should
//! agree with a trusted reference on a fixed set of values covering zero,
//! small and large magnitudes of both signs, both infinities and NaN.
//! [`check`] runs every unary operation on each value and every binary
//! operation and comparison on each ordered pair, and collects the
//! disagreements instead of panicking.

use serde::{Deserialize, Serialize};

use super::Numeric;

/// Values every representation is checked on.
pub const PROBE_VALUES: [f64; 8] = [
    0.0,
    1.5,
    0.0003,
    -3.15,
    -1286.12,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
];

/// Absolute tolerance for approximate equality.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-5;

/// Relative tolerance for approximate equality.
pub const RELATIVE_TOLERANCE: f64 = 1e-4;

/// Approximate equality between a reference value and a candidate value.
///
/// NaN matches only NaN, an infinity matches only the same infinity, and
/// finite values match within [`ABSOLUTE_TOLERANCE`] or, when the reference
/// is non-zero, within [`RELATIVE_TOLERANCE`] of it.
pub fn approx_equal(reference: f64, candidate: f64) -> bool {
    if reference.is_nan() || candidate.is_nan() {
        return reference.is_nan() && candidate.is_nan();
    }
    if reference.is_infinite() || candidate.is_infinite() {
        return reference == candidate;
    }
    (reference - candidate).abs() < ABSOLUTE_TOLERANCE
        || (reference != 0.0 && (1.0 - candidate / reference).abs() < RELATIVE_TOLERANCE)
}

/// What an individual check observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Observed {
    /// A real result.
    Value(f64),
    /// A truncated integer.
    Integer(i64),
    /// A predicate or comparison outcome.
    Flag(bool),
}

/// A single disagreement between candidate and reference.
#[derive(Debug, Clone, Serialize)]
pub struct EquivalenceFailure {
    /// Operation under test, e.g. `"mul"` or `"is_positive"`.
    pub operation: &'static str,
    /// Operand values as given to both representations.
    pub operands: Vec<f64>,
    /// What the reference produced.
    pub expected: Observed,
    /// What the candidate produced.
    pub actual: Observed,
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Serialize)]
pub struct EquivalenceReport {
    /// Reference representation name.
    pub reference: String,
    /// Candidate representation name.
    pub candidate: String,
    /// Number of individual checks performed.
    pub checks: usize,
    /// Every disagreeing check, in order.
    pub failures: Vec<EquivalenceFailure>,
}

impl EquivalenceReport {
    /// True if every check agreed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Recorder {
    checks: usize,
    failures: Vec<EquivalenceFailure>,
}

impl Recorder {
    fn value(&mut self, operation: &'static str, operands: &[f64], expected: f64, actual: f64) {
        self.checks += 1;
        if !approx_equal(expected, actual) {
            self.fail(operation, operands, Observed::Value(expected), Observed::Value(actual));
        }
    }

    fn integer(&mut self, operation: &'static str, operands: &[f64], expected: i64, actual: i64) {
        self.checks += 1;
        if expected != actual {
            self.fail(operation, operands, Observed::Integer(expected), Observed::Integer(actual));
        }
    }

    fn flag(&mut self, operation: &'static str, operands: &[f64], expected: bool, actual: bool) {
        self.checks += 1;
        if expected != actual {
            self.fail(operation, operands, Observed::Flag(expected), Observed::Flag(actual));
        }
    }

    fn fail(&mut self, operation: &'static str, operands: &[f64], expected: Observed, actual: Observed) {
        self.failures.push(EquivalenceFailure {
            operation,
            operands: operands.to_vec(),
            expected,
            actual,
        });
    }
}

/// Check `Cand` against the trusted `Ref` on [`PROBE_VALUES`].
pub fn check<Ref: Numeric, Cand: Numeric>() -> EquivalenceReport {
    check_values::<Ref, Cand>(&PROBE_VALUES)
}

/// Check `Cand` against `Ref` on caller-supplied values.
pub fn check_values<Ref: Numeric, Cand: Numeric>(values: &[f64]) -> EquivalenceReport {
    let mut rec = Recorder {
        checks: 0,
        failures: Vec::new(),
    };

    for &x in values {
        let r = Ref::from_f64(x);
        let c = Cand::from_f64(x);
        let ops = [x];

        rec.value("from_f64", &ops, r.to_f64(), c.to_f64());
        rec.integer("to_i64", &ops, r.to_i64(), c.to_i64());
        rec.value("neg", &ops, (-r).to_f64(), (-c).to_f64());
        rec.value("square", &ops, r.square().to_f64(), c.square().to_f64());
        rec.value("sqrt", &ops, r.sqrt().to_f64(), c.sqrt().to_f64());
        rec.value("inverse", &ops, r.inverse().to_f64(), c.inverse().to_f64());
        rec.value("log2", &ops, r.log2().to_f64(), c.log2().to_f64());
        rec.value("abs", &ops, r.abs().to_f64(), c.abs().to_f64());

        rec.flag("is_zero", &ops, r.is_zero(), c.is_zero());
        rec.flag("is_positive", &ops, r.is_positive(), c.is_positive());
        rec.flag("is_negative", &ops, r.is_negative(), c.is_negative());
        rec.flag("is_infinite", &ops, r.is_infinite(), c.is_infinite());
        rec.flag(
            "is_positive_infinite",
            &ops,
            r.is_positive_infinite(),
            c.is_positive_infinite(),
        );
        rec.flag(
            "is_negative_infinite",
            &ops,
            r.is_negative_infinite(),
            c.is_negative_infinite(),
        );
        rec.flag("is_nan", &ops, r.is_nan(), c.is_nan());

        for &y in values {
            let (ry, cy) = (Ref::from_f64(y), Cand::from_f64(y));
            let ops = [x, y];

            rec.value("mul", &ops, (r * ry).to_f64(), (c * cy).to_f64());
            rec.value("div", &ops, (r / ry).to_f64(), (c / cy).to_f64());
            rec.value("add", &ops, (r + ry).to_f64(), (c + cy).to_f64());
            rec.value("sub", &ops, (r - ry).to_f64(), (c - cy).to_f64());

            rec.flag("eq", &ops, r == ry, c == cy);
            rec.flag("ne", &ops, r != ry, c != cy);
            rec.flag("lt", &ops, r < ry, c < cy);
            rec.flag("gt", &ops, r > ry, c > cy);
            rec.flag("le", &ops, r <= ry, c <= cy);
            rec.flag("ge", &ops, r >= ry, c >= cy);
        }
    }

    EquivalenceReport {
        reference: Ref::name(),
        candidate: Cand::name(),
        checks: rec.checks,
        failures: rec.failures,
    }
}
