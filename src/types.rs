//! Result vectors, sides and timings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TimeResolution;
use crate::numeric::Numeric;

/// Output of one workload run under one representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultVector {
    /// Real-valued samples.
    Continuous(Vec<f64>),
    /// Binary classification outcomes.
    Classification(Vec<bool>),
    /// Multi-channel integer samples, three consecutive values per sample.
    Triplet(Vec<i32>),
}

impl ResultVector {
    /// Continuous vector from values of any representation.
    pub fn continuous_from<R: Numeric>(values: &[R]) -> Self {
        Self::Continuous(values.iter().map(|v| v.to_f64()).collect())
    }

    /// Which of the three shapes this is.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Continuous(_) => Variant::Continuous,
            Self::Classification(_) => Variant::Classification,
            Self::Triplet(_) => Variant::Triplet,
        }
    }

    /// Number of elements (not triples).
    pub fn len(&self) -> usize {
        match self {
            Self::Continuous(v) => v.len(),
            Self::Classification(v) => v.len(),
            Self::Triplet(v) => v.len(),
        }
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for ResultVector {
    fn from(values: Vec<f64>) -> Self {
        Self::Continuous(values)
    }
}

impl From<Vec<f32>> for ResultVector {
    fn from(values: Vec<f32>) -> Self {
        Self::Continuous(values.into_iter().map(f64::from).collect())
    }
}

impl From<Vec<bool>> for ResultVector {
    fn from(values: Vec<bool>) -> Self {
        Self::Classification(values)
    }
}

impl From<Vec<i32>> for ResultVector {
    fn from(values: Vec<i32>) -> Self {
        Self::Triplet(values)
    }
}

/// Shape of a [`ResultVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Real-valued samples.
    Continuous,
    /// Binary outcomes.
    Classification,
    /// Three-channel integer samples.
    Triplet,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Continuous => "continuous",
            Self::Classification => "classification",
            Self::Triplet => "triplet",
        };
        f.write_str(name)
    }
}

/// Which half of a comparison something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Trusted representation; its results are ground truth.
    Reference,
    /// Representation under evaluation.
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// Elapsed time of one (workload, representation) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Whole units of `unit` elapsed.
    pub ticks: u64,
    /// Resolution the run was recorded at.
    pub unit: TimeResolution,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ticks, self.unit.suffix())
    }
}
