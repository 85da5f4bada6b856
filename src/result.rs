//! Divergence report types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DegenerateInput;
use crate::types::{Timing, Variant};

/// Value of a metric whose denominator may be zero.
pub type Derived = Result<f64, DegenerateInput>;

/// Complete result of one comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergenceReport {
    /// Workload name, when known.
    pub workload: Option<String>,

    /// Name of the reference representation.
    pub reference: String,

    /// Name of the candidate representation.
    pub candidate: String,

    /// Relative speed of the candidate.
    pub speed: SpeedComparison,

    /// Accuracy metrics for the result vector variant.
    pub metrics: Metrics,
}

impl DivergenceReport {
    /// Every degenerate condition present in the report.
    pub fn degenerate_conditions(&self) -> Vec<DegenerateInput> {
        let mut conditions = Vec::new();
        if let Err(d) = self.speed.relative {
            conditions.push(d);
        }
        let derived: Vec<&Derived> = match &self.metrics {
            Metrics::Continuous(m) => vec![&m.mean_relative, &m.mean_absolute],
            Metrics::Classification(m) => vec![&m.sensitivity, &m.specificity, &m.accuracy],
            Metrics::Triplet(m) => vec![&m.mean_distance, &m.rms_distance],
        };
        for value in derived {
            if let Err(d) = value {
                if !conditions.contains(d) {
                    conditions.push(*d);
                }
            }
        }
        conditions
    }
}

/// Timings of both runs and the candidate's relative speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedComparison {
    /// Elapsed time of the reference run.
    pub reference: Timing,
    /// Elapsed time of the candidate run.
    pub candidate: Timing,
    /// Candidate speed relative to the reference.
    pub relative: Result<RelativeSpeed, DegenerateInput>,
}

/// Candidate speed relative to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeSpeed {
    /// Candidate took this many times as long as the reference.
    Slower(f64),
    /// Reference took this many times as long as the candidate (at least 1).
    Faster(f64),
}

impl RelativeSpeed {
    /// The ratio, always at least 1.
    pub fn factor(self) -> f64 {
        match self {
            Self::Slower(f) | Self::Faster(f) => f,
        }
    }
}

impl fmt::Display for RelativeSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slower(factor) => write!(f, "{} times slower", factor),
            Self::Faster(factor) => write!(f, "{} times faster", factor),
        }
    }
}

/// Variant-specific accuracy metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Metrics {
    /// Relative and absolute error.
    Continuous(ContinuousMetrics),
    /// Confusion counts and derived rates.
    Classification(ClassificationMetrics),
    /// Per-triple Euclidean distance.
    Triplet(TripletMetrics),
}

impl Metrics {
    /// Result vector variant these metrics belong to.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Continuous(_) => Variant::Continuous,
            Self::Classification(_) => Variant::Classification,
            Self::Triplet(_) => Variant::Triplet,
        }
    }

    /// Continuous metrics, if that is the variant.
    pub fn as_continuous(&self) -> Option<&ContinuousMetrics> {
        match self {
            Self::Continuous(m) => Some(m),
            _ => None,
        }
    }

    /// Classification metrics, if that is the variant.
    pub fn as_classification(&self) -> Option<&ClassificationMetrics> {
        match self {
            Self::Classification(m) => Some(m),
            _ => None,
        }
    }

    /// Triplet metrics, if that is the variant.
    pub fn as_triplet(&self) -> Option<&TripletMetrics> {
        match self {
            Self::Triplet(m) => Some(m),
            _ => None,
        }
    }
}

/// Largest per-element error and the pair of values that produced it.
///
/// Starts at zero with values (0, 0) and no index; only a strictly larger
/// error replaces it, so ties keep the earliest element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// The error.
    #[serde(with = "float_repr")]
    pub value: f64,
    /// Position of the element, `None` if no error exceeded zero.
    pub index: Option<usize>,
    /// Reference value at `index`.
    #[serde(with = "float_repr")]
    pub reference: f64,
    /// Candidate value at `index`.
    #[serde(with = "float_repr")]
    pub candidate: f64,
}

impl Extremum {
    /// Starting point of every scan.
    pub const ZERO: Self = Self {
        value: 0.0,
        index: None,
        reference: 0.0,
        candidate: 0.0,
    };

    #[inline]
    pub(crate) fn offer(&mut self, value: f64, index: usize, reference: f64, candidate: f64) {
        if value > self.value {
            *self = Self {
                value,
                index: Some(index),
                reference,
                candidate,
            };
        }
    }
}

/// Metrics for real-valued results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousMetrics {
    /// Number of compared elements.
    pub len: usize,
    /// Maximum relative error (fraction, not percent).
    pub max_relative: Extremum,
    /// Mean relative error (fraction, not percent).
    #[serde(with = "float_repr::derived")]
    pub mean_relative: Derived,
    /// Maximum absolute difference.
    pub max_absolute: Extremum,
    /// Mean absolute difference.
    #[serde(with = "float_repr::derived")]
    pub mean_absolute: Derived,
}

/// Confusion matrix of the candidate against the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Positive in both.
    pub true_positive: usize,
    /// Negative in the reference, positive in the candidate.
    pub false_positive: usize,
    /// Negative in both.
    pub true_negative: usize,
    /// Positive in the reference, negative in the candidate.
    pub false_negative: usize,
}

impl ConfusionCounts {
    /// Positive samples in the reference.
    pub fn positives(&self) -> usize {
        self.true_positive + self.false_negative
    }

    /// Negative samples in the reference.
    pub fn negatives(&self) -> usize {
        self.true_negative + self.false_positive
    }

    /// All samples.
    pub fn total(&self) -> usize {
        self.positives() + self.negatives()
    }
}

/// Metrics for binary classification results, as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Raw counts.
    pub counts: ConfusionCounts,
    /// `TP / (TP + FN)`.
    #[serde(with = "float_repr::derived")]
    pub sensitivity: Derived,
    /// `TN / (TN + FP)`.
    #[serde(with = "float_repr::derived")]
    pub specificity: Derived,
    /// `(TP + TN) / total`.
    #[serde(with = "float_repr::derived")]
    pub accuracy: Derived,
}

/// Metrics for three-channel integer results.
///
/// Means are normalized by the number of elements, not the number of triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripletMetrics {
    /// Number of compared triples.
    pub triples: usize,
    /// Largest Euclidean distance between aligned triples.
    pub max_distance: f64,
    /// Sum of triple distances divided by element count.
    #[serde(with = "float_repr::derived")]
    pub mean_distance: Derived,
    /// Square root of summed squared distances divided by element count.
    #[serde(with = "float_repr::derived")]
    pub rms_distance: Derived,
}

/// Serde encoding of `f64` that keeps non-finite values.
///
/// JSON has no NaN or infinity, so these are written as the strings `"NaN"`,
/// `"inf"` and `"-inf"`. Finite values stay plain numbers.
mod float_repr {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("invalid float `{}`", other))),
            },
        }
    }

    /// Same encoding for the value inside a [`Derived`](super::Derived).
    pub mod derived {
        use serde::de::Deserializer;
        use serde::ser::Serializer;
        use serde::{Deserialize, Serialize};

        use crate::error::DegenerateInput;

        #[derive(Serialize, Deserialize)]
        enum DerivedRepr {
            Ok(#[serde(with = "super")] f64),
            Err(DegenerateInput),
        }

        pub fn serialize<S: Serializer>(
            value: &Result<f64, DegenerateInput>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match *value {
                Ok(v) => DerivedRepr::Ok(v),
                Err(condition) => DerivedRepr::Err(condition),
            }
            .serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Result<f64, DegenerateInput>, D::Error> {
            Ok(match DerivedRepr::deserialize(deserializer)? {
                DerivedRepr::Ok(v) => Ok(v),
                DerivedRepr::Err(condition) => Err(condition),
            })
        }
    }
}
