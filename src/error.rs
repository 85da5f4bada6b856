//! Error conditions surfaced by the harness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Side, Variant};

/// The two result vectors cannot be compared element by element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    /// The two runs produced different result variants.
    #[error("result vectors differ in kind: reference is {reference}, candidate is {candidate}")]
    Variant {
        /// Variant produced by the reference run.
        reference: Variant,
        /// Variant produced by the candidate run.
        candidate: Variant,
    },

    /// The two runs produced vectors of different lengths.
    #[error("result vectors differ in length: reference has {reference} elements, candidate has {candidate}")]
    Length {
        /// Element count of the reference vector.
        reference: usize,
        /// Element count of the candidate vector.
        candidate: usize,
    },

    /// A triplet vector whose length does not split into triples.
    #[error("triplet vector length {len} is not a multiple of 3")]
    TripletLength {
        /// Offending element count.
        len: usize,
    },
}

/// A metric whose denominator would be zero.
///
/// Appears in place of the affected value inside an otherwise complete report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    /// Sensitivity with no positive samples in the reference.
    #[error("reference contains no positive samples")]
    EmptyPositiveClass,

    /// Specificity with no negative samples in the reference.
    #[error("reference contains no negative samples")]
    EmptyNegativeClass,

    /// A mean or accuracy over zero elements.
    #[error("result vectors are empty")]
    EmptyResult,

    /// A speed ratio whose denominator timing is zero.
    #[error("{side} run took zero time at the configured resolution")]
    ZeroElapsed {
        /// Side whose timing was zero.
        side: Side,
    },
}

/// Failure of a comparison.
///
/// `E` is the workload's own error type, carried through unchanged.
#[derive(Debug, Error)]
pub enum CompareError<E: std::error::Error + 'static> {
    /// The result vectors cannot be compared.
    #[error(transparent)]
    Shape(#[from] ShapeMismatch),

    /// A workload returned an error. The comparison stops at the failing side.
    #[error("{side} workload failed")]
    Workload {
        /// Side whose workload failed.
        side: Side,
        /// The workload's error.
        #[source]
        source: E,
    },
}

impl<E: std::error::Error + 'static> CompareError<E> {
    /// The workload error, if the comparison failed inside a workload.
    pub fn workload_error(&self) -> Option<&E> {
        match self {
            Self::Workload { source, .. } => Some(source),
            Self::Shape(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        let err = ShapeMismatch::Length {
            reference: 4,
            candidate: 5,
        };
        assert!(err.to_string().contains("4 elements, candidate has 5"));

        let degenerate = DegenerateInput::ZeroElapsed { side: Side::Reference };
        assert_eq!(
            degenerate.to_string(),
            "reference run took zero time at the configured resolution"
        );
    }

    #[test]
    fn test_workload_source_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing input");
        let err: CompareError<std::io::Error> = CompareError::Workload {
            side: Side::Candidate,
            source: io,
        };
        assert_eq!(err.to_string(), "candidate workload failed");
        assert_eq!(err.source().map(|s| s.to_string()), Some("missing input".to_string()));
        assert_eq!(
            err.workload_error().map(|e| e.kind()),
            Some(std::io::ErrorKind::NotFound)
        );
    }
}
