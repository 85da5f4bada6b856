//! Error analysis between reference and candidate result vectors.
//!
//! The metric family is selected by the [`ResultVector`] variant:
//!
//! 1. **Continuous** ([`continuous`]): relative and absolute error per element
//! 2. **Classification** ([`classification`]): confusion counts against the reference
//! 3. **Triplet** ([`triplet`]): Euclidean distance per aligned triple
//!
//! Shapes are checked first; a mismatch yields no metrics at all.

mod classification;
mod continuous;
mod triplet;

pub use classification::{classification_metrics, confusion_counts};
pub use continuous::{absolute_difference, continuous_metrics, relative_error};
pub use triplet::{triple_distance, triple_distance_squared, triplet_metrics};

use crate::config::Config;
use crate::error::ShapeMismatch;
use crate::result::Metrics;
use crate::types::ResultVector;

/// Verify that two result vectors can be compared element by element.
pub fn check_shape(reference: &ResultVector, candidate: &ResultVector) -> Result<(), ShapeMismatch> {
    if reference.variant() != candidate.variant() {
        return Err(ShapeMismatch::Variant {
            reference: reference.variant(),
            candidate: candidate.variant(),
        });
    }
    if reference.len() != candidate.len() {
        return Err(ShapeMismatch::Length {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }
    if matches!(reference, ResultVector::Triplet(_)) && reference.len() % 3 != 0 {
        return Err(ShapeMismatch::TripletLength { len: reference.len() });
    }
    Ok(())
}

/// Compute the metrics matching the variant of both vectors.
pub fn analyze(
    reference: &ResultVector,
    candidate: &ResultVector,
    config: &Config,
) -> Result<Metrics, ShapeMismatch> {
    check_shape(reference, candidate)?;

    let parallel = config.parallel_metrics;
    let metrics = match (reference, candidate) {
        (ResultVector::Continuous(r), ResultVector::Continuous(c)) => {
            Metrics::Continuous(continuous_metrics(r, c, parallel))
        }
        (ResultVector::Classification(r), ResultVector::Classification(c)) => {
            Metrics::Classification(classification_metrics(r, c))
        }
        (ResultVector::Triplet(r), ResultVector::Triplet(c)) => {
            Metrics::Triplet(triplet_metrics(r, c, parallel))
        }
        _ => {
            return Err(ShapeMismatch::Variant {
                reference: reference.variant(),
                candidate: candidate.variant(),
            })
        }
    };
    Ok(metrics)
}
