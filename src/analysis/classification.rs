//! Confusion-matrix metrics for binary classification results.

use crate::error::DegenerateInput;
use crate::result::{ClassificationMetrics, ConfusionCounts, Derived};

/// Count agreement of `candidate` against the ground truth `reference`.
pub fn confusion_counts(reference: &[bool], candidate: &[bool]) -> ConfusionCounts {
    let mut counts = ConfusionCounts::default();
    for (&truth, &predicted) in reference.iter().zip(candidate) {
        match (truth, predicted) {
            (true, true) => counts.true_positive += 1,
            (true, false) => counts.false_negative += 1,
            (false, true) => counts.false_positive += 1,
            (false, false) => counts.true_negative += 1,
        }
    }
    counts
}

fn percentage(numerator: usize, denominator: usize, empty: DegenerateInput) -> Derived {
    if denominator == 0 {
        Err(empty)
    } else {
        Ok(numerator as f64 * 100.0 / denominator as f64)
    }
}

/// Sensitivity, specificity and accuracy as percentages.
pub fn classification_metrics(reference: &[bool], candidate: &[bool]) -> ClassificationMetrics {
    let counts = confusion_counts(reference, candidate);
    ClassificationMetrics {
        counts,
        sensitivity: percentage(
            counts.true_positive,
            counts.positives(),
            DegenerateInput::EmptyPositiveClass,
        ),
        specificity: percentage(
            counts.true_negative,
            counts.negatives(),
            DegenerateInput::EmptyNegativeClass,
        ),
        accuracy: percentage(
            counts.true_positive + counts.true_negative,
            counts.total(),
            DegenerateInput::EmptyResult,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_rates() {
        let reference = [true, false, true, false];
        let candidate = [true, false, false, false];
        let m = classification_metrics(&reference, &candidate);

        assert_eq!(
            m.counts,
            ConfusionCounts {
                true_positive: 1,
                false_positive: 0,
                true_negative: 2,
                false_negative: 1,
            }
        );
        assert_eq!(m.sensitivity, Ok(50.0));
        assert_eq!(m.specificity, Ok(100.0));
        assert_eq!(m.accuracy, Ok(75.0));
    }

    #[test]
    fn test_empty_positive_class() {
        let m = classification_metrics(&[false, false], &[true, false]);
        assert_eq!(m.sensitivity, Err(DegenerateInput::EmptyPositiveClass));
        assert_eq!(m.specificity, Ok(50.0));
        assert_eq!(m.accuracy, Ok(50.0));
    }

    #[test]
    fn test_empty_negative_class() {
        let m = classification_metrics(&[true], &[true]);
        assert_eq!(m.sensitivity, Ok(100.0));
        assert_eq!(m.specificity, Err(DegenerateInput::EmptyNegativeClass));
    }

    #[test]
    fn test_empty_vectors() {
        let m = classification_metrics(&[], &[]);
        assert_eq!(m.counts.total(), 0);
        assert_eq!(m.accuracy, Err(DegenerateInput::EmptyResult));
    }

    #[test]
    fn test_count_identities() {
        let reference: Vec<bool> = (0..97).map(|i| i % 3 == 0).collect();
        let candidate: Vec<bool> = (0..97).map(|i| i % 5 == 0).collect();
        let counts = confusion_counts(&reference, &candidate);
        let positives = reference.iter().filter(|&&b| b).count();

        assert_eq!(counts.true_positive + counts.false_negative, positives);
        assert_eq!(counts.true_negative + counts.false_positive, 97 - positives);
        assert_eq!(counts.total(), 97);
    }
}
