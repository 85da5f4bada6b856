//! JSON serialization for divergence reports.

use crate::result::DivergenceReport;

/// Serialize a DivergenceReport to a compact JSON string.
///
/// Non-finite values (a NaN candidate in an extremum, for instance) are
/// written as `null`.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for DivergenceReport).
pub fn to_json(report: &DivergenceReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a DivergenceReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for DivergenceReport).
pub fn to_json_pretty(report: &DivergenceReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeResolution;
    use crate::error::DegenerateInput;
    use crate::result::{
        ContinuousMetrics, Extremum, Metrics, RelativeSpeed, SpeedComparison, TripletMetrics,
    };
    use crate::types::Timing;

    fn make_report() -> DivergenceReport {
        DivergenceReport {
            workload: Some("edge-detect".to_string()),
            reference: "f64".to_string(),
            candidate: "f32".to_string(),
            speed: SpeedComparison {
                reference: Timing {
                    ticks: 400,
                    unit: TimeResolution::Micros,
                },
                candidate: Timing {
                    ticks: 100,
                    unit: TimeResolution::Micros,
                },
                relative: Ok(RelativeSpeed::Faster(4.0)),
            },
            metrics: Metrics::Triplet(TripletMetrics {
                triples: 0,
                max_distance: 0.0,
                mean_distance: Err(DegenerateInput::EmptyResult),
                rms_distance: Err(DegenerateInput::EmptyResult),
            }),
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"workload\":\"edge-detect\""));
        assert!(json.contains("\"variant\":\"triplet\""));
        assert!(json.contains("\"faster\":4.0"));
        assert!(json.contains("\"unit\":\"micros\""));
        assert!(json.contains("empty_result"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert!(json.contains("rms_distance"));
    }

    #[test]
    fn test_round_trip() {
        let report = make_report();
        let back: DivergenceReport = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(back.metrics, report.metrics);
        assert_eq!(back.speed.relative, report.speed.relative);
    }

    #[test]
    fn test_round_trip_non_finite() {
        let mut report = make_report();
        report.metrics = Metrics::Continuous(ContinuousMetrics {
            len: 2,
            max_relative: Extremum {
                value: f64::INFINITY,
                index: Some(1),
                reference: f64::INFINITY,
                candidate: f64::NAN,
            },
            mean_relative: Ok(f64::NAN),
            max_absolute: Extremum {
                value: f64::NEG_INFINITY,
                index: Some(0),
                reference: 1.0,
                candidate: -1.5,
            },
            mean_absolute: Ok(f64::INFINITY),
        });

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"inf\""));
        assert!(json.contains("\"-inf\""));
        assert!(json.contains("\"NaN\""));
        assert!(!json.contains("null"));

        let back: DivergenceReport = serde_json::from_str(&json).unwrap();
        let Metrics::Continuous(m) = back.metrics else {
            panic!("expected continuous metrics");
        };
        assert_eq!(m.max_relative.value, f64::INFINITY);
        assert_eq!(m.max_relative.reference, f64::INFINITY);
        assert!(m.max_relative.candidate.is_nan());
        assert!(m.mean_relative.unwrap().is_nan());
        assert_eq!(m.max_absolute.value, f64::NEG_INFINITY);
        assert_eq!(m.max_absolute.candidate, -1.5);
        assert_eq!(m.mean_absolute, Ok(f64::INFINITY));
    }
}
