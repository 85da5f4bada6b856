//! Main `DiffOracle` entry point and builder.

use std::convert::Infallible;

use tracing::{debug, info, warn};

use crate::analysis::analyze;
use crate::config::{Config, TimeResolution};
use crate::error::{CompareError, DegenerateInput, ShapeMismatch};
use crate::measurement::Timer;
use crate::numeric::Numeric;
use crate::result::{DivergenceReport, RelativeSpeed, SpeedComparison};
use crate::types::{ResultVector, Side, Timing};
use crate::workload::Workload;

/// Main entry point for differential comparisons.
///
/// Runs the same algorithm under a reference and a candidate representation,
/// strictly one after the other on the calling thread, times each run once,
/// and scores the candidate's results against the reference's.
///
/// # Example
///
/// ```ignore
/// use diffbench::{DiffOracle, Log23};
/// use diffbench::workloads::{Saxpy, SyntheticInput};
///
/// let report = DiffOracle::new()
///     .run::<f64, Log23, _>(&Saxpy, &SyntheticInput::new(100_000, 42))?;
///
/// println!("{}", diffbench::output::format_report(&report));
/// ```
///
/// Each run happens exactly once. A failed or suspicious measurement is
/// reported, never retried; repeat the whole comparison instead.
#[derive(Debug, Clone, Default)]
pub struct DiffOracle {
    config: Config,
}

/// Names carried into the report.
struct Labels {
    workload: Option<String>,
    reference: String,
    candidate: String,
}

impl DiffOracle {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create with configuration read from `DIFFBENCH_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }

    /// Set the time resolution.
    pub fn resolution(mut self, resolution: TimeResolution) -> Self {
        self.config.resolution = resolution;
        self
    }

    /// Compute per-element errors on the shared thread pool.
    pub fn parallel_metrics(mut self, enabled: bool) -> Self {
        self.config.parallel_metrics = enabled;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare two infallible runs of the same algorithm on `param`.
    ///
    /// `reference` runs to completion before `candidate` starts.
    pub fn compare<P, A, B, VA, VB>(
        &self,
        reference: A,
        candidate: B,
        param: &P,
    ) -> Result<DivergenceReport, ShapeMismatch>
    where
        P: ?Sized,
        A: FnOnce(&P) -> VA,
        B: FnOnce(&P) -> VB,
        VA: Into<ResultVector>,
        VB: Into<ResultVector>,
    {
        self.try_compare(
            |p| Ok::<_, Infallible>(reference(p)),
            |p| Ok::<_, Infallible>(candidate(p)),
            param,
        )
        .map_err(|err| match err {
            CompareError::Shape(shape) => shape,
            CompareError::Workload { source, .. } => match source {},
        })
    }

    /// Compare two fallible runs of the same algorithm on `param`.
    ///
    /// A workload error is returned unchanged inside
    /// [`CompareError::Workload`]; if the reference fails, the candidate is
    /// never run.
    pub fn try_compare<P, A, B, VA, VB, E>(
        &self,
        reference: A,
        candidate: B,
        param: &P,
    ) -> Result<DivergenceReport, CompareError<E>>
    where
        P: ?Sized,
        A: FnOnce(&P) -> Result<VA, E>,
        B: FnOnce(&P) -> Result<VB, E>,
        VA: Into<ResultVector>,
        VB: Into<ResultVector>,
        E: std::error::Error + 'static,
    {
        let labels = Labels {
            workload: None,
            reference: Side::Reference.to_string(),
            candidate: Side::Candidate.to_string(),
        };
        self.execute(labels, reference, candidate, param)
    }

    /// Run `workload` under `Ref` and then `Cand` and compare the results.
    pub fn run<Ref, Cand, W>(
        &self,
        workload: &W,
        param: &W::Param,
    ) -> Result<DivergenceReport, CompareError<W::Error>>
    where
        Ref: Numeric,
        Cand: Numeric,
        W: Workload,
    {
        let labels = Labels {
            workload: Some(workload.name().to_string()),
            reference: Ref::name(),
            candidate: Cand::name(),
        };
        self.execute(
            labels,
            |p| workload.run::<Ref>(p),
            |p| workload.run::<Cand>(p),
            param,
        )
    }

    fn execute<P, A, B, VA, VB, E>(
        &self,
        labels: Labels,
        reference: A,
        candidate: B,
        param: &P,
    ) -> Result<DivergenceReport, CompareError<E>>
    where
        P: ?Sized,
        A: FnOnce(&P) -> Result<VA, E>,
        B: FnOnce(&P) -> Result<VB, E>,
        VA: Into<ResultVector>,
        VB: Into<ResultVector>,
        E: std::error::Error + 'static,
    {
        let timer = Timer::new(self.config.resolution);

        let (reference_out, reference_time) = timer.measure(|| reference(param));
        let reference_values = reference_out
            .map_err(|source| CompareError::Workload {
                side: Side::Reference,
                source,
            })?
            .into();
        debug!(
            side = %Side::Reference,
            representation = %labels.reference,
            elapsed = %reference_time,
            "run complete"
        );

        let (candidate_out, candidate_time) = timer.measure(|| candidate(param));
        let candidate_values = candidate_out
            .map_err(|source| CompareError::Workload {
                side: Side::Candidate,
                source,
            })?
            .into();
        debug!(
            side = %Side::Candidate,
            representation = %labels.candidate,
            elapsed = %candidate_time,
            "run complete"
        );

        let speed = speed_comparison(reference_time, candidate_time);
        match speed.relative {
            Ok(relative) => info!(
                workload = labels.workload.as_deref().unwrap_or("-"),
                "{} is {} than {}",
                labels.candidate,
                relative,
                labels.reference
            ),
            Err(condition) => warn!(%condition, "relative speed unavailable"),
        }

        let metrics = analyze(&reference_values, &candidate_values, &self.config)?;

        let report = DivergenceReport {
            workload: labels.workload,
            reference: labels.reference,
            candidate: labels.candidate,
            speed,
            metrics,
        };
        for condition in report.degenerate_conditions() {
            if !matches!(condition, DegenerateInput::ZeroElapsed { .. }) {
                warn!(%condition, "degenerate metric");
            }
        }
        Ok(report)
    }
}

/// Relative speed of the candidate run against the reference run.
///
/// If the candidate took longer the factor is `candidate / reference`
/// ("slower"), otherwise `reference / candidate` ("faster"). A zero
/// denominator is reported as [`DegenerateInput::ZeroElapsed`].
pub fn speed_comparison(reference: Timing, candidate: Timing) -> SpeedComparison {
    let relative = if candidate.ticks > reference.ticks {
        if reference.ticks == 0 {
            Err(DegenerateInput::ZeroElapsed {
                side: Side::Reference,
            })
        } else {
            Ok(RelativeSpeed::Slower(candidate.ticks as f64 / reference.ticks as f64))
        }
    } else if candidate.ticks == 0 {
        Err(DegenerateInput::ZeroElapsed {
            side: Side::Candidate,
        })
    } else {
        Ok(RelativeSpeed::Faster(reference.ticks as f64 / candidate.ticks as f64))
    };

    SpeedComparison {
        reference,
        candidate,
        relative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn micros(ticks: u64) -> Timing {
        Timing {
            ticks,
            unit: TimeResolution::Micros,
        }
    }

    #[test]
    fn test_speed_slower() {
        let speed = speed_comparison(micros(100), micros(250));
        assert_eq!(speed.relative, Ok(RelativeSpeed::Slower(2.5)));
    }

    #[test]
    fn test_speed_faster_and_equal() {
        assert_eq!(
            speed_comparison(micros(300), micros(100)).relative,
            Ok(RelativeSpeed::Faster(3.0))
        );
        assert_eq!(
            speed_comparison(micros(40), micros(40)).relative,
            Ok(RelativeSpeed::Faster(1.0))
        );
    }

    #[test]
    fn test_speed_zero_denominator() {
        assert_eq!(
            speed_comparison(micros(0), micros(5)).relative,
            Err(DegenerateInput::ZeroElapsed {
                side: Side::Reference
            })
        );
        assert_eq!(
            speed_comparison(micros(5), micros(0)).relative,
            Err(DegenerateInput::ZeroElapsed {
                side: Side::Candidate
            })
        );
        assert_eq!(
            speed_comparison(micros(0), micros(0)).relative,
            Err(DegenerateInput::ZeroElapsed {
                side: Side::Candidate
            })
        );
    }

    #[test]
    fn test_builder() {
        let oracle = DiffOracle::new()
            .resolution(TimeResolution::Nanos)
            .parallel_metrics(true);
        assert_eq!(oracle.config().resolution, TimeResolution::Nanos);
        assert!(oracle.config().parallel_metrics);
    }

    #[test]
    fn test_compare_labels() {
        let report = DiffOracle::new()
            .compare(|n: &usize| vec![1.0f64; *n], |n: &usize| vec![1.0f32; *n], &3)
            .unwrap();
        assert_eq!(report.reference, "reference");
        assert_eq!(report.candidate, "candidate");
        assert!(report.workload.is_none());
    }
}
