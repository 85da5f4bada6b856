//! # diffbench
//!
//! Differential evaluation of numeric representations.
//!
//! An algorithm is written once against the [`Numeric`] trait, then run
//! under a reference representation (usually `f64`) and a candidate
//! (`f32`, a fixed-point logarithmic number, ...). Each run is timed once and
//! the candidate's output is scored against the reference's:
//! - Relative speed ("N times slower/faster")
//! - Relative and absolute error for real-valued results
//! - Sensitivity, specificity and accuracy for classification results
//! - Euclidean distance for three-channel integer results
//!
//! ## Determinism
//!
//! Both runs receive the **same** parameter. Any input a run generates must
//! be derived from that parameter alone, so the only difference between the
//! runs is the representation.
//!
//! The built-in workloads take a [`SyntheticInput`](workloads::SyntheticInput)
//! (size and seed) and regenerate their data from the seed inside each run.
//! Generation is therefore part of both timings. Pass pre-generated data as
//! the parameter to keep it out of the measurement.
//!
//! ```ignore
//! // ❌ WRONG - each run draws fresh random data
//! compare(|_| my_algo::<f64>(&random_input()), |_| my_algo::<f32>(&random_input()), &());
//!
//! // ✅ CORRECT - both runs regenerate the same data from one seed
//! let input = SyntheticInput::new(10_000, 42);
//! DiffOracle::new().run::<f64, f32, _>(&MyWorkload, &input)?;
//!
//! // ✅ CORRECT - data generated once, outside the timed runs
//! let data: Vec<f64> = generate(42);
//! compare(|xs: &[f64]| my_algo::<f64>(xs), |xs: &[f64]| my_algo::<f32>(xs), &data[..])?;
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use diffbench::{compare, output::format_report};
//!
//! let input: Vec<f64> = (0..1000).map(|i| i as f64 * 0.37).collect();
//! let report = compare(
//!     |xs: &[f64]| xs.iter().map(|x| x.sin()).collect::<Vec<f64>>(),
//!     |xs: &[f64]| xs.iter().map(|&x| (x as f32).sin()).collect::<Vec<f32>>(),
//!     &input[..],
//! )?;
//!
//! println!("{}", format_report(&report));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod oracle;
mod result;
#[cfg(feature = "parallel")]
mod thread_pool;
mod types;
mod workload;

// Functional modules
pub mod analysis;
pub mod measurement;
pub mod numeric;
pub mod output;
pub mod workloads;

// Re-exports for public API
pub use config::{Config, TimeResolution};
pub use error::{CompareError, DegenerateInput, ShapeMismatch};
pub use measurement::Timer;
pub use numeric::{Log16, Log23, LogNumber, Numeric};
pub use oracle::{speed_comparison, DiffOracle};
pub use result::{
    ClassificationMetrics, ConfusionCounts, ContinuousMetrics, Derived, DivergenceReport,
    Extremum, Metrics, RelativeSpeed, SpeedComparison, TripletMetrics,
};
pub use types::{ResultVector, Side, Timing, Variant};
pub use workload::Workload;

/// Convenience function for a one-off comparison with default configuration.
///
/// Runs `reference` on `param`, then `candidate` on the same `param`, and
/// scores the candidate's output against the reference's.
///
/// # Arguments
///
/// * `reference` - Closure producing the trusted result
/// * `candidate` - Closure producing the result under evaluation
/// * `param` - Input shared by both runs
///
/// # Errors
///
/// Returns [`ShapeMismatch`] if the two results differ in variant or length.
pub fn compare<P, A, B, VA, VB>(
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
    DiffOracle::new().compare(reference, candidate, param)
}
