//! Benchmark workload contract.

use crate::numeric::Numeric;
use crate::types::ResultVector;

/// An algorithm written once against [`Numeric`] and instantiated per
/// representation.
///
/// `run` receives the same parameter for both instantiations of a comparison
/// and must return a freshly owned result vector.
///
/// ```ignore
/// struct Scale;
///
/// impl Workload for Scale {
///     type Param = Vec<f64>;
///     type Error = std::convert::Infallible;
///
///     fn name(&self) -> &str {
///         "scale"
///     }
///
///     /// Run the algorithm with every value in representation `R`.
///     ///
///     /// Must be deterministic in `param`: both sides of a comparison receive
///     /// the same parameter and are expected to compute the same logical data.
///     fn run<R: Numeric>(&self, input: &Vec<f64>) -> Result<ResultVector, Self::Error> {
///         let half = R::from_f64(0.5);
///         let out: Vec<R> = input.iter().map(|&x| R::from_f64(x) * half).collect();
///         Ok(ResultVector::continuous_from(&out))
///     }
/// }
/// ```
pub trait Workload {
    /// Opaque workload-defined input.
    type Param: ?Sized;

    /// Failure to produce a result.
    type Error: std::error::Error + 'static;

    /// Short name shown in reports.
    fn name(&self) -> &str;

    /// Run the algorithm with every value in representation `R`.
    ///
    /// Must be deterministic in `param`: both sides of a comparison receive
    /// the same parameter and are expected to compute the same logical data.
    fn run<R: Numeric>(&self, param: &Self::Param) -> Result<ResultVector, Self::Error>;
}
