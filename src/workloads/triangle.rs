//! Point-in-triangle classification.

use std::convert::Infallible;

use rand::Rng;

use super::SyntheticInput;
use crate::numeric::Numeric;
use crate::types::ResultVector;
use crate::workload::Workload;

/// Tests `size` random points against random triangles in the unit square.
///
/// A point on an edge counts as inside.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleHit;

impl TriangleHit {
    /// One case per sample: three vertices then the query point, as `[x, y]`.
    pub fn cases(input: &SyntheticInput) -> Vec<[[f64; 2]; 4]> {
        let mut rng = input.rng();
        (0..input.size)
            .map(|_| std::array::from_fn(|_| [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)]))
            .collect()
    }
}

/// Twice the signed area of `(a, b, c)`.
fn orientation<R: Numeric>(a: [R; 2], b: [R; 2], c: [R; 2]) -> R {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn contains<R: Numeric>(a: [R; 2], b: [R; 2], c: [R; 2], p: [R; 2]) -> bool {
    let d = [orientation(a, b, p), orientation(b, c, p), orientation(c, a, p)];
    let has_negative = d.iter().any(|v| v.is_negative());
    let has_positive = d.iter().any(|v| v.is_positive());
    !(has_negative && has_positive)
}

impl Workload for TriangleHit {
    type Param = SyntheticInput;
    type Error = Infallible;

    fn name(&self) -> &str {
        "triangle-hit"
    }

    fn run<R: Numeric>(&self, input: &SyntheticInput) -> Result<ResultVector, Infallible> {
        let out: Vec<bool> = Self::cases(input)
            .into_iter()
            .map(|case| {
                let [a, b, c, p] = case.map(|v| v.map(R::from_f64));
                contains(a, b, c, p)
            })
            .collect();
        Ok(ResultVector::Classification(out))
    }
}
