//! Single-precision `a * x + y`.

use std::convert::Infallible;

use rand::Rng;

use super::SyntheticInput;
use crate::numeric::Numeric;
use crate::types::ResultVector;
use crate::workload::Workload;

/// `y[i] = a * x[i] + y[i]` over `size` random elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Saxpy;

impl Saxpy {
    /// The raw inputs `(a, x, y)` for `input`, in f64.
    pub fn inputs(input: &SyntheticInput) -> (f64, Vec<f64>, Vec<f64>) {
        let mut rng = input.rng();
        let a = rng.random_range(-4.0..4.0);
        let x = (0..input.size).map(|_| rng.random_range(-100.0..100.0)).collect();
        let y = (0..input.size).map(|_| rng.random_range(-100.0..100.0)).collect();
        (a, x, y)
    }
}

impl Workload for Saxpy {
    type Param = SyntheticInput;
    type Error = Infallible;

    fn name(&self) -> &str {
        "saxpy"
    }

    fn run<R: Numeric>(&self, input: &SyntheticInput) -> Result<ResultVector, Infallible> {
        let (a, x, y) = Self::inputs(input);
        let a = R::from_f64(a);
        let out: Vec<R> = x
            .iter()
            .zip(&y)
            .map(|(&x, &y)| a * R::from_f64(x) + R::from_f64(y))
            .collect();
        Ok(ResultVector::continuous_from(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let input = SyntheticInput::new(64, 7);
        let (a, x, y) = Saxpy::inputs(&input);
        let ResultVector::Continuous(out) = Saxpy.run::<f64>(&input).unwrap() else {
            panic!("expected continuous output");
        };
        assert_eq!(out.len(), 64);
        for i in 0..64 {
            assert_eq!(out[i], a * x[i] + y[i]);
        }
    }

    #[test]
    fn test_deterministic() {
        let input = SyntheticInput::new(32, 99);
        assert_eq!(Saxpy.run::<f32>(&input), Saxpy.run::<f32>(&input));
    }
}
