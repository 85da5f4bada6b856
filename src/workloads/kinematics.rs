//! Two-joint planar arm: forward kinematics, then back to joint angles.

use std::convert::Infallible;
use std::f64::consts::FRAC_PI_2;

use rand::Rng;

use super::SyntheticInput;
use crate::numeric::Numeric;
use crate::types::ResultVector;
use crate::workload::Workload;

const ARM_LENGTH: f64 = 0.5;

/// Recovers `(theta1, theta2)` for `size` random arm poses.
///
/// Output holds two values per pose.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseKinematics;

impl InverseKinematics {
    /// Joint angles in `[0, pi/2)`, two per pose.
    pub fn angles(input: &SyntheticInput) -> Vec<f64> {
        let mut rng = input.rng();
        (0..input.size * 2)
            .map(|_| rng.random_range(0.0..FRAC_PI_2))
            .collect()
    }
}

fn forward<R: Numeric>(theta1: R, theta2: R) -> (R, R) {
    let l1 = R::from_f64(ARM_LENGTH);
    let l2 = R::from_f64(ARM_LENGTH);
    let x = l1 * theta1.cos() + l2 * (theta1 + theta2).cos();
    let y = l1 * theta1.sin() + l2 * (theta1 + theta2).sin();
    (x, y)
}

fn inverse<R: Numeric>(x: R, y: R) -> (R, R) {
    let l1 = R::from_f64(ARM_LENGTH);
    let l2 = R::from_f64(ARM_LENGTH);
    let a = R::from_f64(2.0) * l1 * l2;
    let b = l1.square() + l2.square();
    let r2 = x.square() + y.square();

    let theta2 = ((r2 - b) / a).acos();
    let theta1 = ((y * (l1 + l2 * theta2.cos()) - x * l2 * theta2.sin()) / r2).asin();
    (theta1, theta2)
}

impl Workload for InverseKinematics {
    type Param = SyntheticInput;
    type Error = Infallible;

    fn name(&self) -> &str {
        "inverse-kinematics"
    }

    fn run<R: Numeric>(&self, input: &SyntheticInput) -> Result<ResultVector, Infallible> {
        let angles: Vec<R> = Self::angles(input).into_iter().map(R::from_f64).collect();

        let positions: Vec<(R, R)> = angles
            .chunks_exact(2)
            .map(|pose| forward(pose[0], pose[1]))
            .collect();

        let mut out = Vec::with_capacity(angles.len());
        for (x, y) in positions {
            let (theta1, theta2) = inverse(x, y);
            out.push(theta1);
            out.push(theta2);
        }
        Ok(ResultVector::continuous_from(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_in_f64() {
        let input = SyntheticInput::new(200, 3);
        let angles = InverseKinematics::angles(&input);
        let ResultVector::Continuous(out) = InverseKinematics.run::<f64>(&input).unwrap() else {
            panic!("expected continuous output");
        };
        assert_eq!(out.len(), 400);
        for (expected, actual) in angles.iter().zip(&out) {
            assert!((expected - actual).abs() < 1e-4, "{} vs {}", expected, actual);
        }
    }

    #[test]
    fn test_straight_arm() {
        let (x, y) = forward(0.0f64, 0.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
        let (theta1, theta2) = inverse(x, y);
        assert!(theta1.abs() < 1e-6);
        assert!(theta2.abs() < 1e-6);
    }
}
