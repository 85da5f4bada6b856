//! Built-in demonstration workloads.
//!
//! Each workload is written once against [`Numeric`](crate::Numeric) and
//! generates its own input from a [`SyntheticInput`], so both halves of a
//! comparison see the same logical data:
//!
//! | Workload | Result variant |
//! |----------|----------------|
//! | [`Saxpy`] | continuous |
//! | [`InverseKinematics`] | continuous |
//! | [`TriangleHit`] | classification |
//! | [`EdgeDetect`] | triplet |

mod edge;
mod kinematics;
mod saxpy;
mod triangle;

pub use edge::EdgeDetect;
pub use kinematics::InverseKinematics;
pub use saxpy::Saxpy;
pub use triangle::TriangleHit;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Size and seed of a generated input.
///
/// Generation happens inside the workload, from the seed alone, so two runs
/// with the same `SyntheticInput` operate on identical values. Its cost is
/// included in each run's timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticInput {
    /// Number of samples (elements, points, or pixels per side for images).
    pub size: usize,
    /// Seed for the input generator.
    pub seed: u64,
}

impl SyntheticInput {
    /// Input of `size` samples generated from `seed`.
    pub fn new(size: usize, seed: u64) -> Self {
        Self { size, seed }
    }

    /// Deterministic RNG for this input.
    pub(crate) fn rng(&self) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(self.seed)
    }
}

impl Default for SyntheticInput {
    fn default() -> Self {
        Self {
            size: 10_000,
            seed: 42,
        }
    }
}
