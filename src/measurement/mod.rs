//! Wall-clock measurement of workload runs.
//!
//! Each side of a comparison is timed exactly once with a monotonic clock.
//! Results are passed through [`black_box`] so the optimizer cannot discard
//! or reorder the work relative to the clock reads.

mod timer;

pub use timer::{black_box, Timer};
