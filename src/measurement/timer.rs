//! Monotonic timing of a single closure invocation.

use std::hint::black_box as std_black_box;
use std::sync::atomic::{compiler_fence, Ordering};
use std::time::{Duration, Instant};

use crate::config::TimeResolution;
use crate::types::Timing;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap function calls being measured to prevent the compiler
/// from optimizing away the computation or reordering it relative to timing calls.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Timer recording elapsed time at a fixed resolution.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    resolution: TimeResolution,
}

impl Timer {
    /// Timer recording at `resolution`.
    pub fn new(resolution: TimeResolution) -> Self {
        Self { resolution }
    }

    /// Resolution timings are recorded at.
    pub fn resolution(&self) -> TimeResolution {
        self.resolution
    }

    /// Run `f` once and return its output with the elapsed time.
    #[inline]
    pub fn measure<F, T>(&self, f: F) -> (T, Timing)
    where
        F: FnOnce() -> T,
    {
        let (output, elapsed) = measure_duration(f);
        let timing = Timing {
            ticks: self.resolution.ticks(elapsed),
            unit: self.resolution,
        };
        (output, timing)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimeResolution::Micros)
    }
}

#[inline]
fn measure_duration<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    compiler_fence(Ordering::SeqCst);
    let start = Instant::now();
    let output = black_box(f());
    let elapsed = start.elapsed();
    compiler_fence(Ordering::SeqCst);
    (output, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_output() {
        let timer = Timer::new(TimeResolution::Nanos);
        let (sum, _) = timer.measure(|| (0..1000u64).sum::<u64>());
        assert_eq!(sum, 499_500);
    }

    #[test]
    fn test_measure_sleep_is_visible() {
        let timer = Timer::new(TimeResolution::Millis);
        let ((), timing) = timer.measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(timing.ticks >= 5, "ticks = {}", timing.ticks);
        assert_eq!(timing.unit, TimeResolution::Millis);
    }
}
