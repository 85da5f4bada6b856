//! Configuration for differential comparisons.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration options for `DiffOracle`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unit in which run times are recorded and compared (default: microseconds).
    ///
    /// A run that completes in less than one unit records zero ticks, which
    /// makes the relative speed degenerate rather than infinite.
    pub resolution: TimeResolution,

    /// Compute per-element errors on the shared thread pool (default: false).
    ///
    /// Maxima, their positions and all sums are still reduced in a single
    /// left-to-right pass, so the report is identical to the sequential path.
    /// Has no effect without the `parallel` feature.
    pub parallel_metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: TimeResolution::Micros,
            parallel_metrics: false,
        }
    }
}

impl Config {
    /// Default configuration overridden by `DIFFBENCH_*` environment variables.
    ///
    /// - `DIFFBENCH_RESOLUTION`: `ns`, `us` or `ms`
    /// - `DIFFBENCH_PARALLEL`: `1`/`true` or `0`/`false`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(resolution) = parse_resolution_env("DIFFBENCH_RESOLUTION") {
            config.resolution = resolution;
        }
        if let Some(parallel) = parse_bool_env("DIFFBENCH_PARALLEL") {
            config.parallel_metrics = parallel;
        }
        config
    }
}

/// Granularity of recorded run times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeResolution {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
}

impl TimeResolution {
    /// Whole units contained in `elapsed`, saturating at `u64::MAX`.
    pub fn ticks(self, elapsed: Duration) -> u64 {
        let ticks = match self {
            Self::Nanos => elapsed.as_nanos(),
            Self::Micros => elapsed.as_micros(),
            Self::Millis => elapsed.as_millis(),
        };
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }

    /// Unit suffix for display.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "\u{00B5}s",
            Self::Millis => "ms",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" => Some(Self::Nanos),
            "us" | "micros" => Some(Self::Micros),
            "ms" | "millis" => Some(Self::Millis),
            _ => None,
        }
    }
}

fn parse_resolution_env(key: &str) -> Option<TimeResolution> {
    TimeResolution::parse(&env::var(key).ok()?)
}

fn parse_bool_env(key: &str) -> Option<bool> {
    let raw = env::var(key).ok()?;
    if raw == "1" || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
