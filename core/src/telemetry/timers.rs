// ## src/telemetry/timers.rs

//! telemetry/timers.rs
//! Stage timers for the round-trip pipeline.
//!
//! Summary: records durations for split, encrypt, decrypt, compare,
//! reconstruct and verify. In the fork-join processor stage times are summed
//! across tasks, so they measure CPU spent per stage, not wall-clock time.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Split,
    Encrypt,
    Decrypt,
    Compare,
    Reconstruct,
    Verify,
}

impl Stage {
    /// Pipeline order, for per-stage breakdowns.
    pub const ALL: [Stage; 6] = [
        Stage::Split,
        Stage::Encrypt,
        Stage::Decrypt,
        Stage::Compare,
        Stage::Reconstruct,
        Stage::Verify,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Split       => "split",
            Stage::Encrypt     => "encrypt",
            Stage::Decrypt     => "decrypt",
            Stage::Compare     => "compare",
            Stage::Reconstruct => "reconstruct",
            Stage::Verify      => "verify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Get total duration for a stage.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Get duration in milliseconds (f64).
    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn merge(&mut self, other: &StageTimes) {
        for (stage, dur) in other {
            self.add(*stage, *dur);
        }
    }

    /// Check if all expected stages were recorded.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.times.contains_key(s))
    }
}

/// Allow iteration over borrowed StageTimes.
impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = hash_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

/// Time a closure and book its duration against `stage`.
#[inline]
pub fn timed<T>(times: &mut StageTimes, stage: Stage, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    times.add(stage, start.elapsed());
    out
}

/// Wall-clock timer started on construction.
#[derive(Clone, Copy, Debug)]
pub struct TelemetryTimer {
    start_time: Instant,
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { start_time: Instant::now() }
    }

    pub fn finish(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}
