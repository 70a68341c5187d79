use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_PER_CHUNK_TASKS;
use crate::types::PipelineError;

/// Fan-out width of the fork-join processor.
///
/// One knob covers both shapes:
/// - `PerChunk`: one task per chunk, width equals the chunk count up to
///   `MAX_PER_CHUNK_TASKS`; beyond that the bounded queue is used at that width.
/// - `Bounded(w)`: `w` long-lived workers pull chunks from a shared queue.
///
/// The default is bounded at the number of logical CPUs; unbounded fan-out
/// must be asked for explicitly since it spawns a thread per chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FanOut {
    PerChunk,
    Bounded(usize),
}

impl FanOut {
    /// Bounded at the number of logical CPUs.
    pub fn available() -> Self {
        FanOut::Bounded(num_cpus::get().max(1))
    }

    /// CLI convention: `0` means one task per chunk.
    pub fn from_workers(workers: usize) -> Self {
        match workers {
            0 => FanOut::PerChunk,
            w => FanOut::Bounded(w),
        }
    }

    /// Number of concurrent tasks actually started for `chunk_count` chunks.
    pub fn width(&self, chunk_count: usize) -> usize {
        match *self {
            FanOut::PerChunk => chunk_count.min(MAX_PER_CHUNK_TASKS),
            FanOut::Bounded(w) => w.min(chunk_count),
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        match self {
            FanOut::Bounded(0) => Err(PipelineError::Configuration(
                "bounded fan-out needs at least one worker".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for FanOut {
    fn default() -> Self {
        FanOut::available()
    }
}

impl fmt::Display for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanOut::PerChunk => f.write_str("per-chunk"),
            FanOut::Bounded(w) => write!(f, "{w} workers"),
        }
    }
}
