//! Chunk processing: the serial and fork-join strategies and the pipeline
//! that drives a run through its states.
//!
//! Strategies differ only in timing. For the same input and key both must
//! report the same per-chunk outcomes, counts and reconstructed digest.

pub mod types;
pub mod tap;
pub mod worker;
pub mod parallelism;
pub mod serial;
pub mod parallel;
pub mod pipeline;

use crate::chunking::Chunk;

pub use types::{
    ChunkError,
    ChunkFailure,
    ChunkResult,
    ProcessOutcome,
    ProcessingResult,
    RunState,
    Strategy,
};
pub use tap::{CiphertextTap, FlipByte, Truncate};
pub use worker::{ChunkOutcome, RoundTrip};
pub use parallelism::FanOut;
pub use serial::SerialProcessor;
pub use parallel::ParallelProcessor;
pub use pipeline::ChunkPipeline;

/// One way of running the per-chunk round trip over a whole run.
pub trait ChunkProcessor: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Process every chunk. Never aborts: failures land in the outcome.
    fn process(&self, chunks: &[Chunk], round_trip: &RoundTrip<'_>) -> ProcessOutcome;
}

/// Build the processor for a strategy.
pub fn processor_for(strategy: Strategy) -> Box<dyn ChunkProcessor> {
    match strategy {
        Strategy::Serial => Box::new(SerialProcessor),
        Strategy::Parallel(fan_out) => Box::new(ParallelProcessor::new(fan_out)),
    }
}
