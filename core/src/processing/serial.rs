use tracing::debug;

use crate::chunking::Chunk;
use crate::processing::types::{ChunkFailure, ProcessOutcome, Strategy};
use crate::processing::worker::RoundTrip;
use crate::processing::ChunkProcessor;
use crate::telemetry::{ChunkCounters, StageTimes, TelemetryTimer};

/// Sequential loop over chunks in index order.
///
/// A failing chunk is recorded and the loop moves on; nothing aborts the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialProcessor;

impl ChunkProcessor for SerialProcessor {
    fn strategy(&self) -> Strategy {
        Strategy::Serial
    }

    fn process(&self, chunks: &[Chunk], round_trip: &RoundTrip<'_>) -> ProcessOutcome {
        debug!(chunks = chunks.len(), "serial processing started");
        let timer = TelemetryTimer::new();

        let mut results = Vec::with_capacity(chunks.len());
        let mut failures = Vec::new();
        let mut counters = ChunkCounters::default();
        let mut stage_times = StageTimes::default();

        for chunk in chunks {
            let outcome = round_trip.run(chunk);
            stage_times.merge(&outcome.stage_times);

            match &outcome.result.error {
                None => counters.add_success(chunk.len(), outcome.sealed_len),
                Some(error) => {
                    counters.add_failure();
                    failures.push(ChunkFailure { index: chunk.index, error: error.clone() });
                }
            }
            results.push(outcome.result);
        }

        let elapsed = timer.finish();
        debug!(?elapsed, "serial processing completed");

        ProcessOutcome { results, counters, failures, stage_times, elapsed }
    }
}
