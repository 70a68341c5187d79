// ## Pipeline wiring (no crypto logic)

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::chunking::{reconstruct, split, IngestedBuffer};
use crate::config::PipelineConfig;
use crate::crypto::{ChunkCodec, ChunkKey, IntegrityVerifier};
use crate::processing::tap::CiphertextTap;
use crate::processing::types::{ProcessingResult, RunState, Strategy};
use crate::processing::worker::RoundTrip;
use crate::processing::processor_for;
use crate::telemetry::{timed, ProcessingStats, Stage, StageTimes, TelemetryTimer};
use crate::types::PipelineError;

/// Explicitly constructed processor object: key, codec and configuration for
/// one benchmark session. Nothing here is global.
#[derive(Clone)]
pub struct ChunkPipeline {
    codec: ChunkCodec,
    config: PipelineConfig,
    tap: Option<Arc<dyn CiphertextTap>>,
}

impl ChunkPipeline {
    pub fn new(key: &ChunkKey, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            codec: ChunkCodec::new(key, config.cipher),
            config,
            tap: None,
        })
    }

    /// Install a hook over sealed bytes (fault injection).
    pub fn with_tap(mut self, tap: Arc<dyn CiphertextTap>) -> Self {
        self.tap = Some(tap);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Accept a buffer and take its reference digest.
    pub fn ingest(&self, data: impl Into<Bytes>) -> IngestedBuffer {
        IngestedBuffer::new(data, self.config.digest)
    }

    pub fn run_serial(&self, buffer: &IngestedBuffer) -> Result<ProcessingResult, PipelineError> {
        self.run(buffer, Strategy::Serial)
    }

    /// Fork-join run using the configured fan-out.
    pub fn run_parallel(&self, buffer: &IngestedBuffer) -> Result<ProcessingResult, PipelineError> {
        self.run(buffer, Strategy::Parallel(self.config.fan_out))
    }

    /// Drive one run from `Created` to `Reported`.
    ///
    /// Returns `Err` only for configuration problems, before any chunk work.
    /// Once splitting succeeds the run always completes and reports.
    pub fn run(
        &self,
        buffer: &IngestedBuffer,
        strategy: Strategy,
    ) -> Result<ProcessingResult, PipelineError> {
        if let Strategy::Parallel(fan_out) = strategy {
            fan_out.validate()?;
        }

        let run_timer = TelemetryTimer::new();
        let mut state = RunState::Created;
        info!(
            %strategy,
            cipher = %self.codec.suite(),
            bytes = buffer.len(),
            chunk_size = self.config.chunk_size,
            "run started"
        );
        let mut stage_times = StageTimes::default();

        // ---- Split ----
        advance(&mut state, RunState::Splitting);
        let chunks = timed(&mut stage_times, Stage::Split, || {
            split(buffer.data(), self.config.chunk_size)
        })?;

        // ---- Process ----
        advance(&mut state, RunState::Processing);
        let round_trip = RoundTrip::new(&self.codec, self.tap.as_deref());
        let processor = processor_for(strategy);
        let outcome = processor.process(&chunks, &round_trip);

        for failure in &outcome.failures {
            warn!(strategy = %processor.strategy(), index = failure.index, error = %failure.error, "chunk failed");
        }

        // ---- Reconstruct ----
        advance(&mut state, RunState::Reconstructing);
        let reconstructed = timed(&mut stage_times, Stage::Reconstruct, || {
            reconstruct(&outcome.results)
        });

        // ---- Verify ----
        advance(&mut state, RunState::Verifying);
        let verification = timed(&mut stage_times, Stage::Verify, || {
            IntegrityVerifier::verify(buffer.digest(), &reconstructed)
        });

        stage_times.merge(&outcome.stage_times);
        let stats = ProcessingStats::from(
            &outcome.counters,
            outcome.elapsed,
            reconstructed.len(),
            stage_times,
        )
        .with_total(run_timer.finish(), buffer.len());

        advance(&mut state, RunState::Reported);
        info!(
            %strategy,
            successful = stats.successful,
            failed = stats.failed,
            integrity_verified = verification.verified,
            elapsed = ?stats.elapsed,
            total_elapsed = ?stats.total_elapsed,
            throughput_mib_s = stats.throughput_mib_s,
            "run completed"
        );

        Ok(ProcessingResult {
            strategy,
            chunks: outcome.results,
            failures: outcome.failures,
            original_digest: buffer.digest().clone(),
            reconstructed_digest: verification.reconstructed,
            integrity_verified: verification.verified,
            stats,
            state,
        })
    }
}

fn advance(state: &mut RunState, to: RunState) {
    debug_assert_eq!(state.next(), Some(to), "illegal run transition {state} -> {to}");
    debug!(from = %state, to = %to, "run state");
    *state = to;
}
