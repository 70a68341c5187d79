//! Fork-join processor.
//!
//! Shared state is limited to:
//! - `SharedCounters`: success/failure counts, locked only for the increment
//! - a crossbeam channel pre-sized to the chunk count, carrying failures
//!
//! Each task receives an exclusive `&mut` to its own result slot, so output
//! order comes from slot ownership rather than execution order. The
//! `thread::scope` boundary is the join barrier: the error channel is drained
//! and slots are read only after every task has returned.
//!
//! A task the OS cannot start leaves its slot empty; the chunk is then
//! reported as `NotProcessed` and the run still completes. One-thread-per-chunk
//! fan-out is capped at `MAX_PER_CHUNK_TASKS` and uses the job queue above it.
//!
//! Known limitation: there is no cancellation. A caller that stops waiting
//! cannot signal in-flight tasks; every chunk runs to completion.

use std::thread::{self, Scope};

use crossbeam::channel::{bounded, Sender};
use tracing::{debug, trace, warn};

use crate::chunking::Chunk;
use crate::processing::parallelism::FanOut;
use crate::processing::types::{ChunkError, ChunkFailure, ChunkResult, ProcessOutcome, Strategy};
use crate::processing::worker::{ChunkOutcome, RoundTrip};
use crate::processing::ChunkProcessor;
use crate::telemetry::{SharedCounters, StageTimes, TelemetryTimer};

/// A chunk paired with the only slot allowed to hold its outcome.
type Job<'a> = (&'a Chunk, &'a mut Option<ChunkOutcome>);

#[derive(Debug, Clone, Copy)]
pub struct ParallelProcessor {
    fan_out: FanOut,
}

impl ParallelProcessor {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(FanOut::default())
    }
}

/// Body of one task: round trip, publish, then write the owned slot.
fn run_job(
    (chunk, slot): Job<'_>,
    round_trip: &RoundTrip<'_>,
    counters: &SharedCounters,
    errors: &Sender<ChunkFailure>,
) {
    let outcome = round_trip.run(chunk);

    match &outcome.result.error {
        None => counters.add_success(chunk.len(), outcome.sealed_len),
        Some(error) => {
            let failure = ChunkFailure { index: chunk.index, error: error.clone() };
            // Capacity equals the chunk count; a full channel means it was mis-sized.
            if let Err(e) = errors.try_send(failure) {
                warn!(index = chunk.index, error = %e, "error channel rejected failure");
            }
            counters.add_failure();
        }
    }

    *slot = Some(outcome);
}

/// Start one scoped task. A thread the OS refuses is logged and skipped, so
/// whatever it would have filled stays `None`.
fn spawn_task<'scope, 'env, F>(scope: &'scope Scope<'scope, 'env>, what: usize, f: F) -> bool
where
    F: FnOnce() + Send + 'scope,
{
    match thread::Builder::new().spawn_scoped(scope, f) {
        Ok(_) => true,
        Err(e) => {
            warn!(task = what, error = %e, "could not spawn task");
            false
        }
    }
}

impl ChunkProcessor for ParallelProcessor {
    fn strategy(&self) -> Strategy {
        Strategy::Parallel(self.fan_out)
    }

    fn process(&self, chunks: &[Chunk], round_trip: &RoundTrip<'_>) -> ProcessOutcome {
        let width = self.fan_out.width(chunks.len());
        let per_chunk = self.fan_out == FanOut::PerChunk && width == chunks.len();
        debug!(chunks = chunks.len(), width, per_chunk, fan_out = %self.fan_out, "parallel processing started");
        let timer = TelemetryTimer::new();

        let mut slots: Vec<Option<ChunkOutcome>> = (0..chunks.len()).map(|_| None).collect();
        let counters = SharedCounters::new();
        let (err_tx, err_rx) = bounded::<ChunkFailure>(chunks.len().max(1));

        thread::scope(|scope| {
            let counters = &counters;

            if per_chunk {
                for job in chunks.iter().zip(slots.iter_mut()) {
                    let index = job.0.index;
                    let err_tx = err_tx.clone();
                    spawn_task(scope, index, move || run_job(job, round_trip, counters, &err_tx));
                }
                return;
            }

            // Queue is filled up front; workers exit when it runs dry.
            let (job_tx, job_rx) = bounded::<Job<'_>>(chunks.len().max(1));
            for job in chunks.iter().zip(slots.iter_mut()) {
                if job_tx.send(job).is_err() {
                    break;
                }
            }
            drop(job_tx);

            let mut started = 0usize;
            for worker_id in 0..width {
                let job_rx = job_rx.clone();
                let err_tx = err_tx.clone();
                let spawned = spawn_task(scope, worker_id, move || {
                    let mut handled = 0usize;
                    for job in job_rx.iter() {
                        run_job(job, round_trip, counters, &err_tx);
                        handled += 1;
                    }
                    trace!(worker_id, handled, "worker drained queue");
                });
                started += usize::from(spawned);
            }
            if started < width {
                warn!(started, width, "running with fewer workers than requested");
            }
        });

        // ---- join complete ----
        let elapsed = timer.finish();
        drop(err_tx);
        let mut failures: Vec<ChunkFailure> = err_rx.try_iter().collect();
        let mut counters = counters.into_inner();

        let mut results = Vec::with_capacity(chunks.len());
        let mut stage_times = StageTimes::default();
        for (chunk, slot) in chunks.iter().zip(slots) {
            match slot {
                Some(outcome) => {
                    stage_times.merge(&outcome.stage_times);
                    results.push(outcome.result);
                }
                None => {
                    counters.add_failure();
                    failures.push(ChunkFailure { index: chunk.index, error: ChunkError::NotProcessed });
                    results.push(ChunkResult::failed(chunk.index, ChunkError::NotProcessed));
                }
            }
        }

        debug!(?elapsed, failed = counters.failed, "parallel processing completed");

        ProcessOutcome { results, counters, failures, stage_times, elapsed }
    }
}
