// ## src/telemetry/snapshot.rs

//! Immutable per-run statistics built from counters and the run timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::MIB;
use crate::telemetry::counters::ChunkCounters;
use crate::telemetry::timers::StageTimes;

/// Throughput in MiB/s; zero when no time elapsed.
pub fn throughput_mib_s(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    (bytes as f64 / MIB as f64) / secs
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    /// Wall-clock time around the whole processing stage (loop or fork-join).
    pub elapsed: Duration,
    /// Reconstructed bytes per second over `elapsed`, in MiB/s.
    pub throughput_mib_s: f64,
    /// Wall-clock time for the whole run: split, processing, reconstruct, verify.
    pub total_elapsed: Duration,
    /// Ingested bytes per second over `total_elapsed`, in MiB/s.
    pub total_throughput_mib_s: f64,
    pub bytes_plaintext: u64,
    pub bytes_ciphertext: u64,
    pub stage_times: StageTimes,
}

impl ProcessingStats {
    pub fn from(
        counters: &ChunkCounters,
        elapsed: Duration,
        reconstructed_len: usize,
        stage_times: StageTimes,
    ) -> Self {
        Self {
            total: counters.total(),
            successful: counters.successful,
            failed: counters.failed,
            elapsed,
            throughput_mib_s: throughput_mib_s(reconstructed_len as u64, elapsed),
            total_elapsed: elapsed,
            total_throughput_mib_s: 0.0,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_ciphertext: counters.bytes_ciphertext,
            stage_times,
        }
    }

    /// Record the end-to-end run time once the run has been verified.
    pub fn with_total(mut self, total_elapsed: Duration, data_len: usize) -> Self {
        self.total_elapsed = total_elapsed;
        self.total_throughput_mib_s = throughput_mib_s(data_len as u64, total_elapsed);
        self
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
