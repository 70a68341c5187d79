//! Comparative statistics for a serial run against a parallel run.
//!
//! Reporting only: nothing here feeds back into correctness.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::processing::ProcessingResult;
use crate::telemetry::throughput_mib_s;

/// `(serial - parallel) / serial * 100`; zero when `serial` is zero.
pub fn time_reduction_pct(serial: Duration, parallel: Duration) -> f64 {
    let s = serial.as_secs_f64();
    if s == 0.0 {
        return 0.0;
    }
    (s - parallel.as_secs_f64()) / s * 100.0
}

/// `(parallel - serial) / serial * 100` on throughput; zero when `serial` is zero.
pub fn speed_improvement_pct(serial_mib_s: f64, parallel_mib_s: f64) -> f64 {
    if serial_mib_s == 0.0 {
        return 0.0;
    }
    (parallel_mib_s - serial_mib_s) / serial_mib_s * 100.0
}

/// `serial / parallel`; zero when `parallel` is zero.
pub fn efficiency_factor(serial: Duration, parallel: Duration) -> f64 {
    let p = parallel.as_secs_f64();
    if p == 0.0 {
        return 0.0;
    }
    serial.as_secs_f64() / p
}

/// One strategy's line in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    /// Processing stage only.
    pub elapsed: Duration,
    pub throughput_mib_s: f64,
    /// Whole run, split and verification included.
    pub total_elapsed: Duration,
    pub total_throughput_mib_s: f64,
    pub successful: u64,
    pub failed: u64,
    pub integrity_verified: bool,
    pub reconstructed_digest: String,
}

impl StrategySummary {
    fn from_result(result: &ProcessingResult, data_len: usize) -> Self {
        Self {
            strategy: result.strategy.to_string(),
            elapsed: result.stats.elapsed,
            throughput_mib_s: throughput_mib_s(data_len as u64, result.stats.elapsed),
            total_elapsed: result.stats.total_elapsed,
            total_throughput_mib_s: throughput_mib_s(data_len as u64, result.stats.total_elapsed),
            successful: result.stats.successful,
            failed: result.stats.failed,
            integrity_verified: result.integrity_verified,
            reconstructed_digest: result.reconstructed_digest.to_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub data_len: usize,
    pub chunk_count: usize,
    pub serial: StrategySummary,
    pub parallel: StrategySummary,
    pub time_reduction_pct: f64,
    pub speed_improvement_pct: f64,
    pub efficiency_factor: f64,
    /// Both strategies reconstructed the same digest with the same counts.
    pub consistent: bool,
}

impl BenchmarkReport {
    pub fn compare(serial: &ProcessingResult, parallel: &ProcessingResult, data_len: usize) -> Self {
        let s = StrategySummary::from_result(serial, data_len);
        let p = StrategySummary::from_result(parallel, data_len);

        let consistent = serial.reconstructed_digest == parallel.reconstructed_digest
            && serial.stats.successful == parallel.stats.successful
            && serial.stats.failed == parallel.stats.failed;

        Self {
            generated_at: Utc::now(),
            data_len,
            chunk_count: serial.chunks.len(),
            time_reduction_pct: time_reduction_pct(s.elapsed, p.elapsed),
            speed_improvement_pct: speed_improvement_pct(s.throughput_mib_s, p.throughput_mib_s),
            efficiency_factor: efficiency_factor(s.elapsed, p.elapsed),
            serial: s,
            parallel: p,
            consistent,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
