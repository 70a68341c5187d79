//! Serial vs parallel comparison over one ingested buffer.

pub mod fixture;
pub mod report;

use tracing::info;

use crate::chunking::IngestedBuffer;
use crate::processing::{ChunkPipeline, ProcessingResult, Strategy};
use crate::types::PipelineError;

pub use fixture::{random_buffer, random_key, seeded_buffer};
pub use report::{
    efficiency_factor, speed_improvement_pct, time_reduction_pct, BenchmarkReport, StrategySummary,
};

/// Both results plus the derived comparison.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub serial: ProcessingResult,
    pub parallel: ProcessingResult,
    pub report: BenchmarkReport,
}

/// Run the serial strategy, then the parallel one, against the same buffer
/// and the same reference digest.
pub fn run_comparison(
    pipeline: &ChunkPipeline,
    buffer: &IngestedBuffer,
) -> Result<BenchmarkRun, PipelineError> {
    let serial = pipeline.run(buffer, Strategy::Serial)?;
    let parallel = pipeline.run(buffer, Strategy::Parallel(pipeline.config().fan_out))?;
    let report = BenchmarkReport::compare(&serial, &parallel, buffer.len());

    info!(
        time_reduction_pct = report.time_reduction_pct,
        efficiency_factor = report.efficiency_factor,
        consistent = report.consistent,
        "benchmark comparison ready"
    );

    Ok(BenchmarkRun { serial, parallel, report })
}
