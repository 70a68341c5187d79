//! Human-readable report.

use chunkcrypt_core::benchmark::{BenchmarkRun, StrategySummary};
use chunkcrypt_core::config::PipelineConfig;
use chunkcrypt_core::constants::MIB;
use chunkcrypt_core::processing::ProcessingResult;
use chunkcrypt_core::telemetry::{Stage, StageTimes};

const RULE: &str = "============================================================";

fn section(title: &str) {
    println!("\n{RULE}\n{title}\n{RULE}");
}

fn print_strategy(label: &str, summary: &StrategySummary, result: &ProcessingResult) {
    println!("{label}:");
    println!("  integrity verified : {}", summary.integrity_verified);
    println!("  chunks             : {} successful, {} failed", summary.successful, summary.failed);
    println!("  processing time    : {:?}", summary.elapsed);
    println!("  total (with setup) : {:?}", summary.total_elapsed);
    println!("  processing speed   : {:.2} MiB/s", summary.throughput_mib_s);
    println!("  total speed        : {:.2} MiB/s", summary.total_throughput_mib_s);
    print_stages(&result.stats.stage_times);
    for failure in &result.failures {
        println!("  ! {failure}");
    }
}

/// Per-stage time; encrypt, decrypt and compare are summed over chunks.
fn print_stages(times: &StageTimes) {
    let line = Stage::ALL
        .iter()
        .map(|stage| format!("{stage} {:.1}ms", times.get_ms(*stage)))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  stages             : {line}");
}

pub fn print_text(run: &BenchmarkRun, config: &PipelineConfig) {
    let report = &run.report;

    section("RESULTS COMPARISON");
    println!(
        "buffer: {:.2} MiB in {} chunks of {} KiB ({}, {})",
        report.data_len as f64 / MIB as f64,
        report.chunk_count,
        config.chunk_size / 1024,
        config.cipher,
        config.digest,
    );
    println!();
    print_strategy("SERIAL", &report.serial, &run.serial);
    println!();
    print_strategy(&format!("PARALLEL ({})", config.fan_out), &report.parallel, &run.parallel);

    section("PERFORMANCE");
    println!("  time reduction     : {:.2}%", report.time_reduction_pct);
    println!("  speed increase     : {:.2}%", report.speed_improvement_pct);
    println!("  efficiency factor  : {:.2}x", report.efficiency_factor);

    section("VALIDATION");
    println!(
        "  digest match       : {} (serial {}..., parallel {}...)",
        report.consistent,
        run.serial.reconstructed_digest.short_hex(16),
        run.parallel.reconstructed_digest.short_hex(16),
    );
    println!(
        "  chunk success rate : serial {}/{}, parallel {}/{}",
        run.serial.stats.successful,
        run.serial.stats.total,
        run.parallel.stats.successful,
        run.parallel.stats.total,
    );
}
