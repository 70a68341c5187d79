//! chunkcrypt-bench
//!
//! Builds a random buffer, runs it through the serial and the fork-join
//! strategy with the same key and reference digest, and prints the comparison.

mod display;

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chunkcrypt_core::benchmark::{random_buffer, random_key, run_comparison};
use chunkcrypt_core::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_CHUNK_SIZE, MIB};
use chunkcrypt_core::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Serial vs fork-join chunked AEAD round-trip benchmark", long_about = None)]
struct Cli {
    /// Buffer size in MiB
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE / MIB)]
    size_mib: usize,

    /// Chunk size in KiB
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE / 1024)]
    chunk_kib: usize,

    /// Parallel workers; 0 spawns one task per chunk. Defaults to logical CPUs.
    #[arg(long)]
    workers: Option<usize>,

    /// aes-256-gcm | chacha20-poly1305
    #[arg(long, default_value = "aes-256-gcm")]
    cipher: CipherSuite,

    /// sha256 | sha512 | blake3
    #[arg(long, default_value = "sha256")]
    digest: DigestAlg,

    /// 32-byte key as 64 hex characters; random when omitted
    #[arg(long = "key")]
    key_hex: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn parse_key(key_hex: Option<&str>) -> Result<ChunkKey> {
    match key_hex {
        None => Ok(random_key()),
        Some(h) => {
            let bytes = hex::decode(h.trim()).context("key is not valid hex")?;
            Ok(ChunkKey::from_slice(&bytes)?)
        }
    }
}

/// Flag units to bytes: `(buffer_len, chunk_size)`.
fn byte_sizes(size_mib: usize, chunk_kib: usize) -> Result<(usize, usize)> {
    if chunk_kib == 0 {
        bail!("--chunk-kib must be greater than zero");
    }
    let Some(chunk_size) = chunk_kib.checked_mul(1024) else {
        bail!("--chunk-kib {chunk_kib} is too large");
    };
    let Some(buffer_len) = size_mib.checked_mul(MIB) else {
        bail!("--size-mib {size_mib} is too large");
    };
    Ok((buffer_len, chunk_size))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (buffer_len, chunk_size) = byte_sizes(cli.size_mib, cli.chunk_kib)?;

    let fan_out = cli.workers.map(FanOut::from_workers).unwrap_or_default();
    let config = PipelineConfig::default()
        .with_chunk_size(chunk_size)
        .with_fan_out(fan_out)
        .with_cipher(cli.cipher)
        .with_digest(cli.digest);

    let key = parse_key(cli.key_hex.as_deref())?;
    let pipeline = ChunkPipeline::new(&key, config)?;

    info!(size_mib = cli.size_mib, "building test buffer");
    let started = Instant::now();
    let buffer = pipeline.ingest(random_buffer(buffer_len));
    info!(digest = %buffer.digest().short_hex(16), elapsed = ?started.elapsed(), "buffer ingested");

    let run = run_comparison(&pipeline, &buffer)?;

    match cli.format {
        OutputFormat::Text => display::print_text(&run, pipeline.config()),
        OutputFormat::Json => println!("{}", run.report.to_json_pretty()?),
    }

    if !run.report.consistent {
        bail!("serial and parallel runs disagree");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sizes_convert_units() {
        assert_eq!(byte_sizes(100, 2048).unwrap(), (100 * MIB, 2 * MIB));
        assert_eq!(byte_sizes(0, 1).unwrap(), (0, 1024));
    }

    #[test]
    fn byte_sizes_reject_overflow_and_zero_chunk() {
        assert!(byte_sizes(usize::MAX, 1).is_err());
        assert!(byte_sizes(1, usize::MAX).is_err());
        assert!(byte_sizes(1, 0).is_err());
    }

    #[test]
    fn key_must_be_32_bytes_of_hex() {
        assert!(parse_key(Some("ab".repeat(32).as_str())).is_ok());
        assert!(parse_key(Some("abcd")).is_err());
        assert!(parse_key(Some("not hex")).is_err());
        assert!(parse_key(None).is_ok());
    }
}
