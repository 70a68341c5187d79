use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;

use crate::crypto::{ContentDigest, CryptoError};
use crate::processing::parallelism::FanOut;
use crate::telemetry::{ChunkCounters, ProcessingStats, StageTimes};

/// Why a single chunk failed its round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("encrypt failed: {0}")]
    Encryption(CryptoError),

    /// Decrypt-time failure: tag mismatch or truncated ciphertext.
    #[error("decrypt failed: {0}")]
    Authentication(CryptoError),

    #[error("integrity check failed: decrypted bytes differ from source chunk")]
    Mismatch,

    #[error("chunk was never processed")]
    NotProcessed,
}

impl ChunkError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ChunkError::Authentication(e) if e.is_authentication())
    }
}

/// Per-chunk outcome, written exactly once by the unit of work owning `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkResult {
    pub index: usize,
    pub success: bool,
    pub error: Option<ChunkError>,
    /// Decrypted bytes; present only on success.
    pub data: Option<Bytes>,
}

impl ChunkResult {
    pub fn ok(index: usize, data: Bytes) -> Self {
        Self { index, success: true, error: None, data: Some(data) }
    }

    pub fn failed(index: usize, error: ChunkError) -> Self {
        Self { index, success: false, error: Some(error), data: None }
    }
}

/// An entry in the error collection published by failing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    pub index: usize,
    pub error: ChunkError,
}

impl fmt::Display for ChunkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk {}: {}", self.index, self.error)
    }
}

/// Execution strategy for the processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Serial,
    Parallel(FanOut),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Serial => f.write_str("serial"),
            Strategy::Parallel(fan_out) => write!(f, "parallel({fan_out})"),
        }
    }
}

/// Run lifecycle shared by both strategies.
///
/// `Created → Splitting → Processing → Reconstructing → Verifying → Reported`.
/// There are no retries; a caller wanting one starts a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Created,
    Splitting,
    Processing,
    Reconstructing,
    Verifying,
    Reported,
}

impl RunState {
    /// The only legal successor, or `None` once terminal.
    pub fn next(self) -> Option<RunState> {
        use RunState::*;
        match self {
            Created        => Some(Splitting),
            Splitting      => Some(Processing),
            Processing     => Some(Reconstructing),
            Reconstructing => Some(Verifying),
            Verifying      => Some(Reported),
            Reported       => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == RunState::Reported
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Created        => "created",
            RunState::Splitting      => "splitting",
            RunState::Processing     => "processing",
            RunState::Reconstructing => "reconstructing",
            RunState::Verifying      => "verifying",
            RunState::Reported       => "reported",
        };
        f.write_str(name)
    }
}

/// What a processor hands back once every chunk has been handled.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Ordered by index, one per input chunk.
    pub results: Vec<ChunkResult>,
    pub counters: ChunkCounters,
    /// Drained error collection (index order not guaranteed).
    pub failures: Vec<ChunkFailure>,
    /// Per-stage time summed over chunks.
    pub stage_times: StageTimes,
    /// Wall-clock time around the whole processing stage.
    pub elapsed: Duration,
}

/// Final, immutable report of one run.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub strategy: Strategy,
    pub chunks: Vec<ChunkResult>,
    pub failures: Vec<ChunkFailure>,
    pub original_digest: ContentDigest,
    pub reconstructed_digest: ContentDigest,
    /// Authoritative correctness signal, independent of per-chunk flags.
    pub integrity_verified: bool,
    pub stats: ProcessingStats,
    pub state: RunState,
}

impl ProcessingResult {
    /// True when every chunk succeeded and the digests match.
    pub fn is_clean(&self) -> bool {
        self.integrity_verified && self.stats.all_succeeded()
    }
}
