//! chunkcrypt-core
//!
//! Chunked AEAD round-trip engine with interchangeable serial and fork-join
//! strategies, whole-buffer integrity verification and throughput reporting.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

pub mod crypto;
pub mod telemetry;
pub mod chunking;
pub mod processing;
pub mod benchmark;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::benchmark::{run_comparison, BenchmarkReport, BenchmarkRun};
    pub use crate::chunking::{Chunk, IngestedBuffer};
    pub use crate::config::PipelineConfig;
    pub use crate::crypto::{ChunkCodec, ChunkKey, CipherSuite, ContentDigest, DigestAlg};
    pub use crate::processing::{
        ChunkError, ChunkPipeline, ChunkResult, FanOut, ProcessingResult, RunState, Strategy,
    };
    pub use crate::telemetry::ProcessingStats;
    pub use crate::types::PipelineError;
}
