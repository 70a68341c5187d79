use thiserror::Error;

use crate::crypto::CryptoError;

/// Crate-level error.
///
/// Only configuration problems abort a run. Per-chunk cryptographic failures
/// are recorded on the chunk's result instead (see `processing::ChunkError`),
/// and an integrity mismatch is reported through `integrity_verified = false`.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid chunk size, fan-out width or other run configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Key construction or other setup-time crypto problem.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Malformed configuration document.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PipelineError::Configuration(_) | PipelineError::ConfigParse(_))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
