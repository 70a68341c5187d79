//! Run configuration.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides:
//!
//! ```json
//! { "chunk_size": 1048576, "fan_out": "per-chunk", "cipher": "chacha20-poly1305" }
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::crypto::{CipherSuite, DigestAlg};
use crate::processing::FanOut;
use crate::types::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Nominal chunk size in bytes; the last chunk may be shorter.
    pub chunk_size: usize,
    /// Width used by the parallel strategy.
    pub fan_out: FanOut,
    pub cipher: CipherSuite,
    /// Whole-buffer digest used for the integrity check.
    pub digest: DigestAlg,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            fan_out: FanOut::default(),
            cipher: CipherSuite::default(),
            digest: DigestAlg::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn with_cipher(mut self, cipher: CipherSuite) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn with_digest(mut self, digest: DigestAlg) -> Self {
        self.digest = digest;
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_size == 0 {
            return Err(PipelineError::Configuration(
                "chunk size must be greater than zero".into(),
            ));
        }
        self.fan_out.validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
