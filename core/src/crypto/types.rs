// ## 📂 File: `src/crypto/types.rs`

use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::KEY_LEN_32;

/// Opaque 32-byte symmetric key supplied by the caller.
///
/// Provisioning and derivation happen elsewhere; this type only enforces
/// the length and keeps the bytes out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ChunkKey([u8; KEY_LEN_32]);

impl ChunkKey {
    pub fn new(bytes: [u8; KEY_LEN_32]) -> Self {
        Self(bytes)
    }

    /// Build a key from a slice. Anything other than exactly 32 bytes is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; KEY_LEN_32] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN_32] {
        &self.0
    }
}

impl fmt::Debug for ChunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChunkKey(<redacted>)")
    }
}

/// Supported AEAD suites. Both use 32-byte keys and 12-byte nonces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherSuite {
    #[default]
    Aes256Gcm,
    ChaCha20Poly1305,
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherSuite::Aes256Gcm        => "aes-256-gcm",
            CipherSuite::ChaCha20Poly1305 => "chacha20-poly1305",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for CipherSuite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes-256-gcm" | "aes256gcm" | "aes" => Ok(CipherSuite::Aes256Gcm),
            "chacha20-poly1305" | "chacha20poly1305" | "chacha" => Ok(CipherSuite::ChaCha20Poly1305),
            other => Err(format!("unsupported cipher suite: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Sealing failed inside the AEAD implementation.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Input shorter than the embedded nonce; nothing to authenticate.
    #[error("ciphertext too short: need at least {min} bytes, got {actual}")]
    Truncated { min: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    #[error("AEAD tag mismatch")]
    TagMismatch,
}

impl CryptoError {
    /// True for decrypt-time failures: tag mismatch or truncated input.
    pub fn is_authentication(&self) -> bool {
        matches!(self, CryptoError::TagMismatch | CryptoError::Truncated { .. })
    }
}
