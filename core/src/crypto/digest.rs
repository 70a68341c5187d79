use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256, Sha512};
use thiserror::Error;

/// Digest-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("unknown digest algorithm name: {0}")]
    UnknownName(String),
}

/// Supported digest algorithms (extensible).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlg {
    #[default]
    Sha256,
    Sha512,
    Blake3, // unkeyed
}

impl std::str::FromStr for DigestAlg {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlg::Sha256),
            "sha512" | "sha-512" => Ok(DigestAlg::Sha512),
            "blake3" => Ok(DigestAlg::Blake3),
            other => Err(DigestError::UnknownName(other.to_string())),
        }
    }
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DigestAlg::Sha256 => "sha256",
            DigestAlg::Sha512 => "sha512",
            DigestAlg::Blake3 => "blake3",
        };
        f.write_str(name)
    }
}

/// Fixed-size fingerprint of a whole buffer, tagged with its algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    pub algorithm: DigestAlg,
    pub bytes: Vec<u8>,
}

impl ContentDigest {
    pub fn compute(algorithm: DigestAlg, data: &[u8]) -> Self {
        let bytes = match algorithm {
            DigestAlg::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlg::Sha512 => Sha512::digest(data).to_vec(),
            DigestAlg::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        };
        Self { algorithm, bytes }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// First `n` hex characters, for log lines.
    pub fn short_hex(&self, n: usize) -> String {
        let mut h = self.to_hex();
        h.truncate(n);
        h
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Outcome of comparing a reconstructed buffer against the ingested digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub reconstructed: ContentDigest,
    pub verified: bool,
}

/// Whole-buffer integrity check.
///
/// This compares content fingerprints, not secrets, so a plain equality is
/// used rather than a constant-time comparison.
pub struct IntegrityVerifier;

impl IntegrityVerifier {
    pub fn verify(original: &ContentDigest, reconstructed: &[u8]) -> Verification {
        let reconstructed = ContentDigest::compute(original.algorithm, reconstructed);
        let verified = reconstructed == *original;
        Verification { reconstructed, verified }
    }
}
