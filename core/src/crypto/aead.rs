// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! Per-chunk AEAD codec for AES-256-GCM and ChaCha20-Poly1305.
//!
//! Design notes:
//! - Both ciphers use 32-byte keys and 12-byte nonces.
//! - Each seal consumes one fresh random nonce; it is prepended to the output
//!   so the opener can separate it: `nonce(12) || ciphertext || tag(16)`.
//! - Tag verification is constant-time and must fail closed (no partial plaintext).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key as AesKey, Nonce as AesNonce};                // 32-byte key, 12-byte nonce
use chacha20poly1305::{ChaCha20Poly1305, Key as ChaKey, Nonce as ChaNonce}; // 32-byte key, 12-byte nonce

use crate::constants::{NONCE_LEN_12, TAG_LEN};
use crate::crypto::nonce::{random_nonce_12, split_nonce};
use crate::crypto::types::{ChunkKey, CipherSuite, CryptoError};

/// Unified AEAD cipher implementation selected by `CipherSuite`.
#[derive(Clone)]
enum AeadImpl {
    AesGcm(Aes256Gcm),
    ChaCha(ChaCha20Poly1305),
}

/// Stateless chunk codec. Cheap to share by reference across worker threads.
#[derive(Clone)]
pub struct ChunkCodec {
    suite: CipherSuite,
    aead: AeadImpl,
}

impl ChunkCodec {
    pub fn new(key: &ChunkKey, suite: CipherSuite) -> Self {
        let bytes = key.as_bytes();
        let aead = match suite {
            CipherSuite::Aes256Gcm => AeadImpl::AesGcm(Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(bytes))),
            CipherSuite::ChaCha20Poly1305 => AeadImpl::ChaCha(ChaCha20Poly1305::new(ChaKey::from_slice(bytes))),
        };
        Self { suite, aead }
    }

    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    /// Bytes added to every chunk by sealing (nonce + tag).
    pub const fn overhead() -> usize {
        NONCE_LEN_12 + TAG_LEN
    }

    /// Seal `plaintext` under a fresh nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = random_nonce_12();

        let sealed = match &self.aead {
            AeadImpl::AesGcm(cipher) => cipher
                .encrypt(AesNonce::from_slice(&nonce), plaintext)
                .map_err(|_| CryptoError::Encryption("AES-GCM seal failed".into()))?,
            AeadImpl::ChaCha(cipher) => cipher
                .encrypt(ChaNonce::from_slice(&nonce), plaintext)
                .map_err(|_| CryptoError::Encryption("ChaCha20-Poly1305 seal failed".into()))?,
        };

        let mut out = Vec::with_capacity(NONCE_LEN_12 + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    /// Open a blob produced by [`ChunkCodec::encrypt`].
    ///
    /// Fails with `Truncated` when the blob is shorter than the nonce and with
    /// `TagMismatch` when authentication fails.
    pub fn decrypt(&self, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let (nonce, ciphertext_and_tag) = split_nonce(sealed).ok_or(CryptoError::Truncated {
            min: NONCE_LEN_12,
            actual: sealed.len(),
        })?;

        match &self.aead {
            AeadImpl::AesGcm(cipher) => cipher
                .decrypt(AesNonce::from_slice(nonce), ciphertext_and_tag)
                .map_err(|_| CryptoError::TagMismatch),
            AeadImpl::ChaCha(cipher) => cipher
                .decrypt(ChaNonce::from_slice(nonce), ciphertext_and_tag)
                .map_err(|_| CryptoError::TagMismatch),
        }
    }
}
