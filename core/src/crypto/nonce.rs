// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random per-call nonce generation.
//!
//! Every seal draws a fresh 12-byte nonce from the OS RNG. Nothing is derived
//! from chunk position, so repeated runs over the same buffer never reuse a
//! (key, nonce) pair except with negligible probability (2^-96 per pair).

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::NONCE_LEN_12;

/// Draw a fresh 12-byte AEAD nonce. Consumed by exactly one seal.
#[inline]
pub fn random_nonce_12() -> [u8; NONCE_LEN_12] {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Split a sealed blob into `(nonce, ciphertext_and_tag)`.
///
/// Returns `None` when the blob cannot even hold the nonce.
#[inline]
pub fn split_nonce(sealed: &[u8]) -> Option<(&[u8], &[u8])> {
    if sealed.len() < NONCE_LEN_12 {
        return None;
    }
    Some(sealed.split_at(NONCE_LEN_12))
}
