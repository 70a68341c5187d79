//! Test buffers for benchmark runs.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::KEY_LEN_32;
use crate::crypto::ChunkKey;

/// `len` bytes from the thread-local RNG.
pub fn random_buffer(len: usize) -> Bytes {
    let mut buf = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut buf);
    Bytes::from(buf)
}

/// Reproducible buffer for tests and benches.
pub fn seeded_buffer(len: usize, seed: u64) -> Bytes {
    let mut buf = vec![0u8; len];
    StdRng::seed_from_u64(seed).fill_bytes(&mut buf);
    Bytes::from(buf)
}

/// Throwaway key for a benchmark session. Not a key-management facility.
pub fn random_key() -> ChunkKey {
    let mut key = [0u8; KEY_LEN_32];
    rand::thread_rng().fill_bytes(&mut key);
    ChunkKey::new(key)
}
