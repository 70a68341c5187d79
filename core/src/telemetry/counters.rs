// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters collected while chunks are processed.
//!
//! Summary: success/failure counts and byte totals. The serial loop owns one
//! directly; the fork-join processor shares one behind a `Mutex` and holds
//! the lock only for the increment itself.
//! Converted into an immutable `ProcessingStats` at the end of a run.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkCounters {
    pub successful: u64,
    pub failed: u64,
    pub bytes_plaintext: u64,
    pub bytes_ciphertext: u64,
}

impl ChunkCounters {
    /// Record one chunk that survived encrypt, decrypt and compare.
    ///
    /// - `pt_len`: plaintext length of the chunk
    /// - `ct_len`: sealed length (nonce + ciphertext + tag)
    pub fn add_success(&mut self, pt_len: usize, ct_len: usize) {
        self.successful += 1;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_ciphertext += ct_len as u64;
    }

    /// Record one failed chunk.
    pub fn add_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> u64 {
        self.successful + self.failed
    }
}

/// Counters shared by concurrent tasks.
///
/// Each method takes the lock, bumps a field and releases it; callers never
/// hold the guard across crypto work. A poisoned lock still carries valid
/// counts (increments cannot half-apply), so it is recovered rather than
/// propagated.
#[derive(Debug, Default)]
pub struct SharedCounters {
    inner: Mutex<ChunkCounters>,
}

impl SharedCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&self, pt_len: usize, ct_len: usize) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add_success(pt_len, ct_len);
    }

    pub fn add_failure(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add_failure();
    }

    /// Consume after the join barrier.
    pub fn into_inner(self) -> ChunkCounters {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
