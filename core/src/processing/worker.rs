//! The per-chunk unit of work: encrypt, decrypt, compare.
//!
//! Identical for both strategies. It never touches shared state; the caller
//! decides how to publish the outcome.

use bytes::Bytes;

use crate::chunking::Chunk;
use crate::crypto::ChunkCodec;
use crate::processing::tap::CiphertextTap;
use crate::processing::types::{ChunkError, ChunkResult};
use crate::telemetry::{timed, Stage, StageTimes};

/// Output of one chunk's round trip.
#[derive(Debug)]
pub struct ChunkOutcome {
    pub result: ChunkResult,
    /// Sealed length (nonce + ciphertext + tag); zero if sealing failed.
    pub sealed_len: usize,
    pub stage_times: StageTimes,
}

/// Immutable round-trip context shared by reference across workers.
#[derive(Clone, Copy)]
pub struct RoundTrip<'a> {
    codec: &'a ChunkCodec,
    tap: Option<&'a dyn CiphertextTap>,
}

impl<'a> RoundTrip<'a> {
    pub fn new(codec: &'a ChunkCodec, tap: Option<&'a dyn CiphertextTap>) -> Self {
        Self { codec, tap }
    }

    pub fn run(&self, chunk: &Chunk) -> ChunkOutcome {
        let mut stage_times = StageTimes::default();
        let mut sealed_len = 0;

        let result = match self.stages(chunk, &mut stage_times, &mut sealed_len) {
            Ok(plain) => ChunkResult::ok(chunk.index, plain),
            Err(e) => ChunkResult::failed(chunk.index, e),
        };

        ChunkOutcome { result, sealed_len, stage_times }
    }

    fn stages(
        &self,
        chunk: &Chunk,
        times: &mut StageTimes,
        sealed_len: &mut usize,
    ) -> Result<Bytes, ChunkError> {
        // 1️⃣ Seal under a fresh nonce
        let mut sealed = timed(times, Stage::Encrypt, || self.codec.encrypt(&chunk.data))
            .map_err(ChunkError::Encryption)?;

        if let Some(tap) = self.tap {
            tap.intercept(chunk.index, &mut sealed);
        }
        *sealed_len = sealed.len();

        // 2️⃣ Open
        let plain = timed(times, Stage::Decrypt, || self.codec.decrypt(&sealed))
            .map_err(ChunkError::Authentication)?;

        // 3️⃣ Byte-compare against the source chunk
        let same = timed(times, Stage::Compare, || plain.as_slice() == chunk.data.as_ref());
        if !same {
            return Err(ChunkError::Mismatch);
        }

        Ok(Bytes::from(plain))
    }
}
