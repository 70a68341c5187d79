//! Hooks on sealed chunk bytes between encrypt and decrypt.
//!
//! Used to inject faults (bit flips, truncation) into an otherwise normal run
//! and observe how the pipeline reports them.

/// Inspects or rewrites a chunk's sealed bytes before they are opened.
///
/// Called once per chunk, from whichever thread owns that chunk.
pub trait CiphertextTap: Send + Sync {
    fn intercept(&self, index: usize, sealed: &mut Vec<u8>);
}

/// XOR one byte of one chunk's sealed output with `0xFF`.
#[derive(Debug, Clone, Copy)]
pub struct FlipByte {
    pub chunk_index: usize,
    /// Offset into `nonce || ciphertext || tag`. Out-of-range offsets are ignored.
    pub offset: usize,
}

impl CiphertextTap for FlipByte {
    fn intercept(&self, index: usize, sealed: &mut Vec<u8>) {
        if index != self.chunk_index {
            return;
        }
        if let Some(b) = sealed.get_mut(self.offset) {
            *b ^= 0xFF;
        }
    }
}

/// Cut one chunk's sealed output down to `keep` bytes.
#[derive(Debug, Clone, Copy)]
pub struct Truncate {
    pub chunk_index: usize,
    pub keep: usize,
}

impl CiphertextTap for Truncate {
    fn intercept(&self, index: usize, sealed: &mut Vec<u8>) {
        if index == self.chunk_index {
            sealed.truncate(self.keep);
        }
    }
}
