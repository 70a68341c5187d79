//! Chunking for the round-trip pipeline.
//!
//! Responsibilities:
//! - Partition an ingested buffer into ordered, zero-copy chunks
//! - Reassemble per-chunk outputs strictly in index order
//!
//! Non-responsibilities:
//! - Cryptography
//! - Threading

pub mod types;
pub mod split;
pub mod reconstruct;

pub use types::{Chunk, IngestedBuffer};
pub use split::split;
pub use reconstruct::reconstruct;
