use bytes::Bytes;

use crate::crypto::{ContentDigest, DigestAlg};

/// One contiguous, ordered slice of the input buffer.
///
/// `data` is a cheap `Bytes` view into the buffer; cloning a chunk never
/// copies payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub data: Bytes,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A buffer accepted for processing, with its digest taken at ingestion.
///
/// The digest is computed exactly once, before any chunking, and is the
/// reference every strategy verifies against.
#[derive(Debug, Clone)]
pub struct IngestedBuffer {
    data: Bytes,
    digest: ContentDigest,
}

impl IngestedBuffer {
    pub fn new(data: impl Into<Bytes>, alg: DigestAlg) -> Self {
        let data = data.into();
        let digest = ContentDigest::compute(alg, &data);
        Self { data, digest }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
