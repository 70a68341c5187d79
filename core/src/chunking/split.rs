use bytes::Bytes;

use crate::chunking::types::Chunk;
use crate::types::PipelineError;

/// Partition `buffer` into `ceil(len / chunk_size)` ordered chunks.
///
/// The last chunk may be shorter than `chunk_size`. An empty buffer yields no
/// chunks. A zero chunk size is rejected before anything is produced.
pub fn split(buffer: &Bytes, chunk_size: usize) -> Result<Vec<Chunk>, PipelineError> {
    if chunk_size == 0 {
        return Err(PipelineError::Configuration(
            "chunk size must be greater than zero".into(),
        ));
    }

    let count = buffer.len().div_ceil(chunk_size);
    let mut chunks = Vec::with_capacity(count);

    let mut start = 0;
    while start < buffer.len() {
        let end = (start + chunk_size).min(buffer.len());
        chunks.push(Chunk {
            index: chunks.len(),
            data: buffer.slice(start..end), // 🔥 zero-copy
        });
        start = end;
    }

    debug_assert_eq!(chunks.len(), count);
    Ok(chunks)
}
