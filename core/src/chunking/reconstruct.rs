use std::borrow::Cow;

use bytes::{Bytes, BytesMut};

use crate::processing::types::ChunkResult;

/// Concatenate decrypted chunk data strictly in index order.
///
/// Results without data (failed chunks) contribute no bytes, so a run with
/// failures reconstructs a shorter buffer and fails the integrity check.
pub fn reconstruct(results: &[ChunkResult]) -> Bytes {
    let ordered: Cow<'_, [ChunkResult]> = if results.windows(2).all(|w| w[0].index < w[1].index) {
        Cow::Borrowed(results)
    } else {
        let mut owned = results.to_vec();
        owned.sort_by_key(|r| r.index);
        Cow::Owned(owned)
    };

    let total: usize = ordered
        .iter()
        .filter_map(|r| r.data.as_ref())
        .map(Bytes::len)
        .sum();

    let mut out = BytesMut::with_capacity(total);
    for data in ordered.iter().filter_map(|r| r.data.as_ref()) {
        out.extend_from_slice(data);
    }
    out.freeze()
}
