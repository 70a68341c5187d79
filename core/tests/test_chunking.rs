// # 📂 chunking: split / reconstruct

// * ✅ chunk count is ceil(len / chunk_size)
// * ✅ last chunk may be short, exact multiples are not padded
// * ✅ empty input and zero chunk size
// * ✅ reconstruction follows index, not arrival order

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use chunkcrypt_core::benchmark::seeded_buffer;
    use chunkcrypt_core::chunking::{reconstruct, split};
    use chunkcrypt_core::processing::{ChunkError, ChunkResult};

    // ------------------------------------------------------------
    // split
    // ------------------------------------------------------------
    #[test]
    fn split_counts_and_sizes() {
        let buf = seeded_buffer(10 * 1024 + 7, 1);
        let chunks = split(&buf, 2048).unwrap();

        assert_eq!(chunks.len(), 6);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.index, i);
        }
        assert!(chunks[..5].iter().all(|c| c.len() == 2048));
        assert_eq!(chunks[5].len(), 7);
    }

    #[test]
    fn split_exact_multiple_has_no_short_tail() {
        let buf = seeded_buffer(8192, 2);
        let chunks = split(&buf, 2048).unwrap();
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.len() == 2048));
    }

    #[test]
    fn split_buffer_smaller_than_chunk() {
        let buf = Bytes::from_static(b"hello");
        let chunks = split(&buf, 1 << 20).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data, buf);
    }

    #[test]
    fn split_empty_buffer_yields_no_chunks() {
        let chunks = split(&Bytes::new(), 2048).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn split_rejects_zero_chunk_size() {
        let err = split(&Bytes::from_static(b"abc"), 0).unwrap_err();
        assert!(err.is_configuration(), "got {err:?}");
    }

    #[test]
    fn split_concatenation_is_identity() {
        let buf = seeded_buffer(5000, 3);
        let chunks = split(&buf, 999).unwrap();
        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
        assert_eq!(joined.as_slice(), buf.as_ref());
    }

    // ------------------------------------------------------------
    // reconstruct
    // ------------------------------------------------------------
    #[test]
    fn reconstruct_orders_by_index() {
        let results = vec![
            ChunkResult::ok(2, Bytes::from_static(b"cc")),
            ChunkResult::ok(0, Bytes::from_static(b"aa")),
            ChunkResult::ok(1, Bytes::from_static(b"bb")),
        ];
        assert_eq!(reconstruct(&results), Bytes::from_static(b"aabbcc"));
    }

    #[test]
    fn reconstruct_skips_failed_chunks() {
        let results = vec![
            ChunkResult::ok(0, Bytes::from_static(b"aa")),
            ChunkResult::failed(1, ChunkError::Mismatch),
            ChunkResult::ok(2, Bytes::from_static(b"cc")),
        ];
        assert_eq!(reconstruct(&results), Bytes::from_static(b"aacc"));
    }

    #[test]
    fn reconstruct_empty() {
        assert!(reconstruct(&[]).is_empty());
    }
}
