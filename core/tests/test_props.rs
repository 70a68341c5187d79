// # 📂 property tests: split/reconstruct and codec round trips

use bytes::Bytes;
use proptest::prelude::*;

use chunkcrypt_core::chunking::{reconstruct, split};
use chunkcrypt_core::crypto::{ChunkCodec, ChunkKey, CipherSuite};
use chunkcrypt_core::processing::ChunkResult;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn split_then_reconstruct_is_identity(
        data in proptest::collection::vec(any::<u8>(), 0..8192),
        chunk_size in 1usize..3000,
    ) {
        let buf = Bytes::from(data);
        let chunks = split(&buf, chunk_size).unwrap();

        prop_assert_eq!(chunks.len(), buf.len().div_ceil(chunk_size));
        prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= chunk_size));

        // Reverse to make sure ordering comes from the index.
        let results: Vec<ChunkResult> = chunks
            .into_iter()
            .rev()
            .map(|c| ChunkResult::ok(c.index, c.data))
            .collect();
        prop_assert_eq!(reconstruct(&results), buf);
    }

    #[test]
    fn codec_round_trip(
        key in any::<[u8; 32]>(),
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        chacha in any::<bool>(),
    ) {
        let suite = if chacha { CipherSuite::ChaCha20Poly1305 } else { CipherSuite::Aes256Gcm };
        let codec = ChunkCodec::new(&ChunkKey::new(key), suite);
        let sealed = codec.encrypt(&data).unwrap();
        prop_assert_eq!(sealed.len(), data.len() + ChunkCodec::overhead());
        prop_assert_eq!(codec.decrypt(&sealed).unwrap(), data);
    }
}
