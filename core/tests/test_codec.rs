// # 📂 crypto: ChunkCodec, ChunkKey, digests

// * ✅ round trip for both suites
// * ✅ fresh nonce per seal
// * ✅ tampering and truncation are rejected
// * ✅ key length enforcement
// * ✅ digest algorithms and integrity verification

#[cfg(test)]
mod tests {
    use chunkcrypt_core::constants::{NONCE_LEN_12, TAG_LEN};
    use chunkcrypt_core::crypto::{
        ChunkCodec, ChunkKey, CipherSuite, ContentDigest, CryptoError, DigestAlg, IntegrityVerifier,
    };

    const SUITES: [CipherSuite; 2] = [CipherSuite::Aes256Gcm, CipherSuite::ChaCha20Poly1305];

    fn key() -> ChunkKey {
        ChunkKey::new([0x42; 32])
    }

    // ------------------------------------------------------------
    // AEAD
    // ------------------------------------------------------------
    #[test]
    fn round_trip_both_suites() {
        let msg = b"the quick brown fox jumps over the lazy dog";
        for suite in SUITES {
            let codec = ChunkCodec::new(&key(), suite);
            let sealed = codec.encrypt(msg).unwrap();
            assert_eq!(sealed.len(), msg.len() + ChunkCodec::overhead());
            assert_eq!(codec.decrypt(&sealed).unwrap(), msg.to_vec(), "{suite}");
        }
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let codec = ChunkCodec::new(&key(), CipherSuite::Aes256Gcm);
        let sealed = codec.encrypt(&[]).unwrap();
        assert_eq!(sealed.len(), NONCE_LEN_12 + TAG_LEN);
        assert!(codec.decrypt(&sealed).unwrap().is_empty());
    }

    #[test]
    fn nonce_is_fresh_per_call() {
        let codec = ChunkCodec::new(&key(), CipherSuite::Aes256Gcm);
        let a = codec.encrypt(b"same input").unwrap();
        let b = codec.encrypt(b"same input").unwrap();
        assert_ne!(a[..NONCE_LEN_12], b[..NONCE_LEN_12]);
        assert_ne!(a, b);
    }

    #[test]
    fn flipped_byte_fails_authentication() {
        for suite in SUITES {
            let codec = ChunkCodec::new(&key(), suite);
            let mut sealed = codec.encrypt(b"payload bytes under test").unwrap();
            sealed[NONCE_LEN_12 + 3] ^= 0xFF;
            let err = codec.decrypt(&sealed).unwrap_err();
            assert_eq!(err, CryptoError::TagMismatch);
            assert!(err.is_authentication());
        }
    }

    #[test]
    fn flipped_tag_fails_authentication() {
        let codec = ChunkCodec::new(&key(), CipherSuite::ChaCha20Poly1305);
        let mut sealed = codec.encrypt(b"payload").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert_eq!(codec.decrypt(&sealed).unwrap_err(), CryptoError::TagMismatch);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let codec = ChunkCodec::new(&key(), CipherSuite::Aes256Gcm);
        let err = codec.decrypt(&[0u8; 5]).unwrap_err();
        assert_eq!(err, CryptoError::Truncated { min: NONCE_LEN_12, actual: 5 });
        assert!(err.is_authentication());
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let sealed = ChunkCodec::new(&key(), CipherSuite::Aes256Gcm).encrypt(b"secret").unwrap();
        let other = ChunkCodec::new(&ChunkKey::new([0x24; 32]), CipherSuite::Aes256Gcm);
        assert_eq!(other.decrypt(&sealed).unwrap_err(), CryptoError::TagMismatch);
    }

    #[test]
    fn key_length_is_enforced() {
        assert!(ChunkKey::from_slice(&[0u8; 32]).is_ok());
        let err = ChunkKey::from_slice(&[0u8; 16]).unwrap_err();
        assert_eq!(err, CryptoError::InvalidKeyLen { expected: 32, actual: 16 });
    }

    #[test]
    fn key_debug_is_redacted() {
        let dbg = format!("{:?}", key());
        assert!(!dbg.contains("42"));
    }

    #[test]
    fn cipher_suite_parsing() {
        assert_eq!("aes-256-gcm".parse::<CipherSuite>().unwrap(), CipherSuite::Aes256Gcm);
        assert_eq!("ChaCha".parse::<CipherSuite>().unwrap(), CipherSuite::ChaCha20Poly1305);
        assert!("des".parse::<CipherSuite>().is_err());
    }

    // ------------------------------------------------------------
    // Digests
    // ------------------------------------------------------------
    #[test]
    fn digest_lengths() {
        assert_eq!(ContentDigest::compute(DigestAlg::Sha256, b"x").bytes.len(), 32);
        assert_eq!(ContentDigest::compute(DigestAlg::Sha512, b"x").bytes.len(), 64);
        assert_eq!(ContentDigest::compute(DigestAlg::Blake3, b"x").bytes.len(), 32);
    }

    #[test]
    fn sha256_known_vector() {
        let d = ContentDigest::compute(DigestAlg::Sha256, b"abc");
        assert_eq!(
            d.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(d.short_hex(8), "ba7816bf");
        assert!(d.to_string().starts_with("sha256:"));
    }

    #[test]
    fn verifier_matches_and_mismatches() {
        let original = ContentDigest::compute(DigestAlg::Blake3, b"hello world");
        assert!(IntegrityVerifier::verify(&original, b"hello world").verified);

        let v = IntegrityVerifier::verify(&original, b"hello worle");
        assert!(!v.verified);
        assert_eq!(v.reconstructed.algorithm, DigestAlg::Blake3);
    }

    #[test]
    fn digest_alg_names() {
        assert_eq!("SHA512".parse::<DigestAlg>().unwrap(), DigestAlg::Sha512);
        assert!("md5".parse::<DigestAlg>().is_err());
    }
}
