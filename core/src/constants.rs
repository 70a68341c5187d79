//! constants.rs
//! Sizes and defaults shared across the pipeline.

/// One mebibyte, the unit used for throughput reporting.
pub const MIB: usize = 1024 * 1024;

/// Default chunk size when none is configured (2 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 2 * MIB;

/// Default benchmark buffer size (100 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 100 * MIB;

/// Widest one-thread-per-chunk fan-out. Runs with more chunks than this go
/// through the shared job queue at this width instead.
pub const MAX_PER_CHUNK_TASKS: usize = 1024;

/// Stable key size for both supported AEAD suites.
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;
