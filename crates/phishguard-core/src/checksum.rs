//! SHA-256 fingerprints for loaded model artifacts.
//!
//! Digests are logged at startup and reported by the health endpoint so an
//! operator can tell which exported model a running process is serving.

use sha2::{Digest, Sha256};

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// First 12 hex chars of a digest, for log lines.
pub fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
