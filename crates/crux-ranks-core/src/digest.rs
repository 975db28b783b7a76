//! Domain digest used as the shard key.
//!
//! Rank records are addressed by the SHA-1 of the domain's UTF-8 bytes. The
//! digest primitive sits behind [`DomainDigest`] so hosts without a usable
//! SHA-1 can report that instead of producing a wrong path.

use sha1::{Digest, Sha1};

use crate::rank_url::ResolveError;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// A source of SHA-1 digests.
pub trait DomainDigest: Send + Sync {
    /// Digest `bytes`, or fail with [`ResolveError::EnvironmentUnsupported`].
    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN], ResolveError>;
}

/// RustCrypto SHA-1. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Digest;

impl DomainDigest for Sha1Digest {
    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN], ResolveError> {
        Ok(sha1_bytes(bytes))
    }
}

/// SHA-1 of `bytes`.
pub fn sha1_bytes(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// SHA-1 of the domain's UTF-8 bytes as 40 lowercase hex chars.
pub fn sha1_hex(domain: &str) -> String {
    hex::encode(sha1_bytes(domain.as_bytes()))
}
