//! Rank URL resolution.
//!
//! Maps a domain to the URL of its precomputed rank record:
//! `<scheme>://<host>/crux-ranks/ranks/domains/<hh>/<hh>/<hh*36>.json`.
//! The mapping is pure and does no network I/O; fetching the record is up to
//! the caller.

mod base;
mod error;

pub use base::BaseLocation;
pub use error::ResolveError;

use crate::digest::{DomainDigest, Sha1Digest};
use crate::shard::DomainShard;

/// Path prefix under the base origin where the rank tree is published.
pub const PUBLISH_PREFIX: &str = "/crux-ranks/";

/// Resolves domains to rank record URLs under a fixed [`BaseLocation`].
#[derive(Debug, Clone)]
pub struct RankUrlResolver<D = Sha1Digest> {
    base: BaseLocation,
    digest: D,
}

impl RankUrlResolver<Sha1Digest> {
    pub fn new(base: BaseLocation) -> Self {
        Self::with_digest(base, Sha1Digest)
    }

    /// Parse `base_url` and build a resolver on top of it.
    pub fn from_base_url(base_url: &str) -> Result<Self, ResolveError> {
        Ok(Self::new(BaseLocation::parse(base_url)?))
    }
}

impl<D: DomainDigest> RankUrlResolver<D> {
    /// Use a custom digest source (e.g. one backed by a platform primitive).
    pub fn with_digest(base: BaseLocation, digest: D) -> Self {
        Self { base, digest }
    }

    pub fn base(&self) -> &BaseLocation {
        &self.base
    }

    /// URL of the rank record for `domain`.
    ///
    /// Any string is accepted and hashed as-is. Fails only when the digest
    /// source reports [`ResolveError::EnvironmentUnsupported`].
    pub async fn resolve(&self, domain: &str) -> Result<String, ResolveError> {
        let digest = self.digest.digest(domain.as_bytes())?;
        let shard = DomainShard::from_digest(&digest);
        tracing::trace!(domain, hex = shard.hex(), "resolved rank shard");
        Ok(self.url_for(&shard))
    }

    /// URL of the record at `shard`.
    pub fn url_for(&self, shard: &DomainShard) -> String {
        format!(
            "{}{}{}",
            self.base.origin(),
            PUBLISH_PREFIX,
            shard.relative_path()
        )
    }
}
