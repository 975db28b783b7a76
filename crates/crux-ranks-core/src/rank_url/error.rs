//! Errors from base URL setup and rank URL resolution.

use thiserror::Error;

/// Failure to build or run a [`super::RankUrlResolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The SHA-1 primitive is not available in this environment.
    #[error("environment unsupported: {0}")]
    EnvironmentUnsupported(String),
    /// The configured base URL is not an absolute URL with a host.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
