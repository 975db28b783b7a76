//! Base location that rank files are served from.

use super::ResolveError;

/// Scheme and host of the server hosting the rank tree.
///
/// Only these two parts are kept: port, path, query and fragment of the
/// configured URL are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLocation {
    scheme: String,
    host: String,
}

impl BaseLocation {
    /// Parse a base location from an absolute URL such as `https://cdn.example`.
    pub fn parse(url: &str) -> Result<Self, ResolveError> {
        let parsed = url::Url::parse(url).map_err(|e| ResolveError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ResolveError::InvalidBaseUrl {
                url: url.to_string(),
                reason: "URL has no host".to_string(),
            })?;
        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
        })
    }

    pub(crate) fn scheme(&self) -> &str {
        &self.scheme
    }

    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    /// `<scheme>://<host>`
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme(), self.host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_scheme_and_host() {
        let base = BaseLocation::parse("https://cdn.test").unwrap();
        assert_eq!(base.scheme(), "https");
        assert_eq!(base.host(), "cdn.test");
        assert_eq!(base.origin(), "https://cdn.test");
    }

    #[test]
    fn drops_port_path_and_query() {
        let base = BaseLocation::parse("http://assets.example:8080/js/ranks.js?v=3#x").unwrap();
        assert_eq!(base.origin(), "http://assets.example");
    }

    #[test]
    fn rejects_relative_url() {
        let err = BaseLocation::parse("/crux-ranks/ranks.js").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_url_without_host() {
        let err = BaseLocation::parse("file:///tmp/ranks.js").unwrap_err();
        match err {
            ResolveError::InvalidBaseUrl { url, reason } => {
                assert_eq!(url, "file:///tmp/ranks.js");
                assert!(reason.contains("no host"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
