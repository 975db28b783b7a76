//! Two-level shard layout for per-domain rank records.
//!
//! A domain's record lives at
//! `ranks/domains/<hex[0..2]>/<hex[2..4]>/<hex[4..40]>.json`, where `hex` is
//! the lowercase SHA-1 of the domain. That gives 256 x 256 directories with a
//! 36-char file stem in each.

use std::path::{Path, PathBuf};

use crate::digest::{self, DIGEST_LEN};

/// Directory (relative to the store root) that holds the shard tree.
pub const DOMAINS_DIR: &str = "ranks/domains";

/// Extension of every record file.
const RECORD_EXT: &str = "json";

/// Shard location of one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainShard {
    hex: String,
}

impl DomainShard {
    /// Compute the shard for `domain`. The domain is hashed as given.
    pub fn of(domain: &str) -> Self {
        Self {
            hex: digest::sha1_hex(domain),
        }
    }

    /// Build a shard from an already computed digest.
    pub fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        Self {
            hex: hex::encode(digest),
        }
    }

    /// Full digest as 40 lowercase hex chars.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// First-level dir, second-level dir, file stem.
    pub fn segments(&self) -> (&str, &str, &str) {
        (&self.hex[0..2], &self.hex[2..4], &self.hex[4..])
    }

    /// `/`-separated path relative to the store root, suitable for URLs.
    pub fn relative_path(&self) -> String {
        let (a, b, rest) = self.segments();
        format!("{DOMAINS_DIR}/{a}/{b}/{rest}.{RECORD_EXT}")
    }

    /// Directory under `root` that holds this domain's record file.
    pub fn dir_path(&self, root: &Path) -> PathBuf {
        let (a, b, _) = self.segments();
        root.join(DOMAINS_DIR).join(a).join(b)
    }

    /// Record file path under `root`.
    pub fn file_path(&self, root: &Path) -> PathBuf {
        let (_, _, rest) = self.segments();
        self.dir_path(root).join(format!("{rest}.{RECORD_EXT}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_at_2_and_4() {
        let shard = DomainShard::of("example.com");
        assert_eq!(
            shard.segments(),
            ("0c", "aa", "f24ab1a0c33440c06afe99df986365b0781f")
        );
        assert_eq!(shard.segments().2.len(), 36);
    }

    #[test]
    fn relative_path_layout() {
        assert_eq!(
            DomainShard::of("").relative_path(),
            "ranks/domains/da/39/a3ee5e6b4b0d3255bfef95601890afd80709.json"
        );
    }

    #[test]
    fn leading_zero_bytes_keep_two_chars() {
        let shard = DomainShard::of("site166.test");
        let (a, b, _) = shard.segments();
        assert_eq!(a, "05");
        assert_eq!(b, "03");
    }

    #[test]
    fn from_digest_matches_of() {
        let bytes = digest::sha1_bytes(b"wikipedia.org");
        assert_eq!(DomainShard::from_digest(&bytes), DomainShard::of("wikipedia.org"));
    }

    #[test]
    fn file_path_under_root() {
        let root = Path::new("/srv/crux");
        let path = DomainShard::of("mozilla.org").file_path(root);
        assert_eq!(
            path,
            PathBuf::from("/srv/crux/ranks/domains/5a/0d/c96971fd50c9a21bb63cdbe01ed7b91a5b24.json")
        );
    }
}
