//! On-disk rank store laid out by [`DomainShard`].
//!
//! ```text
//! <root>/ranks/latest.json
//! <root>/ranks/domains/<hh>/<hh>/<hh*36>.json
//! ```
//!
//! Publishing `<root>` under `/crux-ranks/` on the base origin makes every
//! record reachable at the URL produced by [`crate::rank_url::RankUrlResolver`].

mod error;
mod metadata;
mod record;

pub use error::StoreError;
pub use metadata::StoreMetadata;
pub use record::{MonthRank, RankRecord};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CruxRanksConfig;
use crate::shard::DomainShard;

/// Metadata file, relative to the store root.
const METADATA_FILE: &str = "ranks/latest.json";

/// Rank records under a root directory.
#[derive(Debug, Clone)]
pub struct RankStore {
    root: PathBuf,
}

impl RankStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the configured data dir.
    pub fn open_default(cfg: &CruxRanksConfig) -> anyhow::Result<Self> {
        Ok(Self::new(cfg.resolved_data_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }

    /// Record file for `domain`.
    pub fn record_path(&self, domain: &str) -> PathBuf {
        DomainShard::of(domain).file_path(&self.root)
    }

    /// Read the record for `domain`; `None` if it has never been written.
    pub fn read_record(&self, domain: &str) -> Result<Option<RankRecord>, StoreError> {
        let path = self.record_path(domain);
        read_at(&path)
    }

    /// Merge one month's ranks into `domain`'s record and write it back.
    ///
    /// Other months already in the record are kept. Returns the record path.
    pub fn write_rank(
        &self,
        yyyymm: u32,
        domain: &str,
        global_rank: u64,
        local_rank: u64,
    ) -> Result<PathBuf, StoreError> {
        let shard = DomainShard::of(domain);
        let dir = shard.dir_path(&self.root);
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        let path = shard.file_path(&self.root);

        let mut record = read_at(&path)?.unwrap_or_else(|| RankRecord::new(domain));
        if record.domain != domain {
            return Err(StoreError::DomainMismatch {
                expected: domain.to_string(),
                found: record.domain,
                path,
            });
        }
        record.set_month(yyyymm, global_rank, local_rank);

        let json = serde_json::to_vec(&record).map_err(|e| StoreError::json(&path, e))?;
        replace_file(&dir, &path, &json)?;
        Ok(path)
    }
}

/// Write `bytes` to a temp file in `dir` and rename it over `path`, so readers
/// see either the old record or the new one, never a partial write.
fn replace_file(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

fn read_at(path: &Path) -> Result<Option<RankRecord>, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    let record = serde_json::from_slice(&bytes).map_err(|e| StoreError::json(path, e))?;
    Ok(Some(record))
}
