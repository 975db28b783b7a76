//! `ranks/latest.json`: which CrUX month the store currently holds.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// CrUX month as `yyyymm`, e.g. `202409`.
    pub date: u32,
}

impl StoreMetadata {
    /// Load metadata from `path`. A missing or unparsable file yields `None`
    /// so the next import simply runs; any other read failure is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read store metadata: {}", path.display()))
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(meta) => Ok(Some(meta)),
            Err(e) => {
                tracing::warn!("ignoring unparsable store metadata {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    /// Save to `path` as pretty JSON (creates parent dir if needed).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize store metadata")?;
        std::fs::write(path, json)
            .with_context(|| format!("write store metadata: {}", path.display()))?;
        Ok(())
    }

    /// Whether importing `target` is needed given the `current` metadata.
    pub fn needs_update(current: Option<&StoreMetadata>, target: u32, force: bool) -> bool {
        if force {
            return true;
        }
        match current {
            Some(meta) => meta.date < target,
            None => true,
        }
    }
}
