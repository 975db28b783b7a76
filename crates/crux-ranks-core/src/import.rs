//! Import one CrUX month of rank rows into a [`RankStore`].
//!
//! Input is JSON Lines, one row per host:
//!
//! ```text
//! {"host": "example.com", "global_rank": 1000, "local_rank": 5000}
//! ```
//!
//! The store's `latest.json` is only updated after every row is written, so
//! an interrupted import is retried in full on the next run.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::store::{RankStore, StoreMetadata};

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankRow {
    pub host: String,
    pub global_rank: u64,
    pub local_rank: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// CrUX month being imported, `yyyymm`.
    pub yyyymm: u32,
    /// Import even if the store already holds this month or a later one.
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written to the store.
    pub rows: u64,
    /// True when nothing was done because the store was already current.
    pub skipped_up_to_date: bool,
}

/// Import the JSON Lines file at `input` into `store`.
pub fn import_jsonl(store: &RankStore, input: &Path, opts: &ImportOptions) -> Result<ImportSummary> {
    let meta_path = store.metadata_path();
    let current = StoreMetadata::load(&meta_path)?;

    if !StoreMetadata::needs_update(current.as_ref(), opts.yyyymm, opts.force) {
        if let Some(meta) = current {
            tracing::info!("already up to date with CrUX data from {}", meta.date);
        }
        return Ok(ImportSummary {
            rows: 0,
            skipped_up_to_date: true,
        });
    }

    let total = count_rows(open(input)?)
        .with_context(|| format!("count rows: {}", input.display()))?;
    tracing::info!("have {} total domains in {}", total, input.display());

    let rows = import_rows(store, open(input)?, total, opts.yyyymm)
        .with_context(|| format!("import {}", input.display()))?;

    StoreMetadata { date: opts.yyyymm }.save(&meta_path)?;
    tracing::info!("imported {} domains for {}", rows, opts.yyyymm);

    Ok(ImportSummary {
        rows,
        skipped_up_to_date: false,
    })
}

/// Write every row from `reader` into `store` under `yyyymm`.
///
/// `total` is only used for progress logging. Blank lines are skipped; a
/// malformed line aborts the import.
pub fn import_rows<R: BufRead>(store: &RankStore, reader: R, total: u64, yyyymm: u32) -> Result<u64> {
    let mut written: u64 = 0;
    let mut last_percent: u64 = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let row: RankRow =
            serde_json::from_str(&line).with_context(|| format!("parse line {line_no}"))?;

        if total > 0 {
            let percent = 100 * written / total;
            if percent != last_percent {
                tracing::info!("{}%", percent);
                last_percent = percent;
            }
        }

        store.write_rank(yyyymm, &row.host, row.global_rank, row.local_rank)?;
        written += 1;
    }

    Ok(written)
}

/// Number of non-blank lines.
fn count_rows<R: BufRead>(reader: R) -> Result<u64> {
    let mut n = 0;
    for line in reader.lines() {
        if !line?.trim().is_empty() {
            n += 1;
        }
    }
    Ok(n)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(BufReader::new(f))
}
