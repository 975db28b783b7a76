//! `crux-ranks import <file> --yyyymm N` – load a month of ranks into the store.

use anyhow::Result;
use crux_ranks_core::config::CruxRanksConfig;
use crux_ranks_core::import::{import_jsonl, ImportOptions};
use crux_ranks_core::RankStore;
use std::path::Path;

pub fn run_import(cfg: &CruxRanksConfig, input: &Path, yyyymm: u32, force: bool) -> Result<()> {
    let store = RankStore::open_default(cfg)?;
    tracing::info!("importing {} into {}", input.display(), store.root().display());
    let summary = import_jsonl(&store, input, &ImportOptions { yyyymm, force })?;
    if summary.skipped_up_to_date {
        println!("Already up to date with CrUX data for {yyyymm} (use --force to re-import).");
    } else {
        println!(
            "Imported {} domains for {} into {}",
            summary.rows,
            yyyymm,
            store.root().display()
        );
    }
    Ok(())
}
