//! `crux-ranks show <domain>` – print the stored rank history of a domain.

use anyhow::Result;
use crux_ranks_core::config::CruxRanksConfig;
use crux_ranks_core::RankStore;

pub fn run_show(cfg: &CruxRanksConfig, domain: &str) -> Result<()> {
    let store = RankStore::open_default(cfg)?;
    match store.read_record(domain)? {
        None => println!("No rank record for {domain}."),
        Some(record) => {
            println!("{:<8} {:<12} {}", "MONTH", "GLOBAL", "LOCAL");
            for (month, rank) in &record.months {
                println!("{:<8} {:<12} {}", month, rank.global(), rank.local());
            }
            if let Some((month, rank)) = record.latest() {
                println!("latest: {} global rank {} ({})", month, rank.global(), domain);
            }
        }
    }
    Ok(())
}
