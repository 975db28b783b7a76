//! `crux-ranks url <domain>...` – print rank record URLs.

use anyhow::{Context, Result};
use crux_ranks_core::RankUrlResolver;
use futures::future::try_join_all;

pub async fn run_url(base_url: &str, domains: &[String]) -> Result<()> {
    for url in resolve_all(base_url, domains).await? {
        println!("{url}");
    }
    Ok(())
}

/// Resolve every domain concurrently; results keep input order.
pub(crate) async fn resolve_all(base_url: &str, domains: &[String]) -> Result<Vec<String>> {
    let resolver = RankUrlResolver::from_base_url(base_url)
        .with_context(|| format!("base url: {base_url}"))?;
    tracing::debug!("resolving {} domains under {}", domains.len(), resolver.base().origin());
    let urls = try_join_all(domains.iter().map(|d| resolver.resolve(d))).await?;
    Ok(urls)
}
