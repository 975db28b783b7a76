//! `crux-ranks path <domain>` – show digest and shard path.

use crux_ranks_core::DomainShard;

pub fn run_path(domain: &str) {
    let shard = DomainShard::of(domain);
    println!("{}  {}", shard.hex(), shard.relative_path());
}
