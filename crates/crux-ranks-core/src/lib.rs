pub mod config;
pub mod logging;

pub mod digest;
pub mod import;
pub mod rank_url;
pub mod shard;
pub mod store;

pub use rank_url::{BaseLocation, RankUrlResolver, ResolveError};
pub use shard::DomainShard;
pub use store::{RankRecord, RankStore, StoreError, StoreMetadata};
