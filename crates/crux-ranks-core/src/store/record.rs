//! Per-domain rank record.
//!
//! On disk a record is a two-element JSON array:
//! `["example.com", {"202409": [1200, 5000], "202410": [1180, 5000]}]`
//! i.e. the domain followed by a map from CrUX month to
//! `[global_rank, local_rank]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Global and local rank for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRank(pub u64, pub u64);

impl MonthRank {
    pub fn global(&self) -> u64 {
        self.0
    }

    pub fn local(&self) -> u64 {
        self.1
    }
}

type RawRecord = (String, BTreeMap<String, MonthRank>);

/// Rank history of one domain, keyed by `yyyymm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "RawRecord")]
pub struct RankRecord {
    pub domain: String,
    pub months: BTreeMap<String, MonthRank>,
}

impl From<RawRecord> for RankRecord {
    fn from((domain, months): RawRecord) -> Self {
        Self { domain, months }
    }
}

impl From<RankRecord> for RawRecord {
    fn from(r: RankRecord) -> Self {
        (r.domain, r.months)
    }
}

impl RankRecord {
    /// Empty history for `domain`.
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            months: BTreeMap::new(),
        }
    }

    /// Set (or replace) the ranks for `yyyymm`.
    pub fn set_month(&mut self, yyyymm: u32, global_rank: u64, local_rank: u64) {
        self.months
            .insert(yyyymm.to_string(), MonthRank(global_rank, local_rank));
    }

    pub fn month(&self, yyyymm: u32) -> Option<MonthRank> {
        self.months.get(&yyyymm.to_string()).copied()
    }

    /// Most recent month present, if any.
    pub fn latest(&self) -> Option<(&str, MonthRank)> {
        self.months
            .iter()
            .next_back()
            .map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_domain_then_month_map() {
        let mut r = RankRecord::new("example.com");
        r.set_month(202409, 1200, 5000);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["example.com",{"202409":[1200,5000]}]"#);
    }

    #[test]
    fn parses_existing_file_format() {
        let json = r#"["mozilla.org", {"202401": [1000, 1000], "202402": [5000, 1000]}]"#;
        let r: RankRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.domain, "mozilla.org");
        assert_eq!(r.month(202402), Some(MonthRank(5000, 1000)));
        assert_eq!(r.latest(), Some(("202402", MonthRank(5000, 1000))));
    }

    #[test]
    fn set_month_replaces_same_month() {
        let mut r = RankRecord::new("a.test");
        r.set_month(202409, 10, 20);
        r.set_month(202409, 11, 21);
        assert_eq!(r.months.len(), 1);
        assert_eq!(r.month(202409).unwrap().global(), 11);
        assert_eq!(r.month(202409).unwrap().local(), 21);
    }

    #[test]
    fn rejects_object_shape() {
        let json = r#"{"domain": "a.test", "months": {}}"#;
        assert!(serde_json::from_str::<RankRecord>(json).is_err());
    }
}
