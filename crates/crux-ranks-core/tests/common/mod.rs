//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Domains with their SHA-1 digests, covering an empty input, leading zero
/// bytes and non-ASCII hosts.
pub const KNOWN: &[(&str, &str)] = &[
    ("example.com", "0caaf24ab1a0c33440c06afe99df986365b0781f"),
    ("", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    ("site166.test", "050334e5d444f92ab65aab0120a640f594e828d0"),
    ("mozilla.org", "5a0dc96971fd50c9a21bb63cdbe01ed7b91a5b24"),
    ("wikipedia.org", "f4919f7f3bd04d2e24e33e7da004f7638d25dd5e"),
    ("bücher.de", "d1a160e9d365cb6f877642e6bdecfac6d94c7700"),
];

/// Expected rank URL for a digest under `origin`.
pub fn expected_url(origin: &str, hex: &str) -> String {
    format!(
        "{origin}/crux-ranks/ranks/domains/{}/{}/{}.json",
        &hex[0..2],
        &hex[2..4],
        &hex[4..]
    )
}

/// Write `rows` (host, global, local) as a JSON Lines file in `dir`.
pub fn write_rows(dir: &Path, name: &str, rows: &[(&str, u64, u64)]) -> PathBuf {
    let body: String = rows
        .iter()
        .map(|(host, g, l)| {
            serde_json::json!({ "host": host, "global_rank": g, "local_rank": l }).to_string() + "\n"
        })
        .collect();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}
