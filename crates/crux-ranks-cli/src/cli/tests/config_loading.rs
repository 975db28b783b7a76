//! Commands that do not read the config must work with a broken config.toml.

use super::parse;

#[tokio::test]
async fn broken_config_only_affects_commands_that_read_it() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_dir = dir.path().join("crux-ranks");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "base_url = [not valid").unwrap();
    // Only test in this crate that touches XDG_CONFIG_HOME.
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    parse(&["crux-ranks", "path", "example.com"])
        .dispatch()
        .await
        .unwrap();
    parse(&["crux-ranks", "completions", "bash"])
        .dispatch()
        .await
        .unwrap();
    parse(&["crux-ranks", "url", "--base-url", "https://cdn.test", "example.com"])
        .dispatch()
        .await
        .unwrap();

    let store = dir.path().join("store");
    let store = store.to_str().unwrap();
    assert!(parse(&["crux-ranks", "show", "example.com", "--data-dir", store])
        .dispatch()
        .await
        .is_err());
    assert!(parse(&["crux-ranks", "url", "example.com"])
        .dispatch()
        .await
        .is_err());
}
