use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://data.webcompat.example";

/// Global configuration loaded from `~/.config/crux-ranks/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CruxRanksConfig {
    /// Origin the rank tree is published under (only scheme and host are used).
    pub base_url: String,
    /// Root of the local rank store. Defaults to `~/.local/share/crux-ranks`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for CruxRanksConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
        }
    }
}

impl CruxRanksConfig {
    /// Configured data dir, or the XDG data home default.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("crux-ranks")?;
                Ok(xdg_dirs.get_data_home())
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("crux-ranks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CruxRanksConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CruxRanksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CruxRanksConfig = toml::from_str(&data)?;
    Ok(cfg)
}
