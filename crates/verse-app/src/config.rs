use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// App configuration, stored as TOML inside the data directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
}

impl Config {
    pub fn default_config() -> Self {
        Self { data_dir: "~/.verse".to_string() }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse verse.toml")?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Configured data directory with `~` expanded.
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir).to_string())
    }

    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join("verse.toml")
    }

    pub fn poems_path(data_dir: &Path) -> PathBuf {
        data_dir.join("poems.json")
    }
}
