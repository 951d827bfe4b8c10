//! Configuration

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use headline_client::{query::DEFAULT_PAGE_SIZE, Client};
use serde::{Deserialize, Serialize};

/// Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gateway URL
    pub api_url: String,
    /// Articles per page
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Returns the default config path
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("no config directory on this system"))?;
        Ok(dir.join("Headline").join("config.toml"))
    }

    /// Loads the configuration, or the defaults if it is not set
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::default_path()?)?.unwrap_or_default())
    }

    /// Loads the configuration from a file
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let cfg_str = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let cfg = toml::from_str::<Config>(&cfg_str)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(Some(cfg))
    }

    /// Saves the config to the filesystem
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    /// Removes the config from the filesystem
    ///
    /// Returns false if there was nothing to remove.
    pub fn destroy() -> Result<bool> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Returns the API client
    pub fn api_client(&self) -> Client {
        Client::new(&self.api_url).page_size(self.page_size)
    }
}
