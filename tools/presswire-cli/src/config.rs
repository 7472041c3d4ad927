//! CLI configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "presswire.toml";

/// Optional config file so endpoint/key don't have to ride every invocation.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Managed data platform base URL.
    pub endpoint: Option<String>,
    /// Platform API key.
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist; the default path is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::read(Path::new(path)),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::read(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
