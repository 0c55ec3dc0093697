//! Configuration loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CliError;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Where bundled images live and how they are addressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Asset tree scanned once at start; relative to the config file.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Large-variant directory under `root`.
    #[serde(default = "default_large_dir")]
    pub large_dir: String,
    /// Small-variant directory under `root`.
    #[serde(default = "default_small_dir")]
    pub small_dir: String,
    /// Locator prefix for files under `root`.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Locator used when resolution fails.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// File extensions picked up by the scan (case-insensitive).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Explicit large-variant entries: filename -> locator.
    #[serde(default)]
    pub large: BTreeMap<String, String>,
    /// Explicit small-variant entries: filename -> locator.
    #[serde(default)]
    pub small: BTreeMap<String, String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            large_dir: default_large_dir(),
            small_dir: default_small_dir(),
            public_prefix: default_public_prefix(),
            placeholder: default_placeholder(),
            extensions: default_extensions(),
            large: BTreeMap::new(),
            small: BTreeMap::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("public/img")
}

fn default_large_dir() -> String {
    "menu/lg".to_string()
}

fn default_small_dir() -> String {
    "menu/sm".to_string()
}

fn default_public_prefix() -> String {
    "/img".to_string()
}

fn default_placeholder() -> String {
    menukit_core::DEFAULT_PLACEHOLDER.to_string()
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "svg", "webp"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Load configuration from file; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "loaded configuration");
        config
    } else {
        info!(
            path = %path.display(),
            "configuration file not found, using defaults"
        );
        Config::default()
    };

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.assets.root = base.join(&config.assets.root);
    Ok(config)
}
