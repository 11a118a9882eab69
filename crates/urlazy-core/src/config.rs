use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a space inside a query key or value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceEncoding {
    /// `a b` becomes `a+b` (form-urlencoded default).
    #[default]
    Plus,
    /// `a b` becomes `a%20b`.
    Percent,
}

/// Options applied when decoding query strings (optional `[parse]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Keep pairs whose value is empty (`a=` or a bare `a`) as `(key, "")`.
    /// When false they are dropped.
    #[serde(default)]
    pub keep_blank_values: bool,
}

/// Options applied when serializing a URL (optional `[encode]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    #[serde(default)]
    pub space: SpaceEncoding,
}

/// Global configuration loaded from `~/.config/urlazy/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlazyConfig {
    #[serde(default)]
    pub parse: ParseOptions,
    #[serde(default)]
    pub encode: EncodeOptions,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlazy")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlazyConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Load configuration from `path`, writing the defaults there first if it is missing.
pub fn load_or_init_at(path: &Path) -> Result<UrlazyConfig> {
    if !path.exists() {
        let default_cfg = UrlazyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<UrlazyConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlazyConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
