use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Optional configuration read from `~/.config/relay/config.toml`.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Seconds to wait for the TCP/TLS connection of a remote fetch.
    pub connect_timeout_secs: u64,
    /// Whole-transfer limit in seconds (None = wait indefinitely).
    pub timeout_secs: Option<u64>,
    /// Follow 3xx redirects on remote fetches.
    pub follow_redirects: bool,
    /// Maximum number of redirects to follow when `follow_redirects` is set.
    pub max_redirects: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: None,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

/// Location of an existing config file, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("relay")?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

/// Load configuration from disk, falling back to defaults when no file exists.
/// Nothing is written: the tool keeps no persistent state. An unreadable or
/// malformed file is logged and replaced by defaults, so only read, fetch and
/// write failures end a run.
pub fn load_or_default() -> RelayConfig {
    match config_path() {
        Ok(Some(path)) => load_from_or_default(&path),
        Ok(None) => {
            tracing::debug!("no config file found, using defaults");
            RelayConfig::default()
        }
        Err(e) => {
            tracing::debug!("config dir unavailable ({:#}), using defaults", e);
            RelayConfig::default()
        }
    }
}

/// [`load_from`] with the fallback of [`load_or_default`].
pub fn load_from_or_default(path: &Path) -> RelayConfig {
    load_from(path).unwrap_or_else(|e| {
        tracing::warn!("ignoring config: {:#}", e);
        RelayConfig::default()
    })
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RelayConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: RelayConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
