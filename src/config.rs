use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Wallet connection and display settings.
///
/// These are the only values the interface edits directly; everything else
/// about an account lives behind the [`crate::account::AccountStore`]
/// collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Phantasma RPC endpoint.
    #[serde(default = "default_phantasma_rpc")]
    pub phantasma_rpc_url: String,
    /// Neo RPC endpoint.
    #[serde(default = "default_neo_rpc")]
    pub neo_rpc_url: String,
    /// Neoscan API endpoint.
    #[serde(default = "default_neoscan")]
    pub neoscan_url: String,
    /// Display currency for token worth (e.g. "USD").
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_phantasma_rpc() -> String {
    "http://localhost:7077/rpc".to_string()
}

fn default_neo_rpc() -> String {
    "http://mainnet2.cityofzion.io:8080".to_string()
}

fn default_neoscan() -> String {
    "https://api.neoscan.io".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            phantasma_rpc_url: default_phantasma_rpc(),
            neo_rpc_url: default_neo_rpc(),
            neoscan_url: default_neoscan(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from file, falling back to defaults (and writing them
    /// out) when no file exists yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {:?}", path))?;
            let settings: Settings =
                toml::from_str(&content).with_context(|| "Failed to parse settings file")?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    /// Save settings to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;
        Ok(())
    }
}

/// Default on-disk location for the settings file.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("specter")
        .join("settings.toml")
}

/// Whether `value` looks like a usable http(s) endpoint: a known scheme and
/// a non-empty host.
pub fn is_valid_url(value: &str) -> bool {
    let rest = if let Some(rest) = value.strip_prefix("https://") {
        rest
    } else if let Some(rest) = value.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    let host = rest.split('/').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");
    !host.is_empty() && !host.contains(char::is_whitespace)
}
