//! Configuration loader for Runeforge.
//!
//! Reads `config.toml` from the data directory (`~/.runeforge/` by default)
//! and deserializes it into [`AdvisorConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use runeforge_types::config::AdvisorConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RUNEFORGE_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `RUNEFORGE_DATA_DIR`, then `~/.runeforge`, then `./.runeforge`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".runeforge");
    }

    PathBuf::from(".runeforge")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AdvisorConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_advisor_config(data_dir: &Path) -> AdvisorConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AdvisorConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AdvisorConfig::default();
        }
    };

    match toml::from_str::<AdvisorConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AdvisorConfig::default()
        }
    }
}
