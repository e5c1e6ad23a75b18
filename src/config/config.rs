use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, STORE_KEY_ENV, STORE_URL_ENV};
use crate::engine::WheelSettings;
use crate::error::{ErrorContext, WheelError, WheelResult};
use crate::logging::log_error;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store_url: Option<String>,
    pub api_key: Option<String>,
    pub default_room: Option<String>,
    #[serde(default)]
    pub wheel: WheelSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreCredentials {
    pub url: String,
    pub api_key: String,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Load the user's config. A missing file (or home directory) gives defaults.
pub fn load_config() -> WheelResult<Config> {
    match config_path() {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

/// Like `load_config_from`, but a file that exists and cannot be read is a
/// `ConfigError` naming the file. Callers must not save over it.
pub fn read_config(path: &Path) -> WheelResult<Config> {
    load_config_from(path).map_err(|e| {
        log_error(&format!("Unreadable config at {}: {}", path.display(), e));
        WheelError::ConfigError(format!(
            "{} could not be read ({}). Fix or remove the file and try again.",
            path.display(),
            e
        ))
    })
}

pub fn load_config_from(path: &Path) -> WheelResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&config_str)?;
    Ok(config)
}

pub fn save_config(config: &Config) -> WheelResult<()> {
    let path = config_path()
        .ok_or_else(|| WheelError::ConfigError("Could not find home directory".to_string()))?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> WheelResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Environment variables win over the config file, each value on its own.
pub fn resolve_credentials(
    config: &Config,
    env_url: Option<String>,
    env_key: Option<String>,
) -> WheelResult<StoreCredentials> {
    let url = env_url
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.store_url.clone())
        .ok_or(WheelError::StoreNotConfigured)?;
    let api_key = env_key
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.api_key.clone())
        .ok_or(WheelError::StoreNotConfigured)?;

    Ok(StoreCredentials {
        url: url.trim_end_matches('/').to_string(),
        api_key,
    })
}

/// Credentials for `config` with the process environment applied.
pub fn credentials_from_env(config: &Config) -> WheelResult<StoreCredentials> {
    resolve_credentials(
        config,
        env::var(STORE_URL_ENV).ok(),
        env::var(STORE_KEY_ENV).ok(),
    )
}
