use crate::source::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the board endpoint.
pub const ENDPOINT_ENV: &str = "KANBAN_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Board endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Preferred output mode: `pretty`, `text` or `json`.
    #[serde(default)]
    pub output: Option<String>,
    /// Default view, as a query string (`grouping=…&ordering=…`).
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub user: UserConfig,
    pub endpoint: String,
    pub query: String,
}

/// Path of the user config file, if a config directory exists.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kanban/config.toml"))
}

/// Load a config file; a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `~/.config/kanban/config.toml` (platform config dir).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(path) = user_config_path() else {
        return Ok(UserConfig::default());
    };
    load_config_from(&path)
}

/// Combine the user config with the environment.
///
/// # Errors
///
/// Returns an error if the config file is malformed.
pub fn resolve_config() -> Result<EffectiveConfig> {
    let user = load_user_config()?;
    let env_endpoint = env::var(ENDPOINT_ENV).ok();
    Ok(effective(user, env_endpoint))
}

fn effective(user: UserConfig, env_endpoint: Option<String>) -> EffectiveConfig {
    let endpoint = resolve_endpoint(env_endpoint, user.endpoint.clone());
    let query = user.query.clone().unwrap_or_default();
    EffectiveConfig {
        user,
        endpoint,
        query,
    }
}

fn resolve_endpoint(env_endpoint: Option<String>, user_endpoint: Option<String>) -> String {
    env_endpoint
        .filter(|value| !value.trim().is_empty())
        .or_else(|| user_endpoint.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
