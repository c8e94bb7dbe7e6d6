//! Server configuration parsed from environment variables.

use std::net::IpAddr;
use std::path::PathBuf;

use crate::theme::DEFAULT_STORAGE_KEY;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("THEME_STORAGE_KEY must be non-empty ASCII letters, digits, '-' or '_': {0:?}")]
    StorageKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Cookie and `localStorage` key the theme preference lives under.
    pub storage_key: String,
    pub cookie_secure: bool,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            cookie_secure: false,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `THEME_STORAGE_KEY`: default `theme`
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    /// - `STATIC_DIR`: default `static`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env_parse("BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let port = env_parse("PORT", &DEFAULT_PORT.to_string())?;

        let storage_key = std::env::var("THEME_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_owned());
        validate_storage_key(&storage_key)?;

        let cookie_secure = match std::env::var("COOKIE_SECURE") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            Err(_) => false,
        };

        let static_dir = std::env::var("STATIC_DIR").map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { bind_addr, port, storage_key, cookie_secure, static_dir })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_owned());
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw })
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The key is used verbatim as a cookie name and inside the head script.
fn validate_storage_key(key: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid { Ok(()) } else { Err(ConfigError::StorageKey(key.to_owned())) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
