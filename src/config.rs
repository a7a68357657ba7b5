//! Server configuration.
//!
//! Read once at startup from `MARKDOWN_WRITER_*` environment variables.
//! Unparseable values fall back to their defaults with a warning.

use std::str::FromStr;

use log::LevelFilter;

pub const ENV_LOG_LEVEL: &str = "MARKDOWN_WRITER_LOG_LEVEL";
pub const ENV_SERVER_NAME: &str = "MARKDOWN_WRITER_SERVER_NAME";

pub const DEFAULT_SERVER_NAME: &str = "markdown-writer";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub server_name: String,
    pub server_version: String,
    pub log_level: LevelFilter,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ServerConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!(
                    "CONFIG_INVALID key={} value={:?} default={}",
                    ENV_LOG_LEVEL,
                    raw,
                    config.log_level
                ),
            }
        }

        if let Some(name) = lookup(ENV_SERVER_NAME) {
            let name = name.trim();
            if !name.is_empty() {
                config.server_name = name.to_string();
            }
        }

        config
    }
}
