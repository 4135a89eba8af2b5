// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::RewriteTarget;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound fetch behavior
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Word rewriting settings
    #[serde(default)]
    pub rewrite: RewriteConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(AppError::validation("server.bind_addr is empty"));
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be positive"));
        }
        let word = &self.rewrite.word;
        if word.trim().is_empty() {
            return Err(AppError::validation("rewrite.word is empty"));
        }
        if word.chars().any(char::is_whitespace) {
            return Err(AppError::validation(
                "rewrite.word must be a single word without whitespace",
            ));
        }
        if self.rewrite.replacement.trim().is_empty() {
            return Err(AppError::validation("rewrite.replacement is empty"));
        }
        Ok(())
    }

    /// Build the rewrite target from the configured word pair.
    pub fn rewrite_target(&self) -> RewriteTarget {
        RewriteTarget::new(&self.rewrite.word, &self.rewrite.replacement)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory of static UI assets served at the root path
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            public_dir: default_public_dir(),
        }
    }
}

/// Outbound fetch behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Timeout for the whole fetch of one page, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Word rewriting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Word to replace, matched whole-word in three case variants
    #[serde(default = "default_word")]
    pub word: String,

    /// Replacement word, case-shifted to match each variant
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Elements whose subtree is never rewritten
    #[serde(default = "default_skip_tags")]
    pub skip_tags: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            word: default_word(),
            replacement: default_replacement(),
            skip_tags: default_skip_tags(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter (overridable via RUST_LOG)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("faleproxy/{}", env!("CARGO_PKG_VERSION"))
}

fn default_word() -> String {
    "yale".to_string()
}

fn default_replacement() -> String {
    "fale".to_string()
}

fn default_skip_tags() -> Vec<String> {
    vec!["script".to_string(), "style".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}
