//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (HTTP)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Start with the built-in students and courses instead of empty collections
    #[serde(default = "default_seed_data")]
    pub seed_data: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_data() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            seed_data: default_seed_data(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones winning: `config/server.{toml,yaml,json}` if present,
    /// then `ENROLLMENT_*` environment variables (a `.env` file is read first).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_with_base(".")
    }

    /// Same sources as [`ServerConfig::load`], with `config/server` resolved
    /// under `base`. A missing file means defaults; an unreadable one is an error.
    pub fn load_with_base(base: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = base.as_ref().join("config").join("server");

        config::Config::builder()
            .add_source(config::File::with_name(&file.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("ENROLLMENT"))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load server config: {}", e))
    }

    /// Load configuration from a specific file. The format follows the extension.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
