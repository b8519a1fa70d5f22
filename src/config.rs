use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub results: ResultsSettings,
    #[serde(default)]
    pub smart_pick: SmartPickSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Dataset locations; the bundled dataset is used when both are unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    pub games_path: Option<String>,
    pub draws_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub l1_cache_size: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultsSettings {
    #[serde(default = "default_results_limit")]
    pub default_limit: usize,
    #[serde(default = "default_results_max_limit")]
    pub max_limit: usize,
}

impl Default for ResultsSettings {
    fn default() -> Self {
        Self {
            default_limit: default_results_limit(),
            max_limit: default_results_max_limit(),
        }
    }
}

fn default_results_limit() -> usize { 10 }
fn default_results_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct SmartPickSettings {
    #[serde(default = "default_pick_count")]
    pub default_count: usize,
    #[serde(default = "default_pick_max_count")]
    pub max_count: usize,
}

impl Default for SmartPickSettings {
    fn default() -> Self {
        Self {
            default_count: default_pick_count(),
            max_count: default_pick_max_count(),
        }
    }
}

fn default_pick_count() -> usize { 5 }
fn default_pick_max_count() -> usize { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LOTTO__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LOTTO__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("LOTTO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
