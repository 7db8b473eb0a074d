use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::MatchOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    #[serde(default)]
    pub data: DataSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Upper bound applied to caller-supplied `maxResults`
    #[serde(default = "default_max_results_limit")]
    pub max_results_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
            max_results_limit: default_max_results_limit(),
        }
    }
}

impl MatchingSettings {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            min_score: self.min_score,
            max_results: self.max_results,
        }
    }
}

fn default_min_score() -> u8 { 50 }
fn default_max_results() -> usize { 15 }
fn default_max_results_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSettings {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Upper bound applied to caller-supplied `maxDepth`
    #[serde(default = "default_max_depth_limit")]
    pub max_depth_limit: usize,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_depth_limit: default_max_depth_limit(),
        }
    }
}

fn default_max_depth() -> usize { 3 }
fn default_max_depth_limit() -> usize { 6 }

/// Optional dataset files; the built-in sample data is used when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    pub investors_path: Option<String>,
    pub network_path: Option<String>,
}

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with DEEPFLOW__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., DEEPFLOW__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("DEEPFLOW")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
