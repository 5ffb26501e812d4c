//! hexsrv configuration
//!
//! Layered with figment: built-in defaults, then the YAML file (when it
//! exists), then `HEXSRV_` environment variables (`__` separates sections).

use std::path::Path;

use errors::{HexError, HexResult};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Default API port
pub const DEFAULT_PORT: u16 = 6010;
/// Default configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/hexsrv.yaml";
/// Environment variable prefix
pub const ENV_PREFIX: &str = "HEXSRV_";

/// Service section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "hexsrv".to_string(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Daily-rolling log file directory; console only when unset
    pub dir: Option<String>,
    pub enable_json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            enable_json: false,
        }
    }
}

/// Bridge command section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Register `load_hex`
    pub allow_file_access: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            allow_file_access: true,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub bridge: BridgeConfig,
}

impl Config {
    /// Load configuration from `path` (or [`DEFAULT_CONFIG_PATH`]) and the environment
    pub fn load(path: Option<&Path>) -> HexResult<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| HexError::Configuration(format!("Failed to load configuration: {}", e)))
    }

    /// Check configuration completeness
    pub fn validate(&self) -> HexResult<()> {
        if self.service.name.trim().is_empty() {
            return Err(HexError::Configuration(
                "Service name cannot be empty".to_string(),
            ));
        }
        if self.service.host.trim().is_empty() {
            return Err(HexError::Configuration(
                "Service host cannot be empty".to_string(),
            ));
        }
        if self.service.port == 0 {
            return Err(HexError::Configuration(
                "Service port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}
