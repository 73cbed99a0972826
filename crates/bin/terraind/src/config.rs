//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads `terrain.toml` from the working directory when present; a missing
//! file means all defaults. Environment variables win over file values.

use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "terrain.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    /// Environment overrides that were set but could not be applied.
    #[serde(skip)]
    pub rejected_overrides: Vec<String>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection URL.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load `terrain.toml` (if present), apply environment overrides and
    /// validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply `TERRAIN_*` overrides looked up through `var`. `RUST_LOG` beats
    /// `TERRAIN_LOG`; `TERRAIN_BIND` beats `TERRAIN_HOST`/`TERRAIN_PORT`.
    ///
    /// `TERRAIN_BIND` must be `host:port` with a valid port, otherwise neither
    /// part is applied. Unusable values land in `rejected_overrides`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("TERRAIN_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("TERRAIN_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => self.reject("TERRAIN_PORT", &val),
            }
        }
        if let Some(val) = var("TERRAIN_BIND") {
            match val
                .rsplit_once(':')
                .and_then(|(host, port)| Some((host, port.parse().ok()?)))
            {
                Some((host, port)) => {
                    self.server.host = host.to_string();
                    self.server.port = port;
                }
                None => self.reject("TERRAIN_BIND", &val),
            }
        }
        if let Some(val) = var("TERRAIN_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("TERRAIN_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn reject(&mut self, key: &str, val: &str) {
        self.rejected_overrides.push(format!("{key}={val}"));
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:terrain.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "terraind=info,terrain=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
