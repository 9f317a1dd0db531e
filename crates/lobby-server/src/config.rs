//! Configuration loading and typed config structures for the lobby service.
//!
//! The canonical configuration lives in `lobby-config.yaml` at the project
//! root; every field has a default, so the file is optional. Environment
//! variables override file values for deployment:
//!
//! - `PORT` overrides `server.port`
//! - `LOBBY_HOST` overrides `server.host`
//! - `LOBBY_ALLOWED_ORIGIN` overrides `server.allowed_origin`

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings (bind address, CORS origin).
    #[serde(default)]
    pub server: ServerSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl ServiceConfig {
    /// Load configuration, treating a missing file as all-defaults.
    ///
    /// Environment overrides are applied in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an existing file cannot be read, or
    /// [`ConfigError::Yaml`] if its content is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yml::from_str::<Self>(&contents)?
        } else {
            Self::default()
        };
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// The single origin allowed to make cross-origin requests.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl ServerSection {
    /// Apply environment variable overrides for deployment.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("PORT") {
            // A PORT that is not a valid port number falls back to the
            // configured value rather than failing startup.
            if let Ok(port) = value.parse::<u16>() {
                self.port = port;
            }
        }
        if let Ok(host) = std::env::var("LOBBY_HOST") {
            self.host = host;
        }
        if let Ok(origin) = std::env::var("LOBBY_ALLOWED_ORIGIN") {
            self.allowed_origin = origin;
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Log level used when `RUST_LOG` is unset
    /// (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

fn default_allowed_origin() -> String {
    String::from("http://localhost:3000")
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.allowed_origin, "http://localhost:3000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: ServiceConfig = serde_yml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.allowed_origin, "http://localhost:3000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = "\
server:
  host: 127.0.0.1
  port: 9000
  allowed_origin: https://lobby.example.com
logging:
  level: debug
";
        let config: ServiceConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.allowed_origin, "https://lobby.example.com");
        assert_eq!(config.logging.level, "debug");
    }
}
