//! Configuration loading and management.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server identity.
    pub server: ServerConfig,
    /// Network listen configuration.
    pub listen: ListenConfig,
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name, used in logs.
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "chatterd".to_string(),
        }
    }
}

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:1234").
    pub address: SocketAddr,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:1234".parse().expect("static address"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the server has no required
    /// configuration beyond the listening endpoint, so built-in defaults
    /// apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "chatterd");
        assert_eq!(config.listen.address.port(), 1234);
    }

    #[test]
    fn test_parse_full() {
        let raw = r#"
[server]
name = "chat.example.net"

[listen]
address = "127.0.0.1:5555"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.name, "chat.example.net");
        assert_eq!(config.listen.address.port(), 5555);
    }

    #[test]
    fn test_parse_partial_falls_back() {
        let raw = r#"
[listen]
address = "0.0.0.0:9999"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.name, "chatterd");
        assert_eq!(config.listen.address.port(), 9999);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.listen.address.port(), 1234);
    }
}
