use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines the natural key shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration abstracts runtime options for the catalog server
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Configuration {
    pub fn new(host: &str, port: u16) -> Self {
        Configuration {
            host: host.to_string(),
            port,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Reads `BOOKS_HOST`, `BOOKS_PORT` and `BOOKS_LOG_LEVEL`, falling back to defaults.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::default();
        if let Some(host) = lookup("BOOKS_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BOOKS_PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| {
                LibraryError::runtime(format!("invalid BOOKS_PORT {:?}: {}", port, err).as_str(),
                                      Some("BOOKS_PORT".to_string()))
            })?;
        }
        if let Some(level) = lookup("BOOKS_LOG_LEVEL") {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!("127.0.0.1", config.host.as_str());
        assert_eq!(3000, config.port);
        assert_eq!("info", config.log_level.as_str());
        assert_eq!("127.0.0.1:3000", config.bind_address());
    }

    #[tokio::test]
    async fn test_should_load_config_from_lookup() {
        let vars = HashMap::from([
            ("BOOKS_HOST", "0.0.0.0"),
            ("BOOKS_PORT", "8080"),
            ("BOOKS_LOG_LEVEL", "debug"),
        ]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string()))
            .expect("should load config");
        assert_eq!("0.0.0.0:8080", config.bind_address());
        assert_eq!("debug", config.log_level.as_str());
    }

    #[tokio::test]
    async fn test_should_default_missing_vars() {
        let config = Configuration::from_lookup(|_| None).expect("should load config");
        assert_eq!(Configuration::default(), config);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_port() {
        let res = Configuration::from_lookup(|k| if k == "BOOKS_PORT" { Some("http".to_string()) } else { None });
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }
}
