//! Configuration loading and management
//!
//! Sources are layered: built-in defaults, then an optional YAML file named by
//! `ORDERS_CONFIG`, then individual environment overrides.

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "ORDERS_CONFIG";
/// Environment override for the MongoDB connection string
pub const MONGO_URI_ENV: &str = "MONGOURI";
/// Environment override for the listen address
pub const BIND_ADDRESS_ENV: &str = "ORDERS_BIND_ADDRESS";

/// Which store backend the server runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    Mongodb,
    InMemory,
}

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    /// Connection string (e.g., "mongodb://localhost:27017")
    pub uri: String,

    /// Database holding the orders collection
    pub database: String,

    /// Collection name
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "restaurant".to_string(),
            collection: "orders".to_string(),
        }
    }
}

/// Complete configuration for the orders service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on
    pub bind_address: String,

    /// Time budget for the store work of a single request
    pub request_timeout_secs: u64,

    pub storage: StorageKind,

    pub mongodb: MongoConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:6000".to_string(),
            request_timeout_secs: 10,
            storage: StorageKind::default(),
            mongodb: MongoConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_PATH_ENV) {
            Some(path) => {
                tracing::info!(path = %path, "Loading configuration file");
                Self::from_yaml_file(&path)?
            }
            None => Self::default(),
        };

        let config = base.with_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Apply the single-value environment overrides
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup(MONGO_URI_ENV) {
            self.mongodb.uri = uri;
        }
        if let Some(addr) = lookup(BIND_ADDRESS_ENV) {
            self.bind_address = addr;
        }
        self
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "bind_address".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.storage == StorageKind::Mongodb {
            for (field, value) in [
                ("mongodb.uri", &self.mongodb.uri),
                ("mongodb.database", &self.mongodb.database),
                ("mongodb.collection", &self.mongodb.collection),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        field: field.to_string(),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
