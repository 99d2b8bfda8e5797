//! Configuration loading and management
//!
//! The service reads one YAML document. Every section and key is optional;
//! missing values take the defaults below.
//!
//! ```yaml
//! server:
//!   bind: "0.0.0.0:8080"
//! storage:
//!   backend: lmdb        # or in_memory
//!   path: ./data
//!   map_size: 268435456  # LMDB only, bytes
//! auth:
//!   token: secureToken
//! pagination:
//!   max_limit: 100      # optional, no cap when absent
//! ```

use crate::core::auth::DEFAULT_TOKEN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// LMDB map size used when `storage.map_size` is not set (256 MiB)
pub const DEFAULT_MAP_SIZE: usize = 256 * 1024 * 1024;

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Record storage settings
    pub storage: StorageConfig,

    /// Shared-secret settings
    pub auth: AuthConfig,

    /// List endpoint settings
    pub pagination: PaginationConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Which record store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Durable LMDB environment on disk
    Lmdb,
    /// Process memory, lost on exit
    InMemory,
}

impl Default for StorageBackend {
    fn default() -> Self {
        if cfg!(feature = "lmdb") {
            StorageBackend::Lmdb
        } else {
            StorageBackend::InMemory
        }
    }
}

/// Record storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend kind
    pub backend: StorageBackend,

    /// Data directory (LMDB only)
    pub path: PathBuf,

    /// Largest size the LMDB data file may grow to, in bytes
    pub map_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: PathBuf::from("./data"),
            map_size: DEFAULT_MAP_SIZE,
        }
    }
}

/// Shared-secret settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Exact value expected in the `Authorization` header
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

/// List endpoint settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Largest `limit` a client may ask for, unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<usize>,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
