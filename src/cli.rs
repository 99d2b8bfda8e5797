//! CLI argument definitions using clap
//!
//! ```text
//! bistro-server [--config <path>] [--bind <addr>] [--data-dir <path>] [--in-memory]
//! ```
//!
//! Flags override the matching keys of the YAML configuration.

use crate::config::{ServiceConfig, StorageBackend};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Bistro - record-management backend for restaurant operations
#[derive(Parser, Debug, Default)]
#[command(name = "bistro-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Socket address to listen on (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    /// LMDB data directory (overrides `storage.path`)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep records in memory instead of LMDB
    #[arg(long)]
    pub in_memory: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Load the configuration file (or defaults) and apply the flags on top
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_yaml_file(path)?,
            None => ServiceConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply the command line overrides to a configuration
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.storage.path = dir.clone();
        }
        if self.in_memory {
            config.storage.backend = StorageBackend::InMemory;
        }
    }
}
