//! Server configuration.
//!
//! One startup path, parameterized by configuration: a TOML file at
//! `~/.config/evman/config.toml` with `EVMAN_*` environment variables
//! layered on top (environment wins). Nothing is hard-coded.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

static DEFAULT_DATA_DIR: &str = "~/evman/events";

pub const DEFAULT_PORT: u16 = 5000;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration for evman-server.
///
/// `data_dir` is the store connection string: the directory holding the
/// event documents.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn config_path() -> StoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?
            .join("evman");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration: file first, then `EVMAN_DATA_DIR` /
    /// `EVMAN_PORT` environment overrides.
    pub fn load() -> StoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("EVMAN"))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StoreError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> StoreResult<()> {
        let contents = format!(
            "\
# evman configuration

# Where event documents are stored:
# data_dir = \"{}\"

# Port the server listens on:
# port = {}
",
            DEFAULT_DATA_DIR, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
