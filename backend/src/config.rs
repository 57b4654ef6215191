//! Server configuration.
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables. Every field has a default, so an absent file and an
//! empty environment still yield a runnable server.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "DAYCARE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "daycare.yaml";

const BIND_ADDRESS_VAR: &str = "DAYCARE_BIND_ADDRESS";
const DATA_DIR_VAR: &str = "DAYCARE_DATA_DIR";
const UPLOADS_DIR_VAR: &str = "DAYCARE_UPLOADS_DIR";
const ALLOWED_ORIGIN_VAR: &str = "DAYCARE_ALLOWED_ORIGIN";

/// Origin value that allows any origin
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    /// Directory holding activities.json, staff.json and dailyUpdates.json
    pub data_directory: PathBuf,
    /// Directory served under `/uploads`
    pub uploads_directory: PathBuf,
    /// CORS origin; `*` allows any
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5560)),
            data_directory: PathBuf::from("./data"),
            uploads_directory: PathBuf::from("./uploads"),
            allowed_origin: ANY_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the file named by `DAYCARE_CONFIG` (or `daycare.yaml`), then
    /// apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file_if_exists(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Invalid server configuration")
    }

    /// Read a YAML config file, falling back to defaults when it does not exist
    pub fn from_file_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply overrides from `lookup`, normally the process environment
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(BIND_ADDRESS_VAR) {
            self.bind_address = address
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDRESS_VAR, address))?;
        }
        if let Some(dir) = lookup(DATA_DIR_VAR) {
            self.data_directory = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(UPLOADS_DIR_VAR) {
            self.uploads_directory = PathBuf::from(dir);
        }
        if let Some(origin) = lookup(ALLOWED_ORIGIN_VAR) {
            self.allowed_origin = origin;
        }
        Ok(())
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origin == ANY_ORIGIN
    }
}
