//! User account configuration loading from config.toml
//!
//! This module provides functionality to load the user accounts from a TOML
//! configuration file. The accounts defined in config.toml are upserted into
//! the database on every start, which is how users and their bearer tokens
//! are managed.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of user accounts to seed
    pub users: Vec<UserConfig>,
}

/// Configuration for a single user account
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    /// Display name
    pub name: String,
    /// Email address, the upsert key
    pub email: String,
    /// Opaque bearer token for API authentication
    pub token: String,
    /// Whether the account may use the API (defaults to true)
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// Loads user configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Config)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads user configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
