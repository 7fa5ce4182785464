//! Configuration management for `NutriBuddy`.
//!
//! Settings come from two places: environment variables (optionally via a
//! `.env` file loaded in `main`) for paths and addresses, and `config.toml`
//! for the seeded user accounts.

/// Database configuration and connection management
pub mod database;

/// Seeded user accounts from config.toml
pub mod users;

use crate::errors::Result;
use std::path::PathBuf;

/// Fully assembled application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Directory the blob store lives in
    pub blob_dir: PathBuf,
    /// Accounts to seed at startup
    pub users: Vec<users::UserConfig>,
}

/// Loads the complete application configuration.
///
/// The user config file path comes from `CONFIG_PATH` (default
/// `./config.toml`); `DATABASE_URL`, `LISTEN_ADDR`, and `BLOB_DIR` override
/// their defaults.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let user_config = users::load_config(&config_path)?;

    Ok(AppConfig {
        database_url: database::get_database_url()?,
        listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        blob_dir: std::env::var("BLOB_DIR")
            .unwrap_or_else(|_| "data/blobs".to_string())
            .into(),
        users: user_config.users,
    })
}
