//! Unified error types for `NutriBuddy`.
//!
//! All fallible operations in the crate return [`Result`] with this error enum.
//! Validation variants carry the user-facing message; not-found variants carry
//! the identifier that failed to resolve so callers can report it.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong while loading configuration
        message: String,
    },

    /// Invalid user input on a create or update operation
    #[error("{message}")]
    Validation {
        /// User-facing validation message
        message: String,
    },

    /// Amount that is negative, NaN, or infinite where a finite quantity is required
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// Unit string outside the supported set
    #[error("Unknown unit: {unit}")]
    UnknownUnit {
        /// The offending unit
        unit: String,
    },

    /// Request without a valid bearer token, or for an inactive account
    #[error("Unauthorized")]
    Unauthorized,

    /// Food lookup failed for the authenticated user
    #[error("Food {id} not found")]
    FoodNotFound {
        /// Requested food id
        id: i64,
    },

    /// Meal lookup failed for the authenticated user
    #[error("Meal {id} not found")]
    MealNotFound {
        /// Requested meal id
        id: i64,
    },

    /// Intake record lookup failed for the authenticated user
    #[error("Intake record {id} not found")]
    IntakeNotFound {
        /// Requested intake record id
        id: i64,
    },

    /// Folder lookup failed for the authenticated user
    #[error("Folder {id} not found")]
    FolderNotFound {
        /// Requested folder id
        id: i64,
    },

    /// Article lookup failed for the authenticated user
    #[error("Article {id} not found")]
    ArticleNotFound {
        /// Requested article id
        id: i64,
    },

    /// Article content or image is recorded but its blob could not be loaded
    #[error("Could not load the content of article {article}")]
    ContentUnavailable {
        /// The article whose blob is missing
        article: i64,
    },

    /// Uploaded content type outside the allowed set
    #[error("Unsupported content type: {content_type}")]
    UnsupportedContentType {
        /// The offending content type
        content_type: String,
    },

    /// Duplicate-day was asked to copy from a day with no intake records
    #[error("No intake recorded on {day}")]
    NothingToCopy {
        /// The empty source day
        day: chrono::NaiveDate,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (blob store, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON (de)serialization error for article content documents
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
