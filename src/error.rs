//! Error types for the delivery ledger

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not available")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// A create (or, under strict policy, an edit) was rejected because
/// required fields are empty
#[derive(Debug, Error)]
#[error("Missing required field(s): {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Submitted credentials did not match the stored admin pair
#[derive(Debug, Error)]
#[error("Incorrect username or password")]
pub struct AuthError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Login failed: {0}")]
    Auth(#[from] AuthError),

    #[error("No delivery found with id {0}")]
    NotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("No records to export")]
    ExportEmpty,
}

pub type Result<T> = std::result::Result<T, Error>;
