//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for workspace-level operations
pub type Result<T> = std::result::Result<T, BiogridError>;

/// Main error type for the BioGRID importer workspace
#[derive(Error, Debug)]
pub enum BiogridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
