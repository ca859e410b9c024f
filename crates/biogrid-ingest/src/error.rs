//! Importer error types
//!
//! Only conditions that abort an import are errors. Per-record problems
//! (duplicate keys, missing required references) are soft: the offending
//! record is skipped with a diagnostic and the batch continues.

use thiserror::Error;

/// Result type alias for importer operations
pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Fatal importer errors
#[derive(Error, Debug)]
pub enum IngestError {
    /// Source file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file is not a well-formed delimited table
    #[error("TSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A recognized column is absent after header normalization
    #[error("schema mismatch: missing required columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// Unexpected database failure; the surrounding transaction is rolled
    /// back and the store is left as it was before the import call
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Shared workspace error
    #[error(transparent)]
    Common(#[from] biogrid_common::BiogridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_lists_columns() {
        let err = IngestError::SchemaMismatch {
            missing: vec!["score".to_string(), "experimental_system".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch: missing required columns: score, experimental_system"
        );
    }
}
