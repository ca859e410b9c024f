//! BioGRID Importer Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging setup for the BioGRID importer
//! workspace.
//!
//! # Overview
//!
//! This crate provides the functionality used across all workspace members:
//!
//! - **Error Handling**: The workspace-level error type and result alias
//! - **Logging**: Centralized `tracing` subscriber configuration
//!
//! # Example
//!
//! ```no_run
//! use biogrid_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> biogrid_common::Result<()> {
//!     let config = LogConfig::from_env();
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{BiogridError, Result};
