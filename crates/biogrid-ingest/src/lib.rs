//! BioGRID Importer Library
//!
//! Loads a tab-delimited BioGRID interaction export into a relational store
//! as three related entity sets: organisms, proteins, and interactions.
//!
//! # Pipeline
//!
//! 1. **Raw Loader** ([`ingest::parser`]): parse the TSV, normalize column
//!    headers, and project to the twelve recognized columns.
//! 2. **Entity Extractors** ([`ingest::extract`]): reshape the wide table
//!    into de-duplicated organism, protein, and interaction record sets.
//! 3. **Import Orchestrator** ([`ingest::pipeline`]): persist all three sets
//!    inside one transaction with skip-on-conflict semantics.
//!
//! # Example
//!
//! ```no_run
//! use biogrid_ingest::db::{create_pool, DbConfig};
//! use biogrid_ingest::ingest::pipeline::ImportPipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = create_pool(&DbConfig::default()).await?;
//!     let pipeline = ImportPipeline::new(pool);
//!     pipeline.storage().reset().await?;
//!     let stats = pipeline.run("./data/interactions.tsv").await?;
//!     tracing::info!(?stats, "import finished");
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod ingest;

// Re-export commonly used types
pub use error::{IngestError, IngestResult};
