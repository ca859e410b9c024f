//! BioGRID interaction data ingestion
//!
//! This module turns a raw tab-delimited BioGRID export into three
//! referentially-valid record sets and loads them into the store.
//!
//! # Stages
//! - Header normalization and column projection ([`columns`], [`parser`])
//! - Wide-to-long entity extraction with first-seen de-duplication
//!   ([`extract`])
//! - Transactional, skip-on-conflict persistence ([`storage`], [`pipeline`])
//!
//! # Example
//! ```no_run
//! use biogrid_ingest::ingest::pipeline::ImportPipeline;
//! use biogrid_ingest::db::{create_pool, DbConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool(&DbConfig::default()).await?;
//! let pipeline = ImportPipeline::new(pool);
//! pipeline.storage().reset().await?;
//! let stats = pipeline.run("interactions.tsv").await?;
//! println!("{} interactions loaded", stats.interactions_inserted);
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod extract;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod storage;

// Re-export commonly used types
pub use extract::{extract_interactions, extract_organisms, extract_proteins};
pub use models::{Interaction, InteractionTable, Organism, Protein, RawInteraction, Side};
pub use pipeline::{ImportPipeline, ImportStats};
pub use storage::BiogridStorage;
