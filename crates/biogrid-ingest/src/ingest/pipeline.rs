//! Interaction import pipeline
//!
//! Orchestrates the full import: load and project the TSV, extract the
//! three record sets, and persist them inside one all-or-nothing
//! transaction.
//!
//! Insert order is organisms, then proteins, then interactions; every
//! protein references a stored organism and every interaction references
//! two stored proteins by the time its insert runs. Per-record problems
//! (duplicate key, missing required reference) skip that record with a
//! diagnostic and never abort the batch; any unexpected database failure
//! rolls the whole transaction back, leaving the store untouched.

use std::path::Path;

use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};
use tracing::{error, info, warn};

use super::extract::{extract_interactions, extract_organisms, extract_proteins};
use super::models::{Interaction, Organism, Protein};
use super::parser;
use super::storage::BiogridStorage;
use crate::error::IngestResult;

/// Interaction import pipeline
pub struct ImportPipeline {
    storage: BiogridStorage,
}

impl ImportPipeline {
    /// Create a new pipeline on top of a connection pool
    pub fn new(db: SqlitePool) -> Self {
        Self {
            storage: BiogridStorage::new(db),
        }
    }

    /// The storage handler backing this pipeline
    pub fn storage(&self) -> &BiogridStorage {
        &self.storage
    }

    /// Run the full import for one source file.
    ///
    /// All three record sets are staged in memory before any write begins;
    /// the transaction commits once, after the last insert, or rolls back
    /// entirely.
    ///
    /// Returns: per-entity insert/skip statistics
    pub async fn run(&self, path: impl AsRef<Path>) -> IngestResult<ImportStats> {
        let path = path.as_ref();
        info!(path = %path.display(), "Starting interaction import");

        let mut table = parser::load_file(path)?;
        table.nullify_missing();

        let organisms = extract_organisms(&table);
        let proteins = extract_proteins(&table);
        let interactions = extract_interactions(&table);
        info!(
            rows = table.len(),
            organisms = organisms.len(),
            proteins = proteins.len(),
            interactions = interactions.len(),
            "Extracted record sets"
        );

        let mut tx = self.storage.pool().begin().await?;
        let mut stats = ImportStats::default();

        let result = self
            .persist(&mut tx, &organisms, &proteins, &interactions, &mut stats)
            .await;

        match result {
            Ok(()) => {
                tx.commit().await?;
                info!(
                    organisms = stats.organisms_inserted,
                    proteins = stats.proteins_inserted,
                    interactions = stats.interactions_inserted,
                    skipped = stats.skipped(),
                    "Import committed"
                );
                Ok(stats)
            },
            Err(e) => {
                error!(error = %e, "Import failed, rolling back transaction");
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            },
        }
    }

    /// Persist the staged record sets within the given transaction
    async fn persist(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        organisms: &[Organism],
        proteins: &[Protein],
        interactions: &[Interaction],
        stats: &mut ImportStats,
    ) -> IngestResult<()> {
        for organism in organisms {
            if self.storage.insert_organism(tx, organism).await? {
                stats.organisms_inserted += 1;
            } else {
                warn!(tax_id = ?organism.tax_id, "Skipping organism with existing tax id");
                stats.organisms_skipped += 1;
            }
        }

        for protein in proteins {
            if protein.uniprot_id.is_empty() {
                warn!(symbol = ?protein.symbol, "Skipping protein with missing accession");
                stats.proteins_skipped += 1;
                continue;
            }
            if self.storage.protein_exists(tx, &protein.uniprot_id).await? {
                warn!(uniprot_id = %protein.uniprot_id, "Skipping duplicate protein");
                stats.proteins_skipped += 1;
                continue;
            }
            self.storage.insert_protein(tx, protein).await?;
            stats.proteins_inserted += 1;
        }

        for interaction in interactions {
            if interaction.interactor_a_id.is_empty() || interaction.interactor_b_id.is_empty() {
                warn!(id = ?interaction.id, "Skipping interaction with missing interactor reference");
                stats.interactions_skipped += 1;
                continue;
            }
            if let Some(id) = interaction.id {
                if self.storage.interaction_exists(tx, id).await? {
                    warn!(id, "Skipping duplicate interaction");
                    stats.interactions_skipped += 1;
                    continue;
                }
            }
            self.storage.insert_interaction(tx, interaction).await?;
            stats.interactions_inserted += 1;
        }

        Ok(())
    }
}

/// Statistics from one import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// New organism rows
    pub organisms_inserted: usize,
    /// Organism rows skipped on primary-key conflict
    pub organisms_skipped: usize,
    /// New protein rows
    pub proteins_inserted: usize,
    /// Protein rows skipped (missing accession or duplicate key)
    pub proteins_skipped: usize,
    /// New interaction rows
    pub interactions_inserted: usize,
    /// Interaction rows skipped (missing reference or duplicate key)
    pub interactions_skipped: usize,
}

impl ImportStats {
    /// Total records skipped across all three entity kinds
    pub fn skipped(&self) -> usize {
        self.organisms_skipped + self.proteins_skipped + self.interactions_skipped
    }
}
