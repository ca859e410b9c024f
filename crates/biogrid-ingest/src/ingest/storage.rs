//! Storage layer for interaction data
//!
//! Owns the relational schema (organism, protein, interaction) and the
//! row-level operations the import pipeline drives: schema reset, inserts
//! within a caller-held transaction, existence checks, and counts.

use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};
use tracing::info;

use super::models::{Interaction, Organism, Protein};
use crate::error::IngestResult;

/// Storage handler for the three entity tables
#[derive(Debug, Clone)]
pub struct BiogridStorage {
    db: SqlitePool,
}

impl BiogridStorage {
    /// Create a new storage handler
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }

    /// Drop and recreate all three tables.
    ///
    /// Runs before the first import of a process; repeated imports against
    /// the same store are idempotent only within the lifetime bounded by
    /// this reset.
    pub async fn reset(&self) -> IngestResult<()> {
        // Drop order is the reverse of insert order, for foreign keys
        sqlx::query("DROP TABLE IF EXISTS interaction")
            .execute(&self.db)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS protein").execute(&self.db).await?;
        sqlx::query("DROP TABLE IF EXISTS organism").execute(&self.db).await?;

        sqlx::query(
            r#"
            CREATE TABLE organism (
                tax_id INTEGER PRIMARY KEY,
                name VARCHAR(100)
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE protein (
                uniprot_id VARCHAR(100) NOT NULL PRIMARY KEY,
                symbol VARCHAR(100),
                tax_id INTEGER REFERENCES organism (tax_id)
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE interaction (
                id INTEGER PRIMARY KEY,
                interactor_a_id VARCHAR(100) NOT NULL REFERENCES protein (uniprot_id),
                interactor_b_id VARCHAR(100) NOT NULL REFERENCES protein (uniprot_id),
                score FLOAT,
                experimental_system VARCHAR(100),
                experimental_system_type VARCHAR(100)
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        info!("Schema reset: organism, protein, interaction tables recreated");
        Ok(())
    }

    /// Insert an organism within a transaction.
    ///
    /// Organisms carry no existence pre-check; the primary-key constraint is
    /// the sole dedup guard, and a conflicting row is skipped in place.
    ///
    /// Returns: true if the row was inserted, false if it was skipped
    pub async fn insert_organism(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        organism: &Organism,
    ) -> IngestResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO organism (tax_id, name)
            VALUES (?, ?)
            ON CONFLICT (tax_id) DO NOTHING
            "#,
        )
        .bind(organism.tax_id)
        .bind(organism.name.as_deref())
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a protein with this accession is already stored
    pub async fn protein_exists(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        uniprot_id: &str,
    ) -> IngestResult<bool> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT 1 FROM protein WHERE uniprot_id = ?")
            .bind(uniprot_id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(existing.is_some())
    }

    /// Insert a protein within a transaction
    pub async fn insert_protein(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        protein: &Protein,
    ) -> IngestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO protein (uniprot_id, symbol, tax_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&protein.uniprot_id)
        .bind(protein.symbol.as_deref())
        .bind(protein.tax_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Check whether an interaction with this source id is already stored
    pub async fn interaction_exists(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> IngestResult<bool> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT 1 FROM interaction WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(existing.is_some())
    }

    /// Insert an interaction within a transaction
    pub async fn insert_interaction(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        interaction: &Interaction,
    ) -> IngestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO interaction
                (id, interactor_a_id, interactor_b_id, score,
                 experimental_system, experimental_system_type)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(interaction.id)
        .bind(&interaction.interactor_a_id)
        .bind(&interaction.interactor_b_id)
        .bind(interaction.score)
        .bind(interaction.experimental_system.as_deref())
        .bind(interaction.experimental_system_type.as_deref())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Number of stored organisms
    pub async fn count_organisms(&self) -> IngestResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organism")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    /// Number of stored proteins
    pub async fn count_proteins(&self) -> IngestResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM protein")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    /// Number of stored interactions
    pub async fn count_interactions(&self) -> IngestResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interaction")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
