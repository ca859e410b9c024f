//! End-to-end import pipeline tests
//!
//! Each test writes a TSV fixture and runs the full pipeline against its own
//! SQLite database file in a temporary directory, then checks the persisted
//! rows through the store.

use std::io::Write;
use std::path::PathBuf;

use biogrid_ingest::db::{create_pool, DbConfig};
use biogrid_ingest::ingest::pipeline::ImportPipeline;
use biogrid_ingest::IngestError;
use tempfile::TempDir;

const HEADER: &str = "#BioGRID Interaction ID\tOfficial Symbol Interactor A\tOfficial Symbol Interactor B\tExperimental System\tExperimental System Type\tOrganism ID Interactor A\tOrganism ID Interactor B\tScore\tSWISS-PROT Accessions Interactor A\tSWISS-PROT Accessions Interactor B\tOrganism Name Interactor A\tOrganism Name Interactor B";

const SARS_COV_2: &str = "Severe acute respiratory syndrome coronavirus 2";
const HUMAN: &str = "Homo sapiens";

/// The reference three-row export: P1-P2, P2-P3, P3-P1, all scores "-"
fn sample_rows() -> Vec<String> {
    vec![
        format!(
            "1\tsymbol_1\tsymbol_2\tTwo-hybrid\tphysical\t2697049\t2697049\t-\tP1\tP2\t{}\t{}",
            SARS_COV_2, SARS_COV_2
        ),
        format!(
            "2\tsymbol_2\tsymbol_3\tTwo-hybrid\tphysical\t2697049\t9606\t-\tP2\tP3\t{}\t{}",
            SARS_COV_2, HUMAN
        ),
        format!(
            "3\tsymbol_3\tsymbol_1\tProximity Label-MS\tphysical\t9606\t2697049\t-\tP3\tP1\t{}\t{}",
            HUMAN, SARS_COV_2
        ),
    ]
}

fn write_fixture(dir: &TempDir, rows: &[String]) -> PathBuf {
    let path = dir.path().join("interactions.tsv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

/// Create a pipeline over a fresh database file and reset the schema
async fn setup(dir: &TempDir) -> ImportPipeline {
    let config = DbConfig {
        url: format!("sqlite://{}", dir.path().join("biogrid.db").display()),
        max_connections: 1,
        ..DbConfig::default()
    };
    let pool = create_pool(&config).await.unwrap();
    let pipeline = ImportPipeline::new(pool);
    pipeline.storage().reset().await.unwrap();
    pipeline
}

#[tokio::test]
async fn test_import_sample_export() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &sample_rows());
    let pipeline = setup(&dir).await;

    let stats = pipeline.run(&path).await.unwrap();

    assert_eq!(stats.organisms_inserted, 2);
    assert_eq!(stats.proteins_inserted, 3);
    assert_eq!(stats.interactions_inserted, 3);
    assert_eq!(stats.skipped(), 0);

    let storage = pipeline.storage();
    assert_eq!(storage.count_organisms().await.unwrap(), 2);
    assert_eq!(storage.count_proteins().await.unwrap(), 3);
    assert_eq!(storage.count_interactions().await.unwrap(), 3);

    // Every score was the missing-value sentinel and must be stored as NULL
    let null_scores = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM interaction WHERE score IS NULL",
    )
    .fetch_one(storage.pool())
    .await
    .unwrap();
    assert_eq!(null_scores, 3);
}

#[tokio::test]
async fn test_import_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &sample_rows());
    let pipeline = setup(&dir).await;

    pipeline.run(&path).await.unwrap();
    let second = pipeline.run(&path).await.unwrap();

    // Every record is a duplicate the second time around
    assert_eq!(second.organisms_inserted, 0);
    assert_eq!(second.proteins_inserted, 0);
    assert_eq!(second.interactions_inserted, 0);
    assert_eq!(second.organisms_skipped, 2);
    assert_eq!(second.proteins_skipped, 3);
    assert_eq!(second.interactions_skipped, 3);

    let storage = pipeline.storage();
    assert_eq!(storage.count_organisms().await.unwrap(), 2);
    assert_eq!(storage.count_proteins().await.unwrap(), 3);
    assert_eq!(storage.count_interactions().await.unwrap(), 3);
}

#[tokio::test]
async fn test_missing_accession_excludes_interaction_only() {
    let dir = TempDir::new().unwrap();
    let mut rows = sample_rows();
    // Row 2 loses its B-side accession; P3 is still seen on row 3
    rows[1] = format!(
        "2\tsymbol_2\tsymbol_3\tTwo-hybrid\tphysical\t2697049\t9606\t-\tP2\t-\t{}\t{}",
        SARS_COV_2, HUMAN
    );
    let path = write_fixture(&dir, &rows);
    let pipeline = setup(&dir).await;

    let stats = pipeline.run(&path).await.unwrap();

    assert_eq!(stats.interactions_inserted, 2);
    assert_eq!(stats.proteins_inserted, 3);
    assert_eq!(stats.organisms_inserted, 2);

    let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM interaction ORDER BY id")
        .fetch_all(pipeline.storage().pool())
        .await
        .unwrap();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_duplicate_interaction_id_keeps_first() {
    let dir = TempDir::new().unwrap();
    let mut rows = sample_rows();
    rows[1] = format!(
        "1\tsymbol_2\tsymbol_3\tTwo-hybrid\tphysical\t2697049\t9606\t-\tP2\tP3\t{}\t{}",
        SARS_COV_2, HUMAN
    );
    let path = write_fixture(&dir, &rows);
    let pipeline = setup(&dir).await;

    let stats = pipeline.run(&path).await.unwrap();
    assert_eq!(stats.interactions_inserted, 2);

    let first = sqlx::query_scalar::<_, String>(
        "SELECT interactor_a_id FROM interaction WHERE id = 1",
    )
    .fetch_one(pipeline.storage().pool())
    .await
    .unwrap();
    assert_eq!(first, "P1");
}

#[tokio::test]
async fn test_schema_mismatch_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.tsv");
    std::fs::write(&path, "#BioGRID Interaction ID\tScore\n1\t0.5\n").unwrap();
    let pipeline = setup(&dir).await;

    let err = pipeline.run(&path).await.unwrap_err();
    assert!(matches!(err, IngestError::SchemaMismatch { .. }));

    let storage = pipeline.storage();
    assert_eq!(storage.count_organisms().await.unwrap(), 0);
    assert_eq!(storage.count_proteins().await.unwrap(), 0);
    assert_eq!(storage.count_interactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_numeric_scores_are_persisted() {
    let dir = TempDir::new().unwrap();
    let mut rows = sample_rows();
    rows[0] = format!(
        "1\tsymbol_1\tsymbol_2\tTwo-hybrid\tphysical\t2697049\t2697049\t0.75\tP1\tP2\t{}\t{}",
        SARS_COV_2, SARS_COV_2
    );
    let path = write_fixture(&dir, &rows);
    let pipeline = setup(&dir).await;

    pipeline.run(&path).await.unwrap();

    let score = sqlx::query_scalar::<_, Option<f64>>(
        "SELECT score FROM interaction WHERE id = 1",
    )
    .fetch_one(pipeline.storage().pool())
    .await
    .unwrap();
    assert_eq!(score, Some(0.75));
}

#[tokio::test]
async fn test_variant_casing_does_not_duplicate_proteins() {
    let dir = TempDir::new().unwrap();
    let mut rows = sample_rows();
    // Same accession with stray casing and whitespace on row 3
    rows[2] = format!(
        "3\tsymbol_3\tsymbol_1\tProximity Label-MS\tphysical\t9606\t2697049\t-\tP3\t p1 \t{}\t{}",
        HUMAN, SARS_COV_2
    );
    let path = write_fixture(&dir, &rows);
    let pipeline = setup(&dir).await;

    let stats = pipeline.run(&path).await.unwrap();
    assert_eq!(stats.proteins_inserted, 3);

    let interactor = sqlx::query_scalar::<_, String>(
        "SELECT interactor_b_id FROM interaction WHERE id = 3",
    )
    .fetch_one(pipeline.storage().pool())
    .await
    .unwrap();
    assert_eq!(interactor, "P1");
}

#[tokio::test]
async fn test_persisted_references_are_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &sample_rows());
    let pipeline = setup(&dir).await;

    pipeline.run(&path).await.unwrap();
    let pool = pipeline.storage().pool();

    let orphan_proteins = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM protein
        WHERE tax_id IS NOT NULL
          AND tax_id NOT IN (SELECT tax_id FROM organism WHERE tax_id IS NOT NULL)
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap();
    assert_eq!(orphan_proteins, 0);

    let orphan_interactions = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM interaction
        WHERE interactor_a_id NOT IN (SELECT uniprot_id FROM protein)
           OR interactor_b_id NOT IN (SELECT uniprot_id FROM protein)
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap();
    assert_eq!(orphan_interactions, 0);
}
