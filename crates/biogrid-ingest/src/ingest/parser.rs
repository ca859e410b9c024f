//! BioGRID TSV loader
//!
//! Reads a header-plus-rows tab-separated export, normalizes the header row,
//! and projects every row onto the twelve recognized columns. Loading does
//! not deduplicate or validate cell values; that is the extractors' job.
//!
//! # Errors
//! Fails with [`IngestError::SchemaMismatch`] when any recognized column is
//! absent after normalization. Extra columns are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::columns::{normalize_column_names, REQUIRED_COLUMNS};
use super::models::{InteractionTable, RawInteraction};
use crate::error::{IngestError, IngestResult};

/// Load and project a BioGRID TSV file
pub fn load_file(path: impl AsRef<Path>) -> IngestResult<InteractionTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading interaction table");
    let file = File::open(path)?;
    load_reader(file)
}

/// Load and project a BioGRID TSV document from any reader
pub fn load_reader<R: Read>(reader: R) -> IngestResult<InteractionTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = normalize_column_names(&rdr.headers()?.iter().collect::<Vec<_>>());
    let index = project_columns(&headers)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = |name: &str| {
            // Projection indices were validated above; a short row yields None
            row.get(index[name])
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        records.push(RawInteraction {
            interaction_id: cell("biogrid_interaction_id"),
            symbol_a: cell("official_symbol_interactor_a"),
            symbol_b: cell("official_symbol_interactor_b"),
            experimental_system: cell("experimental_system"),
            experimental_system_type: cell("experimental_system_type"),
            organism_id_a: cell("organism_id_interactor_a"),
            organism_id_b: cell("organism_id_interactor_b"),
            score: cell("score"),
            accession_a: cell("swiss_prot_accessions_interactor_a"),
            accession_b: cell("swiss_prot_accessions_interactor_b"),
            organism_name_a: cell("organism_name_interactor_a"),
            organism_name_b: cell("organism_name_interactor_b"),
        });
    }

    debug!(rows = records.len(), "Loaded interaction table");
    Ok(InteractionTable { records })
}

/// Map every recognized column to its position in the normalized header row
fn project_columns(headers: &[String]) -> IngestResult<HashMap<&'static str, usize>> {
    let mut index = HashMap::new();
    let mut missing = Vec::new();

    for name in REQUIRED_COLUMNS {
        match headers.iter().position(|h| h == name) {
            Some(pos) => {
                index.insert(name, pos);
            },
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(IngestError::SchemaMismatch { missing });
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#BioGRID Interaction ID\tOfficial Symbol Interactor A\tOfficial Symbol Interactor B\tExperimental System\tExperimental System Type\tOrganism ID Interactor A\tOrganism ID Interactor B\tScore\tSWISS-PROT Accessions Interactor A\tSWISS-PROT Accessions Interactor B\tOrganism Name Interactor A\tOrganism Name Interactor B";

    #[test]
    fn test_load_reader_projects_recognized_columns() {
        let doc = format!(
            "{}\n1\tsymbol_1\tsymbol_2\tTwo-hybrid\tphysical\t2697049\t9606\t-\tP1\tP2\tSevere acute respiratory syndrome coronavirus 2\tHomo sapiens\n",
            HEADER
        );

        let table = load_reader(doc.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);

        let record = &table.records[0];
        assert_eq!(record.interaction_id.as_deref(), Some("1"));
        assert_eq!(record.symbol_a.as_deref(), Some("symbol_1"));
        assert_eq!(record.organism_id_b.as_deref(), Some("9606"));
        assert_eq!(record.accession_a.as_deref(), Some("P1"));
        // The sentinel is carried verbatim by the loader
        assert_eq!(record.score.as_deref(), Some("-"));
        assert_eq!(record.organism_name_b.as_deref(), Some("Homo sapiens"));
    }

    #[test]
    fn test_load_reader_ignores_extra_columns() {
        let doc = format!(
            "{}\tEntrez Gene Interactor A\n2\ts1\ts2\tTwo-hybrid\tphysical\t9606\t9606\t0.5\tP1\tP2\tHomo sapiens\tHomo sapiens\t12345\n",
            HEADER
        );

        let table = load_reader(doc.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].score.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_load_reader_missing_column_is_schema_mismatch() {
        let doc = "#BioGRID Interaction ID\tScore\n1\t0.5\n";

        let err = load_reader(doc.as_bytes()).unwrap_err();
        match err {
            IngestError::SchemaMismatch { missing } => {
                assert!(missing.contains(&"official_symbol_interactor_a".to_string()));
                assert!(!missing.contains(&"score".to_string()));
            },
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reader_empty_cells_are_absent() {
        let doc = format!(
            "{}\n1\t\tsymbol_2\tTwo-hybrid\tphysical\t2697049\t9606\t\tP1\t\tname_a\tname_b\n",
            HEADER
        );

        let table = load_reader(doc.as_bytes()).unwrap();
        let record = &table.records[0];
        assert_eq!(record.symbol_a, None);
        assert_eq!(record.score, None);
        assert_eq!(record.accession_b, None);
    }
}
