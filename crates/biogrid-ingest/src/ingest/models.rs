//! Interaction data models
//!
//! `RawInteraction` and `InteractionTable` are transient: they exist only
//! for the duration of one import call. `Organism`, `Protein`, and
//! `Interaction` are the canonical record sets handed to the store.

use serde::{Deserialize, Serialize};

/// Cells holding exactly this token are treated as absent, not as text.
pub const MISSING_VALUE: &str = "-";

/// Either of the two proteins participating in one interaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// One row of the source table, projected to the twelve recognized columns.
///
/// Cells are carried verbatim; absent cells are `None`. No value
/// normalization happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInteraction {
    /// Source-defined interaction identifier
    pub interaction_id: Option<String>,
    pub symbol_a: Option<String>,
    pub symbol_b: Option<String>,
    pub experimental_system: Option<String>,
    pub experimental_system_type: Option<String>,
    pub organism_id_a: Option<String>,
    pub organism_id_b: Option<String>,
    pub score: Option<String>,
    /// Accession identifier of interactor A (may be absent)
    pub accession_a: Option<String>,
    /// Accession identifier of interactor B (may be absent)
    pub accession_b: Option<String>,
    pub organism_name_a: Option<String>,
    pub organism_name_b: Option<String>,
}

impl RawInteraction {
    /// Accession identifier for the given interactor side
    pub fn accession(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.accession_a.as_deref(),
            Side::B => self.accession_b.as_deref(),
        }
    }

    /// Official symbol for the given interactor side
    pub fn symbol(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.symbol_a.as_deref(),
            Side::B => self.symbol_b.as_deref(),
        }
    }

    /// Organism identifier for the given interactor side
    pub fn organism_id(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.organism_id_a.as_deref(),
            Side::B => self.organism_id_b.as_deref(),
        }
    }

    /// Organism name for the given interactor side
    pub fn organism_name(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.organism_name_a.as_deref(),
            Side::B => self.organism_name_b.as_deref(),
        }
    }

    fn cells_mut(&mut self) -> [&mut Option<String>; 12] {
        [
            &mut self.interaction_id,
            &mut self.symbol_a,
            &mut self.symbol_b,
            &mut self.experimental_system,
            &mut self.experimental_system_type,
            &mut self.organism_id_a,
            &mut self.organism_id_b,
            &mut self.score,
            &mut self.accession_a,
            &mut self.accession_b,
            &mut self.organism_name_a,
            &mut self.organism_name_b,
        ]
    }
}

/// The normalized, projected source table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTable {
    pub records: Vec<RawInteraction>,
}

impl InteractionTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace every cell holding the missing-value sentinel with `None`.
    ///
    /// Runs once, table-wide, before extraction; the extractors never see
    /// the literal sentinel.
    pub fn nullify_missing(&mut self) {
        for record in &mut self.records {
            for cell in record.cells_mut() {
                if cell.as_deref().map(str::trim) == Some(MISSING_VALUE) {
                    *cell = None;
                }
            }
        }
    }
}

/// An organism referenced by one or more proteins
///
/// `tax_id` is the primary key in the store. The extractor emits whatever
/// pair the source carried, including a missing id; see
/// [`crate::ingest::extract::extract_organisms`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organism {
    /// NCBI taxonomy identifier (e.g., 9606 for Homo sapiens)
    pub tax_id: Option<i64>,
    /// Organism name (e.g., "Homo sapiens")
    pub name: Option<String>,
}

impl Organism {
    /// Create a new Organism
    pub fn new(tax_id: Option<i64>, name: Option<String>) -> Self {
        Self { tax_id, name }
    }
}

/// A protein, keyed by its accession identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Protein {
    /// Accession identifier, trimmed and upper-cased (primary key)
    pub uniprot_id: String,
    /// Official symbol, trimmed
    pub symbol: Option<String>,
    /// Organism reference; `None` when the source value did not coerce to a
    /// number
    pub tax_id: Option<i64>,
}

impl Protein {
    /// Create a new Protein
    pub fn new(uniprot_id: impl Into<String>, symbol: Option<String>, tax_id: Option<i64>) -> Self {
        Self {
            uniprot_id: uniprot_id.into(),
            symbol,
            tax_id,
        }
    }
}

/// An interaction between two proteins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Source interaction identifier, taken verbatim (primary key)
    pub id: Option<i64>,
    /// Accession of interactor A, trimmed and upper-cased
    pub interactor_a_id: String,
    /// Accession of interactor B, trimmed and upper-cased
    pub interactor_b_id: String,
    /// Optional interaction score
    pub score: Option<f64>,
    pub experimental_system: Option<String>,
    pub experimental_system_type: Option<String>,
}
