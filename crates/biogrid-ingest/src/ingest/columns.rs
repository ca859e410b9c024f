//! Header normalization
//!
//! BioGRID exports label columns inconsistently across releases
//! (`#BioGRID Interaction ID`, `SWISS-PROT Accessions Interactor A`, ...).
//! All header matching happens against a canonical lowercase/underscore
//! vocabulary produced here.

/// The twelve recognized columns, in canonical projection order.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "biogrid_interaction_id",
    "official_symbol_interactor_a",
    "official_symbol_interactor_b",
    "experimental_system",
    "experimental_system_type",
    "organism_id_interactor_a",
    "organism_id_interactor_b",
    "score",
    "swiss_prot_accessions_interactor_a",
    "swiss_prot_accessions_interactor_b",
    "organism_name_interactor_a",
    "organism_name_interactor_b",
];

/// Normalize a single raw header string to the canonical vocabulary:
/// lower-case, spaces and hyphens become underscores, `#` markers are
/// removed wherever they appear.
pub fn normalize_column_name(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', ' '], "_")
        .replace('#', "")
}

/// Normalize an ordered sequence of raw header strings.
pub fn normalize_column_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|col| normalize_column_name(col.as_ref())).collect()
}
