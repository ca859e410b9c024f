//! Entity extraction
//!
//! Each extractor is a pure function of the loaded table: it reshapes the
//! wide two-interactor rows into one entity's flat record set and removes
//! duplicates, preserving first-seen order. Numeric coercion never fails
//! hard; a value that does not parse becomes `None`.
//!
//! The unpivot step pairs values positionally: row i's side-A cells belong
//! together, row i's side-B cells belong together, and the whole A-series
//! precedes the whole B-series in the flattened sequence.

use std::collections::HashSet;

use super::models::{Interaction, InteractionTable, Organism, Protein, RawInteraction, Side};

/// Melt per-side column groups into one flat sequence: all side-A values in
/// row order, then all side-B values in row order.
fn melt_sides<'t, T>(
    table: &'t InteractionTable,
    project: impl Fn(&'t RawInteraction, Side) -> T,
) -> Vec<T> {
    let mut out = Vec::with_capacity(table.len() * 2);
    for side in [Side::A, Side::B] {
        for record in &table.records {
            out.push(project(record, side));
        }
    }
    out
}

fn coerce_i64(value: Option<&str>) -> Option<i64> {
    value.and_then(|s| s.trim().parse().ok())
}

fn coerce_f64(value: Option<&str>) -> Option<f64> {
    value.and_then(|s| s.trim().parse().ok())
}

/// Extract the distinct organism set.
///
/// Unpivots the two organism-id/organism-name column pairs and removes
/// exact-duplicate `(tax_id, name)` pairs. Nothing is filtered for
/// missingness here: a pair with an absent id is still emitted, and is only
/// excluded downstream because no protein will reference it.
pub fn extract_organisms(table: &InteractionTable) -> Vec<Organism> {
    let pairs = melt_sides(table, |record, side| {
        (record.organism_id(side), record.organism_name(side))
    });

    let mut seen = HashSet::new();
    let mut organisms = Vec::new();
    for (tax_raw, name_raw) in pairs {
        let tax_id = coerce_i64(tax_raw);
        let name = name_raw.map(str::to_string);
        if seen.insert((tax_id, name.clone())) {
            organisms.push(Organism::new(tax_id, name));
        }
    }
    organisms
}

/// Extract the distinct protein set, one record per unique accession.
///
/// Unpivots `(accession, symbol, organism-id)` triples from both sides,
/// drops triples with an absent accession, normalizes the accession
/// (trim + upper-case) and symbol (trim), coerces the organism id, and
/// keeps the first occurrence per accession.
pub fn extract_proteins(table: &InteractionTable) -> Vec<Protein> {
    let triples = melt_sides(table, |record, side| {
        (
            record.accession(side),
            record.symbol(side),
            record.organism_id(side),
        )
    });

    let mut seen = HashSet::new();
    let mut proteins = Vec::new();
    for (accession, symbol, tax_raw) in triples {
        let Some(accession) = accession else {
            continue;
        };
        let uniprot_id = accession.trim().to_uppercase();
        if !seen.insert(uniprot_id.clone()) {
            continue;
        }
        proteins.push(Protein::new(
            uniprot_id,
            symbol.map(|s| s.trim().to_string()),
            coerce_i64(tax_raw),
        ));
    }
    proteins
}

/// Extract the distinct interaction set, one record per source id.
///
/// Drops rows with an absent accession on either side, normalizes both
/// accessions, and keeps the first row per interaction id.
pub fn extract_interactions(table: &InteractionTable) -> Vec<Interaction> {
    let mut seen = HashSet::new();
    let mut interactions = Vec::new();
    for record in &table.records {
        let (Some(accession_a), Some(accession_b)) =
            (record.accession_a.as_deref(), record.accession_b.as_deref())
        else {
            continue;
        };

        let id = coerce_i64(record.interaction_id.as_deref());
        if !seen.insert(id) {
            continue;
        }

        interactions.push(Interaction {
            id,
            interactor_a_id: accession_a.trim().to_uppercase(),
            interactor_b_id: accession_b.trim().to_uppercase(),
            score: coerce_f64(record.score.as_deref()),
            experimental_system: record.experimental_system.clone(),
            experimental_system_type: record.experimental_system_type.clone(),
        });
    }
    interactions
}
