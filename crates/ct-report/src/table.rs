//! Merged-table construction.

use std::collections::BTreeMap;

use tracing::debug;

use ct_model::{Codelist, MergedRow, Term};

/// Inner-join codelists and terms on the link key.
///
/// A codelist with no terms contributes no rows; a term whose link key
/// matches no codelist is dropped (the service guarantees referential
/// integrity, so this only happens on malformed input). Duplicate
/// source terms propagate as duplicate rows.
///
/// Rows come back ordered by (codelist submission id, term submission
/// value), ascending, case-sensitive.
pub fn build_merged(codelists: &[Codelist], terms: &[Term]) -> Vec<MergedRow> {
    let by_key: BTreeMap<&str, &Codelist> = codelists
        .iter()
        .map(|codelist| (codelist.link_key.as_str(), codelist))
        .collect();

    let mut rows: Vec<MergedRow> = Vec::with_capacity(terms.len());
    let mut orphans = 0usize;
    for term in terms {
        let Some(codelist) = by_key.get(term.link_key.as_str()) else {
            orphans += 1;
            continue;
        };
        rows.push(MergedRow {
            codelist_code: codelist.code.clone(),
            codelist_id: codelist.submission_id.clone(),
            codelist_name: codelist.name.clone(),
            extensible: codelist.extensible,
            term_code: term.code.clone(),
            submission_value: term.submission_value.clone(),
            decoded_value: term.decoded_value.clone(),
        });
    }
    if orphans > 0 {
        debug!(orphans, "dropped terms with no matching codelist");
    }

    rows.sort_by(|a, b| {
        (a.codelist_id.as_str(), a.submission_value.as_str())
            .cmp(&(b.codelist_id.as_str(), b.submission_value.as_str()))
    });
    rows
}
