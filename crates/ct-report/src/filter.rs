//! Key filtering and lookup outcomes.

use chrono::NaiveDate;

use ct_model::{MergedRow, Standard};

/// Which merged-row field a lookup key matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Match the codelist submission value (e.g. "AGEU").
    Id,
    /// Match the codelist NCI concept code (e.g. "C66781").
    CodelistCode,
}

impl KeyKind {
    /// Label used in report headers and log fields.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::CodelistCode => "CODELISTCODE",
        }
    }
}

/// Result of one lookup, with the request echoed for report headers.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// Standard the package belongs to.
    pub standard: Standard,
    /// Resolved (or supplied) release date.
    pub version: NaiveDate,
    /// The user-supplied key.
    pub key: String,
    /// Which field the key matched against.
    pub kind: KeyKind,
    /// Matched rows, or the not-found outcome.
    pub outcome: LookupOutcome,
}

/// Zero matching rows is a reported outcome, not an error: the fetch
/// succeeded and the filter simply found nothing.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// At least one row matched the key.
    Found {
        /// Matched rows, in merged-table order.
        rows: Vec<MergedRow>,
        /// Extensibility of the matched codelist. All matched rows
        /// share one codelist, hence one flag.
        extensible: bool,
    },
    /// No row matched the key.
    NotFound,
}

impl LookupReport {
    /// Matched rows, empty on the not-found outcome.
    pub fn rows(&self) -> &[MergedRow] {
        match &self.outcome {
            LookupOutcome::Found { rows, .. } => rows,
            LookupOutcome::NotFound => &[],
        }
    }
}

/// Select rows whose key field equals `key`, case-insensitively.
pub fn filter_rows(rows: &[MergedRow], key: &str, kind: KeyKind) -> Vec<MergedRow> {
    rows.iter()
        .filter(|row| {
            let field = match kind {
                KeyKind::Id => &row.codelist_id,
                KeyKind::CodelistCode => &row.codelist_code,
            };
            field.eq_ignore_ascii_case(key)
        })
        .cloned()
        .collect()
}

/// Filter the merged table by a key and package the result.
pub fn lookup(
    merged: &[MergedRow],
    key: &str,
    kind: KeyKind,
    standard: Standard,
    version: NaiveDate,
) -> LookupReport {
    let rows = filter_rows(merged, key, kind);
    let outcome = match rows.first() {
        Some(first) => LookupOutcome::Found {
            extensible: first.extensible,
            rows,
        },
        None => LookupOutcome::NotFound,
    };
    LookupReport {
        standard,
        version,
        key: key.to_string(),
        kind,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, id: &str, value: &str, extensible: bool) -> MergedRow {
        MergedRow {
            codelist_code: code.to_string(),
            codelist_id: id.to_string(),
            codelist_name: id.to_string(),
            extensible,
            term_code: "C0".to_string(),
            submission_value: value.to_string(),
            decoded_value: value.to_string(),
        }
    }

    fn fixture() -> Vec<MergedRow> {
        vec![
            row("C66781", "AGEU", "WEEKS", false),
            row("C66781", "AGEU", "YEARS", false),
            row("C71620", "UNIT", "mg", true),
        ]
    }

    #[test]
    fn filters_by_id_case_insensitively() {
        let merged = fixture();
        let rows = filter_rows(&merged, "ageu", KeyKind::Id);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.codelist_id == "AGEU"));
    }

    #[test]
    fn filters_by_codelist_code() {
        let merged = fixture();
        let rows = filter_rows(&merged, "c66781", KeyKind::CodelistCode);
        assert_eq!(rows.len(), 2);
        let rows = filter_rows(&merged, "C71620", KeyKind::CodelistCode);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].submission_value, "mg");
    }

    #[test]
    fn id_filter_does_not_match_codes() {
        let merged = fixture();
        assert!(filter_rows(&merged, "C66781", KeyKind::Id).is_empty());
    }

    #[test]
    fn lookup_carries_extensible_flag() {
        let merged = fixture();
        let version = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        let report = lookup(&merged, "UNIT", KeyKind::Id, Standard::Sdtm, version);
        match &report.outcome {
            LookupOutcome::Found { rows, extensible } => {
                assert_eq!(rows.len(), 1);
                assert!(*extensible);
            }
            LookupOutcome::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn zero_matches_is_not_found_not_an_error() {
        let merged = fixture();
        let version = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        let report = lookup(&merged, "NOTREAL", KeyKind::Id, Standard::Sdtm, version);
        assert!(matches!(report.outcome, LookupOutcome::NotFound));
        assert!(report.rows().is_empty());
        assert_eq!(report.key, "NOTREAL");
    }
}
