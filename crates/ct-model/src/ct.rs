//! Codelist, term and merged-row types.
//!
//! A fetched package decomposes into two relations:
//!
//! 1. **Codelists** - one row per controlled-vocabulary list, keyed by
//!    its NCI concept code (e.g. `C66781` for Age Unit).
//! 2. **Terms** - one row per permissible value, carrying the concept
//!    code of its owning codelist as `link_key`.
//!
//! Joining the two on `link_key` yields one [`MergedRow`] per term.
//! Everything here lives for a single invocation; nothing is cached or
//! persisted between runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::standard::Standard;

/// One controlled-vocabulary list within a terminology package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codelist {
    /// NCI concept code (e.g. "C66781").
    pub code: String,

    /// Human submission value of the codelist itself (e.g. "AGEU").
    /// This is the short name users filter on, not a dataset value.
    pub submission_id: String,

    /// Display name (e.g. "Age Unit").
    pub name: String,

    /// Whether sponsors may submit values beyond the official term set.
    pub extensible: bool,

    /// Join key to this codelist's terms. The service exposes the
    /// codelist concept code as a stable key, so `link_key == code`.
    pub link_key: String,
}

/// One permissible value within a codelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Concept code of the owning codelist.
    pub link_key: String,

    /// NCI concept code of this term (e.g. "C29848").
    pub code: String,

    /// The permissible dataset value (e.g. "YEARS").
    pub submission_value: String,

    /// Decoded description of the value (e.g. "Year").
    pub decoded_value: String,
}

/// Join of `Codelist` x `Term`: one row per term, carrying the owning
/// codelist's attributes alongside the term's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Codelist NCI concept code.
    pub codelist_code: String,
    /// Codelist submission value (e.g. "AGEU").
    pub codelist_id: String,
    /// Codelist display name.
    pub codelist_name: String,
    /// Extensibility of the owning codelist.
    pub extensible: bool,
    /// Term NCI concept code.
    pub term_code: String,
    /// Term submission value.
    pub submission_value: String,
    /// Term decoded description.
    pub decoded_value: String,
}

impl MergedRow {
    /// Render the extensibility flag the way reports print it.
    pub const fn extensible_label(&self) -> &'static str {
        if self.extensible { "Yes" } else { "No" }
    }
}

/// A fetched terminology package, decomposed into its two relations.
#[derive(Debug, Clone)]
pub struct CtPackage {
    /// Standard the package belongs to.
    pub standard: Standard,
    /// Release date of the package.
    pub version: NaiveDate,
    /// Codelist relation.
    pub codelists: Vec<Codelist>,
    /// Term relation, flattened out of the codelists.
    pub terms: Vec<Term>,
}

impl CtPackage {
    /// Package identifier as the service names it, e.g. "sdtmct-2023-06-30".
    pub fn package_id(&self) -> String {
        format!(
            "{}-{}",
            self.standard.api_slug(),
            self.version.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensible_label_maps_bool() {
        let mut row = MergedRow {
            codelist_code: "C66781".to_string(),
            codelist_id: "AGEU".to_string(),
            codelist_name: "Age Unit".to_string(),
            extensible: false,
            term_code: "C29848".to_string(),
            submission_value: "YEARS".to_string(),
            decoded_value: "Year".to_string(),
        };
        assert_eq!(row.extensible_label(), "No");
        row.extensible = true;
        assert_eq!(row.extensible_label(), "Yes");
    }

    #[test]
    fn package_id_concatenates_slug_and_date() {
        let package = CtPackage {
            standard: Standard::Sdtm,
            version: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            codelists: Vec::new(),
            terms: Vec::new(),
        };
        assert_eq!(package.package_id(), "sdtmct-2023-06-30");
    }
}
