//! Wire-format types for CDISC Library responses.
//!
//! Only the fields consumed downstream are deserialized. The package
//! body nests terms under their codelist; [`into_relations`] flattens
//! that into the two relations the rest of the pipeline works with,
//! using the codelist concept code as the explicit join key.

use serde::Deserialize;

use ct_model::{Codelist, Term};

/// Response of the package-listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PackageListing {
    #[serde(rename = "_links")]
    pub(crate) links: ListingLinks,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingLinks {
    #[serde(default)]
    pub(crate) packages: Vec<PackageLink>,
}

/// One package link, e.g. `{"href": "/mdr/ct/packages/sdtmct-2023-06-30"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct PackageLink {
    pub(crate) href: String,
}

/// Body of one terminology package.
#[derive(Debug, Deserialize)]
pub(crate) struct PackageBody {
    #[serde(default)]
    pub(crate) codelists: Vec<WireCodelist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCodelist {
    concept_id: String,
    submission_value: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    extensible: String,
    #[serde(default)]
    terms: Vec<WireTerm>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireTerm {
    concept_id: String,
    submission_value: String,
    #[serde(default)]
    preferred_term: String,
}

/// Flatten a package body into codelist and term relations.
pub(crate) fn into_relations(body: PackageBody) -> (Vec<Codelist>, Vec<Term>) {
    let mut codelists = Vec::with_capacity(body.codelists.len());
    let mut terms = Vec::new();
    for wire in body.codelists {
        let link_key = wire.concept_id.clone();
        for term in wire.terms {
            terms.push(Term {
                link_key: link_key.clone(),
                code: term.concept_id,
                submission_value: term.submission_value,
                decoded_value: term.preferred_term,
            });
        }
        codelists.push(Codelist {
            code: wire.concept_id,
            submission_id: wire.submission_value,
            name: wire.name,
            extensible: parse_extensible(&wire.extensible),
            link_key,
        });
    }
    (codelists, terms)
}

/// The service encodes extensibility as the strings "true"/"false";
/// CSV distributions of the same data use "Yes"/"No".
fn parse_extensible(raw: &str) -> bool {
    let value = raw.trim();
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}
