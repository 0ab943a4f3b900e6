#![allow(missing_docs)]

use ct_model::{Codelist, MergedRow, Standard, Term};

#[test]
fn codelist_serializes() {
    let codelist = Codelist {
        code: "C66781".to_string(),
        submission_id: "AGEU".to_string(),
        name: "Age Unit".to_string(),
        extensible: false,
        link_key: "C66781".to_string(),
    };
    let json = serde_json::to_string(&codelist).expect("serialize codelist");
    let round: Codelist = serde_json::from_str(&json).expect("deserialize codelist");
    assert_eq!(round, codelist);
}

#[test]
fn term_serializes() {
    let term = Term {
        link_key: "C66781".to_string(),
        code: "C29848".to_string(),
        submission_value: "YEARS".to_string(),
        decoded_value: "Year".to_string(),
    };
    let json = serde_json::to_string(&term).expect("serialize term");
    let round: Term = serde_json::from_str(&json).expect("deserialize term");
    assert_eq!(round, term);
}

#[test]
fn merged_row_flag_follows_codelist() {
    let row = MergedRow {
        codelist_code: "C71620".to_string(),
        codelist_id: "UNIT".to_string(),
        codelist_name: "Unit".to_string(),
        extensible: true,
        term_code: "C41139".to_string(),
        submission_value: "mg".to_string(),
        decoded_value: "Milligram".to_string(),
    };
    assert_eq!(row.extensible_label(), "Yes");
}

#[test]
fn default_standard_is_sdtm() {
    assert_eq!(Standard::default(), Standard::Sdtm);
}
