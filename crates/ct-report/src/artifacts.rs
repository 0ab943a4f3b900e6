//! CSV artifact writing.
//!
//! Each invocation materializes two tables into the output target: the
//! full merged (codelist x term) table for the resolved package, and
//! the filtered subset matching the request.

use std::path::{Path, PathBuf};

use tracing::info;

use ct_model::MergedRow;

use crate::error::{ReportError, Result};

/// Column order shared by both artifacts.
const HEADER: [&str; 7] = [
    "Codelist Code",
    "Codelist ID",
    "Codelist Name",
    "Extensible",
    "Term Code",
    "Submission Value",
    "Decoded Value",
];

/// Paths of the written artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Full merged table.
    pub merged: PathBuf,
    /// Filtered subset.
    pub filtered: PathBuf,
}

/// Write both artifacts under `dir`, named after the package id.
pub fn write_artifacts(
    dir: &Path,
    package_id: &str,
    merged: &[MergedRow],
    filtered: &[MergedRow],
) -> Result<ArtifactPaths> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::io(dir, source))?;
    let merged_path = dir.join(format!("{package_id}_terms.csv"));
    let filtered_path = dir.join(format!("{package_id}_selected.csv"));
    write_rows(&merged_path, merged)?;
    write_rows(&filtered_path, filtered)?;
    info!(
        merged = %merged_path.display(),
        filtered = %filtered_path.display(),
        "wrote terminology tables"
    );
    Ok(ArtifactPaths {
        merged: merged_path,
        filtered: filtered_path,
    })
}

fn write_rows(path: &Path, rows: &[MergedRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| ReportError::csv(path, source))?;
    writer
        .write_record(HEADER)
        .map_err(|source| ReportError::csv(path, source))?;
    for row in rows {
        writer
            .write_record([
                row.codelist_code.as_str(),
                row.codelist_id.as_str(),
                row.codelist_name.as_str(),
                row.extensible_label(),
                row.term_code.as_str(),
                row.submission_value.as_str(),
                row.decoded_value.as_str(),
            ])
            .map_err(|source| ReportError::csv(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| ReportError::io(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(id: &str, value: &str) -> MergedRow {
        MergedRow {
            codelist_code: "C66781".to_string(),
            codelist_id: id.to_string(),
            codelist_name: "Age Unit".to_string(),
            extensible: false,
            term_code: "C29848".to_string(),
            submission_value: value.to_string(),
            decoded_value: value.to_lowercase(),
        }
    }

    #[test]
    fn writes_both_artifacts() {
        let dir = TempDir::new().expect("temp dir");
        let merged = vec![row("AGEU", "WEEKS"), row("AGEU", "YEARS")];
        let filtered = vec![row("AGEU", "YEARS")];

        let paths = write_artifacts(dir.path(), "sdtmct-2023-06-30", &merged, &filtered)
            .expect("write artifacts");
        assert!(paths.merged.ends_with("sdtmct-2023-06-30_terms.csv"));
        assert!(paths.filtered.ends_with("sdtmct-2023-06-30_selected.csv"));

        let full = std::fs::read_to_string(&paths.merged).expect("read merged");
        // Header plus one line per merged row.
        assert_eq!(full.lines().count(), 3);
        assert!(full.lines().next().unwrap().contains("Submission Value"));
        assert!(full.contains("WEEKS"));
        assert!(full.contains("No"));

        let subset = std::fs::read_to_string(&paths.filtered).expect("read filtered");
        assert_eq!(subset.lines().count(), 2);
        assert!(subset.contains("YEARS"));
        assert!(!subset.contains("WEEKS"));
    }

    #[test]
    fn empty_filtered_table_still_gets_header() {
        let dir = TempDir::new().expect("temp dir");
        let paths =
            write_artifacts(dir.path(), "sdtmct-2023-06-30", &[], &[]).expect("write artifacts");
        let subset = std::fs::read_to_string(&paths.filtered).expect("read filtered");
        assert_eq!(subset.lines().count(), 1);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("ct").join("out");
        let paths = write_artifacts(&nested, "sendct-2024-03-29", &[], &[]).expect("write");
        assert!(paths.merged.exists());
    }
}
