//! FILENAME: core/export-engine/src/artifact.rs
//! Export artifacts: filename + content type + bytes.
//!
//! A "download" is fully materialized in memory: the frontend can hand
//! the bytes to the user agent or write them into a directory. Filenames
//! are date-stamped with the ISO calendar date of generation.

use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const SUMMARY_CONTENT_TYPE: &str = "text/plain";
pub const WORKBOOK_CONTENT_TYPE: &str = "application/vnd.ms-excel";

// ============================================================================
// FILENAMES
// ============================================================================

pub fn csv_filename(date: NaiveDate) -> String {
    format!("attendance-data-{}.csv", date.format("%Y-%m-%d"))
}

pub fn summary_filename(date: NaiveDate) -> String {
    format!("attendance-report-{}.txt", date.format("%Y-%m-%d"))
}

pub fn workbook_filename(date: NaiveDate) -> String {
    format!("attendance-report-{}.xls", date.format("%Y-%m-%d"))
}

// ============================================================================
// ARTIFACT
// ============================================================================

/// One generated, downloadable report. Serializable so a shell can hand
/// it across a bridge to whatever triggers the user-facing download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(filename: String, content_type: &'static str, bytes: Vec<u8>) -> Self {
        ExportArtifact { filename, content_type, bytes }
    }

    /// The artifact body as text, for the two text-based formats.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Writes the artifact into `dir` under its own filename and returns
    /// the full path.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes).map_err(|e| {
            log::error!("failed to save {}: {e}", self.filename);
            e
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    #[test]
    fn filenames_are_date_stamped() {
        assert_eq!(csv_filename(date()), "attendance-data-2026-03-09.csv");
        assert_eq!(summary_filename(date()), "attendance-report-2026-03-09.txt");
        assert_eq!(workbook_filename(date()), "attendance-report-2026-03-09.xls");
    }

    #[test]
    fn save_writes_under_the_artifact_filename() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact::new(
            "attendance-data-2026-03-09.csv".to_string(),
            CSV_CONTENT_TYPE,
            b"a,b\n".to_vec(),
        );
        let path = artifact.save_to_dir(dir.path()).unwrap();
        assert!(path.ends_with("attendance-data-2026-03-09.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), b"a,b\n");
    }
}
