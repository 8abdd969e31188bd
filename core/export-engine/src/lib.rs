//! FILENAME: core/export-engine/src/lib.rs
//! Export Module for the attendance dashboard.
//!
//! Produces the three downloadable reports over the current collections:
//! a plain-text summary, a CSV, and a spreadsheet workbook. All three
//! share the same column order and the same guarded rate computation
//! from `report-engine`, and all three respect the single in-flight
//! generation flag.

pub mod artifact;
pub mod csv;
pub mod error;
pub mod status;
pub mod summary;
pub mod workbook;

pub use artifact::{
    csv_filename, summary_filename, workbook_filename, ExportArtifact, CSV_CONTENT_TYPE,
    SUMMARY_CONTENT_TYPE, WORKBOOK_CONTENT_TYPE,
};
pub use csv::{csv_artifact, csv_report, ABSENT_STATUS, MISSING_TIME, REPORT_HEADER};
pub use error::ExportError;
pub use status::{GenerationGuard, GenerationState};
pub use summary::{summary_artifact, summary_report};
pub use workbook::{workbook_artifact, workbook_bytes};
