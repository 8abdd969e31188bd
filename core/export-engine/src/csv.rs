//! FILENAME: core/export-engine/src/csv.rs
//! CSV report over the current attendance and absence collections.
//!
//! One header row, then one row per attendance record in view order,
//! then one row per absence entry. Absence rows carry a hardcoded
//! `absent` status and `N/A` in both time columns; attendance rows show
//! `N/A` only for a missing checkout. Fields are quoted per RFC 4180
//! when they embed commas, quotes, or line breaks.

use chrono::NaiveDate;
use records::{AbsentEmployee, AttendanceRecord};
use std::borrow::Cow;

use crate::artifact::{csv_filename, ExportArtifact, CSV_CONTENT_TYPE};

/// Column order of the report; the workbook export mirrors it exactly.
pub const REPORT_HEADER: [&str; 6] = [
    "Employee Name",
    "Employee ID",
    "Department",
    "Status",
    "Check In",
    "Check Out",
];

/// Placeholder written into time columns with no value.
pub const MISSING_TIME: &str = "N/A";

/// Status written for every absence-derived row.
pub const ABSENT_STATUS: &str = "absent";

// ============================================================================
// SERIALIZATION
// ============================================================================

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row(out: &mut String, fields: [&str; 6]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Serializes both collections into one CSV document.
pub fn csv_report(attendance: &[AttendanceRecord], absences: &[AbsentEmployee]) -> String {
    let mut out = String::new();
    push_row(&mut out, REPORT_HEADER);

    for record in attendance {
        push_row(
            &mut out,
            [
                &record.employee_name,
                &record.employee_id,
                &record.department,
                record.status.as_str(),
                &record.check_in_time,
                record.check_out_time.as_deref().unwrap_or(MISSING_TIME),
            ],
        );
    }

    for employee in absences {
        push_row(
            &mut out,
            [
                &employee.display_name(),
                &employee.employee_id,
                &employee.department,
                ABSENT_STATUS,
                MISSING_TIME,
                MISSING_TIME,
            ],
        );
    }

    out
}

/// The CSV report packaged as a downloadable artifact.
pub fn csv_artifact(
    attendance: &[AttendanceRecord],
    absences: &[AbsentEmployee],
    date: NaiveDate,
) -> ExportArtifact {
    ExportArtifact::new(
        csv_filename(date),
        CSV_CONTENT_TYPE,
        csv_report(attendance, absences).into_bytes(),
    )
}
