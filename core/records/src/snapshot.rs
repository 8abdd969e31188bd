//! FILENAME: core/records/src/snapshot.rs
//! PURPOSE: The externally supplied dashboard payload and its validation.
//! CONTEXT: A snapshot is fetched wholesale by the parent view; the store
//! never merges or diffs, it replaces. Validation is a separate, explicit
//! step: permissive callers render whatever arrives and skip it, hardened
//! callers fail fast on the first bad record.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::{AbsentEmployee, AttendanceRecord};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// The complete payload backing one load of the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub recent_attendances: Vec<AttendanceRecord>,
    pub not_attended_employees: Vec<AbsentEmployee>,

    // Headline figures computed server-side; displayed as-is by the
    // parent view, never recomputed here.
    #[serde(default)]
    pub attendance_percentage_today: f64,
    #[serde(default)]
    pub total_attended_today: u32,
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub total_not_attended_today: u32,
}

impl DashboardSnapshot {
    /// Checks every record for the invariants identity-based operations
    /// rely on. Returns the first violation found; `Ok(())` means the
    /// snapshot is safe to key, reorder, and export.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for (index, record) in self.recent_attendances.iter().enumerate() {
            if record.id.is_empty() {
                return Err(ValidationError::MissingField {
                    collection: Collection::Attendance,
                    index,
                    field: "id",
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    collection: Collection::Attendance,
                    id: record.id.clone(),
                });
            }
            if record.check_in_time.is_empty() {
                return Err(ValidationError::MissingField {
                    collection: Collection::Attendance,
                    index,
                    field: "checkInTime",
                });
            }
            if let Some(check_out) = &record.check_out_time {
                if !checkout_after_checkin(&record.check_in_time, check_out) {
                    return Err(ValidationError::CheckOutNotAfterCheckIn {
                        id: record.id.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for (index, employee) in self.not_attended_employees.iter().enumerate() {
            if employee.id.is_empty() {
                return Err(ValidationError::MissingField {
                    collection: Collection::Absence,
                    index,
                    field: "id",
                });
            }
            if !seen.insert(employee.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    collection: Collection::Absence,
                    id: employee.id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Returns false only when both timestamps parse under the same scheme and
/// the checkout is not strictly after the checkin. Unparseable values skip
/// the check; timestamp formats vary by backend deployment and a lenient
/// pass beats rejecting good data over formatting.
fn checkout_after_checkin(check_in: &str, check_out: &str) -> bool {
    if let (Some(start), Some(end)) = (parse_datetime(check_in), parse_datetime(check_out)) {
        return end > start;
    }
    if let (Some(start), Some(end)) = (parse_time(check_in), parse_time(check_out)) {
        return end > start;
    }
    true
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok())
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(value, "%H:%M").ok())
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Which collection a validation failure points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Attendance,
    Absence,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Attendance => write!(f, "attendance"),
            Collection::Absence => write!(f, "absence"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{collection} record at index {index} is missing `{field}`")]
    MissingField {
        collection: Collection,
        index: usize,
        field: &'static str,
    },

    #[error("duplicate id `{id}` in the {collection} collection")]
    DuplicateId { collection: Collection, id: String },

    #[error("attendance record `{id}`: checkOutTime is not after checkInTime")]
    CheckOutNotAfterCheckIn { id: String },
}
