//! FILENAME: core/records/src/model.rs
//! PURPOSE: Defines the two record types shown in the dashboard tables.
//! CONTEXT: An `AttendanceRecord` is a positive observation (the employee
//! checked in today); an `AbsentEmployee` is a negative-space record (no
//! attendance was found for them today). The two never convert into each
//! other. Field names serialize in camelCase to match the backend payload.

use serde::{Deserialize, Serialize};

// ============================================================================
// ATTENDANCE STATUS
// ============================================================================

/// The closed set of statuses an attendance record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

impl AttendanceStatus {
    /// The wire form of the status (`present`, `absent`, `late`, `halfDay`).
    /// Exports write this string verbatim.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "halfDay",
        }
    }
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        AttendanceStatus::Present
    }
}

// ============================================================================
// ATTENDANCE RECORD
// ============================================================================

/// One row of today's attendance table.
///
/// `id` is an opaque backend identifier: unique within the collection,
/// immutable for the session, and the key used by row rendering and drag
/// reordering. `check_in_time` is always present for this collection;
/// `check_out_time` stays `None` until a checkout is recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub section: String,
    pub status: AttendanceStatus,
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: Option<String>,

    // Optional descriptive fields; the backend omits any of these freely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AttendanceRecord {
    /// Creates a record with the identifying fields set and everything
    /// else defaulted. Mostly useful for fixtures.
    pub fn new(
        id: impl Into<String>,
        employee_name: impl Into<String>,
        status: AttendanceStatus,
        check_in_time: impl Into<String>,
    ) -> Self {
        AttendanceRecord {
            id: id.into(),
            employee_name: employee_name.into(),
            status,
            check_in_time: check_in_time.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// ABSENT EMPLOYEE
// ============================================================================

/// One row of today's absence table.
///
/// This is the employee directory entry for someone with no attendance
/// record today, not a status transition of an `AttendanceRecord`. `role`
/// is free-form text from the directory, not an application role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsentEmployee {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub section: String,
    pub department: String,

    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_joining: Option<String>,

    #[serde(default)]
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub created_by: Option<String>,

    // Derived/optional display fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl AbsentEmployee {
    /// Creates an entry with the identifying fields set and everything
    /// else defaulted. Mostly useful for fixtures.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        AbsentEmployee {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_active: true,
            ..Default::default()
        }
    }

    /// The name shown in tables and exports: the precomputed
    /// `employee_name` when the backend supplied one, otherwise
    /// "first last".
    pub fn display_name(&self) -> String {
        match &self.employee_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
