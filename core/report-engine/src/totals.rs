//! FILENAME: core/report-engine/src/totals.rs
//! Present/absent counts and the attendance rate.
//!
//! Every consumer of the rate (summary export, workbook export, chart
//! header) goes through `rate_percent` so the zero guard and the
//! one-decimal rounding are identical everywhere.

use records::{AbsentEmployee, AttendanceRecord};
use serde::{Deserialize, Serialize};

/// Counts derived from the two collections at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTotals {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceTotals {
    pub fn new(present: usize, absent: usize) -> Self {
        AttendanceTotals { present, absent }
    }

    /// Counts the current collections: every attendance record counts as
    /// present for the rate (late and half-day included), every absence
    /// entry as absent.
    pub fn from_records(attendance: &[AttendanceRecord], absences: &[AbsentEmployee]) -> Self {
        AttendanceTotals {
            present: attendance.len(),
            absent: absences.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    /// Attendance rate as a percentage rounded to one decimal place.
    /// An empty day reports 0 rather than dividing by zero.
    pub fn rate_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let raw = self.present as f64 / total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}
