//! FILENAME: core/records/src/store.rs
//! PURPOSE: In-memory ordered holder for the two table collections.
//! CONTEXT: The store mirrors the latest snapshot and owns the current
//! (possibly reordered) view order. A re-sync replaces both collections
//! wholesale, so manual reordering does not survive a refetch.

use crate::model::{AbsentEmployee, AttendanceRecord};
use crate::snapshot::DashboardSnapshot;

// ============================================================================
// HEADLINE FIGURES
// ============================================================================

/// Server-computed figures riding on the snapshot. Read-only pass-through
/// for the parent view's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadlineFigures {
    pub attendance_percentage_today: f64,
    pub total_attended_today: u32,
    pub total_employees: u32,
    pub total_not_attended_today: u32,
}

// ============================================================================
// RECORD STORE
// ============================================================================

/// Ordered storage for the attendance and absence collections.
///
/// The only mutations are `sync` (wholesale replacement from a snapshot)
/// and the positional moves used by drag reordering. Sorting, filtering,
/// and pagination live in the view layer and never touch this order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    attendance: Vec<AttendanceRecord>,
    absences: Vec<AbsentEmployee>,
    headline: HeadlineFigures,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Replaces both collections with the snapshot's contents, in snapshot
    /// order. Any in-progress manual reordering is discarded.
    pub fn sync(&mut self, snapshot: DashboardSnapshot) {
        self.headline = HeadlineFigures {
            attendance_percentage_today: snapshot.attendance_percentage_today,
            total_attended_today: snapshot.total_attended_today,
            total_employees: snapshot.total_employees,
            total_not_attended_today: snapshot.total_not_attended_today,
        };
        self.attendance = snapshot.recent_attendances;
        self.absences = snapshot.not_attended_employees;
    }

    pub fn ordered_attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn ordered_absences(&self) -> &[AbsentEmployee] {
        &self.absences
    }

    pub fn headline(&self) -> HeadlineFigures {
        self.headline
    }

    // ========================================================================
    // ID LOOKUP
    // ========================================================================

    pub fn attendance_index_of(&self, id: &str) -> Option<usize> {
        self.attendance.iter().position(|r| r.id == id)
    }

    pub fn absence_index_of(&self, id: &str) -> Option<usize> {
        self.absences.iter().position(|e| e.id == id)
    }

    // ========================================================================
    // POSITIONAL MOVES
    // ========================================================================

    /// Moves the attendance record at `from` so it lands at index `to`.
    /// Returns whether the order changed; out-of-bounds indices and
    /// `from == to` leave the collection untouched.
    pub fn move_attendance(&mut self, from: usize, to: usize) -> bool {
        move_within(&mut self.attendance, from, to)
    }

    /// Same as `move_attendance`, for the absence collection.
    pub fn move_absence(&mut self, from: usize, to: usize) -> bool {
        move_within(&mut self.absences, from, to)
    }
}

/// Classic array move: remove at `from`, reinsert at `to`. The element
/// ends up at exactly index `to` in the new order.
fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
