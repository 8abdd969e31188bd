//! FILENAME: core/table-engine/src/reorder.rs
//! Reorder Controller - applies drag-end gestures as positional moves.
//!
//! Pointer, touch, and keyboard adapters in the rendering layer all
//! funnel into one `DragEndEvent`; this module translates it into an
//! index move scoped to whichever collection the dragged id belongs to.
//! An id can only live in one collection, so cross-collection drags are
//! impossible by construction.

use records::RecordStore;
use serde::{Deserialize, Serialize};

// ============================================================================
// GESTURE EVENT
// ============================================================================

/// The device-independent end-of-drag gesture. `over` is `None` when the
/// drag was released outside any valid drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndEvent {
    /// Id of the row being dragged.
    pub active: String,
    /// Id of the row it was dropped on, if any.
    #[serde(default)]
    pub over: Option<String>,
}

impl DragEndEvent {
    pub fn new(active: impl Into<String>, over: impl Into<String>) -> Self {
        DragEndEvent { active: active.into(), over: Some(over.into()) }
    }

    pub fn cancelled(active: impl Into<String>) -> Self {
        DragEndEvent { active: active.into(), over: None }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Which collection a reorder landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetCollection {
    Attendance,
    Absence,
}

/// What applying a drag-end event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The record moved from `from` to `to` within `collection`.
    Moved {
        collection: TargetCollection,
        from: usize,
        to: usize,
    },
    /// Cancelled drag, unknown endpoint, or a drop on itself; nothing
    /// changed.
    Ignored,
}

// ============================================================================
// APPLICATION
// ============================================================================

/// Applies a drag-end event to the store.
///
/// Membership is decided by the active id: if it belongs to the
/// attendance collection the move happens there and only there,
/// otherwise in the absence collection. Both endpoints must resolve
/// inside the same collection or the event is ignored.
pub fn apply_drag_end(store: &mut RecordStore, event: &DragEndEvent) -> ReorderOutcome {
    let Some(over_id) = event.over.as_deref() else {
        return ReorderOutcome::Ignored;
    };
    if event.active == over_id {
        return ReorderOutcome::Ignored;
    }

    if let Some(from) = store.attendance_index_of(&event.active) {
        return match store.attendance_index_of(over_id) {
            Some(to) if store.move_attendance(from, to) => ReorderOutcome::Moved {
                collection: TargetCollection::Attendance,
                from,
                to,
            },
            _ => ReorderOutcome::Ignored,
        };
    }

    if let Some(from) = store.absence_index_of(&event.active) {
        return match store.absence_index_of(over_id) {
            Some(to) if store.move_absence(from, to) => ReorderOutcome::Moved {
                collection: TargetCollection::Absence,
                from,
                to,
            },
            _ => ReorderOutcome::Ignored,
        };
    }

    ReorderOutcome::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::{AbsentEmployee, AttendanceRecord, AttendanceStatus, DashboardSnapshot};

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store.sync(DashboardSnapshot {
            recent_attendances: ["a1", "a2", "a3"]
                .iter()
                .map(|id| {
                    AttendanceRecord::new(*id, "x", AttendanceStatus::Present, "09:00")
                })
                .collect(),
            not_attended_employees: ["b1", "b2", "b3"]
                .iter()
                .map(|id| AbsentEmployee::new(*id, "y", "z"))
                .collect(),
            ..Default::default()
        });
        store
    }

    fn attendance_order(store: &RecordStore) -> Vec<&str> {
        store.ordered_attendance().iter().map(|r| r.id.as_str()).collect()
    }

    fn absence_order(store: &RecordStore) -> Vec<&str> {
        store.ordered_absences().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn moves_within_attendance_only() {
        let mut store = store();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("a1", "a3"));
        assert_eq!(
            outcome,
            ReorderOutcome::Moved {
                collection: TargetCollection::Attendance,
                from: 0,
                to: 2,
            }
        );
        assert_eq!(attendance_order(&store), vec!["a2", "a3", "a1"]);
        assert_eq!(absence_order(&store), vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn moves_within_absences_only() {
        let mut store = store();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("b3", "b1"));
        assert_eq!(
            outcome,
            ReorderOutcome::Moved {
                collection: TargetCollection::Absence,
                from: 2,
                to: 0,
            }
        );
        assert_eq!(absence_order(&store), vec!["b3", "b1", "b2"]);
        assert_eq!(attendance_order(&store), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn drop_on_itself_is_idempotent() {
        let mut store = store();
        let before = attendance_order(&store)
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("a2", "a2"));
        assert_eq!(outcome, ReorderOutcome::Ignored);
        assert_eq!(attendance_order(&store), before);
    }

    #[test]
    fn cancelled_drag_changes_nothing() {
        let mut store = store();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::cancelled("a1"));
        assert_eq!(outcome, ReorderOutcome::Ignored);
        assert_eq!(attendance_order(&store), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn cross_collection_drop_is_ignored() {
        let mut store = store();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("a1", "b2"));
        assert_eq!(outcome, ReorderOutcome::Ignored);
        assert_eq!(attendance_order(&store), vec!["a1", "a2", "a3"]);
        assert_eq!(absence_order(&store), vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = store();
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("ghost", "a1"));
        assert_eq!(outcome, ReorderOutcome::Ignored);
        let outcome = apply_drag_end(&mut store, &DragEndEvent::new("a1", "ghost"));
        assert_eq!(outcome, ReorderOutcome::Ignored);
    }

    #[test]
    fn move_keeps_id_multiset() {
        let mut store = store();
        apply_drag_end(&mut store, &DragEndEvent::new("a3", "a1"));
        apply_drag_end(&mut store, &DragEndEvent::new("a1", "a2"));
        let mut ids = attendance_order(&store);
        ids.sort_unstable();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);
    }
}
