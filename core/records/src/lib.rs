//! FILENAME: core/records/src/lib.rs
//! PURPOSE: Data model and record store for the attendance dashboard.
//! CONTEXT: Holds the two table collections (today's attendance, today's
//! absentees) exactly as the backend delivered them, plus the positional
//! moves drag reordering needs. Everything downstream (views, exports,
//! analytics) reads from here.

pub mod model;
pub mod snapshot;
pub mod store;

// Re-export commonly used types at the crate root
pub use model::{AbsentEmployee, AttendanceRecord, AttendanceStatus};
pub use snapshot::{Collection, DashboardSnapshot, ValidationError};
pub use store::{HeadlineFigures, RecordStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_form() {
        assert_eq!(AttendanceStatus::Present.as_str(), "present");
        assert_eq!(AttendanceStatus::HalfDay.as_str(), "halfDay");
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"halfDay\"");
    }

    #[test]
    fn snapshot_round_trips_backend_json() {
        let payload = serde_json::json!({
            "recentAttendances": [{
                "id": "att-1",
                "employeeName": "Alice Chen",
                "employeeId": "E-100",
                "department": "Engineering",
                "section": "Platform",
                "status": "late",
                "checkInTime": "09:42",
                "checkOutTime": null
            }],
            "notAttendedEmployees": [{
                "id": "emp-7",
                "email": "bob@example.com",
                "username": "bob",
                "role": "Senior Technician",
                "firstName": "Bob",
                "lastName": "Iverson",
                "employeeId": "E-101",
                "section": "Field",
                "department": "Operations",
                "isActive": true,
                "createdAt": "2024-01-05T08:00:00Z",
                "updatedAt": "2024-06-01T08:00:00Z"
            }],
            "attendancePercentageToday": 50.0,
            "totalAttendedToday": 1,
            "totalEmployees": 2,
            "totalNotAttendedToday": 1
        });

        let snapshot: DashboardSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.recent_attendances.len(), 1);
        assert_eq!(snapshot.recent_attendances[0].status, AttendanceStatus::Late);
        assert!(snapshot.recent_attendances[0].check_out_time.is_none());
        assert_eq!(snapshot.not_attended_employees[0].display_name(), "Bob Iverson");
        assert!(snapshot.validate().is_ok());

        // And back out: camelCase keys survive.
        let out = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(out["recentAttendances"][0]["employeeName"], "Alice Chen");
        assert_eq!(out["notAttendedEmployees"][0]["firstName"], "Bob");
    }

    #[test]
    fn validate_rejects_empty_id() {
        let mut snapshot = DashboardSnapshot::default();
        snapshot.recent_attendances.push(AttendanceRecord::new(
            "",
            "Nameless",
            AttendanceStatus::Present,
            "09:00",
        ));

        let err = snapshot.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                collection: Collection::Attendance,
                index: 0,
                field: "id",
            }
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut snapshot = DashboardSnapshot::default();
        snapshot.not_attended_employees.push(AbsentEmployee::new("x", "A", "B"));
        snapshot.not_attended_employees.push(AbsentEmployee::new("x", "C", "D"));

        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn validate_rejects_checkout_before_checkin() {
        let mut record =
            AttendanceRecord::new("a", "Alice", AttendanceStatus::Present, "09:00");
        record.check_out_time = Some("08:30".to_string());

        let mut snapshot = DashboardSnapshot::default();
        snapshot.recent_attendances.push(record);

        let err = snapshot.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::CheckOutNotAfterCheckIn { id: "a".to_string() }
        );
    }

    #[test]
    fn validate_skips_chronology_on_unparseable_times() {
        let mut record =
            AttendanceRecord::new("a", "Alice", AttendanceStatus::Present, "morning");
        record.check_out_time = Some("noonish".to_string());

        let mut snapshot = DashboardSnapshot::default();
        snapshot.recent_attendances.push(record);
        assert!(snapshot.validate().is_ok());
    }
}
