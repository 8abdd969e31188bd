//! FILENAME: tests/common/mod.rs
//! Fixtures for dashboard integration tests.

use records::{AbsentEmployee, AttendanceRecord, AttendanceStatus, DashboardSnapshot};

/// An attendance record with the fields the tables and exports read.
pub fn attendance(
    id: &str,
    name: &str,
    status: AttendanceStatus,
    check_in: &str,
    check_out: Option<&str>,
) -> AttendanceRecord {
    let mut record = AttendanceRecord::new(id, name, status, check_in);
    record.employee_id = format!("E-{id}");
    record.department = "Engineering".to_string();
    record.section = "Platform".to_string();
    record.check_out_time = check_out.map(str::to_string);
    record
}

/// An absence entry with enough profile data to render.
pub fn absentee(id: &str, first: &str, last: &str) -> AbsentEmployee {
    let mut employee = AbsentEmployee::new(id, first, last);
    employee.employee_id = format!("E-{id}");
    employee.department = "Operations".to_string();
    employee.section = "Field".to_string();
    employee.role = "Technician".to_string();
    employee
}

/// The worked scenario used across the suite: two attendance records
/// (present, late with no checkout) and one absentee. Rate works out to
/// 66.7.
pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        recent_attendances: vec![
            attendance("a1", "Alice Chen", AttendanceStatus::Present, "09:00", Some("17:30")),
            attendance("a2", "Bob Iverson", AttendanceStatus::Late, "10:20", None),
        ],
        not_attended_employees: vec![absentee("b1", "Carol", "Diaz")],
        attendance_percentage_today: 66.7,
        total_attended_today: 2,
        total_employees: 3,
        total_not_attended_today: 1,
    }
}

/// A larger snapshot for pagination scenarios: `n_attendance` records
/// and `n_absent` absentees with sequential ids.
pub fn snapshot_of(n_attendance: usize, n_absent: usize) -> DashboardSnapshot {
    DashboardSnapshot {
        recent_attendances: (0..n_attendance)
            .map(|i| {
                attendance(
                    &format!("a{i}"),
                    &format!("Employee {i:02}"),
                    AttendanceStatus::Present,
                    "09:00",
                    None,
                )
            })
            .collect(),
        not_attended_employees: (0..n_absent)
            .map(|i| absentee(&format!("b{i}"), "Absent", &format!("{i:02}")))
            .collect(),
        ..Default::default()
    }
}
