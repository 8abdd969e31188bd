//! FILENAME: core/table-engine/src/columns.rs
//! The two concrete table definitions: attendance and absences.
//!
//! Column ids match the frontend's camelCase keys so view state
//! serialized by a client round-trips cleanly.

use records::{AbsentEmployee, AttendanceRecord};

use crate::definition::{ColumnDef, TableDefinition};
use crate::view::CellValue;

// ============================================================================
// ATTENDANCE TABLE
// ============================================================================

fn attendance_id(r: &AttendanceRecord) -> &str {
    &r.id
}

fn attendance_name(r: &AttendanceRecord) -> CellValue {
    CellValue::text(&r.employee_name)
}

fn attendance_employee_id(r: &AttendanceRecord) -> CellValue {
    CellValue::text(&r.employee_id)
}

fn attendance_department(r: &AttendanceRecord) -> CellValue {
    CellValue::text(&r.department)
}

fn attendance_section(r: &AttendanceRecord) -> CellValue {
    CellValue::text(&r.section)
}

fn attendance_status(r: &AttendanceRecord) -> CellValue {
    CellValue::text(r.status.as_str())
}

fn attendance_check_in(r: &AttendanceRecord) -> CellValue {
    CellValue::text(&r.check_in_time)
}

fn attendance_check_out(r: &AttendanceRecord) -> CellValue {
    CellValue::opt_text(&r.check_out_time)
}

fn attendance_duration(r: &AttendanceRecord) -> CellValue {
    CellValue::opt_text(&r.duration)
}

/// The table over today's attendance records.
pub fn attendance_table() -> TableDefinition<AttendanceRecord> {
    TableDefinition::new(
        "attendance",
        vec![
            ColumnDef::new("employeeName", "Employee Name", attendance_name),
            ColumnDef::new("employeeId", "Employee ID", attendance_employee_id),
            ColumnDef::new("department", "Department", attendance_department),
            ColumnDef::new("section", "Section", attendance_section).hidden_by_default(),
            ColumnDef::new("status", "Status", attendance_status),
            ColumnDef::new("checkInTime", "Check In", attendance_check_in),
            ColumnDef::new("checkOutTime", "Check Out", attendance_check_out),
            ColumnDef::new("duration", "Duration", attendance_duration).not_sortable(),
        ],
        attendance_id,
    )
    .with_filter_column("employeeName")
}

// ============================================================================
// ABSENCE TABLE
// ============================================================================

fn absence_id(e: &AbsentEmployee) -> &str {
    &e.id
}

fn absence_name(e: &AbsentEmployee) -> CellValue {
    CellValue::Text(e.display_name())
}

fn absence_employee_id(e: &AbsentEmployee) -> CellValue {
    CellValue::text(&e.employee_id)
}

fn absence_department(e: &AbsentEmployee) -> CellValue {
    CellValue::text(&e.department)
}

fn absence_section(e: &AbsentEmployee) -> CellValue {
    CellValue::text(&e.section)
}

fn absence_designation(e: &AbsentEmployee) -> CellValue {
    CellValue::opt_text(&e.designation)
}

fn absence_role(e: &AbsentEmployee) -> CellValue {
    CellValue::text(&e.role)
}

fn absence_active(e: &AbsentEmployee) -> CellValue {
    CellValue::Boolean(e.is_active)
}

fn absence_reason(e: &AbsentEmployee) -> CellValue {
    CellValue::opt_text(&e.reason)
}

/// The table over employees with no attendance record today.
pub fn absence_table() -> TableDefinition<AbsentEmployee> {
    TableDefinition::new(
        "absences",
        vec![
            ColumnDef::new("employeeName", "Employee Name", absence_name),
            ColumnDef::new("employeeId", "Employee ID", absence_employee_id),
            ColumnDef::new("department", "Department", absence_department),
            ColumnDef::new("section", "Section", absence_section).hidden_by_default(),
            ColumnDef::new("designation", "Designation", absence_designation),
            ColumnDef::new("role", "Role", absence_role).hidden_by_default(),
            ColumnDef::new("isActive", "Active", absence_active),
            ColumnDef::new("reason", "Reason", absence_reason).not_sortable(),
        ],
        absence_id,
    )
    .with_filter_column("employeeName")
}
