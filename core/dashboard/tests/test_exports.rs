//! FILENAME: tests/test_exports.rs
//! PURPOSE: The three export artifacts produced through the facade:
//! content, filenames, zero-record behavior, and the generation flag.

mod common;

use chrono::NaiveDate;
use common::sample_snapshot;
use dashboard::AttendanceDashboard;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

fn loaded_dashboard() -> AttendanceDashboard {
    let mut dashboard = AttendanceDashboard::new();
    dashboard.load_snapshot(sample_snapshot()).unwrap();
    dashboard
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn csv_export_matches_the_worked_scenario() {
    let dashboard = loaded_dashboard();
    let artifact = dashboard.export_csv(report_date()).unwrap();
    assert_eq!(artifact.filename, "attendance-data-2026-03-09.csv");

    let text = artifact.as_text().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header + 2 attendance rows + 1 absence row.
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Employee Name,Employee ID,Department,Status,Check In,Check Out"
    );
    assert_eq!(lines[1], "Alice Chen,E-a1,Engineering,present,09:00,17:30");
    assert_eq!(lines[2], "Bob Iverson,E-a2,Engineering,late,10:20,N/A");
    assert_eq!(lines[3], "Carol Diaz,E-b1,Operations,absent,N/A,N/A");
}

#[test]
fn csv_row_count_tracks_both_collections() {
    let dashboard = loaded_dashboard();
    let artifact = dashboard.export_csv(report_date()).unwrap();
    let data_rows = artifact.as_text().unwrap().lines().count() - 1;

    let totals = dashboard.totals();
    assert_eq!(data_rows, totals.present + totals.absent);
}

#[test]
fn csv_export_reflects_manual_reorder() {
    let mut dashboard = loaded_dashboard();
    dashboard.handle_drag_end(&table_engine::DragEndEvent::new("a2", "a1"));

    let artifact = dashboard.export_csv(report_date()).unwrap();
    let text = artifact.as_text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with("Bob Iverson,"));
    assert!(lines[2].starts_with("Alice Chen,"));
}

// ============================================================================
// SUMMARY
// ============================================================================

#[test]
fn summary_export_reports_counts_and_rate() {
    let dashboard = loaded_dashboard();
    let generated_at = report_date().and_hms_opt(15, 2, 44).unwrap();
    let artifact = dashboard.export_summary(report_date(), generated_at).unwrap();

    assert_eq!(artifact.filename, "attendance-report-2026-03-09.txt");
    let text = artifact.as_text().unwrap();
    assert!(text.contains("Present: 2"));
    assert!(text.contains("Absent: 1"));
    assert!(text.contains("Total: 3"));
    assert!(text.contains("Attendance Rate: 66.7%"));
    assert!(text.contains("Generated: 2026-03-09 15:02:44"));
}

// ============================================================================
// WORKBOOK
// ============================================================================

#[test]
fn workbook_export_is_a_real_spreadsheet() {
    let dashboard = loaded_dashboard();
    let artifact = dashboard.export_workbook(report_date()).unwrap();

    assert_eq!(artifact.filename, "attendance-report-2026-03-09.xls");
    assert_eq!(artifact.content_type, "application/vnd.ms-excel");
    assert_eq!(&artifact.bytes[..2], b"PK");
}

// ============================================================================
// ZERO-RECORD EXPORTS
// ============================================================================

#[test]
fn empty_dashboard_exports_are_well_formed() {
    let dashboard = AttendanceDashboard::new();

    let csv = dashboard.export_csv(report_date()).unwrap();
    assert_eq!(csv.as_text().unwrap().lines().count(), 1); // header only

    let generated_at = report_date().and_hms_opt(8, 0, 0).unwrap();
    let summary = dashboard.export_summary(report_date(), generated_at).unwrap();
    assert!(summary.as_text().unwrap().contains("Attendance Rate: 0.0%"));

    let workbook = dashboard.export_workbook(report_date()).unwrap();
    assert!(!workbook.bytes.is_empty());
}

// ============================================================================
// GENERATION FLAG
// ============================================================================

#[test]
fn flag_is_clear_between_sequential_exports() {
    let dashboard = loaded_dashboard();
    assert!(!dashboard.is_generating());

    let generated_at = report_date().and_hms_opt(9, 0, 0).unwrap();
    dashboard.export_csv(report_date()).unwrap();
    assert!(!dashboard.is_generating());
    dashboard.export_summary(report_date(), generated_at).unwrap();
    assert!(!dashboard.is_generating());
    dashboard.export_workbook(report_date()).unwrap();
    assert!(!dashboard.is_generating());
}

// ============================================================================
// SAVING TO DISK
// ============================================================================

#[test]
fn artifacts_save_under_their_own_filenames() {
    let dashboard = loaded_dashboard();
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dashboard
        .export_csv(report_date())
        .unwrap()
        .save_to_dir(dir.path())
        .unwrap();
    let workbook_path = dashboard
        .export_workbook(report_date())
        .unwrap()
        .save_to_dir(dir.path())
        .unwrap();

    assert!(csv_path.ends_with("attendance-data-2026-03-09.csv"));
    assert!(workbook_path.ends_with("attendance-report-2026-03-09.xls"));
    assert!(csv_path.exists());
    assert!(workbook_path.exists());
}
