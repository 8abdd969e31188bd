//! FILENAME: core/export-engine/src/workbook.rs
//! Spreadsheet export: a real workbook over the same rows as the CSV.
//!
//! Layout: a title row, the report date, then the shared header and one
//! row per record in exactly the CSV column order, then a totals block.
//! The artifact keeps the `.xls` filename the console has always served;
//! the bytes are a genuine workbook and open in spreadsheet apps.

use chrono::NaiveDate;
use records::{AbsentEmployee, AttendanceRecord};
use report_engine::AttendanceTotals;
use rust_xlsxwriter::{Format, Workbook};

use crate::artifact::{workbook_filename, ExportArtifact, WORKBOOK_CONTENT_TYPE};
use crate::csv::{ABSENT_STATUS, MISSING_TIME, REPORT_HEADER};
use crate::error::ExportError;

/// Builds the workbook and returns its serialized bytes.
pub fn workbook_bytes(
    attendance: &[AttendanceRecord],
    absences: &[AbsentEmployee],
    report_date: NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance")?;

    worksheet.write_string_with_format(0, 0, "Attendance Report", &title_format)?;
    worksheet.write_string(1, 0, &format!("Date: {}", report_date.format("%Y-%m-%d")))?;

    // Header row mirrors the CSV column order.
    for (col, header) in REPORT_HEADER.iter().enumerate() {
        worksheet.write_string_with_format(3, col as u16, *header, &header_format)?;
    }

    let mut row: u32 = 4;
    for record in attendance {
        worksheet.write_string(row, 0, &record.employee_name)?;
        worksheet.write_string(row, 1, &record.employee_id)?;
        worksheet.write_string(row, 2, &record.department)?;
        worksheet.write_string(row, 3, record.status.as_str())?;
        worksheet.write_string(row, 4, &record.check_in_time)?;
        worksheet.write_string(
            row,
            5,
            record.check_out_time.as_deref().unwrap_or(MISSING_TIME),
        )?;
        row += 1;
    }

    for employee in absences {
        worksheet.write_string(row, 0, &employee.display_name())?;
        worksheet.write_string(row, 1, &employee.employee_id)?;
        worksheet.write_string(row, 2, &employee.department)?;
        worksheet.write_string(row, 3, ABSENT_STATUS)?;
        worksheet.write_string(row, 4, MISSING_TIME)?;
        worksheet.write_string(row, 5, MISSING_TIME)?;
        row += 1;
    }

    // Totals block under the data.
    let totals = AttendanceTotals::from_records(attendance, absences);
    row += 1;
    worksheet.write_string_with_format(row, 0, "Present", &header_format)?;
    worksheet.write_number(row, 1, totals.present as f64)?;
    worksheet.write_string_with_format(row + 1, 0, "Absent", &header_format)?;
    worksheet.write_number(row + 1, 1, totals.absent as f64)?;
    worksheet.write_string_with_format(row + 2, 0, "Total", &header_format)?;
    worksheet.write_number(row + 2, 1, totals.total() as f64)?;
    worksheet.write_string_with_format(row + 3, 0, "Attendance Rate (%)", &header_format)?;
    worksheet.write_number(row + 3, 1, totals.rate_percent())?;

    // Readable default widths for the name-ish columns.
    worksheet.set_column_width(0, 24.0)?;
    worksheet.set_column_width(1, 14.0)?;
    worksheet.set_column_width(2, 18.0)?;

    Ok(workbook.save_to_buffer()?)
}

/// The workbook packaged as a downloadable artifact. Failures are
/// logged here so every caller gets the same trace.
pub fn workbook_artifact(
    attendance: &[AttendanceRecord],
    absences: &[AbsentEmployee],
    report_date: NaiveDate,
) -> Result<ExportArtifact, ExportError> {
    let bytes = workbook_bytes(attendance, absences, report_date).map_err(|e| {
        log::error!("workbook generation failed: {e}");
        e
    })?;
    Ok(ExportArtifact::new(
        workbook_filename(report_date),
        WORKBOOK_CONTENT_TYPE,
        bytes,
    ))
}
