//! FILENAME: core/export-engine/src/summary.rs
//! Plain-text summary report: the day's counts and attendance rate.

use chrono::{NaiveDate, NaiveDateTime};
use report_engine::AttendanceTotals;

use crate::artifact::{summary_filename, ExportArtifact, SUMMARY_CONTENT_TYPE};

/// Renders the summary block. The rate comes from the shared totals
/// computation, so it always matches what the chart header shows.
pub fn summary_report(
    totals: AttendanceTotals,
    report_date: NaiveDate,
    generated_at: NaiveDateTime,
) -> String {
    format!(
        "Attendance Report\n\
         Date: {date}\n\
         \n\
         Present: {present}\n\
         Absent: {absent}\n\
         Total: {total}\n\
         Attendance Rate: {rate:.1}%\n\
         \n\
         Generated: {generated}\n",
        date = report_date.format("%Y-%m-%d"),
        present = totals.present,
        absent = totals.absent,
        total = totals.total(),
        rate = totals.rate_percent(),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// The summary packaged as a downloadable artifact.
pub fn summary_artifact(
    totals: AttendanceTotals,
    report_date: NaiveDate,
    generated_at: NaiveDateTime,
) -> ExportArtifact {
    ExportArtifact::new(
        summary_filename(report_date),
        SUMMARY_CONTENT_TYPE,
        summary_report(totals, report_date, generated_at).into_bytes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> (NaiveDate, NaiveDateTime) {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        (date, date.and_hms_opt(14, 30, 5).unwrap())
    }

    #[test]
    fn summary_lists_counts_and_rate() {
        let (date, at) = stamp();
        let report = summary_report(AttendanceTotals::new(2, 1), date, at);
        assert!(report.contains("Date: 2026-03-09"));
        assert!(report.contains("Present: 2"));
        assert!(report.contains("Absent: 1"));
        assert!(report.contains("Total: 3"));
        assert!(report.contains("Attendance Rate: 66.7%"));
        assert!(report.contains("Generated: 2026-03-09 14:30:05"));
    }

    #[test]
    fn empty_day_reports_zero_rate() {
        let (date, at) = stamp();
        let report = summary_report(AttendanceTotals::new(0, 0), date, at);
        assert!(report.contains("Total: 0"));
        assert!(report.contains("Attendance Rate: 0.0%"));
    }

    #[test]
    fn artifact_uses_txt_report_name() {
        let (date, at) = stamp();
        let artifact = summary_artifact(AttendanceTotals::new(1, 1), date, at);
        assert_eq!(artifact.filename, "attendance-report-2026-03-09.txt");
        assert_eq!(artifact.content_type, SUMMARY_CONTENT_TYPE);
        assert!(artifact.as_text().unwrap().contains("Attendance Rate: 50.0%"));
    }
}
