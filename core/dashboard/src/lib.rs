//! FILENAME: core/dashboard/src/lib.rs
//! The attendance dashboard core: one object owning the record store,
//! the two independent table views, the export generation flag, and the
//! trend source. This is the surface a rendering frontend talks to.
//!
//! Snapshot in, views and artifacts out; no network, no persistence.

use chrono::{Local, NaiveDate, NaiveDateTime};

use export_engine::{
    csv_artifact, summary_artifact, workbook_artifact, ExportArtifact, ExportError,
    GenerationState,
};
use records::{
    AbsentEmployee, AttendanceRecord, DashboardSnapshot, HeadlineFigures, RecordStore,
    ValidationError,
};
use report_engine::{
    AttendanceTotals, StaticTrendSource, TrendChartData, TrendSource,
};
use table_engine::{
    absence_table, apply_drag_end, attendance_table, DragEndEvent, ReorderOutcome, TableView,
    TableViewState,
};

// ============================================================================
// DASHBOARD
// ============================================================================

/// The complete data-table widget: two reorderable, independently
/// sortable/filterable/paginated tables over one snapshot, plus exports
/// and chart aggregates derived from the same collections.
pub struct AttendanceDashboard {
    store: RecordStore,
    attendance_state: TableViewState<AttendanceRecord>,
    absence_state: TableViewState<AbsentEmployee>,
    generation: GenerationState,
    trend_source: Box<dyn TrendSource>,
}

impl AttendanceDashboard {
    pub fn new() -> Self {
        AttendanceDashboard {
            store: RecordStore::new(),
            attendance_state: TableViewState::new(attendance_table()),
            absence_state: TableViewState::new(absence_table()),
            generation: GenerationState::new(),
            trend_source: Box::new(StaticTrendSource),
        }
    }

    /// Same dashboard with a caller-supplied trend source (e.g. a real
    /// aggregation over recorded history).
    pub fn with_trend_source(trend_source: Box<dyn TrendSource>) -> Self {
        AttendanceDashboard {
            trend_source,
            ..AttendanceDashboard::new()
        }
    }

    // ========================================================================
    // SNAPSHOT
    // ========================================================================

    /// Validates and loads a freshly fetched snapshot. Both collections
    /// are replaced wholesale; view preferences (sort, filter,
    /// visibility, page size) survive, selections are pruned to ids that
    /// still exist, and the page clamps to the new page count at the
    /// next projection.
    pub fn load_snapshot(&mut self, snapshot: DashboardSnapshot) -> Result<(), ValidationError> {
        snapshot.validate().map_err(|e| {
            log::warn!("rejected snapshot: {e}");
            e
        })?;
        self.replace_collections(snapshot);
        Ok(())
    }

    /// Loads without validating, for callers that render whatever the
    /// backend sent. Malformed ids degrade reordering and selection to
    /// no-ops for the affected rows.
    pub fn load_snapshot_unchecked(&mut self, snapshot: DashboardSnapshot) {
        self.replace_collections(snapshot);
    }

    fn replace_collections(&mut self, snapshot: DashboardSnapshot) {
        log::debug!(
            "syncing snapshot: {} attendance, {} absent",
            snapshot.recent_attendances.len(),
            snapshot.not_attended_employees.len()
        );
        self.store.sync(snapshot);

        let store = &self.store;
        self.attendance_state
            .prune_selection(|id| store.attendance_index_of(id).is_some());
        self.absence_state
            .prune_selection(|id| store.absence_index_of(id).is_some());
    }

    pub fn headline(&self) -> HeadlineFigures {
        self.store.headline()
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Projects the attendance table under its current view state.
    pub fn attendance_view(&self) -> TableView {
        self.attendance_state.project(self.store.ordered_attendance())
    }

    /// Projects the absence table under its current view state.
    pub fn absence_view(&self) -> TableView {
        self.absence_state.project(self.store.ordered_absences())
    }

    /// View state of the attendance table (sort, filter, page,
    /// visibility, selection).
    pub fn attendance_state_mut(&mut self) -> &mut TableViewState<AttendanceRecord> {
        &mut self.attendance_state
    }

    pub fn absence_state_mut(&mut self) -> &mut TableViewState<AbsentEmployee> {
        &mut self.absence_state
    }

    pub fn attendance_state(&self) -> &TableViewState<AttendanceRecord> {
        &self.attendance_state
    }

    pub fn absence_state(&self) -> &TableViewState<AbsentEmployee> {
        &self.absence_state
    }

    /// Select every row currently passing the attendance table's filter.
    pub fn select_all_attendance(&mut self) {
        let ids: Vec<String> = self
            .attendance_state
            .filtered_ids(self.store.ordered_attendance())
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        self.attendance_state.select_all(ids.iter().map(|s| s.as_str()));
    }

    /// Select every row currently passing the absence table's filter.
    pub fn select_all_absences(&mut self) {
        let ids: Vec<String> = self
            .absence_state
            .filtered_ids(self.store.ordered_absences())
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        self.absence_state.select_all(ids.iter().map(|s| s.as_str()));
    }

    // ========================================================================
    // REORDER
    // ========================================================================

    /// Applies a drag-end gesture to whichever collection owns the
    /// dragged id.
    pub fn handle_drag_end(&mut self, event: &DragEndEvent) -> ReorderOutcome {
        apply_drag_end(&mut self.store, event)
    }

    // ========================================================================
    // ANALYTICS
    // ========================================================================

    /// Present/absent counts over the current collections.
    pub fn totals(&self) -> AttendanceTotals {
        AttendanceTotals::from_records(
            self.store.ordered_attendance(),
            self.store.ordered_absences(),
        )
    }

    /// The chart feed for the trend panel, newest period last.
    pub fn trend_chart(&self, months: usize) -> TrendChartData {
        TrendChartData::from_points(&self.trend_source.monthly_trend(months))
    }

    // ========================================================================
    // EXPORTS
    // ========================================================================

    pub fn is_generating(&self) -> bool {
        self.generation.is_generating()
    }

    /// CSV over the current collections, dated `report_date`.
    pub fn export_csv(&self, report_date: NaiveDate) -> Result<ExportArtifact, ExportError> {
        let _guard = self.generation.begin()?;
        Ok(csv_artifact(
            self.store.ordered_attendance(),
            self.store.ordered_absences(),
            report_date,
        ))
    }

    /// Plain-text summary, dated `report_date` and stamped
    /// `generated_at`.
    pub fn export_summary(
        &self,
        report_date: NaiveDate,
        generated_at: NaiveDateTime,
    ) -> Result<ExportArtifact, ExportError> {
        let _guard = self.generation.begin()?;
        Ok(summary_artifact(self.totals(), report_date, generated_at))
    }

    /// Spreadsheet workbook over the current collections.
    pub fn export_workbook(&self, report_date: NaiveDate) -> Result<ExportArtifact, ExportError> {
        let _guard = self.generation.begin()?;
        workbook_artifact(
            self.store.ordered_attendance(),
            self.store.ordered_absences(),
            report_date,
        )
    }

    /// Convenience wrappers stamping the current local date/time.
    pub fn export_csv_now(&self) -> Result<ExportArtifact, ExportError> {
        self.export_csv(Local::now().date_naive())
    }

    pub fn export_summary_now(&self) -> Result<ExportArtifact, ExportError> {
        let now = Local::now();
        self.export_summary(now.date_naive(), now.naive_local())
    }

    pub fn export_workbook_now(&self) -> Result<ExportArtifact, ExportError> {
        self.export_workbook(Local::now().date_naive())
    }
}

impl Default for AttendanceDashboard {
    fn default() -> Self {
        AttendanceDashboard::new()
    }
}
