//! FILENAME: core/table-engine/src/lib.rs
//! Table subsystem for the attendance dashboard.
//!
//! This crate derives the renderable table views from the record store
//! without ever mutating stored order, and applies drag-end gestures as
//! positional moves. It depends on `records` for the collections.
//!
//! Layers:
//! - `definition`: Column lists and per-table configuration (what a table IS)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Sort/filter/page/visibility/selection state (HOW we project)
//! - `reorder`: Drag-end gestures applied to the store
//! - `columns`: The two concrete dashboard table definitions

pub mod columns;
pub mod definition;
pub mod engine;
pub mod reorder;
pub mod view;

pub use columns::{absence_table, attendance_table};
pub use definition::{
    ColumnDef, ColumnId, SortKey, SortOrder, TableDefinition, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
pub use engine::{page_count, TableViewState};
pub use reorder::{apply_drag_end, DragEndEvent, ReorderOutcome, TargetCollection};
pub use view::{CellValue, TableView, ViewColumn, ViewRow};
