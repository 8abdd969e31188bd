//! FILENAME: core/table-engine/src/definition.rs
//! Table Definition - The configuration a table instance is built from.
//!
//! A `TableDefinition` describes one table: how to key its rows, the
//! ordered column list, and which column the free-text filter binds to.
//! Both dashboard tables are built from the same generic machinery,
//! specialized only by their column-definition set; there is no
//! per-table subclassing.

use serde::{Deserialize, Serialize};

use crate::view::CellValue;

/// Stable identifier of a column within its table (camelCase, matching
/// the frontend column keys).
pub type ColumnId = &'static str;

// ============================================================================
// PAGE SIZES
// ============================================================================

/// The selectable page sizes. Anything outside this set is rejected.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Page size a fresh view starts with.
pub const DEFAULT_PAGE_SIZE: usize = 50;

// ============================================================================
// SORT STATE
// ============================================================================

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// One entry of the multi-column sort state, outermost key first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    pub column: String,
    pub order: SortOrder,
}

impl SortKey {
    pub fn ascending(column: impl Into<String>) -> Self {
        SortKey { column: column.into(), order: SortOrder::Ascending }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        SortKey { column: column.into(), order: SortOrder::Descending }
    }
}

// ============================================================================
// COLUMN DEFINITION
// ============================================================================

/// Describes one column: identity, header text, how to read a cell value
/// out of a row, and its default capabilities.
pub struct ColumnDef<R> {
    /// Stable column id (used by sort, visibility, and filter state).
    pub id: ColumnId,
    /// Header text shown above the column.
    pub header: &'static str,
    /// Reads this column's value from a row.
    pub accessor: fn(&R) -> CellValue,
    /// Whether the user can sort on this column.
    pub sortable: bool,
    /// Whether the column starts out visible.
    pub default_visible: bool,
}

impl<R> ColumnDef<R> {
    pub fn new(id: ColumnId, header: &'static str, accessor: fn(&R) -> CellValue) -> Self {
        ColumnDef {
            id,
            header,
            accessor,
            sortable: true,
            default_visible: true,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn hidden_by_default(mut self) -> Self {
        self.default_visible = false;
        self
    }
}

// fn pointers are Copy regardless of R, so the derives' implicit `R: Clone`
// bound is wrong here; implement by hand.
impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        ColumnDef { ..*self }
    }
}

impl<R> Copy for ColumnDef<R> {}

// ============================================================================
// TABLE DEFINITION
// ============================================================================

/// The complete definition of one table instance.
pub struct TableDefinition<R> {
    /// Name used to label views built from this definition.
    pub name: &'static str,
    /// Ordered column list.
    pub columns: Vec<ColumnDef<R>>,
    /// Extracts the stable row id used for keying, selection, and drag.
    pub row_id: fn(&R) -> &str,
    /// Column the free-text filter matches against, if any.
    pub filter_column: Option<ColumnId>,
}

impl<R> TableDefinition<R> {
    pub fn new(name: &'static str, columns: Vec<ColumnDef<R>>, row_id: fn(&R) -> &str) -> Self {
        TableDefinition {
            name,
            columns,
            row_id,
            filter_column: None,
        }
    }

    pub fn with_filter_column(mut self, column: ColumnId) -> Self {
        self.filter_column = Some(column);
        self
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.id == id)
    }
}

impl<R> Clone for TableDefinition<R> {
    fn clone(&self) -> Self {
        TableDefinition {
            name: self.name,
            columns: self.columns.clone(),
            row_id: self.row_id,
            filter_column: self.filter_column,
        }
    }
}
