//! FILENAME: core/table-engine/src/view.rs
//! Table View - Renderable output for the frontend.
//!
//! A `TableView` is the projection of one table for the current page:
//! visible columns, pre-formatted cell text, selection flags, and the
//! paging counters. It is a value object; re-projecting after a state
//! change produces a fresh one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// CELL VALUES
// ============================================================================

/// The value a column accessor reads out of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Optional strings map `None` to an empty cell.
    pub fn opt_text(s: &Option<String>) -> Self {
        match s {
            Some(v) => CellValue::Text(v.clone()),
            None => CellValue::Empty,
        }
    }

    /// Display form used for view cells and filter matching.
    pub fn formatted(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => {
                if *b { "true" } else { "false" }.to_string()
            }
        }
    }

    /// Total ordering used by sorting. Empty cells sort first, then
    /// booleans, then numbers, then text; text compares case-insensitively
    /// with a case-sensitive tiebreak so the order is deterministic.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,

            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Boolean(_), _) => Ordering::Less,
            (_, Boolean(_)) => Ordering::Greater,

            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Number(_), _) => Ordering::Less,
            (_, Number(_)) => Ordering::Greater,

            (Text(a), Text(b)) => {
                let folded = a.to_lowercase().cmp(&b.to_lowercase());
                if folded == Ordering::Equal {
                    a.cmp(b)
                } else {
                    folded
                }
            }
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

// ============================================================================
// VIEW ROWS AND COLUMNS
// ============================================================================

/// A visible column header in the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewColumn {
    pub id: String,
    pub header: String,
    pub sortable: bool,
}

/// One rendered row of the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRow {
    /// The stable record id (row key for rendering and drag handles).
    pub id: String,
    /// Whether this row is currently selected.
    pub selected: bool,
    /// Pre-formatted cell text, one entry per visible column.
    pub cells: Vec<String>,
}

// ============================================================================
// TABLE VIEW
// ============================================================================

/// The rendered state of one table for the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// Which table this view was projected from.
    pub table: String,

    /// Visible columns, in definition order.
    pub columns: Vec<ViewColumn>,

    /// Rows of the current page, in view order.
    pub rows: Vec<ViewRow>,

    /// Zero-based page index actually shown (clamped to the last page).
    pub page_index: usize,

    /// Total number of pages over the filtered rows: ceil(n / page_size).
    pub page_count: usize,

    /// Rows per page.
    pub page_size: usize,

    /// Rows that passed the filter (across all pages).
    pub filtered_count: usize,

    /// Rows in the underlying collection.
    pub total_count: usize,

    /// Selected rows in this table.
    pub selected_count: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convenience for tests and status lines: the ids on this page.
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}
