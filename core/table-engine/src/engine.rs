//! FILENAME: core/table-engine/src/engine.rs
//! Table View State - per-table sort/filter/page/visibility/selection.
//!
//! Each dashboard table owns one `TableViewState`. Projection never
//! mutates the underlying record order; it derives a `TableView` from
//! whatever slice the record store currently holds. The two table
//! instances are fully independent: toggling a column, filtering, or
//! selecting rows in one can never leak into the other.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::definition::{
    ColumnDef, SortKey, SortOrder, TableDefinition, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
use crate::view::{TableView, ViewColumn, ViewRow};

// ============================================================================
// VIEW STATE
// ============================================================================

/// Sort, filter, pagination, column-visibility, and row-selection state
/// for one table instance.
pub struct TableViewState<R> {
    definition: TableDefinition<R>,

    /// Free-text filter; empty means "show everything".
    filter: String,

    /// Multi-column sort, outermost key first. Empty means store order.
    sort_keys: SmallVec<[SortKey; 2]>,

    /// Requested page; clamped to the last page at projection time so a
    /// shrinking filter result never strands the view past the end.
    page_index: usize,

    page_size: usize,

    /// Per-column visibility overrides; columns absent from the map use
    /// their definition default.
    visibility: FxHashMap<String, bool>,

    /// Selected row ids.
    selection: FxHashSet<String>,
}

impl<R> TableViewState<R> {
    pub fn new(definition: TableDefinition<R>) -> Self {
        TableViewState {
            definition,
            filter: String::new(),
            sort_keys: SmallVec::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            visibility: FxHashMap::default(),
            selection: FxHashSet::default(),
        }
    }

    pub fn definition(&self) -> &TableDefinition<R> {
        &self.definition
    }

    // ========================================================================
    // FILTER
    // ========================================================================

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Sets the free-text filter. Changing it jumps back to the first
    /// page; re-setting the identical text leaves the page alone.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            self.filter = filter;
            self.page_index = 0;
        }
    }

    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    // ========================================================================
    // SORT
    // ========================================================================

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Cycles a column through ascending -> descending -> unsorted.
    ///
    /// With `additive` false the clicked column becomes the only sort key;
    /// with `additive` true it is appended after the existing keys (or
    /// cycled in place if already present). Returns false for unknown or
    /// unsortable columns.
    pub fn toggle_sort(&mut self, column_id: &str, additive: bool) -> bool {
        let sortable = self
            .definition
            .column(column_id)
            .map(|c| c.sortable)
            .unwrap_or(false);
        if !sortable {
            return false;
        }

        let existing = self.sort_keys.iter().position(|k| k.column == column_id);
        match existing {
            Some(pos) => {
                if !additive && self.sort_keys.len() > 1 {
                    // Collapse multi-sort onto the clicked column.
                    let order = self.sort_keys[pos].order;
                    self.sort_keys.clear();
                    self.sort_keys.push(SortKey { column: column_id.to_string(), order });
                    return true;
                }
                match self.sort_keys[pos].order {
                    SortOrder::Ascending => {
                        self.sort_keys[pos].order = SortOrder::Descending;
                    }
                    SortOrder::Descending => {
                        self.sort_keys.remove(pos);
                    }
                }
            }
            None => {
                if !additive {
                    self.sort_keys.clear();
                }
                self.sort_keys.push(SortKey::ascending(column_id));
            }
        }
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort_keys.clear();
    }

    // ========================================================================
    // PAGINATION
    // ========================================================================

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the page size. Only the fixed option set is accepted; a size
    /// change jumps back to the first page. Returns whether the size was
    /// applied.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        if size != self.page_size {
            self.page_size = size;
            self.page_index = 0;
        }
        true
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    pub fn next_page(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    // ========================================================================
    // COLUMN VISIBILITY
    // ========================================================================

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        if let Some(visible) = self.visibility.get(column_id) {
            return *visible;
        }
        self.definition
            .column(column_id)
            .map(|c| c.default_visible)
            .unwrap_or(false)
    }

    /// Flips a column's visibility. Returns the new visibility, or `None`
    /// for a column the definition does not know.
    pub fn toggle_column(&mut self, column_id: &str) -> Option<bool> {
        self.definition.column(column_id)?;
        let next = !self.is_column_visible(column_id);
        self.visibility.insert(column_id.to_string(), next);
        Some(next)
    }

    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> bool {
        if self.definition.column(column_id).is_none() {
            return false;
        }
        self.visibility.insert(column_id.to_string(), visible);
        true
    }

    // ========================================================================
    // ROW SELECTION
    // ========================================================================

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selection.insert(id.into());
    }

    pub fn deselect(&mut self, id: &str) {
        self.selection.remove(id);
    }

    /// Flips one row and returns its new selection state.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        if self.selection.remove(id) {
            false
        } else {
            self.selection.insert(id.to_string());
            true
        }
    }

    /// The "select all" header checkbox: selects every id passed in
    /// (callers pass the currently filtered rows).
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.selection.insert(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drops selected ids that no longer resolve to a row; called after a
    /// snapshot re-sync so the selected count never reports ghosts.
    pub fn prune_selection<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.selection.retain(|id| keep(id));
    }

    // ========================================================================
    // PROJECTION
    // ========================================================================

    /// Derives the renderable view of `rows` under the current state:
    /// filter, then sort, then paginate, then apply column visibility.
    /// The input order (the store order) is the tiebreak everywhere.
    pub fn project(&self, rows: &[R]) -> TableView {
        let filtered = self.filtered_indices(rows);
        let sorted = self.sorted_indices(rows, filtered);

        let filtered_count = sorted.len();
        let page_count = page_count(filtered_count, self.page_size);
        let page_index = if page_count == 0 {
            0
        } else {
            self.page_index.min(page_count - 1)
        };

        let start = page_index * self.page_size;
        let page = sorted
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &rows[i]);

        let visible: Vec<&ColumnDef<R>> = self
            .definition
            .columns
            .iter()
            .filter(|c| self.is_column_visible(c.id))
            .collect();

        let columns = visible
            .iter()
            .map(|c| ViewColumn {
                id: c.id.to_string(),
                header: c.header.to_string(),
                sortable: c.sortable,
            })
            .collect();

        let view_rows = page
            .map(|row| {
                let id = (self.definition.row_id)(row).to_string();
                let selected = self.selection.contains(&id);
                let cells = visible
                    .iter()
                    .map(|c| (c.accessor)(row).formatted())
                    .collect();
                ViewRow { id, selected, cells }
            })
            .collect();

        TableView {
            table: self.definition.name.to_string(),
            columns,
            rows: view_rows,
            page_index,
            page_count,
            page_size: self.page_size,
            filtered_count,
            total_count: rows.len(),
            selected_count: self.selection.len(),
        }
    }

    /// The ids of every row passing the current filter, in view order.
    /// This is what "select all" operates over.
    pub fn filtered_ids<'a>(&self, rows: &'a [R]) -> Vec<&'a str> {
        let filtered = self.filtered_indices(rows);
        let sorted = self.sorted_indices(rows, filtered);
        sorted
            .into_iter()
            .map(|i| (self.definition.row_id)(&rows[i]))
            .collect()
    }

    fn filtered_indices(&self, rows: &[R]) -> Vec<usize> {
        let Some(filter_column) = self.definition.filter_column else {
            return (0..rows.len()).collect();
        };
        if self.filter.is_empty() {
            return (0..rows.len()).collect();
        }
        let Some(column) = self.definition.column(filter_column) else {
            return (0..rows.len()).collect();
        };

        // Case-insensitive substring match on the bound column.
        let needle = self.filter.to_lowercase();
        (0..rows.len())
            .filter(|&i| {
                (column.accessor)(&rows[i])
                    .formatted()
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    }

    fn sorted_indices(&self, rows: &[R], mut indices: Vec<usize>) -> Vec<usize> {
        if self.sort_keys.is_empty() {
            return indices;
        }

        let keys: Vec<(&ColumnDef<R>, SortOrder)> = self
            .sort_keys
            .iter()
            .filter_map(|k| self.definition.column(&k.column).map(|c| (c, k.order)))
            .collect();
        if keys.is_empty() {
            return indices;
        }

        // Stable sort: equal keys keep store order.
        indices.sort_by(|&a, &b| {
            for (column, order) in &keys {
                let left = (column.accessor)(&rows[a]);
                let right = (column.accessor)(&rows[b]);
                let cmp = left.compare(&right);
                let cmp = match order {
                    SortOrder::Ascending => cmp,
                    SortOrder::Descending => cmp.reverse(),
                };
                if cmp != std::cmp::Ordering::Equal {
                    return cmp;
                }
            }
            std::cmp::Ordering::Equal
        });
        indices
    }
}

/// ceil(n / page_size); zero rows means zero pages.
pub fn page_count(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size)
}
