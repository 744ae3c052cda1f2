//! The `GridApi` facade.
//!
//! `GridApi` is the single object external callers depend on: row access,
//! selection, and data replacement behind one stable surface. Every method
//! is a direct, synchronous delegation to the underlying
//! [`RowManager`]/[`SelectionManager`](crate::selection::SelectionManager);
//! the facade adds no invariants of its own.

use crate::config::GridOptions;
use crate::node::RowNodeRef;
use crate::row_manager::RowManager;
use crate::selection::SelectionOutcome;
use crate::value::{Context, RowData};

/// Facade unifying row access, selection, and data replacement.
///
/// # Example
///
/// ```
/// use trellis_grid::api::GridApi;
/// use trellis_grid::config::GridOptions;
/// use trellis_grid::value::{CellValue, RowData};
///
/// let mut api = GridApi::new(GridOptions::new());
/// api.set_data(vec![
///     [("name".to_string(), CellValue::from("Alice"))]
///         .into_iter()
///         .collect::<RowData>(),
/// ]);
///
/// assert_eq!(api.row_count(), 1);
/// let node = api.row_at_index(0).unwrap();
/// api.select_node(&node, true);
/// assert!(api.is_all_selected());
/// ```
pub struct GridApi {
    rows: RowManager,
    options: GridOptions,
}

impl GridApi {
    /// Builds a grid facade from options.
    pub fn new(options: GridOptions) -> Self {
        let rows = RowManager::new(options.get_row_id.clone(), options.row_selection.clone());
        Self { rows, options }
    }

    /// The options the grid was built with.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// The application context, if any.
    pub fn context(&self) -> Option<&Context> {
        self.options.context.as_ref()
    }

    /// The underlying row manager.
    pub fn row_manager(&self) -> &RowManager {
        &self.rows
    }

    // =========================================================================
    // Row access
    // =========================================================================

    /// Looks a row node up by id.
    pub fn row_node(&self, id: &str) -> Option<RowNodeRef> {
        self.rows.node(id)
    }

    /// The row node at an index, or `None` when out of range.
    pub fn row_at_index(&self, index: usize) -> Option<RowNodeRef> {
        self.rows.node_at(index)
    }

    /// Visits every row once, in array order.
    pub fn for_each_row(&self, f: impl FnMut(&RowNodeRef, usize)) {
        self.rows.for_each_node(f);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.node_count()
    }

    /// Snapshots of every row's record, in array order. Each snapshot
    /// carries the stamped
    /// [`ROW_ID_FIELD`](crate::row_manager::ROW_ID_FIELD), so records fed
    /// back through the sort pipeline resolve their nodes.
    pub fn rows_data(&self) -> Vec<RowData> {
        let mut records = Vec::with_capacity(self.rows.node_count());
        self.rows
            .for_each_node(|node, _| records.push(node.data_snapshot()));
        records
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Snapshots of the selected rows' records.
    pub fn selected_rows(&self) -> Vec<RowData> {
        self.rows.selected_data()
    }

    /// The selected nodes, in selection order.
    pub fn selected_nodes(&self) -> Vec<RowNodeRef> {
        self.rows.selected_nodes()
    }

    /// Selects every row. Ignored in single-selection mode.
    pub fn select_all(&mut self) -> SelectionOutcome {
        self.rows.select_all()
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.rows.deselect_all();
    }

    /// Selects a node, clearing the previous selection when
    /// `clear_selection` is set (or always, in single mode).
    pub fn select_node(&mut self, node: &RowNodeRef, clear_selection: bool) {
        self.rows.select_node(node, clear_selection);
    }

    /// Deselects a node.
    pub fn deselect_node(&mut self, node: &RowNodeRef) {
        self.rows.deselect_node(node);
    }

    /// Toggles a node's selection.
    pub fn toggle_node_selection(&mut self, node: &RowNodeRef) {
        self.rows.toggle_node_selection(node);
    }

    /// Selects the inclusive span between two of this grid's nodes.
    pub fn select_range(&mut self, from: &RowNodeRef, to: &RowNodeRef) -> SelectionOutcome {
        self.rows.select_range(from, to)
    }

    /// Returns `true` when every row is selected (false for an empty
    /// grid).
    pub fn is_all_selected(&self) -> bool {
        self.rows.is_all_selected()
    }

    // =========================================================================
    // Data
    // =========================================================================

    /// Replaces the grid's data. See [`RowManager::set_data`].
    pub fn set_data(&mut self, records: Vec<RowData>) {
        self.rows.set_data(records);
    }

    /// Intentionally a no-op: redraw timing belongs to the rendering
    /// layer, which observes the engine's state and event payloads.
    pub fn refresh(&self) {}
}

static_assertions::assert_impl_all!(GridApi: Send, Sync);
