//! Row collection management: identity, indexing, and selection delegation.

use std::collections::HashMap;
use std::sync::Arc;

use trellis_grid_core::{grid_debug, grid_warn};

use crate::node::{RowNode, RowNodeRef};
use crate::selection::{RowSelectionOptions, SelectionManager, SelectionOutcome};
use crate::value::{CellValue, RowData};

/// Private record field the derived row id is stamped under.
///
/// `set_data` takes ownership of its input, so the stamp lands on the
/// engine's copy of each record, never on caller-owned memory. Hosts that
/// pull records back out (e.g. via
/// [`GridApi::rows_data`](crate::api::GridApi::rows_data)) can rely on the
/// field being present, but not on it being stable across unrelated
/// `set_data` calls.
pub const ROW_ID_FIELD: &str = "__row_id";

/// Caller-supplied row-id derivation function.
pub type RowIdFn = Arc<dyn Fn(&RowData) -> String + Send + Sync>;

/// Owns the full ordered collection of [`RowNode`]s and the id index.
///
/// The manager is the sole mutator of the node collection; selection state
/// is delegated to an internal [`SelectionManager`]. A full data
/// replacement rebuilds the entire node set — nodes are never removed or
/// patched in place.
pub struct RowManager {
    /// All nodes, index = original input order.
    nodes: Vec<RowNodeRef>,
    /// Id to node lookup, rebuilt on every `set_data`.
    node_map: HashMap<String, RowNodeRef>,
    selection: SelectionManager,
    get_row_id: Option<RowIdFn>,
}

impl RowManager {
    /// Creates a manager with the given id derivation hook and selection
    /// policy.
    pub fn new(get_row_id: Option<RowIdFn>, row_selection: RowSelectionOptions) -> Self {
        Self {
            nodes: Vec::new(),
            node_map: HashMap::new(),
            selection: SelectionManager::new(&row_selection),
            get_row_id,
        }
    }

    // =========================================================================
    // Data replacement
    // =========================================================================

    /// Replaces the entire row set.
    ///
    /// Clears all prior nodes and selection, then builds one node per
    /// record in input order: derives an id (caller hook, then the
    /// record's `id` field, then a `row_<index>` fallback), stamps the id
    /// into the record under [`ROW_ID_FIELD`], and indexes the node.
    /// Display indices are contiguous `0..n` afterwards.
    ///
    /// Two records resolving to the same id is logged at WARN; the later
    /// node owns the lookup entry while both stay in the ordered
    /// collection.
    #[tracing::instrument(skip(self, records), fields(rows = records.len()), target = "trellis_grid::rows", level = "debug")]
    pub fn set_data(&mut self, records: Vec<RowData>) {
        self.clear();

        for (index, mut record) in records.into_iter().enumerate() {
            let id = self.derive_node_id(&record, index);
            record.insert(ROW_ID_FIELD.to_string(), CellValue::from(id.as_str()));

            let node: RowNodeRef = Arc::new(RowNode::new(id.clone(), record, index));
            if self.node_map.insert(id.clone(), node.clone()).is_some() {
                grid_warn!(
                    id = %id,
                    index,
                    "duplicate row id; later row owns the lookup entry"
                );
            }
            self.nodes.push(node);
        }

        self.update_display_indices();
        grid_debug!(rows = self.nodes.len(), "row set replaced");
    }

    fn derive_node_id(&self, record: &RowData, index: usize) -> String {
        if let Some(get_row_id) = &self.get_row_id {
            return get_row_id(record);
        }

        if let Some(value) = record.get("id") {
            if value.is_some() {
                return value.to_string();
            }
        }

        format!("row_{index}")
    }

    /// Recomputes every display index to equal array position.
    ///
    /// Idempotent and total; called after every mutation of the collection.
    pub fn update_display_indices(&self) {
        for (index, node) in self.nodes.iter().enumerate() {
            node.update_display_index(index);
        }
    }

    /// Discards all nodes, the id index, and the selection.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_map.clear();
        self.selection.clear_selection();
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// All nodes in input order.
    pub fn all_nodes(&self) -> &[RowNodeRef] {
        &self.nodes
    }

    /// Looks a node up by id. O(1).
    pub fn node(&self, id: &str) -> Option<RowNodeRef> {
        self.node_map.get(id).cloned()
    }

    /// The node at an array position. O(1); `None` when out of range.
    pub fn node_at(&self, index: usize) -> Option<RowNodeRef> {
        self.nodes.get(index).cloned()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Visits every node once, in array order.
    pub fn for_each_node(&self, mut f: impl FnMut(&RowNodeRef, usize)) {
        for (index, node) in self.nodes.iter().enumerate() {
            f(node, index);
        }
    }

    // =========================================================================
    // Selection delegation
    // =========================================================================

    /// The selection manager.
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Selects a node. See [`SelectionManager::select_node`].
    pub fn select_node(&mut self, node: &RowNodeRef, clear_selection: bool) {
        self.selection.select_node(node, clear_selection);
    }

    /// Deselects a node.
    pub fn deselect_node(&mut self, node: &RowNodeRef) {
        self.selection.deselect_node(node);
    }

    /// Toggles a node's selection.
    pub fn toggle_node_selection(&mut self, node: &RowNodeRef) {
        self.selection.toggle_node_selection(node);
    }

    /// Selects every node in the grid. Ignored in single mode.
    pub fn select_all(&mut self) -> SelectionOutcome {
        self.selection.select_all(&self.nodes)
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Selects the inclusive span between two nodes of this grid.
    pub fn select_range(&mut self, from: &RowNodeRef, to: &RowNodeRef) -> SelectionOutcome {
        self.selection.select_range(&self.nodes, from, to)
    }

    /// The selected nodes, in selection order.
    pub fn selected_nodes(&self) -> Vec<RowNodeRef> {
        self.selection.selected_nodes()
    }

    /// Snapshots of the selected nodes' records.
    pub fn selected_data(&self) -> Vec<RowData> {
        self.selection.selected_data()
    }

    /// Number of selected nodes.
    pub fn selection_count(&self) -> usize {
        self.selection.selection_count()
    }

    /// Returns `true` when every row is selected.
    ///
    /// False for the empty grid, not vacuously true.
    pub fn is_all_selected(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        self.selection_count() == self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{IgnoreReason, SelectionMode};

    fn record(pairs: &[(&str, CellValue)]) -> RowData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn people() -> Vec<RowData> {
        vec![
            record(&[("name", CellValue::from("Charlie")), ("age", CellValue::from(35))]),
            record(&[("name", CellValue::from("Alice")), ("age", CellValue::from(30))]),
            record(&[("name", CellValue::from("Bob")), ("age", CellValue::from(25))]),
        ]
    }

    fn manager(mode: SelectionMode) -> RowManager {
        let options = RowSelectionOptions {
            mode,
            ..Default::default()
        };
        RowManager::new(None, options)
    }

    #[test]
    fn test_set_data_builds_nodes_in_input_order() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(people());

        assert_eq!(rows.node_count(), 3);
        let first = rows.node_at(0).unwrap();
        assert_eq!(first.field("name"), CellValue::from("Charlie"));
        assert_eq!(first.row_index(), 0);
        assert_eq!(first.display_index(), 0);
        assert!(rows.node_at(3).is_none());
    }

    #[test]
    fn test_fallback_ids_and_lookup() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(people());

        let node = rows.node("row_1").unwrap();
        assert_eq!(node.field("name"), CellValue::from("Alice"));
        assert!(rows.node("row_9").is_none());
    }

    #[test]
    fn test_id_field_wins_over_fallback() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(vec![record(&[
            ("id", CellValue::from(42)),
            ("name", CellValue::from("Alice")),
        ])]);

        let node = rows.node("42").unwrap();
        assert_eq!(node.field("name"), CellValue::from("Alice"));
    }

    #[test]
    fn test_caller_id_hook_wins_over_id_field() {
        let get_row_id: RowIdFn = Arc::new(|record| {
            record
                .get("name")
                .and_then(|v| v.as_str().map(str::to_lowercase))
                .unwrap_or_default()
        });
        let mut rows = RowManager::new(Some(get_row_id), RowSelectionOptions::single());

        rows.set_data(vec![record(&[
            ("id", CellValue::from(42)),
            ("name", CellValue::from("Alice")),
        ])]);

        assert!(rows.node("alice").is_some());
        assert!(rows.node("42").is_none());
    }

    #[test]
    fn test_id_is_stamped_into_engine_record() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(people());

        let node = rows.node_at(2).unwrap();
        assert_eq!(node.field(ROW_ID_FIELD), CellValue::from("row_2"));
    }

    #[test]
    fn test_duplicate_ids_keep_both_nodes_last_wins_lookup() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(vec![
            record(&[("id", CellValue::from("dup")), ("n", CellValue::from(1))]),
            record(&[("id", CellValue::from("dup")), ("n", CellValue::from(2))]),
        ]);

        assert_eq!(rows.node_count(), 2);
        let looked_up = rows.node("dup").unwrap();
        assert_eq!(looked_up.field("n"), CellValue::from(2));
    }

    #[test]
    fn test_set_data_clears_selection_and_is_idempotent() {
        let mut rows = manager(SelectionMode::Multiple);
        rows.set_data(people());
        rows.select_all();
        assert!(rows.is_all_selected());

        rows.set_data(people());

        assert_eq!(rows.node_count(), 3);
        assert_eq!(rows.selection_count(), 0);
        assert!(!rows.is_all_selected());
        for i in 0..3 {
            assert_eq!(rows.node_at(i).unwrap().display_index(), i);
        }
    }

    #[test]
    fn test_stale_nodes_are_orphaned_after_replace() {
        let mut rows = manager(SelectionMode::Multiple);
        rows.set_data(people());
        let stale = rows.node_at(0).unwrap();

        rows.set_data(people());
        let fresh = rows.node_at(0).unwrap();

        assert!(!Arc::ptr_eq(&stale, &fresh));
    }

    #[test]
    fn test_for_each_node_matches_node_at_order() {
        let mut rows = manager(SelectionMode::Single);
        rows.set_data(people());

        let mut visited = Vec::new();
        rows.for_each_node(|node, index| visited.push((node.id().to_string(), index)));

        for (i, (id, index)) in visited.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(id, rows.node_at(i).unwrap().id());
        }
    }

    #[test]
    fn test_is_all_selected_false_for_empty_grid() {
        let mut rows = manager(SelectionMode::Multiple);
        rows.set_data(Vec::new());

        assert!(!rows.is_all_selected());
        assert_eq!(rows.select_all(), SelectionOutcome::Applied);
        assert!(!rows.is_all_selected());
    }

    #[test]
    fn test_select_range_delegates_over_own_nodes() {
        let mut rows = manager(SelectionMode::Multiple);
        rows.set_data(people());
        let from = rows.node_at(0).unwrap();
        let to = rows.node_at(2).unwrap();

        assert_eq!(rows.select_range(&from, &to), SelectionOutcome::Applied);
        assert_eq!(rows.selection_count(), 3);
    }

    #[test]
    fn test_select_range_with_foreign_node_is_ignored() {
        let mut rows = manager(SelectionMode::Multiple);
        rows.set_data(people());
        let from = rows.node_at(0).unwrap();

        let mut other = manager(SelectionMode::Multiple);
        other.set_data(vec![record(&[("id", CellValue::from("foreign"))])]);
        let foreign = other.node_at(0).unwrap();

        assert_eq!(
            rows.select_range(&from, &foreign),
            SelectionOutcome::Ignored(IgnoreReason::EndpointNotFound)
        );
    }
}
