//! Row nodes — the engine's per-record wrapper.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::value::{CellValue, RowData};

/// Shared handle to a [`RowNode`].
///
/// The [`RowManager`](crate::row_manager::RowManager) owns the node
/// collection; everything else (selection state, event payloads, callers)
/// holds these non-owning handles.
pub type RowNodeRef = Arc<RowNode>;

/// One logical row bound to one data record.
///
/// A node carries:
/// - `id` — stable identity, unique within a manager, assigned once
/// - `row_index` — position in the original input order, immutable
/// - `display_index` — position under the current presentation order
/// - `selected` — the selection flag
/// - `data` — the record, replaceable via shallow merge
///
/// Nodes are created exclusively by
/// [`RowManager::set_data`](crate::row_manager::RowManager::set_data) and
/// discarded wholesale on the next full data replacement; they are never
/// removed or patched individually.
pub struct RowNode {
    id: String,
    row_index: usize,
    display_index: AtomicUsize,
    selected: AtomicBool,
    data: RwLock<RowData>,
}

impl RowNode {
    pub(crate) fn new(id: impl Into<String>, data: RowData, row_index: usize) -> Self {
        Self {
            id: id.into(),
            row_index,
            display_index: AtomicUsize::new(row_index),
            selected: AtomicBool::new(false),
            data: RwLock::new(data),
        }
    }

    /// The node's stable identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position in the original input order at assignment time.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Position under the current presentation order.
    pub fn display_index(&self) -> usize {
        self.display_index.load(Ordering::Relaxed)
    }

    /// Updates the presentation position.
    pub fn update_display_index(&self, index: usize) {
        self.display_index.store(index, Ordering::Relaxed);
    }

    /// Returns the selection flag.
    pub fn is_selected(&self) -> bool {
        self.selected.load(Ordering::Relaxed)
    }

    /// Sets the selection flag.
    ///
    /// This touches the flag only. Mutate selection through
    /// [`SelectionManager`](crate::selection::SelectionManager) (or the
    /// [`GridApi`](crate::api::GridApi) delegations) so the selection set
    /// stays in lockstep with the flag.
    pub fn set_selected(&self, selected: bool) {
        self.selected.store(selected, Ordering::Relaxed);
    }

    /// Flips the selection flag.
    ///
    /// Flag only — bypassing the selection manager desynchronizes its set
    /// from the flag. Prefer
    /// [`toggle_node_selection`](crate::selection::SelectionManager::toggle_node_selection).
    pub fn toggle_selected(&self) {
        self.selected.fetch_xor(true, Ordering::Relaxed);
    }

    /// Read access to the underlying record.
    pub fn data(&self) -> impl Deref<Target = RowData> + '_ {
        self.data.read()
    }

    /// An owned copy of the underlying record.
    pub fn data_snapshot(&self) -> RowData {
        self.data.read().clone()
    }

    /// The value of a single field, or [`CellValue::None`] when absent.
    pub fn field(&self, name: &str) -> CellValue {
        self.data.read().get(name).cloned().unwrap_or_default()
    }

    /// Shallow-merges `partial` into the record.
    ///
    /// Fields present in `partial` overwrite existing fields; everything
    /// else is kept. Identity and indices are untouched.
    pub fn update_data(&self, partial: RowData) {
        self.data.write().extend(partial);
    }
}

impl fmt::Debug for RowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowNode")
            .field("id", &self.id)
            .field("row_index", &self.row_index)
            .field("display_index", &self.display_index())
            .field("selected", &self.is_selected())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(RowNode: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, CellValue)]) -> RowData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_new_node_defaults() {
        let node = RowNode::new("row_0", record(&[("age", CellValue::from(30))]), 0);

        assert_eq!(node.id(), "row_0");
        assert_eq!(node.row_index(), 0);
        assert_eq!(node.display_index(), 0);
        assert!(!node.is_selected());
        assert_eq!(node.field("age"), CellValue::from(30));
        assert_eq!(node.field("missing"), CellValue::None);
    }

    #[test]
    fn test_selection_flag() {
        let node = RowNode::new("a", RowData::new(), 0);

        node.set_selected(true);
        assert!(node.is_selected());

        node.toggle_selected();
        assert!(!node.is_selected());
        node.toggle_selected();
        assert!(node.is_selected());
    }

    #[test]
    fn test_display_index_is_mutable_row_index_is_not() {
        let node = RowNode::new("a", RowData::new(), 3);

        node.update_display_index(0);
        assert_eq!(node.display_index(), 0);
        assert_eq!(node.row_index(), 3);
    }

    #[test]
    fn test_update_data_shallow_merge() {
        let node = RowNode::new(
            "a",
            record(&[("name", CellValue::from("Alice")), ("age", CellValue::from(30))]),
            0,
        );

        node.update_data(record(&[
            ("age", CellValue::from(31)),
            ("city", CellValue::from("Oslo")),
        ]));

        assert_eq!(node.field("name"), CellValue::from("Alice"));
        assert_eq!(node.field("age"), CellValue::from(31));
        assert_eq!(node.field("city"), CellValue::from("Oslo"));
    }
}
