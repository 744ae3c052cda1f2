//! Selection state for grid rows.
//!
//! [`SelectionManager`] owns the set of currently-selected nodes and the
//! single/multiple selection policy. It keeps each node's `selected` flag
//! in lockstep with set membership: every mutating operation goes through
//! here.
//!
//! Misuse (selecting many rows while multiple selection is disabled, range
//! selection with unknown endpoints) is not an error — the operation is a
//! no-op and reports [`SelectionOutcome::Ignored`] with the reason, so
//! callers and tests can assert on why nothing happened.

use std::collections::HashSet;
use std::sync::Arc;

use crate::node::RowNodeRef;
use crate::value::RowData;

/// Selection policy for the grid, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Only one row can be selected at a time (default).
    #[default]
    Single,
    /// Multiple rows can be selected.
    Multiple,
}

/// Row-selection configuration supplied by the hosting view layer.
#[derive(Debug, Clone, Default)]
pub struct RowSelectionOptions {
    /// Single or multiple selection.
    pub mode: SelectionMode,
    /// Whether tapping a row toggles its selection. View-layer
    /// passthrough; the engine stores it and hands it back.
    pub enable_click_selection: bool,
}

impl RowSelectionOptions {
    /// Single-selection options.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            enable_click_selection: false,
        }
    }

    /// Multiple-selection options.
    pub fn multiple() -> Self {
        Self {
            mode: SelectionMode::Multiple,
            enable_click_selection: false,
        }
    }

    /// Sets the click-selection passthrough flag.
    pub fn with_click_selection(mut self, enabled: bool) -> Self {
        self.enable_click_selection = enabled;
        self
    }
}

/// Result of a selection operation that can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The operation changed (or re-asserted) selection state.
    Applied,
    /// The operation was a no-op, with the reason.
    Ignored(IgnoreReason),
}

impl SelectionOutcome {
    /// Returns `true` if the operation was applied.
    pub fn applied(&self) -> bool {
        matches!(self, SelectionOutcome::Applied)
    }
}

/// Why a selection operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The grid is in single-selection mode.
    MultipleSelectionDisabled,
    /// A range endpoint was not found among the supplied nodes.
    EndpointNotFound,
    /// The header toggle targeted a column without checkbox selection.
    NotCheckboxColumn,
}

/// Owns which nodes are selected and the anchor for range selection.
///
/// The manager never governs node lifetimes: it holds non-owning
/// [`RowNodeRef`] handles, and the whole selection is cleared when the
/// row collection is replaced.
pub struct SelectionManager {
    /// Ids of selected nodes, for O(1) membership checks.
    selected_ids: HashSet<String>,
    /// Selected nodes in selection order.
    selected_nodes: Vec<RowNodeRef>,
    /// Anchor for range selection.
    last_selected: Option<RowNodeRef>,
    multiple_enabled: bool,
}

impl SelectionManager {
    /// Creates a manager with the given selection policy.
    pub fn new(options: &RowSelectionOptions) -> Self {
        Self {
            selected_ids: HashSet::new(),
            selected_nodes: Vec::new(),
            last_selected: None,
            multiple_enabled: options.mode == SelectionMode::Multiple,
        }
    }

    /// Returns `true` if multiple selection is enabled.
    pub fn multiple_enabled(&self) -> bool {
        self.multiple_enabled
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Selects a node and makes it the range anchor.
    ///
    /// The existing selection is cleared first when `clear_selection` is
    /// `true` — or unconditionally in single mode, which is what keeps the
    /// at-most-one invariant regardless of the flag callers pass.
    pub fn select_node(&mut self, node: &RowNodeRef, clear_selection: bool) {
        if clear_selection || !self.multiple_enabled {
            self.clear_selection();
        }

        self.add(node);
        self.last_selected = Some(node.clone());
    }

    /// Deselects a node; clears the anchor if it was anchored here.
    pub fn deselect_node(&mut self, node: &RowNodeRef) {
        node.set_selected(false);
        if self.selected_ids.remove(node.id()) {
            self.selected_nodes.retain(|n| n.id() != node.id());
        }

        if self
            .last_selected
            .as_ref()
            .is_some_and(|anchor| Arc::ptr_eq(anchor, node))
        {
            self.last_selected = None;
        }
    }

    /// Toggles a node's selection.
    ///
    /// Toggling an unselected node on clears the rest in single mode and
    /// is additive in multiple mode.
    pub fn toggle_node_selection(&mut self, node: &RowNodeRef) {
        if node.is_selected() {
            self.deselect_node(node);
        } else {
            self.select_node(node, !self.multiple_enabled);
        }
    }

    /// Selects every supplied node. Ignored in single mode.
    pub fn select_all(&mut self, nodes: &[RowNodeRef]) -> SelectionOutcome {
        if !self.multiple_enabled {
            return SelectionOutcome::Ignored(IgnoreReason::MultipleSelectionDisabled);
        }

        self.clear_selection();
        for node in nodes {
            self.add(node);
        }

        tracing::trace!(
            target: "trellis_grid::selection",
            count = nodes.len(),
            "select all"
        );
        SelectionOutcome::Applied
    }

    /// Deselects every currently-selected node and resets the anchor.
    pub fn deselect_all(&mut self) {
        for node in self.selected_nodes.drain(..) {
            node.set_selected(false);
        }
        self.selected_ids.clear();
        self.last_selected = None;
    }

    /// Equivalent to [`deselect_all`](Self::deselect_all); both names are
    /// kept for their respective call sites.
    pub fn clear_selection(&mut self) {
        self.deselect_all();
    }

    /// Selects the inclusive span between two nodes' positions in `nodes`.
    ///
    /// Order-independent: `(from, to)` and `(to, from)` select the same
    /// set. The anchor ends on `to`. Ignored when multiple selection is
    /// disabled or either endpoint is not found by id.
    pub fn select_range(
        &mut self,
        nodes: &[RowNodeRef],
        from: &RowNodeRef,
        to: &RowNodeRef,
    ) -> SelectionOutcome {
        if !self.multiple_enabled {
            return SelectionOutcome::Ignored(IgnoreReason::MultipleSelectionDisabled);
        }

        let start = nodes.iter().position(|n| n.id() == from.id());
        let end = nodes.iter().position(|n| n.id() == to.id());
        let (Some(start), Some(end)) = (start, end) else {
            return SelectionOutcome::Ignored(IgnoreReason::EndpointNotFound);
        };

        let (first, last) = (start.min(end), start.max(end));

        self.clear_selection();
        for node in &nodes[first..=last] {
            self.add(node);
        }
        self.last_selected = Some(to.clone());

        tracing::trace!(
            target: "trellis_grid::selection",
            first,
            last,
            "range selected"
        );
        SelectionOutcome::Applied
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The selected nodes, in selection order.
    pub fn selected_nodes(&self) -> Vec<RowNodeRef> {
        self.selected_nodes.clone()
    }

    /// Snapshots of the selected nodes' records.
    pub fn selected_data(&self) -> Vec<RowData> {
        self.selected_nodes
            .iter()
            .map(|node| node.data_snapshot())
            .collect()
    }

    /// Number of selected nodes.
    pub fn selection_count(&self) -> usize {
        self.selected_nodes.len()
    }

    /// Returns `true` if anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_nodes.is_empty()
    }

    /// The range-selection anchor, if any.
    pub fn last_selected_node(&self) -> Option<RowNodeRef> {
        self.last_selected.clone()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn add(&mut self, node: &RowNodeRef) {
        node.set_selected(true);
        if self.selected_ids.insert(node.id().to_string()) {
            self.selected_nodes.push(node.clone());
        }
    }
}
