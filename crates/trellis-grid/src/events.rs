//! Event payloads for the hosting view layer.
//!
//! The engine never emits events itself: it exposes state, and the caller
//! packages that state into the payloads defined here after a mutation.
//! [`GridSignals`] is the conventional distribution point — the hosting
//! layer constructs a payload and emits it through the matching
//! [`Signal`] for anything downstream (rendering, scroll sync, analytics)
//! to observe.

use trellis_grid_core::Signal;

use crate::api::GridApi;
use crate::column::{ColumnDef, SortOrder};
use crate::node::RowNodeRef;
use crate::selection::IgnoreReason;
use crate::sort::SortResult;
use crate::value::{Context, RowData};

/// Payload describing a completed sort interaction.
///
/// Carries three distinct arrays so a consumer can diff against either
/// baseline: the data as originally supplied to the grid, the order
/// immediately before this sort, and the new order.
#[derive(Debug, Clone)]
pub struct SortChangedEvent {
    /// The data as originally supplied to the grid.
    pub origin_data: Vec<RowData>,
    /// The order immediately before this sort.
    pub last_data: Vec<RowData>,
    /// The new order.
    pub data: Vec<RowData>,
    /// The sorted column, with its new order merged in.
    pub column: ColumnDef,
    /// The order the column advanced to.
    pub sort_order: SortOrder,
    /// Application context.
    pub context: Option<Context>,
}

impl SortChangedEvent {
    /// Assembles a sort event from its parts.
    pub fn new(
        column: ColumnDef,
        sort_order: SortOrder,
        origin_data: Vec<RowData>,
        sorted_data: Vec<RowData>,
        last_data: Vec<RowData>,
        context: Option<Context>,
    ) -> Self {
        let mut column = column;
        column.sort_order = sort_order;
        Self {
            origin_data,
            last_data,
            data: sorted_data,
            column,
            sort_order,
            context,
        }
    }

    /// Assembles a sort event from a [`SortResult`] and the two
    /// baselines the pipeline does not know about.
    pub fn from_result(
        result: &SortResult,
        origin_data: Vec<RowData>,
        last_data: Vec<RowData>,
        context: Option<Context>,
    ) -> Self {
        Self::new(
            result.column.clone(),
            result.sort_order,
            origin_data,
            result.sorted_data.clone(),
            last_data,
            context,
        )
    }
}

/// Payload describing the selection state after a selection mutation.
#[derive(Debug, Clone)]
pub struct SelectionChangedEvent {
    /// The selected nodes, in selection order.
    pub selected_nodes: Vec<RowNodeRef>,
    /// Snapshots of the selected records.
    pub selected_data: Vec<RowData>,
    /// Number of selected rows.
    pub selection_count: usize,
}

impl SelectionChangedEvent {
    /// Captures the current selection state from the grid.
    pub fn capture(api: &GridApi) -> Self {
        let selected_nodes = api.selected_nodes();
        let selected_data = api.selected_rows();
        let selection_count = selected_nodes.len();
        Self {
            selected_nodes,
            selected_data,
            selection_count,
        }
    }
}

/// A header checkbox toggle, as reported by the view layer.
#[derive(Debug, Clone)]
pub struct HeaderSelectionChangedEvent {
    /// The column whose header checkbox was toggled.
    pub column: ColumnDef,
    /// The checkbox state after the toggle.
    pub checked: bool,
}

/// A tap on a column header, as reported by the view layer.
#[derive(Debug, Clone)]
pub struct ColumnHeaderClickedEvent {
    /// The column whose header was tapped.
    pub column: ColumnDef,
}

/// Any event payload the grid's hosting layer distributes.
#[derive(Debug, Clone)]
pub enum GridEvent {
    SortChanged(SortChangedEvent),
    SelectionChanged(SelectionChangedEvent),
    ColumnHeaderClicked(ColumnHeaderClickedEvent),
}

/// Applies a header checkbox toggle and captures the resulting selection.
///
/// Checked selects every row, unchecked deselects every row; either way
/// the returned payload reflects the state afterwards (in
/// single-selection mode a select-all is refused, so the payload carries
/// an empty selection — the toggle still reports honestly).
///
/// # Errors
///
/// Returns [`IgnoreReason::NotCheckboxColumn`] when the toggled column
/// does not participate in checkbox selection; the selection is left
/// untouched.
pub fn apply_header_selection(
    api: &mut GridApi,
    event: &HeaderSelectionChangedEvent,
) -> Result<SelectionChangedEvent, IgnoreReason> {
    if !event.column.checkbox_selection {
        return Err(IgnoreReason::NotCheckboxColumn);
    }

    if event.checked {
        let _ = api.select_all();
    } else {
        api.deselect_all();
    }

    Ok(SelectionChangedEvent::capture(api))
}

/// The signals a hosting layer emits grid events through.
///
/// The engine constructs payloads; the host wires them to whoever
/// listens:
///
/// ```
/// use trellis_grid::api::GridApi;
/// use trellis_grid::config::GridOptions;
/// use trellis_grid::events::{GridSignals, SelectionChangedEvent};
///
/// let mut api = GridApi::new(GridOptions::new());
/// let signals = GridSignals::new();
///
/// signals.selection_changed.connect(|event: &SelectionChangedEvent| {
///     println!("{} rows selected", event.selection_count);
/// });
///
/// api.set_data(Vec::new());
/// signals
///     .selection_changed
///     .emit(SelectionChangedEvent::capture(&api));
/// ```
pub struct GridSignals {
    /// Emitted by the host after a sort is applied.
    pub sort_changed: Signal<SortChangedEvent>,
    /// Emitted by the host after a selection mutation.
    pub selection_changed: Signal<SelectionChangedEvent>,
    /// Emitted by the host when a column header is tapped.
    pub column_header_clicked: Signal<ColumnHeaderClickedEvent>,
}

impl Default for GridSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSignals {
    /// Creates a fresh, unconnected signal set.
    pub fn new() -> Self {
        Self {
            sort_changed: Signal::new(),
            selection_changed: Signal::new(),
            column_header_clicked: Signal::new(),
        }
    }
}

static_assertions::assert_impl_all!(GridSignals: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridOptions;
    use crate::selection::RowSelectionOptions;
    use crate::sort::{SortParams, perform_sort};
    use crate::value::CellValue;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(pairs: &[(&str, CellValue)]) -> RowData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn people() -> Vec<RowData> {
        vec![
            record(&[("age", CellValue::from(30))]),
            record(&[("age", CellValue::from(10))]),
        ]
    }

    fn multi_api() -> GridApi {
        let mut api = GridApi::new(
            GridOptions::new().with_row_selection(RowSelectionOptions::multiple()),
        );
        api.set_data(people());
        api
    }

    #[test]
    fn test_selection_event_captures_state() {
        let mut api = multi_api();
        let node = api.row_at_index(0).unwrap();
        api.select_node(&node, true);

        let event = SelectionChangedEvent::capture(&api);

        assert_eq!(event.selection_count, 1);
        assert_eq!(event.selected_nodes[0].id(), node.id());
        assert_eq!(
            event.selected_data[0].get("age"),
            Some(&CellValue::from(30))
        );
    }

    #[test]
    fn test_sort_event_carries_three_distinct_arrays() {
        let api = multi_api();
        let origin = people();
        let data = api.rows_data();
        let columns = vec![crate::column::ColumnDef::new("age").sortable(true)];

        let result = perform_sort(&SortParams {
            data: &data,
            columns: &columns,
            field: "age",
            api: &api,
            context: None,
        })
        .unwrap();

        let event = SortChangedEvent::from_result(&result, origin.clone(), data.clone(), None);

        assert_eq!(event.sort_order, SortOrder::Ascending);
        assert_eq!(event.column.sort_order, SortOrder::Ascending);
        // origin keeps the supplied order, last the pre-sort order, data the new one.
        assert_eq!(
            event.origin_data[0].get("age"),
            Some(&CellValue::from(30))
        );
        assert_eq!(event.last_data[0].get("age"), Some(&CellValue::from(30)));
        assert_eq!(event.data[0].get("age"), Some(&CellValue::from(10)));
    }

    #[test]
    fn test_header_selection_checked_selects_all() {
        let mut api = multi_api();
        let column = ColumnDef::new("name").with_checkbox_selection(true);

        let event = apply_header_selection(
            &mut api,
            &HeaderSelectionChangedEvent {
                column,
                checked: true,
            },
        )
        .unwrap();

        assert_eq!(event.selection_count, 2);
        assert!(api.is_all_selected());
    }

    #[test]
    fn test_header_selection_unchecked_deselects_all() {
        let mut api = multi_api();
        api.select_all();
        let column = ColumnDef::new("name").with_checkbox_selection(true);

        let event = apply_header_selection(
            &mut api,
            &HeaderSelectionChangedEvent {
                column,
                checked: false,
            },
        )
        .unwrap();

        assert_eq!(event.selection_count, 0);
        assert!(!api.is_all_selected());
    }

    #[test]
    fn test_header_selection_ignores_non_checkbox_column() {
        let mut api = multi_api();
        let node = api.row_at_index(0).unwrap();
        api.select_node(&node, true);

        let err = apply_header_selection(
            &mut api,
            &HeaderSelectionChangedEvent {
                column: ColumnDef::new("name"),
                checked: true,
            },
        )
        .unwrap_err();

        assert_eq!(err, IgnoreReason::NotCheckboxColumn);
        assert_eq!(api.selected_nodes().len(), 1);
    }

    #[test]
    fn test_header_selection_in_single_mode_reports_empty_selection() {
        let mut api = GridApi::new(GridOptions::new());
        api.set_data(people());
        let column = ColumnDef::new("name").with_checkbox_selection(true);

        let event = apply_header_selection(
            &mut api,
            &HeaderSelectionChangedEvent {
                column,
                checked: true,
            },
        )
        .unwrap();

        assert_eq!(event.selection_count, 0);
    }

    #[test]
    fn test_grid_signals_distribute_payloads() {
        let mut api = multi_api();
        let signals = GridSignals::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        let sink = delivered.clone();
        signals.selection_changed.connect(move |event| {
            sink.store(event.selection_count, Ordering::SeqCst);
        });

        api.select_all();
        signals
            .selection_changed
            .emit(SelectionChangedEvent::capture(&api));

        assert_eq!(delivered.load(Ordering::SeqCst), 2);
    }
}
