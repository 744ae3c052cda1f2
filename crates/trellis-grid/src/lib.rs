//! Trellis Grid — the data engine of a mobile-web data grid.
//!
//! This crate owns row identity, selection state, and sorting for a
//! spreadsheet-like table component, behind a stable imperative facade.
//! Rendering — virtualized DOM, tooltips, scroll sync, styling — lives
//! elsewhere and redraws from this engine's output.
//!
//! # Core Types
//!
//! - [`RowNode`](node::RowNode): per-record wrapper carrying identity,
//!   indices, and the selection flag
//! - [`RowManager`](row_manager::RowManager): the ordered node collection
//!   and id index
//! - [`SelectionManager`](selection::SelectionManager): single/multiple
//!   selection policy, anchor, range selection
//! - sort pipeline ([`sort`]): pure transformations from the current data
//!   and column state to a new order plus updated column flags
//! - [`GridApi`](api::GridApi): the facade external callers depend on
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────┐   set_data    ┌─────────────┐   delegates   ┌──────────────────┐
//! │  GridApi   │──────────────>│ RowManager  │──────────────>│ SelectionManager │
//! └────────────┘               └─────────────┘               └──────────────────┘
//!       │                             │
//!       │ queries                     │ owns
//!       v                             v
//! ┌────────────┐               ┌─────────────┐
//! │    sort    │               │  RowNode[]  │
//! │  pipeline  │               │  id → node  │
//! └────────────┘               └─────────────┘
//! ```
//!
//! The engine is single-threaded and synchronous: every call runs to
//! completion on the calling thread, and it emits nothing itself. Event
//! payloads ([`events`]) are constructed by the caller from engine state
//! and distributed through [`events::GridSignals`].
//!
//! # Example
//!
//! ```
//! use trellis_grid::prelude::*;
//! use trellis_grid::value::CellValue;
//!
//! let mut api = GridApi::new(
//!     GridOptions::new().with_row_selection(RowSelectionOptions::multiple()),
//! );
//! api.set_data(vec![
//!     [("age".to_string(), CellValue::from(30))].into_iter().collect(),
//!     [("age".to_string(), CellValue::from(10))].into_iter().collect(),
//! ]);
//!
//! let columns = vec![ColumnDef::new("age").sortable(true)];
//! let result = perform_sort(&SortParams {
//!     data: &api.rows_data(),
//!     columns: &columns,
//!     field: "age",
//!     api: &api,
//!     context: None,
//! })
//! .unwrap();
//!
//! assert_eq!(result.sort_order, SortOrder::Ascending);
//! api.set_data(result.sorted_data);
//! assert_eq!(
//!     api.row_at_index(0).unwrap().field("age"),
//!     CellValue::from(10),
//! );
//! ```

pub mod api;
pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod node;
pub mod row_manager;
pub mod selection;
pub mod sort;
pub mod value;

pub use api::GridApi;
pub use column::{
    CellParams, ColumnDef, ColumnPartition, ColumnPin, CompareParams, ComparatorFn, HeaderParams,
    SortOrder, SortStrategy, TextAlign, partition_by_pin, validate_columns,
};
pub use config::{GridOptions, TooltipTrigger};
pub use error::GridError;
pub use events::{
    ColumnHeaderClickedEvent, GridEvent, GridSignals, HeaderSelectionChangedEvent,
    SelectionChangedEvent, SortChangedEvent, apply_header_selection,
};
pub use node::{RowNode, RowNodeRef};
pub use row_manager::{ROW_ID_FIELD, RowManager};
pub use selection::{
    IgnoreReason, RowSelectionOptions, SelectionManager, SelectionMode, SelectionOutcome,
};
pub use sort::{SortParams, SortResult, perform_sort};
pub use value::{CellValue, Context, RowData};

/// The most commonly used types, for convenient importing:
///
/// ```
/// use trellis_grid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::GridApi;
    pub use crate::column::{ColumnDef, SortOrder};
    pub use crate::config::GridOptions;
    pub use crate::events::{GridSignals, SelectionChangedEvent, SortChangedEvent};
    pub use crate::node::{RowNode, RowNodeRef};
    pub use crate::selection::{RowSelectionOptions, SelectionMode, SelectionOutcome};
    pub use crate::sort::{SortParams, SortResult, perform_sort};
    pub use crate::value::{CellValue, Context, RowData};
}
