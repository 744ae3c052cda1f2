//! Column definitions, sort order, and typed callback parameters.
//!
//! A [`ColumnDef`] carries the per-column configuration the hosting view
//! layer supplies: the field it reads, optional value-resolution and
//! comparison callbacks, and presentation directives the engine stores but
//! never interprets (pinning, alignment, widths).
//!
//! Every user callback receives a concrete parameter struct
//! ([`CellParams`], [`HeaderParams`], [`CompareParams`]) so call sites are
//! checked at compile time.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::api::GridApi;
use crate::error::{GridError, Result};
use crate::node::RowNodeRef;
use crate::value::{CellValue, Context, RowData};

/// Per-column sort flag.
///
/// At most one column carries a non-[`None`](SortOrder::None) order at any
/// time; the sort pipeline enforces this when it applies a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Not sorted.
    #[default]
    None,
    /// Ascending.
    Ascending,
    /// Descending.
    Descending,
}

impl SortOrder {
    /// Advances the cyclic sort state:
    /// none → ascending → descending → none.
    pub fn next(self) -> SortOrder {
        match self {
            SortOrder::None => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::None,
        }
    }

    /// Returns `true` for [`SortOrder::None`].
    pub fn is_none(self) -> bool {
        self == SortOrder::None
    }
}

/// Which edge a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPin {
    Left,
    Right,
}

/// Cell/header text alignment. Presentation directive; stored, not
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Parameters passed to value getters and formatters.
pub struct CellParams<'a> {
    /// The row record being resolved.
    pub row: &'a RowData,
    /// The column the callback is configured on.
    pub column: &'a ColumnDef,
    /// The raw field value (`row[column.field]`, or
    /// [`CellValue::None`] when absent).
    pub value: CellValue,
    /// The row's node, when the record carries a stamped row id known to
    /// the grid.
    pub node: Option<RowNodeRef>,
    /// The grid facade, for lookups.
    pub api: &'a GridApi,
    /// Application context from [`GridOptions`](crate::config::GridOptions).
    pub context: Option<&'a Context>,
}

/// Parameters passed to header formatters.
pub struct HeaderParams<'a> {
    /// The column whose header is being resolved.
    pub column: &'a ColumnDef,
    /// The grid facade.
    pub api: &'a GridApi,
    /// Application context.
    pub context: Option<&'a Context>,
}

/// Parameters passed to custom comparators.
///
/// Values are resolved through the column's value getter before the
/// comparator runs, so computed columns compare uniformly with stored
/// fields.
pub struct CompareParams<'a> {
    pub value_a: CellValue,
    pub value_b: CellValue,
    pub row_a: &'a RowData,
    pub row_b: &'a RowData,
    pub column: &'a ColumnDef,
}

/// Type alias for a value getter function.
pub type ValueGetterFn = Arc<dyn Fn(&CellParams<'_>) -> CellValue + Send + Sync>;

/// Type alias for a cell value formatter.
pub type ValueFormatterFn = Arc<dyn Fn(&CellParams<'_>) -> String + Send + Sync>;

/// Type alias for a header value formatter.
pub type HeaderValueFormatterFn = Arc<dyn Fn(&HeaderParams<'_>) -> String + Send + Sync>;

/// Type alias for a custom comparator.
pub type ComparatorFn = Arc<dyn Fn(&CompareParams<'_>) -> Ordering + Send + Sync>;

/// How a column's rows are ordered when it is sorted.
#[derive(Clone, Default)]
pub enum SortStrategy {
    /// The built-in comparator: numeric when both resolved values are
    /// numeric, string comparison otherwise (default).
    #[default]
    BuiltIn,
    /// A custom comparator.
    With(ComparatorFn),
    /// The data is sorted externally (e.g. server-side); the engine never
    /// reorders it locally.
    External,
}

impl SortStrategy {
    /// Returns `true` for [`SortStrategy::External`].
    pub fn is_external(&self) -> bool {
        matches!(self, SortStrategy::External)
    }
}

impl fmt::Debug for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::BuiltIn => write!(f, "BuiltIn"),
            SortStrategy::With(_) => write!(f, "With(..)"),
            SortStrategy::External => write!(f, "External"),
        }
    }
}

/// Configuration for one grid column.
///
/// # Example
///
/// ```
/// use trellis_grid::column::{ColumnDef, ColumnPin, TextAlign};
///
/// let column = ColumnDef::new("age")
///     .with_header_name("Age")
///     .sortable(true)
///     .with_align(TextAlign::Right)
///     .with_pinned(ColumnPin::Left);
///
/// assert_eq!(column.header_text(), "Age");
/// ```
#[derive(Clone)]
pub struct ColumnDef {
    /// The record field this column reads.
    pub field: String,
    /// Header caption; falls back to the field name.
    pub header_name: Option<String>,
    /// Field to read for tooltips instead of `field`.
    pub tooltip_field: Option<String>,
    /// Fixed width in px. Presentation directive.
    pub width: Option<f32>,
    /// Minimum width in px. Presentation directive.
    pub min_width: Option<f32>,
    /// Whether overflowing cell text is ellipsized. Presentation
    /// directive; on by default.
    pub ellipsis: bool,
    /// Text alignment. Presentation directive.
    pub align: TextAlign,
    /// Pinned edge, if any.
    pub pinned: Option<ColumnPin>,
    /// Whether the column participates in user-triggered sorting.
    pub sortable: bool,
    /// Current sort flag.
    pub sort_order: SortOrder,
    /// Whether rows show a selection checkbox in this column.
    pub checkbox_selection: bool,
    /// Whether the header shows a select-all checkbox.
    pub header_checkbox_selection: bool,
    /// Ordering behavior when this column is sorted.
    pub sort_strategy: SortStrategy,
    /// Resolves the cell value for computed/derived columns.
    pub value_getter: Option<ValueGetterFn>,
    /// Formats the resolved value for display.
    pub value_formatter: Option<ValueFormatterFn>,
    /// Formats the header caption.
    pub header_value_formatter: Option<HeaderValueFormatterFn>,
}

impl ColumnDef {
    /// Creates a column reading the given field, with defaults everywhere
    /// else.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: None,
            tooltip_field: None,
            width: None,
            min_width: None,
            ellipsis: true,
            align: TextAlign::default(),
            pinned: None,
            sortable: false,
            sort_order: SortOrder::None,
            checkbox_selection: false,
            header_checkbox_selection: false,
            sort_strategy: SortStrategy::default(),
            value_getter: None,
            value_formatter: None,
            header_value_formatter: None,
        }
    }

    /// Sets the header caption.
    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = Some(name.into());
        self
    }

    /// Sets the tooltip source field.
    pub fn with_tooltip_field(mut self, field: impl Into<String>) -> Self {
        self.tooltip_field = Some(field.into());
        self
    }

    /// Sets a fixed width in px.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets a minimum width in px.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Sets the ellipsis flag.
    pub fn with_ellipsis(mut self, ellipsis: bool) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Sets the text alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Pins the column to an edge.
    pub fn with_pinned(mut self, pin: ColumnPin) -> Self {
        self.pinned = Some(pin);
        self
    }

    /// Sets whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the current sort flag.
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Enables the row selection checkbox.
    pub fn with_checkbox_selection(mut self, enabled: bool) -> Self {
        self.checkbox_selection = enabled;
        self
    }

    /// Enables the header select-all checkbox.
    pub fn with_header_checkbox_selection(mut self, enabled: bool) -> Self {
        self.header_checkbox_selection = enabled;
        self
    }

    /// Sets the sort strategy.
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Installs a custom comparator.
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&CompareParams<'_>) -> Ordering + Send + Sync + 'static,
    {
        self.sort_strategy = SortStrategy::With(Arc::new(comparator));
        self
    }

    /// Installs a value getter.
    pub fn with_value_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&CellParams<'_>) -> CellValue + Send + Sync + 'static,
    {
        self.value_getter = Some(Arc::new(getter));
        self
    }

    /// Installs a value formatter.
    pub fn with_value_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellParams<'_>) -> String + Send + Sync + 'static,
    {
        self.value_formatter = Some(Arc::new(formatter));
        self
    }

    /// Installs a header value formatter.
    pub fn with_header_value_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&HeaderParams<'_>) -> String + Send + Sync + 'static,
    {
        self.header_value_formatter = Some(Arc::new(formatter));
        self
    }

    /// The header caption, falling back to the field name.
    pub fn header_text(&self) -> &str {
        self.header_name.as_deref().unwrap_or(&self.field)
    }

    /// Formats a resolved value for display: the value formatter when one
    /// is configured, the value's string rendering otherwise.
    pub fn formatted_value(&self, params: &CellParams<'_>) -> String {
        match &self.value_formatter {
            Some(formatter) => formatter(params),
            None => params.value.to_string(),
        }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("field", &self.field)
            .field("header_name", &self.header_name)
            .field("pinned", &self.pinned)
            .field("sortable", &self.sortable)
            .field("sort_order", &self.sort_order)
            .field("sort_strategy", &self.sort_strategy)
            .finish_non_exhaustive()
    }
}

/// Columns split by pinned edge, in definition order within each group.
#[derive(Debug)]
pub struct ColumnPartition<'a> {
    pub pinned_left: Vec<&'a ColumnDef>,
    pub pinned_right: Vec<&'a ColumnDef>,
    pub unpinned: Vec<&'a ColumnDef>,
}

/// Splits columns into pinned-left, pinned-right, and scrolling groups.
pub fn partition_by_pin(columns: &[ColumnDef]) -> ColumnPartition<'_> {
    let mut partition = ColumnPartition {
        pinned_left: Vec::new(),
        pinned_right: Vec::new(),
        unpinned: Vec::new(),
    };

    for column in columns {
        match column.pinned {
            Some(ColumnPin::Left) => partition.pinned_left.push(column),
            Some(ColumnPin::Right) => partition.pinned_right.push(column),
            None => partition.unpinned.push(column),
        }
    }

    partition
}

/// Validates a column list: every field named, no field defined twice.
pub fn validate_columns(columns: &[ColumnDef]) -> Result<()> {
    let mut seen = HashSet::new();

    for column in columns {
        if column.field.is_empty() {
            return Err(GridError::invalid_column_def(
                &column.field,
                "field name is empty",
            ));
        }
        if !seen.insert(column.field.as_str()) {
            return Err(GridError::invalid_column_def(
                &column.field,
                "field defined by more than one column",
            ));
        }
    }

    Ok(())
}
