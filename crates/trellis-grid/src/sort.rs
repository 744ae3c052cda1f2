//! The sort pipeline.
//!
//! A stateless set of pure transformations over
//! `(data, columns, field, api, context)`:
//!
//! 1. value resolution through the column's value getter
//!    ([`cell_value_for`])
//! 2. cyclic sort-order advancement
//!    ([`SortOrder::next`](crate::column::SortOrder::next))
//! 3. sort-state application producing a new column list with the
//!    single-sorted-column invariant enforced ([`apply_sort_state`])
//! 4. comparator construction ([`create_comparator`])
//! 5. pure sort execution ([`sort_data`])
//! 6. orchestration ([`perform_sort`])
//!
//! Nothing here performs I/O or emits events: [`perform_sort`] returns a
//! [`SortResult`] and the caller applies the sorted data back into the
//! grid (typically via
//! [`GridApi::set_data`](crate::api::GridApi::set_data)) and packages a
//! [`SortChangedEvent`](crate::events::SortChangedEvent).

use std::cmp::Ordering;

use crate::api::GridApi;
use crate::column::{CellParams, ColumnDef, CompareParams, SortOrder, SortStrategy};
use crate::error::{GridError, Result};
use crate::row_manager::ROW_ID_FIELD;
use crate::value::{CellValue, Context, RowData};

/// Resolves the cell value a row contributes for a column.
///
/// When the column configures a value getter it is invoked with a full
/// [`CellParams`] bundle and its return is used; otherwise the raw field
/// value is taken directly. Absent fields resolve to
/// [`CellValue::None`].
pub fn cell_value_for(
    row: &RowData,
    column: &ColumnDef,
    api: &GridApi,
    context: Option<&Context>,
) -> CellValue {
    let raw = row.get(&column.field).cloned().unwrap_or_default();

    let Some(getter) = &column.value_getter else {
        return raw;
    };

    let node = row
        .get(ROW_ID_FIELD)
        .and_then(|id| id.as_str().map(str::to_owned))
        .and_then(|id| api.row_node(&id));

    getter(&CellParams {
        row,
        column,
        value: raw,
        node,
        api,
        context,
    })
}

/// Applies a new sort state to a column list.
///
/// Returns a new list in which the column for `field` carries `order` and
/// every other column is reset to [`SortOrder::None`] — the enforcement
/// point for the at-most-one-sorted-column invariant. The input list is
/// untouched; whether to adopt the result is the caller's decision.
pub fn apply_sort_state(columns: &[ColumnDef], field: &str, order: SortOrder) -> Vec<ColumnDef> {
    columns
        .iter()
        .map(|column| {
            let mut column = column.clone();
            column.sort_order = if column.field == field {
                order
            } else {
                SortOrder::None
            };
            column
        })
        .collect()
}

/// Builds the row comparator for a column and direction.
///
/// A custom comparator (when configured and the order is non-empty) is
/// wrapped with value resolution: both rows' values go through
/// [`cell_value_for`] before the callback sees them. Otherwise the
/// built-in comparison applies: numeric when both values widen to a
/// number, string rendering otherwise, with the direction flipping both
/// branches consistently.
pub fn create_comparator<'a>(
    column: &'a ColumnDef,
    order: SortOrder,
    api: &'a GridApi,
    context: Option<&'a Context>,
) -> impl Fn(&RowData, &RowData) -> Ordering + 'a {
    move |row_a, row_b| {
        let value_a = cell_value_for(row_a, column, api, context);
        let value_b = cell_value_for(row_b, column, api, context);

        if let SortStrategy::With(compare) = &column.sort_strategy {
            if !order.is_none() {
                return compare(&CompareParams {
                    value_a,
                    value_b,
                    row_a,
                    row_b,
                    column,
                });
            }
        }

        default_compare(&value_a, &value_b, order)
    }
}

/// The built-in three-way comparison.
fn default_compare(a: &CellValue, b: &CellValue, order: SortOrder) -> Ordering {
    let ascending = match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    };

    if order == SortOrder::Descending {
        ascending.reverse()
    } else {
        ascending
    }
}

/// Produces a sorted copy of `data` for a column and direction.
///
/// With an empty order, or a column whose strategy is
/// [`SortStrategy::External`] (assumed externally sorted), the result is
/// a plain copy in the input order. The input is never mutated, and the
/// sort is stable.
pub fn sort_data(
    data: &[RowData],
    column: &ColumnDef,
    order: SortOrder,
    api: &GridApi,
    context: Option<&Context>,
) -> Vec<RowData> {
    if order.is_none() || column.sort_strategy.is_external() {
        return data.to_vec();
    }

    let comparator = create_comparator(column, order, api, context);
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| comparator(a, b));
    sorted
}

/// Input bundle for [`perform_sort`].
#[derive(Clone, Copy)]
pub struct SortParams<'a> {
    /// The rows to sort (the current presentation order).
    pub data: &'a [RowData],
    /// The full column list.
    pub columns: &'a [ColumnDef],
    /// Field of the column the user is sorting on.
    pub field: &'a str,
    /// The grid facade, for value resolution.
    pub api: &'a GridApi,
    /// Application context passed through to callbacks.
    pub context: Option<&'a Context>,
}

/// What a sort pass produced.
#[derive(Debug, Clone)]
pub struct SortResult {
    /// The rows in the new order.
    pub sorted_data: Vec<RowData>,
    /// The column list with the new sort state applied.
    pub updated_columns: Vec<ColumnDef>,
    /// The sorted column, with its new order merged in.
    pub column: ColumnDef,
    /// The order the sorted column advanced to.
    pub sort_order: SortOrder,
}

/// Runs one user-triggered sort interaction.
///
/// Advances the target column's cyclic sort order, applies the exclusive
/// sort state across the column list, and produces the reordered data.
/// Pure with respect to its inputs: `data` and `columns` are left
/// untouched, and nothing is emitted.
///
/// # Errors
///
/// [`GridError::UnknownColumn`] when `field` names no column in
/// `columns`.
#[tracing::instrument(skip(params), fields(field = params.field), target = "trellis_grid::sort", level = "debug")]
pub fn perform_sort(params: &SortParams<'_>) -> Result<SortResult> {
    let SortParams {
        data,
        columns,
        field,
        api,
        context,
    } = *params;

    let current = columns
        .iter()
        .find(|column| column.field == field)
        .ok_or_else(|| GridError::unknown_column(field))?;

    let sort_order = current.sort_order.next();
    let mut column = current.clone();
    column.sort_order = sort_order;

    let updated_columns = apply_sort_state(columns, field, sort_order);
    let sorted_data = sort_data(data, &column, sort_order, api, context);

    tracing::debug!(
        target: "trellis_grid::sort",
        order = ?sort_order,
        rows = sorted_data.len(),
        "sort pass complete"
    );

    Ok(SortResult {
        sorted_data,
        updated_columns,
        column,
        sort_order,
    })
}
