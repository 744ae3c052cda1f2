//! Grid-level options.
//!
//! [`GridOptions`] is the configuration object the hosting view layer
//! supplies when constructing a grid. The engine acts on
//! `get_row_id`, `row_selection`, and `context`; the remaining fields are
//! presentation passthroughs the engine stores and hands back to the view
//! layer untouched.

use std::fmt;
use std::sync::Arc;

use crate::row_manager::RowIdFn;
use crate::selection::RowSelectionOptions;
use crate::value::{Context, RowData};

/// How tooltips are triggered. Presentation passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipTrigger {
    Click,
    #[default]
    LongPress,
}

/// Grid-level configuration.
///
/// # Example
///
/// ```
/// use trellis_grid::config::GridOptions;
/// use trellis_grid::selection::RowSelectionOptions;
///
/// let options = GridOptions::new()
///     .with_row_selection(RowSelectionOptions::multiple())
///     .with_row_id(|record| {
///         record
///             .get("sku")
///             .map(|v| v.to_string())
///             .unwrap_or_default()
///     });
/// ```
#[derive(Clone)]
pub struct GridOptions {
    /// Opaque application context, passed through to column callbacks and
    /// event payloads.
    pub context: Option<Context>,
    /// Derives a row id from a record, overriding the default identity
    /// policy.
    pub get_row_id: Option<RowIdFn>,
    /// Row selection policy.
    pub row_selection: RowSelectionOptions,
    /// Row height in px. Presentation passthrough.
    pub row_height: f32,
    /// Whether tooltips are shown at all. Presentation passthrough.
    pub tooltip_show: bool,
    /// Tooltip trigger gesture. Presentation passthrough.
    pub tooltip_trigger: TooltipTrigger,
    /// Delay before a tooltip shows, in ms. Presentation passthrough.
    pub tooltip_show_delay: u32,
    /// Whether cell borders are drawn. Presentation passthrough.
    pub bordered: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            context: None,
            get_row_id: None,
            row_selection: RowSelectionOptions::default(),
            row_height: 40.0,
            tooltip_show: false,
            tooltip_trigger: TooltipTrigger::default(),
            tooltip_show_delay: 0,
            bordered: false,
        }
    }
}

impl GridOptions {
    /// Creates options with defaults everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application context.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Installs a row-id derivation function.
    pub fn with_row_id<F>(mut self, get_row_id: F) -> Self
    where
        F: Fn(&RowData) -> String + Send + Sync + 'static,
    {
        self.get_row_id = Some(Arc::new(get_row_id));
        self
    }

    /// Sets the row selection policy.
    pub fn with_row_selection(mut self, row_selection: RowSelectionOptions) -> Self {
        self.row_selection = row_selection;
        self
    }

    /// Sets the row height passthrough.
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Sets the tooltip visibility passthrough.
    pub fn with_tooltip_show(mut self, show: bool) -> Self {
        self.tooltip_show = show;
        self
    }

    /// Sets the tooltip trigger passthrough.
    pub fn with_tooltip_trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.tooltip_trigger = trigger;
        self
    }

    /// Sets the tooltip delay passthrough.
    pub fn with_tooltip_show_delay(mut self, delay_ms: u32) -> Self {
        self.tooltip_show_delay = delay_ms;
        self
    }

    /// Sets the border passthrough.
    pub fn with_border(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }
}

impl fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridOptions")
            .field("context", &self.context)
            .field("has_row_id_fn", &self.get_row_id.is_some())
            .field("row_selection", &self.row_selection)
            .field("row_height", &self.row_height)
            .field("tooltip_show", &self.tooltip_show)
            .field("tooltip_trigger", &self.tooltip_trigger)
            .field("tooltip_show_delay", &self.tooltip_show_delay)
            .field("bordered", &self.bordered)
            .finish()
    }
}
