//! Logging facilities for Trellis Grid.
//!
//! Trellis Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the hosting application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Log lines use the targets in [`targets`], so subsystems can be filtered
//! with standard `tracing` directives, e.g.
//! `RUST_LOG=trellis_grid::sort=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "trellis_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_grid_core::signal";
    /// Row collection and identity target.
    pub const ROWS: &str = "trellis_grid::rows";
    /// Selection state target.
    pub const SELECTION: &str = "trellis_grid::selection";
    /// Sort pipeline target.
    pub const SORT: &str = "trellis_grid::sort";
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with a consistent target.
#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "trellis_grid", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "trellis_grid", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "trellis_grid", $($arg)*)
    };
}
