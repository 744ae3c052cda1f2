//! Core systems for Trellis Grid: signals and logging.
//!
//! The grid engine itself never emits events — it constructs payloads and
//! hands them to the hosting layer (see the `trellis-grid` crate). This
//! crate provides the plumbing that hosting layers use to distribute those
//! payloads:
//!
//! - [`Signal`] — a type-safe signal/slot mechanism with synchronous,
//!   same-thread invocation
//! - [`logging`] — tracing targets and macros with consistent naming

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
