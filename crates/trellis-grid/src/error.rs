//! Error types for the grid engine.
//!
//! Almost every failure path in the engine is local recovery: missing
//! nodes come back as `None`, refused selection operations report an
//! explicit ignored outcome, and malformed sortable data degrades through
//! the default comparator. `GridError` covers the remaining boundary —
//! column definitions that cannot be acted on at all.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur at the column/sort configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A sort was requested for a field no column defines.
    #[error("unknown sort column '{field}'")]
    UnknownColumn { field: String },

    /// A column definition is unusable.
    #[error("invalid column definition '{field}': {message}")]
    InvalidColumnDef { field: String, message: String },
}

impl GridError {
    /// Create an unknown-column error.
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::UnknownColumn {
            field: field.into(),
        }
    }

    /// Create an invalid-column-definition error.
    pub fn invalid_column_def(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColumnDef {
            field: field.into(),
            message: message.into(),
        }
    }
}
