//! Typed cell values and row records.
//!
//! A grid row is an open mapping from field name to [`CellValue`]. The
//! value enum keeps the engine's comparisons and formatting total over
//! whatever the host feeds in: absent fields resolve to
//! [`CellValue::None`] and degrade through the default comparator instead
//! of failing.

use std::collections::HashMap;
use std::fmt;

/// One row record: field name to cell value.
///
/// Records are owned by the engine once handed to
/// [`set_data`](crate::api::GridApi::set_data); the engine stamps its
/// derived row id into its own copy under
/// [`ROW_ID_FIELD`](crate::row_manager::ROW_ID_FIELD).
pub type RowData = HashMap<String, CellValue>;

/// Opaque application context passed through to column callbacks and event
/// payloads. The engine never inspects it.
pub type Context = HashMap<String, CellValue>;

/// A single cell value.
///
/// # Example
///
/// ```
/// use trellis_grid::value::CellValue;
///
/// let value = CellValue::from("Alice");
/// assert_eq!(value.as_str(), Some("Alice"));
/// assert!(!value.is_numeric());
///
/// let value = CellValue::from(30);
/// assert_eq!(value.as_number(), Some(30.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// No value (absent field).
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
}

impl CellValue {
    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this contains some value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns `true` if this is an `Int` or `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Widens `Int` or `Float` to `f64`.
    ///
    /// This is the numeric view the default sort comparator uses: both
    /// sides must widen for the numeric branch to apply.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// The string rendering used by the default comparator's string branch.
/// `None` renders as the empty string and therefore sorts first ascending.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::None => Ok(()),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Float(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<Option<String>> for CellValue {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => CellValue::String(s),
            None => CellValue::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let value = CellValue::from("hello");
        assert_eq!(value.as_str(), Some("hello"));
        assert!(value.as_int().is_none());
        assert!(value.is_some());

        let value = CellValue::from(7);
        assert_eq!(value.as_int(), Some(7));
        assert_eq!(value.as_number(), Some(7.0));

        let value = CellValue::from(2.5);
        assert_eq!(value.as_float(), Some(2.5));
        assert_eq!(value.as_number(), Some(2.5));

        assert_eq!(CellValue::from(true).as_bool(), Some(true));
        assert!(CellValue::None.is_none());
    }

    #[test]
    fn test_numeric_predicate() {
        assert!(CellValue::Int(1).is_numeric());
        assert!(CellValue::Float(1.0).is_numeric());
        assert!(!CellValue::String("1".into()).is_numeric());
        assert!(!CellValue::Bool(true).is_numeric());
        assert!(!CellValue::None.is_numeric());
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(CellValue::None.to_string(), "");
        assert_eq!(CellValue::from("x").to_string(), "x");
        assert_eq!(CellValue::from(30).to_string(), "30");
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from(false).to_string(), "false");
    }

    #[test]
    fn test_from_option_string() {
        assert_eq!(
            CellValue::from(Some("a".to_string())),
            CellValue::String("a".into())
        );
        assert_eq!(CellValue::from(None::<String>), CellValue::None);
    }
}
