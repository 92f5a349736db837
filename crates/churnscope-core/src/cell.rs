//! Scalar cell values.

use serde::Serialize;

/// One scalar value from the source table.
///
/// Serializes as the bare JSON value: integers and floats as numbers, text as a
/// string and empty cells as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// An empty source field.
    Null,
    /// A value that parses as a signed 64-bit integer.
    Integer(i64),
    /// A finite value that parses as a float but not as an integer.
    Float(f64),
    /// Anything else.
    Text(String),
}

impl Cell {
    /// Parse a raw field, picking the narrowest representation.
    ///
    /// Surrounding whitespace is dropped for every kind of value, text included.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Null;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Float(value),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// The numeric value of the cell, if it has one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Null | Self::Text(_) => None,
        }
    }

    /// Whether the cell is numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}
