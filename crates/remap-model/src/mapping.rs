//! Per-column mapping configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::transformation::Transformation;

/// Declared coercion type for a source column.
///
/// `Unset` behaves as string passthrough during coercion but is excluded from
/// the exported type map, exactly like an explicit `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    #[serde(skip)]
    Unset,
    String,
    Integer,
    Number,
    Boolean,
}

impl ColumnType {
    /// True when the type exports as absent (`Unset` and `String` both do).
    pub fn is_default(self) -> bool {
        matches!(self, ColumnType::Unset | ColumnType::String)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Unset | ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ColumnType::String),
            "integer" => Ok(ColumnType::Integer),
            "number" => Ok(ColumnType::Number),
            "boolean" => Ok(ColumnType::Boolean),
            other => Err(ModelError::UnknownColumnType(other.to_string())),
        }
    }
}

/// A single case-insensitive exact-match value rewrite rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueConversion {
    pub source_value: String,
    pub target_value: String,
}

impl ValueConversion {
    pub fn new(source_value: impl Into<String>, target_value: impl Into<String>) -> Self {
        Self {
            source_value: source_value.into(),
            target_value: target_value.into(),
        }
    }
}

/// Full configuration for one source column.
///
/// Lifecycle is tied to the active [`crate::ParsedTable`]: mappings are
/// regenerated when a table is re-parsed, preserved across re-parses keyed by
/// `source_column` where possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Immutable key; must exist in the current table headers when active.
    pub source_column: String,
    pub source_type: ColumnType,
    /// Output header name. Duplicates among included mappings are accepted.
    pub target_column: String,
    /// Ordered rewrite table, first match wins.
    pub conversions: Vec<ValueConversion>,
    pub transformation: Option<Transformation>,
    /// Excluded columns are skipped entirely by the output generator.
    pub include: bool,
}

impl ColumnMapping {
    /// Included passthrough mapping with `target = source` and no coercion.
    pub fn identity(source_column: impl Into<String>) -> Self {
        let source_column = source_column.into();
        Self {
            target_column: source_column.clone(),
            source_column,
            source_type: ColumnType::Unset,
            conversions: Vec::new(),
            transformation: None,
            include: true,
        }
    }

    /// Same as [`ColumnMapping::identity`] but excluded from output.
    pub fn excluded(source_column: impl Into<String>) -> Self {
        Self {
            include: false,
            ..Self::identity(source_column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_defaults() {
        let mapping = ColumnMapping::identity("age");
        assert_eq!(mapping.source_column, "age");
        assert_eq!(mapping.target_column, "age");
        assert_eq!(mapping.source_type, ColumnType::Unset);
        assert!(mapping.include);
        assert!(mapping.conversions.is_empty());
        assert!(mapping.transformation.is_none());
    }

    #[test]
    fn excluded_keeps_identity_target() {
        let mapping = ColumnMapping::excluded("notes");
        assert_eq!(mapping.target_column, "notes");
        assert!(!mapping.include);
    }

    #[test]
    fn unset_and_string_are_default_types() {
        assert!(ColumnType::Unset.is_default());
        assert!(ColumnType::String.is_default());
        assert!(!ColumnType::Integer.is_default());
        assert!(!ColumnType::Boolean.is_default());
    }

    #[test]
    fn column_type_parses_supported_names() {
        assert_eq!("integer".parse::<ColumnType>(), Ok(ColumnType::Integer));
        assert_eq!("boolean".parse::<ColumnType>(), Ok(ColumnType::Boolean));
        assert!("decimal".parse::<ColumnType>().is_err());
    }

    #[test]
    fn column_type_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&ColumnType::Integer).unwrap(),
            "\"integer\""
        );
        let parsed: ColumnType = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(parsed, ColumnType::Number);
    }
}
