//! Error types for the remap data model.

use thiserror::Error;

/// Errors raised when parsing model values from their textual forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Delimiter string is not one of `,`, `;` or tab.
    #[error("unsupported delimiter {0:?}: expected \",\", \";\" or \"\\t\"")]
    UnknownDelimiter(String),

    /// Decimal separator string is not `.` or `,`.
    #[error("unsupported decimal separator {0:?}: expected \".\" or \",\"")]
    UnknownDecimalSeparator(String),

    /// Column type string is not one of the supported names.
    #[error("unknown column type {0:?}: expected string, integer, number or boolean")]
    UnknownColumnType(String),

    /// Transformation spec string does not match the grammar.
    #[error("unrecognized transformation {0:?}")]
    UnknownTransformation(String),
}

/// Result type for model parsing operations.
pub type Result<T> = std::result::Result<T, ModelError>;
