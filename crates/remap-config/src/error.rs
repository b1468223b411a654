//! Import validation errors.

use thiserror::Error;

/// A mapping document rejection, produced by the first failing check.
///
/// Validation is fail-fast: one specific, human-readable reason per attempt,
/// never an accumulated list. A rejected document is never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document is not syntactically valid JSON.
    #[error("mapping document is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// The top-level value is not an object.
    #[error("mapping document must be a JSON object")]
    NotAnObject,

    /// `version` missing or not the literal "1.0".
    #[error("unsupported mapping document version {found:?} (expected \"1.0\")")]
    UnsupportedVersion { found: String },

    /// `mappings` missing, or not a key-to-string object.
    #[error("\"mappings\" must be an object mapping source columns to target columns")]
    MappingsNotAnObject,

    /// A `mappings` value is not a string.
    #[error("mapping target for column {column:?} must be a string")]
    MappingTargetNotAString { column: String },

    /// An optional section is present but not an object.
    #[error("{section:?} must be an object when present")]
    SectionNotAnObject { section: &'static str },

    /// A `typeTransformations` value is outside the supported set.
    #[error("invalid type {value:?} for column {column:?} (expected string, integer, number or boolean)")]
    InvalidColumnType { column: String, value: String },

    /// A `transformations` value violates the transformation grammar.
    #[error("invalid transformation {spec:?} for column {column:?}")]
    InvalidTransformation { column: String, spec: String },

    /// A delimiter field holds an unsupported value.
    #[error("invalid {field} {value:?} (expected \",\", \";\" or \"\\t\")")]
    InvalidDelimiter { field: &'static str, value: String },

    /// `decimalSeparator` holds an unsupported value.
    #[error("invalid decimalSeparator {value:?} (expected \".\" or \",\")")]
    InvalidDecimalSeparator { value: String },

    /// No table is loaded to reconcile against.
    #[error("no table loaded: parse a CSV before importing a mapping")]
    NoTableLoaded,

    /// `mappings` references columns absent from the target table.
    #[error("mapping references unknown columns: {}", columns.join(", "))]
    UnknownColumns { columns: Vec<String> },

    /// Collection wrapper has no entries.
    #[error("mapping collection contains no schemas")]
    EmptyCollection,

    /// Named collection entry not found.
    #[error("no schema named {name:?} in mapping collection")]
    SchemaNotFound { name: String },

    /// Collection entry lacks a `config` object.
    #[error("collection schema entry is missing its \"config\" document")]
    SchemaMissingConfig,
}
