//! The mapping document and its collection wrapper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use remap_model::{ColumnType, DecimalSeparator, Delimiter};

use crate::error::ValidationError;

/// The only supported document version.
pub const CONFIG_VERSION: &str = "1.0";

/// Portable, serializable mapping specification.
///
/// Field order matches the document layout so exports stay human-diffable.
/// Inner maps are `BTreeMap` for deterministic key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfig {
    pub version: String,
    #[serde(default)]
    pub input_delimiter: Delimiter,
    #[serde(default)]
    pub output_delimiter: Delimiter,
    #[serde(default)]
    pub decimal_separator: DecimalSeparator,
    /// Source column to target column, included columns only.
    pub mappings: BTreeMap<String, String>,
    /// Source column to declared type, non-default types only.
    #[serde(default)]
    pub type_transformations: BTreeMap<String, ColumnType>,
    /// Source column to transformation spec string.
    #[serde(default)]
    pub transformations: BTreeMap<String, String>,
    /// Source column to value rewrite table.
    #[serde(default)]
    pub value_conversions: BTreeMap<String, BTreeMap<String, String>>,
}

impl MappingConfig {
    pub fn new(
        input_delimiter: Delimiter,
        output_delimiter: Delimiter,
        decimal_separator: DecimalSeparator,
    ) -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            input_delimiter,
            output_delimiter,
            decimal_separator,
            mappings: BTreeMap::new(),
            type_transformations: BTreeMap::new(),
            transformations: BTreeMap::new(),
            value_conversions: BTreeMap::new(),
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Resolve a document that is either a bare config or a collection wrapper.
///
/// A collection groups named configs as `{"$schema": ..., "schemas":
/// [{"name": ..., "config": {...}}]}`. With `schema_name` the matching entry
/// is selected, otherwise the first one; a document without a `schemas`
/// array is returned as-is.
pub fn select_config(text: &str, schema_name: Option<&str>) -> Result<Value, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|error| ValidationError::InvalidJson {
            message: error.to_string(),
        })?;

    let Some(schemas) = value.get("schemas").and_then(Value::as_array) else {
        return Ok(value);
    };

    let entry = match schema_name {
        Some(name) => schemas
            .iter()
            .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name))
            .ok_or_else(|| ValidationError::SchemaNotFound {
                name: name.to_string(),
            })?,
        None => schemas.first().ok_or(ValidationError::EmptyCollection)?,
    };
    entry
        .get("config")
        .cloned()
        .ok_or(ValidationError::SchemaMissingConfig)
}
