//! Mapping document import: validation checklist and list rebuilding.

use serde_json::Value;

use remap_model::{ColumnMapping, Transformation, ValueConversion};

use crate::document::{CONFIG_VERSION, MappingConfig};
use crate::error::ValidationError;

const COLUMN_TYPES: [&str; 4] = ["string", "integer", "number", "boolean"];
const DELIMITERS: [&str; 3] = [",", ";", "\t"];
const DECIMAL_SEPARATORS: [&str; 2] = [".", ","];

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// The validated document, including its delimiter/separator settings.
    pub config: MappingConfig,
    /// Full mapping list covering every header of the target table.
    pub mappings: Vec<ColumnMapping>,
}

/// Import a mapping document against the current table headers.
pub fn import(document: &str, target_headers: &[String]) -> Result<ImportOutcome, ValidationError> {
    let value: Value =
        serde_json::from_str(document).map_err(|error| ValidationError::InvalidJson {
            message: error.to_string(),
        })?;
    import_document(&value, target_headers)
}

/// Import an already-parsed document (for example one unwrapped from a
/// collection by [`crate::select_config`]).
///
/// Runs the fixed ordered checklist; the first failing check aborts with its
/// specific reason and nothing is applied. Only after every check passes is
/// the full mapping list rebuilt: every target header gets an entry, columns
/// absent from `mappings` become excluded-but-visible identity mappings.
pub fn import_document(
    value: &Value,
    target_headers: &[String],
) -> Result<ImportOutcome, ValidationError> {
    validate(value, target_headers)?;

    let config: MappingConfig =
        serde_json::from_value(value.clone()).map_err(|error| ValidationError::InvalidJson {
            message: error.to_string(),
        })?;

    let mappings = rebuild_mappings(&config, target_headers);
    Ok(ImportOutcome { config, mappings })
}

fn validate(value: &Value, target_headers: &[String]) -> Result<(), ValidationError> {
    // 1. Document shape.
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    // 2. Version literal.
    let version = object.get("version").and_then(Value::as_str);
    if version != Some(CONFIG_VERSION) {
        let found = match object.get("version") {
            Some(found) => found.to_string(),
            None => "missing".to_string(),
        };
        return Err(ValidationError::UnsupportedVersion { found });
    }

    // 3./4. Mappings must be a key-to-string object.
    let mappings = object
        .get("mappings")
        .and_then(Value::as_object)
        .ok_or(ValidationError::MappingsNotAnObject)?;
    for (column, target) in mappings {
        if !target.is_string() {
            return Err(ValidationError::MappingTargetNotAString {
                column: column.clone(),
            });
        }
    }

    // 5. Declared types.
    if let Some(types) = object.get("typeTransformations") {
        let types = types
            .as_object()
            .ok_or(ValidationError::SectionNotAnObject {
                section: "typeTransformations",
            })?;
        for (column, declared) in types {
            let valid = declared
                .as_str()
                .is_some_and(|name| COLUMN_TYPES.contains(&name));
            if !valid {
                return Err(ValidationError::InvalidColumnType {
                    column: column.clone(),
                    value: declared.to_string(),
                });
            }
        }
    }

    // 6. Transformation grammar.
    if let Some(transformations) = object.get("transformations") {
        let transformations =
            transformations
                .as_object()
                .ok_or(ValidationError::SectionNotAnObject {
                    section: "transformations",
                })?;
        for (column, spec) in transformations {
            let valid = spec
                .as_str()
                .is_some_and(|spec| Transformation::parse_spec(spec).is_ok());
            if !valid {
                return Err(ValidationError::InvalidTransformation {
                    column: column.clone(),
                    spec: spec.as_str().unwrap_or_default().to_string(),
                });
            }
        }
    }

    // 7. Delimiters and decimal separator.
    for field in ["inputDelimiter", "outputDelimiter"] {
        if let Some(delimiter) = object.get(field) {
            let valid = delimiter
                .as_str()
                .is_some_and(|delimiter| DELIMITERS.contains(&delimiter));
            if !valid {
                return Err(ValidationError::InvalidDelimiter {
                    field,
                    value: delimiter.to_string(),
                });
            }
        }
    }
    if let Some(separator) = object.get("decimalSeparator") {
        let valid = separator
            .as_str()
            .is_some_and(|separator| DECIMAL_SEPARATORS.contains(&separator));
        if !valid {
            return Err(ValidationError::InvalidDecimalSeparator {
                value: separator.to_string(),
            });
        }
    }

    // 8. A table must already be loaded.
    if target_headers.is_empty() {
        return Err(ValidationError::NoTableLoaded);
    }

    // 9. Every mapped column must exist in the table.
    let unknown: Vec<String> = mappings
        .keys()
        .filter(|column| !target_headers.contains(column))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownColumns { columns: unknown });
    }

    Ok(())
}

/// Rebuild the full mapping list from a validated document.
///
/// Type, transformation and conversion entries apply to their column whether
/// or not it is included; the document validates only `mappings` keys
/// against the table, matching what export emits.
fn rebuild_mappings(config: &MappingConfig, target_headers: &[String]) -> Vec<ColumnMapping> {
    target_headers
        .iter()
        .map(|header| {
            let mut mapping = match config.mappings.get(header) {
                Some(target) => {
                    let mut mapping = ColumnMapping::identity(header.clone());
                    mapping.target_column = target.clone();
                    mapping
                }
                None => ColumnMapping::excluded(header.clone()),
            };
            if let Some(declared) = config.type_transformations.get(header) {
                mapping.source_type = *declared;
            }
            if let Some(spec) = config.transformations.get(header) {
                // Grammar already validated; a bad spec cannot reach here.
                if let Ok(parsed) = Transformation::parse_spec(spec) {
                    mapping.transformation = parsed;
                }
            }
            if let Some(table) = config.value_conversions.get(header) {
                mapping.conversions = table
                    .iter()
                    .map(|(source, target)| ValueConversion::new(source.clone(), target.clone()))
                    .collect();
            }
            mapping
        })
        .collect()
}

/// Lifecycle of one import attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportState {
    #[default]
    Idle,
    Validating,
    Applied,
    Rejected,
}

/// Tracks the import state machine across attempts.
///
/// Terminal states are not retried automatically; the caller resubmits.
#[derive(Debug, Default)]
pub struct Importer {
    state: ImportState,
    last_error: Option<ValidationError>,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Run one import attempt, moving to `Applied` or `Rejected`.
    pub fn import(
        &mut self,
        document: &str,
        target_headers: &[String],
    ) -> Result<ImportOutcome, ValidationError> {
        self.state = ImportState::Validating;
        match import(document, target_headers) {
            Ok(outcome) => {
                self.state = ImportState::Applied;
                self.last_error = None;
                tracing::info!(
                    columns = outcome.config.mappings.len(),
                    "mapping document applied"
                );
                Ok(outcome)
            }
            Err(error) => {
                self.state = ImportState::Rejected;
                tracing::warn!(%error, "mapping document rejected");
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }
}
