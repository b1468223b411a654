//! Projection of a column-mapping list into a portable document.

use std::collections::BTreeMap;

use remap_model::{ColumnMapping, DecimalSeparator, Delimiter};

use crate::document::MappingConfig;

/// Export a mapping list as a portable document.
///
/// Only included columns land in `mappings`; `typeTransformations` carries
/// non-default types, `transformations` non-empty specs, and
/// `valueConversions` tables with at least one non-empty source value.
/// Conversions with an empty source value are dropped silently.
pub fn export(
    mappings: &[ColumnMapping],
    input_delimiter: Delimiter,
    output_delimiter: Delimiter,
    decimal_separator: DecimalSeparator,
) -> MappingConfig {
    let mut config = MappingConfig::new(input_delimiter, output_delimiter, decimal_separator);

    for mapping in mappings {
        if mapping.include {
            config
                .mappings
                .insert(mapping.source_column.clone(), mapping.target_column.clone());
        }
        if !mapping.source_type.is_default() {
            config
                .type_transformations
                .insert(mapping.source_column.clone(), mapping.source_type);
        }
        if let Some(transformation) = &mapping.transformation {
            config
                .transformations
                .insert(mapping.source_column.clone(), transformation.to_string());
        }
        let conversions: BTreeMap<String, String> = mapping
            .conversions
            .iter()
            .filter(|conversion| !conversion.source_value.is_empty())
            .map(|conversion| {
                (
                    conversion.source_value.clone(),
                    conversion.target_value.clone(),
                )
            })
            .collect();
        if !conversions.is_empty() {
            config
                .value_conversions
                .insert(mapping.source_column.clone(), conversions);
        }
    }

    config
}
