//! Output generation: compose parsing, coercion and transformation into a
//! delimited document.

use remap_ingest::{Result, write_delimited};
use remap_model::{ColumnMapping, ColumnType, DecimalSeparator, Delimiter, ParsedTable};
use remap_transform::{apply_transformation, coerce};

/// Generate delimited output for every included column.
///
/// Per cell: pull the source value (missing column or cell yields `""`),
/// coerce under the declared type and conversion table, apply the
/// second-stage transformation, then render boolean-typed `"true"`/`"false"`
/// results as `"1"`/`"0"`. Fields are quoted only when they contain the
/// output delimiter or a quote character. Excluded columns are skipped
/// entirely; duplicate target headers are emitted as-is.
pub fn generate(
    table: &ParsedTable,
    mappings: &[ColumnMapping],
    decimal_separator: DecimalSeparator,
    output_delimiter: Delimiter,
) -> Result<String> {
    let included: Vec<&ColumnMapping> = mappings.iter().filter(|mapping| mapping.include).collect();
    let headers: Vec<String> = included
        .iter()
        .map(|mapping| mapping.target_column.clone())
        .collect();
    let source_indices: Vec<Option<usize>> = included
        .iter()
        .map(|mapping| table.column_index(&mapping.source_column))
        .collect();

    tracing::debug!(
        columns = included.len(),
        rows = table.rows.len(),
        "generating delimited output"
    );

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = Vec::with_capacity(included.len());
        for (mapping, index) in included.iter().zip(&source_indices) {
            let raw = index
                .and_then(|index| row.get(index))
                .map(String::as_str)
                .unwrap_or("");
            let coerced = coerce(
                raw,
                mapping.source_type,
                &mapping.conversions,
                decimal_separator,
            );
            let transformed = match &mapping.transformation {
                Some(transformation) => apply_transformation(&coerced, transformation),
                None => coerced,
            };
            cells.push(render_cell(transformed, mapping.source_type));
        }
        rows.push(cells);
    }

    write_delimited(&headers, &rows, output_delimiter)
}

/// Boolean output rule: a boolean-typed cell that coerced to exactly
/// `"true"`/`"false"` is rendered as `"1"`/`"0"`; anything else, including
/// original-passthrough on coercion failure, is kept unchanged.
fn render_cell(value: String, source_type: ColumnType) -> String {
    if source_type == ColumnType::Boolean {
        match value.as_str() {
            "true" => return "1".to_string(),
            "false" => return "0".to_string(),
            _ => {}
        }
    }
    value
}
