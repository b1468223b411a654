//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;

use remap_config::{export, import_document, select_config};
use remap_ingest::{decode_path, detect_delimiter, parse};
use remap_model::{ColumnMapping, DecimalSeparator, Delimiter, ParsedTable};
use remap_output::generate;

use crate::cli::{ConvertArgs, ExamplesArgs, InspectArgs, TemplateArgs};
use crate::registry::{load_example, load_registry};

/// Apply a mapping document to an input file.
pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let decoded = decode_path(&args.input)?;
    tracing::info!(
        path = %args.input.display(),
        encoding = decoded.encoding.label(),
        "decoded input"
    );

    let document = fs::read_to_string(&args.mapping)
        .with_context(|| format!("failed to read mapping document {}", args.mapping.display()))?;
    let config_value = select_config(&document, args.schema.as_deref())?;

    // Parse with the flag override or detection first. When the validated
    // document declares a different input delimiter, re-parse with it and
    // re-validate against the headers that delimiter produces.
    let override_delimiter = args.delimiter.to_delimiter();
    let mut delimiter =
        override_delimiter.unwrap_or_else(|| detect_delimiter(&decoded.text));
    let mut table = parse(&decoded.text, delimiter);
    let mut outcome = import_document(&config_value, &table.headers)?;
    if override_delimiter.is_none() && outcome.config.input_delimiter != delimiter {
        delimiter = outcome.config.input_delimiter;
        tracing::info!(
            delimiter = delimiter_name(delimiter),
            "re-parsing with the document's input delimiter"
        );
        table = parse(&decoded.text, delimiter);
        outcome = import_document(&config_value, &table.headers)?;
    }
    tracing::info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "mapping document applied"
    );

    let output = generate(
        &table,
        &outcome.mappings,
        outcome.config.decimal_separator,
        outcome.config.output_delimiter,
    )?;
    write_output(args.output.as_deref(), &output)
}

/// Show the detected encoding, delimiter, and a data preview.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let decoded = decode_path(&args.input)?;
    let delimiter = args
        .delimiter
        .to_delimiter()
        .unwrap_or_else(|| detect_delimiter(&decoded.text));
    let table = parse(&decoded.text, delimiter);

    println!("File:      {}", args.input.display());
    println!("Encoding:  {}", decoded.encoding.label());
    println!("Delimiter: {}", delimiter_name(delimiter));
    println!("Columns:   {}", table.headers.len());
    println!("Rows:      {}", table.rows.len());
    if table.is_empty() {
        return Ok(());
    }
    println!();
    println!("{}", preview_table(&table, args.rows));
    Ok(())
}

/// Emit an identity mapping document for an input file.
pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let decoded = decode_path(&args.input)?;
    let delimiter = args
        .delimiter
        .to_delimiter()
        .unwrap_or_else(|| detect_delimiter(&decoded.text));
    let table = parse(&decoded.text, delimiter);

    let mappings: Vec<ColumnMapping> = table
        .headers
        .iter()
        .map(|header| ColumnMapping::identity(header))
        .collect();
    let config = export(&mappings, delimiter, delimiter, DecimalSeparator::Point);
    let json = config.to_json_pretty()?;
    write_output(args.output.as_deref(), &json)
}

/// List registered example datasets, or show one of them.
pub fn run_examples(args: &ExamplesArgs) -> Result<()> {
    let entries = load_registry(&args.registry)?;
    let base_dir = args.registry.parent().unwrap_or(Path::new("."));

    if let Some(id) = &args.show {
        let entry = entries
            .iter()
            .find(|entry| &entry.id == id)
            .with_context(|| format!("no example with id {id}"))?;
        let pair = load_example(entry, base_dir)?;
        let delimiter = detect_delimiter(&pair.csv);
        let table = parse(&pair.csv, delimiter);
        println!("{} - {}", entry.name, entry.description);
        println!();
        println!("{}", preview_table(&table, 5));
        println!();
        println!("{}", pair.mapping);
        return Ok(());
    }

    let mut list = Table::new();
    list.load_preset(UTF8_FULL_CONDENSED)
        .set_header(["id", "name", "description"]);
    for entry in &entries {
        list.add_row([&entry.id, &entry.name, &entry.description]);
    }
    println!("{list}");
    Ok(())
}

fn preview_table(table: &ParsedTable, rows: usize) -> Table {
    let mut preview = Table::new();
    preview
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(&table.headers);
    for row in table.rows.iter().take(rows) {
        preview.add_row(row);
    }
    preview
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "output written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn delimiter_name(delimiter: Delimiter) -> &'static str {
    match delimiter {
        Delimiter::Comma => "comma",
        Delimiter::Semicolon => "semicolon",
        Delimiter::Tab => "tab",
    }
}
