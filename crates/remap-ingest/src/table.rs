//! Delimited text parsing and serialization.

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use remap_model::{Delimiter, ParsedTable};

use crate::error::{IngestError, Result};

/// Parse delimited text into a header row plus data rows.
///
/// Empty or whitespace-only input yields an empty table. Quoting follows
/// RFC 4180 (`"` encloses a field that may contain the delimiter or
/// newlines, `""` is a literal quote), but malformed quoting is tolerated
/// rather than raised: this parser favors permissiveness because hand-edited
/// CSVs are common input. Ragged rows are kept as-is; downstream access
/// through [`ParsedTable::cell`] yields `""` out of range.
pub fn parse(text: &str, delimiter: Delimiter) -> ParsedTable {
    if text.trim().is_empty() {
        return ParsedTable::default();
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut first = true;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                // Unreachable for in-memory UTF-8 input with flexible
                // readers, but the contract is total either way.
                tracing::debug!(%error, "skipping unreadable record");
                continue;
            }
        };
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if first {
            headers = fields;
            first = false;
        } else {
            rows.push(fields);
        }
    }

    ParsedTable::new(headers, rows)
}

/// Serialize a table with every field quoted.
///
/// Internal quotes are doubled, records newline-joined, and no trailing
/// newline is appended. Unconditional quoting is a deliberate simplification;
/// [`write_delimited`] is the leaner variant used for final output.
pub fn stringify(headers: &[String], rows: &[Vec<String>], delimiter: Delimiter) -> Result<String> {
    write_records(headers, rows, delimiter, QuoteStyle::Always)
}

/// Serialize a table quoting only fields that need it.
///
/// A field is quoted when it contains the active delimiter, a quote
/// character or a record terminator; quotes are doubled inside quoted
/// fields.
pub fn write_delimited(
    headers: &[String],
    rows: &[Vec<String>],
    delimiter: Delimiter,
) -> Result<String> {
    write_records(headers, rows, delimiter, QuoteStyle::Necessary)
}

fn write_records(
    headers: &[String],
    rows: &[Vec<String>],
    delimiter: Delimiter,
    quote_style: QuoteStyle,
) -> Result<String> {
    if headers.is_empty() && rows.is_empty() {
        return Ok(String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(write_record(headers, delimiter, quote_style)?);
    for row in rows {
        lines.push(write_record(row, delimiter, quote_style)?);
    }
    Ok(lines.join("\n"))
}

fn write_record(fields: &[String], delimiter: Delimiter, quote_style: QuoteStyle) -> Result<String> {
    // Under quote-when-needed a record of one empty field must serialize as
    // a bare empty line; the csv writer would quote it to keep it apart
    // from an empty record. Unconditional quoting keeps the explicit form.
    if matches!(quote_style, QuoteStyle::Necessary)
        && fields.len() <= 1
        && fields.iter().all(String::is_empty)
    {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // The csv writer rejects zero-field records; an all-empty record keeps
    // the row count intact.
    let result = if fields.is_empty() {
        writer.write_record([""])
    } else {
        writer.write_record(fields)
    };
    result.map_err(|error| IngestError::Serialize {
        message: error.to_string(),
    })?;

    let bytes = writer.into_inner().map_err(|error| IngestError::Serialize {
        message: error.to_string(),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|error| IngestError::Serialize {
        message: error.to_string(),
    })?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_headers_and_rows() {
        let table = parse("name,age\nAlice,34\nBob,27", Delimiter::Comma);
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Alice", "34"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(parse("", Delimiter::Comma).is_empty());
        assert!(parse("   \n  ", Delimiter::Comma).is_empty());
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_newlines() {
        let table = parse("a,b\n\"x,y\",\"line1\nline2\"", Delimiter::Comma);
        assert_eq!(table.rows[0][0], "x,y");
        assert_eq!(table.rows[0][1], "line1\nline2");
    }

    #[test]
    fn doubled_quotes_become_literal() {
        let table = parse("a\n\"say \"\"hi\"\"\"", Delimiter::Comma);
        assert_eq!(table.rows[0][0], "say \"hi\"");
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let table = parse("a,b,c\n1,2", Delimiter::Comma);
        assert_eq!(table.rows[0], vec!["1", "2"]);
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn stringify_quotes_every_field() {
        let text = stringify(
            &strings(&["a", "b"]),
            &[strings(&["1", "x;y"])],
            Delimiter::Semicolon,
        )
        .unwrap();
        assert_eq!(text, "\"a\";\"b\"\n\"1\";\"x;y\"");
    }

    #[test]
    fn stringify_doubles_internal_quotes() {
        let text = stringify(&strings(&["q"]), &[strings(&["say \"hi\""])], Delimiter::Comma)
            .unwrap();
        assert_eq!(text, "\"q\"\n\"say \"\"hi\"\"\"");
    }

    #[test]
    fn stringify_has_no_trailing_newline() {
        let text = stringify(&strings(&["a"]), &[strings(&["1"])], Delimiter::Comma).unwrap();
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn write_delimited_quotes_only_when_needed() {
        let text = write_delimited(
            &strings(&["plain", "with;delim", "with\"quote"]),
            &[],
            Delimiter::Semicolon,
        )
        .unwrap();
        assert_eq!(text, "plain;\"with;delim\";\"with\"\"quote\"");
    }

    #[test]
    fn lone_empty_field_serializes_as_empty_line() {
        let text = write_delimited(
            &strings(&["only"]),
            &[strings(&[""]), strings(&["x"])],
            Delimiter::Comma,
        )
        .unwrap();
        assert_eq!(text, "only\n\nx");
        // The always-quote serializer keeps the explicit empty-field form.
        let always = stringify(&strings(&["only"]), &[strings(&[""])], Delimiter::Comma).unwrap();
        assert_eq!(always, "\"only\"\n\"\"");
    }

    #[test]
    fn round_trip_with_embedded_delimiters_and_quotes() {
        let headers = strings(&["name", "note"]);
        let rows = vec![
            strings(&["Alice", "likes; semicolons"]),
            strings(&["Bob", "says \"hi\""]),
        ];
        let text = stringify(&headers, &rows, Delimiter::Semicolon).unwrap();
        let table = parse(&text, Delimiter::Semicolon);
        assert_eq!(table.headers, headers);
        assert_eq!(table.rows, rows);
    }
}
