//! Type coercion and second-stage transformations for cell values.

use remap_model::{ColumnType, DecimalSeparator, Transformation, ValueConversion};

use crate::date;

const TRUTHY: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSY: [&str; 5] = ["false", "f", "no", "n", "0"];

/// Coerce a raw cell value.
///
/// The conversion table is scanned first: a case-insensitive exact match
/// returns its target immediately and bypasses type coercion entirely. Type
/// coercion failure returns the original string unchanged; this function
/// never raises.
pub fn coerce(
    value: &str,
    source_type: ColumnType,
    conversions: &[ValueConversion],
    decimal_separator: DecimalSeparator,
) -> String {
    if let Some(target) = lookup_conversion(value, conversions) {
        return target.to_string();
    }

    match source_type {
        ColumnType::Boolean => coerce_boolean(value),
        ColumnType::Integer => match parse_number(value, decimal_separator) {
            Some(number) => format!("{}", number.round() as i64),
            None => value.to_string(),
        },
        ColumnType::Number => match parse_number(value, decimal_separator) {
            Some(number) => format!("{number}"),
            None => value.to_string(),
        },
        ColumnType::String | ColumnType::Unset => value.to_string(),
    }
}

fn lookup_conversion<'a>(value: &str, conversions: &'a [ValueConversion]) -> Option<&'a str> {
    let needle = value.to_lowercase();
    conversions
        .iter()
        .find(|conversion| conversion.source_value.to_lowercase() == needle)
        .map(|conversion| conversion.target_value.as_str())
}

fn coerce_boolean(value: &str) -> String {
    let lowered = value.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        "true".to_string()
    } else if FALSY.contains(&lowered.as_str()) {
        "false".to_string()
    } else {
        value.to_string()
    }
}

/// Parse a value as a number under the decimal-separator convention.
///
/// Under the EU convention every `.` (thousands) is stripped, then the first
/// `,` becomes the fractional point; under the US convention every `,` is
/// stripped. Parsing then takes the longest leading numeric prefix and
/// ignores the rest, so `"12abc"` becomes `12` rather than failing. That
/// leniency is inherited behavior, preserved for parity.
pub fn parse_number(value: &str, decimal_separator: DecimalSeparator) -> Option<f64> {
    let normalized = match decimal_separator {
        DecimalSeparator::Comma => value.replace('.', "").replacen(',', ".", 1),
        DecimalSeparator::Point => value.replace(',', ""),
    };
    parse_float_prefix(&normalized)
}

/// Longest-leading-prefix float parse: optional sign, digits with one
/// fractional point, optional well-formed exponent. No digits means `None`.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut digits = 0usize;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    // An exponent counts only when it is complete; "1e" parses as 1.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let mut exponent_digits = 0usize;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
            exponent_digits += 1;
        }
        if exponent_digits > 0 {
            end = cursor;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Apply a parsed second-stage transformation.
pub fn apply_transformation(value: &str, transformation: &Transformation) -> String {
    match transformation {
        Transformation::Uppercase => value.to_uppercase(),
        Transformation::Lowercase => value.to_lowercase(),
        Transformation::Trim => value.trim().to_string(),
        Transformation::DateAuto { target } => date::format_auto(value, target),
        Transformation::DateExplicit { source, target } => {
            date::transform_date(value, source, target)
        }
    }
}

/// String-spec form of [`apply_transformation`].
///
/// Empty and unrecognized specs pass the value through unchanged; rejection
/// of bad specs happens at import validation time, not here.
pub fn apply_transformation_spec(value: &str, spec: &str) -> String {
    match Transformation::parse_spec(spec) {
        Ok(Some(transformation)) => apply_transformation(value, &transformation),
        Ok(None) | Err(_) => value.to_string(),
    }
}
