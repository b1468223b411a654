//! Date parsing and formatting over a small token vocabulary.
//!
//! Formats use `yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`; any other character is a
//! literal. Auto-detection tries a fixed ordered candidate list with a
//! day-first bias (EU convention): an ambiguous `01-02-2024` is read as
//! 1 February once `yyyy-MM-dd` fails. Month-first input needs an explicit
//! source format.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Candidate formats for auto-detection, tried in order.
pub const AUTO_DETECT_FORMATS: [&str; 5] = [
    "yyyy-MM-dd",
    "dd/MM/yyyy",
    "dd-MM-yyyy",
    "dd.MM.yyyy",
    "yyyy/MM/dd",
];

/// Translate the token vocabulary into a chrono strftime string.
///
/// Unknown characters pass through as literals; a literal `%` is escaped so
/// chrono never sees a stray specifier.
fn to_strftime(format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 4);
    let mut rest = format;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("yyyy") {
            out.push_str("%Y");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str("%m");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("dd") {
            out.push_str("%d");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("HH") {
            out.push_str("%H");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("mm") {
            out.push_str("%M");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("ss") {
            out.push_str("%S");
            rest = tail;
        } else if let Some(ch) = rest.chars().next() {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn has_time_tokens(strftime: &str) -> bool {
    strftime.contains("%H") || strftime.contains("%M") || strftime.contains("%S")
}

/// Parse a value against an explicit format; failure is `None`, never a panic.
pub fn try_parse(value: &str, format: &str) -> Option<NaiveDateTime> {
    let strftime = to_strftime(format);
    if has_time_tokens(&strftime) {
        NaiveDateTime::parse_from_str(value, &strftime).ok()
    } else {
        NaiveDate::parse_from_str(value, &strftime)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }
}

/// Try the fixed candidate list, returning the first format that parses.
pub fn parse_auto(value: &str) -> Option<NaiveDateTime> {
    AUTO_DETECT_FORMATS
        .iter()
        .find_map(|format| try_parse(value, format))
}

/// Format a parsed date using the token vocabulary.
pub fn format_date(date: NaiveDateTime, format: &str) -> String {
    date.format(&to_strftime(format)).to_string()
}

/// Parse with an explicit source format and reformat.
///
/// Returns the empty string on parse failure; never the original value. This
/// asymmetry against the coercion engine's fallback-to-original policy is
/// intentional.
pub fn transform_date(value: &str, source_format: &str, target_format: &str) -> String {
    match try_parse(value, source_format) {
        Some(date) => format_date(date, target_format),
        None => String::new(),
    }
}

/// Auto-detect the source format and reformat; empty string on total failure.
pub fn format_auto(value: &str, target_format: &str) -> String {
    match parse_auto(value) {
        Some(date) => format_date(date, target_format),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_tokens() {
        assert_eq!(to_strftime("yyyy-MM-dd"), "%Y-%m-%d");
        assert_eq!(to_strftime("dd/MM/yyyy HH:mm:ss"), "%d/%m/%Y %H:%M:%S");
        assert_eq!(to_strftime("yyyy 100%"), "%Y 100%%");
    }

    #[test]
    fn parses_explicit_format() {
        let date = try_parse("15/01/2024", "dd/MM/yyyy").unwrap();
        assert_eq!(format_date(date, "yyyy-MM-dd"), "2024-01-15");
    }

    #[test]
    fn parse_failure_is_none() {
        assert!(try_parse("2024-13-40", "yyyy-MM-dd").is_none());
        assert!(try_parse("not a date", "yyyy-MM-dd").is_none());
        assert!(try_parse("2024-02-30", "yyyy-MM-dd").is_none());
    }

    #[test]
    fn auto_detect_prefers_iso() {
        let date = parse_auto("2024-01-15").unwrap();
        assert_eq!(format_date(date, "dd.MM.yyyy"), "15.01.2024");
    }

    #[test]
    fn auto_detect_is_day_first() {
        // Ambiguous: read under dd-MM-yyyy once yyyy-MM-dd fails.
        let date = parse_auto("01-02-2024").unwrap();
        assert_eq!(format_date(date, "yyyy-MM-dd"), "2024-02-01");
    }

    #[test]
    fn auto_detect_handles_each_candidate() {
        for value in [
            "2024-01-15",
            "15/01/2024",
            "15-01-2024",
            "15.01.2024",
            "2024/01/15",
        ] {
            let date = parse_auto(value).unwrap();
            assert_eq!(format_date(date, "yyyy-MM-dd"), "2024-01-15");
        }
    }

    #[test]
    fn transform_date_empty_on_failure() {
        assert_eq!(transform_date("garbage", "yyyy-MM-dd", "dd/MM/yyyy"), "");
        assert_eq!(
            transform_date("01/15/2024", "MM/dd/yyyy", "yyyy-MM-dd"),
            "2024-01-15"
        );
    }

    #[test]
    fn format_auto_empty_on_total_failure() {
        assert_eq!(format_auto("2024-13-40", "yyyy-MM-dd"), "");
        assert_eq!(format_auto("15/01/2024", "yyyy-MM-dd"), "2024-01-15");
    }

    #[test]
    fn time_tokens_round_trip() {
        let date = try_parse("2024-01-15 10:30:45", "yyyy-MM-dd HH:mm:ss").unwrap();
        assert_eq!(
            format_date(date, "dd/MM/yyyy HH:mm"),
            "15/01/2024 10:30"
        );
    }
}
