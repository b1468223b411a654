//! Field delimiter inference.

use remap_model::Delimiter;

/// Number of lines sampled from the top of the document.
const SAMPLE_LINES: usize = 10;

/// Infer the most likely field delimiter from raw text.
///
/// Counts candidate occurrences outside quoted spans across the first ten
/// lines and compares per-line averages. The tie-break order is fixed: tab
/// wins when its average is at least one and not below the others, then
/// semicolon against comma, then comma as the default. Tab and semicolon are
/// the stronger signals because a comma can appear inside prose.
pub fn detect_delimiter(text: &str) -> Delimiter {
    let mut commas = 0usize;
    let mut semicolons = 0usize;
    let mut tabs = 0usize;
    let mut sampled = 0usize;

    for line in text.lines().take(SAMPLE_LINES) {
        sampled += 1;
        let mut in_quotes = false;
        for ch in line.chars() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => commas += 1,
                ';' if !in_quotes => semicolons += 1,
                '\t' if !in_quotes => tabs += 1,
                _ => {}
            }
        }
    }

    if sampled == 0 {
        return Delimiter::Comma;
    }

    let average = |count: usize| count as f64 / sampled as f64;
    let comma = average(commas);
    let semicolon = average(semicolons);
    let tab = average(tabs);

    if tab >= 1.0 && tab >= semicolon && tab >= comma {
        Delimiter::Tab
    } else if semicolon >= 1.0 && semicolon >= comma {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
