//! Numeric extraction from display strings

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Maximal digit run, thousands separators permitted inside the run
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid pattern"));

/// Extract every maximal digit run from `text`, left to right, as numbers
/// with thousands separators stripped.
///
/// A range string yields two entries ("8,000 - 15,000" -> [8000, 15000]),
/// a rate string yields one ("92%" -> [92]), anything without digits yields
/// an empty buffer.
pub fn digit_runs(text: &str) -> SmallVec<[f64; 2]> {
    DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .collect()
}

/// Midpoint of a textual numeric range.
///
/// Averages the first and last numbers found in the string, so a "low - high"
/// range resolves to its midpoint even with stray numbers in between. A
/// single number is its own midpoint; no digits degrade to `0.0` (the dataset
/// is trusted static content, malformed entries are not an error).
pub fn range_midpoint(text: &str) -> f64 {
    let runs = digit_runs(text);
    match runs.as_slice() {
        [] => 0.0,
        [only] => *only,
        [first, .., last] => (first + last) / 2.0,
    }
}

/// Leading integer of a percentage-bearing string ("92%" -> 92).
///
/// Non-digit suffixes are ignored; no digits degrade to `0`.
pub fn leading_percent(text: &str) -> i32 {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .map(|v| v as i32)
        .unwrap_or(0)
}
