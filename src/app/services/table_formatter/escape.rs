//! LaTeX escaping for individual cells
//!
//! Missing values collapse to a single marker; everything else has LaTeX
//! special characters replaced. Replacement happens in one pass over the
//! characters, so inserted text (e.g. the braces of `\textbackslash{}`) is
//! never escaped a second time.

use std::fmt::Display;

use crate::constants::{
    LATEX_REPLACEMENTS, MISSING_VALUE_MARKER, MISSING_VALUE_SENTINELS, PRESERVED_SLASH,
};

/// Check if a raw value represents missing data
pub fn is_missing_value(value: &str) -> bool {
    MISSING_VALUE_SENTINELS.contains(&value.trim())
}

/// Escape a raw field value for use inside a LaTeX table cell
pub fn escape(value: impl Display) -> String {
    let value = value.to_string();

    if is_missing_value(&value) {
        return MISSING_VALUE_MARKER.to_string();
    }

    if value.trim() == PRESERVED_SLASH {
        return PRESERVED_SLASH.to_string();
    }

    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match replacement_for(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    escaped
}

/// Escape every field of a row
pub fn escape_row<S: AsRef<str>>(row: &[S]) -> Vec<String> {
    row.iter().map(|cell| escape(cell.as_ref())).collect()
}

fn replacement_for(ch: char) -> Option<&'static str> {
    LATEX_REPLACEMENTS
        .iter()
        .find(|(special, _)| *special == ch)
        .map(|(_, replacement)| *replacement)
}
