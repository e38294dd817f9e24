//! Export codecs: board → CSV or JSON text plus a derived filename.
//!
//! Both codecs are pure functions of (board, theme). Triggering the actual
//! browser save lives in [`crate::util::download`].

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::state::board::PropertyGroup;

/// Filename stem used when no theme is set.
pub const FALLBACK_STEM: &str = "monopoly_board";

/// MIME types for the two export formats.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const JSON_MIME: &str = "application/json";

const FILE_SUFFIX: &str = "_monopoly_board";
const CSV_HEADER: &str = "Group Name,Property Name,Group Color";

/// Derive the CSV download filename from the theme.
#[must_use]
pub fn csv_filename(theme: &str) -> String {
    format!("{}{FILE_SUFFIX}.csv", sanitize_stem(theme))
}

/// Derive the JSON download filename from the theme.
#[must_use]
pub fn json_filename(theme: &str) -> String {
    format!("{}{FILE_SUFFIX}.json", sanitize_stem(theme))
}

// Whitespace runs collapse to a single underscore, wherever they appear.
fn sanitize_stem(theme: &str) -> String {
    let source = if theme.is_empty() { FALLBACK_STEM } else { theme };
    let mut stem = String::with_capacity(source.len());
    let mut in_whitespace = false;
    for ch in source.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(ch);
            in_whitespace = false;
        }
    }
    stem
}

/// Serialize the board as CSV: a fixed header plus one CRLF-terminated row
/// per property. Every field is double-quoted, with embedded quotes
/// doubled. Groups without properties contribute no rows.
#[must_use]
pub fn to_csv(board: &[PropertyGroup]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");
    for group in board {
        for property in &group.properties {
            out.push_str(&quote(&group.name));
            out.push(',');
            out.push_str(&quote(&property.name));
            out.push(',');
            out.push_str(&quote(&group.color));
            out.push_str("\r\n");
        }
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Serialize the board as pretty-printed JSON (2-space indentation): an
/// array of group objects with `id`, `name`, `color`, and `properties`.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
pub fn to_json(board: &[PropertyGroup]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}
