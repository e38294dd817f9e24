//! CSS color validation for the group color editor.
//!
//! The board store deliberately accepts any string as a color; this check
//! runs at the display layer so an invalid edit reverts the input instead
//! of reaching the store.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Accept `#RGB`/`#RRGGBB` hex values, bare color keywords, and
/// `rgb()`/`rgba()`/`hsl()`/`hsla()` function notation.
#[must_use]
pub fn is_valid_css_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
        return true;
    }
    ["rgb", "rgba", "hsl", "hsla"]
        .iter()
        .any(|name| is_color_function(value, name))
}

// Case-insensitive `name(args)` with a non-empty argument list.
fn is_color_function(value: &str, name: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|args| !args.is_empty())
}
