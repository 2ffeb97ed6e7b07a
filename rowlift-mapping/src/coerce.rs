//! Cell-value coercion
//!
//! Converts one raw cell into the literal strings it contributes to the
//! graph. Absence yields nothing; multi-valued text splits on the
//! field's separator.

use rowlift_tabular::Value;

/// Coerce a raw cell value into zero, one, or many literal strings.
///
/// - `None` (absent/null) produces an empty sequence.
/// - Multi-valued text splits on `separator`, trims each piece, and
///   drops pieces that are empty after trimming, preserving order.
/// - Non-textual values are never split; splitting is only defined over
///   text.
pub fn coerce(raw: Option<&Value>, is_multi: bool, separator: &str) -> Vec<String> {
    let Some(value) = raw else {
        return Vec::new();
    };

    if is_multi {
        if let Some(text) = value.as_text() {
            return text
                .split(separator)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    vec![value.to_string()]
}
