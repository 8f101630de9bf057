use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span, truncating to `max` characters with a "..."
/// suffix if needed.
///
/// Counts characters rather than bytes so titles in non-Latin scripts are
/// never cut inside a code point.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    truncate(&slice_to_string(rope, sp), max)
}

/// Same truncation as [`preview`], for text already out of the rope.
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
