/// Adornment lines: one punctuation character repeated from column 0,
/// optionally followed by trailing whitespace (`====`, `----`, `~~~~~~`).
///
/// Used both as transitions and as section title over/underlines.
pub struct Adornment;

impl Adornment {
    /// Opening marker of a literal block; never an adornment where titles
    /// are disallowed.
    pub const LITERAL_MARKER: &'static str = "::";

    /// Shortest adornment accepted as a transition on its own.
    pub const DEFAULT_MIN_LENGTH: usize = 4;

    /// Returns the marker text (trailing whitespace trimmed) if `line` is an
    /// adornment line.
    pub fn marker(line: &str) -> Option<&str> {
        let trimmed = line.trim_end();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if !first.is_ascii_punctuation() {
            return None;
        }
        chars.all(|c| c == first).then_some(trimmed)
    }

    pub fn is_adornment(line: &str) -> bool {
        Self::marker(line).is_some()
    }

    /// The repeated character of a marker returned by [`Adornment::marker`].
    pub fn style(marker: &str) -> Option<char> {
        marker.chars().next()
    }
}
