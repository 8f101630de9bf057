use unicode_width::UnicodeWidthChar;

/// Display width of `text` in terminal columns.
///
/// East Asian wide and fullwidth characters count as two columns, combining
/// marks as zero. Control characters have no defined width and count as zero.
pub fn width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("Title", 5)]
    #[case("日本語", 6)]
    #[case("Ｔｉｔｌｅ", 10)]
    #[case("e\u{301}", 1)]
    #[case("tab\there", 7)]
    fn measures_display_columns(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(width(text), expected);
    }
}
