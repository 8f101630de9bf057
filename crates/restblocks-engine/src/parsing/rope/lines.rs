use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 0-based line number.
    pub index: usize,
    /// Byte span of the line text, excluding the `\n` / `\r\n` terminator.
    pub span: Span,
    /// The line text without its terminator.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so the terminator length is known and offsets stay exact;
/// the terminator itself is stripped from `text` and `span`.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, raw)| {
        let start = offset;
        offset += raw.len();
        let text = raw.trim_end_matches(['\r', '\n']);
        LineRef {
            index,
            span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_terminators_and_tracks_offsets() {
        let rope = Rope::from("one\r\ntwo\n\nfour");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text, "one");
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[1].text, "two");
        assert_eq!(lines[1].span, Span::new(5, 8));
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[3].index, 3);
        assert_eq!(lines[3].span, Span::new(10, 14));
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }
}
