//! Line table and cursor consumed by the block recognizers.
//!
//! The cursor is an index into a borrowed slice of [`SourceLine`]s. It is
//! `Copy`, so a recognizer can explore ahead on a scratch copy and write the
//! copy back only when it matches; a declining recognizer leaves the
//! caller's cursor exactly where it was.

use xi_rope::Rope;

use super::rope::{Span, lines_with_spans};

/// Tab stops are every 8 columns, as in reStructuredText.
pub const TAB_WIDTH: usize = 8;

/// One line of source text as seen by the recognizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line text with tabs expanded and the terminator stripped.
    pub content: String,
    /// Absolute 0-based line index in the document.
    pub line: usize,
    /// Byte span of the original line text in the rope.
    pub span: Span,
    /// Whether the line holds only whitespace.
    pub is_blank: bool,
}

impl SourceLine {
    pub fn new(line: usize, content: &str, span: Span) -> Self {
        let content = expand_tabs(content);
        let is_blank = content.trim().is_empty();
        Self {
            content,
            line,
            span,
            is_blank,
        }
    }

    /// Builds the line table for a whole document.
    pub fn table_from_rope(rope: &Rope) -> Vec<SourceLine> {
        lines_with_spans(rope)
            .map(|lr| SourceLine::new(lr.index, &lr.text, lr.span))
            .collect()
    }

    /// Number of leading spaces.
    pub fn indent(&self) -> usize {
        self.content.chars().take_while(|c| *c == ' ').count()
    }

    /// True when the first character is not whitespace.
    pub fn starts_flush(&self) -> bool {
        self.content.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    /// Copy of this line with the first `columns` characters removed.
    pub fn dedented(&self, columns: usize) -> SourceLine {
        let content: String = self.content.chars().skip(columns).collect();
        SourceLine {
            is_blank: content.trim().is_empty(),
            content,
            line: self.line,
            span: self.span,
        }
    }
}

fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + TAB_WIDTH);
    let mut column = 0usize;
    for c in text.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

/// Position within a line table.
#[derive(Debug, Clone, Copy)]
pub struct SourceCursor<'a> {
    lines: &'a [SourceLine],
    pos: usize,
}

impl<'a> SourceCursor<'a> {
    pub fn new(lines: &'a [SourceLine]) -> Self {
        Self { lines, pos: 0 }
    }

    /// Index into the line table (not the absolute document line).
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn current_line(&self) -> Option<&'a SourceLine> {
        self.lines.get(self.pos)
    }

    /// 1-indexed lookahead: `peek(1)` is the line after the current one.
    pub fn peek(&self, n: usize) -> Option<&'a SourceLine> {
        self.lines.get(self.pos + n)
    }

    /// Moves forward `n` lines, stopping at the end of the table.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }
}
