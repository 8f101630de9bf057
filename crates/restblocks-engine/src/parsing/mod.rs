pub mod blocks;
pub mod cursor;
pub mod elements;
pub mod rope;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockDispatcher, ListItemBody, kinds::Adornment};
use cursor::SourceLine;
use elements::{Element, ElementList, LineRange};

/// Knobs for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Shortest adornment run treated as a transition or a short title marker.
    pub min_marker_length: usize,
    /// Whether titles may appear at the top level of the document.
    pub allow_titles: bool,
    /// Deepest list nesting parsed; item bodies at this depth are kept as a
    /// single paragraph.
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 100;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_marker_length: Adornment::DEFAULT_MIN_LENGTH,
            allow_titles: true,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

#[derive(Debug)]
pub struct ParsedDoc {
    /// Top-level elements in source order.
    pub elements: ElementList,
    /// Parsed bodies of every list item at any depth, innermost first.
    pub item_bodies: Vec<ListItemBody>,
}

impl ParsedDoc {
    /// Top-level elements whose line range covers `line`.
    pub fn elements_at(&self, line: usize) -> impl Iterator<Item = &Element> + '_ {
        self.elements.containing(line)
    }

    /// The recorded body of the list item spanning exactly `item` at `depth`.
    pub fn item_body(&self, item: LineRange, depth: usize) -> Option<&ListItemBody> {
        self.item_bodies
            .iter()
            .find(|b| b.item == item && b.depth == depth)
    }

    /// Elements of the body of the list item spanning exactly `item` at `depth`.
    pub fn body_of(&self, item: LineRange, depth: usize) -> Option<&ElementList> {
        self.item_body(item, depth).map(|b| &b.elements)
    }
}

pub fn parse_document(rope: &Rope, options: &ParseOptions) -> ParsedDoc {
    let lines = SourceLine::table_from_rope(rope);
    let mut item_bodies = Vec::new();
    let elements =
        BlockDispatcher::new(*options).parse_lines(&lines, options.allow_titles, &mut item_bodies);

    log::debug!(
        "parsed {} lines into {} elements ({} list item bodies)",
        lines.len(),
        elements.len(),
        item_bodies.len()
    );
    ParsedDoc {
        elements,
        item_bodies,
    }
}

/// Convenience: parse a string with default options.
pub fn parse_str(text: &str) -> ParsedDoc {
    parse_document(&Rope::from(text), &ParseOptions::default())
}
