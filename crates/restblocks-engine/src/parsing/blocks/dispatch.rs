use crate::parsing::{
    ParseOptions,
    cursor::{SourceCursor, SourceLine},
    elements::{ElementList, LineRange, ListItemElement, ParagraphElement},
};

use super::{
    context::{BlockRecognizer, ItemBody, Outcome, ParseContext},
    kinds::{EnumListRecognizer, LineMarkerRecognizer, ParagraphFallback},
};

/// Candidate recognizers in the order each line position is offered to them.
/// The paragraph fallback claims whatever the others decline.
const RECOGNIZERS: [&dyn BlockRecognizer; 3] =
    [&LineMarkerRecognizer, &EnumListRecognizer, &ParagraphFallback];

/// Elements parsed from one list item's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemBody {
    /// Range of the owning list item.
    pub item: LineRange,
    /// 0 for items of a top-level list, 1 for lists inside those items, ...
    pub depth: usize,
    /// Dedented body lines the elements were parsed from.
    pub lines: Vec<SourceLine>,
    pub elements: ElementList,
}

/// Drives the recognizers over a line table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockDispatcher {
    options: ParseOptions,
}

impl BlockDispatcher {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses `lines` into a flat element list.
    ///
    /// List item bodies are parsed recursively with titles disallowed and
    /// recorded in `bodies`; a nested item's body is recorded before the body
    /// of the item containing it. Bodies at `max_nesting_depth` are not parsed
    /// further and become a single paragraph.
    pub fn parse_lines(
        &self,
        lines: &[SourceLine],
        allow_titles: bool,
        bodies: &mut Vec<ListItemBody>,
    ) -> ElementList {
        self.parse_at_depth(lines, allow_titles, 0, bodies)
    }

    fn parse_at_depth(
        &self,
        lines: &[SourceLine],
        allow_titles: bool,
        depth: usize,
        bodies: &mut Vec<ListItemBody>,
    ) -> ElementList {
        let mut ctx = DispatchContext {
            dispatcher: self,
            allow_titles,
            depth,
            bodies,
        };
        let mut cursor = SourceCursor::new(lines);
        let mut out = ElementList::new();

        'lines: while let Some(line) = cursor.current_line() {
            if line.is_blank {
                cursor.advance(1);
                continue;
            }
            log::trace!("dispatching line {}: {}", line.line, line.content);

            for recognizer in RECOGNIZERS {
                if recognizer.recognize(&mut cursor, &mut ctx, &mut out) == Outcome::Matched {
                    continue 'lines;
                }
                log::trace!("{} declined line {}", recognizer.name(), line.line);
            }
            // Unreachable while the paragraph fallback is last; never stall.
            cursor.advance(1);
        }

        out
    }
}

struct DispatchContext<'d, 'b> {
    dispatcher: &'d BlockDispatcher,
    allow_titles: bool,
    depth: usize,
    bodies: &'b mut Vec<ListItemBody>,
}

impl ParseContext for DispatchContext<'_, '_> {
    fn allow_titles(&self) -> bool {
        self.allow_titles
    }

    fn min_marker_length(&self) -> usize {
        self.dispatcher.options.min_marker_length
    }

    fn on_list_item_body(&mut self, body: ItemBody, item: &ListItemElement) {
        let elements = if self.depth + 1 < self.dispatcher.options.max_nesting_depth {
            self.dispatcher
                .parse_at_depth(&body.lines, false, self.depth + 1, self.bodies)
        } else {
            log::debug!(
                "item at line {} is nested {} deep; keeping its body as text",
                item.line_range().start(),
                self.depth + 1
            );
            flatten(&body)
        };
        self.bodies.push(ListItemBody {
            item: item.line_range(),
            depth: self.depth,
            lines: body.lines,
            elements,
        });
    }
}

/// The whole body as one paragraph, or nothing for a body with no text.
fn flatten(body: &ItemBody) -> ElementList {
    let mut out = ElementList::new();
    if body.is_empty() {
        return out;
    }
    let first = body.lines.iter().find(|l| !l.is_blank).map(|l| l.line);
    if let (Some(start), Some(end)) = (first, body.last_line()) {
        out.push(ParagraphElement::new(LineRange::new(start, end)));
    }
    out
}
