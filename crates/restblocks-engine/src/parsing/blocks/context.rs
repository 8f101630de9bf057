use crate::parsing::{
    cursor::{SourceCursor, SourceLine},
    elements::{ElementList, ListItemElement},
};

use super::kinds::Adornment;

/// Result of offering the current line to a recognizer.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Element appended, cursor advanced past the consumed lines.
    Matched,
    /// Cursor untouched; the dispatcher tries the next recognizer.
    Declined,
}

/// What a recognizer knows about where it is running.
pub trait ParseContext {
    /// False where a section title is structurally forbidden (inside list
    /// items and other nested bodies).
    fn allow_titles(&self) -> bool;

    fn min_marker_length(&self) -> usize {
        Adornment::DEFAULT_MIN_LENGTH
    }

    /// Receives the lines of an accepted list item's body.
    fn on_list_item_body(&mut self, body: ItemBody, item: &ListItemElement);
}

/// Dedented body lines of one list item.
///
/// Lines keep their absolute document line numbers. When the marker line
/// carries text after the bullet, that text is the first body line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemBody {
    pub lines: Vec<SourceLine>,
}

impl ItemBody {
    /// Absolute line number of the last non-blank body line.
    pub fn last_line(&self) -> Option<usize> {
        self.lines.iter().rev().find(|l| !l.is_blank).map(|l| l.line)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_blank)
    }
}

/// A candidate block recognizer.
///
/// On `Matched` the recognizer has appended exactly one element to `out`
/// and advanced `cursor`; on `Declined` it has touched neither.
pub trait BlockRecognizer {
    fn name(&self) -> &'static str;

    fn recognize(
        &self,
        cursor: &mut SourceCursor<'_>,
        ctx: &mut dyn ParseContext,
        out: &mut ElementList,
    ) -> Outcome;
}
