//! Enumerated list recognition.
//!
//! The first bullet seeds the list's format and numbering type; every later
//! item must repeat the format and, unless it is an auto-numbered `#`
//! bullet, continue the sequence by exactly one. An explicit bullet may not
//! follow an auto-numbered one.

use crate::parsing::{
    blocks::context::{BlockRecognizer, ItemBody, Outcome, ParseContext},
    cursor::{SourceCursor, SourceLine},
    elements::{ElementList, LineRange, ListElement, ListItemElement},
};

use super::enumerator::{BulletFormat, Enumerator, NumberingType, classify};

pub struct EnumListRecognizer;

impl EnumListRecognizer {
    /// Collects the body of the item whose marker line is the cursor's
    /// current line. Returns the body and the number of lines it spans,
    /// counting the marker line and stopping at the last non-blank body line.
    ///
    /// Continuation lines must be indented at least to the column where the
    /// bullet ends; they are dedented by their common indentation.
    fn extract_body(cursor: &SourceCursor<'_>, bullet_end: usize) -> (ItemBody, usize) {
        let Some(marker) = cursor.current_line() else {
            return (ItemBody::default(), 0);
        };

        let mut block = Vec::new();
        let mut span = 1;
        let mut n = 1;
        while let Some(next) = cursor.peek(n) {
            if !next.is_blank {
                if next.indent() < bullet_end {
                    break;
                }
                span = n + 1;
            }
            n += 1;
        }
        for i in 1..span {
            if let Some(line) = cursor.peek(i) {
                block.push(line);
            }
        }

        let mut lines = Vec::with_capacity(block.len() + 1);
        let trailing: String = marker.content.chars().skip(bullet_end).collect();
        let inline = trailing.trim_start();
        if !inline.trim_end().is_empty() {
            lines.push(SourceLine::new(marker.line, inline, marker.span));
        }

        let common = block
            .iter()
            .filter(|l| !l.is_blank)
            .map(|l| l.indent())
            .min()
            .unwrap_or(0);
        lines.extend(block.into_iter().map(|l| l.dedented(common)));

        (ItemBody { lines }, span)
    }

    /// Rejects a lone bullet line directly followed by flush-left prose:
    /// `1. Not a list` / `Just more text` is a sentence, not a list.
    fn looks_like_prose(cursor: &SourceCursor<'_>, expected: NumberingType) -> bool {
        cursor.peek(1).is_some_and(|next| {
            !next.is_blank
                && next.starts_flush()
                && classify(&next.content, Some(expected)).is_none()
        })
    }
}

struct Continuation {
    format: BulletFormat,
    numbering: NumberingType,
    last_was_auto: bool,
    last_ordinal: Option<u32>,
}

impl Continuation {
    fn seed(seed: &Enumerator) -> Self {
        Self {
            format: seed.format,
            numbering: seed.numbering.continuation(),
            last_was_auto: seed.numbering == NumberingType::Auto,
            last_ordinal: None,
        }
    }

    fn accepts(&self, e: &Enumerator) -> bool {
        if e.format != self.format {
            return false;
        }
        if e.numbering == NumberingType::Auto {
            return true;
        }
        let out_of_sequence = self
            .last_ordinal
            .is_some_and(|last| last.checked_add(1) != Some(e.ordinal));
        e.numbering == self.numbering && !self.last_was_auto && !out_of_sequence
    }

    fn record(&mut self, e: &Enumerator) {
        self.last_was_auto = e.numbering == NumberingType::Auto;
        self.last_ordinal = Some(e.ordinal);
    }
}

impl BlockRecognizer for EnumListRecognizer {
    fn name(&self) -> &'static str {
        "enum_list"
    }

    fn recognize(
        &self,
        cursor: &mut SourceCursor<'_>,
        ctx: &mut dyn ParseContext,
        out: &mut ElementList,
    ) -> Outcome {
        let Some(first) = cursor.current_line() else {
            return Outcome::Declined;
        };
        let Some(seed) = classify(&first.content, None) else {
            return Outcome::Declined;
        };
        let mut state = Continuation::seed(&seed);

        if Self::looks_like_prose(cursor, state.numbering) {
            log::trace!("line {}: lone bullet followed by prose", first.line);
            return Outcome::Declined;
        }

        let mut scratch = *cursor;
        let mut list: Option<ListElement> = None;
        loop {
            // Blank lines between items are only consumed if another item follows.
            let mut probe = scratch;
            while probe.current_line().is_some_and(|l| l.is_blank) {
                probe.advance(1);
            }
            let Some(line) = probe.current_line() else {
                break;
            };
            let Some(e) = classify(&line.content, Some(state.numbering)) else {
                break;
            };
            if !state.accepts(&e) {
                log::trace!("line {}: bullet does not continue the list", line.line);
                break;
            }

            scratch = probe;
            let (body, span) = Self::extract_body(&scratch, e.consumed_width);
            let end = body.last_line().unwrap_or(line.line).max(line.line);
            let item = ListItemElement::new(LineRange::new(line.line, end), e.numbering, e.ordinal);
            ctx.on_list_item_body(body, &item);
            scratch.advance(span);

            match list.as_mut() {
                Some(list) => list.push(item),
                None => list = Some(ListElement::new(state.format, seed.numbering, item)),
            }
            state.record(&e);
        }

        let Some(list) = list else {
            return Outcome::Declined;
        };
        log::debug!(
            "lines {}: enumerated list of {} {} items",
            list.line_range(),
            list.items().len(),
            list.numbering().as_str()
        );
        out.push(list);
        *cursor = scratch;
        Outcome::Matched
    }
}
