//! Disambiguates adornment lines: transition, overlined title, or neither.
//!
//! A title looks like a transition until the third line is seen, so the
//! decision needs up to three lines of lookahead:
//!
//! ```text
//! =====        <- overline (current line)
//! Title        <- title text
//! =====        <- underline, identical to the overline
//! ```
//!
//! Any shape short of that falls back to the length-gated rule: markers
//! shorter than the minimum are not markers at all, longer ones are
//! transitions.

use crate::parsing::{
    blocks::context::{BlockRecognizer, Outcome, ParseContext},
    cursor::SourceCursor,
    elements::{ElementList, LineRange, TitleElement, TransitionElement},
    text::width,
};

use super::adornment::Adornment;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Decision<'a> {
    Fallback,
    Transition,
    Title { style: char, title: &'a str },
}

pub struct LineMarkerRecognizer;

impl LineMarkerRecognizer {
    fn length_gated(marker: &str, min_len: usize) -> Decision<'static> {
        if marker.chars().count() < min_len {
            Decision::Fallback
        } else {
            Decision::Transition
        }
    }

    fn decide<'a>(
        cursor: &SourceCursor<'a>,
        marker: &str,
        allow_titles: bool,
        min_len: usize,
    ) -> Decision<'a> {
        if !allow_titles {
            if marker == Adornment::LITERAL_MARKER {
                return Decision::Fallback;
            }
            return Self::length_gated(marker, min_len);
        }

        let Some(text_line) = cursor.peek(1).filter(|l| !l.is_blank) else {
            return Self::length_gated(marker, min_len);
        };
        if Adornment::is_adornment(&text_line.content) {
            return Self::length_gated(marker, min_len);
        }
        let Some(underline) = cursor.peek(2).and_then(|l| Adornment::marker(&l.content)) else {
            return Self::length_gated(marker, min_len);
        };
        if underline != marker {
            return Self::length_gated(marker, min_len);
        }

        let title = text_line.content.trim();
        let marker_len = marker.chars().count();
        // A wider title is tolerated once the marker itself is long enough.
        if width(title) > marker_len && marker_len < min_len {
            return Decision::Fallback;
        }
        match Adornment::style(marker) {
            Some(style) => Decision::Title { style, title },
            None => Decision::Fallback,
        }
    }
}

impl BlockRecognizer for LineMarkerRecognizer {
    fn name(&self) -> &'static str {
        "line_marker"
    }

    fn recognize(
        &self,
        cursor: &mut SourceCursor<'_>,
        ctx: &mut dyn ParseContext,
        out: &mut ElementList,
    ) -> Outcome {
        let Some(line) = cursor.current_line() else {
            return Outcome::Declined;
        };
        let Some(marker) = Adornment::marker(&line.content) else {
            return Outcome::Declined;
        };

        match Self::decide(cursor, marker, ctx.allow_titles(), ctx.min_marker_length()) {
            Decision::Fallback => {
                log::trace!("line {}: marker {marker:?} is not structural", line.line);
                Outcome::Declined
            }
            Decision::Transition => {
                log::debug!("line {}: transition {marker:?}", line.line);
                out.push(TransitionElement::new(marker, line.line));
                cursor.advance(1);
                Outcome::Matched
            }
            Decision::Title { style, title } => {
                let range = LineRange::new(line.line, line.line + 2);
                log::debug!("lines {range}: title {title:?}");
                out.push(TitleElement::overlined(style, title, range));
                cursor.advance(3);
                Outcome::Matched
            }
        }
    }
}
