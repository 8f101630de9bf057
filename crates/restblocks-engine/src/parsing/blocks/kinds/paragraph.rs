use crate::parsing::{
    blocks::context::{BlockRecognizer, Outcome, ParseContext},
    cursor::SourceCursor,
    elements::{ElementList, LineRange, ParagraphElement},
};

/// The catch-all recognizer: paragraphs have no delimiters and claim every
/// non-blank line nothing else wanted, up to the next blank line.
pub struct ParagraphFallback;

impl BlockRecognizer for ParagraphFallback {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn recognize(
        &self,
        cursor: &mut SourceCursor<'_>,
        _ctx: &mut dyn ParseContext,
        out: &mut ElementList,
    ) -> Outcome {
        if cursor.is_eof() {
            return Outcome::Declined;
        }
        let Some(first) = cursor.current_line().filter(|l| !l.is_blank) else {
            return Outcome::Declined;
        };

        let mut last = first.line;
        let mut span = 1;
        while let Some(next) = cursor.peek(span).filter(|l| !l.is_blank) {
            last = next.line;
            span += 1;
        }

        out.push(ParagraphElement::new(LineRange::new(first.line, last)));
        cursor.advance(span);
        Outcome::Matched
    }
}
