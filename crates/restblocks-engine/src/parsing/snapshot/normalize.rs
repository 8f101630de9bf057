use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    cursor::SourceLine,
    elements::{Element, ElementList},
    rope::{Span, lines_with_spans, preview, truncate},
};

/// Stable, line-per-element rendering of a parse result.
///
/// Nesting is shown by indentation: list items sit two columns inside their
/// list, item bodies two columns inside their item. Paragraphs in an item
/// body are previewed from the dedented body text, without the bullet.
#[derive(Debug)]
pub struct Snap {
    pub elements: Vec<String>,
}

pub fn normalize(rope: &Rope, doc: &ParsedDoc) -> Snap {
    let spans: Vec<Span> = lines_with_spans(rope).map(|l| l.span).collect();
    let mut elements = Vec::new();
    render(rope, &spans, None, doc, &doc.elements, 0, &mut elements);
    Snap { elements }
}

/// `body` holds the item body lines when rendering inside a list item.
fn render(
    rope: &Rope,
    spans: &[Span],
    body: Option<&[SourceLine]>,
    doc: &ParsedDoc,
    list: &ElementList,
    depth: usize,
    out: &mut Vec<String>,
) {
    let pad = " ".repeat(depth * 4);
    for element in list {
        let range = element.line_range();
        let tag = element.tagname();
        match element {
            Element::Title(t) => {
                out.push(format!("{pad}{range} {tag} {:?} {}", t.style(), t.title()));
            }
            Element::Transition(t) => {
                out.push(format!("{pad}{range} {tag} {}", t.style()));
            }
            Element::Paragraph(_) => {
                let text = match body {
                    Some(lines) => lines
                        .iter()
                        .find(|l| l.line == range.start())
                        .map(|l| truncate(&l.content, 40)),
                    None => spans.get(range.start()).map(|sp| preview(rope, *sp, 40)),
                }
                .unwrap_or_default();
                out.push(format!("{pad}{range} {tag} {}", text.trim()));
            }
            Element::EnumList(l) => {
                out.push(format!(
                    "{pad}{range} {tag} {} {}",
                    l.format().as_str(),
                    l.numbering().as_str()
                ));
                for item in l.items() {
                    out.push(format!(
                        "{pad}  {} {} {} #{}",
                        item.line_range(),
                        item.tagname(),
                        item.numbering().as_str(),
                        item.ordinal()
                    ));
                    if let Some(b) = doc.item_body(item.line_range(), depth) {
                        render(rope, spans, Some(&b.lines), doc, &b.elements, depth + 1, out);
                    }
                }
            }
        }
    }
}
