use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    elements::{Element, ElementList, TagName},
    rope::lines_with_spans,
};

pub fn check(rope: &Rope, doc: &ParsedDoc) {
    let n = lines_with_spans(rope).count();
    check_sequence(&doc.elements, n, "document");

    for body in &doc.item_bodies {
        check_sequence(&body.elements, n, "item body");
        for e in &body.elements {
            let range = e.line_range();
            assert!(
                body.item.contains(range.start()) && body.item.contains(range.end()),
                "body element {range} escapes its item {}",
                body.item
            );
            assert_ne!(
                e.tagname(),
                TagName::TitleOverline,
                "title recognized inside list item {}",
                body.item
            );
        }
    }
}

fn check_sequence(list: &ElementList, line_count: usize, what: &str) {
    let mut prev: Option<&Element> = None;
    for e in list {
        let range = e.line_range();
        assert!(
            range.end() < line_count,
            "{what} element {range} out of bounds (line count: {line_count})"
        );
        if let Some(p) = prev {
            assert!(
                !p.line_range().overlaps(range),
                "{what} elements overlap: {} and {range}",
                p.line_range()
            );
            assert!(
                p.line_range().start() < range.start(),
                "{what} elements out of order: {} then {range}",
                p.line_range()
            );
        }
        if let Element::EnumList(list) = e {
            let items = list.items();
            assert!(!items.is_empty(), "empty list at {range}");
            for pair in items.windows(2) {
                let (a, b) = (pair[0].line_range(), pair[1].line_range());
                assert!(
                    !a.overlaps(b) && a.start() < b.start(),
                    "list items out of order or overlapping: {a} then {b}"
                );
            }
        }
        prev = Some(e);
    }
}
