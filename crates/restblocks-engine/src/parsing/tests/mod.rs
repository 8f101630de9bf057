//! End-to-end tests for the parsing module: whole documents in, elements out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    ParseOptions, ParsedDoc,
    blocks::kinds::{BulletFormat, NumberingType, classify},
    elements::{
        Element, LineRange, ListElement, ParagraphElement, TagName, TitleElement,
        TransitionElement,
    },
    parse_document, parse_str, snapshot,
};

fn parse_checked(text: &str) -> ParsedDoc {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = parse_str(text);
    snapshot::invariants(&Rope::from(text), &doc);
    doc
}

fn shape(doc: &ParsedDoc) -> Vec<(TagName, LineRange)> {
    doc.elements
        .iter()
        .map(|e| (e.tagname(), e.line_range()))
        .collect()
}

fn only_list(doc: &ParsedDoc) -> &ListElement {
    match doc.elements.as_slice() {
        [Element::EnumList(list)] => list,
        other => panic!("expected a single enum_list, got {other:?}"),
    }
}

#[rstest]
#[case("1. x", None)]
#[case("ii) x", Some(NumberingType::LowerRoman))]
#[case("(C) x", None)]
#[case("#. x", Some(NumberingType::Arabic))]
#[case("nope", None)]
fn classification_is_pure(#[case] line: &str, #[case] expected: Option<NumberingType>) {
    assert_eq!(classify(line, expected), classify(line, expected));
}

#[test]
fn list_items_share_one_format() {
    let doc = parse_checked("1) One\n2) Two\n3. Three\n");
    let list = match &doc.elements.as_slice()[0] {
        Element::EnumList(list) => list,
        other => panic!("expected enum_list, got {other:?}"),
    };

    assert_eq!(list.format(), BulletFormat::RightParen);
    assert_eq!(list.items().len(), 2);
    assert_eq!(
        shape(&doc),
        vec![
            (TagName::EnumList, LineRange::new(0, 1)),
            (TagName::EnumList, LineRange::single(2)),
        ]
    );
}

#[test]
fn explicit_ordinals_are_sequential() {
    let doc = parse_checked("A. One\nB. Two\nC. Three\nE. Five\n");
    let list = match &doc.elements.as_slice()[0] {
        Element::EnumList(list) => list,
        other => panic!("expected enum_list, got {other:?}"),
    };
    let ordinals: Vec<u32> = list.items().iter().map(|i| i.ordinal()).collect();

    assert_eq!(list.numbering(), NumberingType::UpperAlpha);
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(doc.elements.len(), 2);
}

#[test]
fn explicit_after_auto_starts_a_new_list() {
    let doc = parse_checked("1. One\n#. Two\n3. Three\n");

    assert_eq!(
        shape(&doc),
        vec![
            (TagName::EnumList, LineRange::new(0, 1)),
            (TagName::EnumList, LineRange::single(2)),
        ]
    );
}

#[test]
fn auto_after_explicit_runs_to_the_end() {
    let doc = parse_checked("1. One\n#. Two\n#. Three\n");
    let numbering: Vec<NumberingType> = only_list(&doc)
        .items()
        .iter()
        .map(|i| i.numbering())
        .collect();

    assert_eq!(
        numbering,
        vec![NumberingType::Arabic, NumberingType::Auto, NumberingType::Auto]
    );
}

#[test]
fn overlined_title() {
    let doc = parse_checked("====\nTitle\n====\n");

    assert_eq!(
        doc.elements.as_slice(),
        &[Element::Title(TitleElement::overlined(
            '=',
            "Title",
            LineRange::new(0, 2)
        ))]
    );
}

#[test]
fn transition_inside_list_item() {
    let doc = parse_checked("1. Item\n\n   ----\n");
    let list = only_list(&doc);
    let body = doc
        .body_of(list.items()[0].line_range(), 0)
        .expect("item body recorded");

    assert_eq!(
        body.as_slice()[1],
        Element::Transition(TransitionElement::new("----", 2))
    );
}

#[rstest]
#[case::top_level("--\n")]
#[case::before_text("--\nText\n")]
#[case::title_shaped("--\nTitle\n--\n")]
fn short_marker_becomes_text(#[case] text: &str) {
    let doc = parse_checked(text);
    assert!(
        doc.elements
            .iter()
            .all(|e| e.tagname() == TagName::Paragraph),
        "unexpected structure: {:?}",
        doc.elements
    );
}

#[test]
fn short_marker_in_item_body_is_text() {
    let doc = parse_checked("1. Item\n\n   --\n");
    let body = doc
        .body_of(only_list(&doc).items()[0].line_range(), 0)
        .expect("item body recorded");

    assert!(body.iter().all(|e| e.tagname() == TagName::Paragraph));
}

#[test]
fn roman_list() {
    let doc = parse_checked("i. First\nii. Second\niii. Third\n");
    let list = only_list(&doc);
    let ordinals: Vec<u32> = list.items().iter().map(|i| i.ordinal()).collect();

    assert_eq!(list.numbering(), NumberingType::LowerRoman);
    assert_eq!(ordinals, vec![1, 2, 3]);
}

#[test]
fn bullet_then_prose_is_one_paragraph() {
    let doc = parse_checked("1. Not a list\nJust more text\n");
    assert_eq!(shape(&doc), vec![(TagName::Paragraph, LineRange::new(0, 1))]);
    assert!(doc.item_bodies.is_empty());
}

#[test]
fn mismatched_underline_length_is_not_a_title() {
    let doc = parse_checked("=====\nTitle\n====\n");
    assert_eq!(
        shape(&doc),
        vec![
            (TagName::Transition, LineRange::single(0)),
            (TagName::Paragraph, LineRange::new(1, 2)),
        ]
    );
}

#[test]
fn titles_can_be_disabled_for_the_document() {
    let rope = Rope::from("====\nTitle\n====\n");
    let options = ParseOptions {
        allow_titles: false,
        ..ParseOptions::default()
    };
    let doc = parse_document(&rope, &options);

    assert_eq!(
        shape(&doc),
        vec![
            (TagName::Transition, LineRange::single(0)),
            (TagName::Paragraph, LineRange::new(1, 2)),
        ]
    );
}

#[test]
fn elements_at_finds_the_covering_element() {
    let doc = parse_checked("Intro\n\n1. One\n   more\n2. Two\n");
    let found: Vec<TagName> = doc.elements_at(3).map(|e| e.tagname()).collect();

    assert_eq!(found, vec![TagName::EnumList]);
    assert_eq!(doc.elements_at(1).count(), 0);
}

#[test]
fn crlf_and_tabs() {
    let doc = parse_checked("1.\tTabbed\r\n\tbody\r\n2. Next\r\n");
    let list = only_list(&doc);

    assert_eq!(list.items()[0].line_range(), LineRange::new(0, 1));
    assert_eq!(list.items()[1].line_range(), LineRange::single(2));
}

#[test]
fn bullet_alone_takes_the_block_at_its_column() {
    let doc = parse_checked("1.\n  Body\n");
    let list = only_list(&doc);
    let body = doc.body_of(list.items()[0].line_range(), 0).unwrap();

    assert_eq!(shape(&doc), vec![(TagName::EnumList, LineRange::new(0, 1))]);
    assert_eq!(list.items().len(), 1);
    assert_eq!(
        body.as_slice(),
        &[Element::Paragraph(ParagraphElement::new(LineRange::single(1)))]
    );
}

#[test]
fn deeply_nested_bullets_stay_within_the_depth_limit() {
    let text = "1. ".repeat(10_000);
    let doc = parse_checked(&text);
    let limit = ParseOptions::DEFAULT_MAX_NESTING_DEPTH;

    assert_eq!(shape(&doc), vec![(TagName::EnumList, LineRange::single(0))]);
    assert_eq!(doc.item_bodies.len(), limit);
    assert!(doc.item_bodies.iter().all(|b| b.depth < limit));

    let deepest = &doc.item_bodies[0];
    assert_eq!(deepest.depth, limit - 1);
    assert_eq!(
        deepest.elements.as_slice(),
        &[Element::Paragraph(ParagraphElement::new(LineRange::single(0)))]
    );
}

#[test]
fn nesting_limit_is_configurable() {
    let rope = Rope::from("1. a. i. deep\n");
    let options = ParseOptions {
        max_nesting_depth: 1,
        ..ParseOptions::default()
    };
    let doc = parse_document(&rope, &options);
    snapshot::invariants(&rope, &doc);

    assert_eq!(doc.item_bodies.len(), 1);
    assert_eq!(
        doc.item_bodies[0].elements.as_slice(),
        &[Element::Paragraph(ParagraphElement::new(LineRange::single(0)))]
    );
}

#[test]
fn empty_document() {
    let doc = parse_checked("");
    assert!(doc.elements.is_empty());
    assert!(doc.item_bodies.is_empty());
}
