use std::fmt;

use crate::parsing::blocks::kinds::{BulletFormat, NumberingType};

/// Closed set of block-level tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    TitleOverline,
    Transition,
    EnumList,
    ListItem,
    Paragraph,
}

impl TagName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleOverline => "title_overline",
            Self::Transition => "transition",
            Self::EnumList => "enum_list",
            Self::ListItem => "list_item",
            Self::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive, 0-based range of source lines.
///
/// # Invariants
///
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted line range {start}..={end}");
        Self { start, end }
    }

    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    /// Number of lines covered.
    pub fn len(self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    pub fn overlaps(self, other: LineRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A section title with overline and underline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleElement {
    overline: bool,
    style: char,
    title: String,
    range: LineRange,
}

impl TitleElement {
    /// Title framed by an overline and a matching underline.
    pub fn overlined(style: char, title: impl Into<String>, range: LineRange) -> Self {
        Self {
            overline: true,
            style,
            title: title.into(),
            range,
        }
    }

    pub fn overline(&self) -> bool {
        self.overline
    }

    pub fn style(&self) -> char {
        self.style
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn line_range(&self) -> LineRange {
        self.range
    }
}

/// A horizontal-rule-like boundary marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionElement {
    style: String,
    range: LineRange,
}

impl TransitionElement {
    pub fn new(style: impl Into<String>, line: usize) -> Self {
        Self {
            style: style.into(),
            range: LineRange::single(line),
        }
    }

    /// The full trimmed adornment text.
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn line_range(&self) -> LineRange {
        self.range
    }
}

/// One item of an enumerated list. Body elements are reported through the
/// parse context, not owned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemElement {
    range: LineRange,
    numbering: NumberingType,
    ordinal: u32,
}

impl ListItemElement {
    pub fn new(range: LineRange, numbering: NumberingType, ordinal: u32) -> Self {
        Self {
            range,
            numbering,
            ordinal,
        }
    }

    pub fn tagname(&self) -> TagName {
        TagName::ListItem
    }

    pub fn line_range(&self) -> LineRange {
        self.range
    }

    /// `Auto` for `#` bullets, otherwise the list's numbering type.
    pub fn numbering(&self) -> NumberingType {
        self.numbering
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

/// An enumerated list.
///
/// # Invariants
///
/// - at least one item
/// - items appear in source order and never overlap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListElement {
    format: BulletFormat,
    numbering: NumberingType,
    items: Vec<ListItemElement>,
}

impl ListElement {
    pub fn new(format: BulletFormat, numbering: NumberingType, first: ListItemElement) -> Self {
        Self {
            format,
            numbering,
            items: vec![first],
        }
    }

    pub fn push(&mut self, item: ListItemElement) {
        debug_assert!(
            self.items
                .last()
                .is_none_or(|last| last.range.end < item.range.start),
            "list item {} overlaps or precedes its predecessor",
            item.range
        );
        self.items.push(item);
    }

    pub fn format(&self) -> BulletFormat {
        self.format
    }

    /// Numbering type of the first item (`Auto` for a `#` seed).
    pub fn numbering(&self) -> NumberingType {
        self.numbering
    }

    pub fn items(&self) -> &[ListItemElement] {
        &self.items
    }

    pub fn line_range(&self) -> LineRange {
        let first = self.items[0].range;
        let last = self.items[self.items.len() - 1].range;
        LineRange::new(first.start, last.end)
    }
}

/// A run of body text no structural recognizer claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphElement {
    range: LineRange,
}

impl ParagraphElement {
    pub fn new(range: LineRange) -> Self {
        Self { range }
    }

    pub fn line_range(&self) -> LineRange {
        self.range
    }
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Title(TitleElement),
    Transition(TransitionElement),
    EnumList(ListElement),
    Paragraph(ParagraphElement),
}

impl Element {
    pub fn tagname(&self) -> TagName {
        match self {
            Element::Title(_) => TagName::TitleOverline,
            Element::Transition(_) => TagName::Transition,
            Element::EnumList(_) => TagName::EnumList,
            Element::Paragraph(_) => TagName::Paragraph,
        }
    }

    pub fn line_range(&self) -> LineRange {
        match self {
            Element::Title(t) => t.line_range(),
            Element::Transition(t) => t.line_range(),
            Element::EnumList(l) => l.line_range(),
            Element::Paragraph(p) => p.line_range(),
        }
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.line_range().contains(line)
    }
}

impl From<TitleElement> for Element {
    fn from(value: TitleElement) -> Self {
        Element::Title(value)
    }
}

impl From<TransitionElement> for Element {
    fn from(value: TransitionElement) -> Self {
        Element::Transition(value)
    }
}

impl From<ListElement> for Element {
    fn from(value: ListElement) -> Self {
        Element::EnumList(value)
    }
}

impl From<ParagraphElement> for Element {
    fn from(value: ParagraphElement) -> Self {
        Element::Paragraph(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(start: usize, end: usize, ordinal: u32) -> ListItemElement {
        ListItemElement::new(LineRange::new(start, end), NumberingType::Arabic, ordinal)
    }

    #[test]
    fn line_range_queries() {
        let r = LineRange::new(2, 4);
        assert_eq!(r.len(), 3);
        assert!(r.contains(2) && r.contains(4));
        assert!(!r.contains(5));
        assert!(r.overlaps(LineRange::single(4)));
        assert!(!r.overlaps(LineRange::new(5, 9)));
        assert_eq!(r.to_string(), "2..=4");
    }

    #[test]
    fn list_range_is_derived_from_items() {
        let mut list = ListElement::new(BulletFormat::Period, NumberingType::Arabic, item(3, 4, 1));
        list.push(item(6, 8, 2));
        assert_eq!(list.line_range(), LineRange::new(3, 8));
        assert_eq!(Element::from(list).tagname(), TagName::EnumList);
    }

    #[test]
    fn title_is_always_overlined() {
        let t = TitleElement::overlined('=', "Title", LineRange::new(0, 2));
        assert!(t.overline());
        let e = Element::from(t);
        assert_eq!(e.tagname().as_str(), "title_overline");
        assert!(e.contains_line(1));
    }

    #[test]
    fn transition_spans_one_line() {
        let e = Element::from(TransitionElement::new("----", 7));
        assert_eq!(e.line_range(), LineRange::single(7));
        assert_eq!(e.tagname().to_string(), "transition");
    }
}
