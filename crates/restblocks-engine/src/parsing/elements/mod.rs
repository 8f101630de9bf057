//! # Element Model
//!
//! Value types emitted by the block recognizers. Elements are a closed sum
//! type ([`Element`]) with shared accessors for the tag name and the
//! inclusive line range; they hold no back-references and are owned by the
//! [`ElementList`] they are appended to.

pub mod list;
pub mod types;

pub use list::ElementList;
pub use types::{
    Element, LineRange, ListElement, ListItemElement, ParagraphElement, TagName, TitleElement,
    TransitionElement,
};
