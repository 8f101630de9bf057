//! # Block Recognition
//!
//! Recognizers are tried in a fixed order at each non-blank line position.
//!
//! ## Modules
//!
//! - **`context`**: `BlockRecognizer` and `ParseContext` traits, the `Outcome` of an attempt
//! - **`kinds`**: the recognizers themselves (line markers, enumerated lists, paragraphs)
//!   and the bullet and adornment classifiers they build on
//! - **`dispatch`**: `BlockDispatcher`, which walks the line table and recurses into
//!   list item bodies
//!
//! ## Key Invariants
//!
//! - A declining recognizer leaves the cursor where it found it
//! - Every non-blank line ends up in exactly one top-level element
//! - Titles are never recognized inside list item bodies

pub mod context;
pub mod dispatch;
pub mod kinds;

pub use context::{BlockRecognizer, ItemBody, Outcome, ParseContext};
pub use dispatch::{BlockDispatcher, ListItemBody};
