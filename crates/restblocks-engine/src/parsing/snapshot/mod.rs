//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `ParsedDoc` as one line per element (`Snap`) for
//!   `insta` snapshot testing and for the CLI outline
//! - **`invariants`**: Runtime checks for parser correctness (ranges in bounds,
//!   elements ordered and disjoint, item bodies inside their items, no titles in bodies)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
