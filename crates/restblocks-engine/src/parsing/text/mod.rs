//! Leaf text utilities shared by the recognizers.

pub mod roman;
pub mod width;

pub use width::width;
