pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{ParseOptions, ParsedDoc, parse_document, parse_str};
