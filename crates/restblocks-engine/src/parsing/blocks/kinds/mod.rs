pub mod adornment;
pub mod enum_list;
pub mod enumerator;
pub mod line_marker;
pub mod paragraph;

pub use adornment::Adornment;
pub use enum_list::EnumListRecognizer;
pub use enumerator::{BulletFormat, Enumerator, NumberingType, classify};
pub use line_marker::LineMarkerRecognizer;
pub use paragraph::ParagraphFallback;
