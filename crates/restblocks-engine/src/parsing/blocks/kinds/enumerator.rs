//! Enumerated list bullets: `1.`, `(a)`, `iv)`, `#.`.
//!
//! All knowledge of what an enumerator looks like lives here; the list
//! recognizer only asks [`classify`] and compares the answers.

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::text::roman;

/// Punctuation enclosing the bullet token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulletFormat {
    /// `(N)`
    Parenthesized,
    /// `N)`
    RightParen,
    /// `N.`
    Period,
}

impl BulletFormat {
    fn from_delimiters(open: bool, close: &str) -> Option<Self> {
        match (open, close) {
            (true, ")") => Some(Self::Parenthesized),
            (false, ")") => Some(Self::RightParen),
            (false, ".") => Some(Self::Period),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parenthesized => "parenthesized",
            Self::RightParen => "right_paren",
            Self::Period => "period",
        }
    }
}

/// Numbering system of a bullet token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberingType {
    /// The `#` placeholder.
    Auto,
    Arabic,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl NumberingType {
    /// Priority used when no numbering is expected yet.
    const INFERENCE_ORDER: [NumberingType; 5] = [
        Self::Arabic,
        Self::LowerAlpha,
        Self::UpperAlpha,
        Self::LowerRoman,
        Self::UpperRoman,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Arabic => "arabic",
            Self::LowerAlpha => "loweralpha",
            Self::UpperAlpha => "upperalpha",
            Self::LowerRoman => "lowerroman",
            Self::UpperRoman => "upperroman",
        }
    }

    /// Type used to match the tokens that follow a bullet of this type.
    ///
    /// An auto-numbered list continues with digits.
    pub const fn continuation(self) -> Self {
        match self {
            Self::Auto => Self::Arabic,
            other => other,
        }
    }

    /// Whether `token` belongs to this type's character class.
    fn admits(self, token: &str) -> bool {
        match self {
            Self::Auto => token == Enumerator::AUTO_TOKEN,
            Self::Arabic => all_of(token, |c| c.is_ascii_digit()),
            Self::LowerAlpha => token.len() == 1 && all_of(token, |c| c.is_ascii_lowercase()),
            Self::UpperAlpha => token.len() == 1 && all_of(token, |c| c.is_ascii_uppercase()),
            Self::LowerRoman => all_of(token, |c| "ivxlcdm".contains(c)),
            Self::UpperRoman => all_of(token, |c| "IVXLCDM".contains(c)),
        }
    }

    /// Decodes `token` to an ordinal. `None` means the token is malformed
    /// for this type (e.g. `ic` as a Roman numeral).
    fn ordinal(self, token: &str) -> Option<u32> {
        match self {
            // `#` items always decode to 1.
            Self::Auto => Some(1),
            Self::Arabic => token.parse().ok(),
            Self::LowerAlpha => alpha_ordinal(token, 'a'),
            Self::UpperAlpha => alpha_ordinal(token, 'A'),
            Self::LowerRoman | Self::UpperRoman => roman::to_int(&token.to_ascii_uppercase()),
        }
    }

    fn infer(token: &str, expected: Option<NumberingType>) -> Option<NumberingType> {
        if token == Enumerator::AUTO_TOKEN {
            return Some(Self::Auto);
        }
        match expected {
            Some(expected) => {
                let expected = expected.continuation();
                expected.admits(token).then_some(expected)
            }
            // A lone "i" reads as Roman one, not the ninth letter.
            None => match token {
                "i" => Some(Self::LowerRoman),
                "I" => Some(Self::UpperRoman),
                _ => Self::INFERENCE_ORDER
                    .into_iter()
                    .find(|ty| ty.admits(token)),
            },
        }
    }
}

fn all_of(token: &str, pred: impl Fn(char) -> bool) -> bool {
    !token.is_empty() && token.chars().all(pred)
}

fn alpha_ordinal(token: &str, base: char) -> Option<u32> {
    let c = token.chars().next()?;
    Some(u32::from(c) - u32::from(base) + 1)
}

/// A classified bullet at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    pub format: BulletFormat,
    pub numbering: NumberingType,
    pub ordinal: u32,
    /// Character offset immediately after the bullet's closing punctuation.
    pub consumed_width: usize,
}

impl Enumerator {
    pub const AUTO_TOKEN: &'static str = "#";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^(?P<open>\()?(?P<token>[0-9]+|[A-Za-z]+|#)(?P<close>[.)])(?:\s|$)")
                .expect("Invalid enumerator regex")
        })
    }
}

/// Classifies the bullet at the start of `line`, if any.
///
/// With `expected`, the token must belong to that numbering type (`Auto`
/// expects digits); without it, the type is inferred. Returns `None` when
/// the line does not start with a bullet or the token does not decode.
pub fn classify(line: &str, expected: Option<NumberingType>) -> Option<Enumerator> {
    let caps = Enumerator::pattern().captures(line)?;
    let close = caps.name("close")?;
    let format = BulletFormat::from_delimiters(caps.name("open").is_some(), close.as_str())?;
    let token = caps.name("token")?.as_str();

    let numbering = NumberingType::infer(token, expected)?;
    let ordinal = numbering.ordinal(token)?;

    Some(Enumerator {
        format,
        numbering,
        ordinal,
        // The bullet is ASCII, so the byte offset is also the char offset.
        consumed_width: close.end(),
    })
}
