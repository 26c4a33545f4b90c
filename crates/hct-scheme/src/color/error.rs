use std::fmt;

/// A string that does not name a color.
///
/// Each variant keeps the trimmed input so config errors can quote what
/// the user actually wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Nothing left after trimming whitespace and `#`.
    Empty,
    /// Digit count other than 3 (`#rgb`), 6 (`#rrggbb`) or 8 (`#aarrggbb`).
    DigitCount { input: String, count: usize },
    /// A character outside `0-9a-fA-F`; `position` counts digits from 1.
    NotHex {
        input: String,
        found: char,
        position: usize,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Empty => write!(f, "empty color"),
            ParseColorError::DigitCount { input, count } => write!(
                f,
                "{input:?} has {count} hex digits, expected 3, 6 or 8"
            ),
            ParseColorError::NotHex {
                input,
                found,
                position,
            } => write!(f, "{input:?} has non-hex {found:?} at digit {position}"),
        }
    }
}

impl std::error::Error for ParseColorError {}
