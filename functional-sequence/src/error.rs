use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Sequence error.
///
/// These are the only ways in which operations on a sequence can fail.
/// The combinators check for emptiness themselves, so `map`, `filter`,
/// `reduce` and `reverse` never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Empty sequence.
    ///
    /// `first` or `rest` was applied to a sequence without any elements.
    EmptySequence,
    /// Index out of range.
    ///
    /// A positional read addressed an index at or beyond the length of the
    /// sequence, or a suffix was requested starting beyond its end.
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The length of the sequence at the time of the request
        len: usize,
    },
}

impl Error {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
