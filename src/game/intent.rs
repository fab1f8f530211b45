//! Discrete player intents

use std::fmt;

/// Something the player asked for
///
/// The input layer turns raw key presses into these; the engine decides
/// whether each one is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Write a letter at the cursor
    TypeLetter(char),
    /// Clear the letter before the cursor
    DeleteLetter,
    /// Score the active row
    SubmitGuess,
    /// Start over with the same answer
    Reset,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeLetter(ch) => write!(f, "type '{ch}'"),
            Self::DeleteLetter => write!(f, "delete"),
            Self::SubmitGuess => write!(f, "submit"),
            Self::Reset => write!(f, "reset"),
        }
    }
}
