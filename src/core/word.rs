//! Five-letter word representation
//!
//! A Word stores a validated, uppercased 5-letter word along with the set of
//! letters it contains, so "is this letter anywhere in the answer" is a lookup.

use super::board::WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;

/// The answer every session starts with.
pub const DEFAULT_ANSWER: &str = "CURLY";

/// A 5-letter word of uppercase ASCII letters
///
/// Used both for the session answer and for validated guesses coming from
/// line-oriented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    letter_set: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is not trimmed; callers handle that.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wardle::core::Word;
    ///
    /// let word = Word::new("curly").unwrap();
    /// assert_eq!(word.text(), "CURLY");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let Ok(letters) = <[u8; WORD_LENGTH]>::try_from(text.as_bytes()) else {
            return Err(WordError::InvalidLength(text.len()));
        };

        Ok(Self::from_letters(text, letters))
    }

    /// The fixed session answer (`CURLY`)
    #[must_use]
    pub fn default_answer() -> Self {
        Self::from_letters(DEFAULT_ANSWER.to_string(), *b"CURLY")
    }

    fn from_letters(text: String, letters: [u8; WORD_LENGTH]) -> Self {
        let letter_set = letters.iter().copied().collect();
        Self {
            text,
            letters,
            letter_set,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_set.contains(&letter)
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::default_answer()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_to_uppercase() {
        let word = Word::new("curly").unwrap();
        assert_eq!(word.text(), "CURLY");
        assert_eq!(word.letters(), b"CURLY");

        let word2 = Word::new("CuRlY").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("curl"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_counts_characters_not_bytes() {
        assert!(matches!(Word::new("éclat"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cur1y"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cur y"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("curl!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn default_answer_matches_constant() {
        let answer = Word::default();
        assert_eq!(answer.text(), DEFAULT_ANSWER);
        assert_eq!(answer, Word::new(DEFAULT_ANSWER).unwrap());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::default_answer();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'Y');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::default_answer();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'L'));
        assert!(!word.has_letter(b'X'));
        assert!(!word.has_letter(b'c'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("spool").unwrap();
        assert_eq!(format!("{word}"), "SPOOL");
    }
}
