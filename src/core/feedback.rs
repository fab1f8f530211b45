//! Guess scoring
//!
//! Each position of a guess is classified on its own:
//! - Correct: same letter as the answer at that position
//! - Present: letter appears somewhere else in the answer
//! - Absent: letter is not in the answer
//!
//! There is no per-letter budget. A repeated guess letter is marked Present at
//! every misplaced occurrence even when the answer holds a single copy.

use super::board::{Row, WORD_LENGTH};
use super::cell::{Cell, CellStatus};
use super::word::Word;

/// Scored statuses for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([CellStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([CellStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wardle::core::{CellStatus, Feedback, Word};
    ///
    /// let answer = Word::default_answer();
    /// let feedback = Feedback::calculate(b"UCRLY", &answer);
    ///
    /// assert_eq!(feedback.statuses()[0], CellStatus::Present);
    /// assert_eq!(feedback.statuses()[2], CellStatus::Correct);
    /// assert!(!feedback.is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &[u8; WORD_LENGTH], answer: &Word) -> Self {
        let mut result = [CellStatus::Absent; WORD_LENGTH];

        for (i, (&letter, status)) in guess.iter().zip(result.iter_mut()).enumerate() {
            *status = if letter == answer.letter_at(i) {
                CellStatus::Correct
            } else if answer.has_letter(letter) {
                CellStatus::Present
            } else {
                CellStatus::Absent
            };
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[CellStatus; WORD_LENGTH] {
        &self.0
    }

    /// A guess is a perfect match when no position is anything but Correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.count(CellStatus::Correct)
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.count(CellStatus::Present)
    }

    fn count(self, status: CellStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Pair each guess letter with its status
    #[must_use]
    pub fn scored_row(self, guess: &[u8; WORD_LENGTH]) -> Row {
        let mut row = [Cell::EMPTY; WORD_LENGTH];
        for ((cell, &letter), &status) in row.iter_mut().zip(guess).zip(&self.0) {
            *cell = Cell::scored(letter, status);
        }
        row
    }

    /// Convert feedback to an emoji string like "🟨🟨🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().copied().map(status_emoji).collect()
    }
}

/// Emoji for one cell status
#[must_use]
pub const fn status_emoji(status: CellStatus) -> char {
    match status {
        CellStatus::Correct => '🟩',
        CellStatus::Present => '🟨',
        CellStatus::Absent => '⬛',
        CellStatus::Empty | CellStatus::Typing => '⬜',
    }
}
