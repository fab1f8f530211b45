//! Single guess scoring command
//!
//! Scores one guess against the answer without starting a session.

use crate::core::{Feedback, Row, Word, WordError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    pub row: Row,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if the guess is not exactly 5 ASCII letters.
pub fn score_word(guess: &str, answer: &Word) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess.trim())?;
    let feedback = Feedback::calculate(guess.letters(), answer);
    let row = feedback.scored_row(guess.letters());

    Ok(ScoreResult {
        guess,
        answer: answer.clone(),
        feedback,
        row,
    })
}
