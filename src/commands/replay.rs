//! Guess replay command
//!
//! Feeds a list of guesses through the engine and reports where the game ended up.

use crate::core::{Word, WordError};
use crate::game::{GameEngine, GameState};

/// Configuration for a replay
pub struct ReplayConfig {
    pub answer: Word,
    pub guesses: Vec<String>,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(answer: Word, guesses: Vec<String>) -> Self {
        Self { answer, guesses }
    }
}

/// Result of a replay
pub struct ReplayResult {
    /// Final snapshot
    pub state: GameState,
    /// Guesses that reached the engine while the game was running
    pub submitted: Vec<Word>,
    /// Guesses given after the game had already ended
    pub ignored: Vec<Word>,
}

/// Replay the configured guesses in order
///
/// # Errors
///
/// Returns an error if any guess is not exactly 5 ASCII letters. Nothing is
/// replayed in that case.
pub fn replay_guesses(config: ReplayConfig) -> Result<ReplayResult, WordError> {
    let words = config
        .guesses
        .iter()
        .map(|g| Word::new(g.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut engine = GameEngine::new(config.answer);
    let mut submitted = Vec::new();
    let mut ignored = Vec::new();

    for word in words {
        if engine.state().status().is_over() {
            ignored.push(word);
            continue;
        }
        engine.enter_guess(word.text());
        submitted.push(word);
    }

    Ok(ReplayResult {
        state: engine.state().clone(),
        submitted,
        ignored,
    })
}
