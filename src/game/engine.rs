//! State transitions
//!
//! `apply` is the whole rule set: a total function from a snapshot and an
//! intent to the next snapshot. Rejected intents hand back the state unchanged.

use super::intent::Intent;
use super::state::{GameState, GameStatus};
use crate::core::{Cell, Feedback, LAST_ROW, WORD_LENGTH, Word};
use tracing::{debug, info, trace};

/// Compute the snapshot that follows `state` after `intent`
///
/// # Examples
/// ```
/// use wardle::game::{GameState, GameStatus, Intent, apply};
///
/// let mut state = GameState::default();
/// for ch in "curly".chars() {
///     state = apply(state, Intent::TypeLetter(ch));
/// }
/// state = apply(state, Intent::SubmitGuess);
///
/// assert_eq!(state.status(), GameStatus::Won);
/// ```
#[must_use]
pub fn apply(state: GameState, intent: Intent) -> GameState {
    match intent {
        Intent::Reset => {
            debug!(status = ?state.status, "reset");
            GameState::new(state.answer)
        }
        _ if state.status.is_over() => {
            trace!(%intent, status = ?state.status, "input locked, intent ignored");
            state
        }
        Intent::TypeLetter(ch) => type_letter(state, ch),
        Intent::DeleteLetter => delete_letter(state),
        Intent::SubmitGuess => submit_guess(state),
    }
}

fn type_letter(state: GameState, ch: char) -> GameState {
    if state.cursor >= WORD_LENGTH {
        trace!(%ch, "row full, letter ignored");
        return state;
    }

    let Some(letter) = u8::try_from(ch).ok().filter(u8::is_ascii_alphabetic) else {
        trace!(%ch, "not a letter, ignored");
        return state;
    };
    let letter = letter.to_ascii_uppercase();

    let board = state
        .board
        .with_cell(state.active_row, state.cursor, Cell::typing(letter));
    debug!(
        row = state.active_row,
        col = state.cursor,
        letter = %char::from(letter),
        "letter typed"
    );

    GameState {
        board,
        cursor: state.cursor + 1,
        ..state
    }
}

fn delete_letter(state: GameState) -> GameState {
    if state.cursor == 0 {
        trace!("row empty, delete ignored");
        return state;
    }

    let cursor = state.cursor - 1;
    let board = state.board.with_cell(state.active_row, cursor, Cell::EMPTY);
    debug!(row = state.active_row, col = cursor, "letter deleted");

    GameState {
        board,
        cursor,
        ..state
    }
}

fn submit_guess(state: GameState) -> GameState {
    if state.cursor != WORD_LENGTH {
        trace!(cursor = state.cursor, "row incomplete, submit ignored");
        return state;
    }

    let Some(guess) = state.board.row_letters(state.active_row) else {
        trace!(row = state.active_row, "row has gaps, submit ignored");
        return state;
    };

    let feedback = Feedback::calculate(&guess, &state.answer);
    let board = state
        .board
        .with_row(state.active_row, feedback.scored_row(&guess));

    let (active_row, status) = if feedback.is_perfect() {
        info!(row = state.active_row, "guessed the answer");
        (state.active_row, GameStatus::Won)
    } else if state.active_row == LAST_ROW {
        info!(answer = %state.answer, "out of guesses");
        (state.active_row, GameStatus::Lost)
    } else {
        debug!(
            row = state.active_row,
            feedback = %feedback.to_emoji(),
            "guess scored, next row"
        );
        (state.active_row + 1, GameStatus::InProgress)
    };

    GameState {
        board,
        active_row,
        cursor: 0,
        status,
        ..state
    }
}

/// Owner of the current snapshot
///
/// Intents are applied one at a time; readers borrow the latest snapshot.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Start a session with the given answer
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            state: GameState::new(answer),
        }
    }

    /// The latest snapshot
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply an intent and publish the resulting snapshot
    pub fn dispatch(&mut self, intent: Intent) -> &GameState {
        self.state = apply(self.state.clone(), intent);
        &self.state
    }

    /// Type every character of `text` in order, then submit
    ///
    /// Characters past the fifth are dropped by the engine like any other
    /// rejected intent.
    pub fn enter_guess(&mut self, text: &str) -> &GameState {
        for ch in text.chars() {
            self.dispatch(Intent::TypeLetter(ch));
        }
        self.dispatch(Intent::SubmitGuess)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Word::default_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellStatus, MAX_GUESSES};

    fn type_word(state: GameState, word: &str) -> GameState {
        word.chars()
            .fold(state, |s, ch| apply(s, Intent::TypeLetter(ch)))
    }

    fn guess(state: GameState, word: &str) -> GameState {
        apply(type_word(state, word), Intent::SubmitGuess)
    }

    fn row_statuses(state: &GameState, row: usize) -> Vec<CellStatus> {
        state.board().row(row).iter().map(|c| c.status()).collect()
    }

    #[test]
    fn type_letter_uppercases_and_advances() {
        let state = apply(GameState::default(), Intent::TypeLetter('c'));

        assert_eq!(state.cursor(), 1);
        let cell = state.board().cell(0, 0);
        assert_eq!(cell.letter(), Some('C'));
        assert_eq!(cell.status(), CellStatus::Typing);
    }

    #[test]
    fn type_letter_rejects_non_letters() {
        let initial = GameState::default();
        for ch in ['1', ' ', '!', 'é', '\n'] {
            assert_eq!(apply(initial.clone(), Intent::TypeLetter(ch)), initial);
        }
    }

    #[test]
    fn type_letter_rejected_when_row_full() {
        let full = type_word(GameState::default(), "ABCDE");
        assert_eq!(full.cursor(), WORD_LENGTH);
        assert_eq!(apply(full.clone(), Intent::TypeLetter('F')), full);
    }

    #[test]
    fn delete_clears_previous_cell() {
        let typed = type_word(GameState::default(), "AB");
        let state = apply(typed, Intent::DeleteLetter);

        assert_eq!(state.cursor(), 1);
        assert_eq!(state.board().cell(0, 1), Cell::EMPTY);
        assert_eq!(state.board().cell(0, 0).letter(), Some('A'));
    }

    #[test]
    fn delete_rejected_at_row_start() {
        let initial = GameState::default();
        assert_eq!(apply(initial.clone(), Intent::DeleteLetter), initial);
    }

    #[test]
    fn delete_never_reaches_settled_rows() {
        let state = guess(GameState::default(), "XXXXX");
        let after = apply(state.clone(), Intent::DeleteLetter);
        assert_eq!(after, state);
        assert_eq!(after.board().row_letters(0), Some(*b"XXXXX"));
    }

    #[test]
    fn submit_rejected_until_row_full() {
        let partial = type_word(GameState::default(), "CURL");
        assert_eq!(apply(partial.clone(), Intent::SubmitGuess), partial);
    }

    #[test]
    fn perfect_guess_wins() {
        let state = guess(GameState::default(), "CURLY");

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.active_row(), 0);
        assert_eq!(row_statuses(&state, 0), vec![CellStatus::Correct; 5]);
    }

    #[test]
    fn perfect_guess_wins_on_last_row() {
        let mut state = GameState::default();
        for _ in 0..LAST_ROW {
            state = guess(state, "XXXXX");
        }
        assert_eq!(state.active_row(), LAST_ROW);

        state = guess(state, "CURLY");
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn imperfect_guess_advances_row() {
        let state = guess(GameState::default(), "UCRLY");

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.active_row(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(
            row_statuses(&state, 0),
            vec![
                CellStatus::Present,
                CellStatus::Present,
                CellStatus::Correct,
                CellStatus::Correct,
                CellStatus::Correct,
            ]
        );
    }

    #[test]
    fn sixth_miss_loses_and_locks() {
        let mut state = GameState::default();
        for _ in 0..MAX_GUESSES {
            state = guess(state, "XXXXX");
        }

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.settled_rows(), MAX_GUESSES);
        for row in 0..MAX_GUESSES {
            assert_eq!(row_statuses(&state, row), vec![CellStatus::Absent; 5]);
        }

        for intent in [
            Intent::TypeLetter('A'),
            Intent::DeleteLetter,
            Intent::SubmitGuess,
        ] {
            assert_eq!(apply(state.clone(), intent), state);
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let answer = Word::new("spool").unwrap();
        let mid_game = type_word(guess(GameState::new(answer.clone()), "XXXXX"), "AB");

        let reset = apply(mid_game, Intent::Reset);
        assert_eq!(reset, GameState::new(answer));
        assert_eq!(apply(reset.clone(), Intent::Reset), reset);
    }

    #[test]
    fn reset_after_win_unlocks() {
        let won = guess(GameState::default(), "CURLY");
        let fresh = apply(won, Intent::Reset);

        assert_eq!(fresh, GameState::default());
        assert_eq!(apply(fresh, Intent::TypeLetter('a')).cursor(), 1);
    }

    #[test]
    fn engine_dispatch_publishes_latest_state() {
        let mut engine = GameEngine::default();
        let before = engine.state().clone();

        engine.dispatch(Intent::TypeLetter('q'));
        assert_eq!(engine.state().cursor(), 1);
        assert_eq!(before.cursor(), 0);
    }

    #[test]
    fn engine_enter_guess_drops_extra_letters() {
        let mut engine = GameEngine::default();
        let state = engine.enter_guess("curlyz");

        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn engine_enter_guess_short_word_stays_typing() {
        let mut engine = GameEngine::default();
        let state = engine.enter_guess("cur");

        assert_eq!(state.cursor(), 3);
        assert_eq!(state.active_row(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
    }
}
