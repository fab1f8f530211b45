//! Game state snapshot

use crate::core::{Board, Word};

/// Outcome of the session so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether input is locked
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Immutable snapshot of one game
///
/// A new snapshot is produced for every accepted intent; older snapshots are
/// never touched, so a renderer may keep a reference to one while the next is
/// being computed.
///
/// While the game is in progress the rows before `active_row` are settled and
/// the rows after it are empty. Once the game is over, `active_row` stays on
/// the last submitted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_row: usize,
    pub(crate) cursor: usize,
    pub(crate) answer: Word,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Fresh state: empty board, first row, cursor at 0
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            board: Board::new(),
            active_row: 0,
            cursor: 0,
            answer,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Row currently being typed (or the final submitted row once over)
    #[inline]
    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    /// Next write position within the active row
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of rows that have been scored
    #[must_use]
    pub const fn settled_rows(&self) -> usize {
        if self.status.is_over() {
            self.active_row + 1
        } else {
            self.active_row
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Word::default_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;

    #[test]
    fn new_state_is_blank() {
        let state = GameState::default();
        assert_eq!(state.active_row(), 0);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.answer().text(), "CURLY");
        assert_eq!(state.settled_rows(), 0);
        assert!((0..MAX_GUESSES).all(|row| state.board().is_row_empty(row)));
    }

    #[test]
    fn settled_rows_counts_final_row_once_over() {
        let mut state = GameState::default();
        state.active_row = 2;
        assert_eq!(state.settled_rows(), 2);

        state.status = GameStatus::Won;
        assert_eq!(state.settled_rows(), 3);
    }

    #[test]
    fn status_lock() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
