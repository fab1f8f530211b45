//! Formatting utilities for terminal output

use crate::core::{Cell, CellStatus, Row, status_emoji};
use crate::game::{GameState, GameStatus};
use colored::{ColoredString, Colorize};

/// Shown once when the answer is found
pub const WIN_MESSAGE: &str = "You Win!";

/// Shown once when the last row is used up
pub const LOSE_MESSAGE: &str = "Not your lucky day! Try again!";

/// End-of-game notification for a status, if the game is over
#[must_use]
pub const fn end_of_game_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Won => Some(WIN_MESSAGE),
        GameStatus::Lost => Some(LOSE_MESSAGE),
        GameStatus::InProgress => None,
    }
}

/// Format a row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter().map(|cell| status_emoji(cell.status())).collect()
}

/// Emoji grid of the settled rows, one line per guess
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    state
        .board()
        .rows()
        .iter()
        .take(state.settled_rows())
        .map(row_to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A three-column colored tile for one cell
#[must_use]
pub fn tile(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter().unwrap_or('·'));
    match cell.status() {
        CellStatus::Empty => text.bright_black(),
        CellStatus::Typing => text.bright_white().bold(),
        CellStatus::Correct => text.white().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Absent => text.white().on_bright_black(),
    }
}

/// A row of colored tiles separated by single spaces
#[must_use]
pub fn row_to_tiles(row: &Row) -> String {
    row.iter()
        .map(|&cell| tile(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, Intent};

    #[test]
    fn end_of_game_messages() {
        assert_eq!(end_of_game_message(GameStatus::Won), Some("You Win!"));
        assert_eq!(
            end_of_game_message(GameStatus::Lost),
            Some("Not your lucky day! Try again!")
        );
        assert_eq!(end_of_game_message(GameStatus::InProgress), None);
    }

    #[test]
    fn empty_row_emoji() {
        let row = [Cell::EMPTY; 5];
        assert_eq!(row_to_emoji(&row), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn share_grid_lists_settled_rows_only() {
        let mut engine = GameEngine::default();
        engine.enter_guess("ucrly");
        engine.dispatch(Intent::TypeLetter('c'));
        assert_eq!(share_grid(engine.state()), "🟨🟨🟩🟩🟩");

        engine.dispatch(Intent::DeleteLetter);
        engine.enter_guess("curly");
        assert_eq!(share_grid(engine.state()), "🟨🟨🟩🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tiles_show_letters() {
        let row = [Cell::typing(b'A'); 5];
        let tiles = row_to_tiles(&row);
        assert_eq!(tiles.matches('A').count(), 5);

        let empty = tile(Cell::EMPTY).to_string();
        assert!(empty.contains('·'));
    }
}
