//! The 6×5 letter grid

use super::cell::Cell;

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Guesses per game
pub const MAX_GUESSES: usize = 6;

/// Index of the final row; submitting it without a perfect match loses the game
pub const LAST_ROW: usize = MAX_GUESSES - 1;

/// One guess worth of cells
pub type Row = [Cell; WORD_LENGTH];

/// Fixed grid of `MAX_GUESSES` rows of `WORD_LENGTH` cells
///
/// `with_*` methods return a new board and leave `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    /// A board with every cell empty
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[Cell::EMPTY; WORD_LENGTH]; MAX_GUESSES],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// # Panics
    /// Panics if `index >= MAX_GUESSES`
    #[inline]
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// # Panics
    /// Panics if `row >= MAX_GUESSES` or `col >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    #[must_use]
    pub const fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.rows[row][col] = cell;
        self
    }

    #[must_use]
    pub const fn with_row(mut self, index: usize, row: Row) -> Self {
        self.rows[index] = row;
        self
    }

    /// The letters of a row, or `None` if any cell in it is empty
    #[must_use]
    pub fn row_letters(&self, index: usize) -> Option<[u8; WORD_LENGTH]> {
        let row = self.rows.get(index)?;
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(row) {
            *slot = cell.letter_byte()?;
        }
        Some(letters)
    }

    /// Whether every cell of the row is empty
    #[must_use]
    pub fn is_row_empty(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.iter().all(|cell| cell.is_empty()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.rows().len(), MAX_GUESSES);
        for index in 0..MAX_GUESSES {
            assert_eq!(board.row(index).len(), WORD_LENGTH);
            assert!(board.is_row_empty(index));
        }
    }

    #[test]
    fn with_cell_leaves_original_untouched() {
        let board = Board::new();
        let typed = board.with_cell(2, 3, Cell::typing(b'A'));

        assert!(board.cell(2, 3).is_empty());
        assert_eq!(typed.cell(2, 3).letter(), Some('A'));
        assert!(!typed.is_row_empty(2));
    }

    #[test]
    fn row_letters_requires_full_row() {
        let mut board = Board::new();
        for (col, &letter) in b"CURL".iter().enumerate() {
            board = board.with_cell(0, col, Cell::typing(letter));
        }
        assert_eq!(board.row_letters(0), None);

        board = board.with_cell(0, 4, Cell::typing(b'Y'));
        assert_eq!(board.row_letters(0), Some(*b"CURLY"));
    }

    #[test]
    fn row_letters_out_of_range() {
        assert_eq!(Board::new().row_letters(MAX_GUESSES), None);
        assert!(!Board::new().is_row_empty(MAX_GUESSES));
    }

    #[test]
    fn with_row_replaces_all_cells() {
        let row = [Cell::scored(b'X', CellStatus::Absent); WORD_LENGTH];
        let board = Board::new().with_row(LAST_ROW, row);
        assert_eq!(board.row(LAST_ROW), &row);
        assert!(board.is_row_empty(0));
    }
}
