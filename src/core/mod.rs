//! Core domain types for the guessing game
//!
//! This module contains the fundamental value types: cells, the board, words
//! and the scoring rule. Everything here is plain data with no I/O.

mod board;
mod cell;
mod feedback;
mod word;

pub use board::{Board, LAST_ROW, MAX_GUESSES, Row, WORD_LENGTH};
pub use cell::{Cell, CellStatus};
pub use feedback::{Feedback, status_emoji};
pub use word::{DEFAULT_ANSWER, Word, WordError};
