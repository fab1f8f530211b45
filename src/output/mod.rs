//! Terminal output formatting
//!
//! Display utilities for boards, CLI results and end-of-game notices.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_board, write_replay_result};
