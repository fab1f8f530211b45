//! Command implementations

pub mod replay;
pub mod simple;
pub mod score;

pub use replay::{ReplayConfig, ReplayResult, replay_guesses};
pub use simple::{run_simple, run_simple_with};
pub use score::{ScoreResult, score_word};
