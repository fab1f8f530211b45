//! Wardle
//!
//! A single-session five-letter word guessing game. The rules live in a pure
//! reducer over immutable snapshots; the terminal front ends only translate key
//! presses into intents and draw whatever snapshot comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use wardle::core::Word;
//! use wardle::game::{GameEngine, GameStatus, Intent};
//!
//! let mut engine = GameEngine::new(Word::default_answer());
//! for ch in "curly".chars() {
//!     engine.dispatch(Intent::TypeLetter(ch));
//! }
//! let state = engine.dispatch(Intent::SubmitGuess);
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Guess evaluation and round progression
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
