//! Interactive TUI interface
//!
//! Forwards key presses to the game engine and draws each published snapshot.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, intent_for_key, run_tui};
pub use rendering::{cell_style, ui};
