//! Game engine
//!
//! Round progression and input handling as a pure reducer over immutable
//! snapshots, plus a small owner that dispatches intents in order.

mod engine;
mod intent;
mod state;

pub use engine::{GameEngine, apply};
pub use intent::Intent;
pub use state::{GameState, GameStatus};
