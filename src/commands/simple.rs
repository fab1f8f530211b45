//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::core::{MAX_GUESSES, Word};
use crate::game::{GameEngine, GameStatus, Intent};
use crate::output::display::write_board;
use crate::output::formatters::{end_of_game_message, share_grid};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(answer: Word) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(answer, stdin.lock(), stdout.lock())
}

/// Run the line mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(answer: Word, mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════╗")?;
    writeln!(out, "║              WARDLE              ║")?;
    writeln!(out, "╚══════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Commands: 'quit' to exit, 'reset' to start over\n")?;

    let mut engine = GameEngine::new(answer);

    loop {
        write_board(&mut out, engine.state().board())?;

        let status = engine.state().status();
        if let Some(message) = end_of_game_message(status) {
            let banner = match status {
                GameStatus::Won => message.bright_green().bold(),
                _ => message.bright_red().bold(),
            };
            writeln!(out, "\n{banner}")?;
            writeln!(out, "{}\n", share_grid(engine.state()))?;

            match prompt(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    engine.dispatch(Intent::Reset);
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let turn = engine.state().active_row() + 1;
        let Some(line) = prompt(&mut input, &mut out, &format!("Guess {turn}/{MAX_GUESSES}"))? else {
            break;
        };

        match line.as_str() {
            "quit" | "q" | "exit" => break,
            "reset" | "new" => {
                engine.dispatch(Intent::Reset);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            guess => {
                if let Err(e) = Word::new(guess) {
                    writeln!(out, "❌ {e}\n")?;
                    continue;
                }
                engine.enter_guess(guess);
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt for one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}
