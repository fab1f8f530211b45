//! Display functions for boards and command results

use super::formatters::{end_of_game_message, row_to_tiles};
use crate::commands::{ReplayResult, ScoreResult};
use crate::core::{Board, MAX_GUESSES, Word};
use crate::game::GameStatus;
use colored::Colorize;
use std::io::{self, Write};

/// Write the whole board, one row of tiles per line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        writeln!(out, "  {}", row_to_tiles(row))?;
    }
    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}   Answer: {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_white()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", row_to_tiles(&result.row));
    println!("  {}\n", result.feedback.to_emoji());

    if result.feedback.is_perfect() {
        println!("{}", "✅ Perfect match!".green().bold());
    } else {
        println!(
            "  Correct: {}   Present: {}",
            result.feedback.count_correct().to_string().green(),
            result.feedback.count_present().to_string().yellow()
        );
    }
}

/// Write the result of replaying a list of guesses
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_replay_result<W: Write>(out: &mut W, result: &ReplayResult) -> io::Result<()> {
    let state = &result.state;

    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "REPLAY".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(40).cyan())?;

    write_board(out, state.board())?;

    writeln!(out)?;
    match (state.status(), end_of_game_message(state.status())) {
        (GameStatus::Won, Some(message)) => {
            writeln!(
                out,
                "{} Solved in {} {}",
                message.green().bold(),
                state.settled_rows(),
                if state.settled_rows() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )?;
        }
        (_, Some(message)) => {
            writeln!(
                out,
                "{} The answer was {}",
                message.red().bold(),
                state.answer().text().bright_yellow().bold()
            )?;
        }
        (_, None) => {
            writeln!(
                out,
                "Still playing: {} of {MAX_GUESSES} guesses used",
                state.settled_rows()
            )?;
        }
    }

    if !result.ignored.is_empty() {
        let ignored: Vec<&str> = result.ignored.iter().map(Word::text).collect();
        writeln!(
            out,
            "{}",
            format!("Ignored after game end: {}", ignored.join(", ")).bright_black()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ReplayConfig, replay_guesses};
    use crate::game::GameEngine;

    #[test]
    fn write_board_prints_six_rows() {
        let mut engine = GameEngine::default();
        engine.enter_guess("spool");

        let mut out = Vec::new();
        write_board(&mut out, engine.state().board()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().next().unwrap().contains('S'));
    }

    fn replay_text(guesses: &[&str]) -> String {
        let config = ReplayConfig::new(
            Word::default_answer(),
            guesses.iter().map(ToString::to_string).collect(),
        );
        let result = replay_guesses(config).unwrap();

        let mut out = Vec::new();
        write_replay_result(&mut out, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn replay_report_for_win() {
        let text = replay_text(&["spool", "curly", "xxxxx"]);

        assert!(text.contains("You Win!"));
        assert!(text.contains("Solved in 2 guesses"));
        assert!(text.contains("Ignored after game end: XXXXX"));
    }

    #[test]
    fn replay_report_for_unfinished_game() {
        let text = replay_text(&["spool"]);
        assert!(text.contains("Still playing: 1 of 6 guesses used"));
    }

    #[test]
    fn replay_report_for_loss() {
        let text = replay_text(&["xxxxx"; 6]);
        assert!(text.contains("Not your lucky day! Try again!"));
        assert!(text.contains("CURLY"));
    }
}
