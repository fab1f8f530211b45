//! Wardle - CLI
//!
//! Five-letter word guessing game with TUI and line modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use wardle::{
    commands::{ReplayConfig, replay_guesses, run_simple, score_word},
    core::{DEFAULT_ANSWER, Word},
    output::{print_score_result, write_replay_result},
};

#[derive(Parser)]
#[command(
    name = "wardle",
    about = "Guess the five-letter word in six tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer for this session (5 letters)
    #[arg(short, long, global = true, default_value = DEFAULT_ANSWER)]
    answer: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    /// Write logs to this file instead of stderr (required to see logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against the answer
    Score {
        /// The guess to score
        guess: String,
    },

    /// Play a list of guesses in order and show the final board
    Replay {
        /// Guesses, in the order they are entered
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let tui = matches!(command, Commands::Play);
    init_logging(cli.log_level, cli.log_file.as_deref(), tui)?;

    let answer = Word::new(cli.answer.trim())
        .with_context(|| format!("invalid answer '{}'", cli.answer))?;

    match command {
        Commands::Play => run_play_command(answer),
        Commands::Simple => run_simple(answer),
        Commands::Score { guess } => run_score_command(&guess, &answer),
        Commands::Replay { guesses } => run_replay_command(answer, guesses),
    }
}

/// Install the log subscriber
///
/// In TUI mode logs would draw over the alternate screen, so without a log
/// file nothing is installed.
fn init_logging(level: Level, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if tui => return Ok(()),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run_play_command(answer: Word) -> Result<()> {
    use wardle::interactive::{App, run_tui};

    let app = App::new(answer);
    run_tui(app)
}

fn run_score_command(guess: &str, answer: &Word) -> Result<()> {
    let result = score_word(guess, answer).with_context(|| format!("invalid guess '{guess}'"))?;
    print_score_result(&result);
    Ok(())
}

fn run_replay_command(answer: Word, guesses: Vec<String>) -> Result<()> {
    let config = ReplayConfig::new(answer, guesses);
    let result = replay_guesses(config).context("invalid guess in replay")?;
    write_replay_result(&mut std::io::stdout().lock(), &result)
        .context("failed to write replay result")
}
