//! TUI application state and input handling

use crate::core::{MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{GameEngine, GameState, GameStatus, Intent};
use crate::output::formatters::end_of_game_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// End-of-game notification for the finished game, cleared on reset
    pub notice: Option<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// In-memory tally for this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses used (1..=6)
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, state: &GameState) {
        self.total_games += 1;
        if state.status() == GameStatus::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(state.settled_rows()) {
                *slot += 1;
            }
        }
    }
}

/// Translate a key press into an intent, or `None` if the key means nothing now
///
/// Letters, Backspace and Enter only reach the engine while the game is in
/// progress and when the cursor allows them. Reset is only offered once the
/// game is over.
#[must_use]
pub fn intent_for_key(code: KeyCode, state: &GameState) -> Option<Intent> {
    if state.status().is_over() {
        return match code {
            KeyCode::Enter | KeyCode::Char('r' | 'R') => Some(Intent::Reset),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() && state.cursor() < WORD_LENGTH => {
            Some(Intent::TypeLetter(c))
        }
        KeyCode::Backspace if state.cursor() > 0 => Some(Intent::DeleteLetter),
        KeyCode::Enter if state.cursor() == WORD_LENGTH => Some(Intent::SubmitGuess),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            engine: GameEngine::new(answer),
            messages: vec![
                Message {
                    text: "Guess the five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            notice: None,
            should_quit: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q' | 'Q') if self.state().status().is_over() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if let Some(intent) = intent_for_key(key.code, self.state()) {
            self.apply_intent(intent);
        } else if key.code == KeyCode::Enter && !self.state().status().is_over() {
            self.add_message("Not enough letters", MessageStyle::Error);
        }
    }

    /// Dispatch an intent and react to the game ending
    pub fn apply_intent(&mut self, intent: Intent) {
        let before = self.state().status();
        self.engine.dispatch(intent);
        let after = self.state().status();

        if intent == Intent::Reset {
            self.notice = None;
            self.messages.clear();
            self.add_message("New game started!", MessageStyle::Info);
            return;
        }

        if before.is_over() || !after.is_over() {
            return;
        }

        debug!(status = ?after, "game finished");
        self.stats.record(self.engine.state());

        let Some(text) = end_of_game_message(after) else {
            return;
        };
        let style = if after == GameStatus::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.notice = Some(Message {
            text: text.to_string(),
            style,
        });
        self.add_message(text, style);
        self.add_message("Press Enter or 'r' to play again, 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
