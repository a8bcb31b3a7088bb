//! TUI application state and logic

use crate::core::{HAND_SIZE, Hand, MAX_WORD_LEN};
use crate::engine::{Side, Winner};
use crate::game::{Battle, TurnReport};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub battle: Battle<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
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

/// Results across battles in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub rounds_played: usize,
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
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(battle: Battle<'a>) -> Self {
        let seed = battle.seed();

        Self {
            battle,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Spell a word from your letters and press Enter to attack.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Battle seed: {seed}"),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Power of the word being typed
    #[must_use]
    pub fn current_power(&self) -> u32 {
        self.battle.preview_power(&self.input_buffer)
    }

    /// Hand positions claimed by the letters typed so far
    #[must_use]
    pub fn claimed_positions(&self) -> [bool; HAND_SIZE] {
        claimed_positions(self.battle.player_hand(), &self.input_buffer)
    }

    pub fn submit_word(&mut self) {
        if self.input_buffer.is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return;
        }

        let word = std::mem::take(&mut self.input_buffer);
        match self.battle.submit(&word) {
            TurnReport::Rejected { word, reason } => {
                self.add_message(
                    &format!("❌ '{}' is not playable: {reason}", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            TurnReport::BotRedealt => {
                self.add_message(
                    "🤖 The bot had no word and drew a new hand. Attack again!",
                    MessageStyle::Info,
                );
            }
            TurnReport::Resolved(outcome) => {
                self.stats.rounds_played += 1;
                let (text, style) = match outcome.winner {
                    Winner::Player if outcome.hp_delta > 0 => (
                        format!("⚔️ Your attack lands! Bot loses {} HP", outcome.hp_delta),
                        MessageStyle::Success,
                    ),
                    Winner::Bot if outcome.hp_delta > 0 => (
                        format!("🛡️ The bot overpowers you! You lose {} HP", outcome.hp_delta),
                        MessageStyle::Error,
                    ),
                    _ => ("🤝 Evenly matched, no damage".to_string(), MessageStyle::Info),
                };
                self.add_message(&text, style);

                if self.battle.is_over() {
                    self.finish_game();
                }
            }
            TurnReport::GameOver { .. } => self.input_mode = InputMode::GameOver,
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        match self.battle.victor() {
            Some(Side::Player) => {
                self.stats.games_won += 1;
                self.add_message("🏆 VICTORY! The bot has fallen!", MessageStyle::Success);
            }
            Some(Side::Bot) => {
                self.add_message("💀 DEFEAT! The bot wins this time.", MessageStyle::Error);
            }
            None => self.add_message("⚖️ Both fighters fell!", MessageStyle::Info),
        }
        self.add_message("Press 'n' for a new battle or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.battle.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New battle started! Good luck.", MessageStyle::Info);
    }

    pub fn redeal(&mut self) {
        if self.battle.redeal_player_hand() {
            self.input_buffer.clear();
            self.add_message("🔄 You draw a new hand", MessageStyle::Info);
        } else if !self.battle.is_over() {
            self.add_message(
                "Your hand still spells a word, no redeal",
                MessageStyle::Error,
            );
        }
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.redeal(),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < MAX_WORD_LEN {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
        }
    }
}

/// Mark the leftmost unclaimed hand position for each typed letter
#[must_use]
pub fn claimed_positions(hand: &Hand, typed: &str) -> [bool; HAND_SIZE] {
    let mut claimed = [false; HAND_SIZE];

    for ch in typed.chars().map(|c| c.to_ascii_lowercase()) {
        if let Some(pos) = hand
            .letters()
            .iter()
            .enumerate()
            .position(|(i, &l)| l == ch && !claimed[i])
        {
            claimed[pos] = true;
        }
    }

    claimed
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let res = run_in_alternate_screen(app);

    // Restore terminal, even when setup or the session failed
    let restored = disable_raw_mode().and_then(|()| {
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
    });

    res?;
    restored?;
    Ok(())
}

fn run_in_alternate_screen(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app, event::read)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
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
