use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use facematch_core::{
    dispatch, messages, AdvanceTicket, AttemptResult, InputOutcome, InputTarget, MenuAction,
    PuzzleConfig, PuzzleState, RandomSource, RegionId, SimpleRng, ATTRIBUTE_VALUES, TARGET_TILE,
};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::time::{Duration, Instant};

/// Rows in the picker: shapes, colors, expressions
pub const PICKER_ROWS: usize = 3;

/// How long status messages stay up, in ticks
const MESSAGE_TICKS: u32 = 30;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Where the keyboard cursor is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The question mark in the mystery row
    Target,
    /// A picker cell
    Picker { row: usize, col: usize },
}

/// `rand`'s thread RNG as a puzzle random source
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// The main application state
pub struct App {
    pub puzzle: PuzzleState<Box<dyn RandomSource>>,
    pub focus: Focus,
    pub theme: Theme,
    /// Help text overlay
    pub show_help: bool,
    /// Message to display
    pub message: Option<String>,
    message_timer: u32,
    /// Auto-advance waiting for its deadline
    pending: Option<(AdvanceTicket, Instant)>,
}

impl App {
    /// Seeded games are reproducible; otherwise levels come from the thread RNG
    pub fn new(config: PuzzleConfig, theme: Theme) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SimpleRng::with_seed(seed)),
            None => Box::new(ThreadRandom::new()),
        };
        Self {
            puzzle: PuzzleState::with_rng(config, rng),
            focus: Focus::Picker { row: 0, col: 0 },
            theme,
            show_help: false,
            message: None,
            message_timer: 0,
            pending: None,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update animations, messages and the auto-advance
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        self.puzzle.tick();

        if let Some((ticket, due)) = self.pending {
            if now >= due {
                self.pending = None;
                if self.puzzle.fire_advance(ticket) {
                    self.level_loaded();
                }
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = MESSAGE_TICKS;
    }

    /// Whether an auto-advance is waiting
    pub fn advance_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        self.handle_key_at(key, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> AppAction {
        if self.show_help {
            // Any key closes the help
            self.show_help = false;
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(0, 1),
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1, 0),
            KeyCode::Enter => {
                if let Some(target) = self.focused_target() {
                    self.apply(target, now);
                }
            }
            KeyCode::Char(' ') => self.apply(InputTarget::Target(TARGET_TILE), now),
            KeyCode::Char('n') => self.apply(InputTarget::Menu(MenuAction::Next), now),
            KeyCode::Char('p') => self.apply(InputTarget::Menu(MenuAction::Previous), now),
            KeyCode::Char('?') => self.apply(InputTarget::Menu(MenuAction::Help), now),
            KeyCode::Char('a') => self.apply(InputTarget::Menu(MenuAction::About), now),
            _ => {}
        }
        AppAction::Continue
    }

    /// The input the focused cell stands for
    pub fn focused_target(&self) -> Option<InputTarget> {
        match self.focus {
            Focus::Target => dispatch(RegionId::Mystery, TARGET_TILE),
            Focus::Picker { row, col } => dispatch(RegionId::Picker, row * ATTRIBUTE_VALUES + col),
        }
    }

    fn move_focus(&mut self, dx: isize, dy: isize) {
        self.focus = match self.focus {
            Focus::Target if dy > 0 => Focus::Picker { row: 0, col: 0 },
            Focus::Target => Focus::Target,
            Focus::Picker { row: 0, .. } if dy < 0 => Focus::Target,
            Focus::Picker { row, col } => Focus::Picker {
                row: row.saturating_add_signed(dy).min(PICKER_ROWS - 1),
                col: col.saturating_add_signed(dx).min(ATTRIBUTE_VALUES - 1),
            },
        };
    }

    fn apply(&mut self, target: InputTarget, now: Instant) {
        match self.puzzle.apply(target) {
            InputOutcome::Selected(..) => {}
            InputOutcome::Attempt(AttemptResult::Ignored) => {}
            InputOutcome::Attempt(AttemptResult::Mismatched) => {
                self.show_message(messages::TRY_AGAIN)
            }
            InputOutcome::Attempt(AttemptResult::Matched { advance }) => {
                if let Some(ticket) = advance {
                    self.pending = Some((ticket, now + ticket.delay()));
                    self.show_message(messages::BRAVO);
                }
            }
            InputOutcome::LevelChanged(_) => {
                self.pending = None;
                self.level_loaded();
            }
            InputOutcome::FrontEnd(MenuAction::Help) => self.show_help = true,
            InputOutcome::FrontEnd(MenuAction::About) => {
                self.show_message(&messages::credits_line())
            }
            InputOutcome::FrontEnd(_) => {}
        }
    }

    fn level_loaded(&mut self) {
        let status = messages::level_status(self.puzzle.display_level());
        self.show_message(&status);
    }
}
