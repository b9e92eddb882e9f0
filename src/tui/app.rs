//! Presentation state for the terminal shell.

use super::input::{Intent, move_cursor};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use strictly_reversi::{Board, Coordinate, Disk, DiskPlacement, Game};
use tracing::debug;

/// What the terminal shows, separate from the game the flow owns.
///
/// `view` lags behind the flow's board while a redraw is running; it is
/// updated one [`DiskPlacement`] at a time.
#[derive(Debug)]
pub struct App {
    view: Board,
    cursor: Coordinate,
    thinking: [bool; 2],
    pass_pending: bool,
    confirm_reset: bool,
    animating: Option<(Coordinate, Instant)>,
    status_message: String,
    quit: bool,
}

impl App {
    /// Creates the shell state with an empty board.
    pub fn new() -> Self {
        Self {
            view: Board::new(),
            cursor: Coordinate::new(3, 3),
            thinking: [false; 2],
            pass_pending: false,
            confirm_reset: false,
            animating: None,
            status_message: String::new(),
            quit: false,
        }
    }

    /// The board as currently drawn.
    pub fn view(&self) -> &Board {
        &self.view
    }

    /// Cursor position.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Whether `side` is thinking.
    pub fn is_thinking(&self, side: Disk) -> bool {
        self.thinking[side.index()]
    }

    /// Whether the pass alert is showing.
    pub fn pass_pending(&self) -> bool {
        self.pass_pending
    }

    /// Whether a reset is awaiting confirmation.
    pub fn confirm_reset(&self) -> bool {
        self.confirm_reset
    }

    /// The cell being animated, if any.
    pub fn animating(&self) -> Option<Coordinate> {
        self.animating.map(|(at, _)| at)
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Sets the status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Takes a full snapshot from a waiting state.
    pub fn show_game(&mut self, game: &Game) {
        self.view = game.board().clone();
        self.pass_pending = false;
        self.animating = None;
    }

    /// Draws one cell. Returns true when the caller must wait for the animation.
    pub fn place(&mut self, placement: DiskPlacement, animation: Duration) -> bool {
        self.view.set_disk(placement.disk, placement.coordinate);
        if placement.animated && !animation.is_zero() {
            self.animating = Some((placement.coordinate, Instant::now() + animation));
            true
        } else {
            false
        }
    }

    /// Clears the animation once its time is up. Returns true if one ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.animating {
            Some((_, deadline)) if now >= deadline => {
                self.animating = None;
                true
            }
            _ => false,
        }
    }

    /// Cuts the animation short. Returns true if one was running.
    pub fn skip_animation(&mut self) -> bool {
        self.animating.take().is_some()
    }

    /// Updates the thinking indicator.
    pub fn set_thinking(&mut self, thinking: [bool; 2]) {
        self.thinking = thinking;
    }

    /// Shows the pass alert.
    pub fn alert_pass(&mut self) {
        self.pass_pending = true;
    }

    /// Maps a key press to an intent, updating cursor and prompts on the way.
    pub fn intent_for(&mut self, key: KeyCode) -> Option<Intent> {
        if self.confirm_reset {
            self.confirm_reset = false;
            return Some(match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => Intent::ConfirmReset,
                _ => Intent::CancelReset,
            });
        }

        let intent = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => Intent::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                Intent::MoveCursor(key)
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.pass_pending => Intent::AcceptPass,
            KeyCode::Enter | KeyCode::Char(' ') => Intent::Place,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.confirm_reset = true;
                Intent::RequestReset
            }
            KeyCode::Char('1') => Intent::ToggleControl(Disk::Dark),
            KeyCode::Char('2') => Intent::ToggleControl(Disk::Light),
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::SkipAnimation,
            _ => return None,
        };

        debug!(?intent, "Key mapped");
        if intent == Intent::Quit {
            self.quit = true;
        }
        Some(intent)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
