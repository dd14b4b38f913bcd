//! Input handling.
//!
//! Terminal key events are mapped to UI-agnostic actions, and flap presses
//! are latched until the next physics frame consumes them.

use crate::game::FrameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags};

/// Keyboard enhancement requested at startup where the terminal supports it,
/// so repeats and releases arrive tagged instead of as presses.
pub const KEY_EVENT_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::REPORT_EVENT_TYPES;

/// Actions the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space or Up.
    Flap,
    /// R on the game-over screen.
    Replay,
    /// Q, Esc, or Ctrl-C.
    Quit,
    /// Any other key.
    Other,
}

/// Map a key event to an action.
///
/// Only key presses count. Release and auto-repeat events return `None`, so
/// holding Space flaps once on terminals that report event kinds (see
/// `KEY_EVENT_FLAGS`). Legacy terminals deliver auto-repeat as fresh presses.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Flap,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Replay,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

/// Holds a flap request between the key press and the frame that uses it.
#[derive(Debug, Default, Clone)]
pub struct InputLatch {
    flap_queued: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_flap(&mut self) {
        self.flap_queued = true;
    }

    pub fn is_flap_queued(&self) -> bool {
        self.flap_queued
    }

    /// Snapshot for the next frame. Clears the latch.
    pub fn take(&mut self) -> FrameInput {
        let input = FrameInput {
            flap_requested: self.flap_queued,
        };
        self.flap_queued = false;
        input
    }

    pub fn clear(&mut self) {
        self.flap_queued = false;
    }
}
