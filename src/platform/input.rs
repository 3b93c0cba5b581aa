//! Keyboard and button input mapping

use crate::sim::TickInput;

/// One-shot actions triggered by a key press or a page button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a run, restart after game over, or resume
    Start,
    TogglePause,
    Reset,
    ToggleSound,
}

/// On-screen movement buttons (touch or mouse)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
}

/// Held input, sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_key: bool,
    right_key: bool,
    fire_key: bool,
    left_button: bool,
    right_button: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press (`KeyboardEvent.key` value)
    ///
    /// Returns a command for keys that trigger one.
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        self.set_key(key, true);
        match key {
            "Enter" => Some(Command::Start),
            "Escape" | "p" | "P" => Some(Command::TogglePause),
            "m" | "M" => Some(Command::ToggleSound),
            _ => None,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.set_key(key, false);
    }

    /// Keys the page should not scroll on
    pub fn is_game_key(key: &str) -> bool {
        matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
    }

    fn set_key(&mut self, key: &str, down: bool) {
        match key {
            "ArrowLeft" | "a" | "A" => self.left_key = down,
            "ArrowRight" | "d" | "D" => self.right_key = down,
            " " | "ArrowUp" | "w" | "W" => self.fire_key = down,
            _ => {}
        }
    }

    /// Press or release a movement button; the shoot button has no held state
    pub fn set_button(&mut self, button: TouchButton, down: bool) {
        match button {
            TouchButton::Left => self.left_button = down,
            TouchButton::Right => self.right_button = down,
        }
    }

    /// Drop everything held (focus lost, so key-up events may never arrive)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.left_key || self.left_button,
            move_right: self.right_key || self.right_button,
            fire: self.fire_key,
        }
    }
}
