//! Keyboard input handling
//!
//! Maps crossterm key events onto keypad button actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operator;
use crate::tui::keypad::ButtonAction;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(ButtonAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(ButtonAction::ClearAll),
                KeyCode::Char('u') => KeyAction::Press(ButtonAction::ClearEntry),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Press(ButtonAction::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.' | ',') => KeyAction::Press(ButtonAction::Decimal),
            KeyCode::Char('+') => KeyAction::Press(ButtonAction::Operator(Operator::Add)),
            KeyCode::Char('-') => KeyAction::Press(ButtonAction::Operator(Operator::Subtract)),
            KeyCode::Char('*') => KeyAction::Press(ButtonAction::Operator(Operator::Multiply)),
            KeyCode::Char('/') => KeyAction::Press(ButtonAction::Operator(Operator::Divide)),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(ButtonAction::Equals),
            KeyCode::Char('n') => KeyAction::Press(ButtonAction::Negate),
            KeyCode::Char('c') => KeyAction::Press(ButtonAction::ClearAll),
            KeyCode::Char('e') => KeyAction::Press(ButtonAction::ClearEntry),
            KeyCode::Backspace => KeyAction::Press(ButtonAction::Delete),
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
