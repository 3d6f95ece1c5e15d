//! TUI application state
//!
//! Pure dispatch glue: every button maps to exactly one engine
//! operation, and the display panel re-reads the engine afterwards.
//! The engine's single listener slot is left to embedding applications.

use crate::core::{CalculatorEngine, Operator, ResetAction};
use crate::tui::keypad::{ButtonAction, Keypad};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator engine (owns all logic)
    engine: CalculatorEngine,
    /// The keypad, tracking the last highlighted button
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: CalculatorEngine::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Creates an app around an existing engine (e.g. a restored one)
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display string (`0` when nothing has been typed)
    #[must_use]
    pub fn display(&self) -> &str {
        let input = self.engine.current_input();
        if input.is_empty() {
            "0"
        } else {
            input
        }
    }

    /// Returns the pending-operation line, e.g. `5 +`
    #[must_use]
    pub fn pending(&self) -> String {
        match (self.engine.reserved(), self.engine.operator()) {
            (Some(reserved), op) if op != Operator::None => {
                format!("{reserved} {}", op.symbol())
            }
            _ => String::new(),
        }
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches a button action to the engine and highlights the button
    pub fn dispatch(&mut self, action: ButtonAction) {
        self.keypad.highlight_action(action);

        match action {
            ButtonAction::Digit(d) => self.engine.add_input(&d.to_string()),
            ButtonAction::Decimal => self.engine.add_decimal_point(),
            ButtonAction::Operator(op) => self.engine.set_operator(op),
            ButtonAction::Equals => self.engine.evaluate(),
            ButtonAction::ClearAll => self.engine.reset_input(ResetAction::Full),
            ButtonAction::ClearEntry => self.engine.reset_input(ResetAction::Clear),
            ButtonAction::Delete => self.engine.reset_input(ResetAction::Delete),
            ButtonAction::Negate => self.engine.negate(),
        }
    }

    /// Dispatches the button at a keypad index, if any
    pub fn dispatch_button(&mut self, index: usize) {
        if let Some(action) = self.keypad.get_button(index).map(|b| b.action) {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut CalculatorApp, actions: &[ButtonAction]) {
        for action in actions {
            app.dispatch(*action);
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert_eq!(app.pending(), "");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_engine() {
        let mut engine = CalculatorEngine::new();
        engine.add_input("9");
        let app = CalculatorApp::with_engine(engine);
        assert_eq!(app.display(), "9");
    }

    // ===== Dispatch tests =====

    #[test]
    fn test_digit_dispatch() {
        let mut app = CalculatorApp::new();
        press(&mut app, &[ButtonAction::Digit(4), ButtonAction::Digit(2)]);
        assert_eq!(app.display(), "42");
    }

    #[test]
    fn test_full_calculation() {
        let mut app = CalculatorApp::new();
        press(
            &mut app,
            &[
                ButtonAction::Digit(5),
                ButtonAction::Operator(Operator::Add),
                ButtonAction::Digit(3),
                ButtonAction::Equals,
            ],
        );
        assert_eq!(app.display(), "8");
    }

    #[test]
    fn test_decimal_dispatch() {
        let mut app = CalculatorApp::new();
        press(&mut app, &[ButtonAction::Decimal, ButtonAction::Digit(5)]);
        assert_eq!(app.display(), "0.5");
    }

    #[test]
    fn test_negate_dispatch() {
        let mut app = CalculatorApp::new();
        press(&mut app, &[ButtonAction::Digit(7), ButtonAction::Negate]);
        assert_eq!(app.display(), "-7");
    }

    #[test]
    fn test_clear_all_dispatch() {
        let mut app = CalculatorApp::new();
        press(
            &mut app,
            &[
                ButtonAction::Digit(5),
                ButtonAction::Operator(Operator::Add),
                ButtonAction::ClearAll,
            ],
        );
        assert_eq!(app.display(), "0");
        assert_eq!(app.pending(), "");
    }

    #[test]
    fn test_delete_dispatch() {
        let mut app = CalculatorApp::new();
        press(
            &mut app,
            &[
                ButtonAction::Digit(1),
                ButtonAction::Digit(2),
                ButtonAction::Delete,
            ],
        );
        assert_eq!(app.display(), "1");
    }

    #[test]
    fn test_dispatch_button_by_index() {
        let mut app = CalculatorApp::new();
        let seven = app.keypad().find_button_by_action(ButtonAction::Digit(7));
        app.dispatch_button(seven.unwrap());
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_dispatch_button_out_of_bounds() {
        let mut app = CalculatorApp::new();
        app.dispatch_button(999); // no-op
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_dispatch_highlights_button() {
        let mut app = CalculatorApp::new();
        app.dispatch(ButtonAction::Digit(5));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].action, ButtonAction::Digit(5));
    }

    // ===== Pending line tests =====

    #[test]
    fn test_pending_shows_reserved_and_operator() {
        let mut app = CalculatorApp::new();
        press(
            &mut app,
            &[ButtonAction::Digit(5), ButtonAction::Operator(Operator::Add)],
        );
        assert_eq!(app.pending(), "5 +");
    }

    #[test]
    fn test_pending_clears_after_equals() {
        let mut app = CalculatorApp::new();
        press(
            &mut app,
            &[
                ButtonAction::Digit(5),
                ButtonAction::Operator(Operator::Add),
                ButtonAction::Digit(3),
                ButtonAction::Equals,
            ],
        );
        assert_eq!(app.pending(), "");
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
