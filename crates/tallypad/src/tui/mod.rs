//! TUI front-end for the calculator
//!
//! Thin presentation layer: buttons and keys dispatch engine
//! operations, the display panel mirrors the engine's current input.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUI};
