//! Tallypad - Chained Four-Function Calculator
//!
//! A classic pocket-calculator engine: digits accumulate into a display
//! string, an operator press reserves the left operand, and `=` applies
//! the single pending operation. Chained left-to-right evaluation, no
//! precedence, no expression parsing.
//!
//! The engine is the only component with logic; the optional `tui`
//! feature (on by default) adds a ratatui keypad front-end that is pure
//! event-dispatch glue.
//!
//! # Example
//!
//! ```rust
//! use tallypad::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.add_input("7");
//! engine.set_operator(Operator::Multiply);
//! engine.add_input("6");
//! engine.evaluate();
//! assert_eq!(engine.current_input(), "42");
//!
//! // State survives teardown/recreate cycles
//! let state = engine.instance_state().unwrap();
//! let mut restored = CalculatorEngine::new();
//! restored.restore_state(&state);
//! assert_eq!(restored.current_input(), "42");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        CalculatorEngine, EngineError, EngineResult, EngineSnapshot, NumberFormat, Operator,
        ResetAction,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}
