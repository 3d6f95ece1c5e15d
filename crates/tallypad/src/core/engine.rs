//! The calculator engine state machine
//!
//! Keys feed digits into a display string; an operator press reserves
//! the current operand; evaluation applies the single pending binary
//! operation and writes the formatted result back into the display.
//! Parse failures are swallowed and logged, never surfaced: the engine
//! keeps its last good state.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{EngineError, EngineResult, NumberFormat, Operator};

/// Input-clearing scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    /// Clear the input and the pending operator, as at power-on.
    Full,
    /// Clear the input only; operator and reserved operand stay (clear-entry).
    Clear,
    /// Remove the last character of the input (backspace).
    Delete,
}

/// Serializable snapshot of the four engine state fields.
///
/// The encoding is JSON; the operator is stored by variant name and the
/// reserved operand may be null. Round-trip fidelity is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    current_input: String,
    reserved: Option<String>,
    operator: Operator,
    finalized: bool,
}

type InputListener = Box<dyn FnMut(&str)>;

/// Stateful chained calculator engine.
///
/// Mirrors the keys of a classic pocket calculator: one pending binary
/// operation at a time, evaluated left-to-right with no precedence.
/// Every successful mutating operation notifies the single registered
/// observer synchronously with the current display string.
///
/// # Example
///
/// ```rust
/// use tallypad::prelude::*;
///
/// let mut engine = CalculatorEngine::new();
/// engine.add_input("5");
/// engine.set_operator(Operator::Add);
/// engine.add_input("3");
/// engine.evaluate();
/// assert_eq!(engine.current_input(), "8");
/// ```
pub struct CalculatorEngine {
    current_input: String,
    reserved: Option<String>,
    operator: Operator,
    finalized: bool,
    listener: Option<InputListener>,
    format: NumberFormat,
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("current_input", &self.current_input)
            .field("reserved", &self.reserved)
            .field("operator", &self.operator)
            .field("finalized", &self.finalized)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with the default (en-US) number format.
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(NumberFormat::default())
    }

    /// Creates an engine with a custom locale number format.
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            current_input: String::new(),
            reserved: None,
            operator: Operator::None,
            finalized: false,
            listener: None,
            format,
        }
    }

    /// Registers the observer, replacing any previous one.
    pub fn set_input_listener(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Returns the current display string.
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Returns the pending operator.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the reserved (left-hand) operand, if an operator was set.
    #[must_use]
    pub fn reserved(&self) -> Option<&str> {
        self.reserved.as_deref()
    }

    /// Returns true when the next digit press starts fresh input.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Returns the engine's number format.
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Appends a token (normally a single digit glyph) to the input.
    ///
    /// A finalized display is cleared first, so the token starts a
    /// fresh number after a result or an operator press. The token is
    /// not validated.
    pub fn add_input(&mut self, token: &str) {
        if self.finalized {
            self.current_input.clear();
            self.finalized = false;
        }

        self.current_input.push_str(token);
        self.notify();
    }

    /// Clears input according to the given scope.
    pub fn reset_input(&mut self, action: ResetAction) {
        match action {
            ResetAction::Full => {
                self.current_input.clear();
                self.operator = Operator::None;
                self.finalized = false;
            }
            ResetAction::Clear => {
                self.current_input.clear();
            }
            ResetAction::Delete => {
                self.current_input.pop();
            }
        }

        self.notify();
    }

    /// Queues an operator, evaluating any previously pending one first.
    ///
    /// The implicit evaluation's failure is swallowed and logged; the
    /// engine continues with whatever the display holds. The current
    /// display is snapshotted as the reserved operand. No notification
    /// of its own (the implicit calculation, if any, already notified).
    pub fn set_operator(&mut self, op: Operator) {
        if self.operator != Operator::None {
            if let Err(err) = self.calculate() {
                warn!(%err, "implicit calculation failed");
            }
        }

        self.operator = op;
        self.reserved = Some(self.current_input.clone());
        self.finalized = true;
    }

    /// Appends the locale decimal separator, at most once per number.
    ///
    /// An empty display gains a leading `0` so the result reads `0.`.
    pub fn add_decimal_point(&mut self) {
        let separator = self.format.decimal_separator();
        if !self.current_input.contains(separator) {
            if self.current_input.is_empty() {
                self.current_input.push('0');
            }
            self.current_input.push(separator);
        }

        self.notify();
    }

    /// Toggles a leading minus sign, even on empty input.
    pub fn negate(&mut self) {
        if let Some(rest) = self.current_input.strip_prefix('-') {
            self.current_input = rest.to_string();
        } else {
            self.current_input.insert(0, '-');
        }

        self.notify();
    }

    /// Evaluates the pending operation (the `=` key).
    ///
    /// No-op until an operator has ever been set. On success the result
    /// is finalized and the operator cleared; on failure the engine
    /// logs and keeps its state, with no notification.
    pub fn evaluate(&mut self) {
        if self.reserved.is_none() {
            return;
        }

        match self.calculate() {
            Ok(()) => {
                self.finalized = true;
                self.operator = Operator::None;
                self.notify();
            }
            Err(err) => warn!(%err, "calculation failed"),
        }
    }

    /// Exports the engine state as an opaque JSON snapshot.
    ///
    /// Returns `None` (after logging) if encoding fails.
    #[must_use]
    pub fn instance_state(&self) -> Option<String> {
        let snapshot = EngineSnapshot {
            current_input: self.current_input.clone(),
            reserved: self.reserved.clone(),
            operator: self.operator,
            finalized: self.finalized,
        };

        match serde_json::to_string(&snapshot) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(%err, "unable to build instance state");
                None
            }
        }
    }

    /// Restores engine state from an [`Self::instance_state`] snapshot.
    ///
    /// Applied atomically on success, followed by a notification. A
    /// malformed snapshot is logged and leaves the state untouched.
    pub fn restore_state(&mut self, state: &str) {
        match serde_json::from_str::<EngineSnapshot>(state) {
            Ok(snapshot) => {
                self.current_input = snapshot.current_input;
                self.reserved = snapshot.reserved;
                self.operator = snapshot.operator;
                self.finalized = snapshot.finalized;
                self.notify();
            }
            Err(err) => {
                warn!(
                    err = %EngineError::Snapshot(err.to_string()),
                    "unable to restore state"
                );
            }
        }
    }

    /// Applies the pending operation to `reserved` and the display.
    ///
    /// Returns without effect when no operator is queued. The display
    /// is only written after a successful parse + compute + format, so
    /// a failure leaves the state exactly as it was.
    fn calculate(&mut self) -> EngineResult<()> {
        if self.operator == Operator::None {
            return Ok(());
        }

        let reserved = self.reserved.as_deref().ok_or(EngineError::MissingOperand)?;
        let lhs = self.format.parse(reserved)?;
        let rhs = self.format.parse(&self.current_input)?;

        let Some(result) = self.operator.apply(lhs, rhs) else {
            return Ok(());
        };
        debug!(lhs, op = self.operator.symbol(), rhs, result, "calculated");

        self.current_input = self.format.format(result);
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.current_input);
        }
    }
}
