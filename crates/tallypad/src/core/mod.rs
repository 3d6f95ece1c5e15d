//! Core calculator engine
//!
//! The engine mirrors the keys of a physical calculator: digits
//! accumulate into a display string, an operator press reserves the
//! current operand, and evaluation applies exactly one pending binary
//! operation (chained left-to-right, no precedence).

pub mod engine;
pub mod format;
mod operator;

pub use engine::{CalculatorEngine, EngineSnapshot, ResetAction};
pub use format::NumberFormat;
pub use operator::Operator;

use thiserror::Error;

/// Result type for fallible engine internals.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors.
///
/// These never escape the engine's public key-press operations: the
/// engine catches them, logs, and keeps its last good state. They are
/// public so embedders using [`NumberFormat`] directly can match on
/// parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Operand text did not parse as a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A calculation was attempted before any operator reserved an operand.
    #[error("no reserved operand")]
    MissingOperand,

    /// An instance-state snapshot could not be encoded or decoded.
    #[error("malformed snapshot: {0}")]
    Snapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EngineError display tests =====

    #[test]
    fn test_error_display_invalid_number() {
        let err = EngineError::InvalidNumber("abc".into());
        assert_eq!(format!("{err}"), "invalid number: \"abc\"");
    }

    #[test]
    fn test_error_display_missing_operand() {
        let err = EngineError::MissingOperand;
        assert_eq!(format!("{err}"), "no reserved operand");
    }

    #[test]
    fn test_error_display_snapshot() {
        let err = EngineError::Snapshot("missing field".into());
        assert_eq!(format!("{err}"), "malformed snapshot: missing field");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(EngineError::MissingOperand);
        assert!(err.to_string().contains("reserved"));
    }
}
