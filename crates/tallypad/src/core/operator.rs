//! Pending-operation enum

use serde::{Deserialize, Serialize};

/// The pending binary operation.
///
/// `None` means no operation is queued. It is a variant rather than an
/// `Option` wrapper because instance-state snapshots store the variant
/// name as a string, and `"None"` is a legitimate serialized value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// No operation queued
    #[default]
    None,
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display, or `""` for `None`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Plain IEEE-754 semantics: division by zero produces an infinity
    /// and `0/0` produces NaN, neither is an error. Returns `None` for
    /// the `None` variant.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide => Some(a / b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Symbol tests =====

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::None.symbol(), "");
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
    }

    // ===== Apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Some(5.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Some(2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(4.0, 3.0), Some(12.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(12.0, 4.0), Some(3.0));
    }

    #[test]
    fn test_apply_none() {
        assert_eq!(Operator::None.apply(1.0, 2.0), None);
    }

    #[test]
    fn test_apply_divide_by_zero_is_infinite() {
        let result = Operator::Divide.apply(7.0, 0.0).unwrap();
        assert!(result.is_infinite());
        assert!(result.is_sign_positive());
    }

    #[test]
    fn test_apply_zero_over_zero_is_nan() {
        assert!(Operator::Divide.apply(0.0, 0.0).unwrap().is_nan());
    }

    // ===== Serde tests =====

    #[test]
    fn test_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Operator::Add).unwrap(), "\"Add\"");
        assert_eq!(serde_json::to_string(&Operator::None).unwrap(), "\"None\"");
    }

    #[test]
    fn test_deserializes_from_variant_name() {
        let op: Operator = serde_json::from_str("\"Divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        assert!(serde_json::from_str::<Operator>("\"Modulo\"").is_err());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Operator::default(), Operator::None);
    }
}
