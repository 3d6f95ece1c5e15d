//! Locale-aware numeric parsing and display formatting
//!
//! Display strings use the locale's decimal separator and thousands
//! grouping, with results rounded to at most five fraction digits.
//! Parsing accepts the same shape back: grouping separators anywhere,
//! the locale decimal separator, an optional leading sign.

use crate::core::{EngineError, EngineResult};

/// Locale-aware number formatter.
///
/// The default is en-US style (`.` decimal, `,` grouping). Other
/// locales are expressed by their separator pair, e.g. de-DE is
/// `NumberFormat::new(',', '.')`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
    grouping_separator: char,
    /// Maximum fraction digits kept when formatting a result.
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new('.', ',')
    }
}

impl NumberFormat {
    /// Default maximum fraction digits.
    pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 5;

    /// Creates a formatter with the given separator pair.
    #[must_use]
    pub fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            max_fraction_digits: Self::DEFAULT_MAX_FRACTION_DIGITS,
        }
    }

    /// Returns the locale decimal separator.
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the locale grouping separator.
    #[must_use]
    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Parses locale-formatted numeric text.
    ///
    /// Grouping separators are stripped, the locale decimal separator
    /// maps to `.`, and the remainder must parse as a complete `f64`.
    /// The non-finite symbols this formatter emits parse back to the
    /// values they stand for.
    pub fn parse(&self, text: &str) -> EngineResult<f64> {
        let mut normalized = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == self.grouping_separator {
                continue;
            }
            normalized.push(if ch == self.decimal_separator { '.' } else { ch });
        }

        match normalized.as_str() {
            "\u{221e}" => return Ok(f64::INFINITY),
            "-\u{221e}" => return Ok(f64::NEG_INFINITY),
            _ => {}
        }

        normalized
            .parse::<f64>()
            .map_err(|_| EngineError::InvalidNumber(text.to_string()))
    }

    /// Formats a value for display.
    ///
    /// Finite values are rounded to [`Self::max_fraction_digits`],
    /// trailing fraction zeros trimmed, and thousands grouping applied.
    /// Non-finite values render as `∞`, `-∞` or `NaN`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() { "\u{221e}" } else { "-\u{221e}" }.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value);
        let rounded = rounded.trim_end_matches('0').trim_end_matches('.');

        let (sign, digits) = rounded
            .strip_prefix('-')
            .map_or(("", rounded), |rest| ("-", rest));
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(rounded.len() + int_part.len() / 3);
        out.push_str(sign);
        out.push_str(&group_thousands(int_part, self.grouping_separator));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

/// Inserts a grouping separator every three digits, right to left.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
