//! Core arithmetic for the keypad calculator
//!
//! Operand parsing, the four binary operators and the browser-style
//! number formatting used for the result field.

mod operations;

pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an evaluation is rejected.
///
/// The display text of each variant is the notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One or both operand slots do not hold a finite number
    #[error("Please enter valid numbers.")]
    InvalidOperand,
    /// The operator slot is empty or holds an unknown symbol
    #[error("Please select a valid operator.")]
    InvalidOperator,
}

/// Parses an operand slot as a finite `f64`.
///
/// Surrounding whitespace and exponent notation are accepted. Empty text,
/// non-numeric text and values that parse to an infinity or NaN are
/// rejected.
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidOperand)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidOperand)
    }
}

/// Formats a number the way a browser's `Number#toString` does.
///
/// Plain decimal notation in `[1e-6, 1e21)`, exponent notation with an
/// explicit sign outside it.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand_integer() {
        assert_eq!(parse_operand("42").unwrap(), 42.0);
    }

    #[test]
    fn test_parse_operand_decimal_and_whitespace() {
        assert_eq!(parse_operand("  3.5 ").unwrap(), 3.5);
        assert_eq!(parse_operand(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_operand_exponent() {
        assert_eq!(parse_operand("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_operand_rejects_empty() {
        assert_eq!(parse_operand(""), Err(CalcError::InvalidOperand));
        assert_eq!(parse_operand("   "), Err(CalcError::InvalidOperand));
    }

    #[test]
    fn test_parse_operand_rejects_garbage() {
        assert_eq!(parse_operand("abc"), Err(CalcError::InvalidOperand));
        assert_eq!(parse_operand("1.2.3"), Err(CalcError::InvalidOperand));
    }

    #[test]
    fn test_parse_operand_rejects_non_finite() {
        assert_eq!(parse_operand("inf"), Err(CalcError::InvalidOperand));
        assert_eq!(parse_operand("NaN"), Err(CalcError::InvalidOperand));
        assert_eq!(parse_operand("1e400"), Err(CalcError::InvalidOperand));
    }

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_number_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_number_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::InvalidOperand.to_string(),
            "Please enter valid numbers."
        );
        assert_eq!(
            CalcError::InvalidOperator.to_string(),
            "Please select a valid operator."
        );
    }
}
