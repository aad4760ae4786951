//! The four binary operators

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator selectable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
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
    /// All operators in keypad column order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as shown in the operator field
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator symbol
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        match symbol.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            _ => Err(CalcError::InvalidOperator),
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Returns `None` for division by a zero divisor (either sign).
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()).unwrap(), op);
        }
    }

    #[test]
    fn test_from_symbol_unknown() {
        assert_eq!(Operator::from_symbol("%"), Err(CalcError::InvalidOperator));
        assert_eq!(Operator::from_symbol(""), Err(CalcError::InvalidOperator));
    }

    #[test]
    fn test_from_str() {
        let op: Operator = "*".parse().unwrap();
        assert_eq!(op, Operator::Multiply);
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::Subtract.to_string(), "-");
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Some(7.0));
        assert_eq!(Operator::Subtract.apply(9.0, 4.0), Some(5.0));
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Some(42.0));
        assert_eq!(Operator::Divide.apply(10.0, 2.0), Some(5.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(10.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(10.0, -0.0), None);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), None);
    }

    #[test]
    fn test_apply_overflow_is_infinite() {
        let result = Operator::Multiply.apply(f64::MAX, 2.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"divide\"");
    }
}
