//! Page configuration: element ids, digit glyphs and the display prompt
//!
//! The defaults match the stock calculator page. A host page may ship its
//! own layout as JSON and hand it to [`CalculatorConfig::from_json`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::DEFAULT_PROMPT;
use crate::core::Operator;
use crate::surface::SlotId;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`CalculatorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An element id is empty
    #[error("Empty element id for {what}")]
    EmptyId {
        /// Which control or slot had no id
        what: String,
    },

    /// Two controls or slots share an element id
    #[error("Duplicate element id: {id}")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// A digit button's glyph is not exactly one character
    #[error("Digit glyph must be a single character, got {glyph:?}")]
    InvalidGlyph {
        /// The offending glyph
        glyph: String,
    },
}

/// Element ids of the four display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotIds {
    /// First operand field
    pub operand_a: String,
    /// Operator field
    pub operator: String,
    /// Second operand field
    pub operand_b: String,
    /// Result field
    pub display: String,
}

impl Default for SlotIds {
    fn default() -> Self {
        Self {
            operand_a: "number1".to_string(),
            operator: "operator".to_string(),
            operand_b: "number2".to_string(),
            display: "equals".to_string(),
        }
    }
}

impl SlotIds {
    /// Element id for a slot
    #[must_use]
    pub fn id(&self, slot: SlotId) -> &str {
        match slot {
            SlotId::OperandA => &self.operand_a,
            SlotId::Operator => &self.operator,
            SlotId::OperandB => &self.operand_b,
            SlotId::Display => &self.display,
        }
    }
}

/// A digit button: its element id and the glyph it types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitButton {
    /// Element id
    pub id: String,
    /// Label glyph appended to the active operand
    pub glyph: String,
}

impl DigitButton {
    /// Creates a digit button
    #[must_use]
    pub fn new(id: &str, glyph: &str) -> Self {
        Self {
            id: id.to_string(),
            glyph: glyph.to_string(),
        }
    }

    /// The glyph as a `char`, if it is exactly one character
    #[must_use]
    pub fn glyph_char(&self) -> Option<char> {
        let mut chars = self.glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// An operator button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorButton {
    /// Element id
    pub id: String,
    /// Operator the button selects
    pub operator: Operator,
}

/// Complete page configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display field ids
    pub slots: SlotIds,
    /// Digit buttons in keypad order
    pub digits: Vec<DigitButton>,
    /// Operator buttons
    pub operators: Vec<OperatorButton>,
    /// Evaluate button id
    pub evaluate_id: String,
    /// Clear button id
    pub clear_id: String,
    /// Display text shown after clear
    pub prompt: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let digits = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0']
            .iter()
            .map(|d| DigitButton::new(&format!("num-{d}"), &d.to_string()))
            .collect();

        let operators = Operator::ALL
            .iter()
            .map(|&operator| OperatorButton {
                id: format!("operator-{}", operator.symbol()),
                operator,
            })
            .collect();

        Self {
            slots: SlotIds::default(),
            digits,
            operators,
            evaluate_id: "operator-equals".to_string(),
            clear_id: "operator-clear".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration as pretty JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the display field ids
    #[must_use]
    pub fn with_slots(mut self, slots: SlotIds) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the evaluate button id
    #[must_use]
    pub fn with_evaluate_id(mut self, id: &str) -> Self {
        self.evaluate_id = id.to_string();
        self
    }

    /// Sets the clear button id
    #[must_use]
    pub fn with_clear_id(mut self, id: &str) -> Self {
        self.clear_id = id.to_string();
        self
    }

    /// Sets the prompt shown after clear
    #[must_use]
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Checks ids are present and unique and digit glyphs are single chars
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        let mut check = |what: &str, id: &str| -> ConfigResult<()> {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyId {
                    what: what.to_string(),
                });
            }
            if !seen.insert(id.to_string()) {
                return Err(ConfigError::DuplicateId { id: id.to_string() });
            }
            Ok(())
        };

        for slot in SlotId::ALL {
            check(&format!("{slot:?} slot"), self.slots.id(slot))?;
        }
        for digit in &self.digits {
            check(&format!("digit {}", digit.glyph), &digit.id)?;
            if digit.glyph_char().is_none() {
                return Err(ConfigError::InvalidGlyph {
                    glyph: digit.glyph.clone(),
                });
            }
        }
        for op in &self.operators {
            check(&format!("operator {}", op.operator), &op.id)?;
        }
        check("evaluate button", &self.evaluate_id)?;
        check("clear button", &self.clear_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_stock_page() {
        let config = CalculatorConfig::default();
        assert_eq!(config.slots.operand_a, "number1");
        assert_eq!(config.slots.display, "equals");
        assert_eq!(config.digits.len(), 10);
        assert_eq!(config.digits[9].id, "num-0");
        assert_eq!(config.operators.len(), 4);
        assert!(config.operators.iter().any(|o| o.id == "operator--"));
        assert!(config.operators.iter().any(|o| o.id == "operator-+"));
        assert_eq!(config.evaluate_id, "operator-equals");
        assert_eq!(config.clear_id, "operator-clear");
        assert_eq!(config.prompt, "= ");
    }

    #[test]
    fn test_default_validates() {
        assert!(CalculatorConfig::new().validate().is_ok());
    }

    #[test]
    fn test_slot_ids_lookup() {
        let slots = SlotIds::default();
        assert_eq!(slots.id(SlotId::Operator), "operator");
        assert_eq!(slots.id(SlotId::OperandB), "number2");
    }

    #[test]
    fn test_glyph_char() {
        assert_eq!(DigitButton::new("a", "7").glyph_char(), Some('7'));
        assert_eq!(DigitButton::new("a", "").glyph_char(), None);
        assert_eq!(DigitButton::new("a", "77").glyph_char(), None);
    }

    #[test]
    fn test_builders() {
        let config = CalculatorConfig::new()
            .with_evaluate_id("eq")
            .with_clear_id("ac")
            .with_prompt("=");
        assert_eq!(config.evaluate_id, "eq");
        assert_eq!(config.clear_id, "ac");
        assert_eq!(config.prompt, "=");
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = CalculatorConfig::from_json(r#"{ "clear_id": "btn-ac" }"#).unwrap();
        assert_eq!(config.clear_id, "btn-ac");
        assert_eq!(config.evaluate_id, "operator-equals");
        assert_eq!(config.digits.len(), 10);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::new().with_prompt(">");
        let json = config.to_json().unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CalculatorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let config = CalculatorConfig::new().with_clear_id("operator-equals");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { ref id } if id == "operator-equals"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let config = CalculatorConfig::new().with_evaluate_id("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyId { .. })
        ));
    }

    #[test]
    fn test_invalid_glyph_rejected() {
        let mut config = CalculatorConfig::new();
        config.digits[0].glyph = "12".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Digit glyph must be a single character, got \"12\""
        );
    }
}
