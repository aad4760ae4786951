//! Keypad triggers
//!
//! Maps button element ids to the controller operation they invoke.

use super::dom::{DomElement, MockDom};
use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
use crate::controller::Trigger;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Element id
    pub id: String,
    /// Trigger fired on click
    pub trigger: Trigger,
}

/// The sixteen calculator buttons
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Keypad for the stock page
    #[must_use]
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        let mut buttons = Vec::with_capacity(16);
        for digit in &config.digits {
            if let Some(glyph) = digit.glyph_char() {
                buttons.push(KeypadButton {
                    id: digit.id.clone(),
                    trigger: Trigger::Digit(glyph),
                });
            }
        }
        Self::push_controls(&mut buttons, &config);
        Self { buttons }
    }

    /// Builds a keypad from a page configuration
    pub fn from_config(config: &CalculatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut buttons = Vec::with_capacity(config.digits.len() + config.operators.len() + 2);
        for digit in &config.digits {
            let glyph = digit.glyph_char().ok_or_else(|| ConfigError::InvalidGlyph {
                glyph: digit.glyph.clone(),
            })?;
            buttons.push(KeypadButton {
                id: digit.id.clone(),
                trigger: Trigger::Digit(glyph),
            });
        }
        Self::push_controls(&mut buttons, config);
        Ok(Self { buttons })
    }

    fn push_controls(buttons: &mut Vec<KeypadButton>, config: &CalculatorConfig) {
        for op in &config.operators {
            buttons.push(KeypadButton {
                id: op.id.clone(),
                trigger: Trigger::Operator(op.operator),
            });
        }
        buttons.push(KeypadButton {
            id: config.clear_id.clone(),
            trigger: Trigger::Clear,
        });
        buttons.push(KeypadButton {
            id: config.evaluate_id.clone(),
            trigger: Trigger::Evaluate,
        });
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// All buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that fires a trigger
    #[must_use]
    pub fn find_button_by_trigger(&self, trigger: Trigger) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.trigger == trigger)
    }

    /// Trigger fired by a click on the given element
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Trigger> {
        self.find_button_by_id(element_id).map(|b| b.trigger)
    }

    /// Button elements with their labels as text content
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.trigger.label())
                    .with_class("keypad-btn")
            })
            .collect()
    }
}

/// Registers keypad buttons in a mock DOM
pub trait MockDomKeypadExt {
    /// Adds every keypad button to the DOM
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        for elem in keypad.create_dom_elements() {
            self.register_element(elem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DigitButton;
    use crate::core::Operator;

    #[test]
    fn test_stock_keypad_has_sixteen_buttons() {
        assert_eq!(Keypad::new().button_count(), 16);
    }

    #[test]
    fn test_default_trait() {
        assert_eq!(Keypad::default().button_count(), 16);
    }

    #[test]
    fn test_handle_click_digits() {
        let keypad = Keypad::new();
        for d in '0'..='9' {
            assert_eq!(
                keypad.handle_click(&format!("num-{d}")),
                Some(Trigger::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_click_operators() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("operator-+"),
            Some(Trigger::Operator(Operator::Add))
        );
        assert_eq!(
            keypad.handle_click("operator--"),
            Some(Trigger::Operator(Operator::Subtract))
        );
        assert_eq!(
            keypad.handle_click("operator-*"),
            Some(Trigger::Operator(Operator::Multiply))
        );
        assert_eq!(
            keypad.handle_click("operator-/"),
            Some(Trigger::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_handle_click_controls() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("operator-equals"), Some(Trigger::Evaluate));
        assert_eq!(keypad.handle_click("operator-clear"), Some(Trigger::Clear));
    }

    #[test]
    fn test_handle_click_unknown() {
        assert_eq!(Keypad::new().handle_click("nope"), None);
    }

    #[test]
    fn test_from_config_custom_glyphs() {
        let mut config = CalculatorConfig::default();
        config.digits = vec![DigitButton::new("one", "١")];
        let keypad = Keypad::from_config(&config).unwrap();
        assert_eq!(keypad.handle_click("one"), Some(Trigger::Digit('١')));
        assert_eq!(keypad.button_count(), 7);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = CalculatorConfig::default().with_clear_id("num-1");
        assert!(Keypad::from_config(&config).is_err());
    }

    #[test]
    fn test_find_button_by_trigger() {
        let keypad = Keypad::new();
        let btn = keypad.find_button_by_trigger(Trigger::Clear).unwrap();
        assert_eq!(btn.id, "operator-clear");
    }

    #[test]
    fn test_dom_elements_carry_labels() {
        let elems = Keypad::new().create_dom_elements();
        assert_eq!(elems.len(), 16);
        let plus = elems.iter().find(|e| e.id == "operator-+").unwrap();
        assert_eq!(plus.text_content, "+");
        assert!(plus.has_class("keypad-btn"));
    }

    #[test]
    fn test_add_keypad_registers_buttons() {
        let mut dom = MockDom::new();
        dom.add_keypad(&Keypad::new());
        assert_eq!(dom.get_element_text("num-7"), Some("7"));
        assert_eq!(dom.get_element_text("operator-equals"), Some("="));
    }
}
