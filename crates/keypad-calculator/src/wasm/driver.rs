//! WASM Driver - click-level testing against the mock page
//!
//! Every interaction goes through an element id, the same way the browser
//! binding receives it.

use tracing::debug;

use super::dom::{DomEvent, MockDom};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::config::{CalculatorConfig, ConfigResult};
use crate::controller::{Controller, Evaluation, Slots, Trigger};
use crate::core::Operator;
use crate::driver::CalculatorDriver;
use crate::surface::SlotId;

/// Controller wired to a mock DOM through the keypad
#[derive(Debug)]
pub struct WasmDriver {
    controller: Controller<MockDom>,
    keypad: Keypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver for the stock page
    #[must_use]
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        let keypad = Keypad::new();
        Self::assemble(&config, keypad)
    }

    /// Creates a driver for a custom page layout
    pub fn with_config(config: &CalculatorConfig) -> ConfigResult<Self> {
        let keypad = Keypad::from_config(config)?;
        Ok(Self::assemble(config, keypad))
    }

    fn assemble(config: &CalculatorConfig, keypad: Keypad) -> Self {
        let mut dom = MockDom::calculator(config);
        dom.add_keypad(&keypad);
        Self {
            controller: Controller::with_prompt(dom, &config.prompt),
            keypad,
        }
    }

    /// The mock page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.controller.surface()
    }

    /// The keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The controller's slot contents
    #[must_use]
    pub fn slots(&self) -> Slots {
        self.controller.snapshot()
    }

    /// Simulates a click on an element.
    ///
    /// Clicks on elements that are not keypad buttons are recorded and
    /// otherwise ignored.
    pub fn click(&mut self, element_id: &str) -> Option<Evaluation> {
        self.controller
            .surface_mut()
            .dispatch_event(DomEvent::click(element_id));

        match self.keypad.handle_click(element_id) {
            Some(trigger) => self.controller.fire(trigger),
            None => {
                debug!(element_id, "click on unbound element ignored");
                None
            }
        }
    }

    /// Clicks the button bound to a trigger
    pub fn click_trigger(&mut self, trigger: Trigger) -> Option<Evaluation> {
        let Some(id) = self
            .keypad
            .find_button_by_trigger(trigger)
            .map(|b| b.id.clone())
        else {
            debug!(?trigger, "no button bound to trigger");
            return None;
        };
        self.click(&id)
    }

    /// Clicks a digit button
    pub fn click_digit(&mut self, digit: char) {
        self.click_trigger(Trigger::Digit(digit));
    }

    /// Clicks an operator button
    pub fn click_operator(&mut self, op: Operator) {
        self.click_trigger(Trigger::Operator(op));
    }

    /// Clicks the evaluate button
    pub fn click_equals(&mut self) -> Option<Evaluation> {
        self.click_trigger(Trigger::Evaluate)
    }

    /// Clicks the clear button
    pub fn click_clear(&mut self) {
        self.click_trigger(Trigger::Clear);
    }

    /// Value of the field bound to a slot
    #[must_use]
    pub fn field_value(&self, slot: SlotId) -> &str {
        self.dom().slot_value(slot).unwrap_or_default()
    }
}

impl CalculatorDriver for WasmDriver {
    fn fire(&mut self, trigger: Trigger) -> Option<Evaluation> {
        self.click_trigger(trigger)
    }

    fn field(&self, slot: SlotId) -> String {
        self.field_value(slot).to_string()
    }

    fn notices(&self) -> Vec<String> {
        self.dom().alerts().into_iter().map(str::to_string).collect()
    }
}
