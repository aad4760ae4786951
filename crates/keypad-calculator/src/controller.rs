//! Input/evaluation controller
//!
//! Owns the operand, operator and display slots, routes digit presses
//! through an explicit two-state entry machine, and renders every change
//! to the injected [`Surface`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{format_number, parse_operand, CalcError, CalcResult, Operator};
use crate::surface::{SlotId, Surface};

/// Prompt shown in the display slot before any result
pub const DEFAULT_PROMPT: &str = "= ";

/// Which operand digit presses currently extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryState {
    /// No operator chosen yet; digits go to operand A
    #[default]
    AwaitingFirstOperand,
    /// Operator chosen; digits go to operand B
    AwaitingSecondOperand,
}

/// Snapshot of the four slot texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    /// Digits typed before the operator
    pub operand_a: String,
    /// Operator symbol, empty when none is selected
    pub operator: String,
    /// Digits typed after the operator
    pub operand_b: String,
    /// Result field
    pub display: String,
}

impl Slots {
    /// Text of a single slot
    #[must_use]
    pub fn get(&self, slot: SlotId) -> &str {
        match slot {
            SlotId::OperandA => &self.operand_a,
            SlotId::Operator => &self.operator,
            SlotId::OperandB => &self.operand_b,
            SlotId::Display => &self.display,
        }
    }
}

/// Outcome of [`Controller::evaluate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Result computed and written to the display slot
    Displayed(f64),
    /// Inputs rejected; a notice was raised and no slot changed
    Rejected(CalcError),
    /// Division by zero; nothing changed and no notice was raised
    DivisionByZero,
}

impl Evaluation {
    /// Returns true if the display slot was updated
    #[must_use]
    pub const fn is_displayed(&self) -> bool {
        matches!(self, Self::Displayed(_))
    }
}

/// A keypad control and the controller operation it invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Append a digit glyph to the active operand
    Digit(char),
    /// Select an operator
    Operator(Operator),
    /// Evaluate the expression
    Evaluate,
    /// Reset all slots
    Clear,
}

impl Trigger {
    /// Button label for this trigger
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

/// The calculator controller
#[derive(Debug)]
pub struct Controller<S: Surface> {
    surface: S,
    state: EntryState,
    operand_a: String,
    operator: Option<Operator>,
    operand_b: String,
    display: String,
    prompt: String,
}

impl<S: Surface> Controller<S> {
    /// Creates a controller with the default `"= "` prompt and renders
    /// the initial slots
    pub fn new(surface: S) -> Self {
        Self::with_prompt(surface, DEFAULT_PROMPT)
    }

    /// Creates a controller with a custom display prompt
    pub fn with_prompt(surface: S, prompt: &str) -> Self {
        let mut controller = Self {
            surface,
            state: EntryState::default(),
            operand_a: String::new(),
            operator: None,
            operand_b: String::new(),
            display: prompt.to_string(),
            prompt: prompt.to_string(),
        };
        controller.render_all();
        controller
    }

    /// Current entry state
    #[must_use]
    pub const fn state(&self) -> EntryState {
        self.state
    }

    /// Currently selected operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Display prompt used after clear
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Text of the display slot
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Copies the four slots out
    #[must_use]
    pub fn snapshot(&self) -> Slots {
        Slots {
            operand_a: self.operand_a.clone(),
            operator: self.operator_text().to_string(),
            operand_b: self.operand_b.clone(),
            display: self.display.clone(),
        }
    }

    /// Borrows the surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrows the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Runs the operation bound to a trigger.
    ///
    /// Returns the evaluation outcome for [`Trigger::Evaluate`], `None`
    /// otherwise.
    pub fn fire(&mut self, trigger: Trigger) -> Option<Evaluation> {
        match trigger {
            Trigger::Digit(d) => self.press_digit(d),
            Trigger::Operator(op) => self.press_operator(op),
            Trigger::Evaluate => return Some(self.evaluate()),
            Trigger::Clear => self.clear(),
        }
        None
    }

    /// Appends a digit glyph to the active operand.
    ///
    /// The glyph is not validated; `"1.2.3"` is a perfectly good slot value
    /// until evaluation.
    pub fn press_digit(&mut self, digit: char) {
        debug!(digit = %digit, state = ?self.state, "digit pressed");
        match self.state {
            EntryState::AwaitingFirstOperand => {
                self.operand_a.push(digit);
                self.surface.render(SlotId::OperandA, &self.operand_a);
            }
            EntryState::AwaitingSecondOperand => {
                self.operand_b.push(digit);
                self.surface.render(SlotId::OperandB, &self.operand_b);
            }
        }
    }

    /// Selects the operator, replacing any earlier choice
    pub fn press_operator(&mut self, op: Operator) {
        debug!(operator = %op, replaced = ?self.operator, "operator pressed");
        self.operator = Some(op);
        self.state = EntryState::AwaitingSecondOperand;
        self.surface.render(SlotId::Operator, op.symbol());
    }

    /// Computes `operand_a <op> operand_b` into the display slot.
    ///
    /// Rejections raise a notice on the surface. Division by zero changes
    /// nothing and raises nothing. Only the display slot is ever written.
    pub fn evaluate(&mut self) -> Evaluation {
        info!(
            operand_a = %self.operand_a,
            operator = self.operator_text(),
            operand_b = %self.operand_b,
            "calculating result"
        );

        let (lhs, rhs, op) = match self.checked_inputs() {
            Ok(inputs) => inputs,
            Err(err) => {
                warn!(error = %err, "evaluation rejected");
                self.surface.notify(&err.to_string());
                return Evaluation::Rejected(err);
            }
        };

        let Some(result) = op.apply(lhs, rhs) else {
            // TODO: show a division-by-zero notice once the product wording is agreed
            debug!(lhs, "division by zero left display unchanged");
            return Evaluation::DivisionByZero;
        };

        self.display = format!("{DEFAULT_PROMPT}{}", format_number(result));
        info!(result, display = %self.display, "result computed");
        self.surface.render(SlotId::Display, &self.display);
        Evaluation::Displayed(result)
    }

    /// Empties both operands and the operator and restores the prompt
    pub fn clear(&mut self) {
        info!("clearing display");
        self.operand_a.clear();
        self.operator = None;
        self.operand_b.clear();
        self.display.clone_from(&self.prompt);
        self.state = EntryState::AwaitingFirstOperand;
        self.render_all();
    }

    fn checked_inputs(&self) -> CalcResult<(f64, f64, Operator)> {
        let lhs = parse_operand(&self.operand_a)?;
        let rhs = parse_operand(&self.operand_b)?;
        let op = self.operator.ok_or(CalcError::InvalidOperator)?;
        Ok((lhs, rhs, op))
    }

    fn operator_text(&self) -> &'static str {
        self.operator.map_or("", |op| op.symbol())
    }

    fn render_all(&mut self) {
        let operator = self.operator_text();
        self.surface.render(SlotId::OperandA, &self.operand_a);
        self.surface.render(SlotId::Operator, operator);
        self.surface.render(SlotId::OperandB, &self.operand_b);
        self.surface.render(SlotId::Display, &self.display);
    }
}
