//! Unified calculator driver
//!
//! The same scenarios run against the headless controller and the mock
//! browser page. Each driver only has to know how to fire a trigger and
//! read the four fields back.

use crate::controller::{Controller, Evaluation, Trigger};
use crate::core::Operator;
use crate::surface::{Recorder, SlotId};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Fires one trigger, returning the evaluation outcome for `Evaluate`
    fn fire(&mut self, trigger: Trigger) -> Option<Evaluation>;

    /// Current text of a field as the user sees it
    fn field(&self, slot: SlotId) -> String;

    /// Notices raised so far, oldest first
    fn notices(&self) -> Vec<String>;

    /// Presses each character of `digits` as a digit trigger
    fn type_digits(&mut self, digits: &str) {
        for d in digits.chars() {
            self.fire(Trigger::Digit(d));
        }
    }

    /// Types `lhs`, selects `op`, types `rhs` and evaluates
    fn enter(&mut self, lhs: &str, op: Operator, rhs: &str) -> Option<Evaluation> {
        self.type_digits(lhs);
        self.fire(Trigger::Operator(op));
        self.type_digits(rhs);
        self.fire(Trigger::Evaluate)
    }
}

/// Driver over a bare controller and an in-memory surface
#[derive(Debug)]
pub struct HeadlessDriver {
    controller: Controller<Recorder>,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a headless driver with the default prompt
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(Recorder::new()),
        }
    }

    /// The wrapped controller
    #[must_use]
    pub fn controller(&self) -> &Controller<Recorder> {
        &self.controller
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn fire(&mut self, trigger: Trigger) -> Option<Evaluation> {
        self.controller.fire(trigger)
    }

    fn field(&self, slot: SlotId) -> String {
        self.controller.surface().text(slot).to_string()
    }

    fn notices(&self) -> Vec<String> {
        self.controller.surface().notices().to_vec()
    }
}

// ===== Shared scenarios =====
// These work with ANY CalculatorDriver implementation

/// Digits land in operand A until an operator is chosen, then in operand B
pub fn verify_digit_routing<D: CalculatorDriver>(driver: &mut D) {
    driver.fire(Trigger::Clear);
    driver.type_digits("12");
    assert_eq!(driver.field(SlotId::OperandA), "12");
    assert_eq!(driver.field(SlotId::OperandB), "");

    driver.fire(Trigger::Operator(Operator::Add));
    driver.type_digits("345");
    assert_eq!(driver.field(SlotId::OperandA), "12");
    assert_eq!(driver.field(SlotId::Operator), "+");
    assert_eq!(driver.field(SlotId::OperandB), "345");
}

/// A second operator press replaces the first
pub fn verify_operator_overwrite<D: CalculatorDriver>(driver: &mut D) {
    driver.fire(Trigger::Clear);
    driver.type_digits("8");
    driver.fire(Trigger::Operator(Operator::Multiply));
    driver.fire(Trigger::Operator(Operator::Subtract));
    assert_eq!(driver.field(SlotId::Operator), "-");

    driver.type_digits("3");
    driver.fire(Trigger::Evaluate);
    assert_eq!(driver.field(SlotId::Display), "= 5");
}

/// The four operators produce the expected display text
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("3", Operator::Add, "4", "= 7"),
        ("10", Operator::Divide, "2", "= 5"),
        ("6", Operator::Multiply, "7", "= 42"),
        ("9", Operator::Subtract, "4", "= 5"),
    ];

    for (lhs, op, rhs, expected) in cases {
        driver.fire(Trigger::Clear);
        let outcome = driver.enter(lhs, op, rhs);
        assert!(matches!(outcome, Some(Evaluation::Displayed(_))));
        assert_eq!(driver.field(SlotId::Display), expected, "{lhs} {op} {rhs}");
    }
}

/// Division by zero leaves the display as it was and raises no notice
pub fn verify_division_by_zero_is_silent<D: CalculatorDriver>(driver: &mut D) {
    driver.fire(Trigger::Clear);
    let notices_before = driver.notices().len();
    let outcome = driver.enter("10", Operator::Divide, "0");

    assert_eq!(outcome, Some(Evaluation::DivisionByZero));
    assert_eq!(driver.field(SlotId::Display), "= ");
    assert_eq!(driver.notices().len(), notices_before);
}

/// Non-numeric operands raise the "valid numbers" notice
pub fn verify_invalid_operand_notice<D: CalculatorDriver>(driver: &mut D) {
    driver.fire(Trigger::Clear);
    driver.fire(Trigger::Operator(Operator::Add));
    driver.type_digits("4");
    let display_before = driver.field(SlotId::Display);
    let outcome = driver.fire(Trigger::Evaluate);

    assert!(matches!(outcome, Some(Evaluation::Rejected(_))));
    assert_eq!(driver.field(SlotId::Display), display_before);
    assert_eq!(
        driver.notices().last().map(String::as_str),
        Some("Please enter valid numbers.")
    );
}

/// Clear empties every field and restores the prompt
pub fn verify_clear_resets<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("7", Operator::Multiply, "6");
    driver.fire(Trigger::Clear);

    assert_eq!(driver.field(SlotId::OperandA), "");
    assert_eq!(driver.field(SlotId::Operator), "");
    assert_eq!(driver.field(SlotId::OperandB), "");
    assert_eq!(driver.field(SlotId::Display), "= ");
}

/// Evaluating twice gives the same display
pub fn verify_idempotent_evaluate<D: CalculatorDriver>(driver: &mut D) {
    driver.fire(Trigger::Clear);
    driver.enter("1", Operator::Divide, "8");
    let first = driver.field(SlotId::Display);
    driver.fire(Trigger::Evaluate);
    assert_eq!(driver.field(SlotId::Display), first);
    assert_eq!(first, "= 0.125");
}

/// Runs every shared scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_routing(driver);
    verify_operator_overwrite(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero_is_silent(driver);
    verify_invalid_operand_notice(driver);
    verify_clear_resets(driver);
    verify_idempotent_evaluate(driver);
}
