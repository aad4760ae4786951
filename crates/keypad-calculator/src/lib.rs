//! Keypad Calculator
//!
//! A four-function calculator driven by button clicks. Digits accumulate in
//! two operand fields around a single operator field; `=` writes
//! `"= <result>"` into a result field and `C` resets everything.
//!
//! The [`controller::Controller`] owns the slots and renders them through an
//! injected [`surface::Surface`], so the same logic runs against the real
//! page (feature `wasm`), the [`wasm::MockDom`] and a headless recorder.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Controller::new(Recorder::new());
//! calc.press_digit('6');
//! calc.press_operator(Operator::Multiply);
//! calc.press_digit('7');
//! calc.evaluate();
//! assert_eq!(calc.display(), "= 42");
//!
//! // division by zero leaves the result field alone
//! calc.clear();
//! calc.press_digit('1');
//! calc.press_operator(Operator::Divide);
//! calc.press_digit('0');
//! assert_eq!(calc.evaluate(), Evaluation::DivisionByZero);
//! assert_eq!(calc.display(), "= ");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod surface;

/// Browser frontend - mock DOM always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult, SlotIds};
    pub use crate::controller::{Controller, EntryState, Evaluation, Slots, Trigger};
    pub use crate::core::{CalcError, CalcResult, Operator};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::surface::{Recorder, SlotId, Surface};
    pub use crate::wasm::{DomElement, DomEvent, Keypad, MockDom, WasmDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
