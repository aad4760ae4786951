//! Browser frontend for the calculator
//!
//! The mock DOM, keypad and driver are always compiled so the page wiring
//! can be tested without a browser. The real `web-sys` binding needs the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, BrowserSurface};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{Keypad, KeypadButton, MockDomKeypadExt};
