//! Replays a short button session against the mock page
//!
//! Run with: `RUST_LOG=debug cargo run --example click_session`

use keypad_calculator::logging::init_tracing;
use keypad_calculator::prelude::*;

fn print_fields(driver: &WasmDriver) {
    println!(
        "  [{}] [{}] [{}] {}",
        driver.field_value(SlotId::OperandA),
        driver.field_value(SlotId::Operator),
        driver.field_value(SlotId::OperandB),
        driver.field_value(SlotId::Display),
    );
}

fn main() {
    init_tracing();

    let mut driver = WasmDriver::new();
    let sessions: [&[&str]; 3] = [
        &["num-4", "num-2", "operator-/", "num-8", "operator-equals"],
        &["operator-clear", "num-1", "operator-/", "num-0", "operator-equals"],
        &["operator-clear", "operator-+", "num-3", "operator-equals"],
    ];

    for clicks in sessions {
        println!("clicks: {}", clicks.join(" "));
        for id in clicks {
            driver.click(id);
        }
        print_fields(&driver);
    }

    for alert in driver.dom().alerts() {
        println!("alert: {alert}");
    }
}
