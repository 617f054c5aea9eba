//! Manual Override Example
//!
//! Demonstrates the mode-aware controller: automatic fuzzy control, a manual
//! override that bypasses (but does not stop) the inference, and the speed
//! categories a front panel would display.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_manual_override
//! ```

use fuzzyfan_core::{FanController, FanMode, FuzzyEngine};

fn main() {
    println!("FuzzyFan Manual Override Example");
    println!("================================\n");

    let mut controller = FanController::new(FuzzyEngine::new());

    // Auto mode: the engine drives the fan
    let update = controller.update(33.0, 75.0);
    println!("AUTO   33 °C / 75 %RH");
    println!(
        "  fuzzy output {} %, fan runs at {} % ({})\n",
        update.result.output,
        update.effective_pct,
        update.category.label(),
    );

    // Manual mode: the override drives the fan, the engine keeps computing
    // so the panel can show what automatic control would have chosen.
    controller.set_mode(FanMode::Manual);
    controller.set_manual_speed(25.0);

    let update = controller.update(33.0, 75.0);
    println!("MANUAL 33 °C / 75 %RH, override 25 %");
    println!(
        "  fan runs at {} % ({}), fuzzy would have chosen {} %\n",
        update.effective_pct,
        update.category.label(),
        update.result.output,
    );

    // Out-of-range overrides are clamped, not rejected
    controller.set_manual_speed(250.0);
    let update = controller.update(33.0, 75.0);
    println!("MANUAL override 250 % requested");
    println!(
        "  clamped to {} % ({})\n",
        update.effective_pct,
        update.category.label(),
    );

    // Back to auto: inference resumes immediately
    controller.set_mode(FanMode::Auto);
    let update = controller.update(33.0, 75.0);
    println!("AUTO again");
    println!(
        "  fan runs at {} % ({})",
        update.effective_pct,
        update.category.label(),
    );
}
