//! Basic Fuzzy Compute Example
//!
//! This example demonstrates the simplest use case of the engine:
//! turning a temperature/humidity reading pair into a fan speed.
//!
//! ## What You'll Learn
//!
//! - Creating the engine (default and custom sampling step)
//! - Reading the fuzzification snapshot and rule strengths
//! - Interpreting the crisp output
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_compute
//! ```

use fuzzyfan_core::{FuzzyEngine, SpeedCategory};

fn main() {
    println!("FuzzyFan Basic Compute Example");
    println!("==============================\n");

    let engine = FuzzyEngine::new();
    println!("Sampling step: {} % ({} samples)\n", engine.step(), 51);

    let readings = [
        (27.0, 50.0, "Comfortable room"),
        (10.0, 10.0, "Cold, dry morning"),
        (40.0, 100.0, "Tropical afternoon"),
        (35.0, 5.0, "Hot but bone dry"),
        (32.0, 70.0, "Warm and muggy"),
        (20.0, 90.0, "Cool and damp"),
    ];

    for (temperature, humidity, description) in readings {
        let result = engine.compute(temperature, humidity);
        let category = SpeedCategory::from_percent(result.output);

        println!("{description} ({temperature} °C, {humidity} %RH)");
        println!(
            "  temperature: cold={:.2} normal={:.2} hot={:.2}",
            result.fuzzified.temperature.cold,
            result.fuzzified.temperature.normal,
            result.fuzzified.temperature.hot,
        );
        println!(
            "  humidity:    dry={:.2} normal={:.2} wet={:.2}",
            result.fuzzified.humidity.dry,
            result.fuzzified.humidity.normal,
            result.fuzzified.humidity.wet,
        );
        println!(
            "  alpha:       slow={:.2} medium={:.2} fast={:.2}",
            result.alpha.slow, result.alpha.medium, result.alpha.fast,
        );
        println!("  fan speed:   {} % ({})\n", result.output, category.label());
    }

    // A coarser grid is a different contract: same inputs, possibly a
    // different percent.
    let coarse = FuzzyEngine::with_step(10.0).expect("valid step");
    let fine = engine.compute(10.0, 10.0);
    println!("Sampling step matters:");
    println!("  step 2  -> {} %", fine.output);
    println!("  step 10 -> {} %", coarse.compute(10.0, 10.0).output);
}
