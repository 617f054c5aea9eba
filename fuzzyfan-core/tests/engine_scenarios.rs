//! End-to-end scenarios for the fuzzy engine
//!
//! Expected values are hand-checked against the reference computation on the
//! standard 2 % sampling grid: exact degrees from the breakpoint tables,
//! min/max aggregation over the nine-rule base, centroid of the clipped
//! output sets.

use fuzzyfan_core::{FuzzyEngine, RuleStrengths};

fn alphas(result: &fuzzyfan_core::ComputeResult) -> (f32, f32, f32) {
    (result.alpha.slow, result.alpha.medium, result.alpha.fast)
}

#[test]
fn comfortable_room_runs_medium() {
    // 27 °C / 50 %RH: Normal x Normal fires alone at full strength.
    let result = FuzzyEngine::new().compute(27.0, 50.0);

    assert_eq!(result.fuzzified.temperature.cold, 0.0);
    assert_eq!(result.fuzzified.temperature.normal, 1.0);
    assert_eq!(result.fuzzified.temperature.hot, 0.0);
    assert_eq!(result.fuzzified.humidity.dry, 0.0);
    assert_eq!(result.fuzzified.humidity.normal, 1.0);
    assert_eq!(result.fuzzified.humidity.wet, 0.0);

    assert_eq!(alphas(&result), (0.0, 1.0, 0.0));
    assert_eq!(result.output, 50);
}

#[test]
fn cold_dry_morning_runs_slow() {
    // 10 °C / 10 %RH: Cold = 1, Dry = 0.75; Slow clipped at 0.75.
    let result = FuzzyEngine::new().compute(10.0, 10.0);

    assert_eq!(result.fuzzified.temperature.cold, 1.0);
    assert_eq!(result.fuzzified.humidity.dry, 0.75);
    assert_eq!(alphas(&result), (0.75, 0.0, 0.0));
    assert_eq!(result.output, 16);
}

#[test]
fn hot_saturated_air_runs_fast() {
    // 40 °C / 100 %RH: Hot = Wet = 1; Fast fires alone at full strength.
    let result = FuzzyEngine::new().compute(40.0, 100.0);

    assert_eq!(alphas(&result), (0.0, 0.0, 1.0));
    assert_eq!(result.output, 87);
}

#[test]
fn cold_and_bone_dry_runs_slow() {
    // 15 °C / 0 %RH: Cold = Dry = 1; Slow at full strength.
    let result = FuzzyEngine::new().compute(15.0, 0.0);

    assert_eq!(alphas(&result), (1.0, 0.0, 0.0));
    assert_eq!(result.output, 15);
}

#[test]
fn hot_but_dry_backs_off_to_medium() {
    // 35 °C / 0 %RH: Hot x Dry concludes Medium, not Fast.
    let result = FuzzyEngine::new().compute(35.0, 0.0);

    assert_eq!(alphas(&result), (0.0, 1.0, 0.0));
    assert_eq!(result.output, 50);
}

#[test]
fn overlapping_sets_blend_the_output() {
    // 32 °C / 70 %RH: Normal_t = 0.6, Hot = 0.4, Normal_h = 1/3, Wet = 0.25.
    let result = FuzzyEngine::new().compute(32.0, 70.0);

    assert!(result.alpha.medium > 0.0);
    assert!(result.alpha.fast > 0.0);
    assert_eq!(result.alpha.slow, 0.0);
    assert_eq!(result.output, 67);
}

#[test]
fn mixed_cold_wet_conditions() {
    // 20 °C / 90 %RH: Slow and Medium both fire at 0.5.
    let result = FuzzyEngine::new().compute(20.0, 90.0);

    assert_eq!(alphas(&result), (0.5, 0.5, 0.0));
    assert_eq!(result.output, 32);
}

#[test]
fn far_out_of_range_inputs_saturate() {
    // -50 °C / 200 %RH behaves like fully Cold, fully Wet.
    let engine = FuzzyEngine::new();
    let extreme = engine.compute(-50.0, 200.0);
    let edge = engine.compute(15.0, 100.0);

    assert_eq!(extreme.alpha, edge.alpha);
    assert_eq!(extreme.output, edge.output);
    assert_eq!(extreme.output, 15);
}

#[test]
fn some_rule_always_fires_for_real_inputs() {
    // The input partitions cover the whole line, so the defuzzification
    // denominator stays positive for every real reading pair.
    let engine = FuzzyEngine::new();
    let mut t = -60.0;
    while t <= 100.0 {
        let mut h = -40.0;
        while h <= 180.0 {
            let result = engine.compute(t, h);
            assert!(result.has_active_rule(), "no rule fired at ({t}, {h})");
            h += 4.0;
        }
        t += 4.0;
    }
}

#[test]
fn zero_alpha_guard_yields_zero_output() {
    // Not reachable through compute with the shipped rule base; exercised
    // directly so the guard survives future rule edits.
    let engine = FuzzyEngine::new();
    let curve = engine.aggregate_curve(&RuleStrengths::ZERO);
    assert!(curve.iter().all(|p| p.degree == 0.0));

    let nan_result = engine.compute(f32::NAN, f32::NAN);
    assert!(!nan_result.has_active_rule());
    assert_eq!(nan_result.output, 0);
}

#[test]
fn results_are_self_consistent_snapshots() {
    let engine = FuzzyEngine::new();
    for (t, h) in [(18.0, 35.0), (26.5, 55.0), (33.0, 85.0), (39.0, 10.0)] {
        let result = engine.compute(t, h);
        let again = engine.compute(t, h);
        assert_eq!(result, again, "compute not reproducible at ({t}, {h})");
        assert!(result.output <= 100);
    }
}
