//! Static Rule Base and Mamdani Rule-Strength Aggregation
//!
//! ## Rule Base
//!
//! The rule base is a fixed table of nine rules, one per
//! Temperature × Humidity set pair - the full grid:
//!
//! ```text
//!              | Dry    | Normal | Wet
//!    ----------+--------+--------+--------
//!    Cold      | Slow   | Slow   | Slow
//!    Normal    | Slow   | Medium | Medium
//!    Hot       | Medium | Fast   | Fast
//! ```
//!
//! Hot-and-Dry concluding Medium rather than Fast is the one entry people
//! trip over: dry air cools occupants effectively, so full airflow is not
//! needed even when hot.
//!
//! ## Aggregation
//!
//! Standard Mamdani semantics:
//!
//! - A rule's firing strength is the **min** of its two antecedent degrees
//!   (fuzzy AND).
//! - A category's aggregate strength ("alpha") is the **max** over the firing
//!   strengths of the rules concluding in it (fuzzy OR).
//!
//! Ties and multiple firing rules collapse into one scalar per category; no
//! further identity is kept. The table is static configuration - nothing
//! mutates it at runtime, and [`infer`] is a pure fold over it.

use crate::variables::{FanCategory, Fuzzified, HumiditySet, TemperatureSet};

/// One inference rule: antecedent set pair, consequent output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Temperature set of the antecedent
    pub temperature: TemperatureSet,
    /// Humidity set of the antecedent
    pub humidity: HumiditySet,
    /// Output category the rule concludes in
    pub category: FanCategory,
}

const fn rule(
    temperature: TemperatureSet,
    humidity: HumiditySet,
    category: FanCategory,
) -> Rule {
    Rule { temperature, humidity, category }
}

/// The complete rule base: all nine Temperature × Humidity combinations.
pub const RULE_BASE: [Rule; 9] = [
    rule(TemperatureSet::Cold, HumiditySet::Dry, FanCategory::Slow),
    rule(TemperatureSet::Cold, HumiditySet::Normal, FanCategory::Slow),
    rule(TemperatureSet::Cold, HumiditySet::Wet, FanCategory::Slow),
    rule(TemperatureSet::Normal, HumiditySet::Dry, FanCategory::Slow),
    rule(TemperatureSet::Normal, HumiditySet::Normal, FanCategory::Medium),
    rule(TemperatureSet::Normal, HumiditySet::Wet, FanCategory::Medium),
    rule(TemperatureSet::Hot, HumiditySet::Dry, FanCategory::Medium),
    rule(TemperatureSet::Hot, HumiditySet::Normal, FanCategory::Fast),
    rule(TemperatureSet::Hot, HumiditySet::Wet, FanCategory::Fast),
];

/// Aggregate rule strengths for one evaluation, one alpha per output category.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleStrengths {
    /// Alpha of the Slow output category
    pub slow: f32,
    /// Alpha of the Medium output category
    pub medium: f32,
    /// Alpha of the Fast output category
    pub fast: f32,
}

impl RuleStrengths {
    /// All categories at zero strength
    pub const ZERO: Self = Self { slow: 0.0, medium: 0.0, fast: 0.0 };

    /// Alpha of the given output category
    pub fn alpha(&self, category: FanCategory) -> f32 {
        match category {
            FanCategory::Slow => self.slow,
            FanCategory::Medium => self.medium,
            FanCategory::Fast => self.fast,
        }
    }

    /// Whether any rule fired at all this evaluation
    pub fn any_active(&self) -> bool {
        self.slow > 0.0 || self.medium > 0.0 || self.fast > 0.0
    }
}

/// Evaluate the rule base against a fuzzification snapshot.
///
/// Min-AND within each rule, max-OR across rules sharing a consequent.
pub fn infer(fuzzified: &Fuzzified) -> RuleStrengths {
    let mut strengths = RuleStrengths::ZERO;

    for rule in &RULE_BASE {
        let firing = fuzzified
            .temperature
            .degree(rule.temperature)
            .min(fuzzified.humidity.degree(rule.humidity));

        let alpha = match rule.category {
            FanCategory::Slow => &mut strengths.slow,
            FanCategory::Medium => &mut strengths.medium,
            FanCategory::Fast => &mut strengths.fast,
        };
        *alpha = alpha.max(firing);
    }

    strengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::fuzzify;

    #[test]
    fn rule_base_covers_the_full_grid() {
        for temperature in [TemperatureSet::Cold, TemperatureSet::Normal, TemperatureSet::Hot] {
            for humidity in [HumiditySet::Dry, HumiditySet::Normal, HumiditySet::Wet] {
                assert!(
                    RULE_BASE
                        .iter()
                        .any(|r| r.temperature == temperature && r.humidity == humidity),
                    "missing rule for {temperature:?} x {humidity:?}"
                );
            }
        }
        assert_eq!(RULE_BASE.len(), 9);
    }

    #[test]
    fn single_rule_fires_at_full_strength() {
        // 27 °C / 50 %RH: Normal x Normal only, concluding Medium
        let strengths = infer(&fuzzify(27.0, 50.0));
        assert_eq!(strengths.slow, 0.0);
        assert_eq!(strengths.medium, 1.0);
        assert_eq!(strengths.fast, 0.0);
        assert!(strengths.any_active());
    }

    #[test]
    fn partial_degrees_take_the_min() {
        // Cold(10) = 1, Dry(10) = 0.75 -> Slow fires at 0.75
        let strengths = infer(&fuzzify(10.0, 10.0));
        assert_eq!(strengths.slow, 0.75);
        assert_eq!(strengths.medium, 0.0);
        assert_eq!(strengths.fast, 0.0);
    }

    #[test]
    fn max_wins_across_rules_with_same_consequent() {
        // 20 °C / 90 %RH: Cold = Normal_t = 0.5, Wet = 0.75.
        // Slow collects Cold x Wet = 0.5; Medium collects Normal_t x Wet = 0.5.
        let strengths = infer(&fuzzify(20.0, 90.0));
        assert_eq!(strengths.slow, 0.5);
        assert_eq!(strengths.medium, 0.5);
        assert_eq!(strengths.fast, 0.0);
    }

    #[test]
    fn hot_and_dry_concludes_medium() {
        let strengths = infer(&fuzzify(35.0, 0.0));
        assert_eq!(strengths.slow, 0.0);
        assert_eq!(strengths.medium, 1.0);
        assert_eq!(strengths.fast, 0.0);
    }

    #[test]
    fn alphas_stay_in_unit_interval() {
        let mut t = -40.0;
        while t <= 80.0 {
            let mut h = -20.0;
            while h <= 140.0 {
                let s = infer(&fuzzify(t, h));
                for alpha in [s.slow, s.medium, s.fast] {
                    assert!((0.0..=1.0).contains(&alpha), "alpha {alpha} at ({t}, {h})");
                }
                h += 5.0;
            }
            t += 5.0;
        }
    }

    #[test]
    fn accessor_matches_fields() {
        let strengths = infer(&fuzzify(32.0, 70.0));
        assert_eq!(strengths.alpha(FanCategory::Slow), strengths.slow);
        assert_eq!(strengths.alpha(FanCategory::Medium), strengths.medium);
        assert_eq!(strengths.alpha(FanCategory::Fast), strengths.fast);
    }
}
