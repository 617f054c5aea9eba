//! Humidity Fuzzy Sets (Dry / Normal / Wet)
//!
//! Relative humidity is a percentage, so the natural domain is 0-100 %RH.
//! Sensor drift can still report slightly outside it; saturation handles
//! that the same way as for temperature.
//!
//! Set shapes:
//!
//! ```text
//! degree   Dry        Normal         Wet
//!   1 |\              /\                 /---
//!     | \            /  \               /
//!     |  \          /    \             /
//!   0 |   \________/      \___________/
//!     +---+----+----+----+----+----+------> %RH
//!         0   20   40  50    60   80  100
//! ```
//!
//! Normal peaks at exactly 50 %RH with no plateau - a triangle, where the
//! temperature Normal set is a trapezoid. The asymmetry is intentional rule
//! design and is preserved as-is; see the crate-level notes.

use crate::membership::PiecewiseLinear;

/// Humidity at which Dry has fully faded out (%RH).
pub const HUMIDITY_DRY_ZERO_PCT: f32 = 40.0;

/// Foot of the Normal triangle on the dry side (%RH).
pub const HUMIDITY_NORMAL_LOW_PCT: f32 = 20.0;

/// Single-point peak of the Normal triangle (%RH).
pub const HUMIDITY_NORMAL_PEAK_PCT: f32 = 50.0;

/// Foot of the Normal triangle on the wet side (%RH).
pub const HUMIDITY_NORMAL_HIGH_PCT: f32 = 80.0;

/// Humidity at which Wet starts rising (%RH).
pub const HUMIDITY_WET_ZERO_PCT: f32 = 60.0;

/// Humidity at which Wet saturates at 1 (%RH).
pub const HUMIDITY_WET_FULL_PCT: f32 = 100.0;

/// Dry: 1 at 0 %RH, fading out by 40 %RH.
pub const DRY: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (0.0, 1.0),
    (HUMIDITY_DRY_ZERO_PCT, 0.0),
]);

/// Normal: triangle 20 - 50 - 80 %RH with a single-point peak.
pub const NORMAL: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (HUMIDITY_NORMAL_LOW_PCT, 0.0),
    (HUMIDITY_NORMAL_PEAK_PCT, 1.0),
    (HUMIDITY_NORMAL_HIGH_PCT, 0.0),
]);

/// Wet: rising from 60 %RH, saturated at 1 from 100 %RH.
pub const WET: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (HUMIDITY_WET_ZERO_PCT, 0.0),
    (HUMIDITY_WET_FULL_PCT, 1.0),
]);

/// The three humidity fuzzy sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumiditySet {
    /// Air dry enough to need little airflow
    Dry,
    /// Comfortable band around 50 %RH
    Normal,
    /// Saturated air
    Wet,
}

/// Membership degrees of one humidity reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HumidityDegrees {
    /// Degree of membership in Dry
    pub dry: f32,
    /// Degree of membership in Normal
    pub normal: f32,
    /// Degree of membership in Wet
    pub wet: f32,
}

impl HumidityDegrees {
    /// Degree of the given set
    pub fn degree(&self, set: HumiditySet) -> f32 {
        match set {
            HumiditySet::Dry => self.dry,
            HumiditySet::Normal => self.normal,
            HumiditySet::Wet => self.wet,
        }
    }
}

/// Evaluate all three humidity sets against a crisp reading.
pub fn fuzzify(humidity_pct: f32) -> HumidityDegrees {
    HumidityDegrees {
        dry: DRY.degree(humidity_pct),
        normal: NORMAL.degree(humidity_pct),
        wet: WET.degree(humidity_pct),
    }
}
