//! Temperature Fuzzy Sets (Cold / Normal / Hot)
//!
//! The nominal sensor range is 15-40 °C, the span of the input slider on the
//! original control panel. Readings outside it are legal: the membership
//! functions saturate, so -20 °C is simply fully Cold and 60 °C fully Hot.
//!
//! Set shapes:
//!
//! ```text
//! degree   Cold        Normal         Hot
//!   1 |-----\          _____         /-----
//!     |      \        /     \       /
//!     |       \      /       \     /
//!   0 |        \____/         \___/
//!     +-----+----+----+----+----+------> °C
//!          15   25   30   35
//! ```
//!
//! Cold and Normal overlap across 15-25 °C, Normal and Hot across 30-35 °C,
//! so a reading near a boundary fires rules on both sides with partial
//! strength. Normal carries a genuine plateau at 25-30 °C, unlike the
//! humidity Normal set, which peaks at a single point.

use crate::membership::PiecewiseLinear;

/// Lower edge of the Cold plateau and foot of the Normal ramp (°C).
pub const TEMP_COLD_FULL_C: f32 = 15.0;

/// End of the Cold support; Normal reaches its plateau here (°C).
pub const TEMP_NORMAL_LOW_C: f32 = 25.0;

/// End of the Normal plateau; foot of the Hot ramp (°C).
pub const TEMP_NORMAL_HIGH_C: f32 = 30.0;

/// End of the Normal support; Hot saturates at 1 from here on (°C).
pub const TEMP_HOT_FULL_C: f32 = 35.0;

/// Cold: 1 below 15 °C, fading out by 25 °C.
pub const COLD: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (TEMP_COLD_FULL_C, 1.0),
    (TEMP_NORMAL_LOW_C, 0.0),
]);

/// Normal: trapezoid rising 15 to 25 °C, plateau to 30 °C, gone by 35 °C.
pub const NORMAL: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (TEMP_COLD_FULL_C, 0.0),
    (TEMP_NORMAL_LOW_C, 1.0),
    (TEMP_NORMAL_HIGH_C, 1.0),
    (TEMP_HOT_FULL_C, 0.0),
]);

/// Hot: rising from 30 °C, saturated at 1 from 35 °C.
pub const HOT: PiecewiseLinear = PiecewiseLinear::from_breakpoints(&[
    (TEMP_NORMAL_HIGH_C, 0.0),
    (TEMP_HOT_FULL_C, 1.0),
]);

/// The three temperature fuzzy sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureSet {
    /// Below comfortable room temperature
    Cold,
    /// Comfortable band around 25-30 °C
    Normal,
    /// Above the comfortable band
    Hot,
}

/// Membership degrees of one temperature reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureDegrees {
    /// Degree of membership in Cold
    pub cold: f32,
    /// Degree of membership in Normal
    pub normal: f32,
    /// Degree of membership in Hot
    pub hot: f32,
}

impl TemperatureDegrees {
    /// Degree of the given set
    pub fn degree(&self, set: TemperatureSet) -> f32 {
        match set {
            TemperatureSet::Cold => self.cold,
            TemperatureSet::Normal => self.normal,
            TemperatureSet::Hot => self.hot,
        }
    }
}

/// Evaluate all three temperature sets against a crisp reading.
pub fn fuzzify(temperature_c: f32) -> TemperatureDegrees {
    TemperatureDegrees {
        cold: COLD.degree(temperature_c),
        normal: NORMAL.degree(temperature_c),
        hot: HOT.degree(temperature_c),
    }
}
