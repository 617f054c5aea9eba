//! Discrete Centroid Defuzzification
//!
//! ## Method
//!
//! Mamdani inference leaves us with an aggregated output fuzzy set: each
//! output membership function clipped at its category's alpha, combined by
//! pointwise max. The crisp output is that set's center of area.
//!
//! A closed-form integral over clipped trapezoids is possible but fiddly;
//! this engine deliberately uses discrete sampling instead, and the sampling
//! grid is part of the observable contract - not an implementation detail to
//! be refined away:
//!
//! ```text
//! for z in 0, step, 2*step, ..., <= 100:
//!     mu = max(min(aSlow, Slow(z)), min(aMed, Medium(z)), min(aFast, Fast(z)))
//!     numerator   += z * mu
//!     denominator += mu
//! crisp = numerator / denominator    (0 when denominator == 0)
//! ```
//!
//! The default step of 2 % gives 51 samples over [0, 100]. A finer step
//! changes the numeric result, so the step is explicit configuration on
//! [`Centroid`] rather than a hidden constant; callers that change it are
//! changing behavior and should treat it as such.
//!
//! ## Zero-Denominator Guard
//!
//! When no rule fires at all, every clipped function is identically zero and
//! the denominator vanishes; the crisp output is then defined as 0. With the
//! shipped rule base this cannot happen for real inputs - the input sets
//! cover the whole line, so some rule always fires - but the guard stays in
//! place so future rule-table edits degrade to "fan off" instead of NaN.

use heapless::Vec;

use crate::errors::{ConfigError, ConfigResult};
use crate::rules::RuleStrengths;
use crate::variables::fan::{FAST, MEDIUM, SLOW, SPEED_MAX_PCT, SPEED_MIN_PCT};

/// Default sampling step over the output domain (%).
pub const DEFAULT_STEP_PCT: f32 = 2.0;

/// Capacity of the sampled aggregate curve.
///
/// Bounds how fine a sampling step the engine accepts: the full grid,
/// including both endpoints, must fit in one `heapless::Vec` of this size.
pub const MAX_SAMPLES: usize = 128;

/// One sample of the aggregated output fuzzy set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Sample position in the output domain (%)
    pub speed_pct: f32,
    /// Aggregated membership degree at this position
    pub degree: f32,
}

/// Discrete center-of-area sampler over the fan-speed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    step: f32,
}

impl Default for Centroid {
    fn default() -> Self {
        Self { step: DEFAULT_STEP_PCT }
    }
}

impl Centroid {
    /// Create a sampler with a custom step.
    ///
    /// The step must be finite, positive, and coarse enough that the sample
    /// grid fits in [`MAX_SAMPLES`] points.
    pub fn new(step: f32) -> ConfigResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep { step });
        }

        let span = SPEED_MAX_PCT - SPEED_MIN_PCT;
        let samples = (span / step) as usize + 1;
        if samples > MAX_SAMPLES {
            return Err(ConfigError::StepTooFine {
                step,
                min_step: span / (MAX_SAMPLES - 1) as f32,
            });
        }

        Ok(Self { step })
    }

    /// The configured sampling step (%)
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of samples the grid produces, endpoints included
    pub fn samples(&self) -> usize {
        ((SPEED_MAX_PCT - SPEED_MIN_PCT) / self.step) as usize + 1
    }

    /// Crisp output for the given rule strengths, rounded to whole percent.
    pub fn crisp(&self, alpha: &RuleStrengths) -> u8 {
        let mut numerator = 0.0f32;
        let mut denominator = 0.0f32;

        for index in 0..self.samples() {
            // Recomputed from the index so the grid does not drift
            let z = SPEED_MIN_PCT + index as f32 * self.step;
            let mu = aggregate(alpha, z);
            numerator += z * mu;
            denominator += mu;
        }

        if denominator == 0.0 {
            return 0;
        }

        // The weighted mean of sample positions never leaves [0, 100]
        libm::roundf(numerator / denominator) as u8
    }

    /// Sample the aggregated output set for rendering.
    ///
    /// Returns the same grid [`Centroid::crisp`] integrates over, so a host
    /// can draw the exact area the centroid was taken from.
    pub fn sample_curve(&self, alpha: &RuleStrengths) -> Vec<CurvePoint, MAX_SAMPLES> {
        let mut curve = Vec::new();
        for index in 0..self.samples() {
            let z = SPEED_MIN_PCT + index as f32 * self.step;
            let point = CurvePoint { speed_pct: z, degree: aggregate(alpha, z) };
            if curve.push(point).is_err() {
                break; // capacity is guaranteed by the constructor
            }
        }
        curve
    }
}

/// Aggregated membership at one output position: clip each output set by its
/// category's alpha, then take the pointwise max.
pub fn aggregate(alpha: &RuleStrengths, speed_pct: f32) -> f32 {
    let slow = alpha.slow.min(SLOW.degree(speed_pct));
    let medium = alpha.medium.min(MEDIUM.degree(speed_pct));
    let fast = alpha.fast.min(FAST.degree(speed_pct));
    slow.max(medium).max(fast)
}
