//! Mamdani Fuzzy Inference Engine
//!
//! ## Overview
//!
//! [`FuzzyEngine`] maps two crisp sensor readings - temperature (°C) and
//! relative humidity (%RH) - to a crisp fan-speed percentage, in three
//! phases executed fresh on every call:
//!
//! ```text
//! (temperature, humidity)
//!        │
//!        ▼
//!   Fuzzification      six membership degrees          variables::fuzzify
//!        │
//!        ▼
//!   Inference          alpha per output category       rules::infer
//!        │
//!        ▼
//!   Defuzzification    discrete centroid, rounded      defuzz::Centroid
//!        │
//!        ▼
//!   ComputeResult { fuzzified, alpha, output }
//! ```
//!
//! The engine holds no mutable state - only the sampling configuration - so
//! a single instance is safe to share across threads and every result is a
//! complete, self-consistent snapshot for the inputs it was called with.
//!
//! ## Totality
//!
//! `compute` cannot fail. Inputs far outside the sensor ranges saturate to
//! membership 0 or 1, NaN carries membership 0 everywhere, and the
//! no-rule-fired case defuzzifies to 0 by definition. There are no panics
//! and no error returns on the compute path.
//!
//! ```
//! use fuzzyfan_core::FuzzyEngine;
//!
//! let engine = FuzzyEngine::new();
//! let result = engine.compute(27.0, 50.0);
//!
//! assert_eq!(result.output, 50);
//! assert_eq!(result.alpha.medium, 1.0);
//! assert!(result.has_active_rule());
//! ```

use heapless::Vec;

use crate::defuzz::{Centroid, CurvePoint, MAX_SAMPLES};
use crate::errors::ConfigResult;
use crate::rules::{self, RuleStrengths};
use crate::variables::{self, Fuzzified};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Result of one engine evaluation.
///
/// An immutable snapshot: the fuzzified input degrees, the per-category rule
/// strengths, and the crisp output percentage. Nothing here is retained by
/// the engine; the caller owns any notion of "current fan speed".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputeResult {
    /// Membership degrees of both inputs
    pub fuzzified: Fuzzified,
    /// Aggregate rule strength per output category
    pub alpha: RuleStrengths,
    /// Crisp fan speed, whole percent in [0, 100]
    pub output: u8,
}

impl ComputeResult {
    /// Whether any rule fired this evaluation.
    ///
    /// Lets a display distinguish "no rule active" from a genuinely low
    /// output produced by small but nonzero alphas.
    pub fn has_active_rule(&self) -> bool {
        self.alpha.any_active()
    }
}

/// Mamdani fuzzy inference engine for fan-speed control.
///
/// Carries only defuzzification configuration; see the module docs for the
/// computation it performs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuzzyEngine {
    defuzz: Centroid,
}

impl FuzzyEngine {
    /// Engine with the standard 2 % sampling step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom defuzzification sampling step.
    ///
    /// The step is part of the observable contract: a different grid can
    /// round to a different percent for the same inputs.
    pub fn with_step(step: f32) -> ConfigResult<Self> {
        Ok(Self { defuzz: Centroid::new(step)? })
    }

    /// The configured sampling step (%)
    pub fn step(&self) -> f32 {
        self.defuzz.step()
    }

    /// Evaluate both inputs and produce a crisp fan speed.
    ///
    /// Pure and total: any pair of `f32` values is accepted, identical
    /// inputs produce identical results, and there is no side effect beyond
    /// an optional debug log line.
    pub fn compute(&self, temperature_c: f32, humidity_pct: f32) -> ComputeResult {
        let fuzzified = variables::fuzzify(temperature_c, humidity_pct);
        let alpha = rules::infer(&fuzzified);
        let output = self.defuzz.crisp(&alpha);

        log_debug!(
            "compute: t={} h={} alpha=[{} {} {}] -> {}%",
            temperature_c, humidity_pct, alpha.slow, alpha.medium, alpha.fast, output
        );

        ComputeResult { fuzzified, alpha, output }
    }

    /// Sample the aggregated output fuzzy set for the given rule strengths.
    ///
    /// Diagnostic companion to [`FuzzyEngine::compute`]: returns the exact
    /// grid the centroid integrates over, for hosts that render the clipped
    /// output area behind the crisp needle.
    pub fn aggregate_curve(&self, alpha: &RuleStrengths) -> Vec<CurvePoint, MAX_SAMPLES> {
        self.defuzz.sample_curve(alpha)
    }
}
