//! Mode-Aware Fan Controller
//!
//! Thin stateful collaborator around the stateless engine. The engine itself
//! must not remember anything between calls; the controller is where the
//! "current fan speed" state lives, together with the auto/manual mode
//! switch and the manual override percentage.
//!
//! In auto mode the effective speed is the engine's crisp output. In manual
//! mode the override drives the fan, but the fuzzy result is still computed
//! and returned so a display can show what the engine *would* do - useful
//! when comparing manual settings against the inference.

use crate::engine::{ComputeResult, FuzzyEngine};
use crate::variables::SpeedCategory;

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// How the effective fan speed is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FanMode {
    /// Fuzzy inference drives the fan
    #[default]
    Auto,
    /// The manual override percentage drives the fan
    Manual,
}

/// Outcome of one controller update
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlUpdate {
    /// The engine result for this reading pair (computed in both modes)
    pub result: ComputeResult,
    /// Speed actually sent to the fan, whole percent in [0, 100]
    pub effective_pct: u8,
    /// Display bucket of the effective speed
    pub category: SpeedCategory,
}

/// Stateful controller selecting between fuzzy output and manual override.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FanController {
    engine: FuzzyEngine,
    mode: FanMode,
    manual_pct: u8,
    current_pct: u8,
}

impl FanController {
    /// Controller in auto mode around the given engine.
    pub fn new(engine: FuzzyEngine) -> Self {
        Self { engine, ..Self::default() }
    }

    /// Current mode
    pub fn mode(&self) -> FanMode {
        self.mode
    }

    /// Switch between auto and manual operation.
    pub fn set_mode(&mut self, mode: FanMode) {
        self.mode = mode;
    }

    /// Set the manual override speed.
    ///
    /// Values outside [0, 100] are clamped (and logged); NaN clamps to 0.
    pub fn set_manual_speed(&mut self, speed_pct: f32) {
        let clamped = speed_pct.clamp(0.0, 100.0);
        if clamped != speed_pct {
            log_warn!("manual speed {} clamped to {}", speed_pct, clamped);
        }
        // NaN compares unequal above and clamps to the lower bound here
        self.manual_pct = if clamped.is_nan() { 0 } else { libm::roundf(clamped) as u8 };
    }

    /// The stored manual override (%)
    pub fn manual_speed(&self) -> u8 {
        self.manual_pct
    }

    /// Speed applied by the most recent update (%)
    pub fn current_speed(&self) -> u8 {
        self.current_pct
    }

    /// Borrow the wrapped engine
    pub fn engine(&self) -> &FuzzyEngine {
        &self.engine
    }

    /// Feed one reading pair through the controller.
    ///
    /// Runs the engine regardless of mode, then applies either its output or
    /// the manual override depending on [`FanController::mode`].
    pub fn update(&mut self, temperature_c: f32, humidity_pct: f32) -> ControlUpdate {
        let result = self.engine.compute(temperature_c, humidity_pct);

        let effective_pct = match self.mode {
            FanMode::Auto => result.output,
            FanMode::Manual => self.manual_pct,
        };
        self.current_pct = effective_pct;

        ControlUpdate {
            result,
            effective_pct,
            category: SpeedCategory::from_percent(effective_pct),
        }
    }
}
