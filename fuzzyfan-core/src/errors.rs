//! Error Types for Engine Configuration
//!
//! ## Design Philosophy
//!
//! The compute path of the engine is total: every pair of real-valued inputs
//! maps to a defined output, because the membership functions saturate outside
//! their support and the zero-denominator case of defuzzification is defined
//! (output 0). There is therefore no taxonomy of runtime failures to
//! propagate - errors exist only where the caller hands the crate
//! configuration:
//!
//! - A custom defuzzification sampling step (`Centroid::new`)
//! - A custom membership breakpoint table (`PiecewiseLinear::new`)
//!
//! Error values follow the constraints of the embedded targets this crate
//! runs on:
//!
//! 1. **Small Size**: variants carry at most two `f32`/`usize` fields.
//! 2. **No Heap Allocation**: all data is inline, no `String`.
//! 3. **Copy Semantics**: errors are `Copy` so they return cheaply from
//!    constructors without move complications.

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sampling step is not a usable number (non-finite or not positive)
    #[error("Sampling step {step} must be finite and positive")]
    InvalidStep {
        /// The rejected step value
        step: f32,
    },

    /// Sampling step would produce more samples than the fixed curve capacity
    #[error("Sampling step {step} too fine, minimum is {min_step}")]
    StepTooFine {
        /// The rejected step value
        step: f32,
        /// Coarsest step that still fits the curve buffer
        min_step: f32,
    },

    /// Membership breakpoint table has no entries
    #[error("Membership table must contain at least one breakpoint")]
    EmptyTable,

    /// Breakpoint positions must be strictly increasing
    #[error("Breakpoint {index} is not strictly after its predecessor")]
    UnorderedTable {
        /// Index of the offending breakpoint
        index: usize,
    },

    /// Breakpoint carries a non-finite position or degree
    #[error("Breakpoint {index} is not a finite number")]
    NonFiniteBreakpoint {
        /// Index of the offending breakpoint
        index: usize,
    },

    /// Breakpoint degree falls outside the membership range
    #[error("Breakpoint {index} degree outside [0, 1]")]
    DegreeOutOfRange {
        /// Index of the offending breakpoint
        index: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidStep { step } =>
                defmt::write!(fmt, "Step {} must be finite and positive", step),
            Self::StepTooFine { step, min_step } =>
                defmt::write!(fmt, "Step {} too fine, minimum {}", step, min_step),
            Self::EmptyTable =>
                defmt::write!(fmt, "Empty membership table"),
            Self::UnorderedTable { index } =>
                defmt::write!(fmt, "Breakpoint {} out of order", index),
            Self::NonFiniteBreakpoint { index } =>
                defmt::write!(fmt, "Breakpoint {} not finite", index),
            Self::DegreeOutOfRange { index } =>
                defmt::write!(fmt, "Breakpoint {} degree outside [0, 1]", index),
        }
    }
}
