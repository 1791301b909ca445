//! Configuration type definitions
//!
//! These types hold the numeric constants the controller decides with.
//! Defaults match the factory configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::WeightClass;

/// Default ceiling for stress-sensitive fabrics (kg)
pub const DEFAULT_STRESS_SENSITIVE_MAX_KG: f32 = 4.0;

/// Default ceiling for robust fabrics (kg)
pub const DEFAULT_ROBUST_MAX_KG: f32 = 8.0;

/// Default dirtiness at which auto-detect picks the medium program (%)
pub const DEFAULT_MEDIUM_DIRT_PCT: f32 = 20.0;

/// Default dirtiness at which auto-detect picks the long program (%)
pub const DEFAULT_HIGH_DIRT_PCT: f32 = 40.0;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A weight ceiling is zero, negative or not finite
    InvalidWeightLimit,
    /// A dirt threshold lies outside [0, 100]
    InvalidThreshold,
    /// Medium threshold is above the high threshold
    ThresholdOrder,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Maximum permitted weight per weight class
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightLimits {
    /// Ceiling for fabrics prone to mechanical stress (kg)
    pub stress_sensitive_max_kg: f32,
    /// Ceiling for robust fabrics (kg)
    pub robust_max_kg: f32,
}

impl Default for WeightLimits {
    fn default() -> Self {
        Self {
            stress_sensitive_max_kg: DEFAULT_STRESS_SENSITIVE_MAX_KG,
            robust_max_kg: DEFAULT_ROBUST_MAX_KG,
        }
    }
}

impl WeightLimits {
    /// Get the ceiling for a weight class
    pub fn max_kg(&self, class: WeightClass) -> f32 {
        match class {
            WeightClass::StressSensitive => self.stress_sensitive_max_kg,
            WeightClass::Robust => self.robust_max_kg,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for limit in [self.stress_sensitive_max_kg, self.robust_max_kg] {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::InvalidWeightLimit);
            }
        }
        Ok(())
    }
}

/// Dirtiness band boundaries for auto-detect
///
/// A reading exactly on a boundary belongs to the higher band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirtThresholds {
    /// Lower bound of the medium band (%)
    pub medium_pct: f32,
    /// Lower bound of the long band (%)
    pub high_pct: f32,
}

impl Default for DirtThresholds {
    fn default() -> Self {
        Self {
            medium_pct: DEFAULT_MEDIUM_DIRT_PCT,
            high_pct: DEFAULT_HIGH_DIRT_PCT,
        }
    }
}

impl DirtThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        for pct in [self.medium_pct, self.high_pct] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(ConfigError::InvalidThreshold);
            }
        }
        if self.medium_pct > self.high_pct {
            return Err(ConfigError::ThresholdOrder);
        }
        Ok(())
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    pub weight_limits: WeightLimits,
    pub dirt_thresholds: DirtThresholds,
}

impl ControllerConfig {
    /// Check that every table entry is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weight_limits.validate()?;
        self.dirt_thresholds.validate()
    }
}
