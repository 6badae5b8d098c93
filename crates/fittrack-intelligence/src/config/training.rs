// ABOUTME: Training load configuration for body-battery driven weight suggestions
// ABOUTME: Readiness band thresholds, load adjustments, rep ranges and plate rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One readiness band's prescription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandPrescription {
    /// Fractional load change (0.05 = +5%)
    pub load_change: f64,
    /// Suggested rep range for loaded lifts
    pub rep_range: String,
    /// Rep change for bodyweight lifts
    pub bodyweight_rep_change: i32,
}

/// Body battery thresholds and prescriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingLoadConfig {
    /// Lowest body battery for the peak band
    pub peak_threshold: u8,
    /// Lowest body battery for the high band
    pub high_threshold: u8,
    /// Lowest body battery for the steady band
    pub steady_threshold: u8,
    /// Peak band (default ≥ 90)
    pub peak: BandPrescription,
    /// High band (default ≥ 80)
    pub high: BandPrescription,
    /// Steady band (default ≥ 70)
    pub steady: BandPrescription,
    /// Recovering band (below steady)
    pub recovering: BandPrescription,
    /// Kilogram rounding increment
    pub kg_increment: f64,
    /// Pound rounding increment
    pub lb_increment: f64,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self {
            peak_threshold: 90,
            high_threshold: 80,
            steady_threshold: 70,
            peak: BandPrescription {
                load_change: 0.05,
                rep_range: "6-8".to_owned(),
                bodyweight_rep_change: 1,
            },
            high: BandPrescription {
                load_change: 0.025,
                rep_range: "8-10".to_owned(),
                bodyweight_rep_change: 1,
            },
            steady: BandPrescription {
                load_change: 0.0,
                rep_range: "10-12".to_owned(),
                bodyweight_rep_change: 0,
            },
            recovering: BandPrescription {
                load_change: -0.025,
                rep_range: "12-15".to_owned(),
                bodyweight_rep_change: -1,
            },
            kg_increment: 0.5,
            lb_increment: 0.25,
        }
    }
}

impl TrainingLoadConfig {
    /// Validate thresholds and increments
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds do not descend or an increment is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.peak_threshold > self.high_threshold
            && self.high_threshold > self.steady_threshold)
        {
            return Err(ConfigError::InvalidRange(
                "body battery thresholds must satisfy peak > high > steady",
            ));
        }
        if self.peak_threshold > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "peak_threshold must be at most 100",
            ));
        }
        if self.kg_increment <= 0.0 || self.lb_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding increments must be positive",
            ));
        }
        Ok(())
    }
}
