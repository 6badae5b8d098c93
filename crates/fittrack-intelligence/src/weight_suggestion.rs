// ABOUTME: Body-battery driven load suggestions for the next strength set
// ABOUTME: Parses last logged performance and scales load and reps by readiness band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Suggestion Module
//!
//! A logged set reads like `60kg/10`, `135lb/8-10` or `BW/12`. Given the
//! last logged set and today's body battery (0-100) the heuristic picks a
//! readiness band, scales the load, and proposes a rep range:
//!
//! | Body battery | Band | Load | Reps | Bodyweight reps |
//! |---|---|---|---|---|
//! | ≥ 90 | Peak | +5% | 6-8 | +1 |
//! | ≥ 80 | High | +2.5% | 8-10 | +1 |
//! | ≥ 70 | Steady | ±0 | 10-12 | same |
//! | < 70 | Recovering | −2.5% | 12-15 | −1 (min 1) |
//!
//! Loads round to the nearest 0.5 kg or 0.25 lb. Input that does not parse
//! is echoed back with a hint instead of failing.

use crate::config::training::{BandPrescription, TrainingLoadConfig};
use fittrack_core::constants::body_battery;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Matches `60kg/10`, `62.5 KG / 8-10`, `135lbs/8`, `bw/12`
static PERFORMANCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(\d+(?:\.\d+)?)\s*(kgs?|lbs?)|(bw))\s*/\s*(\d+)(?:\s*-\s*(\d+))?\s*$",
    )
    .ok()
});

/// Readiness derived from body battery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    /// Fully recovered, push the load
    Peak,
    /// Well recovered, small progression
    High,
    /// Repeat the last load
    Steady,
    /// Back off
    Recovering,
}

impl ReadinessBand {
    /// Band for a body battery reading, clamped to 0..=100
    #[must_use]
    pub fn from_body_battery(body_battery: u8, config: &TrainingLoadConfig) -> Self {
        let battery = body_battery.clamp(body_battery::MIN, body_battery::MAX);
        if battery >= config.peak_threshold {
            Self::Peak
        } else if battery >= config.high_threshold {
            Self::High
        } else if battery >= config.steady_threshold {
            Self::Steady
        } else {
            Self::Recovering
        }
    }

    /// Configured prescription for this band
    #[must_use]
    pub const fn prescription(self, config: &TrainingLoadConfig) -> &BandPrescription {
        match self {
            Self::Peak => &config.peak,
            Self::High => &config.high,
            Self::Steady => &config.steady,
            Self::Recovering => &config.recovering,
        }
    }
}

impl fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Peak => "peak",
            Self::High => "high",
            Self::Steady => "steady",
            Self::Recovering => "recovering",
        };
        f.write_str(label)
    }
}

/// Unit of a logged load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadUnit {
    /// Kilograms
    Kilograms,
    /// Pounds
    Pounds,
    /// Bodyweight, no external load
    Bodyweight,
}

impl LoadUnit {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
            Self::Bodyweight => "",
        }
    }
}

/// Parsed form of a logged set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LastPerformance {
    /// Load; `None` for bodyweight
    pub load: Option<f64>,
    /// Unit of `load`
    pub unit: LoadUnit,
    /// Reps performed; the upper bound when a range was logged
    pub reps: u32,
}

/// Suggested next set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightSuggestion {
    /// Suggestion text, e.g. `61.5kg/8-10`; the original input when it did not parse
    pub suggestion: String,
    /// Human readable explanation or format hint
    pub message: String,
    /// Readiness band used
    pub band: ReadinessBand,
    /// Parsed input, if recognized
    pub parsed: Option<LastPerformance>,
}

impl WeightSuggestion {
    /// Whether the input was recognized
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.parsed.is_some()
    }
}

/// Parse a logged set such as `60kg/10`, `135lbs/8-10` or `BW/12`
#[must_use]
pub fn parse_last_performance(input: &str) -> Option<LastPerformance> {
    let pattern = PERFORMANCE_PATTERN.as_ref()?;
    let caps = pattern.captures(input)?;

    let low: u32 = caps.get(4)?.as_str().parse().ok()?;
    let reps = match caps.get(5) {
        Some(high) => high.as_str().parse::<u32>().ok()?.max(low),
        None => low,
    };
    if reps == 0 {
        return None;
    }

    if caps.get(3).is_some() {
        return Some(LastPerformance {
            load: None,
            unit: LoadUnit::Bodyweight,
            reps,
        });
    }

    let load: f64 = caps.get(1)?.as_str().parse().ok()?;
    if !load.is_finite() || load <= 0.0 {
        return None;
    }
    let unit = if caps.get(2)?.as_str().to_lowercase().starts_with("kg") {
        LoadUnit::Kilograms
    } else {
        LoadUnit::Pounds
    };
    Some(LastPerformance {
        load: Some(load),
        unit,
        reps,
    })
}

/// Suggest the next set with the default training load configuration
#[must_use]
pub fn suggest_weight(last_performance: &str, body_battery: u8) -> WeightSuggestion {
    suggest_weight_with(last_performance, body_battery, &TrainingLoadConfig::default())
}

/// Suggest the next set with an explicit configuration
#[must_use]
pub fn suggest_weight_with(
    last_performance: &str,
    body_battery: u8,
    config: &TrainingLoadConfig,
) -> WeightSuggestion {
    let battery = body_battery.clamp(body_battery::MIN, body_battery::MAX);
    let band = ReadinessBand::from_body_battery(battery, config);
    let prescription = band.prescription(config);

    let Some(parsed) = parse_last_performance(last_performance) else {
        debug!(input = last_performance, "Unrecognized last performance");
        return WeightSuggestion {
            suggestion: last_performance.to_owned(),
            message: format!(
                "Could not read '{}'. Log your last set like 60kg/10, 135lb/8 or BW/12.",
                last_performance.trim()
            ),
            band,
            parsed: None,
        };
    };

    let (suggestion, message) = match parsed.load {
        None => {
            let reps = parsed
                .reps
                .saturating_add_signed(prescription.bodyweight_rep_change)
                .max(1);
            (
                format!("BW/{reps}"),
                format!("Body battery {battery} ({band}): aim for {reps} reps."),
            )
        }
        Some(load) => {
            let increment = match parsed.unit {
                LoadUnit::Pounds => config.lb_increment,
                LoadUnit::Kilograms | LoadUnit::Bodyweight => config.kg_increment,
            };
            let next = round_to_increment(load * (1.0 + prescription.load_change), increment);
            let unit = parsed.unit.suffix();
            let next_text = format_load(next);
            (
                format!("{next_text}{unit}/{}", prescription.rep_range),
                format!(
                    "Body battery {battery} ({band}): {} ({}{unit} to {next_text}{unit}), aim for {} reps.",
                    describe_change(prescription.load_change),
                    format_load(load),
                    prescription.rep_range
                ),
            )
        }
    };

    WeightSuggestion {
        suggestion,
        message,
        band,
        parsed: Some(parsed),
    }
}

/// Round to the nearest multiple of `increment`
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

fn format_load(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn describe_change(change: f64) -> String {
    if change.abs() < f64::EPSILON {
        "keep the load".to_owned()
    } else if change > 0.0 {
        format!("add {}%", format_load(change * 100.0))
    } else {
        format!("drop {}%", format_load(-change * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let kg = parse_last_performance("60kg/10").unwrap();
        assert_eq!(kg.load, Some(60.0));
        assert_eq!(kg.unit, LoadUnit::Kilograms);
        assert_eq!(kg.reps, 10);

        let lb = parse_last_performance(" 135 LBS / 8-10 ").unwrap();
        assert_eq!(lb.unit, LoadUnit::Pounds);
        assert_eq!(lb.reps, 10);

        let bw = parse_last_performance("bw/12").unwrap();
        assert_eq!(bw.load, None);
        assert_eq!(bw.unit, LoadUnit::Bodyweight);

        assert!(parse_last_performance("60kg").is_none());
        assert!(parse_last_performance("60kg/0").is_none());
        assert!(parse_last_performance("0kg/5").is_none());
    }

    #[test]
    fn test_band_thresholds() {
        let config = TrainingLoadConfig::default();
        assert_eq!(ReadinessBand::from_body_battery(90, &config), ReadinessBand::Peak);
        assert_eq!(ReadinessBand::from_body_battery(89, &config), ReadinessBand::High);
        assert_eq!(ReadinessBand::from_body_battery(70, &config), ReadinessBand::Steady);
        assert_eq!(
            ReadinessBand::from_body_battery(69, &config),
            ReadinessBand::Recovering
        );
        assert_eq!(ReadinessBand::from_body_battery(255, &config), ReadinessBand::Peak);
    }

    #[test]
    fn test_rounding() {
        assert!((round_to_increment(61.7, 0.5) - 61.5).abs() < f64::EPSILON);
        assert!((round_to_increment(138.4, 0.25) - 138.5).abs() < f64::EPSILON);
        assert_eq!(format_load(60.0), "60");
        assert_eq!(format_load(138.25), "138.25");
    }

    #[test]
    fn test_bodyweight_reps_never_below_one() {
        let suggestion = suggest_weight("BW/1", 10);
        assert_eq!(suggestion.suggestion, "BW/1");
    }
}
