// ABOUTME: Body weight history keyed by date
// ABOUTME: One entry per day with latest value and change-over-period queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weigh-in for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Day of the weigh-in
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

/// Weigh-ins sorted by date, at most one per day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightLog {
    entries: Vec<WeightEntry>,
}

impl WeightLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a weigh-in, replacing any entry for the same day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `weight_kg` is finite and positive
    pub fn record(&mut self, date: NaiveDate, weight_kg: f64) -> AppResult<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a positive number of kilograms, got {weight_kg}"
            ))
            .with_resource_id("weight_kg"));
        }

        let entry = WeightEntry { date, weight_kg };
        match self.entries.binary_search_by_key(&date, |e| e.date) {
            Ok(index) => self.entries[index] = entry,
            Err(index) => self.entries.insert(index, entry),
        }
        debug!(%date, weight_kg, "Recorded weight");
        Ok(())
    }

    /// Most recent weigh-in
    #[must_use]
    pub fn latest(&self) -> Option<WeightEntry> {
        self.entries.last().copied()
    }

    /// Entries oldest first
    #[must_use]
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// Number of weigh-ins
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight change from `days` before the latest entry to the latest entry
    ///
    /// The baseline is the newest weigh-in on or before that day. Returns
    /// `None` when the log does not reach back that far.
    #[must_use]
    pub fn change_over(&self, days: u32) -> Option<f64> {
        let latest = self.latest()?;
        let cutoff = latest.date.checked_sub_days(Days::new(u64::from(days)))?;
        let baseline = self
            .entries
            .iter()
            .rev()
            .find(|entry| entry.date <= cutoff)?;
        Some(latest.weight_kg - baseline.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_same_day_is_replaced() {
        let mut log = WeightLog::new();
        log.record(day(2), 80.0).unwrap();
        log.record(day(2), 79.5).unwrap();
        assert_eq!(log.len(), 1);
        assert!((log.latest().unwrap().weight_kg - 79.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_entries_stay_sorted() {
        let mut log = WeightLog::new();
        log.record(day(5), 79.0).unwrap();
        log.record(day(1), 81.0).unwrap();
        log.record(day(3), 80.0).unwrap();
        let dates: Vec<NaiveDate> = log.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(1), day(3), day(5)]);
    }
}
