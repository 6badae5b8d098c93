// ABOUTME: Typed profile repository over an injected key-value store
// ABOUTME: Persists the versioned onboarding record as one JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile persistence
//!
//! The onboarding result is stored as a single JSON blob under one key.
//! Every document carries `schema_version`; documents written by an unknown
//! version are rejected rather than guessed at.

use crate::constants::storage_keys::{PROFILE, PROFILE_SCHEMA_VERSION};
use crate::errors::{AppError, AppResult};
use crate::intelligence::CalculationPath;
use crate::models::{FitnessGoal, GoalSet, UserProfile};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Persisted result of a completed onboarding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingRecord {
    /// Document schema version
    pub schema_version: u32,
    /// Record identifier
    pub id: Uuid,
    /// Biometrics entered during onboarding
    pub profile: UserProfile,
    /// Chosen fitness goal
    pub goal: FitnessGoal,
    /// Formula variant the goals were computed with
    pub calculation: CalculationPath,
    /// Computed daily goals
    pub goals: GoalSet,
    /// Selected credit goals
    #[serde(default)]
    pub credit_goal_ids: Vec<String>,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

impl OnboardingRecord {
    /// New record at the current schema version, completed now
    #[must_use]
    pub fn new(
        profile: UserProfile,
        goal: FitnessGoal,
        calculation: CalculationPath,
        goals: GoalSet,
        credit_goal_ids: Vec<String>,
    ) -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            id: Uuid::new_v4(),
            profile,
            goal,
            calculation,
            goals,
            credit_goal_ids,
            completed_at: Utc::now(),
        }
    }
}

/// Repository reading and writing the onboarding record
#[derive(Debug, Clone)]
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    /// Repository using the default profile key
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, PROFILE)
    }

    /// Repository storing the record under `key`
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Storage key in use
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored record, `None` when nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the document is malformed or was
    /// written with an unsupported schema version
    pub fn load(&self) -> AppResult<Option<OnboardingRecord>> {
        let Some(raw) = self.store.get(&self.key) else {
            debug!(key = %self.key, "No stored profile");
            return Ok(None);
        };

        let document: Value = serde_json::from_str(&raw)?;
        let version = document.get("schema_version").and_then(Value::as_u64);
        if version != Some(u64::from(PROFILE_SCHEMA_VERSION)) {
            warn!(key = %self.key, ?version, "Rejected stored profile with unsupported schema");
            return Err(AppError::serialization(format!(
                "Unsupported profile schema version {} (expected {PROFILE_SCHEMA_VERSION})",
                version.map_or_else(|| "<missing>".to_owned(), |v| v.to_string())
            ))
            .with_resource_id(self.key.clone()));
        }

        let record = serde_json::from_value(document)?;
        Ok(Some(record))
    }

    /// Save `record`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` for a record at another schema version and
    /// `StorageError` when the store rejects the write
    pub fn save(&self, record: &OnboardingRecord) -> AppResult<()> {
        if record.schema_version != PROFILE_SCHEMA_VERSION {
            return Err(AppError::invalid_state(format!(
                "Cannot save profile at schema version {}",
                record.schema_version
            )));
        }

        let document = serde_json::to_string(record)?;
        if !self.store.set(&self.key, &document) {
            return Err(AppError::storage("Failed to persist profile").with_resource_id(&self.key));
        }
        info!(key = %self.key, record_id = %record.id, "Saved profile");
        Ok(())
    }

    /// Delete the stored record
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store rejects the removal
    pub fn clear(&self) -> AppResult<()> {
        if !self.store.remove(&self.key) {
            return Err(AppError::storage("Failed to clear profile").with_resource_id(&self.key));
        }
        info!(key = %self.key, "Cleared profile");
        Ok(())
    }
}
