// ABOUTME: Environment configuration management for the fittrack client
// ABOUTME: Parses storage backend, data directory, profile key and onboarding flow from env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{env_config, service_names, storage_keys};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use crate::onboarding::OnboardingFlow;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Name of the JSON document written by the file store
const STORE_FILE_NAME: &str = "store.json";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Key-value storage backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    Memory,
    /// One JSON document in the data directory
    #[default]
    File,
}

impl StorageBackend {
    /// Parse `FITTRACK_STORAGE`
    ///
    /// # Errors
    ///
    /// Returns a config error for anything other than `memory` or `file`
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Invalid {}: '{other}' (expected memory or file)",
                env_config::STORAGE
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use
    pub backend: StorageBackend,
    /// Directory for on-disk data
    pub data_dir: PathBuf,
    /// Key the onboarding record is stored under
    pub profile_key: String,
}

impl StorageConfig {
    /// Path of the file store document
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            profile_key: storage_keys::PROFILE.to_owned(),
        }
    }
}

/// Client configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Storage settings
    pub storage: StorageConfig,
    /// Flow used when the wizard is started without an explicit choice
    pub onboarding_flow: OnboardingFlow,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            storage: StorageConfig::default(),
            onboarding_flow: OnboardingFlow::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when `FITTRACK_STORAGE` or
    /// `FITTRACK_ONBOARDING_FLOW` hold an unknown value
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));

        let backend = match env::var(env_config::STORAGE) {
            Ok(value) => StorageBackend::parse(&value)?,
            Err(_) => StorageBackend::default(),
        };

        let data_dir = env::var(env_config::DATA_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let profile_key = env::var(env_config::PROFILE_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| storage_keys::PROFILE.to_owned());

        let onboarding_flow = match env::var(env_config::ONBOARDING_FLOW) {
            Ok(value) => value
                .parse()
                .map_err(|e: AppError| AppError::config(e.message))?,
            Err(_) => OnboardingFlow::default(),
        };

        let config = Self {
            environment,
            storage: StorageConfig {
                backend,
                data_dir,
                profile_key,
            },
            onboarding_flow,
            logging: LoggingConfig::from_env(),
        };

        debug!(
            environment = %config.environment,
            storage = %config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Log a one-line configuration summary
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            storage = %self.storage.backend,
            data_dir = %self.storage.data_dir.display(),
            profile_key = %self.storage.profile_key,
            onboarding_flow = %self.onboarding_flow,
            "fittrack configuration"
        );
    }
}

/// Platform data directory joined with `fittrack`, or `./.fittrack` when unknown
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".fittrack"),
        |dir| dir.join(service_names::FITTRACK),
    )
}
