// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: App configuration, goal calculator overrides, logging settings and platform probing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::config::{AppConfig, Environment, StorageBackend};
use fittrack::errors::ErrorCode;
use fittrack::intelligence::config::{ConfigError, GoalCalculatorConfig};
use fittrack::logging::{LogFormat, LoggingConfig};
use fittrack::onboarding::OnboardingFlow;
use fittrack::platform::{EnvPlatformProbe, PlatformInfo, PlatformProbe, StaticPlatformProbe};
use serial_test::serial;
use std::env;
use std::env::consts::OS;
use std::path::PathBuf;

const APP_VARS: [&str; 5] = [
    "FITTRACK_STORAGE",
    "FITTRACK_DATA_DIR",
    "FITTRACK_PROFILE_KEY",
    "FITTRACK_ONBOARDING_FLOW",
    "ENVIRONMENT",
];

fn clear_app_vars() {
    for key in APP_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_storage_backend_parsing() {
    assert_eq!(StorageBackend::parse("memory").unwrap(), StorageBackend::Memory);
    assert_eq!(StorageBackend::parse(" FILE ").unwrap(), StorageBackend::File);
    let error = StorageBackend::parse("redis").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_app_vars();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.profile_key, "fittrack.profile");
    assert_eq!(config.onboarding_flow, OnboardingFlow::Simplified);
    assert!(config.storage.store_path().ends_with("store.json"));
}

#[test]
#[serial]
fn test_app_config_from_environment() {
    clear_app_vars();
    env::set_var("FITTRACK_STORAGE", "memory");
    env::set_var("FITTRACK_DATA_DIR", "/tmp/fittrack-test");
    env::set_var("FITTRACK_PROFILE_KEY", "alt.profile");
    env::set_var("FITTRACK_ONBOARDING_FLOW", "guided");
    env::set_var("ENVIRONMENT", "production");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/fittrack-test"));
    assert_eq!(config.storage.profile_key, "alt.profile");
    assert_eq!(config.onboarding_flow, OnboardingFlow::Guided);
    assert!(config.environment.is_production());

    clear_app_vars();
}

#[test]
#[serial]
fn test_app_config_rejects_unknown_values() {
    clear_app_vars();
    env::set_var("FITTRACK_STORAGE", "cloud");
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigError
    );

    clear_app_vars();
    env::set_var("FITTRACK_ONBOARDING_FLOW", "express");
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigError
    );
    clear_app_vars();
}

#[test]
#[serial]
fn test_goal_config_env_override() {
    env::set_var("FITTRACK_SIMPLIFIED_ADJUSTMENT_KCAL", "400");
    env::set_var("FITTRACK_FALLBACK_STEPS", "6000");

    let config = GoalCalculatorConfig::load().unwrap();
    assert!((config.adjustment.simplified_kcal - 400.0).abs() < f64::EPSILON);
    assert_eq!(config.fallback.steps, 6000);

    env::remove_var("FITTRACK_SIMPLIFIED_ADJUSTMENT_KCAL");
    env::remove_var("FITTRACK_FALLBACK_STEPS");
}

#[test]
#[serial]
fn test_goal_config_rejects_bad_values() {
    env::set_var("FITTRACK_FAT_SHARE_OF_CALORIES", "lots");
    assert!(matches!(
        GoalCalculatorConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    env::set_var("FITTRACK_FAT_SHARE_OF_CALORIES", "1.5");
    assert!(matches!(
        GoalCalculatorConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    env::remove_var("FITTRACK_FAT_SHARE_OF_CALORIES");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Pretty);
}

#[test]
fn test_logging_level_override() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
}

#[test]
fn test_static_platform_probe() {
    assert!(!StaticPlatformProbe::web().capabilities().is_native);
    let ios = StaticPlatformProbe::native("ios").capabilities();
    assert!(ios.is_native);
    assert_eq!(ios.platform_name, "ios");
    assert_eq!(PlatformInfo::for_name("WEB"), StaticPlatformProbe::web().capabilities());
}

#[test]
#[serial]
fn test_env_platform_probe() {
    env::set_var("FITTRACK_PLATFORM", "web");
    let web = EnvPlatformProbe.capabilities();
    assert!(!web.is_native);
    assert_eq!(web.platform_name, "web");

    env::set_var("FITTRACK_PLATFORM", "Android");
    let android = EnvPlatformProbe.capabilities();
    assert!(android.is_native);
    assert_eq!(android.platform_name, "android");

    env::remove_var("FITTRACK_PLATFORM");
    let host = EnvPlatformProbe.capabilities();
    assert_eq!(host.platform_name, OS);
    assert!(host.is_native);
}
