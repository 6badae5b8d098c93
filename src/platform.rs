// ABOUTME: Platform capability probe injected into the client core
// ABOUTME: Static and environment-driven implementations of PlatformProbe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::env::consts::OS;
use tracing::debug;

/// Name reported for browser builds; every other platform counts as native
pub const WEB_PLATFORM: &str = "web";

/// What the host platform can do
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Native app with device integrations (health data, notifications)
    pub is_native: bool,
    /// Lowercase platform name, e.g. `ios`, `android`, `web`, `linux`
    pub platform_name: String,
}

impl PlatformInfo {
    /// Build info for `name`, deriving `is_native` from it
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let platform_name = name.trim().to_lowercase();
        Self {
            is_native: platform_name != WEB_PLATFORM,
            platform_name,
        }
    }
}

/// Capability source
pub trait PlatformProbe: Send + Sync {
    /// Capabilities of the current platform
    fn capabilities(&self) -> PlatformInfo;
}

/// Probe returning fixed capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatformProbe {
    info: PlatformInfo,
}

impl StaticPlatformProbe {
    /// Probe reporting exactly `info`
    #[must_use]
    pub const fn new(info: PlatformInfo) -> Self {
        Self { info }
    }

    /// Native platform named `name`
    #[must_use]
    pub fn native(name: &str) -> Self {
        Self::new(PlatformInfo {
            is_native: true,
            platform_name: name.to_lowercase(),
        })
    }

    /// Browser build
    #[must_use]
    pub fn web() -> Self {
        Self::new(PlatformInfo::for_name(WEB_PLATFORM))
    }
}

impl PlatformProbe for StaticPlatformProbe {
    fn capabilities(&self) -> PlatformInfo {
        self.info.clone()
    }
}

/// Probe reading `FITTRACK_PLATFORM`, defaulting to the compile target OS
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPlatformProbe;

impl PlatformProbe for EnvPlatformProbe {
    fn capabilities(&self) -> PlatformInfo {
        let info = env::var(env_config::PLATFORM)
            .ok()
            .filter(|name| !name.trim().is_empty())
            .map_or_else(|| PlatformInfo::for_name(OS), |name| PlatformInfo::for_name(&name));
        debug!(platform = %info.platform_name, native = info.is_native, "Probed platform");
        info
    }
}
