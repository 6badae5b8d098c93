// ABOUTME: Platform command - reports detected platform capabilities
// ABOUTME: Honours FITTRACK_PLATFORM before falling back to the compile target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::platform::{EnvPlatformProbe, PlatformProbe};

use crate::helpers::display::print_json;

pub fn run(json: bool) -> Result<()> {
    let info = EnvPlatformProbe.capabilities();
    if json {
        return print_json(&info);
    }
    let kind = if info.is_native { "native" } else { "web" };
    println!("Platform: {} ({kind})", info.platform_name);
    Ok(())
}
