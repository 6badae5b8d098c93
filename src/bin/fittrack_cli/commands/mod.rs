// ABOUTME: Command implementations for fittrack-cli
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod foods;
pub mod goals;
pub mod platform;
pub mod profile;
pub mod session;
pub mod suggest;
