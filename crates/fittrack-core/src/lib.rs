// ABOUTME: Core types and constants for the fittrack client platform
// ABOUTME: Foundation crate with error handling, constants and value models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fittrack Core
//!
//! Foundation crate shared by the goal calculator and the client modules.
//! It changes rarely, which keeps incremental builds of the workspace fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Energy factors, fallback goals, storage keys and env names
//! - **models**: Profile, goal, food, credit and workout value types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
