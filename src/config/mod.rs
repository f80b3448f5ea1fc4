// ABOUTME: Configuration module for the LiftLog server
// ABOUTME: Environment-variable driven settings with typed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

/// Environment-based configuration management
pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
