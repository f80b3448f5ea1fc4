// ABOUTME: Main library entry point for the LiftLog workout tracking server
// ABOUTME: Provides program management, circuit expansion, live sessions, and history over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![deny(unsafe_code)]

//! # LiftLog Server
//!
//! A workout tracking backend for small groups: members, exercise catalogs,
//! workout programs with circuit/superset groups, live workout sessions, and
//! saved history with progress statistics.
//!
//! ## Features
//!
//! - **Programs**: Reusable workout templates with per-exercise targets and
//!   optional circuit group assignments
//! - **Circuit expansion**: Starting a session from a program unrolls its
//!   circuit groups into per-round exercise instances in alternating order
//! - **Live sessions**: Server-held in-progress workouts with exercise and
//!   set mutation endpoints
//! - **History and stats**: Finished workouts persist with volume totals and
//!   feed daily-volume, per-exercise, and personal-record queries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use liftlog_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("LiftLog server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Configuration management from environment variables
pub mod config;

/// SQLite database access and per-domain managers
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Structured logging setup with configurable output formats
pub mod logging;

/// Core data structures for members, programs, workouts, and the catalog
pub mod models;

/// HTTP routes and the application router
pub mod routes;

/// Live session tracking and circuit/superset expansion
pub mod session;

/// Weight unit conversion and display rounding
pub mod units;
