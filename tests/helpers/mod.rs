// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the Axum request helper and in-memory database setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use std::sync::Arc;

use liftlog_server::config::environment::ServerConfig;
use liftlog_server::database::Database;
use liftlog_server::routes::AppState;

/// Create a fresh in-memory database with all tables migrated
pub async fn test_database() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// Create shared application state backed by an in-memory database
pub async fn test_state() -> Arc<AppState> {
    let database = test_database().await;
    let config = ServerConfig::from_env().expect("Failed to load test config");
    Arc::new(AppState::new(database, config))
}
