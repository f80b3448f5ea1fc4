// ABOUTME: Route module organization for the LiftLog HTTP API
// ABOUTME: Shared AppState and the top-level router assembly with middleware layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! HTTP routes for the LiftLog server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the database managers and the session store.

/// Exercise catalog and custom exercise routes
pub mod exercises;
/// Health check and readiness routes
pub mod health;
/// Member profile routes
pub mod members;
/// Workout program routes
pub mod programs;
/// Live workout session routes
pub mod sessions;
/// Settings routes (weight unit)
pub mod settings;
/// Progress statistics routes
pub mod stats;
/// Workout history routes
pub mod workouts;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::session::SessionStore;

pub use exercises::ExercisesRoutes;
pub use health::HealthRoutes;
pub use members::MembersRoutes;
pub use programs::ProgramsRoutes;
pub use sessions::SessionsRoutes;
pub use settings::SettingsRoutes;
pub use stats::StatsRoutes;
pub use workouts::WorkoutsRoutes;

/// Shared state handed to every route handler
pub struct AppState {
    /// Database connection and managers
    pub database: Database,
    /// In-progress workout sessions
    pub sessions: SessionStore,
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Bundle the server's shared resources
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            sessions: SessionStore::new(),
            config,
        }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .merge(HealthRoutes::routes())
        .merge(MembersRoutes::routes(state.clone()))
        .merge(ExercisesRoutes::routes(state.clone()))
        .merge(ProgramsRoutes::routes(state.clone()))
        .merge(SessionsRoutes::routes(state.clone()))
        .merge(WorkoutsRoutes::routes(state.clone()))
        .merge(SettingsRoutes::routes(state.clone()))
        .merge(StatsRoutes::routes(state.clone()))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
