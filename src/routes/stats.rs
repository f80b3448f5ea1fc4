// ABOUTME: Route handlers for progress statistics
// ABOUTME: Daily volume aggregation, per-exercise history, and personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::stats::{DailyVolume, ExerciseHistoryPoint, PersonalRecord};
use crate::errors::AppError;

use super::AppState;

/// Default lookback window for volume charts
const DEFAULT_VOLUME_DAYS: u32 = 30;

/// Query parameters for the volume endpoint
#[derive(Debug, Default, Deserialize)]
pub struct VolumeQuery {
    /// Restrict to one member's workouts
    pub member_id: Option<Uuid>,
    /// Lookback window in days
    pub days: Option<u32>,
}

/// Query parameters for member-scoped stats endpoints
#[derive(Debug, Default, Deserialize)]
pub struct MemberQuery {
    /// Restrict to one member's workouts
    pub member_id: Option<Uuid>,
}

/// Statistics routes handler
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/stats/volume", get(Self::handle_volume))
            .route("/api/stats/exercises/:name", get(Self::handle_history))
            .route("/api/stats/records", get(Self::handle_records))
            .with_state(state)
    }

    /// Handle GET /api/stats/volume
    async fn handle_volume(
        State(state): State<Arc<AppState>>,
        Query(query): Query<VolumeQuery>,
    ) -> Result<Json<Vec<DailyVolume>>, AppError> {
        let days = query.days.unwrap_or(DEFAULT_VOLUME_DAYS);
        Ok(Json(
            state
                .database
                .stats()
                .daily_volume(query.member_id, days)
                .await?,
        ))
    }

    /// Handle GET /api/stats/exercises/:name
    async fn handle_history(
        State(state): State<Arc<AppState>>,
        Path(name): Path<String>,
        Query(query): Query<MemberQuery>,
    ) -> Result<Json<Vec<ExerciseHistoryPoint>>, AppError> {
        Ok(Json(
            state
                .database
                .stats()
                .exercise_history(query.member_id, &name)
                .await?,
        ))
    }

    /// Handle GET /api/stats/records
    async fn handle_records(
        State(state): State<Arc<AppState>>,
        Query(query): Query<MemberQuery>,
    ) -> Result<Json<Vec<PersonalRecord>>, AppError> {
        Ok(Json(
            state
                .database
                .stats()
                .personal_records(query.member_id)
                .await?,
        ))
    }
}
