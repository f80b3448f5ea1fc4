// ABOUTME: Route handlers for workout history
// ABOUTME: Lists and fetches saved workouts, edits saved sets, and deletes records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::workouts::UpdateSavedSetRequest;
use crate::errors::AppError;
use crate::models::Workout;

use super::AppState;

/// Query parameters for listing workouts
#[derive(Debug, Default, Deserialize)]
pub struct ListWorkoutsQuery {
    /// Restrict the listing to one member's workouts
    pub member_id: Option<Uuid>,
}

/// Workout history routes handler
pub struct WorkoutsRoutes;

impl WorkoutsRoutes {
    /// Create all workout history routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route(
                "/api/workouts/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .route("/api/sets/:id", put(Self::handle_update_set))
            .with_state(state)
    }

    /// Handle GET /api/workouts
    async fn handle_list(
        State(state): State<Arc<AppState>>,
        Query(query): Query<ListWorkoutsQuery>,
    ) -> Result<Json<Vec<Workout>>, AppError> {
        Ok(Json(state.database.workouts().list(query.member_id).await?))
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<Workout>, AppError> {
        let workout = state
            .database
            .workouts()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;
        Ok(Json(workout))
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        state.database.workouts().delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// Handle PUT /api/sets/:id
    async fn handle_update_set(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateSavedSetRequest>,
    ) -> Result<StatusCode, AppError> {
        state.database.workouts().update_set(id, body).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
