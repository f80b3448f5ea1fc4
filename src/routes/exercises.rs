// ABOUTME: Route handlers for the exercise catalog
// ABOUTME: Serves the combined builtin+custom catalog and manages custom exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::exercises::CatalogEntry;
use crate::errors::AppError;
use crate::models::{CustomExercise, MuscleGroup};

use super::AppState;

// GET /api/exercises returns the merged catalog (built-ins plus customs);
// POST and DELETE manage the custom entries only.

/// Request to add a custom exercise to the catalog
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// Exercise name, unique across builtins and customs
    pub name: String,
    /// Muscle group the exercise belongs to
    pub muscle_group: MuscleGroup,
}

/// Exercise catalog routes handler
pub struct ExercisesRoutes;

impl ExercisesRoutes {
    /// Create all exercise catalog routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/exercises",
                get(Self::handle_catalog).post(Self::handle_create),
            )
            .route("/api/exercises/:id", delete(Self::handle_delete))
            .with_state(state)
    }

    /// Handle GET /api/exercises
    async fn handle_catalog(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<Vec<CatalogEntry>>, AppError> {
        Ok(Json(state.database.exercises().catalog().await?))
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(state): State<Arc<AppState>>,
        Json(body): Json<CreateExerciseRequest>,
    ) -> Result<(StatusCode, Json<CustomExercise>), AppError> {
        let exercise = state
            .database
            .exercises()
            .create(&body.name, body.muscle_group)
            .await?;
        Ok((StatusCode::CREATED, Json(exercise)))
    }

    /// Handle DELETE /api/exercises/:id
    async fn handle_delete(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        state.database.exercises().delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
