// ABOUTME: Route handlers for workout program templates
// ABOUTME: REST endpoints for creating, listing, fetching, and deleting programs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::database::programs::CreateProgramRequest;
use crate::errors::AppError;
use crate::models::WorkoutProgram;

use super::AppState;

/// Workout program routes handler
pub struct ProgramsRoutes;

impl ProgramsRoutes {
    /// Create all program routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/programs",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/programs/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(state)
    }

    /// Handle GET /api/programs
    async fn handle_list(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<Vec<WorkoutProgram>>, AppError> {
        Ok(Json(state.database.programs().list().await?))
    }

    /// Handle POST /api/programs
    async fn handle_create(
        State(state): State<Arc<AppState>>,
        Json(body): Json<CreateProgramRequest>,
    ) -> Result<(StatusCode, Json<WorkoutProgram>), AppError> {
        let program = state.database.programs().create(&body).await?;
        Ok((StatusCode::CREATED, Json(program)))
    }

    /// Handle GET /api/programs/:id
    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<WorkoutProgram>, AppError> {
        let program = state
            .database
            .programs()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Program {id}")))?;
        Ok(Json(program))
    }

    /// Handle DELETE /api/programs/:id
    async fn handle_delete(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        state.database.programs().delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
