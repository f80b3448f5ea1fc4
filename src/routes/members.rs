// ABOUTME: Route handlers for member profile management
// ABOUTME: REST endpoints for creating, listing, renaming, and deleting members
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::members::UpdateMemberRequest;
use crate::errors::AppError;
use crate::models::Member;

use super::AppState;

/// Request to create a member
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    /// Display name
    pub name: String,
}

/// Member routes handler
pub struct MembersRoutes;

impl MembersRoutes {
    /// Create all member routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/members",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/members/:id", put(Self::handle_update))
            .route("/api/members/:id", delete(Self::handle_delete))
            .with_state(state)
    }

    /// Handle GET /api/members
    async fn handle_list(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<Vec<Member>>, AppError> {
        Ok(Json(state.database.members().list().await?))
    }

    /// Handle POST /api/members
    async fn handle_create(
        State(state): State<Arc<AppState>>,
        Json(body): Json<CreateMemberRequest>,
    ) -> Result<(StatusCode, Json<Member>), AppError> {
        let member = state.database.members().create(&body.name).await?;
        Ok((StatusCode::CREATED, Json(member)))
    }

    /// Handle PUT /api/members/:id
    async fn handle_update(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateMemberRequest>,
    ) -> Result<Json<Member>, AppError> {
        Ok(Json(state.database.members().update(id, &body).await?))
    }

    /// Handle DELETE /api/members/:id
    async fn handle_delete(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        state.database.members().delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
