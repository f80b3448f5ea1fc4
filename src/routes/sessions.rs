// ABOUTME: Route handlers for live workout sessions
// ABOUTME: Starts sessions (expanding circuit programs), mutates exercises and sets, finishes to history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{MuscleGroup, Workout};
use crate::session::{expand, ActiveSession, IdSource, RandomIds, SetUpdate};

use super::AppState;

/// Request to start a workout session
#[derive(Debug, Default, Deserialize)]
pub struct StartSessionRequest {
    /// Member performing the workout, if any
    pub member_id: Option<Uuid>,
    /// Program to expand into the session; omitted for an ad-hoc session
    pub program_id: Option<Uuid>,
}

/// Request to add an exercise to a running session
#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    /// Exercise name
    pub name: String,
    /// Muscle group the exercise belongs to
    pub muscle_group: MuscleGroup,
}

/// Id of a newly created exercise or set
#[derive(Debug, serde::Serialize)]
pub struct CreatedId {
    /// The created resource id
    pub id: Uuid,
}

/// Live session routes handler
pub struct SessionsRoutes;

impl SessionsRoutes {
    /// Create all session routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::handle_start))
            .route(
                "/api/sessions/:id",
                axum::routing::get(Self::handle_get).delete(Self::handle_cancel),
            )
            .route(
                "/api/sessions/:id/exercises",
                post(Self::handle_add_exercise),
            )
            .route(
                "/api/sessions/:id/exercises/:exercise_id",
                delete(Self::handle_remove_exercise),
            )
            .route(
                "/api/sessions/:id/exercises/:exercise_id/sets",
                post(Self::handle_add_set),
            )
            .route(
                "/api/sessions/:id/exercises/:exercise_id/sets/:set_id",
                axum::routing::put(Self::handle_update_set).delete(Self::handle_remove_set),
            )
            .route("/api/sessions/:id/finish", post(Self::handle_finish))
            .with_state(state)
    }

    /// Handle POST /api/sessions
    ///
    /// With a `program_id`, the program's exercises are expanded (circuit
    /// groups unrolled into per-round instances) and each exercise is
    /// backfilled with the member's most recent sets for that name.
    async fn handle_start(
        State(state): State<Arc<AppState>>,
        Json(body): Json<StartSessionRequest>,
    ) -> Result<(StatusCode, Json<ActiveSession>), AppError> {
        let mut ids = RandomIds;
        let session_id = ids.next_id();

        let mut session = if let Some(program_id) = body.program_id {
            let program = state
                .database
                .programs()
                .get(program_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Program {program_id}")))?;

            let exercises = expand(&program.exercises, &mut ids);
            ActiveSession::from_program(session_id, body.member_id, program_id, exercises)
        } else {
            ActiveSession::new(session_id, body.member_id)
        };

        let names: Vec<String> = session.exercises.iter().map(|e| e.name.clone()).collect();
        if !names.is_empty() {
            let previous = state
                .database
                .workouts()
                .previous_sets(body.member_id, &names)
                .await?;
            session.apply_previous_sets(&previous, &mut ids);
        }

        tracing::info!(
            session_id = %session.id,
            exercises = session.exercises.len(),
            from_program = body.program_id.is_some(),
            "Started workout session"
        );

        state.sessions.insert(session.clone());
        Ok((StatusCode::CREATED, Json(session)))
    }

    /// Handle GET /api/sessions/:id
    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ActiveSession>, AppError> {
        let session = state
            .sessions
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        Ok(Json(session))
    }

    /// Handle POST /api/sessions/:id/exercises
    async fn handle_add_exercise(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
        Json(body): Json<AddExerciseRequest>,
    ) -> Result<(StatusCode, Json<CreatedId>), AppError> {
        let exercise_id = state
            .sessions
            .mutate(id, |session| {
                session.add_exercise(body.name.clone(), body.muscle_group, &mut RandomIds)
            })
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        Ok((StatusCode::CREATED, Json(CreatedId { id: exercise_id })))
    }

    /// Handle DELETE /api/sessions/:id/exercises/:exercise_id
    async fn handle_remove_exercise(
        State(state): State<Arc<AppState>>,
        Path((id, exercise_id)): Path<(Uuid, Uuid)>,
    ) -> Result<StatusCode, AppError> {
        let removed = state
            .sessions
            .mutate(id, |session| session.remove_exercise(exercise_id))
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        if !removed {
            return Err(AppError::not_found(format!("Exercise {exercise_id}")));
        }
        Ok(StatusCode::NO_CONTENT)
    }

    /// Handle POST /api/sessions/:id/exercises/:exercise_id/sets
    async fn handle_add_set(
        State(state): State<Arc<AppState>>,
        Path((id, exercise_id)): Path<(Uuid, Uuid)>,
    ) -> Result<(StatusCode, Json<CreatedId>), AppError> {
        let set_id = state
            .sessions
            .mutate(id, |session| session.add_set(exercise_id, &mut RandomIds))
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?
            .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id}")))?;
        Ok((StatusCode::CREATED, Json(CreatedId { id: set_id })))
    }

    /// Handle PUT /api/sessions/:id/exercises/:exercise_id/sets/:set_id
    async fn handle_update_set(
        State(state): State<Arc<AppState>>,
        Path((id, exercise_id, set_id)): Path<(Uuid, Uuid, Uuid)>,
        Json(body): Json<SetUpdate>,
    ) -> Result<StatusCode, AppError> {
        let updated = state
            .sessions
            .mutate(id, |session| session.update_set(exercise_id, set_id, body))
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        if !updated {
            return Err(AppError::not_found(format!("Set {set_id}")));
        }
        Ok(StatusCode::NO_CONTENT)
    }

    /// Handle DELETE /api/sessions/:id/exercises/:exercise_id/sets/:set_id
    async fn handle_remove_set(
        State(state): State<Arc<AppState>>,
        Path((id, exercise_id, set_id)): Path<(Uuid, Uuid, Uuid)>,
    ) -> Result<StatusCode, AppError> {
        let removed = state
            .sessions
            .mutate(id, |session| session.remove_set(exercise_id, set_id))
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        if !removed {
            return Err(AppError::not_found(format!("Set {set_id}")));
        }
        Ok(StatusCode::NO_CONTENT)
    }

    /// Handle POST /api/sessions/:id/finish
    ///
    /// Computes totals over completed sets and persists the resulting
    /// workout. The session stays in the live store until the save
    /// succeeds, so a failed persist can be retried.
    async fn handle_finish(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<Workout>, AppError> {
        let session = state
            .sessions
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;

        let workout = session.finish(Utc::now());
        state.database.workouts().save(&workout).await?;
        state.sessions.remove(id);

        tracing::info!(
            workout_id = %workout.id,
            total_sets = workout.total_sets,
            total_volume = workout.total_volume,
            "Finished workout session"
        );

        Ok(Json(workout))
    }

    /// Handle DELETE /api/sessions/:id
    ///
    /// Cancels the session without persisting anything.
    async fn handle_cancel(
        State(state): State<Arc<AppState>>,
        Path(id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        state
            .sessions
            .remove(id)
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))?;
        Ok(StatusCode::NO_CONTENT)
    }
}
