// ABOUTME: Route handlers for application settings
// ABOUTME: Gets and switches the display weight unit, converting stored weights in bulk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::units::WeightUnit;

use super::AppState;

/// The current weight unit, as returned and accepted by the settings routes
#[derive(Debug, Serialize, Deserialize)]
pub struct WeightUnitResponse {
    /// Display unit for all stored weights
    pub weight_unit: WeightUnit,
}

/// Settings routes handler
pub struct SettingsRoutes;

impl SettingsRoutes {
    /// Create all settings routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/settings/weight-unit",
                get(Self::handle_get).put(Self::handle_set),
            )
            .with_state(state)
    }

    /// Handle GET /api/settings/weight-unit
    async fn handle_get(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<WeightUnitResponse>, AppError> {
        let weight_unit = state.database.settings().weight_unit().await?;
        Ok(Json(WeightUnitResponse { weight_unit }))
    }

    /// Handle PUT /api/settings/weight-unit
    ///
    /// Switching units rewrites every stored weight in the same transaction,
    /// so the database never mixes units.
    async fn handle_set(
        State(state): State<Arc<AppState>>,
        Json(body): Json<WeightUnitResponse>,
    ) -> Result<Json<WeightUnitResponse>, AppError> {
        let weight_unit = state
            .database
            .settings()
            .set_weight_unit(body.weight_unit)
            .await?;
        Ok(Json(WeightUnitResponse { weight_unit }))
    }
}
