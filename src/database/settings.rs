// ABOUTME: Application settings storage, primarily the weight display unit
// ABOUTME: Toggling the unit batch-converts every stored weight in one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::units::{conversion_factor, WeightUnit};

const WEIGHT_UNIT_KEY: &str = "weight_unit";

/// Settings database operations manager
pub struct SettingsManager {
    pool: SqlitePool,
}

impl SettingsManager {
    /// Create a new settings manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The configured weight display unit (defaults to lbs when unset)
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn weight_unit(&self) -> AppResult<WeightUnit> {
        let row = sqlx::query("SELECT value FROM app_settings WHERE key = $1")
            .bind(WEIGHT_UNIT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read weight unit: {e}")))?;

        Ok(row.map_or_else(WeightUnit::default, |r| {
            let value: String = r.get("value");
            WeightUnit::parse(&value)
        }))
    }

    /// Set the weight display unit, converting all stored weights
    ///
    /// Stored weights live in the display unit, so changing it multiplies
    /// every `exercise_sets.weight` and `program_exercises.target_weight`
    /// by the kg/lbs factor inside a single transaction. Setting the same
    /// unit again is a no-op. Returns the new unit.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; no weights are converted in
    /// that case.
    pub async fn set_weight_unit(&self, unit: WeightUnit) -> AppResult<WeightUnit> {
        let current = self.weight_unit().await?;
        if current == unit {
            return Ok(unit);
        }

        let factor = conversion_factor(current, unit);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO app_settings (key, value) VALUES ($1, $2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(WEIGHT_UNIT_KEY)
        .bind(unit.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to store weight unit: {e}")))?;

        // Round to one decimal to avoid drift accumulating over repeated
        // toggles.
        sqlx::query("UPDATE exercise_sets SET weight = ROUND(weight * $1, 1)")
            .bind(factor)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to convert set weights: {e}")))?;

        sqlx::query("UPDATE program_exercises SET target_weight = ROUND(target_weight * $1, 1)")
            .bind(factor)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to convert target weights: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit unit change: {e}")))?;

        Ok(unit)
    }

    /// Toggle between kg and lbs, converting stored weights
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails.
    pub async fn toggle_weight_unit(&self) -> AppResult<WeightUnit> {
        let current = self.weight_unit().await?;
        self.set_weight_unit(current.toggled()).await
    }
}
