// ABOUTME: Database operations for user-defined custom exercises
// ABOUTME: Merges custom exercises with the built-in catalog for listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::Utc;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CustomExercise, MuscleGroup, BUILTIN_EXERCISES};

use super::members::parse_timestamp;

/// A selectable exercise: either from the built-in catalog or user-defined
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Exercise name
    pub name: String,
    /// Muscle group category
    pub muscle_group: MuscleGroup,
    /// Whether this entry is user-defined
    pub custom: bool,
    /// Id of the custom exercise, absent for built-ins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

/// Custom exercise database operations manager
pub struct ExercisesManager {
    pool: SqlitePool,
}

impl ExercisesManager {
    /// Create a new exercises manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a custom exercise
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the name collides with an existing
    /// custom or built-in exercise.
    pub async fn create(&self, name: &str, muscle_group: MuscleGroup) -> AppResult<CustomExercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }
        if BUILTIN_EXERCISES.iter().any(|e| e.name.eq_ignore_ascii_case(name)) {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("'{name}' is already in the built-in catalog"),
            ));
        }

        let now = Utc::now();
        let id = Uuid::new_v4();

        sqlx::query(
            r"
            INSERT INTO custom_exercises (id, name, muscle_group, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(muscle_group.as_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Custom exercise '{name}' already exists"),
            ),
            other => AppError::database(format!("Failed to create custom exercise: {other}")),
        })?;

        Ok(CustomExercise {
            id,
            name: name.to_owned(),
            muscle_group,
            created_at: now,
        })
    }

    /// List custom exercises, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> AppResult<Vec<CustomExercise>> {
        let rows = sqlx::query(
            "SELECT id, name, muscle_group, created_at
             FROM custom_exercises ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list custom exercises: {e}")))?;

        rows.iter().map(row_to_custom_exercise).collect()
    }

    /// Delete a custom exercise
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no custom exercise has that id.
    pub async fn delete(&self, exercise_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM custom_exercises WHERE id = $1")
            .bind(exercise_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete custom exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Custom exercise {exercise_id}")));
        }
        Ok(())
    }

    /// Full exercise catalog: built-ins in catalog order followed by custom
    /// exercises in creation order
    ///
    /// # Errors
    ///
    /// Returns an error if the custom exercise query fails.
    pub async fn catalog(&self) -> AppResult<Vec<CatalogEntry>> {
        let mut entries: Vec<CatalogEntry> = BUILTIN_EXERCISES
            .iter()
            .map(|e| CatalogEntry {
                name: e.name.to_owned(),
                muscle_group: e.muscle_group,
                custom: false,
                id: None,
            })
            .collect();

        for custom in self.list().await? {
            entries.push(CatalogEntry {
                name: custom.name,
                muscle_group: custom.muscle_group,
                custom: true,
                id: Some(custom.id),
            });
        }

        Ok(entries)
    }
}

fn row_to_custom_exercise(row: &SqliteRow) -> AppResult<CustomExercise> {
    let id: String = row.get("id");
    let muscle_group: String = row.get("muscle_group");
    let created_at: String = row.get("created_at");

    Ok(CustomExercise {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid exercise id: {e}")))?,
        name: row.get("name"),
        muscle_group: MuscleGroup::parse(&muscle_group),
        created_at: parse_timestamp(&created_at)?,
    })
}
