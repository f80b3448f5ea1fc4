// ABOUTME: Aggregate queries backing the progress and calendar views
// ABOUTME: Daily volume totals, per-exercise history, and personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

use super::members::parse_timestamp;

/// Total training volume for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DailyVolume {
    /// Day in `YYYY-MM-DD` form
    pub day: String,
    /// Sum of workout volumes that day
    pub total_volume: f64,
    /// Number of workouts that day
    pub workout_count: u32,
}

/// One point in an exercise's progress history
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseHistoryPoint {
    /// Workout date
    pub date: DateTime<Utc>,
    /// Heaviest completed set that workout
    pub top_weight: f64,
    /// Volume over completed sets that workout
    pub volume: f64,
}

/// Best recorded weight for an exercise
#[derive(Debug, Clone, Serialize)]
pub struct PersonalRecord {
    /// Exercise name
    pub exercise_name: String,
    /// Heaviest completed set ever recorded
    pub max_weight: f64,
}

/// Progress statistics query manager
pub struct StatsManager {
    pool: SqlitePool,
}

impl StatsManager {
    /// Create a new stats manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Daily volume totals over the trailing `days` window, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn daily_volume(
        &self,
        member_id: Option<Uuid>,
        days: u32,
    ) -> AppResult<Vec<DailyVolume>> {
        let cutoff = Utc::now() - Duration::days(i64::from(days));

        let rows = sqlx::query(
            r"
            SELECT substr(date, 1, 10) AS day,
                   SUM(total_volume) AS total_volume,
                   COUNT(*) AS workout_count
            FROM workouts
            WHERE date >= $1 AND ($2 IS NULL OR member_id = $2)
            GROUP BY day
            ORDER BY day ASC
            ",
        )
        .bind(cutoff.to_rfc3339())
        .bind(member_id.map(|id| id.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query daily volume: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| {
                let workout_count: i64 = row.get("workout_count");
                DailyVolume {
                    day: row.get("day"),
                    total_volume: row.get("total_volume"),
                    workout_count: u32::try_from(workout_count).unwrap_or(0),
                }
            })
            .collect())
    }

    /// Per-workout history for one exercise, oldest first
    ///
    /// Only completed sets count toward top weight and volume; workouts
    /// where the exercise was logged but nothing completed are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn exercise_history(
        &self,
        member_id: Option<Uuid>,
        exercise_name: &str,
    ) -> AppResult<Vec<ExerciseHistoryPoint>> {
        let rows = sqlx::query(
            r"
            SELECT w.date AS date,
                   MAX(s.weight) AS top_weight,
                   SUM(s.weight * s.reps) AS volume
            FROM exercise_sets s
            JOIN workout_exercises we ON we.id = s.workout_exercise_id
            JOIN workouts w ON w.id = we.workout_id
            WHERE we.exercise_name = $1
              AND s.completed = 1
              AND ($2 IS NULL OR w.member_id = $2)
            GROUP BY w.id
            ORDER BY w.date ASC
            ",
        )
        .bind(exercise_name)
        .bind(member_id.map(|id| id.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query exercise history: {e}")))?;

        rows.iter()
            .map(|row| {
                let date: String = row.get("date");
                Ok(ExerciseHistoryPoint {
                    date: parse_timestamp(&date)?,
                    top_weight: row.get("top_weight"),
                    volume: row.get("volume"),
                })
            })
            .collect()
    }

    /// Personal records: heaviest completed set per exercise, heaviest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn personal_records(
        &self,
        member_id: Option<Uuid>,
    ) -> AppResult<Vec<PersonalRecord>> {
        let rows = sqlx::query(
            r"
            SELECT we.exercise_name AS exercise_name,
                   MAX(s.weight) AS max_weight
            FROM exercise_sets s
            JOIN workout_exercises we ON we.id = s.workout_exercise_id
            JOIN workouts w ON w.id = we.workout_id
            WHERE s.completed = 1 AND ($1 IS NULL OR w.member_id = $1)
            GROUP BY we.exercise_name
            ORDER BY max_weight DESC
            ",
        )
        .bind(member_id.map(|id| id.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query personal records: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| PersonalRecord {
                exercise_name: row.get("exercise_name"),
                max_weight: row.get("max_weight"),
            })
            .collect())
    }
}
