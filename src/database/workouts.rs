// ABOUTME: Database operations for saved workouts, their exercises, and sets
// ABOUTME: Handles finish-time persistence, history listing, and saved-set editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::collections::HashMap;

use serde::Deserialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{CircuitRound, MuscleGroup, SessionExercise, Workout, WorkoutSet};

use super::members::parse_timestamp;

/// Partial update to a set inside a saved workout
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UpdateSavedSetRequest {
    /// New weight (if provided)
    pub weight: Option<f64>,
    /// New rep count (if provided)
    pub reps: Option<u32>,
}

/// Saved workout database operations manager
pub struct WorkoutsManager {
    pool: SqlitePool,
}

impl WorkoutsManager {
    /// Create a new workouts manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a finished workout with its exercises and sets
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is saved in that case.
    pub async fn save(&self, workout: &Workout) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO workouts (id, member_id, program_id, date, duration, total_volume, total_sets, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(workout.id.to_string())
        .bind(workout.member_id.map(|id| id.to_string()))
        .bind(workout.program_id.map(|id| id.to_string()))
        .bind(workout.date.to_rfc3339())
        .bind(workout.duration_secs.map(i64::from))
        .bind(workout.total_volume)
        .bind(i64::from(workout.total_sets))
        .bind(&workout.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert workout: {e}")))?;

        for (index, exercise) in workout.exercises.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO workout_exercises (
                    id, workout_id, exercise_name, muscle_group,
                    group_id, round_number, group_rounds, group_rest_time,
                    target_distance, target_time, order_index
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ",
            )
            .bind(exercise.id.to_string())
            .bind(workout.id.to_string())
            .bind(&exercise.name)
            .bind(exercise.muscle_group.as_str())
            .bind(exercise.circuit.as_ref().map(|c| c.group_id.clone()))
            .bind(exercise.circuit.as_ref().map(|c| i64::from(c.round_number)))
            .bind(exercise.circuit.as_ref().map(|c| i64::from(c.total_rounds)))
            .bind(
                exercise
                    .circuit
                    .as_ref()
                    .and_then(|c| c.rest_secs.map(i64::from)),
            )
            .bind(exercise.target_distance)
            .bind(exercise.target_time.map(i64::from))
            .bind(index as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert workout exercise: {e}")))?;

            for (set_number, set) in exercise.sets.iter().enumerate() {
                sqlx::query(
                    r"
                    INSERT INTO exercise_sets (id, workout_exercise_id, set_number, weight, reps, completed)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ",
                )
                .bind(set.id.to_string())
                .bind(exercise.id.to_string())
                .bind((set_number + 1) as i64)
                .bind(set.weight)
                .bind(i64::from(set.reps))
                .bind(set.completed)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to insert set: {e}")))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit workout: {e}")))?;
        Ok(())
    }

    /// List workouts, newest first, optionally filtered by member
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn list(&self, member_id: Option<Uuid>) -> AppResult<Vec<Workout>> {
        let rows = match member_id {
            Some(member_id) => {
                sqlx::query(
                    "SELECT id, member_id, program_id, date, duration, total_volume, total_sets, notes
                     FROM workouts WHERE member_id = $1 ORDER BY date DESC",
                )
                .bind(member_id.to_string())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT id, member_id, program_id, date, duration, total_volume, total_sets, notes
                     FROM workouts ORDER BY date DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        let mut workouts = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut workout = row_to_workout(row)?;
            workout.exercises = self.load_exercises(workout.id).await?;
            workouts.push(workout);
        }
        Ok(workouts)
    }

    /// Get a workout by id with its exercises and sets
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn get(&self, workout_id: Uuid) -> AppResult<Option<Workout>> {
        let row = sqlx::query(
            "SELECT id, member_id, program_id, date, duration, total_volume, total_sets, notes
             FROM workouts WHERE id = $1",
        )
        .bind(workout_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        match row {
            Some(row) => {
                let mut workout = row_to_workout(&row)?;
                workout.exercises = self.load_exercises(workout.id).await?;
                Ok(Some(workout))
            }
            None => Ok(None),
        }
    }

    /// Delete a workout and its exercises/sets
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no workout has that id.
    pub async fn delete(&self, workout_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }
        Ok(())
    }

    /// Edit the weight and/or reps of a set in a saved workout
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no set has that id.
    pub async fn update_set(&self, set_id: Uuid, update: UpdateSavedSetRequest) -> AppResult<()> {
        let row = sqlx::query("SELECT weight, reps FROM exercise_sets WHERE id = $1")
            .bind(set_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get set: {e}")))?
            .ok_or_else(|| AppError::not_found(format!("Set {set_id}")))?;

        let current_weight: f64 = row.get("weight");
        let current_reps: i64 = row.get("reps");
        let weight = update.weight.unwrap_or(current_weight);
        let reps = update
            .reps
            .map_or(current_reps, i64::from);

        sqlx::query("UPDATE exercise_sets SET weight = $1, reps = $2 WHERE id = $3")
            .bind(weight)
            .bind(reps)
            .bind(set_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update set: {e}")))?;
        Ok(())
    }

    /// Most recent recorded sets per exercise name, for previous-record
    /// reference when starting a session from a program
    ///
    /// For each name, returns the `(weight, reps)` pairs of that exercise in
    /// the member's most recent workout containing it, in set order. Names
    /// with no history are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn previous_sets(
        &self,
        member_id: Option<Uuid>,
        names: &[String],
    ) -> AppResult<HashMap<String, Vec<(f64, u32)>>> {
        let mut previous = HashMap::new();

        for name in names {
            if previous.contains_key(name) {
                continue;
            }

            let exercise_row = sqlx::query(
                r"
                SELECT we.id AS exercise_id
                FROM workout_exercises we
                JOIN workouts w ON w.id = we.workout_id
                WHERE we.exercise_name = $1
                  AND ($2 IS NULL OR w.member_id = $2)
                ORDER BY w.date DESC
                LIMIT 1
                ",
            )
            .bind(name)
            .bind(member_id.map(|id| id.to_string()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up previous record: {e}")))?;

            let Some(exercise_row) = exercise_row else {
                continue;
            };
            let exercise_id: String = exercise_row.get("exercise_id");

            let set_rows = sqlx::query(
                "SELECT weight, reps FROM exercise_sets
                 WHERE workout_exercise_id = $1 ORDER BY set_number ASC",
            )
            .bind(&exercise_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to load previous sets: {e}")))?;

            if set_rows.is_empty() {
                continue;
            }

            let sets = set_rows
                .iter()
                .map(|row| {
                    let weight: f64 = row.get("weight");
                    let reps: i64 = row.get("reps");
                    (weight, u32::try_from(reps).unwrap_or(0))
                })
                .collect();
            previous.insert(name.clone(), sets);
        }

        Ok(previous)
    }

    async fn load_exercises(&self, workout_id: Uuid) -> AppResult<Vec<SessionExercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise_name, muscle_group, group_id, round_number,
                   group_rounds, group_rest_time, target_distance, target_time
            FROM workout_exercises
            WHERE workout_id = $1
            ORDER BY order_index ASC
            ",
        )
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load workout exercises: {e}")))?;

        let mut exercises = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut exercise = row_to_session_exercise(row)?;
            exercise.sets = self.load_sets(exercise.id).await?;
            exercises.push(exercise);
        }
        Ok(exercises)
    }

    async fn load_sets(&self, exercise_id: Uuid) -> AppResult<Vec<WorkoutSet>> {
        let rows = sqlx::query(
            "SELECT id, weight, reps, completed FROM exercise_sets
             WHERE workout_exercise_id = $1 ORDER BY set_number ASC",
        )
        .bind(exercise_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load sets: {e}")))?;

        rows.iter().map(row_to_set).collect()
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let id: String = row.get("id");
    let member_id: Option<String> = row.get("member_id");
    let program_id: Option<String> = row.get("program_id");
    let date: String = row.get("date");
    let duration: Option<i64> = row.get("duration");
    let total_sets: i64 = row.get("total_sets");

    Ok(Workout {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid workout id: {e}")))?,
        member_id: member_id.as_deref().map(Uuid::parse_str).transpose()
            .map_err(|e| AppError::database(format!("Invalid member id: {e}")))?,
        program_id: program_id.as_deref().map(Uuid::parse_str).transpose()
            .map_err(|e| AppError::database(format!("Invalid program id: {e}")))?,
        date: parse_timestamp(&date)?,
        duration_secs: duration.and_then(|d| u32::try_from(d).ok()),
        total_volume: row.get("total_volume"),
        total_sets: u32::try_from(total_sets).unwrap_or(0),
        notes: row.get("notes"),
        exercises: Vec::new(),
    })
}

fn row_to_session_exercise(row: &SqliteRow) -> AppResult<SessionExercise> {
    let id: String = row.get("id");
    let muscle_group: String = row.get("muscle_group");
    let group_id: Option<String> = row.get("group_id");

    let circuit = group_id.map(|group_id| {
        let round_number: Option<i64> = row.get("round_number");
        let group_rounds: Option<i64> = row.get("group_rounds");
        let rest: Option<i64> = row.get("group_rest_time");
        CircuitRound {
            group_id,
            round_number: u32::try_from(round_number.unwrap_or(1)).unwrap_or(1),
            total_rounds: u32::try_from(group_rounds.unwrap_or(1)).unwrap_or(1),
            rest_secs: rest.and_then(|r| u32::try_from(r).ok()),
        }
    });

    let target_time: Option<i64> = row.get("target_time");

    Ok(SessionExercise {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid exercise id: {e}")))?,
        name: row.get("exercise_name"),
        muscle_group: MuscleGroup::parse(&muscle_group),
        sets: Vec::new(),
        circuit,
        target_distance: row.get("target_distance"),
        target_time: target_time.and_then(|t| u32::try_from(t).ok()),
        previous_sets: None,
    })
}

fn row_to_set(row: &SqliteRow) -> AppResult<WorkoutSet> {
    let id: String = row.get("id");
    let reps: i64 = row.get("reps");

    Ok(WorkoutSet {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid set id: {e}")))?,
        weight: row.get("weight"),
        reps: u32::try_from(reps).unwrap_or(0),
        completed: row.get("completed"),
    })
}
