// ABOUTME: Database operations for workout programs and their exercise templates
// ABOUTME: Persists circuit block columns and restores them as CircuitAssignment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::Utc;
use serde::Deserialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{
    CircuitAssignment, MuscleGroup, ProgramExercise, WorkoutProgram, WorkoutStyle,
};

use super::members::parse_timestamp;

/// Request to create a new program
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgramRequest {
    /// Program name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Scheduled days of the week (lowercase day names)
    #[serde(default)]
    pub days_of_week: Vec<String>,
    /// Exercise templates in program order
    #[serde(default)]
    pub exercises: Vec<ProgramExercise>,
}

/// Program database operations manager
pub struct ProgramsManager {
    pool: SqlitePool,
}

impl ProgramsManager {
    /// Create a new programs manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a program with its exercises
    ///
    /// Exercise order is taken from the request's list position. A circuit
    /// round count of zero is normalized to one on the way in.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or an insert fails.
    pub async fn create(&self, request: &CreateProgramRequest) -> AppResult<WorkoutProgram> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Program name must not be empty"));
        }

        let now = Utc::now();
        let program_id = Uuid::new_v4();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO workout_programs (id, name, description, days_of_week, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(program_id.to_string())
        .bind(name)
        .bind(&request.description)
        .bind(serde_json::to_string(&request.days_of_week)?)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create program: {e}")))?;

        let mut exercises = Vec::with_capacity(request.exercises.len());
        for (index, exercise) in request.exercises.iter().enumerate() {
            let mut exercise = exercise.clone();
            if let Some(circuit) = &mut exercise.circuit {
                circuit.rounds = circuit.rounds.max(1);
            }

            sqlx::query(
                r"
                INSERT INTO program_exercises (
                    id, program_id, exercise_name, muscle_group,
                    target_sets, target_reps, target_weight,
                    target_distance, target_time, workout_style, time_limit,
                    group_id, group_rounds, group_rest_time, order_index
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(program_id.to_string())
            .bind(&exercise.exercise_name)
            .bind(exercise.muscle_group.as_str())
            .bind(i64::from(exercise.target_sets))
            .bind(i64::from(exercise.target_reps))
            .bind(exercise.target_weight)
            .bind(exercise.target_distance)
            .bind(exercise.target_time.map(i64::from))
            .bind(exercise.style.as_str())
            .bind(exercise.time_limit.map(i64::from))
            .bind(exercise.circuit.as_ref().map(|c| c.group_id.clone()))
            .bind(exercise.circuit.as_ref().map(|c| i64::from(c.rounds)))
            .bind(
                exercise
                    .circuit
                    .as_ref()
                    .and_then(|c| c.rest_secs.map(i64::from)),
            )
            .bind(index as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert program exercise: {e}")))?;

            exercises.push(exercise);
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit program: {e}")))?;

        Ok(WorkoutProgram {
            id: program_id,
            name: name.to_owned(),
            description: request.description.clone(),
            days_of_week: request.days_of_week.clone(),
            exercises,
            created_at: now,
            updated_at: now,
        })
    }

    /// List programs, newest first, with exercises in program order
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn list(&self) -> AppResult<Vec<WorkoutProgram>> {
        let rows = sqlx::query(
            "SELECT id, name, description, days_of_week, created_at, updated_at
             FROM workout_programs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list programs: {e}")))?;

        let mut programs = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut program = row_to_program(row)?;
            program.exercises = self.load_exercises(program.id).await?;
            programs.push(program);
        }
        Ok(programs)
    }

    /// Get a program by id, with exercises in program order
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn get(&self, program_id: Uuid) -> AppResult<Option<WorkoutProgram>> {
        let row = sqlx::query(
            "SELECT id, name, description, days_of_week, created_at, updated_at
             FROM workout_programs WHERE id = $1",
        )
        .bind(program_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get program: {e}")))?;

        match row {
            Some(row) => {
                let mut program = row_to_program(&row)?;
                program.exercises = self.load_exercises(program.id).await?;
                Ok(Some(program))
            }
            None => Ok(None),
        }
    }

    /// Delete a program and its exercises
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no program has that id.
    pub async fn delete(&self, program_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workout_programs WHERE id = $1")
            .bind(program_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete program: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Program {program_id}")));
        }
        Ok(())
    }

    async fn load_exercises(&self, program_id: Uuid) -> AppResult<Vec<ProgramExercise>> {
        let rows = sqlx::query(
            r"
            SELECT exercise_name, muscle_group, target_sets, target_reps, target_weight,
                   target_distance, target_time, workout_style, time_limit,
                   group_id, group_rounds, group_rest_time
            FROM program_exercises
            WHERE program_id = $1
            ORDER BY order_index ASC
            ",
        )
        .bind(program_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load program exercises: {e}")))?;

        rows.iter().map(row_to_program_exercise).collect()
    }
}

fn row_to_program(row: &SqliteRow) -> AppResult<WorkoutProgram> {
    let id: String = row.get("id");
    let days_of_week: String = row.get("days_of_week");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(WorkoutProgram {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid program id: {e}")))?,
        name: row.get("name"),
        description: row.get("description"),
        days_of_week: serde_json::from_str(&days_of_week)?,
        exercises: Vec::new(),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn row_to_program_exercise(row: &SqliteRow) -> AppResult<ProgramExercise> {
    let muscle_group: String = row.get("muscle_group");
    let workout_style: String = row.get("workout_style");
    let group_id: Option<String> = row.get("group_id");

    // A stored round count below one is a degenerate circuit; normalize so
    // the in-memory type always carries at least one round.
    let circuit = group_id.map(|group_id| {
        let rounds: Option<i64> = row.get("group_rounds");
        let rest: Option<i64> = row.get("group_rest_time");
        CircuitAssignment {
            group_id,
            rounds: u32::try_from(rounds.unwrap_or(1)).unwrap_or(1).max(1),
            rest_secs: rest.and_then(|r| u32::try_from(r).ok()),
        }
    });

    let target_sets: i64 = row.get("target_sets");
    let target_reps: i64 = row.get("target_reps");
    let target_time: Option<i64> = row.get("target_time");
    let time_limit: Option<i64> = row.get("time_limit");

    Ok(ProgramExercise {
        exercise_name: row.get("exercise_name"),
        muscle_group: MuscleGroup::parse(&muscle_group),
        target_sets: u32::try_from(target_sets).unwrap_or(1),
        target_reps: u32::try_from(target_reps).unwrap_or(0),
        target_weight: row.get("target_weight"),
        target_distance: row.get("target_distance"),
        target_time: target_time.and_then(|t| u32::try_from(t).ok()),
        style: WorkoutStyle::parse(&workout_style),
        time_limit: time_limit.and_then(|t| u32::try_from(t).ok()),
        circuit,
    })
}
