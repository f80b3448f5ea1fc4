// ABOUTME: Database management: connection pool, schema migrations, and manager accessors
// ABOUTME: SQLite via sqlx with per-domain CREATE TABLE IF NOT EXISTS migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! # Database Management
//!
//! Connection handling and schema creation for the LiftLog server. Each
//! domain gets its own manager struct over the shared pool; migrations are
//! idempotent `CREATE TABLE IF NOT EXISTS` statements run at startup.

/// Custom exercise storage and catalog merging
pub mod exercises;
/// Member profile storage
pub mod members;
/// Workout program storage
pub mod programs;
/// Application settings including the weight unit toggle
pub mod settings;
/// Progress statistics queries
pub mod stats;
/// Saved workout storage
pub mod workouts;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};

use exercises::ExercisesManager;
use members::MembersManager;
use programs::ProgramsManager;
use settings::SettingsManager;
use stats::StatsManager;
use workouts::WorkoutsManager;

/// Database manager for the LiftLog server
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let db = Self::connect(database_url).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Open a connection pool without running migrations
    ///
    /// An in-memory database exists per connection, so those get a single
    /// never-expiring connection; anything else gets a normal pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(database_url)
                .await?
        } else {
            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options = if database_url.starts_with("sqlite:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };
            SqlitePool::connect(&connection_options).await?
        };

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Member profile operations
    #[must_use]
    pub fn members(&self) -> MembersManager {
        MembersManager::new(self.pool.clone())
    }

    /// Custom exercise operations
    #[must_use]
    pub fn exercises(&self) -> ExercisesManager {
        ExercisesManager::new(self.pool.clone())
    }

    /// Workout program operations
    #[must_use]
    pub fn programs(&self) -> ProgramsManager {
        ProgramsManager::new(self.pool.clone())
    }

    /// Saved workout operations
    #[must_use]
    pub fn workouts(&self) -> WorkoutsManager {
        WorkoutsManager::new(self.pool.clone())
    }

    /// Settings operations
    #[must_use]
    pub fn settings(&self) -> SettingsManager {
        SettingsManager::new(self.pool.clone())
    }

    /// Progress statistics queries
    #[must_use]
    pub fn stats(&self) -> StatsManager {
        StatsManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_members().await?;
        self.migrate_programs().await?;
        self.migrate_workouts().await?;
        self.migrate_settings().await?;
        Ok(())
    }

    /// Create member and custom exercise tables
    async fn migrate_members(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS members (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                avatar_color TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS custom_exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                muscle_group TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create program tables
    async fn migrate_programs(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_programs (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                days_of_week TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS program_exercises (
                id TEXT PRIMARY KEY,
                program_id TEXT NOT NULL REFERENCES workout_programs(id) ON DELETE CASCADE,
                exercise_name TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                target_sets INTEGER NOT NULL DEFAULT 1,
                target_reps INTEGER NOT NULL DEFAULT 0,
                target_weight REAL NOT NULL DEFAULT 0,
                target_distance REAL,
                target_time INTEGER,
                workout_style TEXT NOT NULL DEFAULT 'classic',
                time_limit INTEGER,
                group_id TEXT,
                group_rounds INTEGER,
                group_rest_time INTEGER,
                order_index INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_program_exercises_program
             ON program_exercises(program_id, order_index)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create workout history tables
    async fn migrate_workouts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                member_id TEXT REFERENCES members(id) ON DELETE SET NULL,
                program_id TEXT,
                date TEXT NOT NULL,
                duration INTEGER,
                total_volume REAL NOT NULL DEFAULT 0,
                total_sets INTEGER NOT NULL DEFAULT 0,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_exercises (
                id TEXT PRIMARY KEY,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                exercise_name TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                group_id TEXT,
                round_number INTEGER,
                group_rounds INTEGER,
                group_rest_time INTEGER,
                target_distance REAL,
                target_time INTEGER,
                order_index INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_sets (
                id TEXT PRIMARY KEY,
                workout_exercise_id TEXT NOT NULL REFERENCES workout_exercises(id) ON DELETE CASCADE,
                set_number INTEGER NOT NULL,
                weight REAL NOT NULL DEFAULT 0,
                reps INTEGER NOT NULL DEFAULT 0,
                completed INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workouts_member_date ON workouts(member_id, date)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout
             ON workout_exercises(workout_id, order_index)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercise_sets_exercise
             ON exercise_sets(workout_exercise_id, set_number)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create the settings table
    async fn migrate_settings(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS app_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
