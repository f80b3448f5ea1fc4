// ABOUTME: Database operations for member profiles
// ABOUTME: Handles CRUD with random avatar colors from a fixed palette
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::Member;

/// Avatar colors assigned round-robin-randomly to new members
const AVATAR_COLORS: &[&str] = &[
    "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e", "#ef4444", "#f97316",
    "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6", "#06b6d4",
];

/// Fields that can change on an existing member
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateMemberRequest {
    /// New display name (if provided)
    pub name: Option<String>,
    /// New avatar color (if provided)
    pub avatar_color: Option<String>,
}

/// Member database operations manager
pub struct MembersManager {
    pool: SqlitePool,
}

impl MembersManager {
    /// Create a new members manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a member with a randomly assigned avatar color
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the insert fails.
    pub async fn create(&self, name: &str) -> AppResult<Member> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Member name must not be empty"));
        }

        let now = Utc::now();
        let id = Uuid::new_v4();
        let avatar_color = AVATAR_COLORS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("#6366f1");

        sqlx::query(
            r"
            INSERT INTO members (id, name, avatar_color, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(avatar_color)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create member: {e}")))?;

        Ok(Member {
            id,
            name: name.to_owned(),
            avatar_color: avatar_color.to_owned(),
            created_at: now,
            updated_at: now,
        })
    }

    /// List all members, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query(
            "SELECT id, name, avatar_color, created_at, updated_at
             FROM members ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list members: {e}")))?;

        rows.iter().map(row_to_member).collect()
    }

    /// Get a member by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get(&self, member_id: Uuid) -> AppResult<Option<Member>> {
        let row = sqlx::query(
            "SELECT id, name, avatar_color, created_at, updated_at FROM members WHERE id = $1",
        )
        .bind(member_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get member: {e}")))?;

        row.as_ref().map(row_to_member).transpose()
    }

    /// Update a member's name and/or avatar color
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no member has that id.
    pub async fn update(&self, member_id: Uuid, request: &UpdateMemberRequest) -> AppResult<Member> {
        let existing = self
            .get(member_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Member {member_id}")))?;

        let name = request.name.as_deref().unwrap_or(&existing.name);
        let avatar_color = request
            .avatar_color
            .as_deref()
            .unwrap_or(&existing.avatar_color);
        let now = Utc::now();

        sqlx::query(
            "UPDATE members SET name = $1, avatar_color = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(name)
        .bind(avatar_color)
        .bind(now.to_rfc3339())
        .bind(member_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update member: {e}")))?;

        Ok(Member {
            id: member_id,
            name: name.to_owned(),
            avatar_color: avatar_color.to_owned(),
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a member; their workouts are kept with a nulled member id
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no member has that id.
    pub async fn delete(&self, member_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete member: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Member {member_id}")));
        }
        Ok(())
    }
}

fn row_to_member(row: &SqliteRow) -> AppResult<Member> {
    let id: String = row.get("id");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Member {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid member id: {e}")))?,
        name: row.get("name"),
        avatar_color: row.get("avatar_color"),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

pub(crate) fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp '{s}': {e}")))
}
