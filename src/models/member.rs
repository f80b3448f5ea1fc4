// ABOUTME: Member profile and custom exercise models
// ABOUTME: Supports switching between household member profiles without accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MuscleGroup;

/// A member profile
///
/// Workouts are recorded against a member so several people can share one
/// installation and keep separate histories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Hex color used for the member's avatar badge
    pub avatar_color: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user-defined exercise supplementing the built-in catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomExercise {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// Muscle group category
    pub muscle_group: MuscleGroup,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
