// ABOUTME: Training program models including WorkoutProgram and ProgramExercise
// ABOUTME: Circuit block assignment and workout style (classic/AMRAP/EMOM) types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MuscleGroup;

/// Workout style for a program exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStyle {
    /// Straight sets with target reps and weight
    #[default]
    Classic,
    /// As many rounds as possible within the time limit
    Amrap,
    /// Every minute on the minute
    Emom,
}

impl WorkoutStyle {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Amrap => "amrap",
            Self::Emom => "emom",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "amrap" => Self::Amrap,
            "emom" => Self::Emom,
            _ => Self::Classic,
        }
    }
}

/// Membership of a program exercise in a circuit/superset block
///
/// A program exercise is grouped if and only if `circuit` is present, so the
/// grouped/ungrouped distinction is a closed sum rather than three
/// independently optional fields. The round count is normalized to at least
/// 1 at the storage boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CircuitAssignment {
    /// Identifier shared by all members of the block
    pub group_id: String,
    /// How many times the whole block repeats
    pub rounds: u32,
    /// Rest between rounds in seconds, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_secs: Option<u32>,
}

/// A planned exercise inside a reusable workout program
///
/// Serves as the template from which live session exercises are created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramExercise {
    /// Exercise name (catalog or custom)
    pub exercise_name: String,
    /// Muscle group category
    pub muscle_group: MuscleGroup,
    /// Number of sets to perform
    pub target_sets: u32,
    /// Target repetitions per set
    pub target_reps: u32,
    /// Target weight per set, in the configured display unit
    pub target_weight: f64,
    /// Target distance in meters, for distance-based exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_distance: Option<f64>,
    /// Target time in seconds, for timed exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<u32>,
    /// Workout style (classic sets, AMRAP, or EMOM)
    #[serde(default)]
    pub style: WorkoutStyle,
    /// Time limit in minutes for AMRAP/EMOM styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    /// Circuit block membership, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<CircuitAssignment>,
}

impl ProgramExercise {
    /// Create a classic-style exercise template with no circuit assignment
    #[must_use]
    pub fn classic(
        exercise_name: impl Into<String>,
        muscle_group: MuscleGroup,
        target_sets: u32,
        target_reps: u32,
        target_weight: f64,
    ) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            muscle_group,
            target_sets,
            target_reps,
            target_weight,
            target_distance: None,
            target_time: None,
            style: WorkoutStyle::Classic,
            time_limit: None,
            circuit: None,
        }
    }

    /// Assign this exercise to a circuit block
    #[must_use]
    pub fn in_circuit(mut self, group_id: impl Into<String>, rounds: u32) -> Self {
        self.circuit = Some(CircuitAssignment {
            group_id: group_id.into(),
            rounds,
            rest_secs: None,
        });
        self
    }
}

/// A reusable, named training program a member can start a session from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutProgram {
    /// Unique identifier
    pub id: Uuid,
    /// Program name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scheduled days of the week (lowercase day names, e.g. "monday")
    pub days_of_week: Vec<String>,
    /// Exercise templates in program order
    pub exercises: Vec<ProgramExercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
