// ABOUTME: Workout session models including SessionExercise, WorkoutSet, and CircuitRound
// ABOUTME: Muscle group enumeration with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enumeration of muscle groups used to categorize exercises
///
/// This is a closed set matching the categories offered in the exercise
/// catalog. Unknown strings (e.g. from user-typed custom categories) fall
/// back to `FullBody` rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Chest exercises (bench press, flyes, dips)
    Chest,
    /// Back exercises (pull-ups, rows, deadlifts)
    Back,
    /// Shoulder exercises (presses, raises)
    Shoulders,
    /// Lower-body exercises (squats, lunges, leg press)
    Legs,
    /// Arm exercises (curls, extensions)
    Arms,
    /// Core/abdominal exercises (crunches, planks)
    Core,
    /// Full-body/conditioning exercises (burpees, kettlebell swings)
    FullBody,
}

impl MuscleGroup {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Legs => "legs",
            Self::Arms => "arms",
            Self::Core => "core",
            Self::FullBody => "full_body",
        }
    }

    /// Parse from database string representation
    ///
    /// Unknown categories fall back to `FullBody`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "chest" => Self::Chest,
            "back" => Self::Back,
            "shoulders" => Self::Shoulders,
            "legs" => Self::Legs,
            "arms" => Self::Arms,
            "core" => Self::Core,
            _ => Self::FullBody,
        }
    }

    /// All muscle groups in catalog display order
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Chest,
            Self::Back,
            Self::Shoulders,
            Self::Legs,
            Self::Arms,
            Self::Core,
            Self::FullBody,
        ]
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single set within a session exercise
///
/// Seeded from the program's target values when a session is started from a
/// program; `completed` always starts false and is flipped as the user works
/// through the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    /// Unique identifier for the set
    pub id: Uuid,
    /// Weight used, in the currently configured display unit
    pub weight: f64,
    /// Repetitions performed (or targeted, until completed)
    pub reps: u32,
    /// Whether the set has been completed
    pub completed: bool,
}

/// Round tagging for an exercise instance that belongs to a circuit block
///
/// Present only on instances produced by circuit expansion. `round_number`
/// ranges from 1 to `total_rounds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CircuitRound {
    /// Identifier shared by all members of the circuit block
    pub group_id: String,
    /// Which round this instance belongs to (1-based)
    pub round_number: u32,
    /// Total number of rounds for the block
    pub total_rounds: u32,
    /// Rest between rounds in seconds, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_secs: Option<u32>,
}

/// One exercise instance inside a live or saved workout session
///
/// Grouped program exercises expand into one instance per round; ungrouped
/// exercises map to exactly one instance. Instances are created fresh each
/// time a session is started and are only persisted when the session is
/// finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExercise {
    /// Unique identifier for the instance
    pub id: Uuid,
    /// Exercise name (catalog or custom)
    pub name: String,
    /// Muscle group category
    pub muscle_group: MuscleGroup,
    /// Sets for this instance, in order
    pub sets: Vec<WorkoutSet>,
    /// Circuit round tagging, set only on grouped instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<CircuitRound>,
    /// Target distance in meters, for distance-based exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_distance: Option<f64>,
    /// Target time in seconds, for timed exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<u32>,
    /// Sets from the most recent saved workout containing this exercise,
    /// shown alongside the live session for reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_sets: Option<Vec<WorkoutSet>>,
}

impl SessionExercise {
    /// Create a bare exercise instance with a single empty set
    #[must_use]
    pub fn new(id: Uuid, set_id: Uuid, name: String, muscle_group: MuscleGroup) -> Self {
        Self {
            id,
            name,
            muscle_group,
            sets: vec![WorkoutSet {
                id: set_id,
                weight: 0.0,
                reps: 0,
                completed: false,
            }],
            circuit: None,
            target_distance: None,
            target_time: None,
            previous_sets: None,
        }
    }
}

/// A workout record: in progress while a session is live, immutable history
/// once finished and saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Member profile this workout belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<Uuid>,
    /// Program this workout was started from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<Uuid>,
    /// When the session started (UTC)
    pub date: DateTime<Utc>,
    /// Session duration in seconds, computed when finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    /// Sum of weight x reps over completed sets
    pub total_volume: f64,
    /// Number of completed sets
    pub total_sets: u32,
    /// Free-form user notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercises performed, in session order
    pub exercises: Vec<SessionExercise>,
}
