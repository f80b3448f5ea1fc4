// ABOUTME: Live workout session state: in-memory mutations and the server-side session store
// ABOUTME: Sessions are discarded unless finished, at which point they become a persistable Workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use super::expansion::IdSource;
use crate::models::{MuscleGroup, SessionExercise, Workout, WorkoutSet};

/// Partial update applied to a single set
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct SetUpdate {
    /// New weight, if changing
    pub weight: Option<f64>,
    /// New rep count, if changing
    pub reps: Option<u32>,
    /// New completion state, if changing
    pub completed: Option<bool>,
}

/// An in-progress workout session
///
/// Owned by the session store for its duration. Nothing here touches
/// storage; `finish` produces the `Workout` the database layer persists.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActiveSession {
    /// Session identifier, reused as the workout id on finish
    pub id: Uuid,
    /// Member the session belongs to
    pub member_id: Option<Uuid>,
    /// Program the session was started from, if any
    pub program_id: Option<Uuid>,
    /// When the session started (UTC)
    pub started_at: DateTime<Utc>,
    /// Exercises in session order
    pub exercises: Vec<SessionExercise>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl ActiveSession {
    /// Start an empty ad-hoc session
    #[must_use]
    pub fn new(id: Uuid, member_id: Option<Uuid>) -> Self {
        Self {
            id,
            member_id,
            program_id: None,
            started_at: Utc::now(),
            exercises: Vec::new(),
            notes: None,
        }
    }

    /// Start a session from already-expanded program exercises
    #[must_use]
    pub fn from_program(
        id: Uuid,
        member_id: Option<Uuid>,
        program_id: Uuid,
        exercises: Vec<SessionExercise>,
    ) -> Self {
        Self {
            id,
            member_id,
            program_id: Some(program_id),
            started_at: Utc::now(),
            exercises,
            notes: None,
        }
    }

    /// Append a new exercise with a single empty set, returning its id
    pub fn add_exercise(
        &mut self,
        name: String,
        muscle_group: MuscleGroup,
        ids: &mut impl IdSource,
    ) -> Uuid {
        let exercise = SessionExercise::new(ids.next_id(), ids.next_id(), name, muscle_group);
        let exercise_id = exercise.id;
        self.exercises.push(exercise);
        exercise_id
    }

    /// Remove an exercise; returns false if no exercise had that id
    pub fn remove_exercise(&mut self, exercise_id: Uuid) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != exercise_id);
        self.exercises.len() != before
    }

    /// Append a set to an exercise, seeded from its last set's weight and
    /// reps; returns the new set id
    pub fn add_set(&mut self, exercise_id: Uuid, ids: &mut impl IdSource) -> Option<Uuid> {
        let exercise = self.exercises.iter_mut().find(|e| e.id == exercise_id)?;
        let (weight, reps) = exercise
            .sets
            .last()
            .map_or((0.0, 0), |last| (last.weight, last.reps));
        let set = WorkoutSet {
            id: ids.next_id(),
            weight,
            reps,
            completed: false,
        };
        let set_id = set.id;
        exercise.sets.push(set);
        Some(set_id)
    }

    /// Remove a set from an exercise; returns false if not found
    pub fn remove_set(&mut self, exercise_id: Uuid, set_id: Uuid) -> bool {
        let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == exercise_id) else {
            return false;
        };
        let before = exercise.sets.len();
        exercise.sets.retain(|s| s.id != set_id);
        exercise.sets.len() != before
    }

    /// Apply a partial update to a set; returns false if not found
    pub fn update_set(&mut self, exercise_id: Uuid, set_id: Uuid, update: SetUpdate) -> bool {
        let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == exercise_id) else {
            return false;
        };
        let Some(set) = exercise.sets.iter_mut().find(|s| s.id == set_id) else {
            return false;
        };
        if let Some(weight) = update.weight {
            set.weight = weight;
        }
        if let Some(reps) = update.reps {
            set.reps = reps;
        }
        if let Some(completed) = update.completed {
            set.completed = completed;
        }
        true
    }

    /// Attach previous-workout reference sets, keyed by exercise name
    ///
    /// Each occurrence of an exercise name picks up the same reference sets
    /// (fresh ids, never completed), so repeated circuit rounds all show the
    /// prior record.
    pub fn apply_previous_sets(
        &mut self,
        previous: &HashMap<String, Vec<(f64, u32)>>,
        ids: &mut impl IdSource,
    ) {
        for exercise in &mut self.exercises {
            if let Some(prior) = previous.get(&exercise.name) {
                exercise.previous_sets = Some(
                    prior
                        .iter()
                        .map(|&(weight, reps)| WorkoutSet {
                            id: ids.next_id(),
                            weight,
                            reps,
                            completed: false,
                        })
                        .collect(),
                );
            }
        }
    }

    /// Close the session into a persistable workout record
    ///
    /// Duration is measured from session start; volume and set totals count
    /// completed sets only.
    #[must_use]
    pub fn finish(self, now: DateTime<Utc>) -> Workout {
        let duration_secs = u32::try_from((now - self.started_at).num_seconds().max(0)).unwrap_or(u32::MAX);

        let mut total_volume = 0.0;
        let mut total_sets = 0;
        for exercise in &self.exercises {
            for set in &exercise.sets {
                if set.completed {
                    total_volume += set.weight * f64::from(set.reps);
                    total_sets += 1;
                }
            }
        }

        Workout {
            id: self.id,
            member_id: self.member_id,
            program_id: self.program_id,
            date: self.started_at,
            duration_secs: Some(duration_secs),
            total_volume,
            total_sets,
            notes: self.notes,
            exercises: self.exercises,
        }
    }
}

/// Server-side store of in-progress sessions
///
/// Sessions live here between the start and finish/cancel requests. Entries
/// are removed on finish or cancel; an abandoned session simply stays until
/// process exit, matching the throwaway nature of unfinished workouts.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, ActiveSession>,
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session, returning its id
    pub fn insert(&self, session: ActiveSession) -> Uuid {
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    /// Snapshot a session by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<ActiveSession> {
        self.sessions.get(&id).map(|s| s.clone())
    }

    /// Run a mutation against a stored session
    pub fn mutate<T>(&self, id: Uuid, f: impl FnOnce(&mut ActiveSession) -> T) -> Option<T> {
        self.sessions.get_mut(&id).map(|mut s| f(&mut s))
    }

    /// Remove a session (finish or cancel), returning it
    pub fn remove(&self, id: Uuid) -> Option<ActiveSession> {
        self.sessions.remove(&id).map(|(_, s)| s)
    }

    /// Number of in-progress sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are in progress
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
