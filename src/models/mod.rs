// ABOUTME: Core data models for the LiftLog gym tracking backend
// ABOUTME: Re-exports workout, program, member, and catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! # Data Models
//!
//! Core data structures shared across the LiftLog server.
//!
//! ## Design Principles
//!
//! - **Closed sums over loose options**: circuit membership is a single
//!   `Option<CircuitAssignment>` rather than independently optional fields,
//!   so a grouped exercise always carries a round count.
//! - **Serializable**: all models support JSON serialization for the REST
//!   API and for storage round-trips.
//!
//! ## Core Models
//!
//! - `WorkoutProgram` / `ProgramExercise`: reusable training templates
//! - `Workout` / `SessionExercise` / `WorkoutSet`: live and saved sessions
//! - `Member` / `CustomExercise`: profiles and user-defined exercises

// Domain modules
mod catalog;
mod member;
mod program;
mod workout;

// Program domain
pub use program::{CircuitAssignment, ProgramExercise, WorkoutProgram, WorkoutStyle};

// Workout/session domain
pub use workout::{CircuitRound, MuscleGroup, SessionExercise, Workout, WorkoutSet};

// Member domain
pub use member::{CustomExercise, Member};

// Exercise catalog
pub use catalog::{exercises_for, ExerciseTemplate, BUILTIN_EXERCISES};
