// ABOUTME: Built-in exercise catalog organized by muscle group
// ABOUTME: Merged with user-defined custom exercises when listing available exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use serde::{Deserialize, Serialize};

use super::MuscleGroup;

/// A catalog entry: an exercise name with its muscle group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Muscle group category
    pub muscle_group: MuscleGroup,
}

const fn entry(name: &'static str, muscle_group: MuscleGroup) -> ExerciseTemplate {
    ExerciseTemplate { name, muscle_group }
}

/// The built-in exercise catalog, in display order
pub const BUILTIN_EXERCISES: &[ExerciseTemplate] = &[
    // Chest
    entry("Bench Press", MuscleGroup::Chest),
    entry("Incline Bench Press", MuscleGroup::Chest),
    entry("Dumbbell Fly", MuscleGroup::Chest),
    entry("Cable Crossover", MuscleGroup::Chest),
    entry("Push-Up", MuscleGroup::Chest),
    entry("Dips", MuscleGroup::Chest),
    // Back
    entry("Pull-Up", MuscleGroup::Back),
    entry("Lat Pulldown", MuscleGroup::Back),
    entry("Barbell Row", MuscleGroup::Back),
    entry("Seated Row", MuscleGroup::Back),
    entry("Dumbbell Row", MuscleGroup::Back),
    entry("Deadlift", MuscleGroup::Back),
    // Shoulders
    entry("Overhead Press", MuscleGroup::Shoulders),
    entry("Dumbbell Shoulder Press", MuscleGroup::Shoulders),
    entry("Lateral Raise", MuscleGroup::Shoulders),
    entry("Front Raise", MuscleGroup::Shoulders),
    entry("Face Pull", MuscleGroup::Shoulders),
    entry("Rear Delt Fly", MuscleGroup::Shoulders),
    // Legs
    entry("Squat", MuscleGroup::Legs),
    entry("Leg Press", MuscleGroup::Legs),
    entry("Lunge", MuscleGroup::Legs),
    entry("Leg Extension", MuscleGroup::Legs),
    entry("Leg Curl", MuscleGroup::Legs),
    entry("Calf Raise", MuscleGroup::Legs),
    entry("Hip Thrust", MuscleGroup::Legs),
    // Arms
    entry("Barbell Curl", MuscleGroup::Arms),
    entry("Dumbbell Curl", MuscleGroup::Arms),
    entry("Hammer Curl", MuscleGroup::Arms),
    entry("Triceps Pushdown", MuscleGroup::Arms),
    entry("Overhead Triceps Extension", MuscleGroup::Arms),
    entry("Skull Crusher", MuscleGroup::Arms),
    // Core
    entry("Crunch", MuscleGroup::Core),
    entry("Leg Raise", MuscleGroup::Core),
    entry("Plank", MuscleGroup::Core),
    entry("Russian Twist", MuscleGroup::Core),
    entry("Hanging Leg Raise", MuscleGroup::Core),
    // Full body
    entry("Burpee", MuscleGroup::FullBody),
    entry("Clean and Jerk", MuscleGroup::FullBody),
    entry("Kettlebell Swing", MuscleGroup::FullBody),
];

/// Built-in exercises for a single muscle group, in catalog order
pub fn exercises_for(muscle_group: MuscleGroup) -> impl Iterator<Item = &'static ExerciseTemplate> {
    BUILTIN_EXERCISES
        .iter()
        .filter(move |e| e.muscle_group == muscle_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_muscle_group() {
        for group in MuscleGroup::all() {
            assert!(
                exercises_for(group).count() > 0,
                "no catalog entries for {group}"
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = BUILTIN_EXERCISES.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_EXERCISES.len());
    }
}
