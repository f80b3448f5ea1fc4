// ABOUTME: Integration tests for the live session lifecycle
// ABOUTME: Program expansion into a session, set mutation, previous-set backfill, and finishing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use std::collections::HashMap;

use chrono::{Duration, Utc};
use uuid::Uuid;

use liftlog_server::models::{MuscleGroup, ProgramExercise};
use liftlog_server::session::{expand, ActiveSession, RandomIds, SessionStore, SetUpdate};

fn circuit_templates() -> Vec<ProgramExercise> {
    vec![
        ProgramExercise::classic("Kettlebell Swing", MuscleGroup::FullBody, 1, 15, 35.0)
            .in_circuit("g1", 2),
        ProgramExercise::classic("Goblet Squat", MuscleGroup::Legs, 1, 12, 35.0)
            .in_circuit("g1", 2),
        ProgramExercise::classic("Plank", MuscleGroup::Core, 3, 1, 0.0),
    ]
}

#[test]
fn session_from_program_carries_expanded_exercises() {
    let mut ids = RandomIds;
    let exercises = expand(&circuit_templates(), &mut ids);
    let session = ActiveSession::from_program(Uuid::new_v4(), None, Uuid::new_v4(), exercises);

    assert_eq!(session.exercises.len(), 5);
    assert!(session.program_id.is_some());
    assert!(session
        .exercises
        .iter()
        .flat_map(|e| &e.sets)
        .all(|s| !s.completed));
}

#[test]
fn add_set_seeds_from_the_last_set() {
    let mut ids = RandomIds;
    let mut session = ActiveSession::new(Uuid::new_v4(), None);
    let exercise_id = session.add_exercise("Deadlift".to_owned(), MuscleGroup::Back, &mut ids);

    let first_set = session.exercises[0].sets[0].id;
    assert!(session.update_set(
        exercise_id,
        first_set,
        SetUpdate {
            weight: Some(225.0),
            reps: Some(5),
            completed: Some(true),
        },
    ));

    session.add_set(exercise_id, &mut ids).unwrap();
    let new_set = session.exercises[0].sets.last().unwrap();
    assert!((new_set.weight - 225.0).abs() < f64::EPSILON);
    assert_eq!(new_set.reps, 5);
    assert!(!new_set.completed);
}

#[test]
fn remove_set_and_exercise_report_missing_targets() {
    let mut ids = RandomIds;
    let mut session = ActiveSession::new(Uuid::new_v4(), None);
    let exercise_id = session.add_exercise("Curl".to_owned(), MuscleGroup::Arms, &mut ids);
    let set_id = session.exercises[0].sets[0].id;

    assert!(session.remove_set(exercise_id, set_id));
    assert!(!session.remove_set(exercise_id, set_id));
    assert!(session.remove_exercise(exercise_id));
    assert!(!session.remove_exercise(exercise_id));
}

#[test]
fn previous_sets_backfill_every_occurrence_of_a_name() {
    let mut ids = RandomIds;
    let exercises = expand(&circuit_templates(), &mut ids);
    let mut session = ActiveSession::from_program(Uuid::new_v4(), None, Uuid::new_v4(), exercises);

    let mut previous = HashMap::new();
    previous.insert("Kettlebell Swing".to_owned(), vec![(40.0, 15), (40.0, 12)]);
    session.apply_previous_sets(&previous, &mut ids);

    let swings: Vec<_> = session
        .exercises
        .iter()
        .filter(|e| e.name == "Kettlebell Swing")
        .collect();
    assert_eq!(swings.len(), 2);
    for swing in swings {
        let prior = swing.previous_sets.as_ref().unwrap();
        assert_eq!(prior.len(), 2);
        assert!((prior[0].weight - 40.0).abs() < f64::EPSILON);
        assert!(prior.iter().all(|s| !s.completed));
    }
    assert!(session.exercises[4].previous_sets.is_none());
}

#[test]
fn finish_counts_only_completed_sets() {
    let mut ids = RandomIds;
    let mut session = ActiveSession::new(Uuid::new_v4(), None);
    let exercise_id = session.add_exercise("Bench Press".to_owned(), MuscleGroup::Chest, &mut ids);

    let first = session.exercises[0].sets[0].id;
    session.update_set(
        exercise_id,
        first,
        SetUpdate {
            weight: Some(135.0),
            reps: Some(10),
            completed: Some(true),
        },
    );
    let second = session.add_set(exercise_id, &mut ids).unwrap();
    session.update_set(
        exercise_id,
        second,
        SetUpdate {
            weight: Some(145.0),
            reps: Some(8),
            completed: None,
        },
    );

    let started = session.started_at;
    let workout = session.finish(started + Duration::seconds(1800));

    assert_eq!(workout.duration_secs, Some(1800));
    assert_eq!(workout.total_sets, 1);
    assert!((workout.total_volume - 1350.0).abs() < f64::EPSILON);
    // The incomplete set is still part of the record.
    assert_eq!(workout.exercises[0].sets.len(), 2);
}

#[tokio::test]
async fn finished_session_persists_and_reloads() {
    let database = helpers::test_database().await;
    let member = database.members().create("Eve").await.unwrap().id;

    let mut ids = RandomIds;
    let exercises = expand(&circuit_templates(), &mut ids);
    let mut session =
        ActiveSession::from_program(Uuid::new_v4(), Some(member), Uuid::new_v4(), exercises);

    let exercise_id = session.exercises[0].id;
    let set_id = session.exercises[0].sets[0].id;
    session.update_set(
        exercise_id,
        set_id,
        SetUpdate {
            weight: None,
            reps: None,
            completed: Some(true),
        },
    );

    let workout = session.finish(Utc::now());
    database.workouts().save(&workout).await.unwrap();

    let fetched = database.workouts().get(workout.id).await.unwrap().unwrap();
    assert_eq!(fetched.member_id, Some(member));
    assert_eq!(fetched.exercises.len(), 5);
    assert_eq!(fetched.total_sets, 1);
    assert!((fetched.total_volume - 35.0 * 15.0).abs() < 1e-9);

    let round = fetched.exercises[0].circuit.as_ref().unwrap();
    assert_eq!(round.round_number, 1);
    assert_eq!(round.total_rounds, 2);
}

#[test]
fn store_holds_sessions_until_removed() {
    let store = SessionStore::new();
    assert!(store.is_empty());

    let session = ActiveSession::new(Uuid::new_v4(), None);
    let id = store.insert(session);
    assert_eq!(store.len(), 1);
    assert!(store.get(id).is_some());

    let renamed = store.mutate(id, |s| {
        s.notes = Some("felt strong".to_owned());
        s.id
    });
    assert_eq!(renamed, Some(id));
    assert_eq!(store.get(id).unwrap().notes.as_deref(), Some("felt strong"));

    assert!(store.remove(id).is_some());
    assert!(store.get(id).is_none());
    assert!(store.remove(id).is_none());
}
