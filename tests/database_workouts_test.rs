// ABOUTME: Integration tests for saved workout database operations
// ABOUTME: Covers save/load round trips, member filtering, set edits, and previous-set lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use chrono::{Duration, Utc};
use uuid::Uuid;

use liftlog_server::database::workouts::UpdateSavedSetRequest;
use liftlog_server::database::Database;
use liftlog_server::errors::ErrorCode;
use liftlog_server::models::{
    CircuitRound, MuscleGroup, SessionExercise, Workout, WorkoutSet,
};

fn completed_set(weight: f64, reps: u32) -> WorkoutSet {
    WorkoutSet {
        id: Uuid::new_v4(),
        weight,
        reps,
        completed: true,
    }
}

fn bench_workout(member_id: Option<Uuid>, days_ago: i64) -> Workout {
    let sets = vec![completed_set(135.0, 10), completed_set(145.0, 8)];
    let total_volume: f64 = sets.iter().map(|s| s.weight * f64::from(s.reps)).sum();

    Workout {
        id: Uuid::new_v4(),
        member_id,
        program_id: None,
        date: Utc::now() - Duration::days(days_ago),
        duration_secs: Some(1800),
        total_volume,
        total_sets: 2,
        notes: None,
        exercises: vec![SessionExercise {
            id: Uuid::new_v4(),
            name: "Bench Press".to_owned(),
            muscle_group: MuscleGroup::Chest,
            sets,
            circuit: None,
            target_distance: None,
            target_time: None,
            previous_sets: None,
        }],
    }
}

async fn member_id(database: &Database) -> Uuid {
    database.members().create("Tester").await.unwrap().id
}

#[tokio::test]
async fn save_and_get_round_trips_a_workout() {
    let database = helpers::test_database().await;
    let member = member_id(&database).await;

    let workout = bench_workout(Some(member), 0);
    database.workouts().save(&workout).await.unwrap();

    let fetched = database.workouts().get(workout.id).await.unwrap().unwrap();
    assert_eq!(fetched.member_id, Some(member));
    assert_eq!(fetched.total_sets, 2);
    assert!((fetched.total_volume - workout.total_volume).abs() < 1e-9);
    assert_eq!(fetched.exercises.len(), 1);
    assert_eq!(fetched.exercises[0].name, "Bench Press");
    assert_eq!(fetched.exercises[0].sets.len(), 2);
    assert!(fetched.exercises[0].sets.iter().all(|s| s.completed));
}

#[tokio::test]
async fn circuit_round_tags_survive_persistence() {
    let database = helpers::test_database().await;

    let mut workout = bench_workout(None, 0);
    workout.exercises[0].circuit = Some(CircuitRound {
        group_id: "g1".to_owned(),
        round_number: 2,
        total_rounds: 3,
        rest_secs: Some(60),
    });
    database.workouts().save(&workout).await.unwrap();

    let fetched = database.workouts().get(workout.id).await.unwrap().unwrap();
    let circuit = fetched.exercises[0].circuit.as_ref().unwrap();
    assert_eq!(circuit.group_id, "g1");
    assert_eq!(circuit.round_number, 2);
    assert_eq!(circuit.total_rounds, 3);
    assert_eq!(circuit.rest_secs, Some(60));
}

#[tokio::test]
async fn list_filters_by_member_and_orders_newest_first() {
    let database = helpers::test_database().await;
    let alice = member_id(&database).await;
    let bob = database.members().create("Bob").await.unwrap().id;

    let old = bench_workout(Some(alice), 5);
    let new = bench_workout(Some(alice), 1);
    let other = bench_workout(Some(bob), 2);
    for w in [&old, &new, &other] {
        database.workouts().save(w).await.unwrap();
    }

    let all = database.workouts().list(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let alices = database.workouts().list(Some(alice)).await.unwrap();
    assert_eq!(alices.len(), 2);
    assert_eq!(alices[0].id, new.id);
    assert_eq!(alices[1].id, old.id);
}

#[tokio::test]
async fn deleting_a_member_keeps_their_workouts_unassigned() {
    let database = helpers::test_database().await;
    let member = member_id(&database).await;

    let workout = bench_workout(Some(member), 0);
    database.workouts().save(&workout).await.unwrap();

    database.members().delete(member).await.unwrap();

    let fetched = database.workouts().get(workout.id).await.unwrap().unwrap();
    assert_eq!(fetched.member_id, None);
}

#[tokio::test]
async fn update_set_edits_weight_and_reps() {
    let database = helpers::test_database().await;
    let workout = bench_workout(None, 0);
    database.workouts().save(&workout).await.unwrap();

    let set_id = workout.exercises[0].sets[0].id;
    database
        .workouts()
        .update_set(
            set_id,
            UpdateSavedSetRequest {
                weight: Some(155.0),
                reps: None,
            },
        )
        .await
        .unwrap();

    let fetched = database.workouts().get(workout.id).await.unwrap().unwrap();
    let set = fetched.exercises[0]
        .sets
        .iter()
        .find(|s| s.id == set_id)
        .unwrap();
    assert!((set.weight - 155.0).abs() < f64::EPSILON);
    assert_eq!(set.reps, 10);

    let err = database
        .workouts()
        .update_set(Uuid::new_v4(), UpdateSavedSetRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn previous_sets_returns_most_recent_occurrence_per_name() {
    let database = helpers::test_database().await;
    let member = member_id(&database).await;

    let mut old = bench_workout(Some(member), 10);
    old.exercises[0].sets = vec![completed_set(125.0, 10)];
    let new = bench_workout(Some(member), 1);
    database.workouts().save(&old).await.unwrap();
    database.workouts().save(&new).await.unwrap();

    let previous = database
        .workouts()
        .previous_sets(
            Some(member),
            &["Bench Press".to_owned(), "Deadlift".to_owned()],
        )
        .await
        .unwrap();

    let bench = previous.get("Bench Press").unwrap();
    assert_eq!(bench.len(), 2);
    assert!((bench[0].0 - 135.0).abs() < f64::EPSILON);
    assert_eq!(bench[0].1, 10);

    assert!(!previous.contains_key("Deadlift"));
}

#[tokio::test]
async fn delete_removes_workout() {
    let database = helpers::test_database().await;
    let workout = bench_workout(None, 0);
    database.workouts().save(&workout).await.unwrap();

    database.workouts().delete(workout.id).await.unwrap();
    assert!(database.workouts().get(workout.id).await.unwrap().is_none());
}
