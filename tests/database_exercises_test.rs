// ABOUTME: Integration tests for the exercise catalog database operations
// ABOUTME: Covers custom exercise creation, name collisions, and the merged catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use liftlog_server::errors::ErrorCode;
use liftlog_server::models::{MuscleGroup, BUILTIN_EXERCISES};

#[tokio::test]
async fn create_custom_exercise_and_list() {
    let database = helpers::test_database().await;

    let exercise = database
        .exercises()
        .create("Landmine Press", MuscleGroup::Shoulders)
        .await
        .unwrap();
    assert_eq!(exercise.name, "Landmine Press");
    assert_eq!(exercise.muscle_group, MuscleGroup::Shoulders);

    let customs = database.exercises().list().await.unwrap();
    assert_eq!(customs.len(), 1);
    assert_eq!(customs[0].id, exercise.id);
}

#[tokio::test]
async fn create_rejects_builtin_and_duplicate_names() {
    let database = helpers::test_database().await;

    let builtin = BUILTIN_EXERCISES[0].name;
    let err = database
        .exercises()
        .create(builtin, MuscleGroup::Chest)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    database
        .exercises()
        .create("Sled Push", MuscleGroup::Legs)
        .await
        .unwrap();
    let err = database
        .exercises()
        .create("Sled Push", MuscleGroup::Legs)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn catalog_merges_builtins_and_customs() {
    let database = helpers::test_database().await;

    let custom = database
        .exercises()
        .create("Sled Push", MuscleGroup::Legs)
        .await
        .unwrap();

    let catalog = database.exercises().catalog().await.unwrap();
    assert_eq!(catalog.len(), BUILTIN_EXERCISES.len() + 1);

    let builtin_count = catalog.iter().filter(|e| !e.custom).count();
    assert_eq!(builtin_count, BUILTIN_EXERCISES.len());

    let entry = catalog.iter().find(|e| e.name == "Sled Push").unwrap();
    assert!(entry.custom);
    assert_eq!(entry.id, Some(custom.id));
}

#[tokio::test]
async fn delete_removes_custom_exercise() {
    let database = helpers::test_database().await;
    let custom = database
        .exercises()
        .create("Sled Push", MuscleGroup::Legs)
        .await
        .unwrap();

    database.exercises().delete(custom.id).await.unwrap();
    assert!(database.exercises().list().await.unwrap().is_empty());

    let err = database.exercises().delete(custom.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
