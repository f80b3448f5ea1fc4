// ABOUTME: HTTP integration tests exercising the full router with an in-memory database
// ABOUTME: Covers health, member CRUD, program creation, the session lifecycle, and settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use axum::Router;
use serde_json::{json, Value};

use helpers::axum_test::AxumTestRequest;
use liftlog_server::routes::router;

async fn test_app() -> Router {
    router(helpers::test_state().await)
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn member_crud_over_http() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/api/members")
        .json(&json!({ "name": "Alice" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let member: Value = response.json();
    assert_eq!(member["name"], "Alice");
    let member_id = member["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::put(&format!("/api/members/{member_id}"))
        .json(&json!({ "name": "Alicia" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get("/api/members").send(app.clone()).await;
    let members: Value = response.json();
    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["name"], "Alicia");

    let response = AxumTestRequest::delete(&format!("/api/members/{member_id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::get("/api/members").send(app).await;
    let members: Value = response.json();
    assert!(members.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_member_returns_structured_error() {
    let app = test_app().await;

    let response =
        AxumTestRequest::delete("/api/members/00000000-0000-0000-0000-000000000000")
            .send(app)
            .await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

fn circuit_program_body() -> Value {
    json!({
        "name": "Conditioning",
        "days_of_week": ["saturday"],
        "exercises": [
            {
                "exercise_name": "Rowing Machine",
                "muscle_group": "full_body",
                "target_sets": 1,
                "target_reps": 1,
                "target_weight": 0.0,
                "circuit": { "group_id": "g1", "rounds": 3 }
            },
            {
                "exercise_name": "Burpee",
                "muscle_group": "full_body",
                "target_sets": 1,
                "target_reps": 15,
                "target_weight": 0.0,
                "circuit": { "group_id": "g1", "rounds": 3 }
            }
        ]
    })
}

#[tokio::test]
async fn session_lifecycle_over_http() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/api/programs")
        .json(&circuit_program_body())
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let program: Value = response.json();
    let program_id = program["id"].as_str().unwrap().to_owned();

    // Starting a session expands the circuit into alternating rounds.
    let response = AxumTestRequest::post("/api/sessions")
        .json(&json!({ "program_id": program_id }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let session: Value = response.json();
    let session_id = session["id"].as_str().unwrap().to_owned();

    let exercises = session["exercises"].as_array().unwrap();
    let names: Vec<_> = exercises
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Rowing Machine",
            "Burpee",
            "Rowing Machine",
            "Burpee",
            "Rowing Machine",
            "Burpee",
        ]
    );
    assert_eq!(exercises[0]["circuit"]["round_number"], 1);
    assert_eq!(exercises[5]["circuit"]["round_number"], 3);

    // Complete the first burpee set.
    let exercise_id = exercises[1]["id"].as_str().unwrap();
    let set_id = exercises[1]["sets"][0]["id"].as_str().unwrap();
    let response = AxumTestRequest::put(&format!(
        "/api/sessions/{session_id}/exercises/{exercise_id}/sets/{set_id}"
    ))
    .json(&json!({ "weight": 0.0, "reps": 15, "completed": true }))
    .send(app.clone())
    .await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::post(&format!("/api/sessions/{session_id}/finish"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let workout: Value = response.json();
    assert_eq!(workout["total_sets"], 1);

    // The session is gone and the workout is in history.
    let response = AxumTestRequest::get(&format!("/api/sessions/{session_id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    let response = AxumTestRequest::get("/api/workouts").send(app).await;
    let workouts: Value = response.json();
    assert_eq!(workouts.as_array().unwrap().len(), 1);
    assert_eq!(workouts[0]["id"], workout["id"]);
}

#[tokio::test]
async fn cancelling_a_session_discards_it() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/api/sessions")
        .json(&json!({}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let session: Value = response.json();
    let session_id = session["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::delete(&format!("/api/sessions/{session_id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::get("/api/workouts").send(app).await;
    let workouts: Value = response.json();
    assert!(workouts.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn starting_from_unknown_program_is_not_found() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/api/sessions")
        .json(&json!({ "program_id": "00000000-0000-0000-0000-000000000000" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn weight_unit_settings_over_http() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/api/settings/weight-unit")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["weight_unit"], "lbs");

    let response = AxumTestRequest::put("/api/settings/weight-unit")
        .json(&json!({ "weight_unit": "kg" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get("/api/settings/weight-unit").send(app).await;
    let body: Value = response.json();
    assert_eq!(body["weight_unit"], "kg");
}

#[tokio::test]
async fn exercise_catalog_includes_builtins() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/api/exercises").send(app).await;
    assert_eq!(response.status(), 200);
    let catalog: Value = response.json();
    assert!(!catalog.as_array().unwrap().is_empty());
    assert_eq!(catalog[0]["custom"], false);
}

#[tokio::test]
async fn stats_volume_reflects_finished_workouts() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/api/sessions")
        .json(&json!({}))
        .send(app.clone())
        .await;
    let session: Value = response.json();
    let session_id = session["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post(&format!("/api/sessions/{session_id}/exercises"))
        .json(&json!({ "name": "Deadlift", "muscle_group": "back" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let created: Value = response.json();
    let exercise_id = created["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::get(&format!("/api/sessions/{session_id}"))
        .send(app.clone())
        .await;
    let session: Value = response.json();
    let set_id = session["exercises"][0]["sets"][0]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::put(&format!(
        "/api/sessions/{session_id}/exercises/{exercise_id}/sets/{set_id}"
    ))
    .json(&json!({ "weight": 225.0, "reps": 5, "completed": true }))
    .send(app.clone())
    .await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::post(&format!("/api/sessions/{session_id}/finish"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get("/api/stats/volume?days=7").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    let volume: Value = response.json();
    assert_eq!(volume.as_array().unwrap().len(), 1);
    assert!((volume[0]["total_volume"].as_f64().unwrap() - 1125.0).abs() < 1e-9);

    let response = AxumTestRequest::get("/api/stats/records").send(app).await;
    let records: Value = response.json();
    assert_eq!(records[0]["exercise_name"], "Deadlift");
    assert!((records[0]["max_weight"].as_f64().unwrap() - 225.0).abs() < 1e-9);
}

#[tokio::test]
async fn failed_finish_keeps_session_retryable() {
    let state = helpers::test_state().await;
    let app = router(state.clone());

    let response = AxumTestRequest::post("/api/sessions")
        .json(&json!({}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let session: Value = response.json();
    let session_id = session["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post(&format!("/api/sessions/{session_id}/exercises"))
        .json(&json!({ "name": "Deadlift", "muscle_group": "back" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    // Force the persist to fail
    state.database.pool().close().await;

    let response = AxumTestRequest::post(&format!("/api/sessions/{session_id}/finish"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 500);

    // The session stays live so finishing can be retried
    let response = AxumTestRequest::get(&format!("/api/sessions/{session_id}"))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let session: Value = response.json();
    assert_eq!(session["exercises"].as_array().unwrap().len(), 1);
}
