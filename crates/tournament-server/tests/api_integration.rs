//! Integration tests for the HTTP API.
//!
//! Requests go straight through the router with `oneshot`; no socket is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tournament::{Participant, Roster, Tournament};
use tournament_server::api::{create_router, AppState};
use tower::ServiceExt; // For `oneshot` method

/// Router over a fresh four-player tournament: A, B, C, D
fn create_test_server() -> Router {
    let roster = Roster::new(
        "API Cup",
        vec![
            Participant::new("A", "MP-1"),
            Participant::new("B", "MP-2"),
            Participant::new("C", "PSI*"),
            Participant::new("D", "PCSI-3"),
        ],
    )
    .unwrap();
    create_router(AppState::new(Tournament::new(roster).unwrap()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_result(app: &Router, round: u32, m: u32, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/rounds/{}/matches/{}/result", round, m))
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

// ============================================================================
// Read-only endpoints
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_server();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tournament"], "API Cup");
    assert_eq!(body["participants"], 4);
    assert_eq!(body["rounds"], 3);
    assert_eq!(body["results"], 0);
}

#[tokio::test]
async fn test_list_participants() {
    let app = create_test_server();
    let (status, body) = get(&app, "/api/participants").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[2], json!({"name": "C", "class": "PSI*"}));
}

#[tokio::test]
async fn test_list_rounds() {
    let app = create_test_server();
    let (status, body) = get(&app, "/api/rounds").await;

    assert_eq!(status, StatusCode::OK);
    let rounds = body.as_array().unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0]["round"], 1);
    assert_eq!(
        rounds[0]["matches"][0],
        json!({"round": 1, "match": 1, "participants": ["A", "D"], "played": false})
    );
}

#[tokio::test]
async fn test_get_match() {
    let app = create_test_server();
    let (status, body) = get(&app, "/api/rounds/3/matches/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participants"], json!(["A", "B"]));

    let (status, body) = get(&app, "/api/rounds/9/matches/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("round 9"));
}

// ============================================================================
// Result submission
// ============================================================================

#[tokio::test]
async fn test_submit_win_updates_standings() {
    let app = create_test_server();
    let (status, body) = post_result(
        &app,
        3,
        1,
        json!({"outcome": "win", "winner": "A", "loser": "B"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["winner"], "A");
    assert_eq!(body["loser"], "B");
    assert_eq!(body["outcome"], "win");

    let (_, standings) = get(&app, "/api/standings").await;
    assert_eq!(standings[0]["participant"], "A");
    assert_eq!(standings[0]["rank"], 1);
    assert_eq!(standings[0]["points"], 1.0);
    assert_eq!(standings[0]["wins"], 1);

    let b = standings
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["participant"] == "B")
        .unwrap();
    assert_eq!(b["losses"], 1);
    assert_eq!(b["matches_played"], 1);
    assert_eq!(b["points"], 0.0);
}

#[tokio::test]
async fn test_submit_draw() {
    let app = create_test_server();
    let (status, body) = post_result(&app, 3, 2, json!({"outcome": "draw"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["outcome"], "draw");
    assert_eq!(body["participants"], json!(["C", "D"]));
    assert!(body["winner"].is_null());

    let (_, standings) = get(&app, "/api/standings").await;
    for row in standings.as_array().unwrap() {
        if row["participant"] == "C" || row["participant"] == "D" {
            assert_eq!(row["points"], 0.5);
            assert_eq!(row["draws"], 1);
        }
    }
}

#[tokio::test]
async fn test_duplicate_submission_conflict() {
    let app = create_test_server();
    let payload = json!({"outcome": "win", "winner": "D", "loser": "A"});
    let (status, _) = post_result(&app, 1, 1, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_result(&app, 1, 1, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already submitted"));

    let (_, standings) = get(&app, "/api/standings").await;
    assert_eq!(standings[0]["participant"], "D");
    assert_eq!(standings[0]["wins"], 1);
}

#[tokio::test]
async fn test_overwrite_submission() {
    let app = create_test_server();
    post_result(&app, 1, 1, json!({"outcome": "win", "winner": "D", "loser": "A"})).await;

    let (status, _) = post_result(&app, 1, 1, json!({"outcome": "draw", "overwrite": true})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, results) = get(&app, "/api/results").await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["outcome"], "draw");

    let (_, standings) = get(&app, "/api/standings").await;
    for row in standings.as_array().unwrap() {
        assert_eq!(row["wins"], 0);
    }
}

#[tokio::test]
async fn test_submission_errors() {
    let app = create_test_server();

    let (status, _) = post_result(&app, 5, 1, json!({"outcome": "draw"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = post_result(
        &app,
        1,
        1,
        json!({"outcome": "win", "winner": "Zed", "loser": "A"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Zed"));

    let (status, _) = post_result(
        &app,
        1,
        1,
        json!({"outcome": "win", "winner": "B", "loser": "C"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, results) = get(&app, "/api/results").await;
    assert!(results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_today_results() {
    let app = create_test_server();
    post_result(&app, 2, 2, json!({"outcome": "draw"})).await;

    let (status, today) = get(&app, "/api/results/today").await;
    assert_eq!(status, StatusCode::OK);
    let today = today.as_array().unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["round"], 2);
    assert_eq!(today[0]["match"], 2);
}

#[tokio::test]
async fn test_played_flag_in_schedule() {
    let app = create_test_server();
    post_result(&app, 2, 1, json!({"outcome": "draw"})).await;

    let (_, m) = get(&app, "/api/rounds/2/matches/1").await;
    assert_eq!(m["played"], true);
}

// ============================================================================
// Malformed requests
// ============================================================================

#[tokio::test]
async fn test_missing_field_is_json_bad_request() {
    let app = create_test_server();
    let (status, body) = post_result(&app, 1, 1, json!({"outcome": "win", "winner": "D"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("loser"));

    let (_, results) = get(&app, "/api/results").await;
    assert!(results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_outcome_is_json_bad_request() {
    let app = create_test_server();
    let (status, body) = post_result(&app, 1, 1, json!({"outcome": "forfeit"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_path_is_json_bad_request() {
    let app = create_test_server();

    let request = Request::builder()
        .method("POST")
        .uri("/api/rounds/x/matches/1/result")
        .header("content-type", "application/json")
        .body(Body::from(json!({"outcome": "draw"}).to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = get(&app, "/api/rounds/1/matches/first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
