//! HTTP API for the tournament server.
//!
//! # Endpoints
//!
//! ```text
//! GET  /health                                     - Health check
//! GET  /api/participants                           - Roster with classes
//! GET  /api/rounds                                 - Full schedule
//! GET  /api/rounds/{round}/matches/{match}         - One pairing
//! POST /api/rounds/{round}/matches/{match}/result  - Submit a result
//! GET  /api/results                                - All results
//! GET  /api/results/today                          - Results recorded today
//! GET  /api/standings                              - Ranked table
//! ```
//!
//! The tournament lives behind a single `RwLock`: reads share it, result
//! submission takes it exclusively.

pub mod results;
pub mod schedule;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tournament::{Tournament, TournamentError};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub tournament: Arc<RwLock<Tournament>>,
}

impl AppState {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            tournament: Arc::new(RwLock::new(tournament)),
        }
    }
}

/// Create the API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/participants", get(schedule::list_participants))
        .route("/rounds", get(schedule::list_rounds))
        .route(
            "/rounds/{round}/matches/{match_number}",
            get(schedule::get_match),
        )
        .route(
            "/rounds/{round}/matches/{match_number}/result",
            post(results::submit_result),
        )
        .route("/results", get(results::list_results))
        .route("/results/today", get(results::today_results))
        .route("/standings", get(results::standings));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures surfaced as HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// Rejected by the tournament itself
    Tournament(TournamentError),
    /// Path or body could not be parsed
    BadRequest(String),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        Self::Tournament(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Tournament(TournamentError::InvalidMatchIndex { .. }) => StatusCode::NOT_FOUND,
            Self::Tournament(
                TournamentError::UnknownParticipant(_) | TournamentError::NotInMatch { .. },
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Tournament(TournamentError::DuplicateResult { .. }) => StatusCode::CONFLICT,
            Self::Tournament(
                TournamentError::OddParticipantCount(_)
                | TournamentError::NotEnoughParticipants(_)
                | TournamentError::DuplicateParticipant(_),
            )
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Tournament(err) => err.to_string(),
            Self::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        if status.is_client_error() {
            tracing::debug!(%error, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Health check endpoint.
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","tournament":"Club Night","participants":30,"rounds":29,"results":4,...}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tournament = state.tournament.read().await;

    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "tournament": tournament.name(),
        "participants": tournament.roster().len(),
        "rounds": tournament.num_rounds(),
        "results": tournament.records().len(),
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}
