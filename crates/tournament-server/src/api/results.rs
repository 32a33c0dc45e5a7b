//! Result submission, results listing and standings handlers.
//!
//! Submit a win:
//! ```bash
//! curl -X POST http://localhost:8080/api/rounds/1/matches/3/result \
//!   -H "Content-Type: application/json" \
//!   -d '{"outcome": "win", "winner": "Alice", "loser": "Bruno"}'
//! ```
//!
//! Replace an earlier result with a draw:
//! ```bash
//! curl -X POST http://localhost:8080/api/rounds/1/matches/3/result \
//!   -H "Content-Type: application/json" \
//!   -d '{"outcome": "draw", "overwrite": true}'
//! ```

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tournament::{DuplicatePolicy, ReportedResult, ResultEntry, StandingRow};

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmitResultRequest {
    Win {
        winner: String,
        loser: String,
        #[serde(default)]
        overwrite: bool,
    },
    Draw {
        #[serde(default)]
        overwrite: bool,
    },
}

impl SubmitResultRequest {
    fn into_parts(self) -> (ReportedResult, DuplicatePolicy) {
        let policy = |overwrite: bool| {
            if overwrite {
                DuplicatePolicy::Overwrite
            } else {
                DuplicatePolicy::Reject
            }
        };

        match self {
            Self::Win {
                winner,
                loser,
                overwrite,
            } => (ReportedResult::win(winner, loser), policy(overwrite)),
            Self::Draw { overwrite } => (ReportedResult::Draw, policy(overwrite)),
        }
    }
}

/// Record the result of a match.
///
/// # Response
///
/// `201 Created` with the stored result.
///
/// # Errors
///
/// - `400 Bad Request`: malformed path or body
/// - `404 Not Found`: no such round or match
/// - `409 Conflict`: match already has a result and `overwrite` was not set
/// - `422 Unprocessable Entity`: unknown participant, or not one of this match's two
pub async fn submit_result(
    State(state): State<AppState>,
    path: Result<Path<(u32, u32)>, PathRejection>,
    body: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResultEntry>), ApiError> {
    let Path((round, match_number)) = path?;
    let Json(request) = body?;
    let (reported, policy) = request.into_parts();

    let mut tournament = state.tournament.write().await;
    let record = tournament
        .submit_result_with(round, match_number, &reported, policy, Local::now())?
        .clone();

    Ok((
        StatusCode::CREATED,
        Json(record.to_entry(tournament.roster())),
    ))
}

/// All results, ordered by round then match.
pub async fn list_results(State(state): State<AppState>) -> Json<Vec<ResultEntry>> {
    Json(state.tournament.read().await.results())
}

/// Results recorded today (server local time).
pub async fn today_results(State(state): State<AppState>) -> Json<Vec<ResultEntry>> {
    Json(state.tournament.read().await.today_results())
}

/// Ranked standings, highest points first.
pub async fn standings(State(state): State<AppState>) -> Json<Vec<StandingRow>> {
    Json(state.tournament.read().await.standings())
}
