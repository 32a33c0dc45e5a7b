//! Roster and pairing handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tournament::{MatchView, Participant, RoundView};

use super::{ApiError, AppState};

/// List participants in roster order.
///
/// ```json
/// [{"name": "Alice", "class": "MP-1"}, {"name": "Bruno", "class": "PSI*"}]
/// ```
pub async fn list_participants(State(state): State<AppState>) -> Json<Vec<Participant>> {
    Json(state.tournament.read().await.participants())
}

/// The full schedule, one entry per round.
pub async fn list_rounds(State(state): State<AppState>) -> Json<Vec<RoundView>> {
    Json(state.tournament.read().await.schedule())
}

/// A single pairing.
///
/// # Errors
///
/// - `400 Bad Request`: round or match is not a number
/// - `404 Not Found`: no such round or match
pub async fn get_match(
    State(state): State<AppState>,
    path: Result<Path<(u32, u32)>, PathRejection>,
) -> Result<Json<MatchView>, ApiError> {
    let Path((round, match_number)) = path?;
    let tournament = state.tournament.read().await;
    Ok(Json(tournament.pairing(round, match_number)?))
}
