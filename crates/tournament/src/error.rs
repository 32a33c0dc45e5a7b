//! Error kinds for tournament operations

use thiserror::Error;

/// Everything that can go wrong while building a schedule or recording a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// The (round, match) pair does not exist in the schedule
    #[error("no match {match_number} in round {round}")]
    InvalidMatchIndex { round: u32, match_number: u32 },

    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// A result was already recorded for this match and overwriting was not requested
    #[error("result for round {round} match {match_number} was already submitted")]
    DuplicateResult { round: u32, match_number: u32 },

    /// The circle method needs an even field
    #[error("round-robin needs an even number of participants, got {0}")]
    OddParticipantCount(usize),

    #[error("round-robin needs at least two participants, got {0}")]
    NotEnoughParticipants(usize),

    #[error("participant listed twice: {0}")]
    DuplicateParticipant(String),

    /// The named participant is known but does not play in this match
    #[error("{name} does not play in round {round} match {match_number}")]
    NotInMatch {
        name: String,
        round: u32,
        match_number: u32,
    },
}
