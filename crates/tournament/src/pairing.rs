//! Round-robin pairing generation (circle method)
//!
//! The first participant stays fixed while everyone else rotates one seat per
//! round. For N participants this yields N-1 rounds of N/2 matches in which
//! every pair meets exactly once.

use serde::Serialize;

use crate::error::TournamentError;
use crate::roster::ParticipantId;

/// Generate all rounds for an even field.
///
/// Works on a private copy of `participants`; the caller's ordering is left
/// untouched, so calling this twice gives the same schedule.
pub fn circle_pairings<T: Clone>(participants: &[T]) -> Result<Vec<Vec<(T, T)>>, TournamentError> {
    let n = participants.len();
    if n < 2 {
        return Err(TournamentError::NotEnoughParticipants(n));
    }
    if n % 2 != 0 {
        return Err(TournamentError::OddParticipantCount(n));
    }

    let mut order = participants.to_vec();
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let round = (0..n / 2)
            .map(|i| (order[i].clone(), order[n - 1 - i].clone()))
            .collect();
        rounds.push(round);

        // Rotate everything but the head: last seat moves to seat 1
        order[1..].rotate_right(1);
    }

    Ok(rounds)
}

/// One round of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    /// Pairings in match order (match 1 first)
    pub matches: Vec<(ParticipantId, ParticipantId)>,
}

/// Immutable schedule, generated once from the roster order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    pub fn generate(participants: &[ParticipantId]) -> Result<Self, TournamentError> {
        let rounds: Vec<Round> = circle_pairings(participants)?
            .into_iter()
            .zip(1..)
            .map(|(matches, number)| Round { number, matches })
            .collect();

        tracing::debug!(
            participants = participants.len(),
            rounds = rounds.len(),
            "generated round-robin schedule"
        );

        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Look up a round by its 1-based number
    pub fn round(&self, round: u32) -> Option<&Round> {
        let idx = (round as usize).checked_sub(1)?;
        self.rounds.get(idx)
    }

    /// Resolve a 1-based (round, match) pair to its two participants
    pub fn pairing(
        &self,
        round: u32,
        match_number: u32,
    ) -> Result<(ParticipantId, ParticipantId), TournamentError> {
        (match_number as usize)
            .checked_sub(1)
            .and_then(|m| self.round(round)?.matches.get(m))
            .copied()
            .ok_or(TournamentError::InvalidMatchIndex {
                round,
                match_number,
            })
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
