//! Points table
//!
//! A win is worth 1 point, a draw 0.5 to each side and a loss nothing.
//! Counters are the source of truth; points are derived from them.

use serde::Serialize;
use std::cmp::Reverse;

use crate::results::Outcome;
use crate::roster::{ParticipantId, Roster};

/// Running totals for one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StandingsEntry {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl StandingsEntry {
    /// Points scored (1 for win, 0.5 for draw, 0 for loss)
    pub fn points(&self) -> f64 {
        self.wins as f64 + 0.5 * self.draws as f64
    }

    /// Points doubled, for exact comparisons
    pub fn half_points(&self) -> u32 {
        2 * self.wins + self.draws
    }
}

/// One line of the ranked table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    /// 1-based position
    pub rank: usize,
    pub participant: String,
    pub class: String,
    pub points: f64,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

/// Per-participant totals, indexed by [`ParticipantId`]
#[derive(Debug, Clone, Default)]
pub struct Standings {
    entries: Vec<StandingsEntry>,
}

impl Standings {
    pub fn new(participants: usize) -> Self {
        Self {
            entries: vec![StandingsEntry::default(); participants],
        }
    }

    pub fn entry(&self, id: ParticipantId) -> &StandingsEntry {
        &self.entries[id.0]
    }

    /// Credit a finished match to both participants
    pub fn apply(&mut self, players: (ParticipantId, ParticipantId), outcome: &Outcome) {
        let (a, b) = players;
        self.entries[a.0].matches_played += 1;
        self.entries[b.0].matches_played += 1;

        match *outcome {
            Outcome::Win { winner, loser } => {
                self.entries[winner.0].wins += 1;
                self.entries[loser.0].losses += 1;
            }
            Outcome::Draw => {
                self.entries[a.0].draws += 1;
                self.entries[b.0].draws += 1;
            }
        }
    }

    /// Undo a previous [`Standings::apply`] with the same arguments
    pub fn revert(&mut self, players: (ParticipantId, ParticipantId), outcome: &Outcome) {
        let (a, b) = players;
        self.entries[a.0].matches_played -= 1;
        self.entries[b.0].matches_played -= 1;

        match *outcome {
            Outcome::Win { winner, loser } => {
                self.entries[winner.0].wins -= 1;
                self.entries[loser.0].losses -= 1;
            }
            Outcome::Draw => {
                self.entries[a.0].draws -= 1;
                self.entries[b.0].draws -= 1;
            }
        }
    }

    /// Ids sorted by points, highest first. Ties keep roster order.
    pub fn ranked_ids(&self) -> Vec<ParticipantId> {
        let mut ids: Vec<ParticipantId> = (0..self.entries.len()).map(ParticipantId).collect();
        // sort_by_key is stable
        ids.sort_by_key(|id| Reverse(self.entries[id.0].half_points()));
        ids
    }

    /// Build the ranked table with names and classes filled in
    pub fn table(&self, roster: &Roster) -> Vec<StandingRow> {
        self.ranked_ids()
            .into_iter()
            .enumerate()
            .map(|(idx, id)| {
                let participant = roster.get(id);
                let entry = self.entry(id);
                StandingRow {
                    rank: idx + 1,
                    participant: participant.name.clone(),
                    class: participant.class.clone(),
                    points: entry.points(),
                    matches_played: entry.matches_played,
                    wins: entry.wins,
                    draws: entry.draws,
                    losses: entry.losses,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
