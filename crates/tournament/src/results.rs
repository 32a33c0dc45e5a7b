//! Match results storage

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Entry};

use crate::roster::{ParticipantId, Roster};

/// How a match ended, with participants already resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win {
        winner: ParticipantId,
        loser: ParticipantId,
    },
    Draw,
}

/// A result as reported by a caller, with participants named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ReportedResult {
    Win { winner: String, loser: String },
    Draw,
}

impl ReportedResult {
    pub fn win(winner: impl Into<String>, loser: impl Into<String>) -> Self {
        Self::Win {
            winner: winner.into(),
            loser: loser.into(),
        }
    }
}

/// What to do when a match already has a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse the new result
    #[default]
    Reject,
    /// Replace the stored result, reverting its effect on the standings first
    Overwrite,
}

/// A stored result
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub round: u32,
    pub match_number: u32,
    /// The scheduled pairing, in schedule order
    pub players: (ParticipantId, ParticipantId),
    pub outcome: Outcome,
    pub recorded_at: DateTime<Local>,
}

/// A stored result with names filled in, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub round: u32,
    #[serde(rename = "match")]
    pub match_number: u32,
    pub participants: [String; 2],
    /// "win" or "draw"
    pub outcome: &'static str,
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub recorded_at: DateTime<Local>,
}

impl MatchRecord {
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.recorded_at.date_naive() == date
    }

    pub fn to_entry(&self, roster: &Roster) -> ResultEntry {
        let name = |id: ParticipantId| roster.get(id).name.clone();
        let (outcome, winner, loser) = match self.outcome {
            Outcome::Win { winner, loser } => ("win", Some(name(winner)), Some(name(loser))),
            Outcome::Draw => ("draw", None, None),
        };

        ResultEntry {
            round: self.round,
            match_number: self.match_number,
            participants: [name(self.players.0), name(self.players.1)],
            outcome,
            winner,
            loser,
            recorded_at: self.recorded_at,
        }
    }
}

/// Results keyed by (round, match), ordered by round then match
#[derive(Debug, Clone, Default)]
pub struct ResultsStore {
    records: BTreeMap<(u32, u32), MatchRecord>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, round: u32, match_number: u32) -> Option<&MatchRecord> {
        self.records.get(&(round, match_number))
    }

    /// Store a record and hand back the stored copy
    pub fn store(&mut self, record: MatchRecord) -> &MatchRecord {
        match self.records.entry((record.round, record.match_number)) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(record),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.values()
    }

    /// Records whose timestamp falls on `date` (local calendar)
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &MatchRecord> {
        self.iter().filter(move |record| record.is_on(date))
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
