//! Tournament context: roster, fixed schedule, results and standings together

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::error::TournamentError;
use crate::pairing::Schedule;
use crate::results::{
    DuplicatePolicy, MatchRecord, Outcome, ReportedResult, ResultEntry, ResultsStore,
};
use crate::roster::{Participant, ParticipantId, Roster};
use crate::standings::{StandingRow, Standings};

/// A scheduled match with participant names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub round: u32,
    #[serde(rename = "match")]
    pub match_number: u32,
    pub participants: [String; 2],
    /// Whether a result has been recorded
    pub played: bool,
}

/// A round with its named pairings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub round: u32,
    pub matches: Vec<MatchView>,
}

/// A round-robin tournament in progress.
///
/// Owns all mutable state; callers that share it across threads must wrap it
/// in a lock themselves.
#[derive(Debug, Clone)]
pub struct Tournament {
    roster: Roster,
    schedule: Schedule,
    standings: Standings,
    results: ResultsStore,
}

impl Tournament {
    /// Start a tournament; the schedule is fixed from the roster order here
    pub fn new(roster: Roster) -> Result<Self, TournamentError> {
        let ids: Vec<ParticipantId> = roster.ids().collect();
        let schedule = Schedule::generate(&ids)?;
        let standings = Standings::new(roster.len());

        tracing::info!(
            name = roster.name(),
            participants = roster.len(),
            rounds = schedule.num_rounds(),
            "tournament created"
        );

        Ok(Self {
            roster,
            schedule,
            standings,
            results: ResultsStore::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.roster.name()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn participants(&self) -> Vec<Participant> {
        self.roster.iter().cloned().collect()
    }

    pub fn num_rounds(&self) -> usize {
        self.schedule.num_rounds()
    }

    /// The full schedule, round 1 first
    pub fn schedule(&self) -> Vec<RoundView> {
        self.schedule
            .rounds()
            .iter()
            .map(|round| RoundView {
                round: round.number,
                matches: round
                    .matches
                    .iter()
                    .zip(1..)
                    .map(|(&players, match_number)| {
                        self.match_view(round.number, match_number, players)
                    })
                    .collect(),
            })
            .collect()
    }

    /// Look up a single scheduled match
    pub fn pairing(&self, round: u32, match_number: u32) -> Result<MatchView, TournamentError> {
        let players = self.schedule.pairing(round, match_number)?;
        Ok(self.match_view(round, match_number, players))
    }

    fn match_view(
        &self,
        round: u32,
        match_number: u32,
        (a, b): (ParticipantId, ParticipantId),
    ) -> MatchView {
        MatchView {
            round,
            match_number,
            participants: [
                self.roster.get(a).name.clone(),
                self.roster.get(b).name.clone(),
            ],
            played: self.results.get(round, match_number).is_some(),
        }
    }

    /// Record a result now, rejecting a second result for the same match
    pub fn submit_result(
        &mut self,
        round: u32,
        match_number: u32,
        reported: &ReportedResult,
    ) -> Result<&MatchRecord, TournamentError> {
        self.submit_result_with(
            round,
            match_number,
            reported,
            DuplicatePolicy::Reject,
            Local::now(),
        )
    }

    /// Record a result with an explicit duplicate policy and timestamp.
    ///
    /// Validation happens before any state changes, so a rejected submission
    /// leaves standings and results untouched.
    pub fn submit_result_with(
        &mut self,
        round: u32,
        match_number: u32,
        reported: &ReportedResult,
        policy: DuplicatePolicy,
        recorded_at: DateTime<Local>,
    ) -> Result<&MatchRecord, TournamentError> {
        let players = self.schedule.pairing(round, match_number)?;
        let outcome = self.resolve_outcome(round, match_number, players, reported)?;

        if let Some(previous) = self.results.get(round, match_number) {
            match policy {
                DuplicatePolicy::Reject => {
                    tracing::warn!(round, match_number, "duplicate result rejected");
                    return Err(TournamentError::DuplicateResult {
                        round,
                        match_number,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::info!(round, match_number, "overwriting previous result");
                    self.standings.revert(previous.players, &previous.outcome);
                }
            }
        }

        self.standings.apply(players, &outcome);
        tracing::info!(round, match_number, result = ?reported, "result recorded");

        Ok(self.results.store(MatchRecord {
            round,
            match_number,
            players,
            outcome,
            recorded_at,
        }))
    }

    /// Turn named winner/loser into ids, checking both belong to this match
    fn resolve_outcome(
        &self,
        round: u32,
        match_number: u32,
        (a, b): (ParticipantId, ParticipantId),
        reported: &ReportedResult,
    ) -> Result<Outcome, TournamentError> {
        match reported {
            ReportedResult::Draw => Ok(Outcome::Draw),
            ReportedResult::Win { winner, loser } => {
                let winner_id = self.roster.id(winner)?;
                let loser_id = self.roster.id(loser)?;

                let not_in_match = |name: &str| TournamentError::NotInMatch {
                    name: name.to_string(),
                    round,
                    match_number,
                };
                if winner_id != a && winner_id != b {
                    return Err(not_in_match(winner.as_str()));
                }
                if loser_id == winner_id || (loser_id != a && loser_id != b) {
                    return Err(not_in_match(loser.as_str()));
                }

                Ok(Outcome::Win {
                    winner: winner_id,
                    loser: loser_id,
                })
            }
        }
    }

    /// Raw result store, keyed by (round, match)
    pub fn records(&self) -> &ResultsStore {
        &self.results
    }

    /// All results, ordered by round then match
    pub fn results(&self) -> Vec<ResultEntry> {
        self.results
            .iter()
            .map(|record| record.to_entry(&self.roster))
            .collect()
    }

    pub fn result(&self, round: u32, match_number: u32) -> Option<ResultEntry> {
        self.results
            .get(round, match_number)
            .map(|record| record.to_entry(&self.roster))
    }

    /// Results recorded on a given calendar day
    pub fn results_on(&self, date: NaiveDate) -> Vec<ResultEntry> {
        self.results
            .on_date(date)
            .map(|record| record.to_entry(&self.roster))
            .collect()
    }

    /// Results recorded today, by the local clock
    pub fn today_results(&self) -> Vec<ResultEntry> {
        self.results_on(Local::now().date_naive())
    }

    /// Ranked table, highest points first
    pub fn standings(&self) -> Vec<StandingRow> {
        self.standings.table(&self.roster)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
