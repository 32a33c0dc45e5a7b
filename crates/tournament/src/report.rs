//! Plain-text reports for terminals and logs

use crate::standings::StandingRow;
use crate::tournament::RoundView;

/// Render the ranked standings table
pub fn standings_report(name: &str, rows: &[StandingRow]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Standings: {} ===\n\n", name));
    report.push_str(&format!(
        "{:>4}  {:<28} {:<10} {:>6} {:>4} {:>4} {:>4} {:>4}\n",
        "#", "Participant", "Class", "Pts", "Pld", "W", "D", "L"
    ));
    report.push_str(&"-".repeat(72));
    report.push('\n');

    for row in rows {
        report.push_str(&format!(
            "{:>4}  {:<28} {:<10} {:>6.1} {:>4} {:>4} {:>4} {:>4}\n",
            row.rank,
            row.participant,
            row.class,
            row.points,
            row.matches_played,
            row.wins,
            row.draws,
            row.losses
        ));
    }

    report
}

/// Render the pairings of the given rounds
pub fn schedule_report(rounds: &[RoundView]) -> String {
    let mut report = String::new();
    for round in rounds {
        report.push_str(&format!("--- Round {} ---\n", round.round));
        for m in &round.matches {
            let status = if m.played { " (played)" } else { "" };
            report.push_str(&format!(
                "{:>3}. {} vs {}{}\n",
                m.match_number, m.participants[0], m.participants[1], status
            ));
        }
        report.push('\n');
    }
    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
