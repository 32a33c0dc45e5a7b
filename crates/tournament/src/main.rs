//! Tournament CLI
//!
//! Inspect a roster's participants, pairings and standings.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tournament::{schedule_report, standings_report, Roster, Tournament};

fn print_usage() {
    println!("Round-Robin Tournament");
    println!();
    println!("Usage:");
    println!("  tournament participants <roster.toml> [--json]");
    println!("  tournament schedule <roster.toml> [--round N] [--json]");
    println!("  tournament standings <roster.toml> [--json]");
    println!();
    println!("Roster format (TOML):");
    println!("  name = \"Club Championship\"");
    println!("  [[participants]]");
    println!("  name = \"Alice\"");
    println!("  class = \"MP-1\"");
    println!();
    println!("Examples:");
    println!("  tournament schedule roster.toml --round 3");
    println!("  tournament standings roster.toml --json");
}

/// Options shared by every subcommand
struct Options {
    json: bool,
    round: Option<u32>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        json: false,
        round: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" | "-j" => options.json = true,
            "--round" | "-r" => {
                let value = args.get(i + 1).context("--round needs a value")?;
                options.round = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid round number: {}", value))?,
                );
                i += 1;
            }
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    Ok(options)
}

fn load(args: &[String]) -> Result<(Tournament, Options)> {
    let path = args.first().context("missing roster file")?;
    let roster = Roster::load(Path::new(path))?;
    let tournament = Tournament::new(roster)
        .with_context(|| format!("cannot build a schedule from {}", path))?;
    let options = parse_options(&args[1..])?;
    Ok((tournament, options))
}

fn show_participants(args: &[String]) -> Result<()> {
    let (tournament, options) = load(args)?;
    let participants = tournament.participants();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&participants)?);
        return Ok(());
    }

    println!("=== {} ===", tournament.name());
    println!("{:<30} {:<10}", "Participant", "Class");
    println!("{}", "-".repeat(41));
    for p in participants {
        println!("{:<30} {:<10}", p.name, p.class);
    }
    Ok(())
}

fn show_schedule(args: &[String]) -> Result<()> {
    let (tournament, options) = load(args)?;
    let mut rounds = tournament.schedule();

    if let Some(round) = options.round {
        rounds.retain(|r| r.round == round);
        if rounds.is_empty() {
            bail!(
                "round {} does not exist (tournament has {} rounds)",
                round,
                tournament.num_rounds()
            );
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rounds)?);
    } else {
        print!("{}", schedule_report(&rounds));
    }
    Ok(())
}

fn show_standings(args: &[String]) -> Result<()> {
    let (tournament, options) = load(args)?;
    let rows = tournament.standings();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", standings_report(tournament.name(), &rows));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "participants" | "players" => show_participants(&args[2..]),
        "schedule" | "rounds" => show_schedule(&args[2..]),
        "standings" | "classification" => show_standings(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(2);
        }
    }
}
