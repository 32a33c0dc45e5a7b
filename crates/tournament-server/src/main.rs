//! Round-robin tournament server.
//!
//! Loads a roster at startup, fixes the schedule, and serves pairings,
//! results and standings over HTTP. State is in memory only.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Error};
use pico_args::Arguments;
use tournament::{Roster, Tournament};
use tournament_server::{api, config::ServerConfig, logging};

const HELP: &str = "\
Serve a round-robin tournament over HTTP

USAGE:
  tournament-server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env TOURNAMENT_BIND or 127.0.0.1:8080]
  --roster     PATH        Roster TOML file            [default: env TOURNAMENT_ROSTER or roster.toml]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  TOURNAMENT_BIND          Server bind address (e.g., 0.0.0.0:8080)
  TOURNAMENT_ROSTER        Roster file path
  RUST_LOG                 Log filter (e.g., debug,tower_http=info)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let bind: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let roster: Option<PathBuf> = pargs.opt_value_from_str("--roster")?;

    logging::init();

    let config = ServerConfig::from_env(bind, roster)?;

    tracing::info!("Loading roster from {}", config.roster_path.display());
    let roster = Roster::load(&config.roster_path)?;
    let tournament = Tournament::new(roster)
        .with_context(|| format!("cannot schedule {}", config.roster_path.display()))?;

    tracing::info!(
        "Tournament '{}' ready: {} participants, {} rounds",
        tournament.name(),
        tournament.roster().len(),
        tournament.num_rounds()
    );

    let app = api::create_router(api::AppState::new(tournament));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    tracing::info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
