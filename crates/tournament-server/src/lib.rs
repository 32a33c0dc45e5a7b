//! HTTP front end for a round-robin tournament.

pub mod api;
pub mod config;
pub mod logging;
