//! Round-robin tournament tracker
//!
//! This crate provides:
//! - Round-robin pairing generation (circle method)
//! - Result recording with duplicate protection
//! - Points standings (1 for a win, 0.5 for a draw)
//!
//! # Usage
//!
//! ```bash
//! # Print the pairings for a roster
//! cargo run -p tournament -- schedule roster.toml
//!
//! # Print a single round
//! cargo run -p tournament -- schedule roster.toml --round 3
//! ```

mod error;
mod pairing;
mod report;
mod results;
mod roster;
mod standings;
mod tournament;

pub use error::*;
pub use pairing::*;
pub use report::*;
pub use results::*;
pub use roster::*;
pub use standings::*;
pub use tournament::*;
