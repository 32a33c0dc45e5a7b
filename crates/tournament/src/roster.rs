//! Participant roster
//!
//! The roster is fixed for the lifetime of a tournament. Names are interned
//! into [`ParticipantId`]s once, at the boundary, so the rest of the crate
//! never looks participants up by string.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::error::TournamentError;

/// Index of a participant in roster order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub usize);

/// A single entrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique display name
    pub name: String,
    /// Class or category label (e.g. "MP-2")
    pub class: String,
}

impl Participant {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
        }
    }
}

/// Failure to load a roster file
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] TournamentError),
}

/// On-disk roster layout
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default = "default_name")]
    name: String,
    participants: Vec<Participant>,
}

fn default_name() -> String {
    "Round Robin".to_string()
}

/// Ordered, name-indexed list of participants
#[derive(Debug, Clone)]
pub struct Roster {
    name: String,
    participants: Vec<Participant>,
    by_name: HashMap<String, ParticipantId>,
}

impl Roster {
    /// Build a roster, rejecting repeated names
    pub fn new(name: &str, participants: Vec<Participant>) -> Result<Self, TournamentError> {
        let mut by_name = HashMap::with_capacity(participants.len());
        for (idx, participant) in participants.iter().enumerate() {
            if by_name
                .insert(participant.name.clone(), ParticipantId(idx))
                .is_some()
            {
                return Err(TournamentError::DuplicateParticipant(
                    participant.name.clone(),
                ));
            }
        }

        Ok(Self {
            name: name.to_string(),
            participants,
            by_name,
        })
    }

    /// Parse a roster from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(contents)?;
        Ok(Self::new(&file.name, file.participants)?)
    }

    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Resolve a name to its id
    pub fn id(&self, name: &str) -> Result<ParticipantId, TournamentError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| TournamentError::UnknownParticipant(name.to_string()))
    }

    /// Panics if `id` did not come from this roster
    pub fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.0]
    }

    /// Ids in roster order
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.participants.len()).map(ParticipantId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
