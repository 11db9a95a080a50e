//! Game guard errors
//!
//! None of these are fatal: the table shows them as notices and play goes on.

use std::fmt;

use super::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// `roll_all` with an empty roster
    NoPlayers,
    /// `add_player` with a full roster
    RosterFull { max: usize },
    /// Roll, remove or reset while dice are still spinning
    RollInProgress,
    UnknownPlayer(PlayerId),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::NoPlayers => write!(f, "No players to roll. Add a player first"),
            RoundError::RosterFull { max } => {
                write!(f, "Maximum players reached ({} players)", max)
            }
            RoundError::RollInProgress => {
                write!(f, "A roll is in progress. Wait for the dice to settle")
            }
            RoundError::UnknownPlayer(id) => write!(f, "Unknown player {}", id),
        }
    }
}

impl std::error::Error for RoundError {}
