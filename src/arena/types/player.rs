//! Player records

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DieFace;

/// Sequential player id, starting at 1 and never reused within a table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A seat at the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    pub display_name: String,
    total_score: u32,
    last_roll: Option<DieFace>,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            total_score: 0,
            last_roll: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn last_roll(&self) -> Option<DieFace> {
        self.last_roll
    }

    /// Record a roll: it becomes the last roll and is added to the total.
    pub fn add_score(&mut self, value: DieFace) {
        self.last_roll = Some(value);
        self.total_score += u32::from(value);
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    /// Zero the running total. The last roll is kept.
    pub fn reset_score(&mut self) {
        self.total_score = 0;
    }

    pub fn describe(&self) -> String {
        format!("{} | Total Score: {}", self.display_name, self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> DieFace {
        DieFace::new(v).unwrap()
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId(1), "Player 1");
        assert_eq!(player.total_score(), 0);
        assert_eq!(player.last_roll(), None);
        assert_eq!(player.id(), PlayerId(1));
    }

    #[test]
    fn test_add_score_accumulates() {
        let mut player = Player::new(PlayerId(1), "Player 1");
        for (before, v) in [(0, 3), (3, 6), (9, 1)] {
            assert_eq!(player.total_score(), before);
            player.add_score(face(v));
            assert_eq!(player.total_score(), before + v as u32);
            assert_eq!(player.last_roll(), Some(face(v)));
        }
    }

    #[test]
    fn test_reset_score_keeps_last_roll() {
        let mut player = Player::new(PlayerId(2), "Player 2");
        player.add_score(face(5));
        player.reset_score();
        assert_eq!(player.total_score(), 0);
        assert_eq!(player.last_roll(), Some(face(5)));
    }

    #[test]
    fn test_rename_allows_empty() {
        let mut player = Player::new(PlayerId(1), "Player 1");
        player.rename("");
        assert_eq!(player.display_name, "");
    }

    #[test]
    fn test_describe() {
        let mut player = Player::new(PlayerId(1), "Ana");
        player.add_score(face(4));
        assert_eq!(player.describe(), "Ana | Total Score: 4");
    }
}
