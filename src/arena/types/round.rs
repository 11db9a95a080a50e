//! Round state machine
//!
//! `RoundState` owns the roster and tracks the round lifecycle:
//!
//! ```text
//! Idle --roll_all--> Rolling --(every spin done | deadline)--> Settled
//! Settled --roll_all--> Rolling
//! ```
//!
//! While Rolling, rolling again, removing players and resetting scores are
//! refused. The state never talks to a display or a clock itself; the
//! [`Table`](crate::arena::Table) drives it and wires the collaborators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::{DieFace, GameSettings, Player, PlayerId, RollSource, RoundError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No roll has happened yet
    #[default]
    Idle,
    /// Dice are spinning; waiting for completion signals
    Rolling,
    /// Results are in and the ranking is showing
    Settled,
}

/// One die to animate: the player and the face it has to land on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollOrder {
    pub player: PlayerId,
    pub face: DieFace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: PlayerId,
    pub name: String,
    pub total_score: u32,
    pub last_roll: Option<DieFace>,
}

impl RankingEntry {
    fn from_player(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.display_name.clone(),
            total_score: player.total_score(),
            last_roll: player.last_roll(),
        }
    }
}

/// Players ordered by total score, highest first. Ties keep seating order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub round: u32,
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn from_players(round: u32, players: &[Player]) -> Self {
        let mut entries: Vec<RankingEntry> = players.iter().map(RankingEntry::from_player).collect();
        // Vec::sort_by is stable, which is what keeps ties in seating order.
        entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        Self { round, entries }
    }

    pub fn winner(&self) -> Option<&RankingEntry> {
        self.entries.first()
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RoundState<S: RollSource> {
    players: Vec<Player>,
    next_id: u32,
    phase: RoundPhase,
    pending: BTreeSet<PlayerId>,
    rounds_played: u32,
    max_players: usize,
    name_prefix: String,
    rolls: S,
}

impl<S: RollSource> RoundState<S> {
    pub fn new(settings: &GameSettings, rolls: S) -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
            phase: RoundPhase::Idle,
            pending: BTreeSet::new(),
            rounds_played: 0,
            max_players: settings.max_players.min(super::MAX_PLAYERS),
            name_prefix: settings.name_prefix.clone(),
            rolls,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Whether another seat can be added
    pub fn can_add(&self) -> bool {
        self.players.len() < self.max_players
    }

    /// Spins that have not reported completion yet
    pub fn pending(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.pending.iter().copied()
    }

    pub fn add_player(&mut self) -> Result<PlayerId, RoundError> {
        if !self.can_add() {
            return Err(RoundError::RosterFull {
                max: self.max_players,
            });
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        let name = format!("{} {}", self.name_prefix, id.0);
        info!("Added {} ({})", name, id);
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, RoundError> {
        if self.phase == RoundPhase::Rolling {
            return Err(RoundError::RollInProgress);
        }

        let index = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(RoundError::UnknownPlayer(id))?;
        let removed = self.players.remove(index);
        info!("Removed {} ({})", removed.display_name, id);
        Ok(removed)
    }

    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), RoundError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(RoundError::UnknownPlayer(id))?;
        player.rename(name);
        Ok(())
    }

    /// Draw a face for every player, add it to their score and enter Rolling.
    ///
    /// Returns one order per player, in seating order, for the caller to
    /// animate. Every rolled player stays pending until
    /// [`animation_complete`](Self::animation_complete) is called for it.
    pub fn roll_all(&mut self) -> Result<Vec<RollOrder>, RoundError> {
        if self.phase == RoundPhase::Rolling {
            return Err(RoundError::RollInProgress);
        }
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        let mut orders = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let face = self.rolls.draw();
            player.add_score(face);
            orders.push(RollOrder {
                player: player.id(),
                face,
            });
        }

        self.pending = orders.iter().map(|o| o.player).collect();
        self.phase = RoundPhase::Rolling;
        info!(
            "Round {} rolling: {:?}",
            self.rounds_played + 1,
            orders.iter().map(|o| o.face.value()).collect::<Vec<_>>()
        );
        Ok(orders)
    }

    /// Mark one spin as finished. Settles the round once the last pending
    /// spin reports in and returns the ranking; otherwise returns `None`.
    pub fn animation_complete(&mut self, id: PlayerId) -> Option<Ranking> {
        if self.phase != RoundPhase::Rolling || !self.pending.remove(&id) {
            debug!("Ignoring completion signal for {}", id);
            return None;
        }
        if self.pending.is_empty() {
            Some(self.settle())
        } else {
            None
        }
    }

    /// Enter Settled and rank the players.
    pub fn settle(&mut self) -> Ranking {
        self.pending.clear();
        self.phase = RoundPhase::Settled;
        self.rounds_played += 1;
        let ranking = Ranking::from_players(self.rounds_played, &self.players);
        if let Some(winner) = ranking.winner() {
            info!(
                "Round {} settled, leader {} with {}",
                ranking.round, winner.name, winner.total_score
            );
        }
        ranking
    }

    /// Zero every total score. `last_roll` is untouched.
    pub fn reset_scores(&mut self) -> Result<(), RoundError> {
        if self.phase == RoundPhase::Rolling {
            return Err(RoundError::RollInProgress);
        }
        for player in &mut self.players {
            player.reset_score();
        }
        info!("Scores reset for {} players", self.players.len());
        Ok(())
    }
}
