//! The game table
//!
//! `Table` drives a [`RoundState`] and talks to the front-end through the
//! collaborator traits. Rolling fans out one spin task per player and settles
//! once every spin has signalled completion. The settle delay from the
//! settings acts as a deadline in case a spin never reports back.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{
    Animator, Confirm, GameSettings, Player, PlayerId, Ranking, RollSource, RoundError,
    RoundPhase, RoundState, SoundCue, Surface,
};

pub const RESET_QUESTION: &str = "Reset all scores?";

/// The front-end pieces a table needs
pub struct Collaborators {
    pub surface: Box<dyn Surface>,
    pub animator: Box<dyn Animator>,
    pub sound: Box<dyn SoundCue>,
    pub confirm: Box<dyn Confirm>,
}

pub struct Table<S: RollSource> {
    state: RoundState<S>,
    settings: GameSettings,
    surface: Box<dyn Surface>,
    animator: Box<dyn Animator>,
    sound: Box<dyn SoundCue>,
    confirm: Box<dyn Confirm>,
    /// Ranking currently on display, if any
    ranking: Option<Ranking>,
}

impl<S: RollSource> Table<S> {
    pub fn new(settings: GameSettings, rolls: S, collaborators: Collaborators) -> Self {
        let Collaborators {
            surface,
            animator,
            sound,
            confirm,
        } = collaborators;

        Self {
            state: RoundState::new(&settings, rolls),
            settings,
            surface,
            animator,
            sound,
            confirm,
            ranking: None,
        }
    }

    pub fn state(&self) -> &RoundState<S> {
        &self.state
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Redraw the player slots and the add affordance
    pub fn render(&mut self) {
        self.surface
            .render_slots(self.state.players(), self.state.can_add());
    }

    fn report<T>(&mut self, result: Result<T, RoundError>) -> Result<T, RoundError> {
        if let Err(e) = &result {
            debug!("Notice: {}", e);
            self.surface.notice(e);
        }
        result
    }

    pub fn add_player(&mut self) -> Result<PlayerId, RoundError> {
        let result = self.state.add_player();
        let id = self.report(result)?;
        self.render();
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), RoundError> {
        let result = self.state.remove_player(id);
        self.report(result)?;
        self.render();
        Ok(())
    }

    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), RoundError> {
        let result = self.state.rename_player(id, name);
        self.report(result)?;
        self.render();
        Ok(())
    }

    /// Roll every player's die, wait for the spins and show the ranking.
    pub async fn roll_all(&mut self) -> Result<Ranking, RoundError> {
        let result = self.state.roll_all();
        let orders = self.report(result)?;

        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<PlayerId>();
        let duration = self.settings.animation_duration();
        for order in &orders {
            self.sound.play_roll(order.player);
            let spin = self.animator.spin(order.player, order.face, duration);
            let done_tx = done_tx.clone();
            let player = order.player;
            tokio::spawn(async move {
                spin.await;
                let _ = done_tx.send(player);
            });
        }
        drop(done_tx);

        let deadline = tokio::time::sleep(self.settings.settle_delay());
        tokio::pin!(deadline);

        let ranking = loop {
            tokio::select! {
                done = done_rx.recv() => match done {
                    Some(player) => {
                        if let Some(ranking) = self.state.animation_complete(player) {
                            break ranking;
                        }
                    }
                    None => {
                        warn!("Spin tasks ended before every die reported");
                        break self.state.settle();
                    }
                },
                _ = &mut deadline => {
                    let late: Vec<PlayerId> = self.state.pending().collect();
                    warn!(
                        "Settle deadline of {:?} passed with spins pending for {:?}",
                        self.settings.settle_delay(),
                        late
                    );
                    break self.state.settle();
                }
            }
        };

        self.present(&ranking);
        Ok(ranking)
    }

    fn present(&mut self, ranking: &Ranking) {
        self.surface.show_scores(self.state.players());

        for player in self.state.players() {
            debug!("{}", player.describe());
        }
        if let Some(winner) = ranking.winner() {
            if let Some(face) = winner.last_roll {
                debug!("{}", face.describe());
            }
            self.surface.show_winner(winner, winner.last_roll);
        }
        self.surface.show_ranking(ranking);
        self.ranking = Some(ranking.clone());
    }

    /// Ask for confirmation and zero every score. Returns whether scores were
    /// reset. An empty table is left alone without asking.
    pub fn reset_round(&mut self) -> Result<bool, RoundError> {
        if self.state.players().is_empty() {
            return Ok(false);
        }
        if self.state.phase() == RoundPhase::Rolling {
            return self.report(Err(RoundError::RollInProgress));
        }
        if !self.confirm.confirm(RESET_QUESTION) {
            debug!("Reset declined");
            return Ok(false);
        }

        let result = self.state.reset_scores();
        self.report(result)?;
        self.surface.show_scores(self.state.players());
        self.surface.hide_ranking();
        self.ranking = None;
        Ok(true)
    }
}
