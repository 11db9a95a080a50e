//! Collaborator seams
//!
//! The table never draws, plays audio or asks questions itself. Front-ends
//! plug in through these traits; the terminal versions live in
//! [`terminal`](crate::arena::terminal).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{DieFace, Player, PlayerId, Ranking, RankingEntry, RoundError};

/// A spin animation. Resolves once the die shows its final face.
pub type SpinFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Everything the players see
pub trait Surface {
    /// Redraw the player slots. `can_add` controls the "add player" affordance.
    fn render_slots(&mut self, players: &[Player], can_add: bool);

    /// Push current totals into the slots
    fn show_scores(&mut self, players: &[Player]);

    /// Announce the round leader and the face they rolled last
    fn show_winner(&mut self, winner: &RankingEntry, last_roll: Option<DieFace>);

    fn show_ranking(&mut self, ranking: &Ranking);

    fn hide_ranking(&mut self);

    /// Non-fatal notice such as "no players to roll"
    fn notice(&mut self, error: &RoundError);
}

/// Spins a die so that it ends on `face`
pub trait Animator {
    fn spin(&self, player: PlayerId, face: DieFace, duration: Duration) -> SpinFuture;
}

/// Roll sound effect, triggered once per rolled player
pub trait SoundCue {
    fn play_roll(&mut self, player: PlayerId);
}

/// Yes/no question to the user
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Sound cue that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundCue for Silent {
    fn play_roll(&mut self, _player: PlayerId) {}
}

/// Animator that finishes immediately, for headless play
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantSpin;

impl Animator for InstantSpin {
    fn spin(&self, _player: PlayerId, _face: DieFace, _duration: Duration) -> SpinFuture {
        Box::pin(async {})
    }
}

/// Confirmation with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct AlwaysAnswer(pub bool);

impl Confirm for AlwaysAnswer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}
