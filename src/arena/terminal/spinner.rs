//! Terminal spin animation
//!
//! Each player's spin runs as its own task. All spins share one status line
//! that is redrawn every frame, e.g. `#1 ⚂   #2 ⚅`. When the last die lands
//! the line is finished with a newline.

use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

use crate::arena::{Animator, DieFace, PlayerId, SpinFuture};

/// Shared status line for all spinning dice
pub struct SpinBoard {
    faces: BTreeMap<PlayerId, char>,
    spinning: BTreeSet<PlayerId>,
    out: Box<dyn Write + Send>,
}

impl SpinBoard {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            faces: BTreeMap::new(),
            spinning: BTreeSet::new(),
            out,
        }
    }

    /// The current status line without the carriage return
    pub fn line(&self) -> String {
        self.faces
            .iter()
            .map(|(id, glyph)| format!("{} {}", id, glyph))
            .collect::<Vec<_>>()
            .join("   ")
    }

    fn redraw(&mut self) {
        let line = self.line();
        let _ = write!(self.out, "\r{}", line);
        let _ = self.out.flush();
    }

    pub fn begin(&mut self, player: PlayerId) {
        self.spinning.insert(player);
        self.faces.insert(player, random_glyph());
        self.redraw();
    }

    pub fn show(&mut self, player: PlayerId, glyph: char) {
        self.faces.insert(player, glyph);
        self.redraw();
    }

    /// Put the final face down. The last die to land ends the line.
    pub fn land(&mut self, player: PlayerId, face: DieFace) {
        self.faces.insert(player, face.glyph());
        self.spinning.remove(&player);
        self.redraw();
        if self.spinning.is_empty() {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.faces.clear();
        }
    }

    pub fn is_idle(&self) -> bool {
        self.spinning.is_empty()
    }
}

fn random_glyph() -> char {
    let index = rand::thread_rng().gen_range(0..DieFace::ALL.len());
    DieFace::ALL[index].glyph()
}

// Roughly 30 years, for spin durations too large to add to an Instant.
fn far_future(now: Instant) -> Instant {
    now + Duration::from_secs(86400 * 365 * 30)
}

fn lock(board: &Mutex<SpinBoard>) -> MutexGuard<'_, SpinBoard> {
    board.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Clone)]
pub struct TerminalSpinner {
    board: Arc<Mutex<SpinBoard>>,
    frame: Duration,
}

impl TerminalSpinner {
    pub fn new(out: Box<dyn Write + Send>, frame: Duration) -> Self {
        Self {
            board: Arc::new(Mutex::new(SpinBoard::new(out))),
            frame,
        }
    }

    pub fn stdout(frame: Duration) -> Self {
        Self::new(Box::new(std::io::stdout()), frame)
    }

    pub fn board(&self) -> Arc<Mutex<SpinBoard>> {
        Arc::clone(&self.board)
    }
}

impl Animator for TerminalSpinner {
    fn spin(&self, player: PlayerId, face: DieFace, duration: Duration) -> SpinFuture {
        let board = Arc::clone(&self.board);
        let frame = self.frame;

        Box::pin(async move {
            let now = Instant::now();
            let deadline = now.checked_add(duration).unwrap_or_else(|| far_future(now));
            let mut ticker = tokio::time::interval(frame);
            lock(&board).begin(player);

            // The die lands at the deadline even when a frame would end later.
            loop {
                tokio::select! {
                    biased;
                    _ = tokio::time::sleep_until(deadline) => break,
                    _ = ticker.tick() => {
                        let glyph = random_glyph();
                        lock(&board).show(player, glyph);
                    }
                }
            }

            lock(&board).land(player, face);
        })
    }
}
