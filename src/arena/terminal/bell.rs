use std::io::Write;

use crate::arena::{PlayerId, SoundCue};

/// Rings the terminal bell for every rolled die
pub struct TerminalBell<W: Write> {
    enabled: bool,
    out: W,
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(enabled, std::io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundCue for TerminalBell<W> {
    fn play_roll(&mut self, _player: PlayerId) {
        if !self.enabled {
            return;
        }
        let _ = self.out.write_all(b"\x07");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_rings_once_per_roll() {
        let mut bell = TerminalBell::new(true, Vec::new());
        bell.play_roll(PlayerId(1));
        bell.play_roll(PlayerId(2));
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn test_disabled_bell_is_quiet() {
        let mut bell = TerminalBell::new(false, Vec::new());
        bell.play_roll(PlayerId(1));
        assert!(bell.into_inner().is_empty());
    }
}
