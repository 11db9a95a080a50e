//! Roll sources
//!
//! The round state draws one face per player through a `RollSource`, so the
//! same game code runs on a thread RNG, a seeded RNG or a fixed script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DieFace;

pub trait RollSource {
    fn draw(&mut self) -> DieFace;
}

/// Uniform draws over 1..=6
#[derive(Debug, Clone)]
pub struct RandomRolls<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRolls<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible draws for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RollSource for RandomRolls<R> {
    fn draw(&mut self) -> DieFace {
        let value = self.rng.gen_range(DieFace::MIN..=DieFace::MAX);
        DieFace::new(value).unwrap_or(DieFace::ALL[0])
    }
}

/// Replays a fixed sequence of faces, starting over once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    faces: Vec<DieFace>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(faces: Vec<DieFace>) -> Result<Self, String> {
        if faces.is_empty() {
            return Err("Scripted rolls need at least one face".to_string());
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Build from raw values, e.g. `&[6, 3]`.
    pub fn from_values(values: &[u8]) -> Result<Self, String> {
        let faces = values
            .iter()
            .map(|v| DieFace::try_from(*v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }
}

impl RollSource for ScriptedRolls {
    fn draw(&mut self) -> DieFace {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
