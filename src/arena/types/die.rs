//! Six-sided die faces
//!
//! A `DieFace` is always in `1..=6`, so anything holding one never needs to
//! re-check the range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The face of a six-sided die that landed on top
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// All faces in ascending order
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    pub fn new(value: u8) -> Option<DieFace> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(DieFace(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Cells of a 3x3 grid (numbered 1..=9, row-major) that carry a pip.
    pub fn pips(&self) -> &'static [u8] {
        match self.0 {
            1 => &[5],
            2 => &[1, 9],
            3 => &[1, 5, 9],
            4 => &[1, 3, 7, 9],
            5 => &[1, 3, 5, 7, 9],
            _ => &[1, 3, 4, 6, 7, 9],
        }
    }

    /// Unicode die face (U+2680..U+2685)
    pub fn glyph(&self) -> char {
        match self.0 {
            1 => '⚀',
            2 => '⚁',
            3 => '⚂',
            4 => '⚃',
            5 => '⚄',
            _ => '⚅',
        }
    }

    /// Render the face as three rows of pips, e.g. `["o . o", ". . .", "o . o"]`.
    pub fn pip_rows(&self) -> [String; 3] {
        let pips = self.pips();
        let cell = |n: u8| if pips.contains(&n) { "o" } else { "." };
        [
            format!("{} {} {}", cell(1), cell(2), cell(3)),
            format!("{} {} {}", cell(4), cell(5), cell(6)),
            format!("{} {} {}", cell(7), cell(8), cell(9)),
        ]
    }

    pub fn describe(&self) -> String {
        format!("Die shows {}", self.0)
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for DieFace {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieFace::new(value).ok_or_else(|| format!("Invalid die face: {}. Valid: 1-6", value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl From<DieFace> for u32 {
    fn from(face: DieFace) -> u32 {
        face.0 as u32
    }
}
