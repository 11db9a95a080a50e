//! Type definitions for the Dice Arena game
//!
//! This module is organized into submodules:
//! - `die` - Die faces, pip layout and glyphs
//! - `player` - Player records and ids
//! - `rolls` - Roll sources (random, seeded, scripted)
//! - `round` - Round phases, the round state machine and rankings
//! - `error` - Game guard errors surfaced as notices
//! - `settings` - Game settings and persistence

pub mod die;
pub mod error;
pub mod player;
pub mod rolls;
pub mod round;
pub mod settings;

// Re-export all public types for convenient access
pub use die::*;
pub use error::*;
pub use player::*;
pub use rolls::*;
pub use round::*;
pub use settings::*;
