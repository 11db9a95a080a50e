//! Dice Arena
//!
//! A multiplayer six-sided dice game: players join a table, everyone rolls at
//! once, scores accumulate across rounds and a ranking is shown once the dice
//! settle.

pub mod arena;
