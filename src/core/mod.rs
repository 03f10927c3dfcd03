//! Core building blocks shared across the engine.
//!
//! Currently just the deterministic RNG. Puzzle data lives in `catalog`,
//! play-through state in `session`.

pub mod rng;

pub use rng::{GameRng, GameRngState};
