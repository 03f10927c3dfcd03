//! The mutable play-through: session state, configuration, outcomes.

pub mod builder;
pub mod state;
pub mod status;

pub use builder::{SessionBuilder, DEFAULT_LIVES};
pub use state::Session;
pub use status::{GameStatus, GuessOutcome};
