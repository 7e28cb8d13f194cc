//! Core engine types: players, RNG and dice, configuration, errors.
//!
//! Everything here is independent of board geometry; the board, rules and
//! turn engine build on top of it.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, EngineError, InvariantViolation, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice, DIE_FACES};
