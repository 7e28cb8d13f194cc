//! # rust-wahoo
//!
//! A rules engine for Wahoo, a marble race on a star-shaped board, built
//! for running many automated games between heuristic strategies.
//!
//! ## Design Principles
//!
//! 1. **Geometry from two numbers**: the number of legs and the leg height
//!    determine every hole, branch point and marble count. Nothing about
//!    the six-leg board is hardcoded.
//!
//! 2. **Sparse, persistent positions**: only occupied holes are stored,
//!    in an `im::OrdMap`, so cloning a position is O(1).
//!
//! 3. **Injected collaborators**: the die, the move chooser and the log
//!    span are handed to each game. A game is a pure function of its
//!    configuration, its dice and its decisions.
//!
//! ## Modules
//!
//! - `core`: player ids, configuration, errors, dice
//! - `board`: hole identifiers, board topology, marble placement
//! - `rules`: reachability, path search, legal-move enumeration
//! - `game`: the decision interface and the turn engine
//! - `strategy`: built-in heuristic policies
//! - `sim`: batch simulation, tournaments, geometry sweeps
//!
//! ## Example
//!
//! ```
//! use rust_wahoo::{Game, GameConfig, GameRng, StrategyChain};
//!
//! let mut game = Game::seeded(GameConfig::default(), 7).unwrap();
//! let mut policy = StrategyChain::standard(GameRng::new(7).fork());
//! let outcome = game.run_bounded(&mut policy, 20_000).unwrap();
//! assert!(outcome.turns() > 0);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiceSource, EngineError, GameConfig, GameRng, GameRngState, InvariantViolation,
    PlayerId, PlayerMap, ScriptedDice,
};

pub use crate::board::{BoardState, HoleId, Marble, Topology};

pub use crate::rules::{Move, MoveEngine};

pub use crate::game::{
    policy_fn, Capture, DecisionPolicy, Game, GameContext, GameOutcome, TurnPhase, TurnRecord,
};

pub use crate::strategy::{PerPlayer, RandomPolicy, Strategy, StrategyChain};

pub use crate::sim::{run_set, sweep_geometry, tournament, SetReport, SimulationConfig};
