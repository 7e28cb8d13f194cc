//! Movement and legality rules.
//!
//! - [`movement`]: occupancy-blind reachability and path search over the
//!   board graph.
//! - [`engine`]: [`MoveEngine`], which adds obstruction, the bench and yolo
//!   roll rules, and legal-move enumeration for a concrete position.

pub mod engine;
pub mod movement;

pub use engine::MoveEngine;
pub use movement::{max_path_hops, path, reachable_holes, remote_reachable_holes, Move, Reachable};

/// Rolls that let a marble leave the bench.
pub const BENCH_EXIT_ROLLS: [u8; 2] = [1, 6];

/// The only roll that lets a marble leave `Yolo`.
pub const YOLO_EXIT_ROLL: u8 = 1;

/// Rolling this grants the same player another turn.
pub const BONUS_TURN_ROLL: u8 = 6;
