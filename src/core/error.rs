//! Error types for configuration and engine failures.
//!
//! `ConfigError` is returned before any game exists. `EngineError` means
//! the running game is broken (an engine bug or a decision policy that
//! returned a move it was never offered) and must be abandoned.

use crate::board::HoleId;
use crate::core::PlayerId;
use crate::rules::Move;

/// Degenerate board or roster parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("leg height must be at least 2, got {0}")]
    LegHeightTooSmall(u8),

    #[error("board needs at least one leg")]
    NoLegs,

    #[error("game needs at least one player")]
    NoPlayers,

    #[error("{players} players cannot sit at a board with {legs} legs")]
    TooManyPlayers { players: usize, legs: u8 },

    #[error("first player {first} is not seated (only {players} players)")]
    FirstPlayerNotSeated { first: PlayerId, players: usize },

    #[error("board has {legs} legs of height {height} and {players} players, which does not match the game configuration")]
    BoardMismatch { legs: u8, height: u8, players: usize },
}

/// A broken invariant of the board or of a chosen move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{player} owns {found} marbles, expected {expected}")]
    MarbleCount {
        player: PlayerId,
        found: usize,
        expected: usize,
    },

    #[error("{player} would capture their own marble at {hole}")]
    SelfCapture { player: PlayerId, hole: HoleId },

    #[error("{player} chose {chosen}, which is not among the legal moves")]
    MoveNotLegal { player: PlayerId, chosen: Move },

    #[error("no marble at start hole {0}")]
    EmptyStart(HoleId),

    #[error("{player} cannot move {owner}'s marble at {hole}")]
    ForeignMarble {
        player: PlayerId,
        owner: PlayerId,
        hole: HoleId,
    },

    #[error("hole {0} is already occupied")]
    HoleOccupied(HoleId),

    #[error("{0} has no empty bench slot for a captured marble")]
    BenchFull(PlayerId),

    #[error("hole {0} does not exist on this board")]
    NoSuchHole(HoleId),

    #[error("{owner}'s marble sits in private hole {hole}")]
    ForeignPrivateHole { hole: HoleId, owner: PlayerId },
}

/// Fatal engine failure for a running game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("{finish} is not reachable from {start} with a roll of {roll}")]
    UnreachableMove {
        start: HoleId,
        finish: HoleId,
        roll: u8,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("game is already over, {winner} won")]
    GameFinished { winner: PlayerId },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
