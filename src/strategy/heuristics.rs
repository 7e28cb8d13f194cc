//! Single-rule move choosers.
//!
//! Each heuristic either recognises a move it likes or passes (`None`),
//! leaving the decision to the next link of a [`StrategyChain`].
//!
//! [`StrategyChain`]: super::StrategyChain

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, HoleId};
use crate::core::{GameRng, PlayerId};
use crate::game::DecisionPolicy;
use crate::rules::Move;

/// A deterministic heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Only one move, or every move leaves the bench: take the first.
    ObviousMove,
    /// Leave `Yolo` for the exit just short of the player's endzone.
    SmartLeaveYolo,
    /// Step into the endzone from outside it.
    EnterEndzone,
    /// Land on an opposing marble.
    Capture,
    /// Jump into `Yolo`.
    EnterYolo,
    /// Advance a marble already inside the endzone.
    ScootEndzone,
    /// Bring a marble onto the track.
    LeaveBench,
    /// Always the first legal move.
    FirstMove,
}

impl Strategy {
    /// Heuristics shuffled when building a randomized chain.
    pub const SHUFFLE_POOL: [Strategy; 6] = [
        Strategy::SmartLeaveYolo,
        Strategy::EnterEndzone,
        Strategy::Capture,
        Strategy::EnterYolo,
        Strategy::ScootEndzone,
        Strategy::LeaveBench,
    ];

    /// Short label for logs and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::ObviousMove => "obvious",
            Strategy::SmartLeaveYolo => "smart-leave-yolo",
            Strategy::EnterEndzone => "enter-endzone",
            Strategy::Capture => "capture",
            Strategy::EnterYolo => "enter-yolo",
            Strategy::ScootEndzone => "scoot-endzone",
            Strategy::LeaveBench => "leave-bench",
            Strategy::FirstMove => "first",
        }
    }

    /// Apply the heuristic to a legal move set.
    #[must_use]
    pub fn pick(self, player: PlayerId, moves: &[Move], board: &BoardState) -> Option<Move> {
        match self {
            Strategy::ObviousMove => {
                if moves.len() == 1 || moves.iter().all(|m| m.start.is_bench()) {
                    moves.first().copied()
                } else {
                    None
                }
            }
            Strategy::SmartLeaveYolo => {
                let target = HoleId::Normal(board.topology().last_yolo_exit_for(player));
                first_where(moves, |m| m.start.is_yolo() && m.finish == target)
            }
            Strategy::EnterEndzone => first_where(moves, |m| m.finish.is_endzone() && !m.start.is_endzone()),
            Strategy::Capture => first_where(moves, |m| board.is_occupied(m.finish)),
            Strategy::EnterYolo => first_where(moves, |m| m.finish.is_yolo()),
            Strategy::ScootEndzone => first_where(moves, |m| m.start.is_endzone()),
            Strategy::LeaveBench => first_where(moves, |m| m.start.is_bench()),
            Strategy::FirstMove => moves.first().copied(),
        }
    }
}

fn first_where(moves: &[Move], pred: impl Fn(&Move) -> bool) -> Option<Move> {
    moves.iter().copied().find(|m| pred(m))
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl DecisionPolicy for Strategy {
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        _roll: u8,
        board: &BoardState,
    ) -> Option<Move> {
        self.pick(player, moves, board)
    }

    fn name(&self) -> &str {
        self.label()
    }
}

/// Uniform choice over the legal moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl DecisionPolicy for RandomPolicy {
    fn choose(
        &mut self,
        _player: PlayerId,
        moves: &[Move],
        _roll: u8,
        _board: &BoardState,
    ) -> Option<Move> {
        self.rng.choose(moves).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
