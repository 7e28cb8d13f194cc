//! Move legality against a concrete board position.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::movement::{self, Move, Reachable};
use super::{BENCH_EXIT_ROLLS, YOLO_EXIT_ROLL};
use crate::board::{BoardState, HoleId, Topology};
use crate::core::{EngineError, InvariantViolation, PlayerId, Result};

/// Legality queries over a borrowed position.
///
/// Geometric queries (`reachable_holes`, `remote_reachable_holes`, `path`)
/// ignore occupancy; `obstructed_path` and `legal_moves` take it into
/// account.
#[derive(Clone, Copy, Debug)]
pub struct MoveEngine<'a> {
    board: &'a BoardState,
}

impl<'a> MoveEngine<'a> {
    #[must_use]
    pub fn new(board: &'a BoardState) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn topology(&self) -> &'a Topology {
        self.board.topology()
    }

    pub fn reachable_holes(&self, start: HoleId, player: PlayerId, roll: u8) -> Reachable {
        movement::reachable_holes(self.topology(), start, player, roll)
    }

    pub fn remote_reachable_holes(&self, start: HoleId, roll: u8, player: PlayerId) -> Reachable {
        movement::remote_reachable_holes(self.topology(), start, roll, player)
    }

    pub fn path(
        &self,
        start: HoleId,
        finish: HoleId,
        player: PlayerId,
        roll: u8,
    ) -> Option<Vec<HoleId>> {
        movement::path(self.topology(), start, finish, player, roll)
    }

    /// Whether a marble of the mover's own colour sits anywhere on the path
    /// after `start` (the landing hole included).
    ///
    /// An opposing marble on the landing hole is a capture, not an
    /// obstruction; opposing marbles passed over are ignored.
    pub fn obstructed_path(
        &self,
        start: HoleId,
        finish: HoleId,
        player: PlayerId,
        roll: u8,
    ) -> Result<bool> {
        let mover = self
            .board
            .marble_at(start)
            .ok_or(InvariantViolation::EmptyStart(start))?;
        let route = self
            .path(start, finish, player, roll)
            .ok_or(EngineError::UnreachableMove {
                start,
                finish,
                roll,
            })?;

        Ok(route.iter().skip(1).any(|hole| {
            self.board
                .marble_at(*hole)
                .is_some_and(|marble| marble.owner() == mover.owner())
        }))
    }

    /// Every legal `(start, finish)` pair for `player` with `roll`.
    ///
    /// Marbles are visited in `HoleId` order, destinations in generation
    /// order. Bench marbles only leave on a 1 or 6; a marble in `Yolo` only
    /// leaves on a 1.
    pub fn legal_moves(&self, player: PlayerId, roll: u8) -> Result<Vec<Move>> {
        let mut moves = Vec::new();
        let mut seen = FxHashSet::default();

        for start in self.board.marbles_owned_by(player) {
            if start.is_bench() && !BENCH_EXIT_ROLLS.contains(&roll) {
                trace!(%start, roll, "cannot leave bench");
                continue;
            }
            if start.is_yolo() && roll != YOLO_EXIT_ROLL {
                trace!(%start, roll, "cannot leave yolo");
                continue;
            }

            for finish in self.remote_reachable_holes(start, roll, player) {
                let candidate = Move::new(start, finish);
                if !seen.insert(candidate) {
                    continue;
                }
                if self.obstructed_path(start, finish, player, roll)? {
                    trace!(%candidate, "path obstructed");
                    continue;
                }
                moves.push(candidate);
            }
        }

        Ok(moves)
    }

    /// Re-check a chosen move against the legal set.
    ///
    /// Classifies the failure: an empty start or someone else's marble is an
    /// invariant violation, an unreachable landing hole is
    /// `UnreachableMove`, anything else (obstruction, bench or yolo roll
    /// rules) is `MoveNotLegal`.
    pub fn validate_choice(
        &self,
        player: PlayerId,
        roll: u8,
        chosen: Move,
        legal: &[Move],
    ) -> Result<()> {
        if legal.contains(&chosen) {
            return Ok(());
        }

        let marble = self
            .board
            .marble_at(chosen.start)
            .ok_or(InvariantViolation::EmptyStart(chosen.start))?;
        if marble.owner() != player {
            return Err(InvariantViolation::ForeignMarble {
                player,
                owner: marble.owner(),
                hole: chosen.start,
            }
            .into());
        }
        if !self
            .remote_reachable_holes(chosen.start, roll, player)
            .contains(&chosen.finish)
        {
            return Err(EngineError::UnreachableMove {
                start: chosen.start,
                finish: chosen.finish,
                roll,
            });
        }
        Err(InvariantViolation::MoveNotLegal { player, chosen }.into())
    }
}
