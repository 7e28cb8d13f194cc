//! Physical movement over the board graph, ignoring occupancy.
//!
//! The board is a ring with three kinds of branch point:
//! - a yolo hole on the track may also step onto `Yolo`;
//! - a player's own endzone entry diverts them into their endzone;
//! - `Yolo` fans out to every yolo exit, but only on a roll of 1.
//!
//! Successor lists are produced in a fixed *generation order* (the `Yolo`
//! branch first, then the diversion or the next track hole; yolo exits in
//! leg order). Both [`remote_reachable_holes`] and [`path`] resolve branches
//! in that order, so it is part of the legality contract.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{HoleId, Topology};
use crate::core::PlayerId;

/// Destination list of a movement query, in generation order.
pub type Reachable = SmallVec<[HoleId; 8]>;

/// A candidate or chosen move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: HoleId,
    pub finish: HoleId,
}

impl Move {
    #[must_use]
    pub const fn new(start: HoleId, finish: HoleId) -> Self {
        Self { start, finish }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.finish)
    }
}

fn push_unique(dests: &mut Reachable, hole: HoleId) {
    if !dests.contains(&hole) {
        dests.push(hole);
    }
}

/// Holes one unit of movement away from `start` for `player`.
pub fn reachable_holes(topology: &Topology, start: HoleId, player: PlayerId, roll: u8) -> Reachable {
    let mut dests = Reachable::new();
    match start {
        HoleId::Normal(index) => {
            if topology.is_yolo_entry(index) {
                push_unique(&mut dests, HoleId::Yolo);
            }
            if topology.endzone_owner(index) == Some(player) {
                push_unique(&mut dests, HoleId::Endzone(player, 0));
            } else {
                push_unique(&mut dests, HoleId::Normal((index + 1) % topology.track_length()));
            }
        }
        HoleId::Bench(owner, _) => {
            push_unique(&mut dests, HoleId::Normal(topology.bench_exit_for(owner)));
        }
        HoleId::Yolo => {
            if roll == 1 {
                for exit in topology.yolo_exits() {
                    push_unique(&mut dests, HoleId::Normal(exit));
                }
            }
        }
        HoleId::Endzone(owner, slot) => {
            if slot + 1 < topology.marbles_per_player() {
                push_unique(&mut dests, HoleId::Endzone(owner, slot + 1));
            }
        }
    }
    dests
}

/// Landing holes of a full die-roll move from `start`.
///
/// Intermediate branch points collapse to their first successor in
/// generation order, after discarding `Yolo`: the hazard hole can only be
/// the final landing hole, never a transient stop. Running out of
/// successors (overshooting the endzone, or sitting in `Yolo` without a 1)
/// yields no destinations.
pub fn remote_reachable_holes(
    topology: &Topology,
    start: HoleId,
    roll: u8,
    player: PlayerId,
) -> Reachable {
    if roll == 0 {
        let mut dests = Reachable::new();
        dests.push(start);
        return dests;
    }
    if roll == 1 || start.is_bench() {
        return reachable_holes(topology, start, player, roll);
    }

    let mut current = start;
    for _ in 1..roll {
        let mut next = reachable_holes(topology, current, player, roll);
        next.retain(|hole| !hole.is_yolo());
        match next.first() {
            Some(&hole) => current = hole,
            None => return Reachable::new(),
        }
    }
    reachable_holes(topology, current, player, roll)
}

/// Most hops `path` explores for a given roll.
///
/// A roll of `n` never moves a marble more than `n` holes, so the search
/// is bounded by the roll itself (at least one hop). This keeps the search
/// finite on the cyclic track and stops it from wandering past the landing
/// hole along an earlier branch.
#[must_use]
pub const fn max_path_hops(roll: u8) -> u8 {
    if roll == 0 {
        1
    } else {
        roll
    }
}

/// Depth-first search for the hole sequence from `start` to `finish`.
///
/// Returns the inclusive sequence, or `None` when `finish` is not reachable
/// within [`max_path_hops`]. A search starting in `Yolo` fails unless the
/// roll is 1. A direct successor is preferred; otherwise branches are tried
/// in generation order and the first success wins, which is not
/// necessarily the shortest route.
pub fn path(
    topology: &Topology,
    start: HoleId,
    finish: HoleId,
    player: PlayerId,
    roll: u8,
) -> Option<Vec<HoleId>> {
    let mut trail = Vec::with_capacity(max_path_hops(roll) as usize + 1);
    if search(topology, start, finish, player, roll, max_path_hops(roll), &mut trail) {
        Some(trail)
    } else {
        None
    }
}

fn search(
    topology: &Topology,
    current: HoleId,
    finish: HoleId,
    player: PlayerId,
    roll: u8,
    hops_left: u8,
    trail: &mut Vec<HoleId>,
) -> bool {
    trail.push(current);
    if current == finish {
        return true;
    }
    if hops_left == 0 || (current.is_yolo() && roll != 1) {
        trail.pop();
        return false;
    }

    let successors = reachable_holes(topology, current, player, roll);
    if successors.contains(&finish) {
        trail.push(finish);
        return true;
    }
    for next in successors {
        if search(topology, next, finish, player, roll, hops_left - 1, trail) {
            return true;
        }
    }
    trail.pop();
    false
}
