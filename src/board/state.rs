//! Sparse marble placement: the authoritative game position.
//!
//! Backed by a persistent `im::OrdMap` so that cloning a position for
//! look-ahead is O(1) and iteration visits holes in `HoleId` order.
//!
//! Invariants (checked by [`BoardState::validate`]):
//! - every hole holds at most one marble;
//! - every occupied hole exists on the board;
//! - a bench or endzone hole only ever holds its owner's marbles;
//! - every seated player owns exactly `marbles_per_player` marbles.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::hole::{HoleId, Marble};
use super::topology::Topology;
use crate::core::{InvariantViolation, PlayerId};

/// Marble placement for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    topology: Topology,
    num_players: usize,
    #[serde(with = "occupied_list")]
    holes: OrdMap<HoleId, Marble>,
}

/// Occupied holes as a `(hole, marble)` list, since `HoleId` is not a
/// string map key in self-describing formats.
mod occupied_list {
    use im::OrdMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::board::hole::{HoleId, Marble};

    pub fn serialize<S: Serializer>(
        holes: &OrdMap<HoleId, Marble>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(holes.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OrdMap<HoleId, Marble>, D::Error> {
        let pairs = Vec::<(HoleId, Marble)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl BoardState {
    /// Starting position: every seated player's marbles on their bench.
    #[must_use]
    pub fn new(topology: Topology, num_players: usize) -> Self {
        let mut holes = OrdMap::new();
        for player in PlayerId::all(num_players) {
            for slot in 0..topology.marbles_per_player() {
                holes.insert(HoleId::Bench(player, slot), Marble::new(player));
            }
        }
        Self {
            topology,
            num_players,
            holes,
        }
    }

    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    #[must_use]
    pub fn marble_at(&self, hole: HoleId) -> Option<Marble> {
        self.holes.get(&hole).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, hole: HoleId) -> bool {
        self.holes.contains_key(&hole)
    }

    /// Holes holding `player`'s marbles, in ascending `HoleId` order.
    #[must_use]
    pub fn marbles_owned_by(&self, player: PlayerId) -> Vec<HoleId> {
        self.holes
            .iter()
            .filter(|(_, marble)| marble.owner() == player)
            .map(|(hole, _)| *hole)
            .collect()
    }

    /// All occupied holes, in ascending `HoleId` order.
    pub fn occupied(&self) -> impl Iterator<Item = (HoleId, Marble)> + '_ {
        self.holes.iter().map(|(hole, marble)| (*hole, *marble))
    }

    /// Put a marble into an empty hole.
    ///
    /// Low-level: callers must have taken the marble out of another hole
    /// first, or the per-player marble count breaks.
    pub fn place(&mut self, hole: HoleId, marble: Marble) -> Result<(), InvariantViolation> {
        if !self.topology.contains(hole) {
            return Err(InvariantViolation::NoSuchHole(hole));
        }
        if self.is_occupied(hole) {
            return Err(InvariantViolation::HoleOccupied(hole));
        }
        self.holes.insert(hole, marble);
        Ok(())
    }

    /// Empty a hole, returning the marble that was there.
    pub fn clear(&mut self, hole: HoleId) -> Option<Marble> {
        self.holes.remove(&hole)
    }

    /// Move a marble between holes, bypassing game rules.
    ///
    /// Intended for building positions in tests and tools; it cannot create
    /// or destroy marbles.
    pub fn relocate(&mut self, from: HoleId, to: HoleId) -> Result<(), InvariantViolation> {
        let marble = self
            .marble_at(from)
            .ok_or(InvariantViolation::EmptyStart(from))?;
        if from == to {
            return Ok(());
        }
        self.place(to, marble)?;
        self.clear(from);
        Ok(())
    }

    /// Lowest-index empty bench slot of `player`.
    #[must_use]
    pub fn first_empty_bench_slot(&self, player: PlayerId) -> Option<HoleId> {
        (0..self.topology.marbles_per_player())
            .map(|slot| HoleId::Bench(player, slot))
            .find(|hole| !self.is_occupied(*hole))
    }

    /// Whether all of `player`'s endzone slots hold their own marbles.
    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        (0..self.topology.marbles_per_player()).all(|slot| {
            self.marble_at(HoleId::Endzone(player, slot))
                .is_some_and(|marble| marble.owner() == player)
        })
    }

    /// Every seated player whose endzone is full, in ascending player order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        PlayerId::all(self.num_players)
            .filter(|&player| self.has_won(player))
            .collect()
    }

    /// Check the marble-count invariant for one player.
    pub fn validate_player(&self, player: PlayerId) -> Result<(), InvariantViolation> {
        let found = self
            .holes
            .values()
            .filter(|marble| marble.owner() == player)
            .count();
        let expected = self.topology.marbles_per_player() as usize;
        if found != expected {
            return Err(InvariantViolation::MarbleCount {
                player,
                found,
                expected,
            });
        }
        Ok(())
    }

    /// Check every board invariant.
    ///
    /// Deserialized positions bypass [`place`](Self::place), so holes are
    /// checked against the topology here too.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (&hole, marble) in self.holes.iter() {
            if !self.topology.contains(hole) {
                return Err(InvariantViolation::NoSuchHole(hole));
            }
            if let Some(owner) = hole.private_owner() {
                if owner != marble.owner() {
                    return Err(InvariantViolation::ForeignPrivateHole {
                        hole,
                        owner: marble.owner(),
                    });
                }
            }
        }
        PlayerId::all(self.num_players).try_for_each(|player| self.validate_player(player))?;
        match self
            .holes
            .values()
            .find(|marble| marble.owner().index() >= self.num_players)
        {
            Some(stray) => Err(InvariantViolation::MarbleCount {
                player: stray.owner(),
                found: self.marbles_owned_by(stray.owner()).len(),
                expected: 0,
            }),
            None => Ok(()),
        }
    }
}

/// Plain-text rendering, one column per track hole.
///
/// Track row: `^` yolo hole, `o` bench exit, `=` endzone entry, `-` plain
/// hole; an occupied hole shows its owner's digit (`*` above 9). Endzone
/// rows are drawn above the track under each entry, bench rows below under
/// each exit.
impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let topo = &self.topology;
        let width = topo.track_length();
        let owner_char = |hole: HoleId| {
            self.marble_at(hole).map(|marble| {
                char::from_digit(marble.owner().0 as u32, 10).unwrap_or('*')
            })
        };

        let yolo = owner_char(HoleId::Yolo).unwrap_or('!');
        writeln!(f, "{}{yolo}", "  ".repeat((width / 2) as usize))?;

        let slots = topo.marbles_per_player();
        for row in (0..slots).rev() {
            for col in 0..width {
                let cell = match topo.endzone_owner(col) {
                    Some(owner) => owner_char(HoleId::Endzone(owner, row)).unwrap_or('w'),
                    None => ' ',
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }

        for col in 0..width {
            let cell = owner_char(HoleId::Normal(col)).unwrap_or(if topo.is_yolo_entry(col) {
                '^'
            } else if topo.is_bench_exit(col) {
                'o'
            } else if topo.is_endzone_entry(col) {
                '='
            } else {
                '-'
            });
            write!(f, "{cell} ")?;
        }
        writeln!(f)?;

        for row in 0..slots {
            for col in 0..width {
                let cell = if topo.is_bench_exit(col) {
                    let owner = PlayerId::new((col / topo.leg_perimeter()) as u8);
                    owner_char(HoleId::Bench(owner, row)).unwrap_or('b')
                } else {
                    ' '
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
