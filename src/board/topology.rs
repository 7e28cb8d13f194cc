//! Board geometry derived from `(num_legs, leg_height)`.
//!
//! The main track is a ring of `track_length = leg_perimeter * num_legs`
//! holes, `leg_perimeter = 3 * leg_height - 3`. Every leg contributes, at
//! fixed offsets from its first hole:
//!
//! | role           | offset within leg          |
//! |----------------|----------------------------|
//! | bench exit     | `0`                        |
//! | yolo hole      | `leg_height - 1`           |
//! | endzone entry  | `-(leg_height / 2)` (wraps into the previous leg) |
//!
//! The track holes next to the hazard hole work both ways: a marble may
//! step from one onto `Yolo`, and a marble leaving `Yolo` lands on one of
//! them. `yolo_entries` and `yolo_exits` are therefore the same set.
//!
//! Player `p` owns leg `p`: they leave their bench at leg `p`'s bench exit
//! and turn into their endzone at `endzone_entry_for(p)`, one lap later.

use serde::{Deserialize, Serialize};

use super::hole::HoleId;
use crate::core::config::validate_geometry;
use crate::core::{ConfigError, PlayerId};

/// Geometric facts for one board shape. Cheap to copy and share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topology {
    num_legs: u8,
    leg_height: u8,
}

impl Topology {
    /// Derive the topology, rejecting degenerate parameters.
    pub fn new(num_legs: u8, leg_height: u8) -> Result<Self, ConfigError> {
        validate_geometry(num_legs, leg_height)?;
        Ok(Self {
            num_legs,
            leg_height,
        })
    }

    #[must_use]
    pub fn num_legs(&self) -> u8 {
        self.num_legs
    }

    #[must_use]
    pub fn leg_height(&self) -> u8 {
        self.leg_height
    }

    #[must_use]
    pub fn leg_perimeter(&self) -> u32 {
        3 * self.leg_height as u32 - 3
    }

    #[must_use]
    pub fn track_length(&self) -> u32 {
        self.leg_perimeter() * self.num_legs as u32
    }

    /// Bench and endzone slots per player.
    #[must_use]
    pub fn marbles_per_player(&self) -> u8 {
        self.leg_height - 1
    }

    /// Track index at `offset` holes from the start of `leg`, wrapping.
    fn leg_offset(&self, leg: u32, offset: i64) -> u32 {
        let raw = leg as i64 * self.leg_perimeter() as i64 + offset;
        raw.rem_euclid(self.track_length() as i64) as u32
    }

    fn per_leg(&self, offset: i64) -> Vec<u32> {
        (0..self.num_legs as u32)
            .map(|leg| self.leg_offset(leg, offset))
            .collect()
    }

    fn yolo_offset(&self) -> i64 {
        self.leg_height as i64 - 1
    }

    fn endzone_offset(&self) -> i64 {
        -((self.leg_height / 2) as i64)
    }

    /// Track holes from which a marble may step onto `Yolo`, in leg order.
    #[must_use]
    pub fn yolo_entries(&self) -> Vec<u32> {
        self.per_leg(self.yolo_offset())
    }

    /// Track holes a marble may land on when leaving `Yolo`, in leg order.
    #[must_use]
    pub fn yolo_exits(&self) -> Vec<u32> {
        self.yolo_entries()
    }

    /// Track holes where benched marbles enter play, in leg order.
    #[must_use]
    pub fn bench_exits(&self) -> Vec<u32> {
        self.per_leg(0)
    }

    /// Track holes that divert their owner into the endzone, in leg order.
    #[must_use]
    pub fn endzone_entries(&self) -> Vec<u32> {
        self.per_leg(self.endzone_offset())
    }

    #[must_use]
    pub fn bench_exit_for(&self, player: PlayerId) -> u32 {
        self.leg_offset(player.0 as u32, 0)
    }

    #[must_use]
    pub fn endzone_entry_for(&self, player: PlayerId) -> u32 {
        self.leg_offset(player.0 as u32, self.endzone_offset())
    }

    /// The yolo hole closest to `player`'s endzone entry without passing it.
    #[must_use]
    pub fn last_yolo_exit_for(&self, player: PlayerId) -> u32 {
        self.leg_offset(
            player.0 as u32,
            self.yolo_offset() - self.leg_perimeter() as i64,
        )
    }

    fn offset_in_leg(&self, index: u32) -> i64 {
        (index % self.leg_perimeter()) as i64
    }

    #[must_use]
    pub fn is_yolo_entry(&self, index: u32) -> bool {
        index < self.track_length() && self.offset_in_leg(index) == self.yolo_offset()
    }

    #[must_use]
    pub fn is_bench_exit(&self, index: u32) -> bool {
        index < self.track_length() && self.offset_in_leg(index) == 0
    }

    #[must_use]
    pub fn is_endzone_entry(&self, index: u32) -> bool {
        index < self.track_length()
            && self.offset_in_leg(index)
                == self.endzone_offset().rem_euclid(self.leg_perimeter() as i64)
    }

    /// The player whose endzone is entered from `index`, if any.
    #[must_use]
    pub fn endzone_owner(&self, index: u32) -> Option<PlayerId> {
        if !self.is_endzone_entry(index) {
            return None;
        }
        let leg = (index + (self.leg_height / 2) as u32) / self.leg_perimeter();
        Some(PlayerId::new((leg % self.num_legs as u32) as u8))
    }

    /// Whether `hole` exists on this board.
    #[must_use]
    pub fn contains(&self, hole: HoleId) -> bool {
        match hole {
            HoleId::Normal(index) => index < self.track_length(),
            HoleId::Bench(player, slot) | HoleId::Endzone(player, slot) => {
                player.0 < self.num_legs && slot < self.marbles_per_player()
            }
            HoleId::Yolo => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn standard() -> Topology {
        Topology::new(6, 5).unwrap()
    }

    #[test]
    fn test_standard_geometry() {
        let topo = standard();
        assert_eq!(topo.leg_perimeter(), 12);
        assert_eq!(topo.track_length(), 72);
        assert_eq!(topo.marbles_per_player(), 4);
    }

    #[test]
    fn test_role_sets_standard_board() {
        let topo = standard();
        assert_eq!(topo.bench_exits(), vec![0, 12, 24, 36, 48, 60]);
        assert_eq!(topo.yolo_entries(), vec![4, 16, 28, 40, 52, 64]);
        assert_eq!(topo.endzone_entries(), vec![70, 10, 22, 34, 46, 58]);
        assert_eq!(topo.yolo_exits(), topo.yolo_entries());
    }

    #[test]
    fn test_role_sets_are_disjoint_and_distinct() {
        for legs in 1..=8u8 {
            for height in 2..=7u8 {
                let topo = Topology::new(legs, height).unwrap();
                let bench: FxHashSet<_> = topo.bench_exits().into_iter().collect();
                let yolo: FxHashSet<_> = topo.yolo_entries().into_iter().collect();
                let endzone: FxHashSet<_> = topo.endzone_entries().into_iter().collect();

                assert_eq!(bench.len(), legs as usize);
                assert_eq!(yolo.len(), legs as usize);
                assert_eq!(endzone.len(), legs as usize);
                assert!(bench.is_disjoint(&yolo), "legs={legs} height={height}");
                assert!(bench.is_disjoint(&endzone), "legs={legs} height={height}");
                assert!(yolo.is_disjoint(&endzone), "legs={legs} height={height}");
            }
        }
    }

    #[test]
    fn test_predicates_match_sets() {
        let topo = Topology::new(5, 4).unwrap();
        for index in 0..topo.track_length() {
            assert_eq!(topo.is_bench_exit(index), topo.bench_exits().contains(&index));
            assert_eq!(topo.is_yolo_entry(index), topo.yolo_entries().contains(&index));
            assert_eq!(
                topo.is_endzone_entry(index),
                topo.endzone_entries().contains(&index)
            );
        }
        assert!(!topo.is_bench_exit(topo.track_length()));
    }

    #[test]
    fn test_player_specific_holes() {
        let topo = standard();
        assert_eq!(topo.endzone_entry_for(PlayerId::new(0)), 70);
        assert_eq!(topo.endzone_entry_for(PlayerId::new(1)), 10);
        assert_eq!(topo.bench_exit_for(PlayerId::new(3)), 36);
        assert_eq!(topo.last_yolo_exit_for(PlayerId::new(0)), 64);
        assert_eq!(topo.last_yolo_exit_for(PlayerId::new(1)), 4);
    }

    #[test]
    fn test_endzone_owner_matches_entry_for() {
        for legs in 1..=7u8 {
            for height in 2..=6u8 {
                let topo = Topology::new(legs, height).unwrap();
                for player in PlayerId::all(legs as usize) {
                    let entry = topo.endzone_entry_for(player);
                    assert_eq!(topo.endzone_owner(entry), Some(player));
                }
            }
        }
        assert_eq!(standard().endzone_owner(0), None);
    }

    #[test]
    fn test_last_yolo_exit_precedes_endzone_entry() {
        let topo = standard();
        for player in PlayerId::all(6) {
            let exit = topo.last_yolo_exit_for(player);
            let entry = topo.endzone_entry_for(player);
            assert!(topo.is_yolo_entry(exit));
            let gap = (entry + topo.track_length() - exit) % topo.track_length();
            assert!(gap > 0 && gap < topo.leg_perimeter());
        }
    }

    #[test]
    fn test_contains() {
        let topo = standard();
        let p5 = PlayerId::new(5);
        assert!(topo.contains(HoleId::Normal(71)));
        assert!(!topo.contains(HoleId::Normal(72)));
        assert!(topo.contains(HoleId::Bench(p5, 3)));
        assert!(!topo.contains(HoleId::Bench(p5, 4)));
        assert!(!topo.contains(HoleId::Endzone(PlayerId::new(6), 0)));
        assert!(topo.contains(HoleId::Yolo));
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert_eq!(Topology::new(6, 1), Err(ConfigError::LegHeightTooSmall(1)));
        assert_eq!(Topology::new(0, 5), Err(ConfigError::NoLegs));
    }
}
