//! Hole identifiers and marbles.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A hole on the board.
///
/// Ordering is total and stable (track holes by index, then benches, then
/// endzones, then the hazard hole). Legal-move enumeration relies on it to
/// visit a player's marbles in a fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HoleId {
    /// Main track hole, `0 <= index < track_length`.
    Normal(u32),
    /// A player's private staging slot.
    Bench(PlayerId, u8),
    /// A player's private finishing slot. Slot 0 is the lane entrance.
    Endzone(PlayerId, u8),
    /// The single shared hazard hole.
    Yolo,
}

impl HoleId {
    #[must_use]
    pub fn is_bench(self) -> bool {
        matches!(self, HoleId::Bench(..))
    }

    #[must_use]
    pub fn is_endzone(self) -> bool {
        matches!(self, HoleId::Endzone(..))
    }

    #[must_use]
    pub fn is_yolo(self) -> bool {
        matches!(self, HoleId::Yolo)
    }

    /// Owner of a private hole (bench or endzone). Shared holes have none.
    #[must_use]
    pub fn private_owner(self) -> Option<PlayerId> {
        match self {
            HoleId::Bench(player, _) | HoleId::Endzone(player, _) => Some(player),
            HoleId::Normal(_) | HoleId::Yolo => None,
        }
    }
}

impl std::fmt::Display for HoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoleId::Normal(index) => write!(f, "{index}"),
            HoleId::Bench(player, slot) => write!(f, "bench_{}_{slot}", player.0),
            HoleId::Endzone(player, slot) => write!(f, "endzone_{}_{slot}", player.0),
            HoleId::Yolo => write!(f, "yolo"),
        }
    }
}

/// A marble. Its owner never changes; captures relocate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marble {
    owner: PlayerId,
}

impl Marble {
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self { owner }
    }

    #[must_use]
    pub const fn owner(self) -> PlayerId {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_display() {
        let p2 = PlayerId::new(2);
        assert_eq!(HoleId::Normal(17).to_string(), "17");
        assert_eq!(HoleId::Bench(p2, 3).to_string(), "bench_2_3");
        assert_eq!(HoleId::Endzone(p2, 0).to_string(), "endzone_2_0");
        assert_eq!(HoleId::Yolo.to_string(), "yolo");
    }

    #[test]
    fn test_hole_ordering() {
        let p0 = PlayerId::new(0);
        let mut holes = vec![
            HoleId::Yolo,
            HoleId::Endzone(p0, 1),
            HoleId::Bench(p0, 2),
            HoleId::Normal(40),
            HoleId::Normal(3),
        ];
        holes.sort();
        assert_eq!(
            holes,
            vec![
                HoleId::Normal(3),
                HoleId::Normal(40),
                HoleId::Bench(p0, 2),
                HoleId::Endzone(p0, 1),
                HoleId::Yolo,
            ]
        );
    }

    #[test]
    fn test_private_owner() {
        let p1 = PlayerId::new(1);
        assert_eq!(HoleId::Bench(p1, 0).private_owner(), Some(p1));
        assert_eq!(HoleId::Endzone(p1, 2).private_owner(), Some(p1));
        assert_eq!(HoleId::Normal(5).private_owner(), None);
        assert_eq!(HoleId::Yolo.private_owner(), None);
    }

    #[test]
    fn test_hole_serde() {
        let hole = HoleId::Endzone(PlayerId::new(4), 2);
        let json = serde_json::to_string(&hole).unwrap();
        let back: HoleId = serde_json::from_str(&json).unwrap();
        assert_eq!(hole, back);
    }

    #[test]
    fn test_marble_owner() {
        let marble = Marble::new(PlayerId::new(3));
        assert_eq!(marble.owner(), PlayerId::new(3));
    }
}
