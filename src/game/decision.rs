//! The decision interface consumed by the turn engine.

use crate::board::BoardState;
use crate::core::PlayerId;
use crate::rules::Move;

/// Chooses one move per turn.
///
/// `moves` is the complete, ordered legal set for `player` and `roll`; it
/// may be empty. Implementations must return `None` or an element of
/// `moves`: anything else aborts the game.
pub trait DecisionPolicy {
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        roll: u8,
        board: &BoardState,
    ) -> Option<Move>;

    /// Short label used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

/// A policy backed by a closure. Built with [`policy_fn`].
pub struct FnPolicy<F> {
    name: String,
    choose: F,
}

/// Wrap a closure as a [`DecisionPolicy`].
///
/// ```
/// use rust_wahoo::game::{policy_fn, DecisionPolicy};
///
/// let first = policy_fn("first", |_, moves, _, _| moves.first().copied());
/// assert_eq!(first.name(), "first");
/// ```
pub fn policy_fn<F>(name: impl Into<String>, choose: F) -> FnPolicy<F>
where
    F: FnMut(PlayerId, &[Move], u8, &BoardState) -> Option<Move>,
{
    FnPolicy {
        name: name.into(),
        choose,
    }
}

impl<F> DecisionPolicy for FnPolicy<F>
where
    F: FnMut(PlayerId, &[Move], u8, &BoardState) -> Option<Move>,
{
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        roll: u8,
        board: &BoardState,
    ) -> Option<Move> {
        (self.choose)(player, moves, roll, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        roll: u8,
        board: &BoardState,
    ) -> Option<Move> {
        (**self).choose(player, moves, roll, board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HoleId, Topology};

    #[test]
    fn test_fn_policy_delegates() {
        let board = BoardState::new(Topology::new(6, 5).unwrap(), 6);
        let moves = [
            Move::new(HoleId::Bench(PlayerId::new(0), 0), HoleId::Normal(0)),
            Move::new(HoleId::Bench(PlayerId::new(0), 1), HoleId::Normal(0)),
        ];
        let mut calls = 0;
        let mut last = policy_fn("last", |_, moves: &[Move], _, _: &BoardState| {
            calls += 1;
            moves.last().copied()
        });

        assert_eq!(last.choose(PlayerId::new(0), &moves, 6, &board), Some(moves[1]));
        assert_eq!(last.choose(PlayerId::new(0), &[], 3, &board), None);
        assert_eq!(last.name(), "last");
        drop(last);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_boxed_policy() {
        let board = BoardState::new(Topology::new(3, 3).unwrap(), 3);
        let mut boxed: Box<dyn DecisionPolicy> =
            Box::new(policy_fn("none", |_, _: &[Move], _, _: &BoardState| None));
        assert_eq!(boxed.choose(PlayerId::new(1), &[], 2, &board), None);
        assert_eq!(boxed.name(), "none");
    }
}
