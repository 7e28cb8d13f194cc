//! Composite policies: priority chains and per-seat dispatch.

use tracing::trace;

use super::heuristics::{RandomPolicy, Strategy};
use crate::board::BoardState;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::game::DecisionPolicy;
use crate::rules::Move;

/// A boxed policy that can move to another thread with its game.
pub type BoxedPolicy = Box<dyn DecisionPolicy + Send>;

/// Ordered policies; the first one that returns a move decides.
#[derive(Default)]
pub struct StrategyChain {
    links: Vec<BoxedPolicy>,
}

impl StrategyChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default priority order, falling back to a uniform random pick.
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        Self::from_order(&Self::standard_order(), rng)
    }

    /// Heuristic order of [`StrategyChain::standard`], without the random
    /// fallback.
    #[must_use]
    pub fn standard_order() -> Vec<Strategy> {
        vec![
            Strategy::ObviousMove,
            Strategy::SmartLeaveYolo,
            Strategy::EnterEndzone,
            Strategy::Capture,
            Strategy::EnterYolo,
            Strategy::ScootEndzone,
        ]
    }

    /// A random priority order: `ObviousMove` first, then the shuffled pool.
    pub fn shuffled_order(rng: &mut GameRng) -> Vec<Strategy> {
        let mut pool = Strategy::SHUFFLE_POOL.to_vec();
        rng.shuffle(&mut pool);
        let mut order = Vec::with_capacity(pool.len() + 1);
        order.push(Strategy::ObviousMove);
        order.extend(pool);
        order
    }

    /// A chain over a shuffled order, with its own random fallback forked
    /// from `rng`.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let order = Self::shuffled_order(rng);
        Self::from_order(&order, rng.fork())
    }

    /// Heuristics in `order`, then a random pick driven by `rng`.
    #[must_use]
    pub fn from_order(order: &[Strategy], rng: GameRng) -> Self {
        order
            .iter()
            .fold(Self::new(), |chain, &strategy| chain.with(strategy))
            .with(RandomPolicy::new(rng))
    }

    /// Append a link.
    #[must_use]
    pub fn with(mut self, policy: impl DecisionPolicy + Send + 'static) -> Self {
        self.links.push(Box::new(policy));
        self
    }

    pub fn push(&mut self, policy: BoxedPolicy) {
        self.links.push(policy);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Link labels in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.name()).collect()
    }
}

impl std::fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl DecisionPolicy for StrategyChain {
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        roll: u8,
        board: &BoardState,
    ) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        for link in &mut self.links {
            if let Some(choice) = link.choose(player, moves, roll, board) {
                trace!(player = player.0, link = link.name(), %choice, "chain decided");
                return Some(choice);
            }
        }
        None
    }

    fn name(&self) -> &str {
        "chain"
    }
}

/// One policy per seat, dispatched on the acting player.
pub struct PerPlayer {
    seats: PlayerMap<BoxedPolicy>,
}

impl PerPlayer {
    pub fn new(seats: PlayerMap<BoxedPolicy>) -> Self {
        Self { seats }
    }

    /// Build each seat's policy from its player id.
    pub fn from_fn(player_count: usize, factory: impl FnMut(PlayerId) -> BoxedPolicy) -> Self {
        Self::new(PlayerMap::new(player_count, factory))
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &dyn DecisionPolicy {
        &**self.seats.get(player)
    }
}

impl DecisionPolicy for PerPlayer {
    fn choose(
        &mut self,
        player: PlayerId,
        moves: &[Move],
        roll: u8,
        board: &BoardState,
    ) -> Option<Move> {
        self.seats.get_mut(player).choose(player, moves, roll, board)
    }

    fn name(&self) -> &str {
        "per-player"
    }
}
