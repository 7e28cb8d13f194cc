//! Batch drivers: sets of games, strategy tournaments, geometry sweeps.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::report::{GameReport, SetReport};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, Result};
use crate::game::{DecisionPolicy, Game};
use crate::strategy::{BoxedPolicy, PerPlayer, Strategy, StrategyChain};

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Board and roster for every game.
    pub game: GameConfig,

    /// Games per set.
    pub games: u32,

    /// Turn bound per game. A game reaching it is reported as truncated.
    pub max_turns: u32,

    /// Base seed. Game `i` of a set rolls with `seed + i`.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: 100,
            max_turns: 10_000,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seed of game `index` within a set.
    #[must_use]
    pub fn game_seed(&self, index: u32) -> u64 {
        self.seed.wrapping_add(u64::from(index))
    }
}

/// Play one set of games.
///
/// `policy_for` builds the policy for each game from that game's seed, so
/// the whole set is reproducible from `config` alone.
pub fn run_set<P, F>(config: &SimulationConfig, mut policy_for: F) -> Result<SetReport>
where
    P: DecisionPolicy,
    F: FnMut(u64) -> P,
{
    config.game.validate()?;
    let mut report = SetReport::new(config.game.num_players);

    for index in 0..config.games {
        let seed = config.game_seed(index);
        let mut policy = policy_for(seed);
        let mut game = Game::seeded(config.game.clone(), seed)?;
        let outcome = game.run_bounded(&mut policy, config.max_turns)?;
        debug!(seed, ?outcome, "game finished");
        report.push(GameReport::new(seed, outcome));
    }

    Ok(report)
}

/// One set of a [`tournament`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetSummary {
    /// Heuristic order each seat played with (a random pick always follows).
    pub orders: PlayerMap<Vec<Strategy>>,

    pub report: SetReport,

    /// Seat with the most wins, if anyone won.
    pub best: Option<PlayerId>,
}

impl SetSummary {
    /// Heuristic order of the best seat.
    #[must_use]
    pub fn best_order(&self) -> Option<&[Strategy]> {
        self.best.map(|player| self.orders[player].as_slice())
    }
}

/// Seat every player with its own heuristic chain.
///
/// The random fallback of each seat is forked from a stream seeded by
/// `seed`, so a game's decisions depend only on its seed.
#[must_use]
pub fn seat_chains(orders: &PlayerMap<Vec<Strategy>>, seed: u64) -> PerPlayer {
    let mut rng = GameRng::new(seed);
    PerPlayer::from_fn(orders.player_count(), |player| -> BoxedPolicy {
        Box::new(StrategyChain::from_order(&orders[player], rng.fork()))
    })
}

/// Evolve a strategy order over several sets.
///
/// Every set deals each seat a freshly shuffled order, except that seat 0
/// inherits the order of the previous set's best seat.
pub fn tournament(
    config: &SimulationConfig,
    sets: u32,
    rng: &mut GameRng,
) -> Result<Vec<SetSummary>> {
    config.game.validate()?;
    let mut summaries: Vec<SetSummary> = Vec::with_capacity(sets as usize);

    for set in 0..sets {
        let mut orders = PlayerMap::new(config.game.num_players, |_| {
            StrategyChain::shuffled_order(rng)
        });
        if let Some(best) = summaries.last().and_then(SetSummary::best_order) {
            orders[PlayerId::new(0)] = best.to_vec();
        }

        let set_config = config.clone().with_seed(rng.next_u64());
        let report = run_set(&set_config, |seed| seat_chains(&orders, seed))?;
        let best = report.best_player();
        info!(
            set,
            best = ?best.map(|p| p.0),
            wins = ?report.win_histogram(),
            truncated = report.truncated(),
            "set finished"
        );
        summaries.push(SetSummary {
            orders,
            report,
            best,
        });
    }

    Ok(summaries)
}

/// Mean game length for one board shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub num_legs: u8,
    pub leg_height: u8,
    pub mean_turns: f64,
    pub truncated: usize,
}

/// Mean turns per board shape, every seat playing the standard chain.
///
/// Each shape is played as a full table. `config.game` is ignored apart
/// from serving as the template for the other settings.
pub fn sweep_geometry(
    legs: &[u8],
    heights: &[u8],
    config: &SimulationConfig,
) -> Result<Vec<SweepPoint>> {
    let mut points = Vec::with_capacity(legs.len() * heights.len());

    for &num_legs in legs {
        for &leg_height in heights {
            let shape = config
                .clone()
                .with_game(GameConfig::full_table(num_legs, leg_height));
            let report = run_set(&shape, |seed| StrategyChain::standard(GameRng::new(seed).fork()))?;
            let point = SweepPoint {
                num_legs,
                leg_height,
                mean_turns: report.mean_turns(),
                truncated: report.truncated(),
            };
            info!(num_legs, leg_height, mean_turns = point.mean_turns, "shape finished");
            points.push(point);
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, EngineError};

    fn small() -> SimulationConfig {
        SimulationConfig::new()
            .with_game(GameConfig::full_table(3, 3))
            .with_games(4)
            .with_max_turns(2_000)
            .with_seed(11)
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new().with_games(7).with_seed(40);
        assert_eq!(config.games, 7);
        assert_eq!(config.game_seed(2), 42);
        assert_eq!(config.max_turns, 10_000);
    }

    #[test]
    fn test_run_set_is_reproducible() {
        let config = small();
        let chain = |seed| StrategyChain::standard(GameRng::new(seed).fork());
        let a = run_set(&config, chain).unwrap();
        let b = run_set(&config, chain).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.games().len(), 4);
        assert_eq!(a.games()[3].seed, 14);
    }

    #[test]
    fn test_run_set_rejects_bad_config() {
        let config = small().with_game(GameConfig::new().with_players(0));
        let err = run_set(&config, |_| Strategy::FirstMove).unwrap_err();
        assert_eq!(err, EngineError::Config(ConfigError::NoPlayers));
    }

    #[test]
    fn test_tournament_carries_best_order() {
        let mut rng = GameRng::new(3);
        let summaries = tournament(&small(), 3, &mut rng).unwrap();
        assert_eq!(summaries.len(), 3);
        for pair in summaries.windows(2) {
            if let Some(best) = pair[0].best_order() {
                assert_eq!(pair[1].orders[PlayerId::new(0)].as_slice(), best);
            }
        }
    }

    #[test]
    fn test_sweep_covers_every_shape() {
        let config = small().with_games(2);
        let points = sweep_geometry(&[2, 3], &[3], &config).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].num_legs, points[0].leg_height), (2, 3));
        assert_eq!((points[1].num_legs, points[1].leg_height), (3, 3));
        assert!(points.iter().all(|point| point.mean_turns > 0.0));
    }
}
