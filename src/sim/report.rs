//! Per-game and per-set simulation results.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::game::GameOutcome;

/// Result of one simulated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Seed the game's dice were created from.
    pub seed: u64,

    /// `None` when the game hit the turn bound.
    pub winner: Option<PlayerId>,

    /// Turns played.
    pub turns: u32,
}

impl GameReport {
    pub fn new(seed: u64, outcome: GameOutcome) -> Self {
        Self {
            seed,
            winner: outcome.winner(),
            turns: outcome.turns(),
        }
    }

    #[must_use]
    pub fn truncated(&self) -> bool {
        self.winner.is_none()
    }
}

/// Results of a set of games played under one configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetReport {
    num_players: usize,
    games: Vec<GameReport>,
}

impl SetReport {
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            games: Vec::new(),
        }
    }

    pub fn push(&mut self, report: GameReport) {
        self.games.push(report);
    }

    #[must_use]
    pub fn games(&self) -> &[GameReport] {
        &self.games
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Wins per seat. Truncated games count for nobody.
    #[must_use]
    pub fn win_histogram(&self) -> PlayerMap<u32> {
        let mut histogram = PlayerMap::with_value(self.num_players, 0);
        for winner in self.games.iter().filter_map(|game| game.winner) {
            histogram[winner] += 1;
        }
        histogram
    }

    /// Mean turns over every game, truncated ones included.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            let total: u64 = self.games.iter().map(|game| u64::from(game.turns)).sum();
            total as f64 / self.games.len() as f64
        }
    }

    /// Seat with the most wins; ties go to the lowest seat. `None` if
    /// nobody won anything.
    #[must_use]
    pub fn best_player(&self) -> Option<PlayerId> {
        let histogram = self.win_histogram();
        let (best, wins) = histogram
            .iter()
            .fold(None, |best: Option<(PlayerId, u32)>, (player, &wins)| match best {
                Some((_, top)) if top >= wins => best,
                _ => Some((player, wins)),
            })?;
        (wins > 0).then_some(best)
    }

    /// Number of games cut off at the turn bound.
    #[must_use]
    pub fn truncated(&self) -> usize {
        self.games.iter().filter(|game| game.truncated()).count()
    }
}
