//! Game configuration.
//!
//! A board is fully described by two numbers: how many legs the star has
//! and how tall each leg is. The roster adds how many players sit down and
//! who rolls first. Player `p` always sits at leg `p`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::PlayerId;

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of symmetric track segments.
    pub num_legs: u8,

    /// Height of each leg. Determines the leg perimeter
    /// (`3 * leg_height - 3`) and marbles per player (`leg_height - 1`).
    pub leg_height: u8,

    /// Number of seated players (at most `num_legs`).
    pub num_players: usize,

    /// Player who takes the first turn.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_legs: 6,
            leg_height: 5,
            num_players: 6,
            first_player: PlayerId::new(0),
        }
    }
}

impl GameConfig {
    /// Create the standard six-leg, height-five configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A full table: one player per leg.
    pub fn full_table(num_legs: u8, leg_height: u8) -> Self {
        Self {
            num_legs,
            leg_height,
            num_players: num_legs as usize,
            first_player: PlayerId::new(0),
        }
    }

    #[must_use]
    pub fn with_legs(mut self, num_legs: u8) -> Self {
        self.num_legs = num_legs;
        self
    }

    #[must_use]
    pub fn with_leg_height(mut self, leg_height: u8) -> Self {
        self.leg_height = leg_height;
        self
    }

    #[must_use]
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Reject geometry and rosters that cannot form a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_geometry(self.num_legs, self.leg_height)?;
        if self.num_players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.num_players > self.num_legs as usize {
            return Err(ConfigError::TooManyPlayers {
                players: self.num_players,
                legs: self.num_legs,
            });
        }
        if self.first_player.index() >= self.num_players {
            return Err(ConfigError::FirstPlayerNotSeated {
                first: self.first_player,
                players: self.num_players,
            });
        }
        Ok(())
    }
}

/// Geometry checks shared with `Topology::new`.
pub(crate) fn validate_geometry(num_legs: u8, leg_height: u8) -> Result<(), ConfigError> {
    if leg_height < 2 {
        return Err(ConfigError::LegHeightTooSmall(leg_height));
    }
    if num_legs == 0 {
        return Err(ConfigError::NoLegs);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.num_legs, 6);
        assert_eq!(config.leg_height, 5);
        assert_eq!(config.num_players, 6);
        assert_eq!(config.first_player, PlayerId::new(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_legs(4)
            .with_leg_height(3)
            .with_players(2)
            .with_first_player(PlayerId::new(1));

        assert_eq!(config.num_legs, 4);
        assert_eq!(config.leg_height, 3);
        assert_eq!(config.num_players, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_table() {
        let config = GameConfig::full_table(7, 4);
        assert_eq!(config.num_players, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_legs() {
        let config = GameConfig::new().with_leg_height(1);
        assert_eq!(config.validate(), Err(ConfigError::LegHeightTooSmall(1)));
    }

    #[test]
    fn test_rejects_rosters() {
        assert_eq!(
            GameConfig::new().with_legs(0).with_players(0).validate(),
            Err(ConfigError::NoLegs)
        );
        assert_eq!(
            GameConfig::new().with_players(0).validate(),
            Err(ConfigError::NoPlayers)
        );
        assert_eq!(
            GameConfig::new().with_players(7).validate(),
            Err(ConfigError::TooManyPlayers { players: 7, legs: 6 })
        );
        assert!(matches!(
            GameConfig::new()
                .with_players(3)
                .with_first_player(PlayerId::new(3))
                .validate(),
            Err(ConfigError::FirstPlayerNotSeated { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_players(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
