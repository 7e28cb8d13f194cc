//! Per-game injectable resources: the die and the log span.

use tracing::Span;

use crate::core::{DiceSource, GameRng};

/// Everything a game needs from the outside world besides its rules.
///
/// Each game owns its context, so games built from different contexts
/// share no mutable state and can run on different threads.
#[derive(Debug)]
pub struct GameContext<D: DiceSource = GameRng> {
    /// Die-roll stream for this game.
    pub dice: D,
    /// Span every engine event of this game is recorded under. Which
    /// subscriber receives it is up to the caller.
    pub span: Span,
}

impl GameContext<GameRng> {
    /// Seeded ChaCha dice and a `game` span carrying the seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            dice: GameRng::new(seed),
            span: tracing::info_span!("game", seed),
        }
    }
}

impl<D: DiceSource> GameContext<D> {
    /// Custom dice, no span.
    pub fn new(dice: D) -> Self {
        Self {
            dice,
            span: Span::none(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
