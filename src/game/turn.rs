//! The per-turn state machine.
//!
//! ```text
//! AwaitingRoll -> AwaitingChoice -> Resolving -> AwaitingRoll
//!                                            \-> GameOver
//! ```
//!
//! Each turn rolls the die, asks the [`MoveEngine`] for the legal set,
//! hands it to the [`DecisionPolicy`], re-validates the answer, executes it
//! (capturing an opposing marble on the landing hole), and checks for a
//! winner. A roll of 6 keeps the same player on turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::context::GameContext;
use super::decision::DecisionPolicy;
use crate::board::{BoardState, HoleId, Topology};
use crate::core::{
    ConfigError, DiceSource, EngineError, GameConfig, GameRng, InvariantViolation, PlayerId,
    Result,
};
use crate::rules::{Move, MoveEngine, BONUS_TURN_ROLL};

/// Where the turn engine is in its cycle.
///
/// `play_turn` runs a whole turn, so between calls only `AwaitingRoll` and
/// `GameOver` are observable. The intermediate phases show up in the
/// turn's `debug!` events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingRoll,
    AwaitingChoice { roll: u8 },
    Resolving { roll: u8, chosen: Option<Move> },
    GameOver { winner: PlayerId },
}

/// A marble sent back to its owner's bench.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub victim: PlayerId,
    pub at: HoleId,
    pub sent_to: HoleId,
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Value of the turn counter when the turn started.
    pub turn: u32,
    pub player: PlayerId,
    pub roll: u8,
    pub legal_moves: Vec<Move>,
    pub chosen: Option<Move>,
    pub capture: Option<Capture>,
    /// Set when this turn ended the game.
    pub winner: Option<PlayerId>,
}

/// How a call to [`Game::run_bounded`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Finished { winner: PlayerId, turns: u32 },
    /// The driver's turn bound was hit before anyone won.
    TurnLimit { turns: u32 },
}

impl GameOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Finished { winner, .. } => Some(*winner),
            GameOutcome::TurnLimit { .. } => None,
        }
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        match self {
            GameOutcome::Finished { turns, .. } | GameOutcome::TurnLimit { turns } => *turns,
        }
    }
}

/// One simulated match.
#[derive(Debug)]
pub struct Game<D: DiceSource = GameRng> {
    config: GameConfig,
    board: BoardState,
    active_player: PlayerId,
    turn_counter: u32,
    phase: TurnPhase,
    context: GameContext<D>,
}

impl Game<GameRng> {
    /// A fresh game with seeded dice.
    pub fn seeded(config: GameConfig, seed: u64) -> std::result::Result<Self, ConfigError> {
        Self::new(config, GameContext::seeded(seed))
    }
}

impl<D: DiceSource> Game<D> {
    /// A fresh game: every marble on its owner's bench.
    pub fn new(config: GameConfig, context: GameContext<D>) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let topology = Topology::new(config.num_legs, config.leg_height)?;
        let board = BoardState::new(topology, config.num_players);
        Ok(Self::assemble(config, board, context))
    }

    /// A game resuming from an arbitrary position.
    ///
    /// The board must match the configured geometry and roster and satisfy
    /// the marble-count invariant.
    pub fn with_board(config: GameConfig, board: BoardState, context: GameContext<D>) -> Result<Self> {
        config.validate()?;
        let topology = Topology::new(config.num_legs, config.leg_height)?;
        if *board.topology() != topology || board.num_players() != config.num_players {
            return Err(ConfigError::BoardMismatch {
                legs: board.topology().num_legs(),
                height: board.topology().leg_height(),
                players: board.num_players(),
            }
            .into());
        }
        board.validate()?;
        let mut game = Self::assemble(config, board, context);
        if let Some(&winner) = game.board.winners().first() {
            game.phase = TurnPhase::GameOver { winner };
        }
        Ok(game)
    }

    fn assemble(config: GameConfig, board: BoardState, context: GameContext<D>) -> Self {
        Self {
            active_player: config.first_player,
            config,
            board,
            turn_counter: 0,
            phase: TurnPhase::AwaitingRoll,
            context,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.board.winners()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Legal moves for the active player with `roll`.
    pub fn legal_moves(&self, roll: u8) -> Result<Vec<Move>> {
        MoveEngine::new(&self.board).legal_moves(self.active_player, roll)
    }

    /// Play exactly one turn.
    pub fn play_turn<P: DecisionPolicy + ?Sized>(&mut self, policy: &mut P) -> Result<TurnRecord> {
        if let Some(winner) = self.winner() {
            return Err(EngineError::GameFinished { winner });
        }
        let span = self.context.span.clone();
        let _entered = span.enter();

        let player = self.active_player;
        let turn = self.turn_counter;
        self.board.validate_player(player)?;

        self.phase = TurnPhase::AwaitingRoll;
        let roll = self.context.dice.roll_die();
        let legal_moves = self.legal_moves(roll)?;
        self.phase = TurnPhase::AwaitingChoice { roll };
        debug!(turn, player = player.0, phase = ?self.phase, moves = ?legal_moves, "awaiting choice");

        let chosen = policy.choose(player, &legal_moves, roll, &self.board);
        self.phase = TurnPhase::Resolving { roll, chosen };
        debug!(player = player.0, policy = policy.name(), phase = ?self.phase, "resolving");

        let capture = match chosen {
            Some(mv) => {
                MoveEngine::new(&self.board).validate_choice(player, roll, mv, &legal_moves)?;
                self.execute_move(mv)?
            }
            None => None,
        };
        self.turn_counter += 1;
        trace!("\n{}", self.board);

        let winner = self.board.winners().first().copied();
        match winner {
            Some(winner) => {
                self.phase = TurnPhase::GameOver { winner };
                info!(winner = winner.0, turns = self.turn_counter, "game over");
            }
            None => {
                if roll != BONUS_TURN_ROLL {
                    self.active_player = player.next(self.config.num_players);
                }
                self.phase = TurnPhase::AwaitingRoll;
            }
        }

        Ok(TurnRecord {
            turn,
            player,
            roll,
            legal_moves,
            chosen,
            capture,
            winner,
        })
    }

    /// Play until someone wins. Does not guard against games that never end.
    pub fn run<P: DecisionPolicy + ?Sized>(&mut self, policy: &mut P) -> Result<GameOutcome> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(GameOutcome::Finished {
                    winner,
                    turns: self.turn_counter,
                });
            }
            self.play_turn(policy)?;
        }
    }

    /// Play until someone wins or the turn counter reaches `max_turns`.
    pub fn run_bounded<P: DecisionPolicy + ?Sized>(
        &mut self,
        policy: &mut P,
        max_turns: u32,
    ) -> Result<GameOutcome> {
        while self.turn_counter < max_turns {
            if let Some(winner) = self.winner() {
                return Ok(GameOutcome::Finished {
                    winner,
                    turns: self.turn_counter,
                });
            }
            self.play_turn(policy)?;
        }
        if let Some(winner) = self.winner() {
            return Ok(GameOutcome::Finished {
                winner,
                turns: self.turn_counter,
            });
        }
        let _entered = self.context.span.enter();
        warn!(max_turns, "turn limit reached without a winner");
        Ok(GameOutcome::TurnLimit {
            turns: self.turn_counter,
        })
    }

    /// Move a marble, capturing an opposing marble on the landing hole.
    fn execute_move(&mut self, mv: Move) -> Result<Option<Capture>> {
        let mover = self
            .board
            .marble_at(mv.start)
            .ok_or(InvariantViolation::EmptyStart(mv.start))?;

        let mut capture = None;
        if let Some(victim) = self.board.marble_at(mv.finish) {
            if victim.owner() == mover.owner() {
                return Err(InvariantViolation::SelfCapture {
                    player: mover.owner(),
                    hole: mv.finish,
                }
                .into());
            }
            let sent_to = self
                .board
                .first_empty_bench_slot(victim.owner())
                .ok_or(InvariantViolation::BenchFull(victim.owner()))?;
            self.board.clear(mv.finish);
            self.board.place(sent_to, victim)?;
            debug!(
                killer = mover.owner().0,
                victim = victim.owner().0,
                at = %mv.finish,
                "capture"
            );
            capture = Some(Capture {
                victim: victim.owner(),
                at: mv.finish,
                sent_to,
            });
        }

        self.board.clear(mv.start);
        self.board.place(mv.finish, mover)?;
        Ok(capture)
    }
}
