//! The turn engine and the interfaces it consumes.
//!
//! - [`decision`]: the [`DecisionPolicy`] trait move choosers implement.
//! - [`context`]: per-game dice and log span.
//! - [`turn`]: [`Game`], the roll / choose / resolve state machine.

pub mod context;
pub mod decision;
pub mod turn;

pub use context::GameContext;
pub use decision::{policy_fn, DecisionPolicy, FnPolicy};
pub use turn::{Capture, Game, GameOutcome, TurnPhase, TurnRecord};
