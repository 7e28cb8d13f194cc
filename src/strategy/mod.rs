//! Built-in decision policies.
//!
//! - [`heuristics`]: single-rule [`Strategy`] heuristics and [`RandomPolicy`].
//! - [`chain`]: [`StrategyChain`] priority lists and [`PerPlayer`] seating.

pub mod chain;
pub mod heuristics;

pub use chain::{BoxedPolicy, PerPlayer, StrategyChain};
pub use heuristics::{RandomPolicy, Strategy};
