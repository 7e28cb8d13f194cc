//! Batch simulation for comparing strategies and board shapes.
//!
//! - [`runner`]: [`run_set`], [`tournament`] and [`sweep_geometry`].
//! - [`report`]: [`GameReport`] and [`SetReport`] statistics.

pub mod report;
pub mod runner;

pub use report::{GameReport, SetReport};
pub use runner::{
    run_set, seat_chains, sweep_geometry, tournament, SetSummary, SimulationConfig, SweepPoint,
};
