//! The board: hole identifiers, geometry, and marble placement.
//!
//! - [`HoleId`] is a closed set of hole kinds (track, bench, endzone, yolo).
//! - [`Topology`] derives every geometric fact from two parameters.
//! - [`BoardState`] owns where the marbles are.

pub mod hole;
pub mod state;
pub mod topology;

pub use hole::{HoleId, Marble};
pub use state::BoardState;
pub use topology::Topology;
