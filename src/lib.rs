//! Configurable Game of Life simulation engine
//!
//! This library provides the grid state, neighborhood/rule configuration,
//! generation stepping, and a driver with cancellable periodic playback
//! for a two-dimensional cellular automaton. Rendering is left to the
//! caller, which subscribes to state snapshots and drives the engine
//! through [`SimulationDriver`].

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::ConfigurationError;
pub use game_of_life::{Grid, Neighborhood, RuleSet};
pub use simulation::{Frame, Mode, SimulationDriver};

/// Create a driver over a fresh all-dead grid with the iteration counter
/// at 0, ready for editing.
pub fn initialize(rows: usize, columns: usize) -> Result<SimulationDriver, ConfigurationError> {
    SimulationDriver::new(rows, columns)
}
