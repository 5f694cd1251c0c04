//! Simulation driving: playback state machine and periodic ticking

pub mod driver;
pub mod ticker;

pub use driver::{Frame, Mode, SimulationDriver, MAX_TICK_MS, MIN_TICK_MS};
pub use ticker::Ticker;
