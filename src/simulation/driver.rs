//! The simulation driver: owns the live grid, the iteration counter, and
//! the periodic ticker

use crate::error::ConfigurationError;
use crate::game_of_life::{next_generation, Grid, Neighborhood, RuleSet};
use crate::simulation::ticker::Ticker;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Fastest tick cadence accepted by `start`, in milliseconds
pub const MIN_TICK_MS: u64 = 50;
/// Slowest tick cadence accepted by `start`, in milliseconds
pub const MAX_TICK_MS: u64 = 500;

/// Whether the driver is accepting edits or ticking automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Playing,
}

/// A published state snapshot: the full grid plus the generation count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub grid: Grid,
    pub iterations: u64,
}

type Subscriber = Box<dyn FnMut(&Frame) + Send>;

struct DriverState {
    grid: Grid,
    neighborhood: Neighborhood,
    rules: RuleSet,
    iterations: u64,
    mode: Mode,
    subscriber: Option<Subscriber>,
}

impl DriverState {
    /// Advance one generation and publish the result.
    ///
    /// The new grid is fully built before the swap, so readers never
    /// observe a partially-updated generation.
    fn advance(&mut self) {
        self.grid = next_generation(&self.grid, self.neighborhood, &self.rules);
        self.iterations += 1;
        self.publish();
    }

    fn publish(&mut self) {
        if let Some(subscriber) = self.subscriber.as_mut() {
            let frame = Frame {
                grid: self.grid.clone(),
                iterations: self.iterations,
            };
            subscriber(&frame);
        }
    }
}

/// Owns the authoritative simulation state and drives it, either manually
/// via [`step`](SimulationDriver::step) or periodically between
/// [`start`](SimulationDriver::start) and [`stop`](SimulationDriver::stop).
///
/// All mutation goes through the driver's methods; the subscriber callback
/// observes every state change as a fully-formed [`Frame`]. The callback
/// runs with the driver's internal lock held and must not call back into
/// the driver.
pub struct SimulationDriver {
    state: Arc<Mutex<DriverState>>,
    ticker: Option<Ticker>,
}

impl SimulationDriver {
    /// Create a driver holding an all-dead grid, in editing mode, with the
    /// iteration counter at 0 and classic Moore/B3/S23 rules.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigurationError> {
        let grid = Grid::new(rows, columns)?;
        Ok(Self {
            state: Arc::new(Mutex::new(DriverState {
                grid,
                neighborhood: Neighborhood::default(),
                rules: RuleSet::default(),
                iterations: 0,
                mode: Mode::Editing,
                subscriber: None,
            })),
            ticker: None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, DriverState> {
        // A panic inside a tick poisons the lock; the state itself is
        // still consistent because advance swaps fully-built grids.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register the single renderer callback.
    ///
    /// Receives a frame after every successful tick, step, resize, clear,
    /// or cell toggle.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: FnMut(&Frame) + Send + 'static,
    {
        self.lock().subscriber = Some(Box::new(subscriber));
    }

    /// Snapshot of the current grid
    pub fn grid(&self) -> Grid {
        self.lock().grid.clone()
    }

    /// Generations elapsed since the last initialize, resize, or clear
    pub fn iterations(&self) -> u64 {
        self.lock().iterations
    }

    /// Current driver mode
    pub fn mode(&self) -> Mode {
        self.lock().mode
    }

    /// Grid dimensions as `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        let state = self.lock();
        (state.grid.rows, state.grid.columns)
    }

    /// Flip a single cell while editing.
    ///
    /// A no-op while playing (edits are disallowed during automatic play)
    /// and for out-of-range coordinates.
    pub fn toggle_cell(&self, row: usize, column: usize) {
        let mut state = self.lock();
        if state.mode == Mode::Editing {
            state.grid.toggle(row, column);
            state.publish();
        }
    }

    /// Replace the active neighborhood and rule set.
    ///
    /// Takes effect on the next tick or step; the current grid is
    /// untouched.
    pub fn configure(&self, neighborhood: Neighborhood, rules: RuleSet) {
        let mut state = self.lock();
        state.neighborhood = neighborhood;
        state.rules = rules;
    }

    /// Replace the grid with a fresh all-dead grid of the requested
    /// dimensions.
    ///
    /// Stops any running ticker, forces editing mode, and resets the
    /// iteration counter to 0. On invalid dimensions the driver state is
    /// left untouched.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), ConfigurationError> {
        let grid = Grid::new(rows, columns)?;
        self.halt_ticker();

        let mut state = self.lock();
        state.grid = grid;
        state.iterations = 0;
        state.mode = Mode::Editing;
        state.publish();
        Ok(())
    }

    /// Kill every cell, keeping the current dimensions.
    ///
    /// Stops any running ticker, forces editing mode, and resets the
    /// iteration counter to 0.
    pub fn clear(&mut self) {
        self.halt_ticker();

        let mut state = self.lock();
        state.grid = state.grid.cleared();
        state.iterations = 0;
        state.mode = Mode::Editing;
        state.publish();
    }

    /// Begin periodic ticking at the given cadence.
    ///
    /// The interval must lie in the closed range
    /// [`MIN_TICK_MS`]..=[`MAX_TICK_MS`]. Calling `start` while already
    /// playing re-installs the ticker atomically: the old ticker is
    /// stopped and joined before the new cadence takes over, so no tick
    /// from the old cadence fires after this call returns.
    pub fn start(&mut self, interval: Duration) -> Result<(), ConfigurationError> {
        let actual = interval.as_millis() as u64;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&actual) {
            return Err(ConfigurationError::InvalidInterval {
                actual,
                min: MIN_TICK_MS,
                max: MAX_TICK_MS,
            });
        }

        self.halt_ticker();
        self.lock().mode = Mode::Playing;

        let shared = Arc::clone(&self.state);
        self.ticker = Some(Ticker::spawn(interval, move || {
            shared
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .advance();
        }));
        Ok(())
    }

    /// Halt automatic ticking and return to editing mode.
    ///
    /// Deterministic: joins the ticker thread, so no tick fires after
    /// `stop` returns.
    pub fn stop(&mut self) {
        self.halt_ticker();
        self.lock().mode = Mode::Editing;
    }

    /// Advance a single generation manually; identical effect to one tick
    pub fn step(&self) {
        self.lock().advance();
    }

    fn halt_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

impl Drop for SimulationDriver {
    fn drop(&mut self) {
        self.halt_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    fn blinker_driver() -> SimulationDriver {
        let driver = SimulationDriver::new(5, 5).unwrap();
        for column in 1..4 {
            driver.toggle_cell(2, column);
        }
        driver
    }

    #[test]
    fn test_initialize_all_dead() {
        let driver = SimulationDriver::new(4, 7).unwrap();
        let grid = driver.grid();
        assert_eq!(grid.rows, 4);
        assert_eq!(grid.columns, 7);
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.is_empty());
        assert_eq!(driver.iterations(), 0);
        assert_eq!(driver.mode(), Mode::Editing);
    }

    #[test]
    fn test_initialize_rejects_bad_dimensions() {
        assert!(SimulationDriver::new(0, 3).is_err());
        assert!(SimulationDriver::new(3, 0).is_err());
    }

    #[test]
    fn test_step_advances_blinker() {
        let driver = blinker_driver();
        driver.step();
        assert_eq!(driver.iterations(), 1);

        let grid = driver.grid();
        for row in 1..4 {
            assert!(grid.get(row, 2));
        }
        assert_eq!(grid.live_count(), 3);

        driver.step();
        assert_eq!(driver.iterations(), 2);
        for column in 1..4 {
            assert!(driver.grid().get(2, column));
        }
    }

    #[test]
    fn test_subscriber_receives_frames() {
        let driver = blinker_driver();
        let (tx, rx) = mpsc::channel();
        driver.subscribe(move |frame| {
            let _ = tx.send(frame.clone());
        });

        driver.step();
        let frame = rx.try_recv().unwrap();
        assert_eq!(frame.iterations, 1);
        assert_eq!(frame.grid.live_count(), 3);

        driver.toggle_cell(0, 0);
        let frame = rx.try_recv().unwrap();
        assert!(frame.grid.get(0, 0));
        assert_eq!(frame.iterations, 1);
    }

    #[test]
    fn test_resize_resets_everything() {
        let driver = blinker_driver();
        driver.step();
        assert_eq!(driver.iterations(), 1);

        let mut driver = driver;
        driver.resize(6, 3).unwrap();
        assert_eq!(driver.dimensions(), (6, 3));
        assert_eq!(driver.iterations(), 0);
        assert!(driver.grid().is_empty());
        assert_eq!(driver.mode(), Mode::Editing);
    }

    #[test]
    fn test_resize_failure_leaves_state_untouched() {
        let mut driver = blinker_driver();
        driver.step();
        assert!(driver.resize(0, 9).is_err());
        assert_eq!(driver.dimensions(), (5, 5));
        assert_eq!(driver.iterations(), 1);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut driver = blinker_driver();
        driver.step();
        driver.clear();
        assert_eq!(driver.dimensions(), (5, 5));
        assert_eq!(driver.iterations(), 0);
        assert!(driver.grid().is_empty());
    }

    #[test]
    fn test_start_rejects_invalid_interval() {
        let mut driver = SimulationDriver::new(3, 3).unwrap();
        assert_eq!(
            driver.start(Duration::from_millis(0)),
            Err(ConfigurationError::InvalidInterval {
                actual: 0,
                min: MIN_TICK_MS,
                max: MAX_TICK_MS,
            })
        );
        assert_eq!(driver.mode(), Mode::Editing);
        assert!(driver.start(Duration::from_millis(5000)).is_err());
    }

    #[test]
    fn test_toggle_is_noop_while_playing() {
        let mut driver = SimulationDriver::new(5, 5).unwrap();
        driver.start(Duration::from_millis(500)).unwrap();
        assert_eq!(driver.mode(), Mode::Playing);

        driver.toggle_cell(2, 2);
        assert!(driver.grid().is_empty());

        driver.stop();
        driver.toggle_cell(2, 2);
        assert!(driver.grid().get(2, 2));
    }

    #[test]
    fn test_playback_ticks_and_stop_is_deterministic() {
        let mut driver = blinker_driver();
        driver.start(Duration::from_millis(50)).unwrap();
        thread::sleep(Duration::from_millis(180));
        driver.stop();

        let after_stop = driver.iterations();
        assert!(after_stop >= 1);
        assert_eq!(driver.mode(), Mode::Editing);

        // No tick may fire after stop has returned.
        thread::sleep(Duration::from_millis(150));
        assert_eq!(driver.iterations(), after_stop);
    }

    #[test]
    fn test_resize_stops_playback() {
        let mut driver = blinker_driver();
        driver.start(Duration::from_millis(50)).unwrap();
        thread::sleep(Duration::from_millis(120));
        driver.resize(5, 5).unwrap();

        assert_eq!(driver.mode(), Mode::Editing);
        assert_eq!(driver.iterations(), 0);
        thread::sleep(Duration::from_millis(120));
        assert_eq!(driver.iterations(), 0);
    }

    #[test]
    fn test_configure_takes_effect_on_next_step() {
        let driver = blinker_driver();
        driver.configure(Neighborhood::Moore, RuleSet::new([], []));
        driver.step();
        assert!(driver.grid().is_empty());
    }

    #[test]
    fn test_configure_does_not_touch_grid() {
        let driver = blinker_driver();
        let before = driver.grid();
        driver.configure(Neighborhood::VonNeumann, RuleSet::new([1, 2], [2]));
        assert_eq!(driver.grid(), before);
        assert_eq!(driver.iterations(), 0);
    }
}
