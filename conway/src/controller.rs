// controller.rs - Owns the simulation state and sequences every transition

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::config::{DEFAULT_TICK_INTERVAL, SimulationConfig};
use crate::engine::GridEngine;
use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::ticker::Ticker;

/// Holds the current generation, the run flag and the step counter.
///
/// The grid is never edited in place. Every transition builds a new grid
/// and swaps it in, so a `snapshot` taken by a reader stays consistent.
/// The ticker is active exactly while `running` is true.
#[derive(Debug)]
pub struct SimulationController<T: Ticker> {
    engine: GridEngine,
    grid: Arc<Grid>,
    running: bool,
    step_count: u64,
    tick_interval: Duration,
    ticker: T,
}

impl<T: Ticker> SimulationController<T> {
    pub fn new(height: usize, width: usize, ticker: T) -> Result<Self> {
        Ok(Self::build(
            Grid::new(height, width)?,
            DEFAULT_TICK_INTERVAL,
            ticker,
        ))
    }

    pub fn from_config(config: &SimulationConfig, ticker: T) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(
            Grid::new(config.height, config.width)?,
            config.tick_interval,
            ticker,
        ))
    }

    fn build(grid: Grid, tick_interval: Duration, mut ticker: T) -> Self {
        ticker.stop();
        debug!(
            "controller created: {}x{} grid, tick every {tick_interval:?}",
            grid.height(),
            grid.width()
        );
        Self {
            engine: GridEngine::new(),
            grid: Arc::new(grid),
            running: false,
            step_count: 0,
            tick_interval,
            ticker,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared handle to the current generation, unaffected by later transitions.
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Sets one cell. Run state and step counter are untouched.
    pub fn toggle_cell(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        match self.grid.with_cell(row, col, value) {
            Ok(next) => {
                self.grid = Arc::new(next);
                Ok(())
            }
            Err(err) => {
                warn!("toggle rejected: {err}");
                Err(err)
            }
        }
    }

    /// Advances one generation, whether running or not.
    pub fn step(&mut self) {
        let next = self.engine.next_generation(&self.grid);
        self.grid = Arc::new(next);
        self.step_count += 1;
        trace!("step {}", self.step_count);
    }

    pub fn set_running(&mut self, running: bool) {
        if running == self.running {
            return;
        }
        self.running = running;
        if running {
            self.ticker.start(self.tick_interval);
            debug!("simulation started at step {}", self.step_count);
        } else {
            self.ticker.stop();
            debug!("simulation stopped at step {}", self.step_count);
        }
    }

    /// Stops the simulation and clears the grid back to generation 0.
    pub fn reset(&mut self) {
        self.set_running(false);
        let (height, width) = self.dimensions();
        self.grid = Arc::new(Self::blank(height, width));
        self.step_count = 0;
        debug!("simulation reset");
    }

    /// Replaces the grid with an all-dead one of new dimensions.
    ///
    /// The simulation is stopped (tearing down the tick task) but the step
    /// counter carries on. Invalid dimensions leave everything unchanged.
    pub fn reconfigure(&mut self, height: usize, width: usize) -> Result<()> {
        let grid = Grid::new(height, width)
            .inspect_err(|err| warn!("reconfigure rejected: {err}"))?;
        self.set_running(false);
        self.grid = Arc::new(grid);
        debug!("grid reconfigured to {height}x{width}");
        Ok(())
    }

    /// Swaps in a prepared grid, e.g. a pattern or a random soup. It must
    /// match the current dimensions.
    pub fn replace_grid(&mut self, grid: Grid) -> Result<()> {
        let expected = self.dimensions();
        let found = grid.dimensions();
        if found != expected {
            let err = SimError::DimensionMismatch { expected, found };
            warn!("replace rejected: {err}");
            return Err(err);
        }
        self.grid = Arc::new(grid);
        Ok(())
    }

    /// Runs one generation for every tick that has come due. Returns the
    /// number of generations performed.
    pub fn pump(&mut self) -> u64 {
        let mut performed = 0;
        while self.running && self.ticker.try_tick() {
            self.step();
            performed += 1;
        }
        performed
    }

    // Dimensions here always come from an existing grid.
    fn blank(height: usize, width: usize) -> Grid {
        Grid::new(height, width).unwrap_or_else(|_| Grid::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::ManualTicker;

    fn controller(height: usize, width: usize) -> SimulationController<ManualTicker> {
        SimulationController::new(height, width, ManualTicker::new()).unwrap()
    }

    fn blinker() -> SimulationController<ManualTicker> {
        let mut c = controller(5, 5);
        for col in 1..=3 {
            c.toggle_cell(2, col, true).unwrap();
        }
        c
    }

    #[test]
    fn starts_stopped_and_blank() {
        let c = controller(4, 6);
        assert!(!c.is_running());
        assert_eq!(c.step_count(), 0);
        assert_eq!(c.dimensions(), (4, 6));
        assert_eq!(c.grid().live_cells(), 0);
        assert!(!c.ticker().is_active());
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let err = SimulationController::new(0, 3, ManualTicker::new()).unwrap_err();
        assert_eq!(err, SimError::InvalidDimensions { height: 0, width: 3 });
    }

    #[test]
    fn toggle_changes_only_that_cell() {
        let mut c = controller(3, 3);
        c.set_running(true);
        c.toggle_cell(1, 2, true).unwrap();
        assert_eq!(c.grid().live_coordinates(), vec![(1, 2)]);
        assert!(c.is_running());
        assert_eq!(c.step_count(), 0);
        assert!(c.ticker().is_active());
        assert_eq!(c.ticker().starts(), 1);

        c.ticker_mut().fire(1);
        c.toggle_cell(1, 2, false).unwrap();
        assert_eq!(c.grid().live_cells(), 0);
        assert_eq!(c.ticker().pending(), 1);
        assert_eq!(c.ticker().starts(), 1);
    }

    #[test]
    fn out_of_range_toggle_leaves_grid_intact() {
        let mut c = blinker();
        let before = c.snapshot();
        assert!(matches!(
            c.toggle_cell(5, 0, true),
            Err(SimError::OutOfRange { row: 5, col: 0, .. })
        ));
        assert_eq!(*c.grid(), *before);
    }

    #[test]
    fn step_advances_and_counts() {
        let mut c = blinker();
        c.step();
        assert_eq!(c.step_count(), 1);
        assert_eq!(c.grid().live_coordinates(), vec![(1, 2), (2, 2), (3, 2)]);
        c.step();
        assert_eq!(c.step_count(), 2);
        assert_eq!(c.grid().live_coordinates(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn manual_step_works_while_running() {
        let mut c = blinker();
        c.set_running(true);
        c.step();
        assert_eq!(c.step_count(), 1);
        assert!(c.is_running());
    }

    #[test]
    fn snapshots_survive_later_transitions() {
        let mut c = blinker();
        let before = c.snapshot();
        c.step();
        c.toggle_cell(0, 0, true).unwrap();
        assert_eq!(before.live_coordinates(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn each_tick_is_one_generation() {
        let mut c = blinker();
        c.set_running(true);
        c.ticker_mut().fire(7);
        assert_eq!(c.pump(), 7);
        assert_eq!(c.step_count(), 7);
        assert_eq!(c.pump(), 0);
        // Odd number of generations leaves the blinker vertical
        assert_eq!(c.grid().live_coordinates(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn no_ticks_after_stop() {
        let mut c = blinker();
        c.set_running(true);
        c.ticker_mut().fire(2);
        c.set_running(false);
        assert!(!c.ticker().is_active());
        c.ticker_mut().fire(10);
        assert_eq!(c.pump(), 0);
        assert_eq!(c.step_count(), 0);
    }

    #[test]
    fn set_running_only_restarts_on_transition() {
        let mut c = controller(3, 3);
        c.set_running(true);
        c.set_running(true);
        assert_eq!(c.ticker().starts(), 1);
        assert_eq!(c.ticker().period(), Some(DEFAULT_TICK_INTERVAL));

        c.set_running(false);
        c.set_running(true);
        assert_eq!(c.ticker().starts(), 2);
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut c = blinker();
        c.set_running(true);
        c.step();
        c.step();

        c.reset();
        let once = (c.grid().clone(), c.step_count(), c.is_running());
        c.reset();
        let twice = (c.grid().clone(), c.step_count(), c.is_running());

        assert_eq!(once, twice);
        assert_eq!(once.0.live_cells(), 0);
        assert_eq!(once.0.dimensions(), (5, 5));
        assert_eq!(once.1, 0);
        assert!(!once.2);
        assert!(!c.ticker().is_active());
    }

    #[test]
    fn reconfigure_stops_and_keeps_counter() {
        let mut c = blinker();
        c.step();
        c.set_running(true);

        c.reconfigure(8, 12).unwrap();
        assert_eq!(c.dimensions(), (8, 12));
        assert_eq!(c.grid().live_cells(), 0);
        assert!(!c.is_running());
        assert!(!c.ticker().is_active());
        assert_eq!(c.step_count(), 1);
    }

    #[test]
    fn reset_uses_reconfigured_dimensions() {
        let mut c = controller(3, 3);
        c.reconfigure(6, 2).unwrap();
        c.reset();
        assert_eq!(c.dimensions(), (6, 2));
    }

    #[test]
    fn failed_reconfigure_has_no_effect() {
        let mut c = blinker();
        c.set_running(true);
        assert!(c.reconfigure(0, 4).is_err());
        assert_eq!(c.dimensions(), (5, 5));
        assert_eq!(c.grid().live_cells(), 3);
        assert!(c.is_running());
        assert!(c.ticker().is_active());
    }

    #[test]
    fn replace_grid_checks_dimensions() {
        let mut c = controller(3, 3);
        let wrong = Grid::new(4, 3).unwrap();
        assert_eq!(
            c.replace_grid(wrong),
            Err(SimError::DimensionMismatch {
                expected: (3, 3),
                found: (4, 3)
            })
        );
        let right = Grid::from_cells(3, 3, &[(1, 1)]).unwrap();
        c.replace_grid(right.clone()).unwrap();
        assert_eq!(*c.grid(), right);
    }

    #[test]
    fn from_config_uses_interval() {
        let config = SimulationConfig::new(4, 4).with_tick_interval(Duration::from_millis(50));
        let mut c = SimulationController::from_config(&config, ManualTicker::new()).unwrap();
        c.set_running(true);
        assert_eq!(c.ticker().period(), Some(Duration::from_millis(50)));
    }
}
