// config.rs - Simulation configuration

use std::time::Duration;

use crate::error::{Result, SimError};

pub const DEFAULT_HEIGHT: usize = 25;
pub const DEFAULT_WIDTH: usize = 55;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub height: usize,
    pub width: usize,
    /// Time between generations while running.
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SimError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(SimError::InvalidInterval);
        }
        Ok(())
    }
}
