//! Conway's Game of Life on a fixed, hard-edged grid.
//!
//! [`GridEngine`] computes generations. [`SimulationController`] owns the
//! current grid, the run flag and the step counter, and is driven by an
//! injected [`Ticker`] while running.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod ticker;

pub use config::SimulationConfig;
pub use controller::SimulationController;
pub use engine::{GridEngine, rule};
pub use error::{Result, SimError};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern, random_grid};
pub use ticker::{ManualTicker, Ticker, TokioTicker};
