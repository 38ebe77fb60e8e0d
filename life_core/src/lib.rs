//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! [`Grid`] is an immutable generation with the pure operations (empty,
//! random, toggle, advance). [`GridState`] holds the current generation and
//! publishes each new one; [`SimulationLoop`] steps it on a timer.
//! [`LifeController`] is what a front end talks to.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulation;
pub mod state;

pub use config::{LIVE_PROBABILITY, LifeConfig, NUM_COLS, NUM_ROWS, STEP_DELAY};
pub use controller::LifeController;
pub use error::LifeError;
pub use grid::{Grid, NEIGHBOR_OFFSETS, next_state};
pub use patterns::{PATTERNS, Pattern};
pub use simulation::SimulationLoop;
pub use state::{GridState, Snapshot};
