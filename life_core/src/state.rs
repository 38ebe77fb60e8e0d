// state.rs - The authoritative current generation, shared between the UI and the simulation task

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, trace};
use rand::Rng;
use tokio::sync::watch;

use crate::config::{NUM_COLS, NUM_ROWS};
use crate::error::LifeError;
use crate::grid::Grid;
use crate::patterns::Pattern;

/// A complete generation as published to observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Steps taken since the grid was last cleared, randomized or seeded.
    pub generation: u64,
    pub grid: Grid,
}

/// Owns the current grid. Every mutation replaces the whole grid under the
/// channel's write lock and notifies subscribers, so readers only ever see
/// finished generations.
pub struct GridState {
    tx: watch::Sender<Snapshot>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(NUM_ROWS, NUM_COLS)
    }
}

impl GridState {
    pub fn new(rows: usize, cols: usize) -> Self {
        let (tx, _) = watch::channel(Snapshot {
            generation: 0,
            grid: Grid::empty(rows, cols),
        });
        Self { tx }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Current generation number, read without copying the grid.
    pub fn generation(&self) -> u64 {
        self.tx.borrow().generation
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        let current = self.tx.borrow();
        (current.grid.rows(), current.grid.cols())
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<(), LifeError> {
        let mut result = Ok(());
        self.tx.send_if_modified(|current| match current.grid.toggled(row, col) {
            Ok(next) => {
                current.grid = next;
                true
            }
            Err(err) => {
                result = Err(err);
                false
            }
        });
        if result.is_ok() {
            debug!("toggled cell ({row}, {col})");
        }
        result
    }

    pub fn clear(&self) {
        let (rows, cols) = self.dimensions();
        self.replace(Grid::empty(rows, cols));
        info!("grid cleared");
    }

    pub fn randomize(&self, live_probability: f64) -> Result<(), LifeError> {
        self.randomize_with(live_probability, &mut rand::thread_rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(
        &self,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<(), LifeError> {
        let (rows, cols) = self.dimensions();
        let grid = Grid::random(rows, cols, live_probability, rng)?;
        info!(
            "grid randomized with p={live_probability}: {} live cells",
            grid.live_count()
        );
        self.replace(grid);
        Ok(())
    }

    pub fn apply_pattern(&self, pattern: &Pattern) -> Result<(), LifeError> {
        let (rows, cols) = self.dimensions();
        let grid = pattern.centered(rows, cols)?;
        self.replace(grid);
        info!("applied pattern {}", pattern.name);
        Ok(())
    }

    /// Replaces the grid with its next generation.
    pub fn advance(&self) {
        self.tx.send_modify(step);
    }

    /// Advances only if `running` is set when the write lock is held.
    /// Returns whether a new generation was published.
    pub fn advance_while(&self, running: &AtomicBool) -> bool {
        self.tx.send_if_modified(|current| {
            if !running.load(Ordering::Acquire) {
                return false;
            }
            step(current);
            true
        })
    }

    fn replace(&self, grid: Grid) {
        self.tx.send_replace(Snapshot {
            generation: 0,
            grid,
        });
    }
}

fn step(current: &mut Snapshot) {
    current.grid = current.grid.advance();
    current.generation += 1;
    trace!(
        "generation {}: {} live cells",
        current.generation,
        current.grid.live_count()
    );
}
