// controller.rs - User requests against the shared grid and the step loop

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::LifeConfig;
use crate::error::LifeError;
use crate::patterns::Pattern;
use crate::simulation::SimulationLoop;
use crate::state::{GridState, Snapshot};

/// Front-end entry point: one `GridState` and the `SimulationLoop` stepping it.
///
/// Clearing and applying a pattern stop the simulation first. Randomizing
/// and cell toggles leave it running.
pub struct LifeController {
    state: Arc<GridState>,
    simulation: SimulationLoop,
    config: LifeConfig,
}

impl LifeController {
    pub fn new(state: Arc<GridState>, config: LifeConfig, runtime: Handle) -> Self {
        let simulation = SimulationLoop::new(Arc::clone(&state), config.step_delay, runtime);
        Self {
            state,
            simulation,
            config,
        }
    }

    pub fn state(&self) -> &Arc<GridState> {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    pub fn config(&self) -> LifeConfig {
        self.config
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn start(&mut self) {
        self.simulation.start();
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    pub fn toggle_running(&mut self) -> bool {
        self.simulation.toggle()
    }

    pub fn clear(&mut self) {
        self.simulation.stop();
        self.state.clear();
    }

    pub fn randomize(&mut self) -> Result<(), LifeError> {
        self.state.randomize(self.config.live_probability)
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), LifeError> {
        self.state.randomize_with(self.config.live_probability, rng)
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        self.simulation.stop();
        self.state.apply_pattern(pattern)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.state.toggle_cell(row, col)
    }

    pub fn step_delay(&self) -> Duration {
        self.simulation.step_delay()
    }

    pub fn set_step_delay(&mut self, step_delay: Duration) -> Result<(), LifeError> {
        self.simulation.set_step_delay(step_delay)?;
        self.config.step_delay = step_delay;
        Ok(())
    }
}
