// simulation.rs - Timed generation stepping on a tokio task

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time;

use crate::error::LifeError;
use crate::state::GridState;

/// Drives `GridState::advance` every `step_delay` while running.
///
/// Each step waits for the previous one plus the delay, so the cadence is
/// step time + delay. At most one step task exists per loop: starting aborts
/// any leftover task, and stopping both clears the flag and aborts the
/// pending sleep. Every run gets its own flag, so a task from an earlier run
/// can never pass its guard again once that run is stopped.
pub struct SimulationLoop {
    state: Arc<GridState>,
    running: Arc<AtomicBool>,
    step_delay_nanos: Arc<AtomicU64>,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl SimulationLoop {
    pub fn new(state: Arc<GridState>, step_delay: Duration, runtime: Handle) -> Self {
        Self {
            state,
            running: Arc::new(AtomicBool::new(false)),
            step_delay_nanos: Arc::new(AtomicU64::new(to_nanos(step_delay))),
            runtime,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Starts stepping, with the first generation computed right away.
    /// Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.running = Arc::new(AtomicBool::new(true));
        self.task = Some(self.runtime.spawn(run_steps(
            Arc::clone(&self.state),
            Arc::clone(&self.running),
            Arc::clone(&self.step_delay_nanos),
        )));
        info!(
            "simulation started at generation {}, {:?} between steps",
            self.state.generation(),
            self.step_delay()
        );
    }

    /// Stops stepping. No generation is computed after this returns, apart
    /// from one that had already passed its running check.
    pub fn stop(&mut self) {
        let was_running = self.running.swap(false, Ordering::AcqRel);
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if was_running {
            info!(
                "simulation stopped at generation {}",
                self.state.generation()
            );
        }
    }

    /// Flips between running and stopped; returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_nanos(self.step_delay_nanos.load(Ordering::Relaxed))
    }

    /// Changes the pause between steps. A running loop picks it up after its
    /// current sleep.
    pub fn set_step_delay(&mut self, step_delay: Duration) -> Result<(), LifeError> {
        if step_delay.is_zero() {
            return Err(LifeError::InvalidStepDelay);
        }
        self.step_delay_nanos
            .store(to_nanos(step_delay), Ordering::Relaxed);
        debug!("step delay set to {step_delay:?}");
        Ok(())
    }
}

impl Drop for SimulationLoop {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn to_nanos(delay: Duration) -> u64 {
    u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX)
}

async fn run_steps(state: Arc<GridState>, running: Arc<AtomicBool>, step_delay_nanos: Arc<AtomicU64>) {
    while state.advance_while(&running) {
        let delay = Duration::from_nanos(step_delay_nanos.load(Ordering::Relaxed));
        time::sleep(delay).await;
    }
    debug!("simulation task finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn restart_retires_the_previous_run_flag() {
        let state = Arc::new(GridState::new(5, 5));
        let mut sim = SimulationLoop::new(Arc::clone(&state), Duration::from_millis(100), Handle::current());

        sim.start();
        let first_run = Arc::clone(&sim.running);
        sim.stop();
        sim.start();

        assert!(sim.is_running());
        assert!(!Arc::ptr_eq(&first_run, &sim.running));
        assert!(!first_run.load(Ordering::Acquire));

        // A task from the first run that wakes late cannot step any more
        let before = state.generation();
        assert!(!state.advance_while(&first_run));
        assert_eq!(state.generation(), before);
        sim.stop();
    }
}
