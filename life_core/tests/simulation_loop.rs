//! Timing behaviour of the simulation loop, run against tokio's paused clock.
use std::sync::Arc;
use std::time::Duration;

use life_core::{GridState, LifeError, SimulationLoop, patterns};
use tokio::runtime::Handle;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(100);

fn blinker_loop() -> (Arc<GridState>, SimulationLoop) {
    let state = Arc::new(GridState::new(11, 11));
    state
        .apply_pattern(patterns::find("Blinker").unwrap())
        .unwrap();
    let sim = SimulationLoop::new(Arc::clone(&state), DELAY, Handle::current());
    (state, sim)
}

#[tokio::test(start_paused = true)]
async fn steps_immediately_then_every_delay() {
    let (state, mut sim) = blinker_loop();
    assert!(!sim.is_running());

    sim.start();
    sleep(Duration::from_millis(350)).await;

    // Steps at t = 0, 100, 200, 300
    assert_eq!(state.snapshot().generation, 4);
    assert!(sim.is_running());
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_the_grid() {
    let (state, mut sim) = blinker_loop();
    sim.start();
    sleep(Duration::from_millis(250)).await;
    sim.stop();
    let frozen = state.snapshot();

    for _ in 0..10 {
        sleep(DELAY).await;
    }

    assert_eq!(frozen.generation, 3);
    assert_eq!(state.snapshot(), frozen);
    assert!(!sim.is_running());
}

#[tokio::test(start_paused = true)]
async fn start_twice_keeps_single_cadence() {
    let (state, mut sim) = blinker_loop();
    sim.start();
    sim.start();
    sleep(Duration::from_millis(250)).await;

    assert_eq!(state.snapshot().generation, 3);
}

#[tokio::test(start_paused = true)]
async fn restart_replaces_previous_task() {
    let (state, mut sim) = blinker_loop();
    sim.start();
    sleep(Duration::from_millis(150)).await;
    sim.stop();
    sim.start();
    sleep(Duration::from_millis(250)).await;

    // Two steps before the restart (t = 0, 100), three after (t = 150, 250, 350)
    assert_eq!(state.snapshot().generation, 5);
}

#[tokio::test(start_paused = true)]
async fn toggle_flips_run_state() {
    let (state, mut sim) = blinker_loop();
    assert!(sim.toggle());
    sleep(Duration::from_millis(50)).await;
    assert!(!sim.toggle());
    sleep(Duration::from_millis(500)).await;

    assert_eq!(state.snapshot().generation, 1);
}

#[tokio::test(start_paused = true)]
async fn delay_change_applies_to_running_loop() {
    let (state, mut sim) = blinker_loop();
    sim.start();
    sleep(Duration::from_millis(50)).await;
    sim.set_step_delay(Duration::from_millis(200)).unwrap();
    sleep(Duration::from_millis(300)).await;

    // t = 0 with the old delay, then t = 100 and t = 300
    assert_eq!(state.snapshot().generation, 3);
    assert_eq!(sim.step_delay(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn zero_delay_is_rejected() {
    let (_state, mut sim) = blinker_loop();
    assert_eq!(
        sim.set_step_delay(Duration::ZERO),
        Err(LifeError::InvalidStepDelay)
    );
    assert_eq!(sim.step_delay(), DELAY);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_loop_stops_it() {
    let (state, mut sim) = blinker_loop();
    sim.start();
    sleep(Duration::from_millis(150)).await;
    drop(sim);
    sleep(Duration::from_millis(1000)).await;

    assert_eq!(state.snapshot().generation, 2);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_each_generation() {
    let (state, mut sim) = blinker_loop();
    let mut rx = state.subscribe();
    let start = rx.borrow_and_update().grid.clone();

    sim.start();
    rx.changed().await.unwrap();
    let first = rx.borrow_and_update().clone();
    assert_eq!(first.generation, 1);
    assert_eq!(first.grid, start.advance());

    rx.changed().await.unwrap();
    let second = rx.borrow_and_update().clone();
    assert_eq!(second.generation, 2);
    assert_eq!(second.grid, start);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn edits_between_steps_are_kept() {
    let (state, mut sim) = blinker_loop();
    state.clear();
    sim.start();
    sleep(Duration::from_millis(50)).await;
    state.toggle_cell(0, 0).unwrap();
    sleep(Duration::from_millis(100)).await;
    sim.stop();

    // The lone cell was alive for exactly one step and then died
    let snapshot = state.snapshot();
    assert_eq!(snapshot.generation, 2);
    assert_eq!(snapshot.grid.live_count(), 0);
}
