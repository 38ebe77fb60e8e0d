//! How user requests interact with a running simulation, on tokio's paused clock.
use std::sync::Arc;
use std::time::Duration;

use life_core::{GridState, LifeConfig, LifeController, LifeError, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Handle;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(100);

fn running_controller() -> LifeController {
    let state = Arc::new(GridState::new(20, 20));
    let config = LifeConfig::default().with_step_delay(DELAY).unwrap();
    let mut controller = LifeController::new(state, config, Handle::current());
    controller
        .apply_pattern(patterns::find("Blinker").unwrap())
        .unwrap();
    controller.start();
    controller
}

#[tokio::test(start_paused = true)]
async fn clear_stops_the_simulation() {
    let mut controller = running_controller();
    sleep(Duration::from_millis(150)).await;
    assert_eq!(controller.state().generation(), 2);

    controller.clear();
    assert!(!controller.is_running());

    for _ in 0..5 {
        sleep(DELAY).await;
    }
    let snapshot = controller.state().snapshot();
    assert_eq!(snapshot.generation, 0);
    assert_eq!(snapshot.grid.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn randomize_keeps_running() {
    let mut controller = running_controller();
    sleep(Duration::from_millis(150)).await;

    let mut rng = StdRng::seed_from_u64(11);
    controller.randomize_with(&mut rng).unwrap();
    assert!(controller.is_running());
    assert_eq!(controller.state().generation(), 0);

    // Steps continue at t = 200, 300, 400
    sleep(Duration::from_millis(300)).await;
    assert!(controller.is_running());
    assert_eq!(controller.state().generation(), 3);
    controller.stop();
}

#[tokio::test(start_paused = true)]
async fn apply_pattern_stops_the_simulation() {
    let mut controller = running_controller();
    sleep(Duration::from_millis(150)).await;

    controller
        .apply_pattern(patterns::find("Glider").unwrap())
        .unwrap();
    assert!(!controller.is_running());
    let seeded = controller.state().snapshot();

    sleep(Duration::from_millis(500)).await;
    assert_eq!(controller.state().snapshot(), seeded);
    assert_eq!(seeded.generation, 0);
}

#[tokio::test(start_paused = true)]
async fn toggling_a_cell_keeps_running() {
    let mut controller = running_controller();
    sleep(Duration::from_millis(50)).await;

    controller.toggle_cell(0, 0).unwrap();
    assert!(controller.is_running());
    assert!(matches!(
        controller.toggle_cell(20, 0),
        Err(LifeError::OutOfBounds { .. })
    ));
    controller.stop();
}

#[tokio::test(start_paused = true)]
async fn speed_change_is_recorded_in_config() {
    let mut controller = running_controller();
    controller.set_step_delay(Duration::from_millis(40)).unwrap();
    assert_eq!(controller.config().step_delay, Duration::from_millis(40));
    assert_eq!(controller.step_delay(), Duration::from_millis(40));

    assert!(controller.set_step_delay(Duration::ZERO).is_err());
    assert_eq!(controller.config().step_delay, Duration::from_millis(40));
    assert!(!controller.toggle_running());
}
