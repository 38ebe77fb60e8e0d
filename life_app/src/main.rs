// main.rs - Desktop front end for the Game of Life core
// Grid state and stepping live in life_core; this crate only draws and forwards clicks

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use eframe::egui;
use egui::Color32;
use log::warn;
use tokio::runtime::Runtime;
use tokio::sync::watch;

use life_core::{GridState, LifeConfig, LifeController, PATTERNS, Snapshot};

mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::default();
    config.validate().context("invalid default configuration")?;
    let runtime = Runtime::new().context("failed to start the tokio runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, runtime, config))),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

pub struct LifeApp {
    controller: LifeController,
    frames: watch::Receiver<Snapshot>,

    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    // Declared last so the simulation task is aborted before the runtime shuts down
    _runtime: Runtime,
}

impl LifeApp {
    fn new(cc: &eframe::CreationContext<'_>, runtime: Runtime, config: LifeConfig) -> Self {
        let state = Arc::new(GridState::default());
        let controller = LifeController::new(state, config, runtime.handle().clone());

        // Repaint whenever a new generation is published, not only on input
        let ctx = cc.egui_ctx.clone();
        let mut changes = controller.subscribe();
        runtime.spawn(async move {
            while changes.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            frames: controller.subscribe(),
            controller,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            _runtime: runtime,
        }
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn toggle_running(&mut self) {
        self.controller.toggle_running();
    }

    pub fn clear_grid(&mut self) {
        self.controller.clear();
    }

    pub fn randomize(&mut self) {
        if let Err(err) = self.controller.randomize() {
            warn!("randomize failed: {err}");
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            if let Err(err) = self.controller.apply_pattern(pattern) {
                warn!("cannot place {}: {err}", pattern.name);
            }
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.controller.toggle_cell(row, col) {
            warn!("ignored click: {err}");
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.controller.step_delay()
    }

    pub fn set_step_delay(&mut self, step_delay: Duration) {
        if let Err(err) = self.controller.set_step_delay(step_delay) {
            warn!("speed unchanged: {err}");
        }
    }

    /// Latest published generation, marked as seen.
    pub fn latest(&mut self) -> Snapshot {
        self.frames.borrow_and_update().clone()
    }
}
