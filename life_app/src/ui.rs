// ui.rs - egui rendering and input for LifeApp

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke, Vec2};

use crate::LifeApp;
use life_core::PATTERNS;

const CELL_SIZE: f32 = 10.0;
const SPACING: f32 = 1.0;

const START_COLOR: Color32 = Color32::from_rgb(0x18, 0x60, 0xB6);
const STOP_COLOR: Color32 = Color32::from_rgb(0xEE, 0x36, 0x33);

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.latest();
        let grid = &snapshot.grid;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let (label, fill) = if self.is_running() {
                    ("STOP", STOP_COLOR)
                } else {
                    ("START", START_COLOR)
                };
                let start = egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(fill);
                if ui.add(start).clicked() {
                    self.toggle_running();
                }

                if ui.button("CLEAR").clicked() {
                    self.clear_grid();
                }

                if ui.button("RANDOMIZE").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", snapshot.generation));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.step_delay().as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.set_step_delay(Duration::from_secs_f32(1.0 / speed));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead, even while the simulation runs.");

            ui.separator();

            // Grid
            let pitch = CELL_SIZE + SPACING;
            let (rows, cols) = (grid.rows(), grid.cols());
            let total_size = Vec2::new(
                pitch * cols as f32 - SPACING,
                pitch * rows as f32 - SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::GRAY);

            for row in 0..rows {
                for col in 0..cols {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                        Vec2::splat(CELL_SIZE),
                    );
                    let color = if grid.get(row, col) == Some(true) {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 0.0, color);
                }
            }
            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::GRAY));

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let row = (offset.y / pitch) as usize;
                        let col = (offset.x / pitch) as usize;
                        if row < rows && col < cols {
                            self.toggle_cell(row, col);
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = rows * cols;
            let live_cells = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total.max(1) as f32 * 100.0
                ));
            });
        });
    }
}
