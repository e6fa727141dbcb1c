// ui.rs - egui rendering and input for the simulator window

use conway::{PATTERNS, random_grid};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GameOfLife;

const RANDOM_DENSITY: f64 = 1.0 / 3.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.pump();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("Current step: {}", self.controller.step_count()));

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "Stop" } else { "Start" };
                if ui.button(button_text).clicked() {
                    let running = self.controller.is_running();
                    self.controller.set_running(!running);
                }

                if ui.button("Next step").clicked() {
                    self.controller.step();
                }

                if ui.button("Reset").clicked() {
                    self.controller.reset();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    let (height, width) = self.controller.dimensions();
                    match PATTERNS[self.selected_pattern].centered(height, width) {
                        Ok(grid) => self.load(grid),
                        Err(err) => log::warn!("pattern not applied: {err}"),
                    }
                }

                if ui.button("Random").clicked() {
                    let (height, width) = self.controller.dimensions();
                    self.random_seed = self.random_seed.wrapping_add(1);
                    match random_grid(height, width, self.random_seed, RANDOM_DENSITY) {
                        Ok(grid) => self.load(grid),
                        Err(err) => log::warn!("random soup not applied: {err}"),
                    }
                }
            });

            ui.separator();

            let box_size = 15.0;
            let spacing = 0.5;
            let snapshot = self.controller.snapshot();
            let (height, width) = snapshot.dimensions();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::WHITE,
            );

            let clicked_at = response
                .clicked()
                .then(|| response.interact_pointer_pos())
                .flatten();

            for (row, cells) in snapshot.rows().iter().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(160)));

                    if clicked_at.is_some_and(|pos| rect.contains(pos)) {
                        // Always in range: the coordinates come from the grid itself
                        let _ = self.controller.toggle_cell(row, col, !alive);
                    }
                }
            }

            ui.separator();

            let total = height * width;
            let live_cells = snapshot.live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total.max(1) as f32 * 100.0
                ));
            });
        });

        if self.controller.is_running() {
            ctx.request_repaint_after(self.controller.tick_interval() / 4);
        }
    }
}

impl GameOfLife {
    fn load(&mut self, grid: conway::Grid) {
        self.controller.set_running(false);
        if let Err(err) = self.controller.replace_grid(grid) {
            log::warn!("grid not loaded: {err}");
        }
    }
}
