// src/app.rs
use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;
use rfd::FileDialog;

use crate::config::Settings;
use crate::net::client::ApiClient;
use crate::state::AppState;
use crate::ui;

pub struct DrillScanApp {
    state: AppState,
}

impl DrillScanApp {
    pub fn new(settings: Settings, client: ApiClient) -> Self {
        let mut state = AppState::new(settings, client);
        // Best-effort startup fetch; failures never reach the user.
        state.refresh_stats();
        Self { state }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.state.drag_hover = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() && self.state.pending.is_none() {
            self.state.add_paths(dropped);
        }
    }

    fn browse_files(&mut self) {
        let dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Select CSV Files");
        if let Some(paths) = dialog.pick_files() {
            self.state.add_paths(paths);
        }
    }

    fn render_drag_overlay(&self, ctx: &egui::Context) {
        if !self.state.drag_hover {
            return;
        }
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("drag_overlay"),
        ));
        painter.rect_filled(
            screen,
            0.0,
            egui::Color32::from_rgba_premultiplied(30, 100, 200, 24),
        );
        painter.text(
            screen.center(),
            egui::Align2::CENTER_CENTER,
            "Drop CSV files here",
            egui::FontId::proportional(22.0),
            egui::Color32::from_rgb(160, 200, 255),
        );
    }
}

impl eframe::App for DrillScanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll(Instant::now());
        self.handle_dropped_files(ctx);

        // Keep frames coming while the simulator or the linger timer runs.
        if self.state.pending.is_some() || self.state.completed.is_some() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::stats::show_stats_bar(ui, &self.state);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Service: {}", self.state.settings.api_base_url));
                ui.separator();
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
            });
        });

        let mut browse = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    browse = ui::upload::show_upload_view(ui, &mut self.state);

                    if self.state.pending.is_some() || self.state.completed.is_some() {
                        ui.add_space(12.0);
                        ui::progress::show_progress_panel(ui, &self.state);
                    }

                    if let Some(message) = self.state.error_message.clone() {
                        ui.add_space(12.0);
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.colored_label(egui::Color32::RED, message);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("Dismiss").clicked() {
                                            self.state.error_message = None;
                                        }
                                    },
                                );
                            });
                        });
                    }

                    if self.state.results.is_some() {
                        ui.add_space(12.0);
                        ui::results::show_results_view(ui, &mut self.state);
                    }
                });
        });

        self.render_drag_overlay(ctx);

        if browse {
            self.browse_files();
        }
    }
}
