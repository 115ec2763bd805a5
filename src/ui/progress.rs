// src/ui/progress.rs
use eframe::egui;

use crate::state::AppState;

/// Progress panel: bar, status line and the scrolling log feed. Shown while
/// a request is in flight and briefly after it succeeds.
pub fn show_progress_panel(ui: &mut egui::Ui, state: &AppState) {
    let simulator = match (&state.pending, &state.completed) {
        (Some(pending), _) => &pending.simulator,
        (None, Some(done)) => &done.simulator,
        (None, None) => return,
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(simulator.status());
        ui.add(egui::ProgressBar::new(simulator.percent() / 100.0).show_percentage());
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .id_source("progress_log_scroll")
            .max_height(90.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in simulator.log() {
                    ui.weak(line);
                }
            });
    });
}
