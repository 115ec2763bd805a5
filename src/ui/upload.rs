// src/ui/upload.rs
use eframe::egui;

use crate::state::AppState;

/// Drop zone, file list and the Analyze/Clear actions. Returns true when
/// the user asked to browse for files (the dialog is opened by the app so
/// it doesn't block inside a layout closure).
pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut browse = false;

    ui.heading("Drill Data Analysis");
    ui.label("Upload drilling CSV files for automated column identification.");
    ui.add_space(8.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label("📂 Drag CSV files anywhere in this window");
                ui.add_space(4.0);
                if ui.button("📁 Browse...").clicked() {
                    browse = true;
                }
            });
        });

    if let Some(message) = state.selection_error.clone() {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::RED, message);
            if ui.small_button("✖").clicked() {
                state.selection_error = None;
            }
        });
    }

    if !state.selection.is_empty() {
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);
        ui.label(format!("{} file(s) selected:", state.selection.len()));

        let mut remove: Option<usize> = None;
        for (index, file) in state.selection.files().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(&file.name);
                if let Some(size) = file.size {
                    ui.weak(format_size(size));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = ui
                        .button(egui::RichText::new("🗑").color(egui::Color32::RED))
                        .on_hover_text("Remove file");
                    if delete.clicked() {
                        remove = Some(index);
                    }
                });
            });
        }
        if let Some(index) = remove {
            state.remove_file(index);
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if state.pending.is_some() {
            ui.add_enabled(false, egui::Button::new("Analyzing..."));
            ui.add(egui::Spinner::new());
        } else if ui
            .add_enabled(state.can_analyze(), egui::Button::new("▶ Analyze Files"))
            .clicked()
        {
            state.start_analysis(std::time::Instant::now());
        }

        if ui
            .add_enabled(state.pending.is_none(), egui::Button::new("Clear"))
            .clicked()
        {
            state.clear_selection();
        }
    });

    browse
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("({:.1} MB)", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("({:.1} KB)", bytes as f64 / KB as f64)
    } else {
        format!("({} B)", bytes)
    }
}
