// src/ui/results.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::net::types::{AnalysisResultRow, FoundKind};
use crate::state::AppState;

const NOT_FOUND_COLOR: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);
const FOUND_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState) {
    let rows = match state.results.clone() {
        Some(rows) => rows,
        None => return,
    };

    let heading = ui.heading("Analysis Results");
    if state.scroll_results {
        heading.scroll_to_me(Some(egui::Align::Min));
        state.scroll_results = false;
    }
    if let Some(count) = state.files_processed {
        ui.weak(format!("{} file(s) processed", count));
    }
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(120.0).at_least(80.0).resizable(true))
        .column(Column::initial(140.0).at_least(80.0).resizable(true))
        .column(Column::initial(140.0).at_least(80.0).resizable(true))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("File Type");
            });
            header.col(|ui| {
                ui.strong("Field");
            });
            header.col(|ui| {
                ui.strong("Found Column");
            });
            header.col(|ui| {
                ui.strong("Comment");
            });
        })
        .body(|mut body| {
            for row_data in &rows {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&row_data.file_type);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.field);
                    });
                    row.col(|ui| {
                        found_cell(ui, row_data);
                    });
                    row.col(|ui| {
                        ui.label(&row_data.comment);
                    });
                });
            }
        });
}

fn found_cell(ui: &mut egui::Ui, row: &AnalysisResultRow) {
    let color = match row.found_kind() {
        FoundKind::NotFound => NOT_FOUND_COLOR,
        FoundKind::Original => egui::Color32::GRAY,
        FoundKind::Named => FOUND_COLOR,
    };
    ui.colored_label(color, &row.found);
}
