// src/ui/stats.rs
//! Header bar with the aggregate usage counters.

use eframe::egui;

use crate::net::types::TokenStats;
use crate::state::AppState;

pub fn show_stats_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.set_min_height(28.0);
        ui.strong("DrillScan");
        ui.separator();

        match &state.stats {
            Some(stats) => {
                ui.label(format!("Requests: {}", stats.total_requests.unwrap_or(0)));
                ui.separator();
                ui.label(format!("Tokens: {}", format_tokens(stats.total_tokens())));
                ui.separator();
                ui.label(format!(
                    "Cost: {}",
                    format_cost(stats.total_cost.unwrap_or(0.0))
                ));
                ui.separator();
                ui.label(format!("Avg/request: {}", format_average(stats)));
                if let Some(model) = &stats.model {
                    ui.separator();
                    ui.weak(model);
                }
                if let Some(refreshed) = &state.stats_refreshed {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(format!("updated {}", refreshed.format("%H:%M:%S")));
                    });
                }
            }
            None => {
                ui.weak("Usage statistics unavailable");
            }
        }
    });
}

/// Thousands-grouped token count, e.g. `1,234,567`.
pub fn format_tokens(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}

pub fn format_average(stats: &TokenStats) -> String {
    match stats.average_cost() {
        Some(average) => format!("${:.4}", average),
        None => "$0.0000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> TokenStats {
        serde_json::from_str(
            r#"{"total_input_tokens": 100, "total_output_tokens": 50,
                "total_cost": 0.03, "total_requests": 2}"#,
        )
        .unwrap()
    }

    #[test]
    fn token_grouping() {
        assert_eq!(format_tokens(0), "0");
        assert_eq!(format_tokens(150), "150");
        assert_eq!(format_tokens(1000), "1,000");
        assert_eq!(format_tokens(1234567), "1,234,567");
    }

    #[test]
    fn cost_and_average_displays() {
        let stats = sample_stats();
        assert_eq!(format_tokens(stats.total_tokens()), "150");
        assert_eq!(format_cost(stats.total_cost.unwrap()), "$0.0300");
        assert_eq!(format_average(&stats), "$0.0150");
    }

    #[test]
    fn average_shows_literal_zero_without_requests() {
        let stats: TokenStats =
            serde_json::from_str(r#"{"total_cost": 0.03, "total_requests": 0}"#).unwrap();
        assert_eq!(format_average(&stats), "$0.0000");
    }
}
