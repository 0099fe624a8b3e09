// src/gui/components/report_panel.rs
use eframe::egui;
use crate::{gui::app::App, report};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading("Report");
    match &app.stats {
        Some(s) => {
            for line in report::lines(s) {
                ui.monospace(line);
            }
        }
        None => {
            ui.weak("No statistics yet");
        }
    }
}
