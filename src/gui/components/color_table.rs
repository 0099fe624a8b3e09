// src/gui/components/color_table.rs
//
// Frequency table view. Purely reads App.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading("Colors");
    if app.rows.is_empty() {
        ui.weak("No colors loaded");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(180.0).resizable(true))
        .column(Column::initial(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Color"); });
            header.col(|ui| { ui.strong("Count"); });
            header.col(|ui| { ui.strong("Share"); });
        })
        .body(|mut body| {
            for r in &app.rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(r.color.as_str()); });
                    row.col(|ui| { ui.label(r.count.to_string()); });
                    row.col(|ui| { ui.label(r.share.as_str()); });
                });
            }
        });
}
