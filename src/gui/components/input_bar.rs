// src/gui/components/input_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Document:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.path_text).desired_width(360.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.checkbox(&mut app.state.skip_header_rows, "Skip header rows");

        if ui.button("Load").clicked() || submitted {
            app.load();
        }

        let can_save = app.table.is_some();
        if ui.add_enabled(can_save, egui::Button::new("Save to store")).clicked() {
            app.save();
        }
    });
}
