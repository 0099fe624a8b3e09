// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use color_tally::config::consts::{WINDOW_H, WINDOW_W};
use color_tally::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Color Tally")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };
    let initial = std::env::args().nth(1).map(PathBuf::from);

    if let Err(e) = gui::run(options, initial) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
