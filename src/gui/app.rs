// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{consts::DEFAULT_INPUT, options::{default_log_path, default_store_path}},
    data::ColorFrequencyTable,
    error::ColorError,
    progress::Progress,
    runner,
    scrape::{self, ExtractOptions},
    stats::{self, StatisticsResult},
    store::CsvSink,
};

use super::{progress::GuiProgress, table_model::{self, ColorRow}};

pub fn run(options: eframe::NativeOptions, initial: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    if let Err(e) = crate::log::init(default_log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    eframe::run_native(
        "Color Tally",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(GuiState::new(initial))))),
    )?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the document path field
    pub path_text: String,
    /// Where "Save to store" writes
    pub store_path: PathBuf,
    /// Load on the first frame
    pub autoload: bool,
    /// Skip `<th>`-only rows when loading
    pub skip_header_rows: bool,
}

impl GuiState {
    pub fn new(initial: Option<PathBuf>) -> Self {
        let autoload = initial.is_some();
        let path = initial.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        Self {
            path_text: path.to_string_lossy().into_owned(),
            store_path: default_store_path(),
            autoload,
            skip_header_rows: false,
        }
    }
}

pub struct App {
    pub state: GuiState,
    pub status: String,

    // last successful extraction and whatever statistics it allowed
    pub table: Option<ColorFrequencyTable>,
    pub stats: Option<StatisticsResult>,
    pub rows: Vec<ColorRow>,
}

impl App {
    pub fn new(state: GuiState) -> Self {
        Self {
            state,
            status: s!("Idle"),
            table: None,
            stats: None,
            rows: Vec::new(),
        }
    }

    /// Extract and compute. A table that is too small for statistics is
    /// still shown; the status line says why the report is missing.
    pub fn load(&mut self) {
        let path = PathBuf::from(self.state.path_text.trim());
        let mut progress = GuiProgress::new();
        progress.begin(2);

        self.stats = None;
        let extract = ExtractOptions { skip_header_rows: self.state.skip_header_rows };
        let extracted = scrape::collect_colors_with(&path, extract, Some(&mut progress));
        match extracted {
            Ok(table) => {
                self.rows = table_model::rows_for(&table);
                match stats::calculate(&table) {
                    Ok(s) => {
                        progress.stage_done("statistics");
                        self.stats = Some(s);
                        self.status = format!(
                            "{}: {} colors, {} tokens",
                            progress.into_status(),
                            table.len(),
                            table.total()
                        );
                    }
                    Err(e) => self.status = describe_error(&e),
                }
                self.table = Some(table);
            }
            Err(e) => {
                self.table = None;
                self.rows.clear();
                self.status = describe_error(&e);
            }
        }
        logf!("GUI: {}", self.status);
    }

    pub fn save(&mut self) {
        let Some(table) = &self.table else {
            self.status = s!("Nothing to save");
            return;
        };
        let mut sink = CsvSink::new(&self.state.store_path);
        let mut progress = GuiProgress::new();
        self.status = match runner::save(&mut sink, table, Some(&mut progress)) {
            Ok(()) => format!("Saved {} colors to {}", table.len(), self.state.store_path.display()),
            Err(e) => describe_error(&e),
        };
    }
}

fn describe_error(e: &ColorError) -> String {
    loge!("GUI: {}", e);
    format!("Error: {}", e)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.autoload {
            self.state.autoload = false;
            self.load();
        }

        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            super::components::input_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::report_panel::draw(ui, self);
            ui.separator();
            super::components::color_table::draw(ui, self);
        });
    }
}
