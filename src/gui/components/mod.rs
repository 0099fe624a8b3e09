// src/gui/components/mod.rs
pub mod color_table;
pub mod input_bar;
pub mod report_panel;
