// src/scrape/mod.rs
mod colors;

pub use colors::{collect_colors, collect_colors_with, tally_document, tally_document_with, ExtractOptions};
