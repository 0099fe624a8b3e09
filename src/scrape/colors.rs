// src/scrape/colors.rs
use std::fs;
use std::path::Path;

use crate::{
    core::sanitize::{clean_cell, split_tokens},
    data::ColorFrequencyTable,
    error::{ColorError, Result},
    progress::Progress,
    specs::shirt_table,
};

/// How strictly table rows are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Skip rows made only of `<th>` cells instead of rejecting them.
    pub skip_header_rows: bool,
}

/// Read the document at `path` and tally its colours. Every row must have a
/// second `<td>`, header rows included.
pub fn collect_colors(
    path: &Path,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ColorFrequencyTable> {
    collect_colors_with(path, ExtractOptions::default(), progress)
}

/// `collect_colors` with explicit row handling.
/// The file is read whole and closed before parsing starts.
pub fn collect_colors_with(
    path: &Path,
    opts: ExtractOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ColorFrequencyTable> {
    notify!(progress, log(&format!("Reading {}…", path.display())));
    logd!("Extract: reading {}", path.display());

    let doc = fs::read_to_string(path).map_err(|source| {
        loge!("Extract: cannot read {}: {}", path.display(), source);
        ColorError::DocumentNotFound { path: path.to_path_buf(), source }
    })?;
    logd!("Extract: read {} bytes", doc.len());

    let table = tally_document_with(&doc, opts)?;
    logf!("Extract: {} distinct colors, {} tokens", table.len(), table.total());

    notify!(progress, stage_done("extract"));
    Ok(table)
}

/// Tally colours in already-loaded document text.
///
/// Any row without a second `<td>` aborts the whole tally; no partial table
/// is returned.
pub fn tally_document(doc: &str) -> Result<ColorFrequencyTable> {
    tally_document_with(doc, ExtractOptions::default())
}

pub fn tally_document_with(doc: &str, opts: ExtractOptions) -> Result<ColorFrequencyTable> {
    let mut table = ColorFrequencyTable::new();

    for row in shirt_table::parse_rows(doc) {
        if opts.skip_header_rows && row.is_header() {
            logd!("Extract: skipping header row {}", row.number);
            continue;
        }
        let Some(cell) = row.colors_cell() else {
            loge!("Extract: row {} has {} cell(s)", row.number, row.cells.len());
            return Err(ColorError::MalformedRow { row: row.number, cells: row.cells.len() });
        };
        let cleaned = clean_cell(cell);
        for token in split_tokens(&cleaned) {
            table.record(token);
        }
    }

    Ok(table)
}
