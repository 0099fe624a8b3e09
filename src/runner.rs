// src/runner.rs
// One pipeline run: extract → statistics → (optional) store → report.
// Every stage must succeed before the next starts; the report is only
// written once everything else has.

use std::io::Write;
use std::path::Path;

use crate::{
    config::RunOptions,
    data::ColorFrequencyTable,
    error::{ColorError, Result},
    progress::Progress,
    report,
    scrape::{self, ExtractOptions},
    stats::{self, StatisticsResult},
    store::{self, ColorSink},
};

/// What a finished run produced.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub table: ColorFrequencyTable,
    pub stats: StatisticsResult,
}

/// Extract and compute, without storing or printing.
pub fn analyze(path: &Path, progress: Option<&mut (dyn Progress + '_)>) -> Result<Outcome> {
    analyze_with(path, ExtractOptions::default(), progress)
}

pub fn analyze_with(
    path: &Path,
    extract: ExtractOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Outcome> {
    let table = scrape::collect_colors_with(path, extract, progress.as_deref_mut())?;
    let stats = stats::calculate(&table).inspect_err(|e| loge!("Stats: {}", e))?;
    notify!(progress, stage_done("statistics"));
    Ok(Outcome { table, stats })
}

/// Full reference flow, writing the report to `out`.
pub fn run<W: Write>(opts: &RunOptions, out: W, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<Outcome> {
    let mut sink = store::open_sink(opts)?;
    notify!(progress, begin(if sink.is_some() { 4 } else { 3 }));

    let result = run_stages(opts, sink.as_deref_mut(), out, progress.as_deref_mut());

    notify!(progress, finish());
    result
}

fn run_stages<W: Write>(
    opts: &RunOptions,
    sink: Option<&mut (dyn ColorSink + '_)>,
    out: W,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Outcome> {
    logf!("Run: input={}", opts.input.display());
    let extract = ExtractOptions { skip_header_rows: opts.skip_header_rows };
    let outcome = analyze_with(&opts.input, extract, progress.as_deref_mut())?;

    if let Some(sink) = sink {
        save(sink, &outcome.table, progress.as_deref_mut())?;
    }

    report::write_report(out, &outcome.stats).map_err(ColorError::Report)?;
    notify!(progress, stage_done("report"));
    Ok(outcome)
}

/// Upsert `table` into `sink`.
pub fn save(
    sink: &mut dyn ColorSink,
    table: &ColorFrequencyTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    notify!(progress, log(&format!("Saving to {}…", sink.describe())));
    sink.upsert(table).inspect_err(|e| loge!("Store: {} failed: {}", sink.describe(), e))?;
    logf!("Store: saved {} colors to {}", table.len(), sink.describe());
    notify!(progress, stage_done("store"));
    Ok(())
}
