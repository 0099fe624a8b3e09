// src/store/mod.rs
//! Persistence sinks for a `ColorFrequencyTable`.
//!
//! A sink is a key-value store keyed by colour name. `upsert` overwrites the
//! stored count of every colour present in the table and leaves other stored
//! colours alone; `load` reads the whole store back.
//!
//! Nothing here runs unless a caller asks for it: the reference flow only
//! reports, and the CLI wires a sink in with `--sink`.

mod csv_file;
mod memory;
mod pg;

pub use csv_file::CsvSink;
pub use memory::MemorySink;
pub use pg::PostgresSink;

use crate::config::{DbConfig, RunOptions, SinkKind};
use crate::data::ColorFrequencyTable;
use crate::error::{Result, StorageError};

pub trait ColorSink {
    /// Insert or overwrite the count of every colour in `table`.
    /// Either every row lands or none do.
    fn upsert(&mut self, table: &ColorFrequencyTable) -> std::result::Result<(), StorageError>;

    /// Read back everything stored.
    fn load(&mut self) -> std::result::Result<ColorFrequencyTable, StorageError>;

    /// Short human-readable name for logs and status lines.
    fn describe(&self) -> String;
}

/// Build the sink a run asked for, or `None` when persistence is off.
/// The PostgreSQL sink reads its connection parameters from the environment.
pub fn open_sink(opts: &RunOptions) -> Result<Option<Box<dyn ColorSink>>> {
    let sink: Box<dyn ColorSink> = match opts.sink {
        SinkKind::None => return Ok(None),
        SinkKind::Csv => Box::new(CsvSink::new(&opts.store_path)),
        SinkKind::Postgres => Box::new(PostgresSink::new(DbConfig::from_env()?)),
    };
    logd!("Store: using {}", sink.describe());
    Ok(Some(sink))
}
