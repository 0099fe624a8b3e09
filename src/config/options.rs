// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Where (if anywhere) a run upserts its frequency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkKind {
    None,
    Csv,
    Postgres,
}

impl SinkKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(SinkKind::None),
            "csv" => Some(SinkKind::Csv),
            "postgres" | "pg" => Some(SinkKind::Postgres),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub sink: SinkKind,
    /// CSV store location, used when `sink == SinkKind::Csv`
    pub store_path: PathBuf,
    pub log_file: Option<PathBuf>,
    /// Skip `<th>`-only rows instead of failing on them
    pub skip_header_rows: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sink: SinkKind::None,
            store_path: default_store_path(),
            log_file: None,
            skip_header_rows: false,
        }
    }
}

pub fn default_store_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}

pub fn default_log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}
