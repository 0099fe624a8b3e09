//! Error types for the colour pipeline and its sinks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can abort a pipeline run.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input document is missing, unreadable, or not valid UTF-8
    #[error("cannot read document {}: {source}", path.display())]
    DocumentNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table row has no second `<td>` cell
    #[error("row {row} is malformed: expected at least 2 cells, found {cells}")]
    MalformedRow { row: usize, cells: usize },

    /// Sample variance needs at least two distinct colours
    #[error("insufficient data: variance needs at least 2 colors, found {colors}")]
    InsufficientData { colors: usize },

    /// Most-frequent/mean/median need at least one colour
    #[error("no colors found in the table")]
    EmptyTable,

    /// Bad environment value or command-line argument
    #[error("invalid configuration: {parameter} = {value:?}")]
    Config { parameter: String, value: String },

    /// The `--log` file could not be prepared
    #[error("cannot open log file {}: {source}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The finished report could not be written out
    #[error("cannot write report: {0}")]
    Report(#[source] io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures raised by a `ColorSink`.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database connection failed: {0}")]
    Connect(#[source] postgres::Error),

    #[error("database query failed: {0}")]
    Query(#[from] postgres::Error),

    #[error("store file {} failed: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored row could not be read back as `(color, frequency)`
    #[error("{store} is corrupt at row {row}: {reason}")]
    Corrupt {
        store: String,
        row: usize,
        reason: String,
    },

    /// Count does not fit the store's integer column
    #[error("frequency {frequency} for color {color:?} exceeds the storage range")]
    FrequencyOutOfRange { color: String, frequency: u64 },
}

impl StorageError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::File { path: path.into(), source }
    }
}
