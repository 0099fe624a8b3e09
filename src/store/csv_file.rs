// src/store/csv_file.rs
// Durable local store: one `color,frequency` CSV file.
// Writes go to a temporary sibling which is then renamed over the store,
// so a failed upsert leaves the previous contents intact.

use std::{fs, io, path::{Path, PathBuf}};

use super::ColorSink;
use crate::config::consts::STORE_SEP;
use crate::csv::{parse_rows, write_row};
use crate::data::ColorFrequencyTable;
use crate::error::StorageError;

const HEADER: [&str; 2] = ["color", "frequency"];

#[derive(Clone, Debug)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Current store contents; a missing file is an empty store.
    fn read_existing(&self) -> Result<ColorFrequencyTable, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ColorFrequencyTable::new()),
            Err(e) => return Err(StorageError::file(&self.path, e)),
        };

        let mut table = ColorFrequencyTable::new();
        for (i, row) in parse_rows(&text, STORE_SEP).into_iter().enumerate() {
            if i == 0 && row.iter().map(String::as_str).eq(HEADER) {
                continue;
            }
            let corrupt = |reason: String| StorageError::Corrupt {
                store: self.path.display().to_string(),
                row: i + 1,
                reason,
            };
            let [color, freq] = <[String; 2]>::try_from(row)
                .map_err(|r| corrupt(format!("expected 2 fields, found {}", r.len())))?;
            let n: u64 = freq
                .trim()
                .parse()
                .map_err(|_| corrupt(format!("frequency {freq:?} is not a count")))?;
            table.set(color, n);
        }
        Ok(table)
    }

    fn write_all(&self, table: &ColorFrequencyTable) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::file(parent, e))?;
            }
        }

        let mut buf: Vec<u8> = Vec::new();
        let io_err = |e| StorageError::file(&self.path, e);
        write_row(&mut buf, &HEADER, STORE_SEP).map_err(io_err)?;
        for (color, n) in table.iter() {
            let n = n.to_string();
            write_row(&mut buf, &[color, n.as_str()], STORE_SEP).map_err(io_err)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &buf).map_err(|e| StorageError::file(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StorageError::file(&self.path, e)
        })
    }
}

impl ColorSink for CsvSink {
    fn upsert(&mut self, table: &ColorFrequencyTable) -> Result<(), StorageError> {
        let mut stored = self.read_existing()?;
        for (color, n) in table.iter() {
            stored.set(color, n);
        }
        self.write_all(&stored)?;
        logd!("Store: wrote {} colors to {}", stored.len(), self.path.display());
        Ok(())
    }

    fn load(&mut self) -> Result<ColorFrequencyTable, StorageError> {
        self.read_existing()
    }

    fn describe(&self) -> String {
        format!("csv store {}", self.path.display())
    }
}
