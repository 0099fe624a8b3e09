// src/store/memory.rs
use super::ColorSink;
use crate::data::ColorFrequencyTable;
use crate::error::StorageError;

/// In-process sink with the same upsert semantics as the durable ones.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    table: ColorFrequencyTable,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self { Self::default() }

    /// Number of successful `upsert` calls.
    pub fn writes(&self) -> usize { self.writes }
}

impl ColorSink for MemorySink {
    fn upsert(&mut self, table: &ColorFrequencyTable) -> Result<(), StorageError> {
        for (color, n) in table.iter() {
            self.table.set(color, n);
        }
        self.writes += 1;
        Ok(())
    }

    fn load(&mut self) -> Result<ColorFrequencyTable, StorageError> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        s!("memory")
    }
}
