// src/store/pg.rs
// PostgreSQL sink: table `colors (color VARCHAR PRIMARY KEY, frequency INT)`.
// One connection per call, dropped on every exit path; one transaction per upsert.

use ::postgres::{Client, NoTls};

use super::ColorSink;
use crate::config::{consts::DB_TABLE, DbConfig};
use crate::data::ColorFrequencyTable;
use crate::error::StorageError;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS colors (color VARCHAR PRIMARY KEY, frequency INT)";

const UPSERT: &str = "
    INSERT INTO colors (color, frequency)
    VALUES ($1, $2)
    ON CONFLICT (color) DO UPDATE SET frequency = EXCLUDED.frequency
";

const SELECT_ALL: &str = "SELECT color, frequency FROM colors";

#[derive(Clone, Debug)]
pub struct PostgresSink {
    config: DbConfig,
}

impl PostgresSink {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DbConfig { &self.config }

    fn connect(&self) -> Result<Client, StorageError> {
        logd!("Store: connecting to {}:{}/{}", self.config.host, self.config.port, self.config.dbname);
        self.config
            .to_pg_config()
            .connect(NoTls)
            .map_err(StorageError::Connect)
    }
}

/// `INT` is 32-bit; reject anything larger before touching the database.
fn to_db_rows(table: &ColorFrequencyTable) -> Result<Vec<(&str, i32)>, StorageError> {
    table
        .iter()
        .map(|(color, n)| {
            i32::try_from(n)
                .map(|freq| (color, freq))
                .map_err(|_| StorageError::FrequencyOutOfRange { color: s!(color), frequency: n })
        })
        .collect()
}

impl ColorSink for PostgresSink {
    fn upsert(&mut self, table: &ColorFrequencyTable) -> Result<(), StorageError> {
        let rows = to_db_rows(table)?;
        let mut client = self.connect()?;
        client.batch_execute(CREATE_TABLE)?;

        let mut tx = client.transaction()?;
        let stmt = tx.prepare(UPSERT)?;
        for &(color, freq) in &rows {
            tx.execute(&stmt, &[&color, &freq])?;
        }
        tx.commit()?;

        logf!("Store: upserted {} colors into {}", rows.len(), DB_TABLE);
        Ok(())
    }

    fn load(&mut self) -> Result<ColorFrequencyTable, StorageError> {
        let mut client = self.connect()?;
        client.batch_execute(CREATE_TABLE)?;

        let mut table = ColorFrequencyTable::new();
        for (i, row) in client.query(SELECT_ALL, &[])?.iter().enumerate() {
            let color: String = row.try_get(0)?;
            let freq: Option<i32> = row.try_get(1)?;
            let n = freq
                .and_then(|f| u64::try_from(f).ok())
                .ok_or_else(|| StorageError::Corrupt {
                    store: format!("postgres table {}", DB_TABLE),
                    row: i + 1,
                    reason: format!("frequency {:?} for {:?} is not a count", freq, color),
                })?;
            table.set(color, n);
        }
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("postgres {}@{}:{}/{}", self.config.user, self.config.host, self.config.port, self.config.dbname)
    }
}
