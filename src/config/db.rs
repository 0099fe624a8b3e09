// src/config/db.rs
//! Connection parameters for the PostgreSQL sink.
//!
//! Built explicitly and handed to `PostgresSink::new`; nothing here is
//! process-wide. `from_env` reads the `DB_*` variables once, falling back to
//! the defaults in `consts` for anything unset.

use super::consts::*;
use crate::error::{ColorError, Result};

pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dbname: s!(DEFAULT_DB_NAME),
            user: s!(DEFAULT_DB_USER),
            password: s!(DEFAULT_DB_PASSWORD),
            host: s!(DEFAULT_DB_HOST),
            port: DEFAULT_DB_PORT,
        }
    }
}

// Keep the password out of logs and error chains.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` (keyed by the `DB_*` names) on the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_DB_NAME) { cfg.dbname = v; }
        if let Some(v) = lookup(ENV_DB_USER) { cfg.user = v; }
        if let Some(v) = lookup(ENV_DB_PASSWORD) { cfg.password = v; }
        if let Some(v) = lookup(ENV_DB_HOST) { cfg.host = v; }
        if let Some(v) = lookup(ENV_DB_PORT) {
            cfg.port = v.trim().parse().map_err(|_| ColorError::Config {
                parameter: s!(ENV_DB_PORT),
                value: v.clone(),
            })?;
        }
        Ok(cfg)
    }

    pub fn to_pg_config(&self) -> postgres::Config {
        let mut pg = postgres::Config::new();
        pg.dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port);
        pg
    }
}
