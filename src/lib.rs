// src/lib.rs
//! Tally shirt colours from an HTML table and report summary statistics.
//!
//! Pipeline: `scrape` (HTML → frequency table) → `stats` → `report`, with an
//! optional `store` sink. `runner` strings the stages together; `cli` and
//! `gui` are the front ends.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod specs;

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod stats;
pub mod store;

pub use data::ColorFrequencyTable;
pub use error::{ColorError, Result, StorageError};
pub use stats::StatisticsResult;
