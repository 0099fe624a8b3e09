// src/config/mod.rs
pub mod consts;
pub mod db;
pub mod options;

pub use db::DbConfig;
pub use options::{RunOptions, SinkKind};
