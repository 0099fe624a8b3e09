// src/specs/mod.rs
//! # Document "specs"
//!
//! Each spec knows *where the ground truth lives in the HTML* of one kind of
//! document and how to read it robustly. Specs are pure: they take document
//! text and return plain rows; reading files, counting, and persistence live
//! in higher layers (`scrape`, `store`).
//!
//! ## Conventions
//! - **Case-insensitive** tag detection via `core::html`; no full-document regexes.
//! - Tolerate omitted `</td>` / `</tr>` and harmless markup noise (comments,
//!   nested inline tags, quoted attributes containing `>`).
//! - Return **stable shapes**: one entry per `<tr>`, cells as visible text.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → runner::run → scrape::collect_colors → specs::shirt_table::parse_rows
//!                                     ↘ ColorFrequencyTable
//!                      stats::calculate → report::render
//! ```
pub mod shirt_table;
