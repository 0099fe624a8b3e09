// src/core/mod.rs

pub mod html;
pub mod vischars;
pub mod sanitize;

pub use vischars::{visible_text, VisChars};
