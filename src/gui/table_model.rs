// src/gui/table_model.rs
//! Display rows for the frequency table: most worn first, ties by name,
//! with each colour's share of all tokens pre-formatted.

use crate::data::ColorFrequencyTable;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorRow {
    pub color: String,
    pub count: u64,
    pub share: String,
}

pub fn rows_for(table: &ColorFrequencyTable) -> Vec<ColorRow> {
    let total = table.total();
    let mut entries: Vec<(&str, u64)> = table.iter().collect();
    // name order is already ascending; a stable sort keeps it within equal counts
    entries.sort_by_key(|&(_, n)| std::cmp::Reverse(n));

    entries
        .into_iter()
        .map(|(color, count)| ColorRow {
            color: if color.is_empty() { s!("(empty)") } else { s!(color) },
            count,
            share: if total == 0 {
                s!("-")
            } else {
                format!("{:.1}%", count as f64 * 100.0 / total as f64)
            },
        })
        .collect()
}
