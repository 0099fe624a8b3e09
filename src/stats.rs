// src/stats.rs
//! Descriptive statistics over a `ColorFrequencyTable`.
//!
//! The "mean" and "median" colours are *position-based*: they are index
//! lookups into the entries sorted by count, not an arithmetic mean or a
//! statistical median. The names are kept because the report prints them
//! under those labels.
//!
//! Tie-breaks are deterministic: among equal counts the lower colour name
//! (code-point order) wins / sorts first.

use std::cmp::Ordering;

use crate::{
    config::consts::TARGET_COLOR,
    data::ColorFrequencyTable,
    error::{ColorError, Result},
};

#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsResult {
    pub most_frequent_color: String,
    pub probability_of_target: f64,
    pub position_based_mean_color: String,
    pub position_based_median_color: String,
    pub count_variance: f64,
}

/// Compute all five statistics, with `"RED"` as the target colour.
///
/// An empty table always reports `EmptyTable`, before the variance check.
pub fn calculate(table: &ColorFrequencyTable) -> Result<StatisticsResult> {
    calculate_for(table, TARGET_COLOR)
}

pub fn calculate_for(table: &ColorFrequencyTable, target: &str) -> Result<StatisticsResult> {
    if table.is_empty() {
        return Err(ColorError::EmptyTable);
    }
    let sorted = sorted_by_count(table);
    Ok(StatisticsResult {
        most_frequent_color: s!(most_frequent_color(table)?),
        probability_of_target: probability_of(table, target),
        position_based_mean_color: s!(mean_of_sorted(&sorted)?),
        position_based_median_color: s!(median_of_sorted(&sorted)?),
        count_variance: count_variance(table)?,
    })
}

/// Colour with the highest count; the lowest name wins a tie.
pub fn most_frequent_color(table: &ColorFrequencyTable) -> Result<&str> {
    let mut best: Option<(&str, u64)> = None;
    // name-ordered walk + strict '>' keeps the first (lowest) name on ties
    for (color, n) in table.iter() {
        match best {
            Some((_, top)) if n <= top => {}
            _ => best = Some((color, n)),
        }
    }
    best.map(|(c, _)| c).ok_or(ColorError::EmptyTable)
}

/// Sum of the counts in floating point, so huge stored counts cannot overflow.
fn total_f64(table: &ColorFrequencyTable) -> f64 {
    table.counts().map(|n| n as f64).sum()
}

/// Share of all tokens that are exactly `color`; `0.0` for an empty table.
pub fn probability_of(table: &ColorFrequencyTable, color: &str) -> f64 {
    let total = total_f64(table);
    if total == 0.0 {
        return 0.0;
    }
    table.get(color) as f64 / total
}

/// Entries ascending by count, then by colour name.
pub fn sorted_by_count(table: &ColorFrequencyTable) -> Vec<(&str, u64)> {
    let mut v: Vec<(&str, u64)> = table.iter().collect();
    v.sort_by(|a, b| match a.1.cmp(&b.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    v
}

/// Colour at index `n / 2` of the count-sorted entries.
pub fn position_based_mean_color(table: &ColorFrequencyTable) -> Result<&str> {
    mean_of_sorted(&sorted_by_count(table))
}

/// Colour at index `n / 2` (odd `n`) or `n / 2 - 1` (even `n`) of the
/// count-sorted entries.
pub fn position_based_median_color(table: &ColorFrequencyTable) -> Result<&str> {
    median_of_sorted(&sorted_by_count(table))
}

fn mean_of_sorted<'a>(sorted: &[(&'a str, u64)]) -> Result<&'a str> {
    let n = sorted.len();
    if n == 0 {
        return Err(ColorError::EmptyTable);
    }
    Ok(sorted[n / 2].0)
}

fn median_of_sorted<'a>(sorted: &[(&'a str, u64)]) -> Result<&'a str> {
    let n = sorted.len();
    if n == 0 {
        return Err(ColorError::EmptyTable);
    }
    let ix = if n % 2 == 1 { n / 2 } else { n / 2 - 1 };
    Ok(sorted[ix].0)
}

/// Sample variance (divisor `n - 1`) of the per-colour counts.
pub fn count_variance(table: &ColorFrequencyTable) -> Result<f64> {
    let n = table.len();
    if n < 2 {
        return Err(ColorError::InsufficientData { colors: n });
    }
    let mean = total_f64(table) / n as f64;
    let ss: f64 = table
        .counts()
        .map(|x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum();
    Ok(ss / (n - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> ColorFrequencyTable {
        pairs.iter().copied().collect()
    }

    #[test]
    fn worked_example() {
        let t = table(&[("RED", 3), ("BLUE", 1), ("GREEN", 1)]);
        let r = calculate(&t).unwrap();
        assert_eq!(r.most_frequent_color, "RED");
        assert!((r.probability_of_target - 0.6).abs() < 1e-12);
        assert_eq!(sorted_by_count(&t), vec![("BLUE", 1), ("GREEN", 1), ("RED", 3)]);
        assert_eq!(r.position_based_mean_color, "GREEN");
        assert_eq!(r.position_based_median_color, "GREEN");
        assert!((r.count_variance - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn even_count_median_takes_lower_middle() {
        let t = table(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);
        assert_eq!(position_based_mean_color(&t).unwrap(), "C");
        assert_eq!(position_based_median_color(&t).unwrap(), "B");
    }

    #[test]
    fn most_frequent_tie_goes_to_lowest_name() {
        let t = table(&[("WHITE", 4), ("BLUE", 4), ("RED", 2)]);
        assert_eq!(most_frequent_color(&t).unwrap(), "BLUE");
    }

    #[test]
    fn empty_table_errors() {
        let t = ColorFrequencyTable::new();
        assert!(matches!(calculate(&t), Err(ColorError::EmptyTable)));
        assert!(matches!(most_frequent_color(&t), Err(ColorError::EmptyTable)));
        assert!(matches!(position_based_mean_color(&t), Err(ColorError::EmptyTable)));
        assert!(matches!(position_based_median_color(&t), Err(ColorError::EmptyTable)));
        assert_eq!(probability_of(&t, "RED"), 0.0);
    }

    #[test]
    fn single_color_has_no_variance() {
        let t = table(&[("BLUE", 5)]);
        assert!(matches!(count_variance(&t), Err(ColorError::InsufficientData { colors: 1 })));
        assert!(matches!(calculate(&t), Err(ColorError::InsufficientData { .. })));
        assert_eq!(most_frequent_color(&t).unwrap(), "BLUE");
        assert_eq!(probability_of(&t, "RED"), 0.0);
        assert_eq!(probability_of(&t, "BLUE"), 1.0);
    }

    #[test]
    fn target_is_case_sensitive() {
        let t = table(&[("red", 2), ("Red", 1), ("BLUE", 1)]);
        assert_eq!(probability_of(&t, "RED"), 0.0);
    }

    #[test]
    fn zero_counts_give_zero_probability() {
        let t = table(&[("RED", 0), ("BLUE", 0)]);
        assert_eq!(probability_of(&t, "RED"), 0.0);
        assert_eq!(count_variance(&t).unwrap(), 0.0);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let t = table(&[("RED", u64::MAX), ("BLUE", u64::MAX)]);
        assert_eq!(probability_of(&t, "RED"), 0.5);
        assert_eq!(count_variance(&t).unwrap(), 0.0);
        assert_eq!(calculate(&t).unwrap().most_frequent_color, "BLUE");
    }

    #[test]
    fn custom_target() {
        let t = table(&[("RED", 1), ("BLUE", 3)]);
        let r = calculate_for(&t, "BLUE").unwrap();
        assert!((r.probability_of_target - 0.75).abs() < 1e-12);
    }
}
