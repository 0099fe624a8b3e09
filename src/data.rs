// src/data.rs
//
// The frequency table produced by a scrape.
//
// Keys are kept in ascending name order so every walk over the table is
// deterministic; the statistics rely on that order for their tie-breaks.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Colour name → occurrence count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorFrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl ColorFrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Count one more occurrence of `color`.
    pub fn record(&mut self, color: &str) {
        match self.counts.get_mut(color) {
            Some(n) => *n = n.saturating_add(1),
            None => { self.counts.insert(s!(color), 1); }
        }
    }

    /// Set the count for `color`, replacing any previous value.
    pub fn set(&mut self, color: impl Into<String>, count: u64) {
        self.counts.insert(color.into(), count);
    }

    pub fn get(&self, color: &str) -> u64 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Number of distinct colours.
    #[inline] pub fn len(&self) -> usize { self.counts.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Sum of all counts, i.e. the number of tokens seen. Saturates at
    /// `u64::MAX` for tables built from oversized stored counts.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    /// Entries in ascending colour-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }
}

impl FromIterator<(String, u64)> for ColorFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self { counts: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for ColorFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (s!(k), v)).collect()
    }
}

impl IntoIterator for ColorFrequencyTable {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;
    fn into_iter(self) -> Self::IntoIter { self.counts.into_iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_occurrences() {
        let mut t = ColorFrequencyTable::new();
        for c in ["RED", "BLUE", "RED", "red"] { t.record(c); }
        assert_eq!(t.get("RED"), 2);
        assert_eq!(t.get("red"), 1);
        assert_eq!(t.get("GREEN"), 0);
        assert_eq!(t.len(), 3);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn iteration_is_name_ordered() {
        let t: ColorFrequencyTable = [("WHITE", 1u64), ("BLUE", 4), ("GREEN", 2)].into_iter().collect();
        let names: Vec<&str> = t.iter().map(|(c, _)| c).collect();
        assert_eq!(names, vec!["BLUE", "GREEN", "WHITE"]);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut t = ColorFrequencyTable::new();
        t.set("RED", u64::MAX - 1);
        t.set("BLUE", 5);
        assert_eq!(t.total(), u64::MAX);
        t.set("BLUE", u64::MAX);
        t.record("BLUE");
        assert_eq!(t.get("BLUE"), u64::MAX);
    }

    #[test]
    fn set_overwrites() {
        let mut t = ColorFrequencyTable::new();
        t.record("RED");
        t.set("RED", 9);
        assert_eq!(t.get("RED"), 9);
    }
}
