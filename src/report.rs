// src/report.rs
// Five-line human-readable report. Pure formatting, no computation.

use std::io::{self, Write};

use crate::stats::StatisticsResult;

pub fn lines(r: &StatisticsResult) -> [String; 5] {
    [
        format!("1. The mean color of the shirt is {}", r.position_based_mean_color),
        format!("2. The most worn color(s) is {}", r.most_frequent_color),
        format!("3. The median color is {}", r.position_based_median_color),
        format!("4. The variance of the colors is {}", r.count_variance),
        format!("5. Probability of choosing a red color is {:.2}", r.probability_of_target),
    ]
}

/// The report as one string, each line newline-terminated.
pub fn render(r: &StatisticsResult) -> String {
    let mut out = s!();
    for line in lines(r) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn write_report<W: Write>(mut w: W, r: &StatisticsResult) -> io::Result<()> {
    for line in lines(r) {
        writeln!(w, "{}", line)?;
    }
    w.flush()
}
