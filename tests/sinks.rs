// tests/sinks.rs
//
// Upsert semantics shared by every sink, plus a live PostgreSQL round trip.
// The database test needs a reachable server configured through the
// DB_NAME, DB_USER, DB_PASSWORD, DB_HOST and DB_PORT variables.
//
use std::fs;
use std::path::PathBuf;

use color_tally::config::DbConfig;
use color_tally::store::{ColorSink, CsvSink, MemorySink, PostgresSink};
use color_tally::ColorFrequencyTable;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("color_tally_sink_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table(pairs: &[(&str, u64)]) -> ColorFrequencyTable {
    pairs.iter().copied().collect()
}

/// Two upserts: overlapping colours take the second value, the rest survive.
fn check_upsert_semantics(sink: &mut dyn ColorSink) {
    let first = table(&[("RED", 3), ("BLUE", 1), ("GREEN", 1)]);
    let second = table(&[("RED", 4), ("ORANGE", 2)]);

    sink.upsert(&first).unwrap();
    let after_first = sink.load().unwrap();
    for (color, n) in first.iter() {
        assert_eq!(after_first.get(color), n, "{} after first upsert", color);
    }

    sink.upsert(&second).unwrap();
    let stored = sink.load().unwrap();
    assert_eq!(stored.get("RED"), 4);
    assert_eq!(stored.get("ORANGE"), 2);
    assert_eq!(stored.get("BLUE"), 1);
    assert_eq!(stored.get("GREEN"), 1);
}

#[test]
fn memory_sink_upsert() {
    check_upsert_semantics(&mut MemorySink::new());
}

#[test]
fn csv_sink_upsert() {
    let dir = tmp_dir("csv");
    let mut sink = CsvSink::new(dir.join("colors.csv"));
    check_upsert_semantics(&mut sink);
    assert_eq!(sink.load().unwrap().len(), 4);
}

#[test]
fn csv_sink_reopens_existing_store() {
    let dir = tmp_dir("reopen");
    let path = dir.join("colors.csv");
    CsvSink::new(&path).upsert(&table(&[("WHITE", 6), ("RED", 2)])).unwrap();

    let reopened = CsvSink::new(&path).load().unwrap();
    assert_eq!(reopened, table(&[("RED", 2), ("WHITE", 6)]));
}

#[test]
#[ignore = "needs a PostgreSQL server"]
fn postgres_sink_upsert() {
    let cfg = DbConfig::from_env().unwrap();
    let mut sink = PostgresSink::new(cfg);
    check_upsert_semantics(&mut sink);
}
