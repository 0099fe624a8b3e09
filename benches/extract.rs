// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use color_tally::{scrape, stats};

const PALETTE: [&str; 8] = ["RED", "BLUE", "GREEN", "WHITE", "YELLOW", "ORANGE", "PINK", "BROWN"];

/// A week-style table scaled up to `rows` rows of 19 colours each.
fn synthetic_doc(rows: usize) -> String {
    let mut doc = String::from("<html><body><table>\n");
    for r in 0..rows {
        let colors: Vec<&str> = (0..19).map(|i| PALETTE[(r * 7 + i * 3) % PALETTE.len()]).collect();
        doc.push_str(&format!(
            "<tr>\n  <td>DAY {}</td>\n  <td>{}</td>\n</tr>\n",
            r,
            colors.join(", ")
        ));
    }
    doc.push_str("</table></body></html>\n");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let week = synthetic_doc(5);
    let large = synthetic_doc(5_000);
    let huge = synthetic_doc(50_000);

    c.bench_function("tally_week", |b| {
        b.iter(|| {
            let t = scrape::tally_document(black_box(&week)).unwrap();
            black_box(t.total())
        })
    });

    c.bench_function("tally_5000_rows", |b| {
        b.iter(|| {
            let t = scrape::tally_document(black_box(&large)).unwrap();
            black_box(t.total())
        })
    });

    // ten times the rows should cost about ten times the time
    c.bench_function("tally_50000_rows", |b| {
        b.iter(|| {
            let t = scrape::tally_document(black_box(&huge)).unwrap();
            black_box(t.total())
        })
    });

    let table = scrape::tally_document(&large).unwrap();
    c.bench_function("statistics", |b| {
        b.iter(|| black_box(stats::calculate(black_box(&table)).unwrap()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
