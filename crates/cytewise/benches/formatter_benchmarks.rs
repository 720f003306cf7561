//! Formatter performance benchmarks.
//!
//! Measures per-call cost for each style across sparse and fully populated records.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cytewise::{BibliographicRecord, CitationStyle, Field, Formatter};

/// A record with every field set to a realistic-length value.
fn full_record() -> BibliographicRecord {
    Field::ALL
        .into_iter()
        .fold(BibliographicRecord::new(), |record, field| {
            record.with(field, format!("{} value for benchmarking", field.as_key()))
        })
}

/// A typical web source: author, title, URL.
fn web_record() -> BibliographicRecord {
    BibliographicRecord::new()
        .with(Field::Author, "Smith, J.")
        .with(Field::Title, "A Study")
        .with(Field::Url, "http://x.com")
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let formatter = Formatter::new();

    for (label, record) in [("web", web_record()), ("full", full_record())] {
        for style in [CitationStyle::Apa, CitationStyle::Mla, CitationStyle::Ieee] {
            group.bench_with_input(
                BenchmarkId::new(style.name(), label),
                &record,
                |b, record| b.iter(|| formatter.generate(black_box(record), black_box(style))),
            );
        }
    }

    group.finish();
}

fn bench_record_json(c: &mut Criterion) {
    let json = full_record().to_json_pretty().expect("serialize record");

    c.bench_function("record_from_json", |b| {
        b.iter(|| BibliographicRecord::from_json(black_box(&json)))
    });
}

criterion_group!(benches, bench_generate, bench_record_json);
criterion_main!(benches);
