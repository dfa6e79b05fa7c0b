//! Benchmarks for transcript parsing and filtering.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatsum::TranscriptParser;
use chatsum::filter::{DateRange, filter_by_range};

/// Generates a transcript where every third message has two continuation
/// lines, cycling through a month of dates.
fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = (i % 28) + 1;
        let hour = i % 12 + 1;
        let minute = i % 60;
        lines.push(format!(
            "{day}/1/24, {hour}:{minute:02} PM - {sender}: Message number {i}"
        ));
        if i % 3 == 0 {
            lines.push("a continuation line".to_string());
            lines.push("and another one".to_string());
        }
    }
    lines.join("\n")
}

fn bench_transcript_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(txt));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_filter_by_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_range");
    let parser = TranscriptParser::new();
    let range = DateRange::parse("2024-01-05", "2024-01-15").unwrap();

    for size in [1_000_usize, 10_000, 100_000] {
        let messages = parser.parse_str(&generate_transcript(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let filtered = filter_by_range(black_box(messages.clone()), &range);
                    black_box(filtered)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_transcript_parsing, bench_filter_by_range);

criterion_main!(benches);
