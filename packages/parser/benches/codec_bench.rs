use ahap_parser::{extract_metadata, generate, parse, HapticEvent, Pattern};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_pattern(count: usize) -> Pattern {
    let events = (0..count)
        .map(|i| {
            let time = (count - i) as f64 * 0.05;
            if i % 3 == 0 {
                HapticEvent::continuous(time, 0.6, 0.4)
            } else {
                HapticEvent::transient(time, 0.8, 0.5)
            }
        })
        .collect();

    Pattern::new("Bench")
        .with_description("Generated for benchmarking")
        .with_events(events)
}

fn parse_small_pattern(c: &mut Criterion) {
    let source = generate(&build_pattern(4));

    c.bench_function("parse_small_pattern", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn parse_large_pattern(c: &mut Criterion) {
    let source = generate(&build_pattern(2_000));

    c.bench_function("parse_large_pattern", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn generate_large_pattern(c: &mut Criterion) {
    let pattern = build_pattern(2_000);

    c.bench_function("generate_large_pattern", |b| {
        b.iter(|| generate(black_box(&pattern)))
    });
}

fn extract_metadata_large_pattern(c: &mut Criterion) {
    let source = generate(&build_pattern(2_000));

    c.bench_function("extract_metadata_large_pattern", |b| {
        b.iter(|| extract_metadata(black_box(&source)))
    });
}

criterion_group!(
    benches,
    parse_small_pattern,
    parse_large_pattern,
    generate_large_pattern,
    extract_metadata_large_pattern
);
criterion_main!(benches);
