//! Benchmarks for the analysis pipeline.
//!
//! Simulates realistic input sizes:
//! - short:  a chat message (~50 words)
//! - medium: a blog post (~1,000 words)
//! - long:   an essay (~10,000 words)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unicoef::{analyze, Analyzer};

/// Input size configurations matching real-world scenarios.
struct InputSize {
    name: &'static str,
    words: usize,
}

const INPUT_SIZES: &[InputSize] = &[
    InputSize { name: "short", words: 50 },
    InputSize { name: "medium", words: 1_000 },
    InputSize { name: "long", words: 10_000 },
];

/// Deterministic filler text with a sprinkling of markers from both
/// lexicons, roughly one marker per ten words.
fn generate_text(words: usize) -> String {
    const FILLER: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "while", "morning",
        "sunlight", "crosses", "quiet", "meadow", "slowly", "wind", "moves", "grass", "clouds",
    ];
    const MARKERS: &[&str] = &["love", "fear", "unity", "crisis", "abundance", "conflict"];

    let mut out = Vec::with_capacity(words);
    for i in 0..words {
        if i % 10 == 0 {
            out.push(MARKERS[(i / 10) % MARKERS.len()]);
        } else {
            out.push(FILLER[i % FILLER.len()]);
        }
    }
    out.join(" ")
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in INPUT_SIZES {
        let text = generate_text(size.words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &text, |b, text| {
            b.iter(|| analyze(black_box(text)));
        });
    }

    group.finish();
}

fn bench_analyze_with_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_with_context");
    let analyzer = Analyzer::default();

    for size in INPUT_SIZES {
        let text = generate_text(size.words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &text, |b, text| {
            b.iter(|| analyzer.analyze_with_context(black_box(text), None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_analyze_with_context);
criterion_main!(benches);
