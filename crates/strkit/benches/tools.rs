use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::hint::black_box;

// ============================================================================
// Benchmark: Newline Padding
// ============================================================================

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding");

    for lines in [8, 64, 512] {
        let text = "payload line\n".repeat(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("tab_pad_new_lines", lines), &text, |b, text| {
            b.iter(|| black_box(strkit::tab_pad_new_lines(text.as_str(), 2)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Random String Generation
// ============================================================================

fn bench_random_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_string");

    for length in [16, 64, 256] {
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                black_box(strkit::random_string_from(
                    &mut rng,
                    length,
                    strkit::charset::ALPHA_UPPER_AND_DIGITS,
                ))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Conversions
// ============================================================================

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    let hex = "0123456789abcdef".repeat(8);
    group.bench_function("hex_to_base36_128_chars", |b| {
        b.iter(|| black_box(strkit::hex_to_base36(&hex)));
    });

    group.bench_function("to_capital_camel_case", |b| {
        b.iter(|| black_box(strkit::to_capital_camel_case("very.long_field.name_with_parts")));
    });

    let value = json!({ "id": 7, "tags": ["a", "b", "c"], "nested": { "k": 1 } });
    group.bench_function("as_string_object_dump", |b| {
        b.iter(|| black_box(strkit::as_string(&value)));
    });

    group.finish();
}

criterion_group!(benches, bench_padding, bench_random_string, bench_conversions);
criterion_main!(benches);
