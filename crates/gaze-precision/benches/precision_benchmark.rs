//! Precision metric benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gaze_precision::{calculate_bcea_default, calculate_rms_s2s, compute_batch, PrecisionConfig};
use ndarray::Array2;

/// Deterministic jittery fixation with every 17th sample missing
fn generate_fixation(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, 2), |(i, j)| {
        if i % 17 == 5 {
            f64::NAN
        } else {
            let phase = i as f64 * 0.37 + j as f64 * 1.3;
            100.0 + phase.sin() * 0.5 + (phase * 3.1).cos() * 0.2
        }
    })
}

fn bench_bcea(c: &mut Criterion) {
    let mut group = c.benchmark_group("bcea");
    for size in [50, 500, 5000] {
        let data = generate_fixation(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_bcea_default(black_box(data.view())))
        });
    }
    group.finish();
}

fn bench_rms_s2s(c: &mut Criterion) {
    let mut group = c.benchmark_group("rms_s2s");
    for size in [50, 500, 5000] {
        let data = generate_fixation(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| calculate_rms_s2s(black_box(data.view())))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let fixations: Vec<Array2<f64>> = (0..200).map(|i| generate_fixation(100 + i)).collect();
    let views: Vec<_> = fixations.iter().map(|f| f.view()).collect();
    let config = PrecisionConfig::default();

    c.bench_function("batch_200_fixations", |b| {
        b.iter(|| compute_batch(black_box(&views), &config))
    });
}

criterion_group!(benches, bench_bcea, bench_rms_s2s, bench_batch);
criterion_main!(benches);
