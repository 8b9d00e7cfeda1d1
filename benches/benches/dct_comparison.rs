//! Benchmark comparing the basis-matrix engine with the fixed 8x8 path
//!
//! Run with: cargo bench --bench dct_comparison

use blockdct_core::{Block, PixelMatrix};
use blockdct_transform::{
    dct8x8_forward, dct8x8_inverse, forward_channel, process_channel, TransformEngine,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let input: [f64; 64] = core::array::from_fn(|i| ((i * 7) % 256) as f64);
    let block = Block::from_vec(8, 8, input.to_vec()).unwrap();
    let engine = TransformEngine::new(8).unwrap();

    group.bench_function("engine_forward", |b| {
        b.iter(|| engine.forward(black_box(&block)).unwrap());
    });

    group.bench_function("fixed_forward", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_forward(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("engine_inverse", |b| {
        b.iter(|| engine.inverse(black_box(&block)).unwrap());
    });

    group.bench_function("fixed_inverse", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_inverse(black_box(&input), black_box(&mut output));
        });
    });

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Block Sizes");

    for &n in &[4, 8, 16, 32] {
        let engine = TransformEngine::new(n).unwrap();
        let block = Block::from_fn(n, n, |y, x| ((y * n + x) % 256) as f64);

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("forward_{}x{}", n, n), |b| {
            b.iter(|| engine.forward(black_box(&block)).unwrap());
        });
    }

    group.finish();
}

fn bench_channel_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channel Passes");
    let engine = TransformEngine::default();

    for &size in &[64, 128, 256] {
        let matrix = PixelMatrix::new(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("forward_{}x{}", size, size), |b| {
            b.iter(|| forward_channel(&engine, black_box(&matrix), 0).unwrap());
        });

        group.bench_function(format!("roundtrip_{}x{}", size, size), |b| {
            let mut working = matrix.clone();
            b.iter(|| process_channel(&engine, black_box(&mut working), 0, |_| {}).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dct_8x8_comparison,
    bench_block_sizes,
    bench_channel_passes
);
criterion_main!(benches);
