//! Benchmarks for raw buffer import and export
//!
//! Run with: cargo bench --bench pixel_matrix

use blockdct_core::{ChannelOrder, ColorSpace, PixelMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_buffer_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Buffer Conversion");

    for &size in &[256usize, 1024] {
        // 4-byte aligned rows
        let stride = (size * 3 + 3) & !3;
        let buffer: Vec<u8> = (0..stride * size).map(|i| (i % 251) as u8).collect();
        let matrix =
            PixelMatrix::from_buffer(&buffer, size, size, stride, ChannelOrder::Bgr).unwrap();

        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("from_buffer", size), &size, |b, &s| {
            b.iter(|| {
                PixelMatrix::from_buffer(black_box(&buffer), s, s, stride, ChannelOrder::Bgr).unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("to_buffer", size), &size, |b, _| {
            b.iter(|| black_box(&matrix).to_buffer());
        });

        group.bench_with_input(BenchmarkId::new("to_ycbcr", size), &size, |b, _| {
            b.iter(|| {
                let mut working = matrix.clone();
                working.convert_color_space(black_box(ColorSpace::YCbCr));
                working
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_buffer_conversion);
criterion_main!(benches);
