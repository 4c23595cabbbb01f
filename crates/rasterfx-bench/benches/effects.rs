//! Benchmarks for rasterfx effects.
//!
//! Run with: `cargo bench -p rasterfx-bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rasterfx_core::{Bounds, PixelBuffer, Rgba8, TaggedImage};
use rasterfx_io::{EncodeOptions, Format};
use rasterfx_ops::partition::partition;
use rasterfx_ops::{Effect, Engine};

const SIZES: [u32; 2] = [256, 1024];

/// Opaque test pattern with some variation in every channel.
fn test_image(size: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(Bounds::from_size(size, size));
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            buf.set_pixel(x, y, Rgba8::new(x as u8, y as u8, (x ^ y) as u8, 255));
        }
    }
    buf
}

/// Benchmark each effect on the default engine.
fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects");
    let engine = Engine::default();

    let effects = [
        Effect::Invert,
        Effect::MirrorH,
        Effect::MirrorV,
        Effect::BoxBlur(4),
        Effect::AlphaScale(0.5),
        Effect::Mosaic(16),
    ];

    for size in SIZES {
        let image = test_image(size);
        group.throughput(Throughput::Elements(size as u64 * size as u64));

        for effect in effects {
            group.bench_with_input(BenchmarkId::new(effect.name(), size), &image, |b, img| {
                b.iter(|| engine.apply(black_box(img), effect))
            });
        }
    }

    group.finish();
}

/// Blur cost grows with the number of passes.
fn bench_blur_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_blur_radius");
    let engine = Engine::default();
    let image = test_image(256);

    for radius in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| engine.box_blur(black_box(&image), r))
        });
    }

    group.finish();
}

/// Serial vs parallel on the same image.
fn bench_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallelism");
    let image = test_image(1024);

    for workers in [1, 2, 4, Engine::default().parallelism()] {
        let engine = Engine::new().with_parallelism(workers);
        group.bench_with_input(BenchmarkId::new("invert", workers), &engine, |b, e| {
            b.iter(|| e.invert(black_box(&image)))
        });
    }

    group.finish();
}

/// Benchmark the partitioner alone.
fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for (len, p) in [(1080, 8), (4320, 64), (7, 16)] {
        group.bench_with_input(
            BenchmarkId::new("rows", format!("{}x{}", len, p)),
            &(len, p),
            |b, &(len, p)| b.iter(|| partition(black_box(len), black_box(p))),
        );
    }

    group.finish();
}

/// Encode cost per format.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let image = TaggedImage::from(test_image(256));
    let options = EncodeOptions::default();

    for format in Format::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(format), &format, |b, &f| {
            b.iter(|| rasterfx_io::encode_as(black_box(&image), f, &options))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_effects,
    bench_blur_radius,
    bench_parallelism,
    bench_partition,
    bench_encode,
);

criterion_main!(benches);
