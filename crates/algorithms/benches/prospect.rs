//! Benchmarks for mineral index computation and registry proximity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectramine_algorithms::classification::classify;
use spectramine_algorithms::imagery::{mineral_index, scan_minerals, SpectralBands};
use spectramine_algorithms::mineral::Mineral;
use spectramine_algorithms::proximity::find_nearby_and_nearest;
use spectramine_algorithms::registry::MiningRegistry;
use spectramine_core::{GeoPoint, GeoTransform, Raster};

fn create_band(size: usize, base: f64) -> Raster<f64> {
    let mut r = Raster::new(size, size);
    r.set_transform(GeoTransform::new(81.25, 18.70, 0.0001, -0.0001));
    for row in 0..size {
        for col in 0..size {
            let v = base + ((row * 7 + col * 13) % 200) as f64 / 10_000.0;
            r.set(row, col, v).unwrap();
        }
    }
    r
}

fn create_bands(size: usize) -> SpectralBands {
    SpectralBands::new(
        create_band(size, 0.20),
        create_band(size, 0.14),
        create_band(size, 0.10),
        create_band(size, 0.30),
        create_band(size, 0.34),
        create_band(size, 0.25),
    )
    .unwrap()
}

fn bench_mineral_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("imagery/copper_index");
    for size in [256, 512, 1024] {
        let bands = create_bands(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| mineral_index(black_box(&bands), Mineral::Copper).unwrap())
        });
    }
    group.finish();
}

fn bench_scan_minerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("imagery/scan_minerals");
    group.sample_size(20);
    for size in [256, 512] {
        let bands = create_bands(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| scan_minerals(black_box(&bands)).unwrap())
        });
    }
    group.finish();
}

fn bench_proximity(c: &mut Criterion) {
    let registry = MiningRegistry::builtin();
    let point = GeoPoint::new(-23.5, -70.4).unwrap();

    c.bench_function("proximity/copper_builtin", |b| {
        b.iter(|| find_nearby_and_nearest(black_box(point), Mineral::Copper, registry))
    });
    c.bench_function("classify/iron_builtin", |b| {
        b.iter(|| classify(black_box(point), black_box(12.0), Mineral::Iron, registry))
    });
}

criterion_group!(benches, bench_mineral_index, bench_scan_minerals, bench_proximity);
criterion_main!(benches);
