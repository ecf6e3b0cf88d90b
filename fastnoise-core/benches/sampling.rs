#![allow(missing_docs)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fastnoise_core::config::{FractalType, NoiseType, ReturnType, WarpType};
use fastnoise_core::{FastNoise, NoiseBuilder};
use std::hint::black_box;

/// Side length of the sampled grid. One iteration samples `GRID * GRID`
/// points in 2D and `GRID * GRID * 4` in 3D.
const GRID: i32 = 64;

const BASE_TYPES: [NoiseType; 8] = [
    NoiseType::Value,
    NoiseType::Perlin,
    NoiseType::Simplex,
    NoiseType::OpenSimplex2,
    NoiseType::OpenSimplex2S,
    NoiseType::Cellular,
    NoiseType::White,
    NoiseType::Cubic,
];

fn sample_plane(noise: &FastNoise) -> f32 {
    let mut sum = 0.0;
    for x in 0..GRID {
        for z in 0..GRID {
            sum += noise.get_noise_2d(x as f32, z as f32);
        }
    }
    sum
}

fn sample_volume(noise: &FastNoise) -> f32 {
    let mut sum = 0.0;
    for x in 0..GRID {
        for y in 0..4 {
            for z in 0..GRID {
                sum += noise.get_noise_3d(x as f32, y as f32, z as f32);
            }
        }
    }
    sum
}

fn bench_base_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("base");
    for noise_type in BASE_TYPES {
        let noise = NoiseBuilder::new().noise_type(noise_type).build();
        group.bench_with_input(
            BenchmarkId::new("2d", format!("{noise_type:?}")),
            &noise,
            |b, noise| b.iter(|| black_box(sample_plane(black_box(noise)))),
        );
        group.bench_with_input(
            BenchmarkId::new("3d", format!("{noise_type:?}")),
            &noise,
            |b, noise| b.iter(|| black_box(sample_volume(black_box(noise)))),
        );
    }
    group.finish();
}

fn bench_layered_generators(c: &mut Criterion) {
    let terrain = NoiseBuilder::new()
        .noise_type(NoiseType::OpenSimplex2)
        .fractal(FractalType::RigidMulti)
        .octaves(5)
        .warp(WarpType::Simplex2)
        .build();
    c.bench_function("fractal_warp_3d", |b| {
        b.iter(|| black_box(sample_volume(black_box(&terrain))));
    });

    let caves = NoiseBuilder::new()
        .noise_type(NoiseType::Multi)
        .references([
            NoiseBuilder::new()
                .noise_type(NoiseType::Cellular)
                .cellular_return(ReturnType::Distance2Sub),
            NoiseBuilder::new()
                .noise_type(NoiseType::Perlin)
                .fractal(FractalType::Billow),
        ])
        .build();
    c.bench_function("multi_3d", |b| {
        b.iter(|| black_box(sample_volume(black_box(&caves))));
    });
}

fn bench_build(c: &mut Criterion) {
    let builder = NoiseBuilder::new()
        .noise_type(NoiseType::Warped)
        .warp(WarpType::NoiseLookup)
        .noise_lookup(NoiseBuilder::new().noise_type(NoiseType::Value))
        .reference(
            NoiseBuilder::new()
                .noise_type(NoiseType::Simplex)
                .fractal(FractalType::Fbm),
        );
    c.bench_function("build_nested", |b| {
        b.iter(|| black_box(black_box(&builder).build()));
    });
}

criterion_group!(
    benches,
    bench_base_generators,
    bench_layered_generators,
    bench_build
);
criterion_main!(benches);
