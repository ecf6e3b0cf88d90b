//! Sampling properties of built generators.
//!
//! Covers determinism, nominal output ranges, threshold membership and the
//! fixed cellular, fractal and multi scenarios.

use std::thread;

use fastnoise_core::config::{FractalType, MultiType, NoiseType, ReturnType, WarpType};
use fastnoise_core::{FastNoise, NoiseBuilder, NoiseFunction};
use fastnoise_utils::math::fractal_bounding;

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

/// Deterministic sample points spread over a few hundred lattice cells.
fn points(count: usize) -> impl Iterator<Item = (f32, f32, f32)> {
    (0..count).map(|i| {
        let i = i as f32;
        (i * 7.31 - 900.0, i * -3.77 + 250.0, i * 1.91 - 40.0)
    })
}

#[test]
fn test_identical_configs_are_bit_identical() {
    for noise_type in BASE_TYPES {
        let builder = NoiseBuilder::new()
            .noise_type(noise_type)
            .seed(9001)
            .fractal(FractalType::Fbm)
            .warp(WarpType::BasicGrid);
        let a = builder.build();
        let b = builder.build();
        for (x, y, z) in points(500) {
            assert_eq!(
                a.get_noise_2d(x, y).to_bits(),
                b.get_noise_2d(x, y).to_bits(),
                "{noise_type:?} 2D diverged at ({x}, {y})"
            );
            assert_eq!(
                a.get_noise_3d(x, y, z).to_bits(),
                b.get_noise_3d(x, y, z).to_bits(),
                "{noise_type:?} 3D diverged at ({x}, {y}, {z})"
            );
        }
    }
}

#[test]
fn test_base_generators_stay_in_nominal_range() {
    let bounded = [
        (NoiseType::Value, ReturnType::CellValue, 1.0),
        (NoiseType::Perlin, ReturnType::CellValue, 1.1),
        (NoiseType::Simplex, ReturnType::CellValue, 1.05),
        (NoiseType::OpenSimplex2, ReturnType::CellValue, 1.1),
        (NoiseType::OpenSimplex2S, ReturnType::CellValue, 1.1),
        (NoiseType::Cellular, ReturnType::CellValue, 1.0),
        // Nearest squared distance is below (sqrt(0.75) + 0.45)^2 < 2.
        (NoiseType::Cellular, ReturnType::Distance, 1.0),
        (NoiseType::White, ReturnType::CellValue, 1.0),
        (NoiseType::Cubic, ReturnType::CellValue, 1.0),
    ];
    for (noise_type, cellular_return, bound) in bounded {
        let noise = NoiseBuilder::new()
            .noise_type(noise_type)
            .cellular_return(cellular_return)
            .frequency(0.173)
            .build();
        let mut peak: f32 = 0.0;
        for (x, y, z) in points(10_000) {
            let n2 = noise.get_noise_2d(x, y);
            let n3 = noise.get_noise_3d(x, y, z);
            assert!(n2.abs() <= bound, "{noise_type:?} 2D out of range: {n2}");
            assert!(n3.abs() <= bound, "{noise_type:?} 3D out of range: {n3}");
            peak = peak.max(n2.abs()).max(n3.abs());
        }
        // A constant or collapsed field would pass the bound trivially.
        assert!(peak > 0.3, "{noise_type:?}/{cellular_return:?} peaked at {peak}");
    }
}

#[test]
fn test_boolean_matches_open_threshold_interval() {
    for invert in [false, true] {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Perlin)
            .threshold(-0.2, 0.3)
            .invert(invert)
            .build();
        for (x, y, z) in points(2_000) {
            let n = noise.get_noise_3d(x, y, z);
            let inside = n > -0.2 && n < 0.3;
            assert_eq!(noise.get_boolean_3d(x, y, z), invert != inside);
        }
    }

    let noise = NoiseBuilder::new().threshold(-0.2, 0.3).build();
    assert!(!noise.is_in_threshold(-0.2));
    assert!(!noise.is_in_threshold(0.3));
    assert!(noise.is_in_threshold(0.0));
}

#[test]
fn test_value_noise_scenario() {
    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Value)
        .seed(1337)
        .frequency(0.01)
        .build();
    let origin = noise.get_noise_2d(0.0, 0.0);
    assert_eq!(origin.to_bits(), noise.get_noise_2d(0.0, 0.0).to_bits());
    assert_ne!(origin.to_bits(), noise.get_noise_2d(1.0, 0.0).to_bits());
}

#[test]
#[allow(clippy::float_cmp)]
fn test_unjittered_cellular_distance_at_feature_point() {
    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Cellular)
        .cellular_return(ReturnType::Distance)
        .jitter(0.0)
        .frequency(1.0)
        .build();
    assert_eq!(noise.get_noise_2d(3.0, -4.0), -1.0);
    assert_eq!(noise.get_noise_3d(3.0, -4.0, 12.0), -1.0);
}

#[test]
fn test_single_octave_fractal_equals_base_sample() {
    assert!((fractal_bounding(0.5, 1) - 1.0).abs() < f32::EPSILON);
    for noise_type in BASE_TYPES {
        let base = NoiseBuilder::new().noise_type(noise_type).seed(77).build();
        let fractal = NoiseBuilder::new()
            .noise_type(noise_type)
            .seed(77)
            .fractal(FractalType::Fbm)
            .octaves(1)
            .build();
        for (x, y, z) in points(200) {
            let expected = base.sample_3d(77, x * 0.01, y * 0.01, z * 0.01);
            let actual = fractal.sample_3d(77, x * 0.01, y * 0.01, z * 0.01);
            assert!((expected - actual).abs() < 1e-6, "{noise_type:?}");
        }
    }
}

#[test]
fn test_degenerate_threshold_selects_everything_below_max() {
    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Simplex)
        .threshold(0.3, 0.3)
        .build();
    for (x, y, _) in points(2_000) {
        let n = noise.get_noise_2d(x, y);
        assert_eq!(noise.get_boolean_2d(x, y), n < 0.3);
    }
}

#[test]
fn test_added_octaves_keep_dominant_sign() {
    let base = NoiseBuilder::new().noise_type(NoiseType::Value).seed(5).build();
    let layered: Vec<FastNoise> = (2..=4)
        .map(|octaves| {
            NoiseBuilder::new()
                .noise_type(NoiseType::Value)
                .seed(5)
                .fractal(FractalType::Fbm)
                .gain(0.25)
                .octaves(octaves)
                .build()
        })
        .collect();
    let mut checked = 0;
    for (x, y, _) in points(3_000) {
        let first = base.get_noise_2d(x, y);
        if first.abs() < 0.4 {
            continue;
        }
        checked += 1;
        for noise in &layered {
            let n = noise.get_noise_2d(x, y);
            assert_eq!(n.is_sign_positive(), first.is_sign_positive());
        }
    }
    assert!(checked > 100);
}

#[test]
fn test_div_reduction_never_divides_by_zero() {
    let zero = FastNoise::wrapper(NoiseFunction::Zero).create_builder();
    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Multi)
        .multi(MultiType::Div)
        .references([
            NoiseBuilder::new().noise_type(NoiseType::Simplex),
            zero.clone(),
            NoiseBuilder::new().noise_type(NoiseType::Cellular),
            zero,
        ])
        .build();
    for (x, y, z) in points(2_000) {
        assert!(noise.get_noise_2d(x, y).is_finite());
        assert!(noise.get_noise_3d(x, y, z).is_finite());
        assert!(noise.get_noise_scaled_3d(x, y, z).is_finite());
    }
}

#[test]
fn test_generators_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastNoise>();
    assert_send_sync::<NoiseBuilder>();

    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::OpenSimplex2S)
        .fractal(FractalType::PingPong)
        .build();
    let expected: Vec<u32> = points(64)
        .map(|(x, y, z)| noise.get_noise_3d(x, y, z).to_bits())
        .collect();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let actual: Vec<u32> = points(64)
                    .map(|(x, y, z)| noise.get_noise_3d(x, y, z).to_bits())
                    .collect();
                assert_eq!(actual, expected);
            });
        }
    });
}
