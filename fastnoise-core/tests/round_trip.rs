//! `to_builder` reconstruction.
//!
//! Every built graph, rebuilt from the configuration it describes, must
//! sample bit-identically to the original.

use fastnoise_core::config::{
    DistanceType, FractalType, MultiType, NoiseType, ReturnType, WarpType,
};
use fastnoise_core::{
    DistanceFunction, FastNoise, MultiFunction, NoiseBuilder, NoiseFunction, ScaleFunction,
};

fn assert_same_samples(original: &FastNoise, label: &str) {
    let rebuilt = original.to_builder().build();
    for i in 0..256 {
        let i = i as f32;
        let (x, y, z) = (i * 3.3 - 400.0, i * -1.7 + 90.0, i * 0.9);
        assert_eq!(
            original.get_noise_1d(x).to_bits(),
            rebuilt.get_noise_1d(x).to_bits(),
            "{label}: 1D"
        );
        assert_eq!(
            original.get_noise_2d(x, y).to_bits(),
            rebuilt.get_noise_2d(x, y).to_bits(),
            "{label}: 2D"
        );
        assert_eq!(
            original.get_noise_scaled_3d(x, y, z).to_bits(),
            rebuilt.get_noise_scaled_3d(x, y, z).to_bits(),
            "{label}: scaled 3D"
        );
        assert_eq!(
            original.get_boolean_3d(x, y, z),
            rebuilt.get_boolean_3d(x, y, z),
            "{label}: boolean"
        );
    }
}

#[test]
fn test_base_generators_round_trip() {
    let types = [
        NoiseType::Value,
        NoiseType::Perlin,
        NoiseType::Simplex,
        NoiseType::OpenSimplex2,
        NoiseType::OpenSimplex2S,
        NoiseType::Cellular,
        NoiseType::White,
        NoiseType::Cubic,
    ];
    for noise_type in types {
        let noise = NoiseBuilder::new()
            .noise_type(noise_type)
            .seed(-12)
            .frequency_x(0.03)
            .frequency_z(0.2)
            .offsets(5.0)
            .range(-4.0, 10.0)
            .threshold(-0.5, 0.25)
            .build();
        assert_same_samples(&noise, &format!("{noise_type:?}"));
    }
}

#[test]
fn test_layered_generators_round_trip() {
    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Perlin)
        .fractal(FractalType::PingPong)
        .ping_pong_strength(1.5)
        .octaves(4)
        .lacunarity_y(3.0)
        .warp(WarpType::Simplex2)
        .warp_amplitude(12.0)
        .build();
    assert_same_samples(&noise, "ping-pong under simplex warp");

    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Value)
        .warp(WarpType::NoiseLookup)
        .noise_lookup(NoiseBuilder::new().noise_type(NoiseType::Cubic).seed(3))
        .build();
    assert_same_samples(&noise, "lookup warp");

    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Fractal)
        .fractal(FractalType::RigidMulti)
        .reference(NoiseBuilder::new().noise_type(NoiseType::OpenSimplex2).seed(8))
        .scale_function(ScaleFunction::new(|v| v * v))
        .build();
    assert_same_samples(&noise, "scaled rigid fractal");
}

#[test]
fn test_cellular_variants_round_trip() {
    let returns = [ReturnType::Distance2Div, ReturnType::Distance3Sub];
    for cellular_return in returns {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Cellular)
            .distance(DistanceType::Natural)
            .cellular_return(cellular_return)
            .jitter_y(0.4)
            .build();
        assert_same_samples(&noise, &format!("{cellular_return:?}"));
    }

    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Cellular)
        .distance_function(DistanceFunction::two_d(|x, y| x.abs().max(y.abs())))
        .cellular_return(ReturnType::NoiseLookup)
        .noise_lookup(NoiseBuilder::new().noise_type(NoiseType::Simplex).frequency(0.2))
        .build();
    assert_same_samples(&noise, "chebyshev lookup");
}

#[test]
fn test_multi_and_wrapped_round_trip() {
    let references = || {
        [
            NoiseBuilder::new().noise_type(NoiseType::Simplex).seed(1),
            NoiseBuilder::new().noise_type(NoiseType::Cellular).seed(2),
            FastNoise::wrapper(NoiseFunction::two_d(|_, x, y| (x - y).sin())).create_builder(),
        ]
    };
    for multi in [MultiType::Min, MultiType::Avg, MultiType::Div, MultiType::Sum] {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Multi)
            .multi(multi)
            .references(references())
            .build();
        assert_same_samples(&noise, &format!("{multi:?}"));
    }

    let noise = NoiseBuilder::new()
        .noise_type(NoiseType::Multi)
        .references(references())
        .multi_function(MultiFunction::combiner(|values| values.iter().product()))
        .build();
    assert_same_samples(&noise, "combiner");

    let passthrough = FastNoise::wrapper(NoiseFunction::three_d(|seed, x, y, z| {
        (seed as f32 + x * 0.1 + y * 0.01 + z).cos()
    }))
    .generate_passthrough(44);
    assert_same_samples(&passthrough, "passthrough");
    assert_same_samples(&FastNoise::dummy(), "dummy");
}
