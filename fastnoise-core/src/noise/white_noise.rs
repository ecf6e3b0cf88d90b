//! White noise: the value hash of the raw coordinate bits.
//!
//! Nearby inputs are uncorrelated, so frequency only changes which bit
//! patterns get hashed.

use fastnoise_utils::math::{cast_float_to_int, value1, value2, value3};

use crate::config::{NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

/// White noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteNoise;

impl NoiseSampler for WhiteNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        value1(seed, cast_float_to_int(x))
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        value2(seed, cast_float_to_int(x), cast_float_to_int(y))
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        value3(
            seed,
            cast_float_to_int(x),
            cast_float_to_int(y),
            cast_float_to_int(z),
        )
    }
}

impl DescribeNoise for WhiteNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder.noise_type(NoiseType::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_white_is_a_pure_function_of_the_bits() {
        assert_eq!(WhiteNoise.sample_2d(4, 0.5, 0.25), WhiteNoise.sample_2d(4, 0.5, 0.25));
        let distinct = (0..64)
            .map(|i| WhiteNoise.sample_1d(4, i as f32 * 0.01).to_bits())
            .collect::<std::collections::HashSet<_>>()
            .len();
        assert!(distinct > 60);
    }

    #[test]
    fn test_white_range() {
        for i in 0..500 {
            let v = WhiteNoise.sample_3d(1337, i as f32 * 0.7, -(i as f32), 3.3);
            assert!((-1.0..=1.0).contains(&v));
        }
    }
}
