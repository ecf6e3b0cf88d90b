//! Value noise: pseudo-random lattice values blended with the configured curve.

use fastnoise_utils::math::{fast_floor, lerp, value2, value3};

use crate::config::{InterpolationType, NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

/// Value noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueNoise {
    interpolation: InterpolationType,
}

impl ValueNoise {
    /// Creates a sampler using the given interpolation curve.
    #[must_use]
    pub const fn new(interpolation: InterpolationType) -> Self {
        Self { interpolation }
    }
}

impl NoiseSampler for ValueNoise {
    fn sample_1d(&self, _seed: i32, _x: f32) -> f32 {
        0.0
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xs = self.interpolation.apply(x - x0 as f32);
        let ys = self.interpolation.apply(y - y0 as f32);

        let xf0 = lerp(value2(seed, x0, y0), value2(seed, x1, y0), xs);
        let xf1 = lerp(value2(seed, x0, y1), value2(seed, x1, y1), xs);
        lerp(xf0, xf1, ys)
    }

    #[allow(clippy::similar_names)]
    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let z0 = fast_floor(z);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);
        let z1 = z0.wrapping_add(1);

        let xs = self.interpolation.apply(x - x0 as f32);
        let ys = self.interpolation.apply(y - y0 as f32);
        let zs = self.interpolation.apply(z - z0 as f32);

        let xf00 = lerp(value3(seed, x0, y0, z0), value3(seed, x1, y0, z0), xs);
        let xf10 = lerp(value3(seed, x0, y1, z0), value3(seed, x1, y1, z0), xs);
        let xf01 = lerp(value3(seed, x0, y0, z1), value3(seed, x1, y0, z1), xs);
        let xf11 = lerp(value3(seed, x0, y1, z1), value3(seed, x1, y1, z1), xs);

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);
        lerp(yf0, yf1, zs)
    }
}

impl DescribeNoise for ValueNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder
            .noise_type(NoiseType::Value)
            .interpolation(self.interpolation)
    }
}
