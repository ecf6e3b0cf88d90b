//! Gradient (Perlin) noise on the integer lattice.
//!
//! Each corner contributes the dot product of a hashed gradient with the
//! offset from that corner; the contributions are blended with the configured
//! interpolation curve.

use fastnoise_utils::math::{fast_floor, gradient1, gradient2, gradient3, lerp};

use crate::config::{InterpolationType, NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

/// Scales the 1D gradient sum to roughly `[-1, 1]`.
const PERLIN_1D_BOUNDING: f32 = 2.088_418_9;

/// Perlin noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerlinNoise {
    interpolation: InterpolationType,
}

impl PerlinNoise {
    /// Creates a sampler using the given interpolation curve.
    #[must_use]
    pub const fn new(interpolation: InterpolationType) -> Self {
        Self { interpolation }
    }
}

impl NoiseSampler for PerlinNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        let x0 = fast_floor(x);
        let xd0 = x - x0 as f32;
        let xs = self.interpolation.apply(xd0);

        let grad_a = gradient1(seed, x0, xd0);
        let grad_b = gradient1(seed, x0.wrapping_add(1), xd0 - 1.0);
        PERLIN_1D_BOUNDING * lerp(grad_a, grad_b, xs)
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let xs = self.interpolation.apply(xd0);
        let ys = self.interpolation.apply(yd0);

        let xf0 = lerp(
            gradient2(seed, x0, y0, xd0, yd0),
            gradient2(seed, x1, y0, xd1, yd0),
            xs,
        );
        let xf1 = lerp(
            gradient2(seed, x0, y1, xd0, yd1),
            gradient2(seed, x1, y1, xd1, yd1),
            xs,
        );
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

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let zd0 = z - z0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;
        let zd1 = zd0 - 1.0;

        let xs = self.interpolation.apply(xd0);
        let ys = self.interpolation.apply(yd0);
        let zs = self.interpolation.apply(zd0);

        let xf00 = lerp(
            gradient3(seed, x0, y0, z0, xd0, yd0, zd0),
            gradient3(seed, x1, y0, z0, xd1, yd0, zd0),
            xs,
        );
        let xf10 = lerp(
            gradient3(seed, x0, y1, z0, xd0, yd1, zd0),
            gradient3(seed, x1, y1, z0, xd1, yd1, zd0),
            xs,
        );
        let xf01 = lerp(
            gradient3(seed, x0, y0, z1, xd0, yd0, zd1),
            gradient3(seed, x1, y0, z1, xd1, yd0, zd1),
            xs,
        );
        let xf11 = lerp(
            gradient3(seed, x0, y1, z1, xd0, yd1, zd1),
            gradient3(seed, x1, y1, z1, xd1, yd1, zd1),
            xs,
        );

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);
        lerp(yf0, yf1, zs)
    }
}

impl DescribeNoise for PerlinNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder
            .noise_type(NoiseType::Perlin)
            .interpolation(self.interpolation)
    }
}
