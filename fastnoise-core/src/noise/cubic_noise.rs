//! Cubic value noise: Catmull-Rom interpolation over a 4-wide value lattice.

use fastnoise_utils::math::{cubic_lerp, fast_floor, value2, value3};

use crate::config::{NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

const CUBIC_2D_BOUNDING: f32 = 1.0 / (1.5 * 1.5);
const CUBIC_3D_BOUNDING: f32 = 1.0 / (1.5 * 1.5 * 1.5);

#[inline]
fn spline(p: [f32; 4], t: f32) -> f32 {
    cubic_lerp(p[0], p[1], p[2], p[3], t)
}

/// Lattice coordinates `floor - 1 ..= floor + 2` around `f`.
#[inline]
fn span(f: f32) -> ([i32; 4], f32) {
    let base = fast_floor(f);
    let cells = std::array::from_fn(|n| base.wrapping_add(n as i32 - 1));
    (cells, f - base as f32)
}

/// Cubic noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicNoise;

impl NoiseSampler for CubicNoise {
    fn sample_1d(&self, _seed: i32, _x: f32) -> f32 {
        0.0
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let (xs, tx) = span(x);
        let (ys, ty) = span(y);
        let rows = ys.map(|yi| spline(xs.map(|xi| value2(seed, xi, yi)), tx));
        spline(rows, ty) * CUBIC_2D_BOUNDING
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let (xs, tx) = span(x);
        let (ys, ty) = span(y);
        let (zs, tz) = span(z);
        let layers = zs.map(|zi| {
            let rows = ys.map(|yi| spline(xs.map(|xi| value3(seed, xi, yi, zi)), tx));
            spline(rows, ty)
        });
        spline(layers, tz) * CUBIC_3D_BOUNDING
    }
}

impl DescribeNoise for CubicNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder.noise_type(NoiseType::Cubic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_passes_through_scaled_lattice_values() {
        // At t = 0 the spline returns its second control point.
        let v = CubicNoise.sample_2d(11, 4.0, -3.0);
        let expected = value2(11, 4, -3) * CUBIC_2D_BOUNDING;
        assert!((v - expected).abs() < 1e-6);

        let v = CubicNoise.sample_3d(11, 4.0, -3.0, 2.0);
        let expected = value3(11, 4, -3, 2) * CUBIC_3D_BOUNDING;
        assert!((v - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_range() {
        for i in 0..2000 {
            let x = (i % 41) as f32 * 0.29;
            let y = (i / 41) as f32 * 0.31;
            assert!(CubicNoise.sample_2d(1337, x, y).abs() <= 1.0);
            assert!(CubicNoise.sample_3d(1337, x, y, x + y).abs() <= 1.0);
        }
    }
}
