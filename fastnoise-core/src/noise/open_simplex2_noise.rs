//! OpenSimplex2, the fast variant.
//!
//! Coordinates reach the sampler already transformed: 2D input is skewed onto
//! the simplex lattice by [`skew_2d`] and 3D input is rotated by [`rotate_3d`]
//! so that the two offset cube grids line up with the axes. [`FastNoise`]
//! applies the transform before offsets and frequency.
//!
//! [`FastNoise`]: crate::FastNoise

use fastnoise_utils::math::hash::{LATTICE_PRIME_X, LATTICE_PRIME_Y, LATTICE_PRIME_Z};
use fastnoise_utils::math::{fast_floor, fast_round, gradient2_long, gradient3};

use crate::config::{NoiseBuilder, NoiseType};
use crate::function::AXIS_FILLER;
use crate::generator::{DescribeNoise, NoiseSampler};

pub(crate) const SQRT3: f32 = 1.732_050_8;
pub(crate) const F2: f32 = 0.5 * (SQRT3 - 1.0);
pub(crate) const G2: f32 = (3.0 - SQRT3) / 6.0;
pub(crate) const R3: f32 = 2.0 / 3.0;

const SCALE_2D: f32 = 99.836_85;
const SCALE_3D: f32 = 32.694_283;

/// Skews a 2D point onto the simplex lattice.
#[inline]
#[must_use]
pub fn skew_2d(x: f32, y: f32) -> (f32, f32) {
    let s = (x + y) * F2;
    (x + s, y + s)
}

/// Rotates a 3D point so the body diagonal of the cube grid points up.
#[inline]
#[must_use]
pub fn rotate_3d(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let r = (x + y + z) * R3;
    (r - x, r - y, r - z)
}

#[inline]
pub(crate) fn quartic(a: f32) -> f32 {
    (a * a) * (a * a)
}

/// OpenSimplex2 noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSimplex2Noise;

impl NoiseSampler for OpenSimplex2Noise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.sample_2d(seed, x, AXIS_FILLER)
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let i = fast_floor(x);
        let j = fast_floor(y);
        let xi = x - i as f32;
        let yi = y - j as f32;

        let t = (xi + yi) * G2;
        let x0 = xi - t;
        let y0 = yi - t;

        let i = i.wrapping_mul(LATTICE_PRIME_X);
        let j = j.wrapping_mul(LATTICE_PRIME_Y);

        let a = 0.5 - x0 * x0 - y0 * y0;
        let n0 = if a <= 0.0 {
            0.0
        } else {
            quartic(a) * gradient2_long(seed, i, j, x0, y0)
        };

        let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
            + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a);
        let n2 = if c <= 0.0 {
            0.0
        } else {
            let x2 = x0 + (2.0 * G2 - 1.0);
            let y2 = y0 + (2.0 * G2 - 1.0);
            quartic(c)
                * gradient2_long(
                    seed,
                    i.wrapping_add(LATTICE_PRIME_X),
                    j.wrapping_add(LATTICE_PRIME_Y),
                    x2,
                    y2,
                )
        };

        let (x1, y1, ci, cj) = if y0 > x0 {
            (x0 + G2, y0 + G2 - 1.0, i, j.wrapping_add(LATTICE_PRIME_Y))
        } else {
            (x0 + G2 - 1.0, y0 + G2, i.wrapping_add(LATTICE_PRIME_X), j)
        };
        let b = 0.5 - x1 * x1 - y1 * y1;
        let n1 = if b <= 0.0 {
            0.0
        } else {
            quartic(b) * gradient2_long(seed, ci, cj, x1, y1)
        };

        (n0 + n1 + n2) * SCALE_2D
    }

    #[allow(clippy::similar_names)]
    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let i = fast_round(x);
        let j = fast_round(y);
        let k = fast_round(z);
        let mut x0 = x - i as f32;
        let mut y0 = y - j as f32;
        let mut z0 = z - k as f32;

        let mut x_sign = (-1.0 - x0) as i32 | 1;
        let mut y_sign = (-1.0 - y0) as i32 | 1;
        let mut z_sign = (-1.0 - z0) as i32 | 1;

        let mut ax0 = x_sign as f32 * -x0;
        let mut ay0 = y_sign as f32 * -y0;
        let mut az0 = z_sign as f32 * -z0;

        let mut i = i.wrapping_mul(LATTICE_PRIME_X);
        let mut j = j.wrapping_mul(LATTICE_PRIME_Y);
        let mut k = k.wrapping_mul(LATTICE_PRIME_Z);
        let mut seed = seed;

        let mut value = 0.0;
        let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);

        for pass in 0..2 {
            if a > 0.0 {
                value += quartic(a) * gradient3(seed, i, j, k, x0, y0, z0);
            }

            // The nearest of the three neighbours along the dominant axis.
            if ax0 >= ay0 && ax0 >= az0 {
                let b = a + ax0 + ax0;
                if b > 1.0 {
                    let b = b - 1.0;
                    let ci = i.wrapping_sub(x_sign.wrapping_mul(LATTICE_PRIME_X));
                    value += quartic(b) * gradient3(seed, ci, j, k, x0 + x_sign as f32, y0, z0);
                }
            } else if ay0 > ax0 && ay0 >= az0 {
                let b = a + ay0 + ay0;
                if b > 1.0 {
                    let b = b - 1.0;
                    let cj = j.wrapping_sub(y_sign.wrapping_mul(LATTICE_PRIME_Y));
                    value += quartic(b) * gradient3(seed, i, cj, k, x0, y0 + y_sign as f32, z0);
                }
            } else {
                let b = a + az0 + az0;
                if b > 1.0 {
                    let b = b - 1.0;
                    let ck = k.wrapping_sub(z_sign.wrapping_mul(LATTICE_PRIME_Z));
                    value += quartic(b) * gradient3(seed, i, j, ck, x0, y0, z0 + z_sign as f32);
                }
            }

            if pass == 1 {
                break;
            }

            // Step to the second, half-offset grid.
            ax0 = 0.5 - ax0;
            ay0 = 0.5 - ay0;
            az0 = 0.5 - az0;

            x0 = x_sign as f32 * ax0;
            y0 = y_sign as f32 * ay0;
            z0 = z_sign as f32 * az0;

            a += (0.75 - ax0) - (ay0 + az0);

            i = i.wrapping_add((x_sign >> 1) & LATTICE_PRIME_X);
            j = j.wrapping_add((y_sign >> 1) & LATTICE_PRIME_Y);
            k = k.wrapping_add((z_sign >> 1) & LATTICE_PRIME_Z);

            x_sign = -x_sign;
            y_sign = -y_sign;
            z_sign = -z_sign;

            seed = !seed;
        }

        value * SCALE_3D
    }
}

impl DescribeNoise for OpenSimplex2Noise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder.noise_type(NoiseType::OpenSimplex2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_and_rotate() {
        let (sx, sy) = skew_2d(1.0, 1.0);
        assert!((sx - (1.0 + 2.0 * F2)).abs() < 1e-6);
        assert!((sx - sy).abs() < f32::EPSILON);

        // A point on the body diagonal stays on it.
        let (rx, ry, rz) = rotate_3d(1.0, 1.0, 1.0);
        assert!((rx - 1.0).abs() < 1e-6);
        assert!((ry - rz).abs() < f32::EPSILON);
    }

    #[test]
    fn test_open_simplex2_range() {
        let noise = OpenSimplex2Noise;
        let mut peak = 0.0_f32;
        for i in 0..3000 {
            let x = (i % 61) as f32 * 0.377 - 11.0;
            let y = (i / 61) as f32 * 0.411 + 3.0;
            let v2 = noise.sample_2d(1337, x, y);
            let v3 = noise.sample_3d(1337, x, y, x - y);
            peak = peak.max(v2.abs()).max(v3.abs());
            assert!(v2.abs() <= 1.1, "2D value {v2}");
            assert!(v3.abs() <= 1.1, "3D value {v3}");
        }
        assert!(peak > 0.1);
    }

    #[test]
    fn test_open_simplex2_1d_uses_filler_axis() {
        let noise = OpenSimplex2Noise;
        let a = noise.sample_1d(9, 4.2);
        let b = noise.sample_2d(9, 4.2, AXIS_FILLER);
        assert!((a - b).abs() < f32::EPSILON);
    }
}
