//! Classic simplex noise.
//!
//! Input is skewed onto the simplex lattice, the containing simplex is found by
//! ordering the fractional offsets, and every corner within range contributes
//! `t^4 * gradient` where `t = r^2 - d^2`.

use fastnoise_utils::math::{fast_floor, gradient2, gradient3};

use crate::config::{NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

const F2: f32 = 1.0 / 2.0;
const G2: f32 = 1.0 / 4.0;
const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;
const G33: f32 = G3 * 3.0 - 1.0;

const RADIUS_2D: f32 = 0.5;
const RADIUS_3D: f32 = 0.6;
const SCALE_2D: f32 = 50.0;
const SCALE_3D: f32 = 32.0;

/// Quartic falloff weight, or `None` when the corner is out of range.
#[inline]
fn falloff(radius: f32, dist_sq: f32) -> Option<f32> {
    let t = radius - dist_sq;
    if t < 0.0 {
        None
    } else {
        let t = t * t;
        Some(t * t)
    }
}

/// Simplex noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexNoise;

impl NoiseSampler for SimplexNoise {
    fn sample_1d(&self, _seed: i32, _x: f32) -> f32 {
        0.0
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let t = (x + y) * F2;
        let i = fast_floor(x + t);
        let j = fast_floor(y + t);

        let t = i.wrapping_add(j) as f32 * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + F2;
        let y2 = y0 - 1.0 + F2;

        let corner = |xd: f32, yd: f32, ci: i32, cj: i32| {
            falloff(RADIUS_2D, xd * xd + yd * yd)
                .map_or(0.0, |w| w * gradient2(seed, ci, cj, xd, yd))
        };

        let n0 = corner(x0, y0, i, j);
        let n1 = corner(x1, y1, i.wrapping_add(i1), j.wrapping_add(j1));
        let n2 = corner(x2, y2, i.wrapping_add(1), j.wrapping_add(1));
        SCALE_2D * (n0 + n1 + n2)
    }

    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let t = (x + y + z) * F3;
        let i = fast_floor(x + t);
        let j = fast_floor(y + t);
        let k = fast_floor(z + t);

        let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        // Second and third corner offsets, picked by the order of the deltas.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - i1 as f32 + G3;
        let y1 = y0 - j1 as f32 + G3;
        let z1 = z0 - k1 as f32 + G3;
        let x2 = x0 - i2 as f32 + F3;
        let y2 = y0 - j2 as f32 + F3;
        let z2 = z0 - k2 as f32 + F3;
        let x3 = x0 + G33;
        let y3 = y0 + G33;
        let z3 = z0 + G33;

        let corner = |xd: f32, yd: f32, zd: f32, ci: i32, cj: i32, ck: i32| {
            falloff(RADIUS_3D, xd * xd + yd * yd + zd * zd)
                .map_or(0.0, |w| w * gradient3(seed, ci, cj, ck, xd, yd, zd))
        };

        let n0 = corner(x0, y0, z0, i, j, k);
        let n1 = corner(
            x1,
            y1,
            z1,
            i.wrapping_add(i1),
            j.wrapping_add(j1),
            k.wrapping_add(k1),
        );
        let n2 = corner(
            x2,
            y2,
            z2,
            i.wrapping_add(i2),
            j.wrapping_add(j2),
            k.wrapping_add(k2),
        );
        let n3 = corner(
            x3,
            y3,
            z3,
            i.wrapping_add(1),
            j.wrapping_add(1),
            k.wrapping_add(1),
        );
        SCALE_3D * (n0 + n1 + n2 + n3)
    }
}

impl DescribeNoise for SimplexNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder.noise_type(NoiseType::Simplex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_range() {
        let noise = SimplexNoise;
        let mut max_seen = 0.0_f32;
        for i in 0..4000 {
            let x = (i % 97) as f32 * 0.731 - 30.0;
            let y = (i / 97) as f32 * 0.593 - 10.0;
            let v = noise.sample_2d(1337, x, y);
            max_seen = max_seen.max(v.abs());
            assert!(v.abs() <= 1.05, "2D value {v} at ({x}, {y})");
            let v = noise.sample_3d(1337, x, y, x * 0.3 + y * 0.2);
            assert!(v.abs() <= 1.05, "3D value {v} at ({x}, {y})");
        }
        assert!(max_seen > 0.1, "simplex output is suspiciously flat");
    }

    #[test]
    fn test_simplex_deterministic() {
        let a = SimplexNoise.sample_3d(5, 1.25, -2.5, 3.75);
        let b = SimplexNoise.sample_3d(5, 1.25, -2.5, 3.75);
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_simplex_has_no_1d_form() {
        assert_eq!(SimplexNoise.sample_1d(5, 3.0), 0.0);
    }
}
