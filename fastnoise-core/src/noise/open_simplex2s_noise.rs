//! OpenSimplex2S, the smooth variant.
//!
//! Same coordinate transforms as [`OpenSimplex2Noise`], but every sample sums
//! a larger neighbourhood with a wider kernel. Slower, and free of the faint
//! grid artifacts of the fast variant.
//!
//! [`OpenSimplex2Noise`]: super::OpenSimplex2Noise

use fastnoise_utils::math::hash::{LATTICE_PRIME_X, LATTICE_PRIME_Y, LATTICE_PRIME_Z};
use fastnoise_utils::math::{fast_floor, gradient2, gradient3};

use super::open_simplex2_noise::{G2, quartic};
use crate::config::{NoiseBuilder, NoiseType};
use crate::generator::{DescribeNoise, NoiseSampler};

const PRIME_X_2: i32 = LATTICE_PRIME_X << 1;
const PRIME_Y_2: i32 = LATTICE_PRIME_Y << 1;
const PRIME_Z_2: i32 = LATTICE_PRIME_Z << 1;

/// Seed offset for the second of the two interleaved 3D grids.
const SECOND_GRID_SEED: i32 = 1_293_373;

const RADIUS_2D: f32 = 2.0 / 3.0;
const SCALE_2D: f32 = 18.241_962;
const SCALE_3D: f32 = 9.046_026;

/// OpenSimplex2S noise sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSimplex2SNoise;

impl NoiseSampler for OpenSimplex2SNoise {
    fn sample_1d(&self, _seed: i32, _x: f32) -> f32 {
        0.0
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let i = fast_floor(x);
        let j = fast_floor(y);
        let xi = x - i as f32;
        let yi = y - j as f32;

        let i = i.wrapping_mul(LATTICE_PRIME_X);
        let j = j.wrapping_mul(LATTICE_PRIME_Y);
        let i1 = i.wrapping_add(LATTICE_PRIME_X);
        let j1 = j.wrapping_add(LATTICE_PRIME_Y);

        let t = (xi + yi) * G2;
        let x0 = xi - t;
        let y0 = yi - t;

        // Contribution of an optional corner, zero outside the kernel.
        let corner = |ci: i32, cj: i32, xd: f32, yd: f32| {
            let a = RADIUS_2D - xd * xd - yd * yd;
            if a > 0.0 {
                quartic(a) * gradient2(seed, ci, cj, xd, yd)
            } else {
                0.0
            }
        };

        let a0 = RADIUS_2D - x0 * x0 - y0 * y0;
        let mut value = quartic(a0) * gradient2(seed, i, j, x0, y0);

        let a1 = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
            + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a0);
        let x1 = x0 - (1.0 - 2.0 * G2);
        let y1 = y0 - (1.0 - 2.0 * G2);
        value += quartic(a1) * gradient2(seed, i1, j1, x1, y1);

        let xmyi = xi - yi;
        if t > G2 {
            value += if xi + xmyi > 1.0 {
                corner(
                    i.wrapping_add(PRIME_X_2),
                    j1,
                    x0 + 3.0 * G2 - 2.0,
                    y0 + 3.0 * G2 - 1.0,
                )
            } else {
                corner(i, j1, x0 + G2, y0 + G2 - 1.0)
            };
            value += if yi - xmyi > 1.0 {
                corner(
                    i1,
                    j.wrapping_add(PRIME_Y_2),
                    x0 + 3.0 * G2 - 1.0,
                    y0 + 3.0 * G2 - 2.0,
                )
            } else {
                corner(i1, j, x0 + G2 - 1.0, y0 + G2)
            };
        } else {
            value += if xi + xmyi < 0.0 {
                corner(
                    i.wrapping_sub(LATTICE_PRIME_X),
                    j,
                    x0 + 1.0 - G2,
                    y0 - G2,
                )
            } else {
                corner(i1, j, x0 + G2 - 1.0, y0 + G2)
            };
            value += if yi < xmyi {
                corner(
                    i,
                    j.wrapping_sub(LATTICE_PRIME_Y),
                    x0 - G2,
                    y0 - (G2 - 1.0),
                )
            } else {
                corner(i, j1, x0 + G2, y0 + G2 - 1.0)
            };
        }

        value * SCALE_2D
    }

    #[allow(clippy::similar_names, clippy::too_many_lines)]
    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let i = fast_floor(x);
        let j = fast_floor(y);
        let k = fast_floor(z);
        let xi = x - i as f32;
        let yi = y - j as f32;
        let zi = z - k as f32;

        let i = i.wrapping_mul(LATTICE_PRIME_X);
        let j = j.wrapping_mul(LATTICE_PRIME_Y);
        let k = k.wrapping_mul(LATTICE_PRIME_Z);
        let seed2 = seed.wrapping_add(SECOND_GRID_SEED);

        // Each mask is 0 or -1 depending on which half of the cell we are in.
        let x_mask = (-0.5 - xi) as i32;
        let y_mask = (-0.5 - yi) as i32;
        let z_mask = (-0.5 - zi) as i32;
        let x_sign = (x_mask | 1) as f32;
        let y_sign = (y_mask | 1) as f32;
        let z_sign = (z_mask | 1) as f32;

        let x0 = xi + x_mask as f32;
        let y0 = yi + y_mask as f32;
        let z0 = zi + z_mask as f32;
        let a0 = 0.75 - x0 * x0 - y0 * y0 - z0 * z0;
        let mut value = quartic(a0)
            * gradient3(
                seed,
                i.wrapping_add(x_mask & LATTICE_PRIME_X),
                j.wrapping_add(y_mask & LATTICE_PRIME_Y),
                k.wrapping_add(z_mask & LATTICE_PRIME_Z),
                x0,
                y0,
                z0,
            );

        let x1 = xi - 0.5;
        let y1 = yi - 0.5;
        let z1 = zi - 0.5;
        let a1 = 0.75 - x1 * x1 - y1 * y1 - z1 * z1;
        value += quartic(a1)
            * gradient3(
                seed2,
                i.wrapping_add(LATTICE_PRIME_X),
                j.wrapping_add(LATTICE_PRIME_Y),
                k.wrapping_add(LATTICE_PRIME_Z),
                x1,
                y1,
                z1,
            );

        let x_flip0 = ((x_mask | 1) << 1) as f32 * x1;
        let y_flip0 = ((y_mask | 1) << 1) as f32 * y1;
        let z_flip0 = ((z_mask | 1) << 1) as f32 * z1;
        let x_flip1 = (-2 - (x_mask << 2)) as f32 * x1 - 1.0;
        let y_flip1 = (-2 - (y_mask << 2)) as f32 * y1 - 1.0;
        let z_flip1 = (-2 - (z_mask << 2)) as f32 * z1 - 1.0;

        // Lattice coordinates on the first grid, near or far side per axis.
        let near_i = i.wrapping_add(x_mask & LATTICE_PRIME_X);
        let near_j = j.wrapping_add(y_mask & LATTICE_PRIME_Y);
        let near_k = k.wrapping_add(z_mask & LATTICE_PRIME_Z);
        let far_i = i.wrapping_add(!x_mask & LATTICE_PRIME_X);
        let far_j = j.wrapping_add(!y_mask & LATTICE_PRIME_Y);
        let far_k = k.wrapping_add(!z_mask & LATTICE_PRIME_Z);

        // Lattice coordinates on the second grid.
        let mid_i = i.wrapping_add(LATTICE_PRIME_X);
        let mid_j = j.wrapping_add(LATTICE_PRIME_Y);
        let mid_k = k.wrapping_add(LATTICE_PRIME_Z);
        let out_i = i.wrapping_add(x_mask & PRIME_X_2);
        let out_j = j.wrapping_add(y_mask & PRIME_Y_2);
        let out_k = k.wrapping_add(z_mask & PRIME_Z_2);

        let mut skip_x = false;
        let a2 = x_flip0 + a0;
        if a2 > 0.0 {
            value += quartic(a2) * gradient3(seed, far_i, near_j, near_k, x0 - x_sign, y0, z0);
        } else {
            let a3 = y_flip0 + z_flip0 + a0;
            if a3 > 0.0 {
                value += quartic(a3)
                    * gradient3(seed, near_i, far_j, far_k, x0, y0 - y_sign, z0 - z_sign);
            }
            let a4 = x_flip1 + a1;
            if a4 > 0.0 {
                value += quartic(a4) * gradient3(seed2, out_i, mid_j, mid_k, x_sign + x1, y1, z1);
                skip_x = true;
            }
        }

        let mut skip_y = false;
        let a6 = y_flip0 + a0;
        if a6 > 0.0 {
            value += quartic(a6) * gradient3(seed, near_i, far_j, near_k, x0, y0 - y_sign, z0);
        } else {
            let a7 = x_flip0 + z_flip0 + a0;
            if a7 > 0.0 {
                value += quartic(a7)
                    * gradient3(seed, far_i, near_j, far_k, x0 - x_sign, y0, z0 - z_sign);
            }
            let a8 = y_flip1 + a1;
            if a8 > 0.0 {
                value += quartic(a8) * gradient3(seed2, mid_i, out_j, mid_k, x1, y_sign + y1, z1);
                skip_y = true;
            }
        }

        let mut skip_z = false;
        let a_a = z_flip0 + a0;
        if a_a > 0.0 {
            value += quartic(a_a) * gradient3(seed, near_i, near_j, far_k, x0, y0, z0 - z_sign);
        } else {
            let a_b = x_flip0 + y_flip0 + a0;
            if a_b > 0.0 {
                value += quartic(a_b)
                    * gradient3(seed, far_i, far_j, near_k, x0 - x_sign, y0 - y_sign, z0);
            }
            let a_c = z_flip1 + a1;
            if a_c > 0.0 {
                value += quartic(a_c) * gradient3(seed2, mid_i, mid_j, out_k, x1, y1, z_sign + z1);
                skip_z = true;
            }
        }

        if !skip_x {
            let a5 = y_flip1 + z_flip1 + a1;
            if a5 > 0.0 {
                value += quartic(a5)
                    * gradient3(seed2, mid_i, out_j, out_k, x1, y_sign + y1, z_sign + z1);
            }
        }
        if !skip_y {
            let a9 = x_flip1 + z_flip1 + a1;
            if a9 > 0.0 {
                value += quartic(a9)
                    * gradient3(seed2, out_i, mid_j, out_k, x_sign + x1, y1, z_sign + z1);
            }
        }
        if !skip_z {
            let a_d = x_flip1 + y_flip1 + a1;
            if a_d > 0.0 {
                value += quartic(a_d)
                    * gradient3(seed2, out_i, out_j, mid_k, x_sign + x1, y_sign + y1, z1);
            }
        }

        value * SCALE_3D
    }
}

impl DescribeNoise for OpenSimplex2SNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        builder.noise_type(NoiseType::OpenSimplex2S)
    }
}
