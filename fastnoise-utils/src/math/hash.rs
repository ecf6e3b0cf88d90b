//! Integer lattice hashing and the value and gradient lookups built on it.
//!
//! Every multiply wraps on `i32` and every right shift is arithmetic. The
//! samplers key table lookups off specific bit ranges of these hashes, so the
//! exact arithmetic matters more than the statistical quality.

use super::tables::{GRAD_1D, GRAD_2D, GRAD_2D_LONG, GRAD_3D};

/// X prime for the value lattice hash.
pub const PRIME_X: i32 = 1619;
/// Y prime for the value lattice hash.
pub const PRIME_Y: i32 = 31337;
/// Z prime for the value lattice hash.
pub const PRIME_Z: i32 = 6971;

/// X prime applied to OpenSimplex lattice coordinates before hashing.
pub const LATTICE_PRIME_X: i32 = 501_125_321;
/// Y prime applied to OpenSimplex lattice coordinates before hashing.
pub const LATTICE_PRIME_Y: i32 = 1_136_930_381;
/// Z prime applied to OpenSimplex lattice coordinates before hashing.
pub const LATTICE_PRIME_Z: i32 = 1_720_413_743;

const MIXER: i32 = 60493;
const INT_RANGE: f32 = 2_147_483_648.0;

#[inline]
fn mix1(seed: i32, x: i32) -> i32 {
    seed ^ PRIME_X.wrapping_mul(x)
}

#[inline]
fn mix2(seed: i32, x: i32, y: i32) -> i32 {
    mix1(seed, x) ^ PRIME_Y.wrapping_mul(y)
}

#[inline]
fn mix3(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    mix2(seed, x, y) ^ PRIME_Z.wrapping_mul(z)
}

#[inline]
fn cube_scale(n: i32) -> i32 {
    n.wrapping_mul(n).wrapping_mul(n).wrapping_mul(MIXER)
}

#[inline]
fn avalanche(n: i32) -> i32 {
    let h = cube_scale(n);
    (h >> 13) ^ h
}

/// Hashes a 1D lattice point.
#[inline]
#[must_use]
pub fn hash1(seed: i32, x: i32) -> i32 {
    avalanche(mix1(seed, x))
}

/// Hashes a 2D lattice point.
#[inline]
#[must_use]
pub fn hash2(seed: i32, x: i32, y: i32) -> i32 {
    avalanche(mix2(seed, x, y))
}

/// Hashes a 3D lattice point.
#[inline]
#[must_use]
pub fn hash3(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    avalanche(mix3(seed, x, y, z))
}

/// Pseudo-random value in roughly `[-1, 1]` for a 1D lattice point.
#[inline]
#[must_use]
pub fn value1(seed: i32, x: i32) -> f32 {
    cube_scale(mix1(seed, x)) as f32 / INT_RANGE
}

/// Pseudo-random value in roughly `[-1, 1]` for a 2D lattice point.
#[inline]
#[must_use]
pub fn value2(seed: i32, x: i32, y: i32) -> f32 {
    cube_scale(mix2(seed, x, y)) as f32 / INT_RANGE
}

/// Pseudo-random value in roughly `[-1, 1]` for a 3D lattice point.
#[inline]
#[must_use]
pub fn value3(seed: i32, x: i32, y: i32, z: i32) -> f32 {
    cube_scale(mix3(seed, x, y, z)) as f32 / INT_RANGE
}

/// Signed delta for a 1D lattice point.
#[inline]
#[must_use]
pub fn gradient1(seed: i32, x: i32, xd: f32) -> f32 {
    GRAD_1D[(hash1(seed, x) & 1) as usize] * xd
}

/// Dot product of a hashed [`GRAD_2D`] entry with the corner deltas.
#[inline]
#[must_use]
pub fn gradient2(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    GRAD_2D[(hash2(seed, x, y) & 7) as usize].dot(xd, yd)
}

/// Dot product of a hashed [`GRAD_3D`] entry with the corner deltas.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn gradient3(seed: i32, x: i32, y: i32, z: i32, xd: f32, yd: f32, zd: f32) -> f32 {
    GRAD_3D[(hash3(seed, x, y, z) & 15) as usize].dot(xd, yd, zd)
}

/// Dot product against the 128-direction [`GRAD_2D_LONG`] table.
///
/// `x` and `y` are expected to be pre-multiplied by the lattice primes.
#[inline]
#[must_use]
pub fn gradient2_long(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    let index = (hash2(seed, x, y) & (127 << 1)) as usize;
    GRAD_2D_LONG[index] * xd + GRAD_2D_LONG[index | 1] * yd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_wraps_without_panicking() {
        // Large coordinates overflow every intermediate product.
        let h1 = hash3(i32::MAX, i32::MAX, i32::MIN, 123_456_789);
        let h2 = hash3(i32::MAX, i32::MAX, i32::MIN, 123_456_789);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_hash2_known_value() {
        // seed=0 at the origin mixes to zero.
        assert_eq!(hash2(0, 0, 0), 0);
        // seed=1: 1^3 * 60493 = 60493, then (60493 >> 13) ^ 60493.
        assert_eq!(hash2(1, 0, 0), (60493 >> 13) ^ 60493);
    }

    #[test]
    fn test_value_range() {
        for x in -50..50 {
            for y in -50..50 {
                let v = value2(1337, x, y);
                assert!((-1.0..=1.0).contains(&v), "value2 out of range: {v}");
                let v = value3(1337, x, y, x ^ y);
                assert!((-1.0..=1.0).contains(&v), "value3 out of range: {v}");
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_value_depends_on_seed() {
        let differing = (0..32).filter(|&x| value2(1, x, 0) != value2(2, x, 0)).count();
        assert!(differing > 16);
    }

    #[test]
    fn test_gradient1_is_signed_delta() {
        for x in -20..20 {
            let g = gradient1(42, x, 0.25);
            assert!((g.abs() - 0.25).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_gradients_vanish_at_corner() {
        assert!(gradient2(7, 3, 4, 0.0, 0.0).abs() < f32::EPSILON);
        assert!(gradient3(7, 3, 4, 5, 0.0, 0.0, 0.0).abs() < f32::EPSILON);
        assert!(gradient2_long(7, 3, 4, 0.0, 0.0).abs() < f32::EPSILON);
    }
}
