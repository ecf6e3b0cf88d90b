//! Scalar helpers shared by every noise family.
//!
//! All of these operate on `f32` and `i32` because the lattice hashes rely on
//! 32-bit wrapping arithmetic. Casts from `f32` truncate toward zero and
//! saturate, so the floor and round helpers below correct the sign manually.

/// Floors a float to the lattice cell containing it.
#[inline]
#[must_use]
pub fn fast_floor(f: f32) -> i32 {
    if f >= 0.0 {
        f as i32
    } else {
        (f as i32).wrapping_sub(1)
    }
}

/// Rounds a float to the nearest lattice point, halves away from zero.
#[inline]
#[must_use]
pub fn fast_round(f: f32) -> i32 {
    if f >= 0.0 {
        (f + 0.5) as i32
    } else {
        (f - 0.5) as i32
    }
}

/// Linear interpolation.
///
/// Formula: a + t * (b - a)
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Cubic Hermite curve.
///
/// Formula: 3t^2 - 2t^3
#[inline]
#[must_use]
pub fn interp_hermite(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic smoothstep.
///
/// Formula: 6t^5 - 15t^4 + 10t^3
#[inline]
#[must_use]
pub fn interp_quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Four point cubic interpolation between `b` and `c`.
///
/// `a` and `d` are the outer neighbours used to derive the tangents.
#[inline]
#[must_use]
pub fn cubic_lerp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

/// Folds the raw bit pattern of a float into a lattice coordinate.
///
/// Used by white noise so that every distinct float lands in its own cell.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn cast_float_to_int(f: f32) -> i32 {
    let i = f.to_bits() as i32;
    i ^ (i >> 16)
}

/// Normalization factor for a fractal sum.
///
/// Returns `1 / (1 + gain + gain^2 + ... + gain^(octaves - 1))`, so an
/// octave count of zero or one yields exactly `1.0`.
#[must_use]
pub fn fractal_bounding(gain: f32, octaves: u32) -> f32 {
    let mut amp = gain;
    let mut amp_fractal = 1.0;
    for _ in 1..octaves {
        amp_fractal += amp;
        amp *= gain;
    }
    1.0 / amp_fractal
}

/// Triangle wave with period 2, mapping `t` into `[0, 1]`.
#[inline]
#[must_use]
pub fn ping_pong(t: f32) -> f32 {
    let t = t - ((t * 0.5) as i32 * 2) as f32;
    if t < 1.0 { t } else { 2.0 - t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_floor() {
        assert_eq!(fast_floor(0.0), 0);
        assert_eq!(fast_floor(1.5), 1);
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(-1.5), -2);
        assert_eq!(fast_floor(1e10), i32::MAX);
    }

    #[test]
    fn test_fast_round() {
        assert_eq!(fast_round(0.49), 0);
        assert_eq!(fast_round(0.5), 1);
        assert_eq!(fast_round(-0.5), -1);
        assert_eq!(fast_round(-1.49), -1);
        assert_eq!(fast_round(2.51), 3);
    }

    #[test]
    fn test_interpolation_endpoints() {
        for curve in [interp_hermite, interp_quintic] {
            assert!(curve(0.0).abs() < 1e-7);
            assert!((curve(1.0) - 1.0).abs() < 1e-7);
            assert!((curve(0.5) - 0.5).abs() < 1e-7);
        }
        assert!((lerp(2.0, 4.0, 0.25) - 2.5).abs() < 1e-7);
    }

    #[test]
    fn test_cubic_lerp_passes_through_control_points() {
        assert!((cubic_lerp(0.0, 1.0, 2.0, 3.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((cubic_lerp(0.0, 1.0, 2.0, 3.0, 1.0) - 2.0).abs() < 1e-6);
        // A straight line stays a straight line.
        assert!((cubic_lerp(0.0, 1.0, 2.0, 3.0, 0.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_fractal_bounding() {
        assert_eq!(fractal_bounding(0.5, 0), 1.0);
        assert_eq!(fractal_bounding(0.5, 1), 1.0);
        assert!((fractal_bounding(0.5, 2) - 1.0 / 1.5).abs() < 1e-7);
        assert!((fractal_bounding(0.5, 3) - 1.0 / 1.75).abs() < 1e-7);
    }

    #[test]
    fn test_ping_pong() {
        assert!((ping_pong(0.25) - 0.25).abs() < 1e-7);
        assert!((ping_pong(1.5) - 0.5).abs() < 1e-7);
        assert!((ping_pong(2.25) - 0.25).abs() < 1e-7);
        assert!((ping_pong(3.75) - 0.25).abs() < 1e-7);
    }

    #[test]
    fn test_cast_float_to_int_distinguishes_neighbours() {
        assert_ne!(cast_float_to_int(1.0), cast_float_to_int(1.000_001));
        assert_eq!(cast_float_to_int(0.0), 0);
    }
}
