//! Gradient and cell-vector lookup tables.
//!
//! The small gradient tables are literal constants. The longer tables are
//! derived once from closed-form sequences and cached in a [`LazyLock`]; they
//! are never mutated afterwards.
//!
//! The derived tables are golden-angle and Fibonacci-sphere point sets, not
//! the upstream FastNoise constants. OpenSimplex2, cellular and warped output
//! is stable across builds of this crate but does not match other FastNoise
//! implementations for the same seed.
//!
//! The "long" tables are stored interleaved (`x, y` or `x, y, z, 0`) so that a
//! masked hash such as `hash & (127 << 1)` indexes the first component
//! directly.

use std::f64::consts::PI;
use std::sync::LazyLock;

use super::vector::{Vector2, Vector3};

/// Magnitude of the jittered cellular feature offsets.
pub const CELL_JITTER_RADIUS: f32 = 0.45;

/// 1D gradients.
pub const GRAD_1D: [f32; 2] = [1.0, -1.0];

/// 2D gradients for value-lattice Perlin and simplex noise.
pub const GRAD_2D: [Vector2; 8] = [
    Vector2::new(-1.0, -1.0),
    Vector2::new(1.0, -1.0),
    Vector2::new(-1.0, 1.0),
    Vector2::new(1.0, 1.0),
    Vector2::new(0.0, -1.0),
    Vector2::new(-1.0, 0.0),
    Vector2::new(0.0, 1.0),
    Vector2::new(1.0, 0.0),
];

/// 3D gradients: the twelve cube edges padded to sixteen.
pub const GRAD_3D: [Vector3; 16] = [
    Vector3::new(1.0, 1.0, 0.0),
    Vector3::new(-1.0, 1.0, 0.0),
    Vector3::new(1.0, -1.0, 0.0),
    Vector3::new(-1.0, -1.0, 0.0),
    Vector3::new(1.0, 0.0, 1.0),
    Vector3::new(-1.0, 0.0, 1.0),
    Vector3::new(1.0, 0.0, -1.0),
    Vector3::new(-1.0, 0.0, -1.0),
    Vector3::new(0.0, 1.0, 1.0),
    Vector3::new(0.0, -1.0, 1.0),
    Vector3::new(0.0, 1.0, -1.0),
    Vector3::new(0.0, -1.0, -1.0),
    Vector3::new(1.0, 1.0, 0.0),
    Vector3::new(0.0, -1.0, 1.0),
    Vector3::new(-1.0, 1.0, 0.0),
    Vector3::new(0.0, -1.0, -1.0),
];

/// Twelve cube edge directions, the base of [`GRAD_3D_LONG`].
const CUBE_EDGES: [[f32; 3]; 12] = [
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
];

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// 128 interleaved 2D gradients used by OpenSimplex2 and the simplex warps.
///
/// Twenty-four directions at `7.5 + 15k` degrees repeated five times, followed
/// by the eight directions at `22.5 + 45k` degrees.
pub static GRAD_2D_LONG: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut table = [0.0; 256];
    for i in 0..120 {
        let theta = (7.5 + 15.0 * (i % 24) as f64).to_radians();
        table[i * 2] = theta.sin() as f32;
        table[i * 2 + 1] = theta.cos() as f32;
    }
    for k in 0..8 {
        let theta = (22.5 + 45.0 * k as f64).to_radians();
        table[240 + k * 2] = theta.sin() as f32;
        table[240 + k * 2 + 1] = theta.cos() as f32;
    }
    table
});

/// 64 interleaved 3D gradients with stride 4, used by the simplex warps.
pub static GRAD_3D_LONG: LazyLock<[f32; 256]> = LazyLock::new(|| {
    const TAIL: [[f32; 3]; 4] = [
        [1.0, 1.0, 0.0],
        [0.0, -1.0, 1.0],
        [-1.0, 1.0, 0.0],
        [0.0, -1.0, -1.0],
    ];
    let mut table = [0.0; 256];
    for i in 0..64 {
        let g = if i < 60 { CUBE_EDGES[i % 12] } else { TAIL[i - 60] };
        table[i * 4..i * 4 + 3].copy_from_slice(&g);
    }
    table
});

fn unit_circle(i: usize) -> (f64, f64) {
    let theta = i as f64 * GOLDEN_ANGLE;
    (theta.cos(), theta.sin())
}

fn unit_sphere(i: usize, n: usize) -> (f64, f64, f64) {
    let z = 1.0 - (2.0 * i as f64 + 1.0) / n as f64;
    let r = (1.0 - z * z).sqrt();
    let theta = i as f64 * GOLDEN_ANGLE + PI / 4.0;
    (r * theta.cos(), r * theta.sin(), z)
}

/// 256 feature offsets for cellular noise and basic grid warping.
pub static CELL_2D: LazyLock<[Vector2; 256]> = LazyLock::new(|| {
    let radius = f64::from(CELL_JITTER_RADIUS);
    std::array::from_fn(|i| {
        let (x, y) = unit_circle(i);
        Vector2::new((x * radius) as f32, (y * radius) as f32)
    })
});

/// 256 feature offsets for 3D cellular noise and basic grid warping.
pub static CELL_3D: LazyLock<[Vector3; 256]> = LazyLock::new(|| {
    let radius = f64::from(CELL_JITTER_RADIUS);
    std::array::from_fn(|i| {
        let (x, y, z) = unit_sphere(i, 256);
        Vector3::new((x * radius) as f32, (y * radius) as f32, (z * radius) as f32)
    })
});

/// 256 interleaved unit vectors for the simplex warps.
pub static CELL_2D_LONG: LazyLock<[f32; 512]> = LazyLock::new(|| {
    let mut table = [0.0; 512];
    for i in 0..256 {
        let (x, y) = unit_circle(i);
        table[i * 2] = x as f32;
        table[i * 2 + 1] = y as f32;
    }
    table
});

/// 256 interleaved unit vectors with stride 4 for the 3D simplex warps.
pub static CELL_3D_LONG: LazyLock<[f32; 1024]> = LazyLock::new(|| {
    let mut table = [0.0; 1024];
    for i in 0..256 {
        let (x, y, z) = unit_sphere(i, 256);
        table[i * 4] = x as f32;
        table[i * 4 + 1] = y as f32;
        table[i * 4 + 2] = z as f32;
    }
    table
});
