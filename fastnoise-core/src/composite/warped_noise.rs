//! Domain warping.
//!
//! A warped node displaces its input with an auxiliary field before handing
//! it to the reference. The warp runs in raw coordinate space, after offsets
//! and before the node's frequency, using its own amplitude and frequency.

use fastnoise_utils::math::hash::{LATTICE_PRIME_X, LATTICE_PRIME_Y, LATTICE_PRIME_Z};
use fastnoise_utils::math::tables::{
    CELL_2D, CELL_2D_LONG, CELL_3D, CELL_3D_LONG, CELL_JITTER_RADIUS, GRAD_2D_LONG, GRAD_3D_LONG,
};
use fastnoise_utils::math::{fast_floor, fast_round, hash2, hash3, interp_hermite, lerp};

use crate::config::{NoiseBuilder, NoiseType, WarpType};
use crate::function::AXIS_FILLER;
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler, NoiseSettings};
use crate::noise::open_simplex2_noise::{G2, quartic, rotate_3d, skew_2d};

const SIMPLEX2_SCALE_2D: f32 = 38.283_688;
const SIMPLEX2_SCALE_3D: f32 = 32.694_283;
const REDUCED_SCALE_2D: f32 = 16.0;
const REDUCED_SCALE_3D: f32 = 7.716_049;

/// Seed step between the two interleaved 3D lattices.
const SECOND_GRID_SEED: i32 = 1_293_373;

/// The displacement field.
#[derive(Debug, Clone)]
pub enum WarpKernel {
    /// Hermite interpolated cell vectors.
    BasicGrid,
    /// OpenSimplex2 gradient field.
    Simplex2,
    /// OpenSimplex2 corners without the gradient term.
    Simplex2Reduced,
    /// Axis-sequential offsets sampled from a lookup generator.
    NoiseLookup(Box<FastNoise>),
}

impl WarpKernel {
    /// The selector matching this kernel.
    #[must_use]
    pub fn kind(&self) -> WarpType {
        match self {
            Self::BasicGrid => WarpType::BasicGrid,
            Self::Simplex2 => WarpType::Simplex2,
            Self::Simplex2Reduced => WarpType::Simplex2Reduced,
            Self::NoiseLookup(_) => WarpType::NoiseLookup,
        }
    }
}

/// Visits every OpenSimplex2 corner in range of a skewed 2D point.
///
/// The callback receives the falloff weight, the prime-multiplied lattice
/// coordinates and the deltas from the corner.
fn for_each_corner_2d(x: f32, y: f32, mut visit: impl FnMut(f32, i32, i32, f32, f32)) {
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
    if a > 0.0 {
        visit(quartic(a), i, j, x0, y0);
    }

    let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
        + ((-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2)) + a);
    if c > 0.0 {
        visit(
            quartic(c),
            i.wrapping_add(LATTICE_PRIME_X),
            j.wrapping_add(LATTICE_PRIME_Y),
            x0 + (2.0 * G2 - 1.0),
            y0 + (2.0 * G2 - 1.0),
        );
    }

    let (x1, y1, ci, cj) = if y0 > x0 {
        (x0 + G2, y0 + (G2 - 1.0), i, j.wrapping_add(LATTICE_PRIME_Y))
    } else {
        (x0 + (G2 - 1.0), y0 + G2, i.wrapping_add(LATTICE_PRIME_X), j)
    };
    let b = 0.5 - x1 * x1 - y1 * y1;
    if b > 0.0 {
        visit(quartic(b), ci, cj, x1, y1);
    }
}

/// One OpenSimplex2 corner in 3D.
struct Corner3 {
    seed: i32,
    weight: f32,
    i: i32,
    j: i32,
    k: i32,
    dx: f32,
    dy: f32,
    dz: f32,
}

/// Visits every corner of both rotated cube lattices in range of a 3D point.
#[allow(clippy::similar_names)]
fn for_each_corner_3d(seed: i32, x: f32, y: f32, z: f32, mut visit: impl FnMut(Corner3)) {
    let i = fast_round(x);
    let j = fast_round(y);
    let k = fast_round(z);
    let mut x0 = x - i as f32;
    let mut y0 = y - j as f32;
    let mut z0 = z - k as f32;

    let mut x_sign = (-x0 - 1.0) as i32 | 1;
    let mut y_sign = (-y0 - 1.0) as i32 | 1;
    let mut z_sign = (-z0 - 1.0) as i32 | 1;

    let mut ax0 = x_sign as f32 * -x0;
    let mut ay0 = y_sign as f32 * -y0;
    let mut az0 = z_sign as f32 * -z0;

    let mut i = i.wrapping_mul(LATTICE_PRIME_X);
    let mut j = j.wrapping_mul(LATTICE_PRIME_Y);
    let mut k = k.wrapping_mul(LATTICE_PRIME_Z);
    let mut seed = seed;

    let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);

    for pass in 0..2 {
        if a > 0.0 {
            visit(Corner3 {
                seed,
                weight: quartic(a),
                i,
                j,
                k,
                dx: x0,
                dy: y0,
                dz: z0,
            });
        }

        let mut corner = Corner3 {
            seed,
            weight: a,
            i,
            j,
            k,
            dx: x0,
            dy: y0,
            dz: z0,
        };
        if ax0 >= ay0 && ax0 >= az0 {
            corner.dx += x_sign as f32;
            corner.weight += ax0 + ax0;
            corner.i = i.wrapping_sub(x_sign.wrapping_mul(LATTICE_PRIME_X));
        } else if ay0 > ax0 && ay0 >= az0 {
            corner.dy += y_sign as f32;
            corner.weight += ay0 + ay0;
            corner.j = j.wrapping_sub(y_sign.wrapping_mul(LATTICE_PRIME_Y));
        } else {
            corner.dz += z_sign as f32;
            corner.weight += az0 + az0;
            corner.k = k.wrapping_sub(z_sign.wrapping_mul(LATTICE_PRIME_Z));
        }
        if corner.weight > 1.0 {
            corner.weight = quartic(corner.weight - 1.0);
            visit(corner);
        }

        if pass == 1 {
            break;
        }

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

        seed = seed.wrapping_add(SECOND_GRID_SEED);
    }
}

/// Warps the input of a reference generator.
#[derive(Debug, Clone)]
pub struct WarpedNoise {
    reference: Box<FastNoise>,
    kernel: WarpKernel,
    amplitude: [f32; 3],
    frequency: [f32; 3],
}

impl WarpedNoise {
    /// Creates a warp over `reference` with per-axis amplitude and frequency.
    #[must_use]
    pub fn new(
        reference: FastNoise,
        kernel: WarpKernel,
        amplitude: [f32; 3],
        frequency: [f32; 3],
    ) -> Self {
        Self {
            reference: Box::new(reference),
            kernel,
            amplitude,
            frequency,
        }
    }

    /// The wrapped generator.
    #[must_use]
    pub fn reference(&self) -> &FastNoise {
        &self.reference
    }

    /// The displacement field.
    #[must_use]
    pub fn kernel(&self) -> &WarpKernel {
        &self.kernel
    }

    /// Displaces a 2D point.
    #[must_use]
    pub fn warp_2d(&self, seed: i32, x: f32, y: f32) -> (f32, f32) {
        let [amp_x, amp_y, _] = self.amplitude;
        let [freq_x, freq_y, _] = self.frequency;
        match &self.kernel {
            WarpKernel::BasicGrid => {
                let xf = x * freq_x;
                let yf = y * freq_y;
                let x0 = fast_floor(xf);
                let y0 = fast_floor(yf);
                let x1 = x0.wrapping_add(1);
                let y1 = y0.wrapping_add(1);
                let xs = interp_hermite(xf - x0 as f32);
                let ys = interp_hermite(yf - y0 as f32);

                let cell = |cx, cy| CELL_2D[(hash2(seed, cx, cy) & 255) as usize];
                let (a, b) = (cell(x0, y0), cell(x1, y0));
                let lx0 = lerp(a.x, b.x, xs);
                let ly0 = lerp(a.y, b.y, xs);
                let (a, b) = (cell(x0, y1), cell(x1, y1));
                let lx1 = lerp(a.x, b.x, xs);
                let ly1 = lerp(a.y, b.y, xs);

                (
                    x + lerp(lx0, lx1, ys) * (amp_x / CELL_JITTER_RADIUS),
                    y + lerp(ly0, ly1, ys) * (amp_y / CELL_JITTER_RADIUS),
                )
            }
            WarpKernel::Simplex2 => {
                let (xs, ys) = skew_2d(x * freq_x, y * freq_y);
                let (mut vx, mut vy) = (0.0, 0.0);
                for_each_corner_2d(xs, ys, |w, i, j, dx, dy| {
                    let h = hash2(seed, i, j);
                    let g = (h & (127 << 1)) as usize;
                    let o = ((h >> 7) & (255 << 1)) as usize;
                    let value = dx * GRAD_2D_LONG[g] + dy * GRAD_2D_LONG[g | 1];
                    vx += w * value * CELL_2D_LONG[o];
                    vy += w * value * CELL_2D_LONG[o | 1];
                });
                (
                    x + vx * amp_x * SIMPLEX2_SCALE_2D,
                    y + vy * amp_y * SIMPLEX2_SCALE_2D,
                )
            }
            WarpKernel::Simplex2Reduced => {
                let (xs, ys) = skew_2d(x * freq_x, y * freq_y);
                let (mut vx, mut vy) = (0.0, 0.0);
                for_each_corner_2d(xs, ys, |w, i, j, _, _| {
                    let o = (hash2(seed, i, j) & (255 << 1)) as usize;
                    vx += w * CELL_2D_LONG[o];
                    vy += w * CELL_2D_LONG[o | 1];
                });
                (
                    x + vx * amp_x * REDUCED_SCALE_2D,
                    y + vy * amp_y * REDUCED_SCALE_2D,
                )
            }
            WarpKernel::NoiseLookup(lookup) => {
                let x = x + lookup.sample_2d(seed, x * freq_x, y * freq_y) * amp_x;
                let y = y + lookup.sample_2d(seed.wrapping_add(1), x * freq_x, y * freq_y) * amp_y;
                (x, y)
            }
        }
    }

    /// Displaces a 3D point.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn warp_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let [amp_x, amp_y, amp_z] = self.amplitude;
        let [freq_x, freq_y, freq_z] = self.frequency;
        match &self.kernel {
            WarpKernel::BasicGrid => {
                let xf = x * freq_x;
                let yf = y * freq_y;
                let zf = z * freq_z;
                let x0 = fast_floor(xf);
                let y0 = fast_floor(yf);
                let z0 = fast_floor(zf);
                let x1 = x0.wrapping_add(1);
                let y1 = y0.wrapping_add(1);
                let z1 = z0.wrapping_add(1);
                let xs = interp_hermite(xf - x0 as f32);
                let ys = interp_hermite(yf - y0 as f32);
                let zs = interp_hermite(zf - z0 as f32);

                let cell = |cx, cy, cz| CELL_3D[(hash3(seed, cx, cy, cz) & 255) as usize];
                // Bilinear blend of one z layer, per component.
                let layer = |cz| {
                    let (a, b) = (cell(x0, y0, cz), cell(x1, y0, cz));
                    let (c, d) = (cell(x0, y1, cz), cell(x1, y1, cz));
                    [
                        lerp(lerp(a.x, b.x, xs), lerp(c.x, d.x, xs), ys),
                        lerp(lerp(a.y, b.y, xs), lerp(c.y, d.y, xs), ys),
                        lerp(lerp(a.z, b.z, xs), lerp(c.z, d.z, xs), ys),
                    ]
                };
                let near = layer(z0);
                let far = layer(z1);

                (
                    x + lerp(near[0], far[0], zs) * (amp_x / CELL_JITTER_RADIUS),
                    y + lerp(near[1], far[1], zs) * (amp_y / CELL_JITTER_RADIUS),
                    z + lerp(near[2], far[2], zs) * (amp_z / CELL_JITTER_RADIUS),
                )
            }
            WarpKernel::Simplex2 => {
                let (xr, yr, zr) = rotate_3d(x * freq_x, y * freq_y, z * freq_z);
                let (mut vx, mut vy, mut vz) = (0.0, 0.0, 0.0);
                for_each_corner_3d(seed, xr, yr, zr, |c| {
                    let h = hash3(c.seed, c.i, c.j, c.k);
                    let g = (h & (63 << 2)) as usize;
                    let o = ((h >> 6) & (255 << 2)) as usize;
                    let value = c.dx * GRAD_3D_LONG[g]
                        + c.dy * GRAD_3D_LONG[g | 1]
                        + c.dz * GRAD_3D_LONG[g | 2];
                    vx += c.weight * value * CELL_3D_LONG[o];
                    vy += c.weight * value * CELL_3D_LONG[o | 1];
                    vz += c.weight * value * CELL_3D_LONG[o | 2];
                });
                (
                    x + vx * (amp_x * SIMPLEX2_SCALE_3D),
                    y + vy * (amp_y * SIMPLEX2_SCALE_3D),
                    z + vz * (amp_z * SIMPLEX2_SCALE_3D),
                )
            }
            WarpKernel::Simplex2Reduced => {
                let (xr, yr, zr) = rotate_3d(x * freq_x, y * freq_y, z * freq_z);
                let (mut vx, mut vy, mut vz) = (0.0, 0.0, 0.0);
                for_each_corner_3d(seed, xr, yr, zr, |c| {
                    let o = (hash3(c.seed, c.i, c.j, c.k) & (255 << 2)) as usize;
                    vx += c.weight * CELL_3D_LONG[o];
                    vy += c.weight * CELL_3D_LONG[o | 1];
                    vz += c.weight * CELL_3D_LONG[o | 2];
                });
                (
                    x + vx * (amp_x * REDUCED_SCALE_3D),
                    y + vy * (amp_y * REDUCED_SCALE_3D),
                    z + vz * (amp_z * REDUCED_SCALE_3D),
                )
            }
            WarpKernel::NoiseLookup(lookup) => {
                let x = x + lookup.sample_3d(seed, x * freq_x, y * freq_y, z * freq_z) * amp_x;
                let y = y
                    + lookup.sample_3d(seed.wrapping_add(1), x * freq_x, y * freq_y, z * freq_z)
                        * amp_y;
                let z = z
                    + lookup.sample_3d(seed.wrapping_add(2), x * freq_x, y * freq_y, z * freq_z)
                        * amp_z;
                (x, y, z)
            }
        }
    }

    /// Facade sampling: offsets, warp, then the node's frequency.
    #[must_use]
    pub fn noise_2d(&self, settings: &NoiseSettings, x: f32, y: f32) -> f32 {
        let (x, y) = self.warp_2d(settings.seed, x + settings.offset_x, y + settings.offset_y);
        self.reference
            .sample_2d(settings.seed, x * settings.frequency_x, y * settings.frequency_y)
    }

    /// Facade sampling: offsets, warp, then the node's frequency.
    #[must_use]
    pub fn noise_3d(&self, settings: &NoiseSettings, x: f32, y: f32, z: f32) -> f32 {
        let (x, y, z) = self.warp_3d(
            settings.seed,
            x + settings.offset_x,
            y + settings.offset_y,
            z + settings.offset_z,
        );
        self.reference.sample_3d(
            settings.seed,
            x * settings.frequency_x,
            y * settings.frequency_y,
            z * settings.frequency_z,
        )
    }
}

impl NoiseSampler for WarpedNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.sample_2d(seed, x, AXIS_FILLER)
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let (x, y) = self.warp_2d(seed, x, y);
        self.reference.sample_2d(seed, x, y)
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let (x, y, z) = self.warp_3d(seed, x, y, z);
        self.reference.sample_3d(seed, x, y, z)
    }
}

impl DescribeNoise for WarpedNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        let [amp_x, amp_y, amp_z] = self.amplitude;
        let [freq_x, freq_y, freq_z] = self.frequency;
        let builder = builder
            .noise_type(NoiseType::Warped)
            .reference(self.reference.to_builder())
            .warp(self.kernel.kind())
            .warp_amplitude_x(amp_x)
            .warp_amplitude_y(amp_y)
            .warp_amplitude_z(amp_z)
            .warp_frequency_x(freq_x)
            .warp_frequency_y(freq_y)
            .warp_frequency_z(freq_z);
        match &self.kernel {
            WarpKernel::NoiseLookup(lookup) => builder.noise_lookup(lookup.to_builder()),
            _ => builder,
        }
    }
}
