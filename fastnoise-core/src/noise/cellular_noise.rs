//! Cellular (Voronoi / Worley) noise.
//!
//! The sampler scans the 3x3 (or 3x3x3) cells around the rounded input. Each
//! cell owns one feature point, displaced from the cell center by a hashed
//! entry of `CELL_2D`/`CELL_3D` scaled per axis by the jitter. The three
//! smallest distances and the winning cell feed the [`CellularReturn`] policy.

use fastnoise_utils::math::tables::{CELL_2D, CELL_3D};
use fastnoise_utils::math::{fast_round, hash2, hash3, value2, value3};

use crate::config::{DistanceType, NoiseBuilder, NoiseType, ReturnType};
use crate::function::{AXIS_FILLER, DistanceFunction, ReturnFunction};
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler};

/// Starting value for the tracked distances.
const FAR_AWAY: f32 = 999_999.0;

/// How the distance between the sample and a feature point is measured.
#[derive(Debug, Clone, Default)]
pub enum DistanceMetric {
    /// Squared euclidean distance.
    #[default]
    Euclidean,
    /// Sum of absolute deltas.
    Manhattan,
    /// Manhattan plus squared euclidean.
    Natural,
    /// User metric over the per-axis deltas.
    Function(DistanceFunction),
}

impl DistanceMetric {
    #[inline]
    fn measure_2d(&self, dx: f32, dy: f32) -> f32 {
        match self {
            Self::Euclidean => dx * dx + dy * dy,
            Self::Manhattan => dx.abs() + dy.abs(),
            Self::Natural => dx.abs() + dy.abs() + dx * dx + dy * dy,
            Self::Function(f) => f.eval_2d(dx, dy),
        }
    }

    #[inline]
    fn measure_3d(&self, dx: f32, dy: f32, dz: f32) -> f32 {
        match self {
            Self::Euclidean => dx * dx + dy * dy + dz * dz,
            Self::Manhattan => dx.abs() + dy.abs() + dz.abs(),
            Self::Natural => dx.abs() + dy.abs() + dz.abs() + dx * dx + dy * dy + dz * dz,
            Self::Function(f) => f.eval_3d(dx, dy, dz),
        }
    }

    /// The selector matching this metric.
    #[must_use]
    pub fn kind(&self) -> DistanceType {
        match self {
            Self::Euclidean => DistanceType::Euclidean,
            Self::Manhattan => DistanceType::Manhattan,
            Self::Natural => DistanceType::Natural,
            Self::Function(_) => DistanceType::Function,
        }
    }
}

/// What a cellular sample returns.
#[derive(Debug, Clone, Default)]
pub enum CellularReturn {
    /// Hash value of the nearest cell.
    #[default]
    CellValue,
    /// The lookup generator sampled at the nearest feature point.
    NoiseLookup(Box<FastNoise>),
    /// `d1 - 1`
    Distance,
    /// `d2 - 1`
    Distance2,
    /// `d2 + d1 - 1`
    Distance2Add,
    /// `d2 - d1 - 1`
    Distance2Sub,
    /// `d2 * d1 - 1`
    Distance2Mul,
    /// `d1 / d2 - 1`
    Distance2Div,
    /// `d3 - 1`
    Distance3,
    /// `d3 + d1 - 1`
    Distance3Add,
    /// `d3 - d1 - 1`
    Distance3Sub,
    /// `d3 * d1 - 1`
    Distance3Mul,
    /// `d1 / d3 - 1`
    Distance3Div,
    /// User function of the nearest cell and the three distances.
    Function(ReturnFunction),
}

impl CellularReturn {
    /// Builds the policy for a distance based or cell value selector.
    ///
    /// `NoiseLookup` and `Function` carry data and cannot be derived from the
    /// selector alone; they map to `CellValue` here.
    #[must_use]
    pub fn from_kind(kind: ReturnType) -> Self {
        match kind {
            ReturnType::CellValue | ReturnType::NoiseLookup | ReturnType::Function => {
                Self::CellValue
            }
            ReturnType::Distance => Self::Distance,
            ReturnType::Distance2 => Self::Distance2,
            ReturnType::Distance2Add => Self::Distance2Add,
            ReturnType::Distance2Sub => Self::Distance2Sub,
            ReturnType::Distance2Mul => Self::Distance2Mul,
            ReturnType::Distance2Div => Self::Distance2Div,
            ReturnType::Distance3 => Self::Distance3,
            ReturnType::Distance3Add => Self::Distance3Add,
            ReturnType::Distance3Sub => Self::Distance3Sub,
            ReturnType::Distance3Mul => Self::Distance3Mul,
            ReturnType::Distance3Div => Self::Distance3Div,
        }
    }

    /// The selector matching this policy.
    #[must_use]
    pub fn kind(&self) -> ReturnType {
        match self {
            Self::CellValue => ReturnType::CellValue,
            Self::NoiseLookup(_) => ReturnType::NoiseLookup,
            Self::Distance => ReturnType::Distance,
            Self::Distance2 => ReturnType::Distance2,
            Self::Distance2Add => ReturnType::Distance2Add,
            Self::Distance2Sub => ReturnType::Distance2Sub,
            Self::Distance2Mul => ReturnType::Distance2Mul,
            Self::Distance2Div => ReturnType::Distance2Div,
            Self::Distance3 => ReturnType::Distance3,
            Self::Distance3Add => ReturnType::Distance3Add,
            Self::Distance3Sub => ReturnType::Distance3Sub,
            Self::Distance3Mul => ReturnType::Distance3Mul,
            Self::Distance3Div => ReturnType::Distance3Div,
            Self::Function(_) => ReturnType::Function,
        }
    }

    /// Distance based output, or `None` for the policies that need the cell.
    #[inline]
    fn distance_output(&self, d: &Nearest) -> Option<f32> {
        let (d1, d2, d3) = (d.first, d.second, d.third);
        Some(match self {
            Self::Distance => d1 - 1.0,
            Self::Distance2 => d2 - 1.0,
            Self::Distance2Add => d2 + d1 - 1.0,
            Self::Distance2Sub => d2 - d1 - 1.0,
            Self::Distance2Mul => d2 * d1 - 1.0,
            Self::Distance2Div => d1 / d2 - 1.0,
            Self::Distance3 => d3 - 1.0,
            Self::Distance3Add => d3 + d1 - 1.0,
            Self::Distance3Sub => d3 - d1 - 1.0,
            Self::Distance3Mul => d3 * d1 - 1.0,
            Self::Distance3Div => d1 / d3 - 1.0,
            Self::CellValue | Self::NoiseLookup(_) | Self::Function(_) => return None,
        })
    }
}

/// The three smallest distances seen so far.
struct Nearest {
    first: f32,
    second: f32,
    third: f32,
}

impl Nearest {
    const fn new() -> Self {
        Self {
            first: FAR_AWAY,
            second: FAR_AWAY,
            third: FAR_AWAY,
        }
    }

    /// Records a distance, returning whether it is the new nearest.
    #[inline]
    fn push(&mut self, d: f32) -> bool {
        self.third = self.third.min(d).max(self.second);
        self.second = self.second.min(d).max(self.first);
        if d < self.first {
            self.first = d;
            true
        } else {
            false
        }
    }
}

/// The lattice coordinates `c - 1`, `c` and `c + 1`.
#[inline]
fn neighbours(c: i32) -> impl Iterator<Item = i32> {
    (-1..=1).map(move |o| c.wrapping_add(o))
}

/// Cellular noise sampler.
#[derive(Debug, Clone)]
pub struct CellularNoise {
    distance: DistanceMetric,
    output: CellularReturn,
    jitter_x: f32,
    jitter_y: f32,
    jitter_z: f32,
}

impl Default for CellularNoise {
    fn default() -> Self {
        Self::new(DistanceMetric::default(), CellularReturn::default(), 1.0, 1.0, 1.0)
    }
}

impl CellularNoise {
    /// Creates a cellular sampler.
    #[must_use]
    pub fn new(
        distance: DistanceMetric,
        output: CellularReturn,
        jitter_x: f32,
        jitter_y: f32,
        jitter_z: f32,
    ) -> Self {
        Self {
            distance,
            output,
            jitter_x,
            jitter_y,
            jitter_z,
        }
    }

    /// The distance metric.
    #[must_use]
    pub fn distance(&self) -> &DistanceMetric {
        &self.distance
    }

    /// The output policy.
    #[must_use]
    pub fn output(&self) -> &CellularReturn {
        &self.output
    }
}

impl NoiseSampler for CellularNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.sample_2d(seed, x, AXIS_FILLER)
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let xr = fast_round(x);
        let yr = fast_round(y);

        let mut nearest = Nearest::new();
        let (mut xc, mut yc) = (0, 0);

        for xi in neighbours(xr) {
            for yi in neighbours(yr) {
                let cell = CELL_2D[(hash2(seed, xi, yi) & 255) as usize];
                let dx = xi as f32 - x + cell.x * self.jitter_x;
                let dy = yi as f32 - y + cell.y * self.jitter_y;
                if nearest.push(self.distance.measure_2d(dx, dy)) {
                    xc = xi;
                    yc = yi;
                }
            }
        }

        if let Some(value) = self.output.distance_output(&nearest) {
            return value;
        }
        match &self.output {
            CellularReturn::NoiseLookup(lookup) => {
                let cell = CELL_2D[(hash2(seed, xc, yc) & 255) as usize];
                lookup.get_noise_2d(
                    xc as f32 + cell.x * self.jitter_x,
                    yc as f32 + cell.y * self.jitter_y,
                )
            }
            CellularReturn::Function(f) => {
                f.eval_2d(xc, yc, nearest.first, nearest.second, nearest.third)
            }
            _ => value2(0, xc, yc),
        }
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let xr = fast_round(x);
        let yr = fast_round(y);
        let zr = fast_round(z);

        let mut nearest = Nearest::new();
        let (mut xc, mut yc, mut zc) = (0, 0, 0);

        for xi in neighbours(xr) {
            for yi in neighbours(yr) {
                for zi in neighbours(zr) {
                    let cell = CELL_3D[(hash3(seed, xi, yi, zi) & 255) as usize];
                    let dx = xi as f32 - x + cell.x * self.jitter_x;
                    let dy = yi as f32 - y + cell.y * self.jitter_y;
                    let dz = zi as f32 - z + cell.z * self.jitter_z;
                    if nearest.push(self.distance.measure_3d(dx, dy, dz)) {
                        xc = xi;
                        yc = yi;
                        zc = zi;
                    }
                }
            }
        }

        if let Some(value) = self.output.distance_output(&nearest) {
            return value;
        }
        match &self.output {
            CellularReturn::NoiseLookup(lookup) => {
                let cell = CELL_3D[(hash3(seed, xc, yc, zc) & 255) as usize];
                lookup.get_noise_3d(
                    xc as f32 + cell.x * self.jitter_x,
                    yc as f32 + cell.y * self.jitter_y,
                    zc as f32 + cell.z * self.jitter_z,
                )
            }
            CellularReturn::Function(f) => {
                f.eval_3d(xc, yc, zc, nearest.first, nearest.second, nearest.third)
            }
            _ => value3(0, xc, yc, zc),
        }
    }
}

impl DescribeNoise for CellularNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        let mut builder = builder
            .noise_type(NoiseType::Cellular)
            .distance(self.distance.kind())
            .cellular_return(self.output.kind())
            .jitter_x(self.jitter_x)
            .jitter_y(self.jitter_y)
            .jitter_z(self.jitter_z);
        if let DistanceMetric::Function(f) = &self.distance {
            builder = builder.distance_function(f.clone());
        }
        match &self.output {
            CellularReturn::NoiseLookup(lookup) => builder.noise_lookup(lookup.to_builder()),
            CellularReturn::Function(f) => builder.return_function(f.clone()),
            _ => builder,
        }
    }
}
