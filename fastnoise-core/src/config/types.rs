//! Selector enums for the noise configuration.
//!
//! These are plain tags. They serialize with the upper snake case names used
//! by external settings layers (`"SIMPLEX2S"`, `"DISTANCE2_ADD"`, ...).

use serde::{Deserialize, Serialize};

use fastnoise_utils::math::{interp_hermite, interp_quintic};

/// The base family of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoiseType {
    /// Interpolated lattice values.
    Value,
    /// Interpolated lattice gradients.
    Perlin,
    /// Classic skewed simplex lattice.
    #[default]
    Simplex,
    /// OpenSimplex2 (fast variant).
    #[serde(rename = "SIMPLEX2")]
    OpenSimplex2,
    /// OpenSimplex2S (smooth variant).
    #[serde(rename = "SIMPLEX2S")]
    OpenSimplex2S,
    /// Voronoi / Worley noise.
    Cellular,
    /// Uncorrelated per-coordinate values.
    White,
    /// Catmull-Rom interpolated lattice values.
    Cubic,
    /// Fractal sum over the first reference.
    Fractal,
    /// Domain warp applied to the first reference.
    Warped,
    /// Reduction over every reference.
    Multi,
}

impl NoiseType {
    /// Whether this family wraps other generators instead of sampling a lattice.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Fractal | Self::Warped | Self::Multi)
    }
}

/// Octave post-processing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FractalType {
    /// No fractal layer.
    #[default]
    None,
    /// Fractional Brownian motion.
    Fbm,
    /// `|f| * 2 - 1` per octave.
    Billow,
    /// `1 - |f|` per octave.
    RigidMulti,
    /// Triangle fold per octave.
    PingPong,
    /// User supplied curve.
    Function,
}

/// Domain warp kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarpType {
    /// No warp layer.
    #[default]
    None,
    /// Interpolated lattice offsets.
    BasicGrid,
    /// OpenSimplex2 gradient field.
    Simplex2,
    /// OpenSimplex2 offsets without the gradient term.
    Simplex2Reduced,
    /// Offsets sampled from the lookup generator.
    NoiseLookup,
}

/// Cellular distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceType {
    /// Squared euclidean distance.
    #[default]
    Euclidean,
    /// Sum of absolute deltas.
    Manhattan,
    /// Manhattan plus squared euclidean.
    Natural,
    /// User supplied metric.
    Function,
}

/// Cellular output policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnType {
    /// Hash value of the nearest cell.
    #[default]
    CellValue,
    /// Lookup generator sampled at the nearest feature point.
    NoiseLookup,
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
    /// User supplied return function.
    Function,
}

/// Reduction applied by a multi generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiType {
    /// Minimum, starting from 1.
    Min,
    /// Maximum, starting from -1.
    Max,
    /// Running maximum from 0 divided by the reference count.
    Avg,
    /// Sequential product.
    Mul,
    /// Sequential quotient skipping zero divisors.
    Div,
    /// Sum.
    #[default]
    Sum,
    /// User supplied reduction.
    Function,
}

/// Interpolation curve for the value and Perlin lattices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationType {
    /// `t`
    Linear,
    /// `3t^2 - 2t^3`
    Hermite,
    /// `6t^5 - 15t^4 + 10t^3`
    #[default]
    Quintic,
}

impl InterpolationType {
    /// Applies the curve to a fractional lattice offset.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::Hermite => interp_hermite(t),
            Self::Quintic => interp_quintic(t),
        }
    }
}
